//! Field deserializers that degrade instead of failing.
//!
//! A catalog value of the wrong JSON type becomes absent (or empty) rather
//! than rejecting the surrounding document. Used through
//! `#[serde(deserialize_with = "...")]` on the catalog records.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use crate::types::Tenor;

/// Either a well-typed value or anything else, consumed and discarded.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Invalid(IgnoredAny),
}

impl<T> Lenient<T> {
    fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }
}

/// Tenors arrive as integers, but integral floats such as `5.0` are accepted.
#[derive(Deserialize)]
#[serde(untagged)]
enum TenorRepr {
    Whole(Tenor),
    Float(f64),
    Invalid(IgnoredAny),
}

/// A value of type `T`, or `None` for null and mistyped input.
pub(crate) fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Lenient::<T>::deserialize(deserializer)?.into_option())
}

/// A string, or empty for null and mistyped input.
pub(crate) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional(deserializer)?.unwrap_or_default())
}

/// A non-negative whole number of years.
pub(crate) fn tenor<'de, D>(deserializer: D) -> Result<Option<Tenor>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match TenorRepr::deserialize(deserializer)? {
        TenorRepr::Whole(years) => Some(years),
        TenorRepr::Float(years)
            if years.fract() == 0.0 && (0.0..=f64::from(Tenor::MAX)).contains(&years) =>
        {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Some(years as Tenor)
        }
        TenorRepr::Float(_) | TenorRepr::Invalid(_) => None,
    })
}

/// A list whose malformed elements are dropped; `None` if it is not a list.
pub(crate) fn list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Lenient::<Vec<Lenient<T>>>::deserialize(deserializer)?
        .into_option()
        .map(|items| items.into_iter().filter_map(Lenient::into_option).collect()))
}

/// A list whose malformed elements are dropped. The container itself must
/// still be a list.
pub(crate) fn elements<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = Vec::<Lenient<T>>::deserialize(deserializer)?;
    Ok(items.into_iter().filter_map(Lenient::into_option).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Record {
        #[serde(default, deserialize_with = "tenor")]
        years: Option<Tenor>,
        #[serde(default, deserialize_with = "optional")]
        price: Option<f64>,
        #[serde(default, deserialize_with = "string")]
        name: String,
    }

    fn read(json: &str) -> Record {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_tenor_accepts_integral_floats() {
        assert_eq!(read(r#"{"years": 5}"#).years, Some(5));
        assert_eq!(read(r#"{"years": 5.0}"#).years, Some(5));
        assert_eq!(read(r#"{"years": 5.5}"#).years, None);
        assert_eq!(read(r#"{"years": -1}"#).years, None);
        assert_eq!(read(r#"{"years": "5"}"#).years, None);
        assert_eq!(read(r#"{"years": null}"#).years, None);
    }

    #[test]
    fn test_mistyped_price_is_absent() {
        assert_eq!(read(r#"{"price": 120}"#).price, Some(120.0));
        assert_eq!(read(r#"{"price": 4.25}"#).price, Some(4.25));
        assert_eq!(read(r#"{"price": "n/a"}"#).price, None);
        assert_eq!(read(r#"{"price": [1, 2]}"#).price, None);
        assert_eq!(read(r#"{"price": {"bp": 1}}"#).price, None);
    }

    #[test]
    fn test_mistyped_string_is_empty() {
        assert_eq!(read(r#"{"name": "Acme"}"#).name, "Acme");
        assert_eq!(read(r#"{"name": 42}"#).name, "");
        assert_eq!(read(r#"{"name": null}"#).name, "");
        assert_eq!(read("{}").name, "");
    }
}
