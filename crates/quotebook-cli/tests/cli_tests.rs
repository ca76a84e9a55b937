//! End-to-end tests for the `quotebook` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const CATALOG: &str = r#"{
    "Items": [
        {
            "Id": "1",
            "DateSent": "2023-03-01",
            "Company": "Acme Corp",
            "Preferred": "1",
            "Quote": [
                { "Currency": "USD", "Years": 5, "CouponType": "FIX", "Spread": 120, "Yield": 4.5 },
                { "Currency": "USD", "Years": 10, "CouponType": "FIX", "Spread": 150 },
                { "Currency": "EUR", "Years": 3, "CouponType": "FRN", "3MLSpread": 40 }
            ]
        },
        {
            "Id": "2",
            "DateSent": "2023-05-01",
            "Company": "Other Co",
            "Preferred": "2",
            "Quote": [
                { "Currency": "USD", "Years": 5, "CouponType": "FIX", "Spread": 100 },
                { "Currency": "USD", "Years": 5, "CouponType": "FRN", "Spread": 80 }
            ]
        },
        { "Id": "3", "DateSent": "2023-06-01", "Company": "Nothing Ltd", "Quote": null }
    ]
}"#;

/// Working directory with the catalog and no config file.
fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("quotes.json"), CATALOG).unwrap();
    dir
}

fn quotebook(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("quotebook").unwrap();
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_rows_json_sorted_newest_first() {
    let dir = workspace();
    let output = quotebook(dir.path())
        .args(["--format", "json", "rows", "quotes.json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let companies: Vec<&str> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["company"].as_str().unwrap())
        .collect();
    assert_eq!(companies, vec!["Other Co", "Acme Corp", "Nothing Ltd"]);

    let cells = rows[1]["cells"].as_array().unwrap();
    assert_eq!(cells.len(), 3);
    assert_eq!(cells[0]["years"], 5);
    assert_eq!(cells[0]["coupon_type"], "FIX");
    assert_eq!(cells[0]["display"], "+120bp");
    assert_eq!(cells[1]["display"], "-");
}

#[test]
fn test_rows_csv_with_search() {
    let dir = workspace();
    quotebook(dir.path())
        .args(["--format", "csv", "rows", "quotes.json", "--search", "ACME"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Company,Date Sent,Preferred,5Y FIX,10Y FIX",
        ))
        .stdout(predicate::str::contains("Acme Corp,2023-03-01,1,+120bp,+150bp"))
        .stdout(predicate::str::contains("Other Co").not());
}

#[test]
fn test_rows_table_by_company() {
    let dir = workspace();
    quotebook(dir.path())
        .args([
            "rows",
            "quotes.json",
            "--sort",
            "company",
            "--order",
            "asc",
            "--years",
            "5",
            "--field",
            "yield",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("USD quotes (Yield)"))
        .stdout(predicate::str::contains("4.500%"))
        .stdout(predicate::str::contains("10Y FIX").not());
}

#[test]
fn test_stats_json() {
    let dir = workspace();
    let output = quotebook(dir.path())
        .args(["--format", "json", "stats", "quotes.json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let stats = stats.as_array().unwrap();
    assert_eq!(stats.len(), 3);
    assert_eq!(stats[0]["years"], 5);
    assert_eq!(stats[0]["coupon_type"], "FIX");
    assert_eq!(stats[0]["count"], 2);
    assert_eq!(stats[0]["average"], 110.0);
    assert_eq!(stats[0]["minimum"], 100.0);
}

#[test]
fn test_stats_table_reports_best() {
    let dir = workspace();
    quotebook(dir.path())
        .args(["stats", "quotes.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+110bp"))
        .stdout(predicate::str::contains("Best: +80bp at 5Y FRN"));
}

#[test]
fn test_currencies_minimal() {
    let dir = workspace();
    quotebook(dir.path())
        .args(["--format", "minimal", "currencies", "quotes.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("USD\t2\t5Y 10Y"))
        .stdout(predicate::str::contains("EUR\t1\t3Y"));
}

#[test]
fn test_config_file_in_working_directory() {
    let dir = workspace();
    std::fs::write(
        dir.path().join("quotebook.toml"),
        "[board]\ndefault_currency = \"EUR\"\nfield = \"3MLSpread\"\n",
    )
    .unwrap();

    quotebook(dir.path())
        .args(["--format", "csv", "rows", "quotes.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Company,Date Sent,Preferred,3Y FRN"))
        .stdout(predicate::str::contains("Acme Corp,2023-03-01,1,+40bp"))
        .stdout(predicate::str::contains("Other Co,2023-05-01,2,-"));
}

#[test]
fn test_flags_override_config() {
    let dir = workspace();
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, "[board]\ndefault_currency = \"EUR\"\n").unwrap();

    quotebook(dir.path())
        .args(["--format", "csv", "--config"])
        .arg(&config)
        .args(["rows", "quotes.json", "--currency", "USD"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5Y FIX,5Y FRN,10Y FIX"));
}

#[test]
fn test_currency_matches_catalog_verbatim() {
    let dir = workspace();
    std::fs::write(
        dir.path().join("lower.json"),
        r#"{ "Items": [ { "Company": "Lower Co", "DateSent": "2023-01-01",
              "Quote": [ { "Currency": "usd", "Years": 7, "CouponType": "FIX", "Spread": 65 } ] } ] }"#,
    )
    .unwrap();

    quotebook(dir.path())
        .args(["--format", "csv", "rows", "lower.json", "--currency", "usd"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lower Co,2023-01-01,,+65bp"));

    quotebook(dir.path())
        .args(["rows", "lower.json", "--currency", "USD"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No entry is quoted in USD"));
}

#[test]
fn test_unquoted_currency_warns() {
    let dir = workspace();
    quotebook(dir.path())
        .args(["rows", "quotes.json", "--currency", "JPY"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No entry is quoted in JPY"));
}

#[test]
fn test_missing_catalog_fails() {
    let dir = workspace();
    quotebook(dir.path())
        .args(["rows", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read catalog"));
}

#[test]
fn test_invalid_sort_column_fails() {
    let dir = workspace();
    quotebook(dir.path())
        .args(["rows", "quotes.json", "--sort", "price"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("price"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = workspace();
    std::fs::write(
        dir.path().join("quotebook.toml"),
        "[board]\nsearch_debounce_ms = 60000\n",
    )
    .unwrap();

    quotebook(dir.path())
        .args(["rows", "quotes.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
