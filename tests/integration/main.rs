//! Integration tests for the brickset CLI
//!
//! These tests run the binary end to end: resolve config, load the data
//! source once, print the report.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper function to create a brickset command
fn brickset() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("brickset"))
}

/// Helper to create an isolated working directory with an empty config,
/// so neither a local nor a global config leaks into the test
fn isolated_dir() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("empty.toml");
    fs::write(&config, "").unwrap();
    (temp, config)
}

/// Helper to write a data file
fn write_data(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

const SMALL_CATALOG: &str = r#"[
  {"number": "1-1", "name": "Rocket", "pieces": 250, "packagingType": "Box",
   "tags": ["Space", "Microscale"], "theme": "City", "subtheme": "Space"},
  {"number": "2-1", "name": "Ada", "pieces": 199, "packagingType": "Polybag",
   "tags": null, "theme": "Ice", "subtheme": null},
  {"number": "3-1", "name": "Rock Crusher", "packagingType": "Box",
   "tags": [], "theme": "Art", "subtheme": "Mining"}
]"#;

// =============================================================================
// REPORT TESTS
// =============================================================================

#[test]
fn test_report_with_bundled_data() {
    let (temp, config) = isolated_dir();

    brickset()
        .arg("--config")
        .arg(&config)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 20 set(s) from bundled brickset.json"))
        .stdout(predicate::str::contains("16315"))
        .stdout(predicate::str::contains("Rock Monster"))
        .stdout(predicate::str::contains("Rock Raiders HQ"));
}

#[test]
fn test_report_with_data_file() {
    let (temp, config) = isolated_dir();
    let data = write_data(temp.path(), "sets.json", SMALL_CATALOG);

    brickset()
        .arg("--config")
        .arg(&config)
        .arg("--data")
        .arg(&data)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 3 set(s)"))
        .stdout(predicate::str::contains("Sum of all pieces"))
        .stdout(predicate::str::contains("449"))
        .stdout(predicate::str::contains("Ice"));
}

#[test]
fn test_report_json_output() {
    let (temp, config) = isolated_dir();
    let data = write_data(temp.path(), "sets.json", SMALL_CATALOG);

    let output = brickset()
        .arg("--json")
        .arg("--config")
        .arg(&config)
        .arg("--data")
        .arg(&data)
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["sets_loaded"], 3);

    let sections = json["sections"].as_array().unwrap();
    let value = |key: &str| {
        sections
            .iter()
            .find(|s| s["key"] == key)
            .map(|s| s["value"].clone())
            .unwrap()
    };
    assert_eq!(value("numbers_with_at_most_tags"), serde_json::json!(["1-1", "3-1"]));
    assert_eq!(value("count_with_tag"), serde_json::json!(1));
    assert_eq!(value("names_with_same_first_and_last"), serde_json::json!(["Ada", "Rock Crusher"]));
    assert_eq!(value("packaging_type_summary"), serde_json::json!({"Box": 2, "Polybag": 1}));
    assert_eq!(value("sum_of_pieces"), serde_json::json!(449));
    assert_eq!(value("shortest_theme"), serde_json::json!("Ice"));
    assert_eq!(value("all_have_at_least_200_pieces"), serde_json::json!(false));
    assert_eq!(value("sorted_distinct_tags_with_subtheme"), serde_json::json!(["Microscale", "Space"]));
}

#[test]
fn test_report_empty_catalog() {
    let (temp, config) = isolated_dir();
    let data = write_data(temp.path(), "empty.json", "[]");

    brickset()
        .arg("--config")
        .arg(&config)
        .arg("--data")
        .arg(&data)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("(no result)"))
        .stdout(predicate::str::contains("true"));
}

#[test]
fn test_report_parameter_overrides() {
    let (temp, config) = isolated_dir();
    let data = write_data(temp.path(), "sets.json", SMALL_CATALOG);

    brickset()
        .arg("--config")
        .arg(&config)
        .arg("--data")
        .arg(&data)
        .args(["report", "--tag", "Space", "--prefix", "ADA", "--max-tags", "0"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of sets tagged 'Space'"))
        .stdout(predicate::str::contains("Set names starting with 'ADA'"))
        .stdout(predicate::str::contains("Set numbers with at most 0 tag(s)"));
}

#[test]
fn test_config_file_supplies_data_and_params() {
    let temp = TempDir::new().unwrap();
    let data = write_data(temp.path(), "sets.json", SMALL_CATALOG);
    fs::write(
        temp.path().join("brickset.toml"),
        format!(
            "[data]\npath = {:?}\n\n[queries]\ntag = \"Space\"\n",
            data.display().to_string()
        ),
    )
    .unwrap();

    brickset()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 3 set(s)"))
        .stdout(predicate::str::contains("Number of sets tagged 'Space'"));
}

// =============================================================================
// FAILURE TESTS
// =============================================================================

#[test]
fn test_missing_data_file_is_fatal() {
    let (temp, config) = isolated_dir();

    brickset()
        .arg("--config")
        .arg(&config)
        .arg("--data")
        .arg(temp.path().join("missing.json"))
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Failed to load sets from"));
}

#[test]
fn test_malformed_data_file_is_fatal() {
    let (temp, config) = isolated_dir();
    let data = write_data(temp.path(), "bad.json", "[{\"number\": 1}]");

    brickset()
        .arg("--config")
        .arg(&config)
        .arg("--data")
        .arg(&data)
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed data"));
}

#[test]
fn test_invalid_config_is_fatal() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("bad.toml");
    fs::write(&config, "[queries\n").unwrap();

    brickset()
        .arg("--config")
        .arg(&config)
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config file"));
}

// =============================================================================
// MISC
// =============================================================================

#[test]
fn test_version() {
    brickset()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("brickset v"));
}
