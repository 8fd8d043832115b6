//! Tests for the `keiho-extractor` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture_path(dir: &str, name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(dir)
        .join(name)
}

fn extractor() -> Command {
    Command::cargo_bin("keiho-extractor").unwrap()
}

#[test]
fn test_segment_writes_golden_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("kenpo.json");

    extractor()
        .arg("segment")
        .arg("--input")
        .arg(fixture_path("kenpo", "kenpo.txt"))
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to:"));

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        fs::read_to_string(fixture_path("kenpo", "kenpo.json")).unwrap()
    );
}

#[test]
fn test_segment_defaults_to_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::copy(fixture_path("kenpo", "kenpo.txt"), dir.path().join("kenpo.txt")).unwrap();

    extractor()
        .current_dir(dir.path())
        .arg("segment")
        .assert()
        .success();

    assert!(dir.path().join("kenpo.json").exists());
}

#[test]
fn test_segment_check_against_golden() {
    extractor()
        .arg("segment")
        .arg("-i")
        .arg(fixture_path("kenpo", "kenpo.txt"))
        .arg("-o")
        .arg(fixture_path("kenpo", "kenpo.json"))
        .arg("--check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Up to date:"));
}

#[test]
fn test_segment_check_detects_stale_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("kenpo.json");
    fs::write(&output, "[]\n").unwrap();

    extractor()
        .arg("segment")
        .arg("-i")
        .arg(fixture_path("kenpo", "kenpo.txt"))
        .arg("-o")
        .arg(&output)
        .arg("--check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of date"));
}

#[test]
fn test_segment_missing_input_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("kenpo.json");

    extractor()
        .arg("segment")
        .arg("-i")
        .arg(dir.path().join("missing.txt"))
        .arg("-o")
        .arg(&output)
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: Failed to read input"));

    assert!(!output.exists());
}

#[test]
fn test_xml_to_stdout() {
    let output = extractor()
        .arg("xml")
        .arg("-i")
        .arg(fixture_path("keiho", "keiho.xml"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(4));
    assert_eq!(value[3]["title"], "第百九十九条");
    assert_eq!(value[3]["caption"], "殺人");
}

#[test]
fn test_xml_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("keiho.json");

    extractor()
        .arg("xml")
        .arg("-i")
        .arg(fixture_path("keiho", "keiho.xml"))
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("[\n  {\n    \"title\": \"第一条\""));
}

#[test]
fn test_xml_malformed_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.xml");
    fs::write(&input, "<Law><MainProvision>").unwrap();

    extractor()
        .arg("xml")
        .arg("-i")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("XML parsing failed"));
}
