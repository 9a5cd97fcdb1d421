use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn sml() -> Command {
    Command::cargo_bin("sml").expect("Binary 'sml' should build")
}

#[test]
fn test_read_prints_summary() {
    let dir = tempdir().expect("Failed to create temp dir");
    fs::write(
        dir.path().join("catalog.yml"),
        "object_type: catalog\nlabel: \"Sales\"\nunique_name: \"sales\"\n",
    )
    .expect("Failed to write catalog");
    fs::write(
        dir.path().join("age.yml"),
        "object_type: dimension\nlabel: \"Age\"\nunique_name: \"dim.age\"\n",
    )
    .expect("Failed to write dimension");

    sml()
        .arg("read")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("catalog: Sales"))
        .stdout(predicate::str::contains("dimensions: 1"))
        .stdout(predicate::str::contains("total objects: 2"));
}

#[test]
fn test_read_fails_on_malformed_yaml() {
    let dir = tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("bad.yml"), "object_type: model\n  nope: [")
        .expect("Failed to write file");

    sml()
        .arg("read")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse YAML"));
}

#[test]
fn test_read_fails_on_missing_folder() {
    let dir = tempdir().expect("Failed to create temp dir");

    sml()
        .arg("read")
        .arg(dir.path().join("does-not-exist"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read directory"));
}
