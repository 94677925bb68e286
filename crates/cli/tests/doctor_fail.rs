use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn doctor_fails_on_missing_config() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("nope").join("config.toml");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("cadv"));
    cmd.args(["doctor", "--config", missing.to_str().unwrap()]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL cadv doctor"))
        .stdout(predicate::str::contains("config file not found"));
}

#[test]
fn doctor_fails_on_bad_version() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(
        &cfg,
        r#"
version = 9

[profiles.default]
data_dir = "/tmp/x"
"#,
    )
    .unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("cadv"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("version 9 is unsupported"));
}

#[test]
fn doctor_fails_on_unknown_profile() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(
        &cfg,
        r#"
version = 1

[profiles.default]
data_dir = "/tmp/x"
"#,
    )
    .unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("cadv"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap(), "--profile", "ghost"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("profile 'ghost' not found"));
}
