use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

fn write_config(root: &Path) -> PathBuf {
    let cfg = root.join("config.toml");
    let data_dir = root.join("data");
    fs::write(
        &cfg,
        format!(
            r#"
version = 1
profile = "test"

[profiles.test]
data_dir = "{}"
"#,
            data_dir.display()
        ),
    )
    .unwrap();
    cfg
}

fn cadv(cfg: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("cadv"));
    cmd.args(["--config", cfg.to_str().unwrap()]);
    cmd
}

#[test]
fn register_then_reregister_then_update() {
    let tmp = tempdir().unwrap();
    let cfg = write_config(tmp.path());
    let part = tmp.path().join("bracket.sldprt");
    fs::write(&part, b"solid v1").unwrap();

    let mut cmd = cadv(&cfg);
    cmd.args(["register", part.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Registered"))
        .stdout(predicate::str::contains("PZA-"));

    // Same content again is a friendly no-op.
    let mut cmd = cadv(&cfg);
    cmd.args(["register", part.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Already registered"));

    fs::write(&part, b"solid v2").unwrap();
    let mut cmd = cadv(&cfg);
    cmd.args(["register", part.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("status reset to en_diseno"));

    // Both snapshots ended up in the vault.
    let vault = tmp.path().join("data").join("vault");
    assert_eq!(fs::read_dir(&vault).unwrap().count(), 2);
}

#[test]
fn register_rejects_unsupported_extension() {
    let tmp = tempdir().unwrap();
    let cfg = write_config(tmp.path());
    let notes = tmp.path().join("notes.txt");
    fs::write(&notes, b"not cad").unwrap();

    let mut cmd = cadv(&cfg);
    cmd.args(["register", notes.to_str().unwrap()]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unsupported file extension"));
}

#[test]
fn list_and_show_roundtrip() {
    let tmp = tempdir().unwrap();
    let cfg = write_config(tmp.path());
    let part = tmp.path().join("gear.sldprt");
    fs::write(&part, b"gear").unwrap();

    cadv(&cfg).args(["register", part.to_str().unwrap()]).assert().success();

    let mut cmd = cadv(&cfg);
    cmd.args(["list", "--kind", "piece"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("gear"))
        .stdout(predicate::str::contains("en_diseno"));

    let mut cmd = cadv(&cfg);
    cmd.args(["show", "1"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Revisions:"))
        .stdout(predicate::str::contains("initial import"));
}

#[test]
fn status_and_revision_commands() {
    let tmp = tempdir().unwrap();
    let cfg = write_config(tmp.path());
    let part = tmp.path().join("shaft.sldprt");
    fs::write(&part, b"shaft").unwrap();

    cadv(&cfg).args(["register", part.to_str().unwrap()]).assert().success();

    let mut cmd = cadv(&cfg);
    cmd.args(["status", "1", "aprobado"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("en_diseno -> aprobado"));

    let mut cmd = cadv(&cfg);
    cmd.args(["revision", "1", "--message", "chamfer added"]);
    cmd.assert().success().stdout(predicate::str::contains("revision B recorded"));

    let mut cmd = cadv(&cfg);
    cmd.args(["status", "1", "launched"]);
    cmd.assert().failure().stderr(predicate::str::contains("Unknown status"));
}
