use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::thread::sleep;
use std::time::Duration;
use tempfile::tempdir;

fn write_config(root: &Path) -> PathBuf {
    let cfg = root.join("config.toml");
    fs::write(
        &cfg,
        format!(
            r#"
version = 1
profile = "test"

[profiles.test]
data_dir = "{}"

[watcher]
debounce_ms = 100
config_poll_secs = 1
stability_interval_ms = 20
stability_checks = 1
"#,
            root.join("data").display()
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
fn watch_starts_with_no_folders_configured() {
    let tmp = tempdir().unwrap();
    let cfg = write_config(tmp.path());

    let mut daemon = cadv(&cfg).arg("watch").spawn().unwrap();
    sleep(Duration::from_millis(800));

    // Still running; an empty folder list is a warning, not a refusal.
    assert!(daemon.try_wait().unwrap().is_none(), "daemon exited at startup");

    daemon.kill().unwrap();
    daemon.wait().unwrap();
}

#[test]
fn folder_added_after_startup_is_picked_up() {
    let tmp = tempdir().unwrap();
    let cfg = write_config(tmp.path());
    let cad = tmp.path().join("cad");
    fs::create_dir(&cad).unwrap();

    let mut daemon = cadv(&cfg).arg("watch").spawn().unwrap();
    sleep(Duration::from_millis(500));

    cadv(&cfg).args(["folders", "add", cad.to_str().unwrap()]).assert().success();

    // Wait past the config poll so the new folder is being watched.
    sleep(Duration::from_millis(2500));
    fs::write(cad.join("gear.sldprt"), b"gear").unwrap();

    let mut registered = false;
    for _ in 0..40 {
        sleep(Duration::from_millis(250));
        let out = cadv(&cfg).args(["list", "--json"]).output().unwrap();
        if String::from_utf8_lossy(&out.stdout).contains("gear") {
            registered = true;
            break;
        }
    }

    daemon.kill().unwrap();
    daemon.wait().unwrap();
    assert!(registered, "file in late-added folder was never registered");
}
