use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pixelpad_cmd() -> Command {
    Command::cargo_bin("pixelpad").expect("binary exists")
}

#[test]
fn pixelpad_help_prints_usage() {
    pixelpad_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "In-application raster paint surface",
        ));
}

#[test]
fn no_flags_prints_usage_summary() {
    pixelpad_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--demo"));
}

#[test]
fn demo_runs_with_default_config() {
    let temp = TempDir::new().unwrap();

    pixelpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Demo complete:"))
        .stdout(predicate::str::contains("256x256"));
}

#[test]
fn demo_respects_canvas_size_overrides() {
    let temp = TempDir::new().unwrap();

    pixelpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--demo", "--width", "48", "--height", "32"])
        .assert()
        .success()
        .stdout(predicate::str::contains("48x32"));
}

#[test]
fn demo_rejects_zero_width_override() {
    let temp = TempDir::new().unwrap();

    pixelpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--demo", "--width", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--width must be positive"));
}

#[test]
fn demo_fails_on_invalid_config_file() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("pixelpad");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[tools]\nmin_size = 9.0\nmax_size = 3.0\n",
    )
    .unwrap();

    pixelpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--demo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}
