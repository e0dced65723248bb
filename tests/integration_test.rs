use assert_cmd::Command;
use predicates::prelude::*;

const UNREACHABLE_URL: &str = "http://127.0.0.1:9";
const INSTANCE_UUID: &str = "b6979942-7d5d-4fe6-a2ec-b812e950625a";

/// 사용자 설정 파일과 환경 변수의 영향을 받지 않는 명령
fn snapdel() -> Command {
    let mut cmd = Command::cargo_bin("snapdel").unwrap();
    cmd.env("HOME", env!("CARGO_TARGET_TMPDIR"))
        .env("SNAPDEL_URL", UNREACHABLE_URL)
        .env("SNAPDEL_ACCOUNT", "alice")
        .env_remove("SNAPDEL_TOKEN")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help() {
    snapdel()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Remove one or more snapshots"))
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--wait"));
}

#[test]
fn test_cli_version() {
    snapdel().arg("--version").assert().success();
}

#[test]
fn test_missing_snapshot_name() {
    snapdel()
        .arg("web-01")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required arguments were not provided"));
}

#[test]
fn test_declined_confirmation_exits_zero() {
    snapdel()
        .args(["web-01", "nightly"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Delete snapshot \"nightly\"? [y/n] "))
        .stderr(predicate::str::contains("Aborting"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_plural_prompt_and_eof_aborts() {
    snapdel()
        .args(["web-01", "a", "b"])
        .write_stdin("")
        .assert()
        .success()
        .stderr(predicate::str::contains("Delete 2 snapshots (a, b)? [y/n] "))
        .stderr(predicate::str::contains("Aborting"));
}

#[test]
fn test_forced_delete_reports_failure() {
    snapdel()
        .args(["--force", INSTANCE_UUID, "nightly"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to delete snapshot \"nightly\""))
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("[y/n]").not());
}

#[test]
fn test_missing_url_is_config_error() {
    snapdel()
        .env_remove("SNAPDEL_URL")
        .args(["-f", "web-01", "nightly"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
