use assert_cmd::Command;
use predicates::prelude::*;

fn zt(cwd: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("zt").unwrap();
    cmd.current_dir(cwd)
        .env("ZT_CONFIG", cwd.join("missing.conf"))
        .env_remove("ZT_TRACE");
    cmd
}

#[test]
fn invalid_reference_exits_with_failure() {
    let cwd = tempfile::tempdir().unwrap();

    zt(cwd.path())
        .args(["widget", "demo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid template reference 'widget'"));

    assert!(!cwd.path().join("demo").exists());
}

#[test]
fn unsupported_host_exits_with_failure() {
    let cwd = tempfile::tempdir().unwrap();

    zt(cwd.path())
        .args(["https://gitlab.com/acme/widget", "demo", "--force"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid template reference"));
}

#[test]
fn version() {
    let cwd = tempfile::tempdir().unwrap();

    zt(cwd.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("zt "));
}
