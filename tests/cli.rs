use assert_cmd::Command;
use std::io::Write;

#[test]
fn help_lists_override_flags() {
    Command::new(assert_cmd::cargo::cargo_bin!("envirotrackd"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("--dist-dir"))
        .stdout(predicates::str::contains("--port"));
}

#[test]
fn missing_config_file_aborts_startup() {
    Command::new(assert_cmd::cargo::cargo_bin!("envirotrackd"))
        .args(["--config", "/nonexistent/envirotrackd.toml"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("failed to read config file"));
}

#[test]
fn malformed_config_file_aborts_startup() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[server]\nhosty = \"oops\"").unwrap();

    Command::new(assert_cmd::cargo::cargo_bin!("envirotrackd"))
        .args(["--config", &file.path().display().to_string()])
        .assert()
        .failure()
        .stderr(predicates::str::contains("failed to parse config file"));
}
