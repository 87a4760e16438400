use assert_cmd::Command;
use predicates::prelude::*;

// Helper function to initialize the command to test.
fn pyroclast_setup() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pyroclast-setup"))
}

#[test]
fn test_help_command() {
    let mut cmd = pyroclast_setup();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Installs or removes vkBasalt"));
}

#[test]
fn test_version_flag() {
    let mut cmd = pyroclast_setup();

    let version = env!("CARGO_PKG_VERSION");
    let expected = format!("pyroclast-setup {}", version);

    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(expected));
}

#[test]
fn test_unknown_subcommand_fails() {
    let mut cmd = pyroclast_setup();

    cmd.arg("unknown-command-xyz")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: pyroclast-setup"));
}

#[test]
fn test_unrecognized_force_distro_is_rejected() {
    let mut cmd = pyroclast_setup();

    cmd.args(["--force-distro", "templeos"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized distro family"));
}

#[test]
fn test_completions_generate() {
    let mut cmd = pyroclast_setup();

    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pyroclast-setup"));
}
