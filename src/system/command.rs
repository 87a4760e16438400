//! Subprocess execution seam.
//!
//! Every external command goes through the [`CommandRunner`] trait so the
//! install/uninstall state machine can be exercised without touching the
//! system. Non-zero exits surface as typed errors; control decisions are
//! made on the typed result, never on panics.

use crate::error::{Result, SetupError};
use std::process::{Command, Stdio};

pub trait CommandRunner {
    /// Run a command with stdio inherited (package managers are
    /// interactive). Non-zero exit is an error.
    fn run(&self, argv: &[&str]) -> Result<()>;

    /// Run a command with stdout captured. Non-zero exit is an error.
    fn capture(&self, argv: &[&str]) -> Result<String>;

    /// PATH lookup.
    fn has_command(&self, name: &str) -> bool;
}

/// Production runner backed by `std::process::Command` and `which`.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, argv: &[&str]) -> Result<()> {
        let (program, args) = split_argv(argv)?;
        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .status()
            .map_err(|e| SetupError::SystemCommandFailed {
                command: argv.join(" "),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(SetupError::CommandExited {
                command: argv.join(" "),
                code: status.code().unwrap_or(-1),
            });
        }
        Ok(())
    }

    fn capture(&self, argv: &[&str]) -> Result<String> {
        let (program, args) = split_argv(argv)?;
        let output = Command::new(program).args(args).output().map_err(|e| {
            SetupError::SystemCommandFailed {
                command: argv.join(" "),
                reason: e.to_string(),
            }
        })?;

        if !output.status.success() {
            return Err(SetupError::CommandExited {
                command: argv.join(" "),
                code: output.status.code().unwrap_or(-1),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn has_command(&self, name: &str) -> bool {
        which::which(name).is_ok()
    }
}

fn split_argv<'a>(argv: &'a [&'a str]) -> Result<(&'a str, &'a [&'a str])> {
    argv.split_first()
        .map(|(program, args)| (*program, args))
        .ok_or_else(|| SetupError::Other("empty command line".to_string()))
}
