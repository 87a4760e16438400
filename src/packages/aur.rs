//! AUR helper route.
//!
//! On arch-family systems the native pacman attempt can fail for a
//! package that only lives in the AUR. This module resolves a usable
//! helper (operator-supplied, else probed in priority order) and drives
//! it for version checks, installs and removals.

use crate::constants::{AUR_HELPER_CANDIDATES, PACKAGE_NAME};
use crate::error::{Result, SetupError};
use crate::packages::traits::PackageManager;
use crate::system::command::CommandRunner;
use crate::ui;
use std::cell::OnceCell;

/// A resolved, PATH-checked AUR helper command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AurHelper {
    command: String,
}

impl AurHelper {
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Compare the installed package version against the latest the
    /// helper can see. Any query failure counts as "not up to date" so
    /// the caller falls through to the install path.
    pub fn is_package_up_to_date(&self, runner: &dyn CommandRunner, package: &str) -> bool {
        match self.query_versions(runner, package) {
            Ok((installed, available)) => {
                if installed == available {
                    ui::info(&format!(
                        "{} is already the latest version: {}",
                        package, installed
                    ));
                    true
                } else {
                    ui::info(&format!(
                        "{} is outdated. Installed: {}, Latest: {}",
                        package, installed, available
                    ));
                    false
                }
            }
            Err(_) => false,
        }
    }

    fn query_versions(
        &self,
        runner: &dyn CommandRunner,
        package: &str,
    ) -> Result<(String, String)> {
        let query = runner.capture(&[&self.command, "-Q", package])?;
        let installed = query
            .split_whitespace()
            .nth(1)
            .ok_or_else(|| {
                SetupError::Other(format!("unexpected '{} -Q' output: {}", self.command, query))
            })?
            .to_string();

        let info = runner.capture(&[&self.command, "-Si", package])?;
        let available = parse_version_field(&info).ok_or_else(|| {
            SetupError::Other(format!("no Version field in '{} -Si' output", self.command))
        })?;

        Ok((installed, available))
    }
}

impl PackageManager for AurHelper {
    fn name(&self) -> &str {
        &self.command
    }

    fn install(&self, runner: &dyn CommandRunner) -> Result<()> {
        runner.run(&[&self.command, "-S", "--needed", "--noconfirm", PACKAGE_NAME])
    }

    fn remove(&self, runner: &dyn CommandRunner) -> Result<()> {
        runner.run(&[&self.command, "-Rns", "--noconfirm", PACKAGE_NAME])
    }
}

/// Extract the value of the `Version : ...` line from `-Si` style output.
/// The key is everything before the first colon, compared case-insensitively.
fn parse_version_field(output: &str) -> Option<String> {
    for line in output.lines() {
        if let Some((key, value)) = line.split_once(':') {
            if key.trim().eq_ignore_ascii_case("version") {
                return Some(value.trim().to_string());
            }
        }
    }
    None
}

/// Lazy, memoized helper resolution.
///
/// Probing runs at most once per process so the up-to-date check and the
/// action step cannot disagree about the tool mid-run (a helper installed
/// or removed between the two calls is invisible).
pub struct HelperResolver {
    preferred: Option<String>,
    resolved: OnceCell<Option<AurHelper>>,
}

impl HelperResolver {
    pub fn new(preferred: Option<String>) -> Self {
        Self {
            preferred,
            resolved: OnceCell::new(),
        }
    }

    /// True when the operator named a helper explicitly.
    pub fn has_preference(&self) -> bool {
        self.preferred.is_some()
    }

    /// The operator-supplied helper if resolvable on PATH, else the first
    /// resolvable candidate, else `None`.
    pub fn resolve(&self, runner: &dyn CommandRunner) -> Option<&AurHelper> {
        self.resolved
            .get_or_init(|| {
                if let Some(name) = &self.preferred {
                    if runner.has_command(name) {
                        return Some(AurHelper {
                            command: name.clone(),
                        });
                    }
                    ui::warning(&format!(
                        "Requested AUR helper '{}' not found on PATH",
                        name
                    ));
                }
                AUR_HELPER_CANDIDATES
                    .iter()
                    .find(|helper| runner.has_command(helper))
                    .map(|helper| AurHelper {
                        command: helper.to_string(),
                    })
            })
            .as_ref()
    }
}
