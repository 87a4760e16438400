//! Native package-manager route.
//!
//! Each distro family maps to a fixed, non-retried command sequence run
//! under sudo. A failure anywhere in the sequence aborts that family's
//! path; there is no rollback.

use crate::constants::PACKAGE_NAME;
use crate::error::Result;
use crate::packages::traits::PackageManager;
use crate::system::command::CommandRunner;
use crate::system::distro::DistroFamily;

pub struct NativeManager {
    family: DistroFamily,
}

impl NativeManager {
    /// `None` for families with no known native manager.
    pub fn for_family(family: DistroFamily) -> Option<Self> {
        match family {
            DistroFamily::Unknown => None,
            _ => Some(Self { family }),
        }
    }

    fn install_sequence(&self) -> Vec<Vec<&'static str>> {
        match self.family {
            DistroFamily::Debian => vec![
                vec!["sudo", "apt-get", "update"],
                vec!["sudo", "apt-get", "install", "-y", PACKAGE_NAME],
            ],
            DistroFamily::Fedora => {
                vec![vec!["sudo", "dnf", "install", "-y", PACKAGE_NAME]]
            }
            DistroFamily::Arch => {
                vec![vec!["sudo", "pacman", "-Syu", PACKAGE_NAME, "--noconfirm"]]
            }
            DistroFamily::Void => {
                vec![vec!["sudo", "xbps-install", "-S", PACKAGE_NAME]]
            }
            DistroFamily::Solus => vec![
                vec!["sudo", "eopkg", "update"],
                vec!["sudo", "eopkg", "install", PACKAGE_NAME],
            ],
            DistroFamily::Unknown => Vec::new(),
        }
    }

    fn remove_sequence(&self) -> Vec<Vec<&'static str>> {
        match self.family {
            DistroFamily::Debian => {
                vec![vec!["sudo", "apt-get", "remove", "-y", PACKAGE_NAME]]
            }
            DistroFamily::Fedora => {
                vec![vec!["sudo", "dnf", "remove", "-y", PACKAGE_NAME]]
            }
            DistroFamily::Arch => {
                vec![vec!["sudo", "pacman", "-Rns", "--noconfirm", PACKAGE_NAME]]
            }
            DistroFamily::Void => {
                vec![vec!["sudo", "xbps-remove", "-R", PACKAGE_NAME]]
            }
            DistroFamily::Solus => {
                vec![vec!["sudo", "eopkg", "remove", PACKAGE_NAME]]
            }
            DistroFamily::Unknown => Vec::new(),
        }
    }
}

impl PackageManager for NativeManager {
    fn name(&self) -> &str {
        match self.family {
            DistroFamily::Debian => "apt-get",
            DistroFamily::Fedora => "dnf",
            DistroFamily::Arch => "pacman",
            DistroFamily::Void => "xbps-install",
            DistroFamily::Solus => "eopkg",
            DistroFamily::Unknown => "none",
        }
    }

    fn install(&self, runner: &dyn CommandRunner) -> Result<()> {
        for argv in self.install_sequence() {
            runner.run(&argv)?;
        }
        Ok(())
    }

    fn remove(&self, runner: &dyn CommandRunner) -> Result<()> {
        for argv in self.remove_sequence() {
            runner.run(&argv)?;
        }
        Ok(())
    }
}
