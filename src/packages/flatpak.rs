//! Flatpak route: a single user-scope, non-interactive command per
//! action. No fallback and no up-to-date check.

use crate::error::Result;
use crate::packages::traits::PackageManager;
use crate::system::command::CommandRunner;

pub struct FlatpakManager {
    pkg_id: String,
}

impl FlatpakManager {
    pub fn new(pkg_id: String) -> Self {
        Self { pkg_id }
    }

    pub fn is_available(runner: &dyn CommandRunner) -> bool {
        runner.has_command("flatpak")
    }
}

impl PackageManager for FlatpakManager {
    fn name(&self) -> &str {
        "flatpak"
    }

    fn install(&self, runner: &dyn CommandRunner) -> Result<()> {
        runner.run(&[
            "flatpak",
            "install",
            "--user",
            "--noninteractive",
            "flathub",
            &self.pkg_id,
        ])
    }

    fn remove(&self, runner: &dyn CommandRunner) -> Result<()> {
        runner.run(&["flatpak", "uninstall", "--user", "-y", &self.pkg_id])
    }
}
