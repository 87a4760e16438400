//! Operator-facing run configuration.
//!
//! Built once from the CLI at startup and threaded through the
//! install/uninstall flow as an immutable value.

use crate::system::distro::DistroFamily;
use crate::ui;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct SetupConfig {
    /// Operator override that bypasses distro detection entirely.
    pub distro_override: Option<DistroFamily>,
    /// Route install/uninstall through Flatpak instead of the native manager.
    pub flatpak: bool,
    /// Flatpak application id.
    pub flatpak_pkg: String,
    /// Extra path consulted by the installation presence heuristic.
    pub custom_path: Option<PathBuf>,
    /// Preferred AUR helper name; the candidate list is probed when absent.
    pub aur_helper: Option<String>,
    /// Answer yes to the asset download prompts.
    pub assume_yes: bool,
    /// Skip the asset download prompts entirely.
    pub no_assets: bool,
}

impl SetupConfig {
    /// The distro family for this run: the operator override when given,
    /// otherwise detected once from /etc/os-release.
    pub fn resolve_family(&self) -> DistroFamily {
        match self.distro_override {
            Some(family) => {
                ui::info(&format!("Overriding detected distro with: {}", family));
                family
            }
            None => {
                let family = DistroFamily::detect();
                ui::info(&format!("Detected distribution: {}", family));
                family
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SetupConfig {
        SetupConfig {
            distro_override: None,
            flatpak: false,
            flatpak_pkg: crate::constants::DEFAULT_FLATPAK_PKG.to_string(),
            custom_path: None,
            aur_helper: None,
            assume_yes: false,
            no_assets: true,
        }
    }

    #[test]
    fn override_bypasses_detection() {
        let config = SetupConfig {
            distro_override: Some(DistroFamily::Solus),
            ..test_config()
        };
        assert_eq!(config.resolve_family(), DistroFamily::Solus);
    }
}
