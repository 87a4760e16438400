//! Uninstall flow.
//!
//! Removal is dispatched unconditionally — no presence check first — and
//! a manager-reported failure is terminal for that distro's path, not
//! read as "already absent". Uninstall never proceeds to provisioning.

use crate::config::SetupConfig;
use crate::constants::PACKAGE_NAME;
use crate::error::Result;
use crate::packages::aur::HelperResolver;
use crate::packages::flatpak::FlatpakManager;
use crate::packages::native::NativeManager;
use crate::packages::{run_action, Action, ActionOutcome, PackageManager};
use crate::system::command::{CommandRunner, SystemRunner};
use crate::system::distro::DistroFamily;
use crate::ui;

pub struct UninstallOptions {
    pub config: SetupConfig,
}

pub fn run(options: UninstallOptions) -> Result<()> {
    let runner = SystemRunner;
    let config = options.config;
    ui::info("Uninstall mode activated.");

    let outcome = if config.flatpak {
        flatpak_uninstall(&runner, &config.flatpak_pkg)
    } else {
        let resolver = HelperResolver::new(config.aur_helper.clone());
        native_uninstall(&runner, config.resolve_family(), &resolver)
    };

    match outcome {
        ActionOutcome::Completed => ui::success("Uninstallation finished."),
        ActionOutcome::Failed(err) => {
            ui::error(&format!("An error occurred during uninstallation: {}", err));
        }
        ActionOutcome::ToolUnavailable | ActionOutcome::Unsupported => {}
    }
    Ok(())
}

/// Per-family removal with the same two-tier arch fallback as install,
/// minus the version check.
pub fn native_uninstall(
    runner: &dyn CommandRunner,
    family: DistroFamily,
    resolver: &HelperResolver,
) -> ActionOutcome {
    let Some(native) = NativeManager::for_family(family) else {
        ui::warning("Unsupported Linux distribution. Cannot uninstall vkbasalt automatically.");
        return ActionOutcome::Unsupported;
    };

    ui::info(&format!(
        "Uninstalling {} via {}...",
        PACKAGE_NAME,
        native.name()
    ));
    match run_action(&native, Action::Remove, runner) {
        ActionOutcome::Failed(err) if family == DistroFamily::Arch => {
            ui::warning(&format!(
                "Pacman removal failed: {}. Checking for an AUR helper...",
                err
            ));
            match resolver.resolve(runner) {
                Some(helper) => {
                    ui::info(&format!(
                        "Uninstalling {} via {}...",
                        PACKAGE_NAME,
                        helper.name()
                    ));
                    run_action(helper, Action::Remove, runner)
                }
                None => {
                    ui::error("No AUR helper found. Cannot uninstall vkbasalt automatically for Arch.");
                    ActionOutcome::ToolUnavailable
                }
            }
        }
        outcome => outcome,
    }
}

pub fn flatpak_uninstall(runner: &dyn CommandRunner, pkg_id: &str) -> ActionOutcome {
    if !FlatpakManager::is_available(runner) {
        ui::error("Flatpak is not installed. Cannot proceed with uninstallation.");
        return ActionOutcome::ToolUnavailable;
    }
    ui::info(&format!("Uninstalling {} via Flatpak...", PACKAGE_NAME));
    run_action(&FlatpakManager::new(pkg_id.to_string()), Action::Remove, runner)
}
