//! Install flow: decide what is needed, act, then hand off to
//! provisioning.
//!
//! Every outcome short of a provisioning failure is non-fatal: an
//! unsupported distro or a failed package-manager invocation is logged
//! and the run still reaches the provisioning stage.

use crate::config::SetupConfig;
use crate::constants::PACKAGE_NAME;
use crate::error::Result;
use crate::packages::aur::HelperResolver;
use crate::packages::flatpak::FlatpakManager;
use crate::packages::native::NativeManager;
use crate::packages::{run_action, Action, ActionOutcome, PackageManager};
use crate::packages::status;
use crate::provision;
use crate::system::command::{CommandRunner, SystemRunner};
use crate::system::distro::DistroFamily;
use crate::system::platform;
use crate::ui;

pub struct InstallOptions {
    pub config: SetupConfig,
}

/// What the decision machine concluded before any action ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallDecision {
    /// The presence heuristic fired; skip unconditionally.
    AlreadyInstalled,
    /// Arch with an operator-supplied helper: the version check passed.
    AlreadyUpToDate,
    NeedsInstall,
}

pub fn run(options: InstallOptions) -> Result<()> {
    let runner = SystemRunner;
    let config = options.config;
    let family = config.resolve_family();
    let resolver = HelperResolver::new(config.aur_helper.clone());

    let present = status::is_installed(&runner, config.custom_path.as_deref());
    match decide(present, family, &resolver, &runner) {
        InstallDecision::AlreadyInstalled => {
            ui::success("vkBasalt is already installed. Skipping installation.");
        }
        InstallDecision::AlreadyUpToDate => {
            ui::success("vkBasalt is installed and up to date. Skipping installation.");
        }
        InstallDecision::NeedsInstall => {
            let outcome = if config.flatpak {
                flatpak_install(&runner, &config.flatpak_pkg)
            } else {
                native_install(&runner, family, &resolver, platform::machine())
            };
            report(&outcome);
        }
    }

    provision::run(&config)
}

/// Install-mode decision machine.
///
/// The up-to-date check runs only when the operator named a helper
/// explicitly; with an auto-discovered helper, presence alone
/// short-circuits, same as on every other family.
pub fn decide(
    present: bool,
    family: DistroFamily,
    resolver: &HelperResolver,
    runner: &dyn CommandRunner,
) -> InstallDecision {
    if !present {
        return InstallDecision::NeedsInstall;
    }
    if family == DistroFamily::Arch && resolver.has_preference() {
        return match resolver.resolve(runner) {
            Some(helper) if helper.is_package_up_to_date(runner, PACKAGE_NAME) => {
                InstallDecision::AlreadyUpToDate
            }
            _ => InstallDecision::NeedsInstall,
        };
    }
    InstallDecision::AlreadyInstalled
}

/// Per-family native install with the one-level arch fallback.
pub fn native_install(
    runner: &dyn CommandRunner,
    family: DistroFamily,
    resolver: &HelperResolver,
    machine: &str,
) -> ActionOutcome {
    if !platform::is_supported(machine) {
        ui::error(&format!(
            "Only 64-bit systems are supported. Your system architecture: {}",
            machine
        ));
        return ActionOutcome::Unsupported;
    }

    let Some(native) = NativeManager::for_family(family) else {
        ui::warning("Unsupported Linux distribution. Cannot install vkbasalt automatically.");
        return ActionOutcome::Unsupported;
    };

    ui::info(&format!(
        "Installing {} via {}...",
        PACKAGE_NAME,
        native.name()
    ));
    match run_action(&native, Action::Install, runner) {
        ActionOutcome::Failed(err) if family == DistroFamily::Arch => {
            ui::warning(&format!(
                "Pacman did not find/update {}: {}. Checking for an AUR helper...",
                PACKAGE_NAME, err
            ));
            helper_fallback(runner, resolver)
        }
        outcome => outcome,
    }
}

/// One fallback attempt, maximum: resolve a helper, re-check the version
/// through it, and only then install.
fn helper_fallback(runner: &dyn CommandRunner, resolver: &HelperResolver) -> ActionOutcome {
    let Some(helper) = resolver.resolve(runner) else {
        ui::error("No AUR helper found. Please install vkbasalt manually.");
        return ActionOutcome::ToolUnavailable;
    };

    if helper.is_package_up_to_date(runner, PACKAGE_NAME) {
        ui::success(&format!(
            "{} is already installed and up to date via {}.",
            PACKAGE_NAME,
            helper.name()
        ));
        return ActionOutcome::Completed;
    }

    ui::info(&format!(
        "Installing/updating {} via {}...",
        PACKAGE_NAME,
        helper.name()
    ));
    run_action(helper, Action::Install, runner)
}

pub fn flatpak_install(runner: &dyn CommandRunner, pkg_id: &str) -> ActionOutcome {
    if !FlatpakManager::is_available(runner) {
        ui::error("Flatpak is not installed. Cannot proceed with Flatpak installation.");
        return ActionOutcome::ToolUnavailable;
    }
    ui::info(&format!("Installing {} via Flatpak...", PACKAGE_NAME));
    run_action(&FlatpakManager::new(pkg_id.to_string()), Action::Install, runner)
}

fn report(outcome: &ActionOutcome) {
    match outcome {
        ActionOutcome::Completed => ui::success("Installation step finished."),
        ActionOutcome::Failed(err) => {
            ui::error(&format!("An error occurred during installation: {}", err));
        }
        // Already explained at the decision site.
        ActionOutcome::ToolUnavailable | ActionOutcome::Unsupported => {}
    }
}

#[cfg(test)]
mod tests;
