//! Package-management routes.
//!
//! Three ways of getting vkBasalt onto (or off) a system, all behind the
//! [`PackageManager`] trait:
//!
//! - **Native** (`native.rs`): the distro family's package manager,
//!   driven as a fixed command sequence under sudo.
//! - **AUR** (`aur.rs`): helper resolution (explicit or probed) with a
//!   version-equality up-to-date check, used as the arch fallback route.
//! - **Flatpak** (`flatpak.rs`): single user-scope non-interactive
//!   command, no fallback.
//!
//! The orchestrating commands convert every action into an
//! [`ActionOutcome`] and decide the next step on that value; manager
//! errors never propagate past the command layer.

pub mod aur;
pub mod flatpak;
pub mod native;
pub mod status;
pub mod traits;

pub use traits::PackageManager;

use crate::error::SetupError;
use crate::system::command::CommandRunner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Install,
    Remove,
}

/// Final state of one install/remove attempt.
#[derive(Debug)]
pub enum ActionOutcome {
    /// The manager ran to completion.
    Completed,
    /// The manager was invoked and reported failure.
    Failed(SetupError),
    /// No usable tool was found on PATH.
    ToolUnavailable,
    /// No viable route exists for this distribution.
    Unsupported,
}

/// Run one manager action, converting the typed error into a non-fatal
/// outcome for the caller to branch on.
pub fn run_action(
    manager: &dyn PackageManager,
    action: Action,
    runner: &dyn CommandRunner,
) -> ActionOutcome {
    let result = match action {
        Action::Install => manager.install(runner),
        Action::Remove => manager.remove(runner),
    };
    match result {
        Ok(()) => ActionOutcome::Completed,
        Err(e) => ActionOutcome::Failed(e),
    }
}
