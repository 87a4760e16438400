//! Command dispatcher
//!
//! Builds the immutable run configuration from the parsed CLI and routes
//! each command to its handler. Running without a subcommand installs.

use crate::cli::args::{Cli, Command};
use crate::commands;
use crate::config::SetupConfig;
use crate::error::Result;

pub fn dispatch(args: &Cli) -> Result<()> {
    let config = build_config(args);

    match &args.command {
        None | Some(Command::Install) => {
            commands::install::run(commands::install::InstallOptions { config })
        }
        Some(Command::Uninstall) => {
            commands::uninstall::run(commands::uninstall::UninstallOptions { config })
        }
        Some(Command::Completions { shell }) => commands::completions::run(*shell),
    }
}

fn build_config(args: &Cli) -> SetupConfig {
    let global = &args.global;
    SetupConfig {
        distro_override: global.force_distro,
        flatpak: global.flatpak,
        flatpak_pkg: global.flatpak_pkg.clone(),
        custom_path: global.custom_path.clone(),
        // Treat an empty string the same as an omitted flag.
        aur_helper: global
            .aur_helper
            .clone()
            .filter(|helper| !helper.is_empty()),
        assume_yes: global.yes,
        no_assets: global.no_assets,
    }
}
