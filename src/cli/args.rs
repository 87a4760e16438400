use crate::constants::DEFAULT_FLATPAK_PKG;
use crate::system::distro::DistroFamily;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(
    name = "pyroclast-setup",
    about = "vkBasalt installer and PYroclast asset provisioner",
    long_about = "Installs or removes vkBasalt through the distribution's package manager \
(with AUR helper and Flatpak alternatives), then provisions the PYroclast data directories, \
seeds the vkBasalt config, and optionally downloads the reshade-shaders bundle",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Answer yes to the shader/texture download prompts
    #[arg(short = 'y', long = "yes", global = true)]
    pub yes: bool,

    /// Force the distribution family instead of detecting it
    #[arg(
        long,
        value_name = "FAMILY",
        global = true,
        value_parser = DistroFamily::from_str
    )]
    pub force_distro: Option<DistroFamily>,

    /// Use Flatpak instead of the native package manager
    #[arg(long, global = true)]
    pub flatpak: bool,

    /// Flatpak application id
    #[arg(long, value_name = "ID", default_value = DEFAULT_FLATPAK_PKG, global = true)]
    pub flatpak_pkg: String,

    /// Extra path checked when probing for an existing installation
    #[arg(long, value_name = "PATH", global = true)]
    pub custom_path: Option<PathBuf>,

    /// AUR helper to prefer on Arch systems (default: try yay, then paru)
    #[arg(long, value_name = "NAME", global = true)]
    pub aur_helper: Option<String>,

    /// Skip the shader/texture download prompts entirely
    #[arg(long, global = true)]
    pub no_assets: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install vkBasalt and provision the PYroclast directories (default)
    Install,

    /// Remove vkBasalt via the package manager
    Uninstall,

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
