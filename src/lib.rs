pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod packages;
pub mod provision;
pub mod system;
pub mod ui;

use clap::Parser;
use std::process::exit;

/// Run the pyroclast-setup CLI entrypoint.
pub fn run_cli() {
    // 0. Initialize color settings (must be first)
    ui::init_colors();

    // 1. Signal handling: a hung package-manager invocation can only be
    //    abandoned, not rolled back, so treat Ctrl-C as a clean abort.
    ctrlc::set_handler(move || {
        eprintln!();
        ui::warning("Operation cancelled by user.");
        exit(130);
    })
    .expect("Error setting Ctrl-C handler");

    // 2. Parse & Run
    let args = cli::args::Cli::parse();
    ui::set_quiet(args.global.quiet);
    ui::set_verbose(args.global.verbose);

    if let Err(e) = cli::dispatcher::dispatch(&args) {
        ui::error(&format!("{}", e));
        exit(1);
    }
}
