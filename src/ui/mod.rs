use colored::Colorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Disable colors when stdout is not a terminal.
pub fn init_colors() {
    if !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }
}

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

pub fn success(msg: &str) {
    if !is_quiet() {
        println!("{} {}", "✓".green().bold(), msg);
    }
}

pub fn info(msg: &str) {
    if !is_quiet() {
        println!("{} {}", "ℹ".blue().bold(), msg);
    }
}

/// Verbose-only output for step-by-step detail.
pub fn detail(msg: &str) {
    if VERBOSE.load(Ordering::Relaxed) && !is_quiet() {
        println!("{} {}", "·".bright_black(), msg);
    }
}

pub fn warning(msg: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}

pub fn prompt_yes_no(question: &str) -> bool {
    print!("{} {} [Y/n] ", "?".yellow().bold(), question);

    // Attempt to flush stdout, default to true if terminal is broken
    if let Err(e) = io::stdout().flush() {
        eprintln!("\nWarning: Failed to flush terminal: {}", e);
        return true; // Default to true on terminal failure
    }

    let mut input = String::new();

    // Attempt to read line, default to true if stdin is broken
    match io::stdin().read_line(&mut input) {
        Ok(_) => {
            let input = input.trim().to_lowercase();

            if input.is_empty() {
                return true;
            }

            input == "y" || input == "yes"
        }
        Err(e) => {
            eprintln!("\nWarning: Failed to read input: {}", e);
            true // Default to true on read failure (fail-open for non-interactive)
        }
    }
}
