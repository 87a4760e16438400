//! Installation presence heuristic.

use crate::constants::{KNOWN_INSTALL_PATHS, PACKAGE_BINARIES};
use crate::system::command::CommandRunner;
use crate::ui;
use std::path::Path;

/// Best-effort presence check, not a package-database query: files left
/// over from a partial install produce false positives, and installs to
/// non-standard prefixes produce false negatives.
///
/// True if any known binary resolves on PATH, any known file path exists,
/// or the operator-supplied custom path exists.
pub fn is_installed(runner: &dyn CommandRunner, custom_path: Option<&Path>) -> bool {
    for binary in PACKAGE_BINARIES {
        if runner.has_command(binary) {
            ui::detail(&format!("Found binary {} in PATH", binary));
            return true;
        }
    }

    let mut found = false;
    for (path, description) in KNOWN_INSTALL_PATHS {
        if Path::new(path).exists() {
            ui::detail(&format!("Found {} at {}", description, path));
            found = true;
        }
    }
    if let Some(path) = custom_path {
        if path.exists() {
            ui::detail(&format!("Found custom path {}", path.display()));
            found = true;
        }
    }
    found
}
