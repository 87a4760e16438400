//! Distro family detection for cross-distro package management.

use crate::constants::OS_RELEASE_PATH;
use crate::ui;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Coarse classification bucket used to pick a package-manager command set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistroFamily {
    Debian, // Debian and derivatives (Ubuntu, Mint, etc.)
    Fedora, // Fedora and derivatives (CentOS, RHEL, etc.)
    Arch,   // Arch Linux and derivatives (Manjaro, CachyOS, etc.)
    Void,
    Solus,
    Unknown,
}

/// `ID_LIKE` substring rules, evaluated in order; first match wins.
const ID_LIKE_RULES: &[(&str, DistroFamily)] = &[
    ("debian", DistroFamily::Debian),
    ("fedora", DistroFamily::Fedora),
    ("arch", DistroFamily::Arch),
    ("void", DistroFamily::Void),
    ("solus", DistroFamily::Solus),
];

/// `ID` exact-match rules, consulted only when no `ID_LIKE` rule fired.
const ID_RULES: &[(&[&str], DistroFamily)] = &[
    (&["debian", "ubuntu", "linuxmint"], DistroFamily::Debian),
    (&["fedora", "centos", "rhel"], DistroFamily::Fedora),
    (&["arch", "manjaro", "cachyos"], DistroFamily::Arch),
    (&["void"], DistroFamily::Void),
    (&["solus"], DistroFamily::Solus),
];

impl DistroFamily {
    /// Detect the current distro family by reading /etc/os-release.
    pub fn detect() -> Self {
        Self::detect_from(Path::new(OS_RELEASE_PATH))
    }

    /// An unreadable identification source never fails the run; it is
    /// logged and yields `Unknown`.
    pub fn detect_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                ui::warning(&format!("Could not read {}: {}", path.display(), e));
                return DistroFamily::Unknown;
            }
        };

        let family = Self::classify(&parse_os_release(&content));
        ui::detail(&format!("Determined distribution: {}", family));
        family
    }

    fn classify(info: &HashMap<String, String>) -> Self {
        if let Some(id_like) = info.get("id_like") {
            for (needle, family) in ID_LIKE_RULES {
                if id_like.contains(needle) {
                    return *family;
                }
            }
        }
        if let Some(id) = info.get("id") {
            for (ids, family) in ID_RULES {
                if ids.contains(&id.as_str()) {
                    return *family;
                }
            }
        }
        DistroFamily::Unknown
    }
}

impl fmt::Display for DistroFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Debian => "debian",
            Self::Fedora => "fedora",
            Self::Arch => "arch",
            Self::Void => "void",
            Self::Solus => "solus",
            Self::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for DistroFamily {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debian" => Ok(Self::Debian),
            "fedora" => Ok(Self::Fedora),
            "arch" => Ok(Self::Arch),
            "void" => Ok(Self::Void),
            "solus" => Ok(Self::Solus),
            other => Err(format!(
                "unrecognized distro family '{}' (expected one of: debian, fedora, arch, void, solus)",
                other
            )),
        }
    }
}

/// Parse key=value lines: keys lowercased, values lowercased with
/// surrounding quotes stripped. Lines without '=' are ignored.
fn parse_os_release(content: &str) -> HashMap<String, String> {
    let mut info = HashMap::new();
    for line in content.lines() {
        if let Some((key, value)) = line.trim().split_once('=') {
            info.insert(
                key.to_lowercase(),
                value.trim_matches('"').to_lowercase(),
            );
        }
    }
    info
}
