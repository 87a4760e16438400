//! Project-wide names, filesystem locations and URLs.

/// Package name passed to every native package manager.
pub const PACKAGE_NAME: &str = "vkbasalt";

/// Binary names whose presence on PATH indicates an existing installation.
pub const PACKAGE_BINARIES: &[&str] = &["vkbasalt", "vkBasalt"];

/// Well-known files installed by the distro packages, with a short
/// description for log output.
pub const KNOWN_INSTALL_PATHS: &[(&str, &str)] = &[
    ("/usr/lib/libvkbasalt.so", "library file"),
    (
        "/usr/share/vulkan/implicit_layer.d/vkBasalt.json",
        "Vulkan layer config",
    ),
    (
        "/usr/share/vkbasalt/vkBasalt.conf.example",
        "example config file",
    ),
];

/// Identification source consulted by distro detection.
pub const OS_RELEASE_PATH: &str = "/etc/os-release";

/// AUR helpers probed in order when the operator does not name one.
pub const AUR_HELPER_CANDIDATES: &[&str] = &["yay", "paru"];

/// Default Flatpak application id.
pub const DEFAULT_FLATPAK_PKG: &str = "org.vkbasalt.vkbasalt";

/// System-wide example config shipped by the vkbasalt packages.
pub const EXAMPLE_CONFIG_PATH: &str = "/usr/share/vkBasalt/vkBasalt.conf.example";

/// Per-user config directory (under the XDG config root) and file name.
pub const CONFIG_DIR_NAME: &str = "vkBasalt";
pub const CONFIG_FILE_NAME: &str = "vkBasalt.conf";

/// PYroclast data layout under the user's home directory.
pub const DATA_DIR_NAME: &str = "pyroclast";
pub const DATA_SUBDIRS: &[&str] = &["backupfiles", "shaders", "textures", "lut"];
pub const SHADERS_DIR_NAME: &str = "shaders";
pub const TEXTURES_DIR_NAME: &str = "textures";

/// Pinned reshade-shaders snapshot used for shader/texture downloads.
pub const RESHADE_COMMIT: &str = "a621b3f4f154e4a1ba8e07d63827e1e757a05bbd";

pub fn reshade_archive_url() -> String {
    format!("https://github.com/crosire/reshade-shaders/archive/{RESHADE_COMMIT}.zip")
}

/// Directory name inside the archive produced by GitHub for the commit.
pub fn reshade_archive_root() -> String {
    format!("reshade-shaders-{RESHADE_COMMIT}")
}
