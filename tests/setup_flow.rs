//! End-to-end flows against mock package-manager executables on a
//! scratch PATH. Every mock appends its arguments to a log file so the
//! exact subprocess sequence can be asserted.

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

struct TestEnv {
    _tmp: TempDir,
    home_dir: PathBuf,
    xdg_config_home: PathBuf,
    mock_bin_dir: PathBuf,
    sudo_log: PathBuf,
}

impl TestEnv {
    fn new() -> Self {
        let tmp = tempfile::tempdir().expect("tempdir");
        let root = tmp.path().to_path_buf();

        let home_dir = root.join("home");
        let xdg_config_home = root.join("config");
        let mock_bin_dir = root.join("bin");
        let sudo_log = root.join("sudo.log");

        fs::create_dir_all(&home_dir).expect("mkdir home");
        fs::create_dir_all(&xdg_config_home).expect("mkdir config");
        fs::create_dir_all(&mock_bin_dir).expect("mkdir bin");

        let env = Self {
            _tmp: tmp,
            home_dir,
            xdg_config_home,
            mock_bin_dir,
            sudo_log,
        };

        // `sudo` is the entry point for every native-manager command;
        // logging its arguments captures the full command sequence. The
        // mocks use /bin/sh because PATH is stripped down to the mock dir.
        env.write_mock(
            "sudo",
            &format!("#!/bin/sh\necho \"$@\" >> {}\nexit 0\n", env.sudo_log.display()),
        );
        env
    }

    fn write_mock(&self, name: &str, script: &str) {
        let path = self.mock_bin_dir.join(name);
        fs::write(&path, script).expect("write mock");
        let mut perms = fs::metadata(&path).expect("stat mock").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("chmod mock");
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_pyroclast-setup"));
        cmd.env_clear()
            .env("PATH", &self.mock_bin_dir)
            .env("HOME", &self.home_dir)
            .env("XDG_CONFIG_HOME", &self.xdg_config_home);
        cmd
    }

    fn sudo_commands(&self) -> Vec<String> {
        match fs::read_to_string(&self.sudo_log) {
            Ok(content) => content.lines().map(String::from).collect(),
            Err(_) => Vec::new(),
        }
    }

    fn data_dir(&self) -> PathBuf {
        self.home_dir.join("pyroclast")
    }
}

#[test]
fn debian_install_runs_apt_sequence_then_provisions() {
    let env = TestEnv::new();

    env.command()
        .args(["install", "--force-distro", "debian", "--no-assets"])
        .assert()
        .success();

    assert_eq!(
        env.sudo_commands(),
        vec![
            "apt-get update".to_string(),
            "apt-get install -y vkbasalt".to_string(),
        ]
    );
    for sub in ["backupfiles", "shaders", "textures", "lut"] {
        assert!(env.data_dir().join(sub).is_dir(), "missing {sub}");
    }
}

#[test]
fn up_to_date_arch_install_skips_package_manager_entirely() {
    let env = TestEnv::new();

    // Presence: a vkbasalt binary resolvable on PATH.
    env.write_mock("vkbasalt", "#!/bin/sh\nexit 0\n");
    // An operator-supplied helper that reports the same installed and
    // available version.
    env.write_mock(
        "paru",
        "#!/bin/sh\n\
         if [ \"$1\" = \"-Q\" ]; then echo \"vkbasalt 0.3.2.10-1\"; fi\n\
         if [ \"$1\" = \"-Si\" ]; then echo \"Version : 0.3.2.10-1\"; fi\n\
         exit 0\n",
    );

    env.command()
        .args([
            "install",
            "--force-distro",
            "arch",
            "--aur-helper",
            "paru",
            "--no-assets",
        ])
        .assert()
        .success();

    // Zero mutating package-manager invocations, provisioning still ran.
    assert!(env.sudo_commands().is_empty());
    assert!(env.data_dir().is_dir());
}

#[test]
fn fedora_uninstall_removes_without_provisioning() {
    let env = TestEnv::new();

    env.command()
        .args(["uninstall", "--force-distro", "fedora"])
        .assert()
        .success();

    assert_eq!(
        env.sudo_commands(),
        vec!["dnf remove -y vkbasalt".to_string()]
    );
    assert!(!env.data_dir().exists());
}

#[test]
fn missing_flatpak_invokes_nothing_and_does_not_fail() {
    let env = TestEnv::new();

    env.command()
        .args([
            "install",
            "--flatpak",
            "--force-distro",
            "debian",
            "--no-assets",
        ])
        .assert()
        .success();

    assert!(env.sudo_commands().is_empty());
    // The flatpak path aborted, but the run still reached provisioning.
    assert!(env.data_dir().is_dir());
}

#[test]
fn void_uninstall_uses_xbps() {
    let env = TestEnv::new();

    env.command()
        .args(["uninstall", "--force-distro", "void"])
        .assert()
        .success();

    assert_eq!(
        env.sudo_commands(),
        vec!["xbps-remove -R vkbasalt".to_string()]
    );
}
