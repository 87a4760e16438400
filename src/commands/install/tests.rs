use super::*;
use crate::system::command::mock::ScriptedRunner;

fn no_helper() -> HelperResolver {
    HelperResolver::new(None)
}

#[test]
fn absent_package_needs_install() {
    let runner = ScriptedRunner::new();
    let decision = decide(false, DistroFamily::Debian, &no_helper(), &runner);
    assert_eq!(decision, InstallDecision::NeedsInstall);
}

#[test]
fn present_on_non_arch_skips_unconditionally() {
    let runner = ScriptedRunner::new();
    let decision = decide(true, DistroFamily::Fedora, &no_helper(), &runner);
    assert_eq!(decision, InstallDecision::AlreadyInstalled);
    // No version query ran.
    assert!(runner.log().is_empty());
}

#[test]
fn decision_is_idempotent_with_no_side_effects() {
    let runner = ScriptedRunner::new();
    let resolver = no_helper();
    let first = decide(true, DistroFamily::Debian, &resolver, &runner);
    let second = decide(true, DistroFamily::Debian, &resolver, &runner);
    assert_eq!(first, InstallDecision::AlreadyInstalled);
    assert_eq!(second, InstallDecision::AlreadyInstalled);
    assert!(runner.log().is_empty());
}

#[test]
fn present_on_arch_without_explicit_helper_skips_version_check() {
    // A probe-discoverable helper exists, but it was not operator-supplied,
    // so presence alone short-circuits.
    let runner = ScriptedRunner::new().with_command("yay");
    let decision = decide(true, DistroFamily::Arch, &no_helper(), &runner);
    assert_eq!(decision, InstallDecision::AlreadyInstalled);
    assert!(runner.log().is_empty());
}

#[test]
fn present_on_arch_with_explicit_helper_checks_version() {
    let runner = ScriptedRunner::new()
        .with_command("paru")
        .with_stdout("paru -Q vkbasalt", "vkbasalt 1.2.3\n")
        .with_stdout("paru -Si vkbasalt", "Version : 1.2.3\n");
    let resolver = HelperResolver::new(Some("paru".to_string()));
    let decision = decide(true, DistroFamily::Arch, &resolver, &runner);
    assert_eq!(decision, InstallDecision::AlreadyUpToDate);
}

#[test]
fn outdated_arch_package_falls_through_to_install() {
    let runner = ScriptedRunner::new()
        .with_command("paru")
        .with_stdout("paru -Q vkbasalt", "vkbasalt 1.2.3\n")
        .with_stdout("paru -Si vkbasalt", "Version : 1.2.4\n");
    let resolver = HelperResolver::new(Some("paru".to_string()));
    let decision = decide(true, DistroFamily::Arch, &resolver, &runner);
    assert_eq!(decision, InstallDecision::NeedsInstall);
}

#[test]
fn debian_install_runs_update_then_install() {
    let runner = ScriptedRunner::new();
    let outcome = native_install(&runner, DistroFamily::Debian, &no_helper(), "x86_64");
    assert!(matches!(outcome, ActionOutcome::Completed));
    assert_eq!(
        runner.log(),
        vec![
            "sudo apt-get update".to_string(),
            "sudo apt-get install -y vkbasalt".to_string(),
        ]
    );
}

#[test]
fn non_64bit_machine_is_gated_before_any_command() {
    let runner = ScriptedRunner::new();
    let outcome = native_install(&runner, DistroFamily::Debian, &no_helper(), "armv7l");
    assert!(matches!(outcome, ActionOutcome::Unsupported));
    assert!(runner.log().is_empty());
}

#[test]
fn unknown_family_is_unsupported_without_commands() {
    let runner = ScriptedRunner::new();
    let outcome = native_install(&runner, DistroFamily::Unknown, &no_helper(), "x86_64");
    assert!(matches!(outcome, ActionOutcome::Unsupported));
    assert!(runner.log().is_empty());
}

#[test]
fn failed_fedora_install_does_not_fall_back() {
    let runner = ScriptedRunner::new().failing_on("sudo dnf install");
    let outcome = native_install(&runner, DistroFamily::Fedora, &no_helper(), "x86_64");
    assert!(matches!(outcome, ActionOutcome::Failed(_)));
    assert_eq!(
        runner.log(),
        vec!["sudo dnf install -y vkbasalt".to_string()]
    );
}

#[test]
fn arch_failure_falls_back_to_first_probed_helper() {
    // Native pacman fails; both helpers resolve; yay is first in priority
    // order. The helper's version check fails closed (no scripted stdout),
    // so the helper install runs.
    let runner = ScriptedRunner::new()
        .with_command("yay")
        .with_command("paru")
        .failing_on("sudo pacman");
    let outcome = native_install(&runner, DistroFamily::Arch, &no_helper(), "x86_64");
    assert!(matches!(outcome, ActionOutcome::Completed));
    assert_eq!(
        runner.log(),
        vec![
            "sudo pacman -Syu vkbasalt --noconfirm".to_string(),
            // The version check fails closed at the first query.
            "yay -Q vkbasalt".to_string(),
            "yay -S --needed --noconfirm vkbasalt".to_string(),
        ]
    );
}

#[test]
fn arch_fallback_stops_when_helper_reports_up_to_date() {
    let runner = ScriptedRunner::new()
        .with_command("paru")
        .with_stdout("paru -Q vkbasalt", "vkbasalt 0.3.2.10-1\n")
        .with_stdout("paru -Si vkbasalt", "Version : 0.3.2.10-1\n")
        .failing_on("sudo pacman");
    let resolver = HelperResolver::new(Some("paru".to_string()));
    let outcome = native_install(&runner, DistroFamily::Arch, &resolver, "x86_64");
    assert!(matches!(outcome, ActionOutcome::Completed));
    // No helper install command after the version check.
    assert_eq!(
        runner.log(),
        vec![
            "sudo pacman -Syu vkbasalt --noconfirm".to_string(),
            "paru -Q vkbasalt".to_string(),
            "paru -Si vkbasalt".to_string(),
        ]
    );
}

#[test]
fn arch_failure_without_helper_is_tool_unavailable() {
    let runner = ScriptedRunner::new().failing_on("sudo pacman");
    let outcome = native_install(&runner, DistroFamily::Arch, &no_helper(), "x86_64");
    assert!(matches!(outcome, ActionOutcome::ToolUnavailable));
    assert_eq!(
        runner.log(),
        vec!["sudo pacman -Syu vkbasalt --noconfirm".to_string()]
    );
}

#[test]
fn missing_flatpak_invokes_nothing() {
    let runner = ScriptedRunner::new();
    let outcome = flatpak_install(&runner, "org.vkbasalt.vkbasalt");
    assert!(matches!(outcome, ActionOutcome::ToolUnavailable));
    assert!(runner.log().is_empty());
}

#[test]
fn flatpak_install_is_a_single_command() {
    let runner = ScriptedRunner::new().with_command("flatpak");
    let outcome = flatpak_install(&runner, "org.vkbasalt.vkbasalt");
    assert!(matches!(outcome, ActionOutcome::Completed));
    assert_eq!(
        runner.log(),
        vec!["flatpak install --user --noninteractive flathub org.vkbasalt.vkbasalt".to_string()]
    );
}
