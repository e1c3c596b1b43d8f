//! Host, OS and session facts.

use std::process::Command;

use peekfetch_models::{Fields, Section, SectionKind};
use sysinfo::System;
use tracing::debug;

use crate::error::{ProbeError, Result};
use crate::format::{format_timestamp, format_uptime};

/// Desktop environment variables, checked in order.
const DESKTOP_ENV_VARS: [&str; 3] = ["XDG_CURRENT_DESKTOP", "DESKTOP_SESSION", "XDG_SESSION_DESKTOP"];

/// Window managers probed when no desktop variable is set.
const WINDOW_MANAGERS: [&str; 6] = ["i3", "sway", "bspwm", "awesome", "dwm", "xmonad"];

/// Shells whose `--version` output we know how to read.
const VERSIONED_SHELLS: [&str; 3] = ["bash", "zsh", "fish"];

/// Collects the System section.
pub fn collect() -> Section {
    let mut info = Fields::new();

    if let Some(host) = System::host_name() {
        info.insert("Hostname", host);
    }
    if let Some(user) = non_empty_env("USER") {
        info.insert("User", user);
    }
    if let Some(os) = os_string() {
        info.insert("OS", os);
    }
    if let Some(kernel) = System::kernel_version() {
        info.insert("Kernel", kernel);
    }
    info.insert("Architecture", std::env::consts::ARCH);
    info.insert("Uptime", format_uptime(System::uptime()));
    if let Some(boot) = format_timestamp(System::boot_time()) {
        info.insert("Boot Time", boot);
    }
    if let Some(shell) = shell_description() {
        info.insert("Shell", shell);
    }
    if let Some(term) = non_empty_env("TERM") {
        info.insert("Terminal", term);
    }
    if let Some(desktop) = desktop_environment() {
        info.insert("Desktop", desktop);
    }
    if let Some(display) = non_empty_env("DISPLAY") {
        info.insert("Display", display);
    }

    let load = System::load_average();
    info.insert(
        "Load Average",
        format!("{:.2}, {:.2}, {:.2}", load.one, load.five, load.fifteen),
    );

    match process_count() {
        Ok(count) if count > 0 => info.insert("Processes", count.to_string()),
        Ok(_) => {}
        Err(e) => debug!(error = %e, "process count unavailable"),
    }

    Section::flat(SectionKind::System, info)
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn os_string() -> Option<String> {
    match (System::name(), System::os_version()) {
        (Some(name), Some(version)) => Some(format!("{} {}", name, version)),
        (Some(name), None) => Some(name),
        (None, _) => System::long_os_version(),
    }
}

/// Shell basename, with its version when it can be determined.
fn shell_description() -> Option<String> {
    let shell = non_empty_env("SHELL")?;
    let name = shell.rsplit('/').next().unwrap_or(&shell).to_string();

    match shell_version(&name) {
        Ok(version) => Some(format!("{} {}", name, version)),
        Err(e) => {
            debug!(shell = %name, error = %e, "shell version unavailable");
            Some(name)
        }
    }
}

fn shell_version(shell: &str) -> Result<String> {
    if !VERSIONED_SHELLS.contains(&shell) {
        return Err(ProbeError::Unavailable("shell version"));
    }

    let output = Command::new(shell).arg("--version").output()?;
    if !output.status.success() {
        return Err(ProbeError::CommandFailed(format!("{} --version", shell)));
    }

    parse_shell_version(&String::from_utf8_lossy(&output.stdout))
        .ok_or_else(|| ProbeError::Parse("no version in shell output".to_string()))
}

/// First dotted token after the first word of the first line.
fn parse_shell_version(output: &str) -> Option<String> {
    let first = output.lines().next()?;
    first
        .split_whitespace()
        .skip(1)
        .find(|part| part.contains('.'))
        .map(|part| part.trim().to_string())
}

fn desktop_environment() -> Option<String> {
    if let Some(desktop) = DESKTOP_ENV_VARS.iter().find_map(|var| non_empty_env(var)) {
        return Some(desktop);
    }

    WINDOW_MANAGERS
        .iter()
        .find(|wm| which::which(wm).is_ok() && is_running(wm))
        .map(|wm| wm.to_string())
}

fn is_running(process: &str) -> bool {
    Command::new("pgrep")
        .args(["-x", process])
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn process_count() -> Result<usize> {
    let loadavg = std::fs::read_to_string("/proc/loadavg")?;
    parse_loadavg_total(&loadavg)
}

/// Total task count from `/proc/loadavg` ("0.1 0.2 0.3 2/512 1234").
fn parse_loadavg_total(loadavg: &str) -> Result<usize> {
    let field = loadavg
        .split_whitespace()
        .nth(3)
        .ok_or_else(|| ProbeError::Parse("loadavg has fewer than 4 fields".to_string()))?;

    let (_, total) = field
        .split_once('/')
        .ok_or_else(|| ProbeError::Parse(format!("unexpected task field '{}'", field)))?;

    total
        .parse()
        .map_err(|_| ProbeError::Parse(format!("invalid task total '{}'", total)))
}
