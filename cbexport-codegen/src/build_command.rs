//! Command line for building a target from the IDE.

use std::{fmt, str::FromStr};

use eyre::Result;

use crate::ExportError;

/// Operating system the IDE runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Host {
    Windows,
    #[default]
    Unix,
}

impl Host {
    /// The host this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Host::Windows
        } else {
            Host::Unix
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Host::Windows => "windows",
            Host::Unix => "unix",
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Host {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "windows" | "win" => Ok(Host::Windows),
            "unix" | "linux" | "macos" => Ok(Host::Unix),
            other => Err(format!("unknown host '{}' (expected windows or unix)", other)),
        }
    }
}

/// Arguments that run a headless build of `project` in the IDE.
///
/// The first element is the IDE program itself. A target named `clean`
/// cleans the project; any other non-empty target is built.
pub fn build_command(
    ide_program: &str,
    project_name: &str,
    target: Option<&str>,
    extra_args: &[String],
    host: Host,
) -> Result<Vec<String>> {
    if ide_program.trim().is_empty() {
        return Err(ExportError::EmptyIdeProgram.into());
    }

    let mut args = vec![ide_program.to_string(), "--no-splash-screen".to_string()];
    match host {
        Host::Windows => {
            args.push("--no-check-associations".to_string());
            args.push("--no-dde".to_string());
        }
        Host::Unix => args.push("--no-ipc".to_string()),
    }

    match target {
        Some("clean") => args.push("--clean".to_string()),
        Some(t) if !t.is_empty() => {
            args.push("--build".to_string());
            args.push(format!("--target={}", t));
        }
        _ => {}
    }

    args.extend(extra_args.iter().cloned());
    args.push(format!("{}.cbp", project_name));
    Ok(args)
}
