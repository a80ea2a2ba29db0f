//! Runtime detection for Node.js and npm

use crate::installer::npm_program;
use anyhow::Result;
use std::process::Command;

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

impl RuntimeInfo {
    fn missing(name: &'static str) -> Self {
        Self {
            name,
            version: None,
            available: false,
        }
    }
}

fn probe(name: &'static str, program: &str) -> RuntimeInfo {
    let output = Command::new(program).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo::missing(name),
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    probe("Node.js", "node")
}

/// Check if npm is available
pub fn check_npm() -> RuntimeInfo {
    probe("npm", npm_program())
}

/// Fail unless both Node.js and npm are installed
pub fn require_npm() -> Result<Vec<RuntimeInfo>> {
    let runtimes = vec![check_node(), check_npm()];

    let missing: Vec<&str> = runtimes
        .iter()
        .filter(|r| !r.available)
        .map(|r| r.name)
        .collect();

    if !missing.is_empty() {
        anyhow::bail!(
            "Missing required runtimes:\n{}\n  install from https://nodejs.org",
            missing
                .iter()
                .map(|m| format!("  - {}", m))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    Ok(runtimes)
}
