use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub seed: SeedConfig,
    pub shell: ShellConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: SeedConfig::default(),
            shell: ShellConfig::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SeedConfig {
    /// Optional YAML file overriding the built-in demo issues and rewards.
    pub issues_file: Option<PathBuf>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { issues_file: None }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ShellConfig {
    /// Tab to open after login ("map", "report", "chat", ...).
    pub start_tab: Option<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self { start_tab: None }
    }
}
