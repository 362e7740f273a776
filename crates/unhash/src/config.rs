use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use unhash_fetch::{FetchOptions, HostList, SettlePolicy};

use crate::cli::App;

/// Optional settings read from `config.toml`. Every field may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub hosts:           Option<Vec<String>>,
    pub verify:          Option<bool>,
    pub first_success:   Option<bool>,
    pub require_success: Option<bool>,
    pub timeout_secs:    Option<u64>,
}

pub fn default_path() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(".config").join("unhash").join("config.toml"))
}

/// Load the explicit config file, or the default one if it exists.
///
/// A missing explicit file is an error; a missing default file is not.
pub fn load(explicit: Option<&Path>) -> Result<FileConfig> {
    match explicit {
        Some(path) => read(path),
        None => match default_path() {
            Some(path) if path.exists() => read(&path),
            _ => Ok(FileConfig::default()),
        },
    }
}

fn read(path: &Path) -> Result<FileConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg = toml::from_str(&data)
        .with_context(|| format!("invalid config {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}

/// Effective settings after merging command line, environment and file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub hosts:   HostList,
    pub options: FetchOptions,
}

impl Settings {
    pub fn resolve(app: &App, file: FileConfig) -> Self {
        let cli_hosts: HostList = app.hosts.iter().flat_map(HostList::iter).collect();
        let hosts = if !cli_hosts.is_empty() {
            cli_hosts
        } else if let Some(hosts) = file.hosts {
            HostList::new(hosts)
        } else {
            HostList::default()
        };

        let policy = if app.first_success || file.first_success.unwrap_or(false) {
            SettlePolicy::FirstSuccess
        } else {
            SettlePolicy::FirstSettled
        };

        let options = FetchOptions::default()
            .verify(!app.no_verify && file.verify.unwrap_or(true))
            .policy(policy)
            .require_success_status(app.require_success || file.require_success.unwrap_or(false))
            .leg_timeout(app.timeout.or(file.timeout_secs).map(Duration::from_secs));

        Self { hosts, options }
    }
}
