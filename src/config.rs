use anyhow::{Context, Result};
use std::path::PathBuf;

/// The json-server address the dev deployment runs against.
pub(crate) const DEFAULT_BASE_URL: &str = "http://localhost:3000/";

#[derive(Debug, Clone)]
pub(crate) struct Config {
    /// Base URL of the remote campaign service, taken as-is.
    pub(crate) base_url: String,
    /// Send single-record updates as `application/x-www-form-urlencoded`
    /// POSTs instead of JSON PUTs. Some deployments of the budget service
    /// only accept the form shape.
    pub(crate) form_updates: bool,
}

impl Config {
    /// Split CLI args into the config and the remaining positional args
    /// (program name excluded). `--base-url <url>` wins over the
    /// `CAMPAIGNTUI_BASE_URL` environment variable, which wins over the
    /// dev default.
    pub(crate) fn split_args(args: &[String]) -> (Config, Vec<String>) {
        let mut base_url = None;
        let mut form_updates = false;
        let mut rest = Vec::new();

        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            if arg == "--base-url" {
                base_url = iter.next().cloned();
            } else if arg == "--form-updates" {
                form_updates = true;
            } else {
                rest.push(arg.clone());
            }
        }

        let base_url = base_url
            .or_else(|| std::env::var("CAMPAIGNTUI_BASE_URL").ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        (
            Config {
                base_url,
                form_updates,
            },
            rest,
        )
    }
}

/// Directory log output goes to, created on demand.
pub(crate) fn log_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "campaigntui", "CampaignTUI")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let dir = proj_dirs.data_dir().join("logs");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
    Ok(dir)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
