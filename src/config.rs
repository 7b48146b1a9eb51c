//! Optional TOML configuration for calendar generation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use semcal_core::ics::{DEFAULT_EXCLUDED_TITLE, DEFAULT_PLACEHOLDER_SUMMARY, DEFAULT_PROD_ID};
use serde::Deserialize;

fn default_exclude_titles() -> Vec<String> {
    vec![DEFAULT_EXCLUDED_TITLE.to_string()]
}

fn default_placeholder_summary() -> String {
    DEFAULT_PLACEHOLDER_SUMMARY.to_string()
}

fn default_prod_id() -> String {
    DEFAULT_PROD_ID.to_string()
}

/// Generation knobs, all optional in the file.
#[derive(Deserialize, Clone)]
pub struct Config {
    /// Lessons whose title contains any of these substrings are skipped.
    #[serde(default = "default_exclude_titles")]
    pub exclude_titles: Vec<String>,

    #[serde(default = "default_placeholder_summary")]
    pub placeholder_summary: String,

    #[serde(default = "default_prod_id")]
    pub prod_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            exclude_titles: default_exclude_titles(),
            placeholder_summary: default_placeholder_summary(),
            prod_id: default_prod_id(),
        }
    }
}

impl Config {
    /// Load from `path`, or fall back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                toml::from_str(&raw)
                    .with_context(|| format!("Failed to parse config {}", path.display()))
            }
            None => Ok(Config::default()),
        }
    }
}
