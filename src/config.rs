//! User settings: built-in defaults + optional TOML config.
//!
//! ```toml
//! color = true
//! format = "text"   # or "json"
//!
//! [tolerance]
//! rel = 1e-9
//! abs = 1e-12
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::core::tolerance::Tolerance;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub color: bool,
    pub format: OutputFormat,
    pub tolerance: Tolerance,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            color: true,
            format: OutputFormat::Text,
            tolerance: Tolerance::default(),
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    // ~\Users\you\.quadroot\config.toml on Windows; ~/.quadroot/config.toml elsewhere
    dirs_next::home_dir().map(|h| h.join(".quadroot").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}

impl Settings {
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let raw: Settings = toml::from_str(src).context("Parse config TOML")?;
        Ok(Settings {
            tolerance: Tolerance::new(raw.tolerance.rel, raw.tolerance.abs),
            ..raw
        })
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let src = fs::read_to_string(path)
            .with_context(|| format!("Read config {}", path.display()))?;
        Self::from_toml_str(&src)
    }

    /// Never fails: an explicit path that is missing or broken warns and
    /// falls back to defaults; a missing default file is silent.
    pub fn load(cli_path: &Option<PathBuf>) -> Self {
        let Some(p) = resolve_config_path(cli_path) else {
            return Self::default();
        };
        if !p.exists() {
            if cli_path.is_some() {
                eprintln!("(warn) config path not found: {}", p.display());
            }
            return Self::default();
        }
        match Self::from_toml_file(&p) {
            Ok(settings) => {
                crate::debug_log!("loaded config {}", p.display());
                settings
            }
            Err(e) => {
                eprintln!("(warn) failed to load config {}: {e:#}", p.display());
                Self::default()
            }
        }
    }
}
