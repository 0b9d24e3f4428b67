use clap::{ArgAction, Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

use crate::config::Settings;
use crate::core::tolerance::Tolerance;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "quadroot",
    about = "Solve a·x² + b·x + c = 0; pass a b c, or enter them at the prompt",
    version
)]
pub struct QuadCli {
    /// Path to config (TOML); default: ~/.quadroot/config.toml
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(long = "format", value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Disable colored messages
    #[arg(long = "no-color", action = ArgAction::SetTrue)]
    pub no_color: bool,

    /// Relative tolerance for reporting a repeated root
    #[arg(long = "rel-tol", value_name = "REL")]
    pub rel_tol: Option<f64>,

    /// Absolute tolerance for reporting a repeated root
    #[arg(long = "abs-tol", value_name = "ABS")]
    pub abs_tol: Option<f64>,

    /// Coefficients a b c. Anything other than three numbers opens the prompt.
    /// Options go before the coefficients; everything from the first
    /// coefficient on is taken verbatim.
    #[arg(
        value_name = "COEFFS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub coeffs: Vec<String>,
}

impl QuadCli {
    /// Flags win over the config file.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(format) = self.format {
            settings.format = format;
        }
        if self.no_color {
            settings.color = false;
        }
        if self.rel_tol.is_some() || self.abs_tol.is_some() {
            settings.tolerance = Tolerance::new(
                self.rel_tol.unwrap_or(settings.tolerance.rel),
                self.abs_tol.unwrap_or(settings.tolerance.abs),
            );
        }
    }
}
