//! Application configuration and dataset access.
//!
//! ```toml
//! bonds_path = "data/bond_emissions.csv"
//! curves_path = "data/yield_curves.csv"
//! currencies_path = "data/currencies.csv"
//! format = "table"
//!
//! [valuation]
//! ytm_initial_guess = 5.0
//! ytm_bracket = [-99.0, 100.0]
//! ```
//!
//! Command-line flags take precedence over file values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use yieldline_bonds::ValuationConfig;
use yieldline_curves::YieldCurveSet;
use yieldline_ext_file::{load_yield_curves, BondCatalog, CurrencyTable};

use crate::cli::{Cli, OutputFormat};
use crate::error::{CliError, CliResult};

/// Bond dataset used when neither flag nor config names one.
pub const DEFAULT_BONDS_PATH: &str = "data/bond_emissions.csv";

/// Curve dataset used when neither flag nor config names one.
pub const DEFAULT_CURVES_PATH: &str = "data/yield_curves.csv";

/// Currency name dataset used when neither flag nor config names one.
pub const DEFAULT_CURRENCIES_PATH: &str = "data/currencies.csv";

/// Contents of the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Bond emission dataset.
    pub bonds_path: Option<PathBuf>,
    /// Yield curve dataset.
    pub curves_path: Option<PathBuf>,
    /// Currency name dataset.
    pub currencies_path: Option<PathBuf>,
    /// Default output format.
    pub format: Option<OutputFormat>,
    /// Yield search settings.
    pub valuation: ValuationConfig,
}

impl AppConfig {
    /// Parses and validates a configuration file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config: Self = toml::from_str(&text).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.valuation.validate().map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}

/// Resolved settings for one invocation.
#[derive(Debug, Clone)]
pub struct Session {
    /// Output format.
    pub format: OutputFormat,
    /// Suppress headers and notes.
    pub quiet: bool,
    /// Yield search settings.
    pub valuation: ValuationConfig,
    bonds_path: PathBuf,
    curves_path: PathBuf,
    currencies_path: PathBuf,
}

impl Session {
    /// Merges flags over the optional config file.
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        let config = match &cli.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };

        Ok(Self {
            format: cli.format.or(config.format).unwrap_or_default(),
            quiet: cli.quiet,
            valuation: config.valuation,
            bonds_path: cli
                .bonds
                .clone()
                .or(config.bonds_path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_BONDS_PATH)),
            curves_path: cli
                .curves
                .clone()
                .or(config.curves_path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CURVES_PATH)),
            currencies_path: cli
                .currencies
                .clone()
                .or(config.currencies_path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CURRENCIES_PATH)),
        })
    }

    /// Loads the bond emission dataset.
    pub fn catalog(&self) -> anyhow::Result<BondCatalog> {
        info!(path = %self.bonds_path.display(), "loading bond dataset");
        Ok(BondCatalog::from_path(&self.bonds_path)?)
    }

    /// Loads the yield curve dataset.
    pub fn curves(&self) -> anyhow::Result<YieldCurveSet> {
        info!(path = %self.curves_path.display(), "loading curve dataset");
        Ok(load_yield_curves(&self.curves_path)?)
    }

    /// Loads the currency name dataset.
    pub fn currencies(&self) -> anyhow::Result<CurrencyTable> {
        info!(path = %self.currencies_path.display(), "loading currency dataset");
        Ok(CurrencyTable::from_path(&self.currencies_path)?)
    }

    /// Returns true if headers and notes should be printed.
    pub fn decorated(&self) -> bool {
        !self.quiet && self.format == OutputFormat::Table
    }
}
