//! Valuation settings.
//!
//! ```toml
//! ytm_initial_guess = 5.0
//! ytm_tolerance = 1e-10
//! ytm_max_iterations = 100
//! ytm_bracket = [-99.0, 100.0]
//! ```

use serde::{Deserialize, Serialize};

use yieldline_math::solvers::SolverConfig;

use crate::error::{BondError, BondResult};

/// Settings for the yield-to-maturity search.
///
/// Yields are in percent. The bracket bounds the effective rate (yield plus
/// shift) searched when Newton-Raphson fails.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValuationConfig {
    /// Starting yield for Newton-Raphson, in percent.
    pub ytm_initial_guess: f64,
    /// Absolute tolerance on the price residual.
    pub ytm_tolerance: f64,
    /// Iteration budget for each solver stage.
    pub ytm_max_iterations: u32,
    /// Fallback bracket for Brent's method, in percent.
    pub ytm_bracket: (f64, f64),
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            ytm_initial_guess: 5.0,
            ytm_tolerance: 1e-10,
            ytm_max_iterations: 100,
            ytm_bracket: (-99.0, 100.0),
        }
    }
}

impl ValuationConfig {
    /// Parses a config from TOML and validates it.
    ///
    /// Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> BondResult<Self> {
        let config: Self =
            toml::from_str(s).map_err(|e| BondError::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the solver settings are usable.
    pub fn validate(&self) -> BondResult<()> {
        if !self.ytm_initial_guess.is_finite() {
            return Err(BondError::invalid_config("ytm_initial_guess must be finite"));
        }
        if !(self.ytm_tolerance.is_finite() && self.ytm_tolerance > 0.0) {
            return Err(BondError::invalid_config("ytm_tolerance must be positive"));
        }
        if self.ytm_max_iterations == 0 {
            return Err(BondError::invalid_config("ytm_max_iterations must be at least 1"));
        }
        let (lo, hi) = self.ytm_bracket;
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            return Err(BondError::invalid_config(format!(
                "ytm_bracket [{lo}, {hi}] must be an increasing pair of finite numbers"
            )));
        }
        if lo <= -100.0 {
            return Err(BondError::invalid_config(format!(
                "ytm_bracket lower bound {lo} must be above -100"
            )));
        }
        Ok(())
    }

    /// Returns the solver settings.
    #[must_use]
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig::new(self.ytm_tolerance, self.ytm_max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ValuationConfig::default();
        assert_eq!(config.ytm_initial_guess, 5.0);
        assert_eq!(config.ytm_bracket, (-99.0, 100.0));
        assert!(config.validate().is_ok());
        assert_eq!(config.solver_config().max_iterations, 100);
    }

    #[test]
    fn test_partial_toml() {
        let config = ValuationConfig::from_toml_str("ytm_initial_guess = 3.0\n").unwrap();
        assert_eq!(config.ytm_initial_guess, 3.0);
        assert_eq!(config.ytm_max_iterations, 100);
    }

    #[test]
    fn test_bracket_from_toml() {
        let config = ValuationConfig::from_toml_str("ytm_bracket = [-50.0, 50.0]\n").unwrap();
        assert_eq!(config.ytm_bracket, (-50.0, 50.0));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(ValuationConfig::from_toml_str("ytm_tolerance = 0.0\n").is_err());
        assert!(ValuationConfig::from_toml_str("ytm_bracket = [10.0, 5.0]\n").is_err());
        assert!(ValuationConfig::from_toml_str("ytm_bracket = [-100.0, 5.0]\n").is_err());
        assert!(ValuationConfig::from_toml_str("unknown = 1\n").is_err());
    }
}
