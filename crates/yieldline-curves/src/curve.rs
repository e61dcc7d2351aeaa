//! Interpolating zero-rate curve for one currency and observation date.

use yieldline_core::{CurrencyCode, Date};
use yieldline_math::interpolation::{Interpolator, LinearInterpolator};

use crate::error::{CurveError, CurveResult};

/// A zero-rate curve over tenors in years.
///
/// Rates between pillars are linearly interpolated. Below the shortest and
/// above the longest tenor the boundary rate is held flat.
#[derive(Debug, Clone)]
pub struct ZeroRateCurve {
    currency: CurrencyCode,
    observation_date: Date,
    tenors: Vec<f64>,
    rates: Vec<f64>,
    interpolator: LinearInterpolator,
}

impl ZeroRateCurve {
    /// Creates a curve from `(tenor, rate)` pillars in any order.
    ///
    /// # Errors
    ///
    /// - `CurveError::NoCurveData` when `pillars` is empty
    /// - `CurveError::InvalidPoint` for a negative or non-finite tenor or a
    ///   non-finite rate
    /// - `CurveError::DuplicateTenor` when two pillars share a tenor but
    ///   quote different rates
    ///
    /// Repeated identical pillars are merged.
    pub fn new(
        currency: CurrencyCode,
        observation_date: Date,
        mut pillars: Vec<(f64, f64)>,
    ) -> CurveResult<Self> {
        if pillars.is_empty() {
            return Err(CurveError::no_curve_data(currency, observation_date));
        }

        for &(tenor, rate) in &pillars {
            if !tenor.is_finite() || tenor < 0.0 {
                return Err(CurveError::invalid_point(format!(
                    "tenor {tenor} must be a finite number of years"
                )));
            }
            if !rate.is_finite() {
                return Err(CurveError::invalid_point(format!(
                    "rate {rate} at tenor {tenor} is not finite"
                )));
            }
        }

        pillars.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
        pillars.dedup();
        if let Some(pair) = pillars.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(CurveError::DuplicateTenor {
                tenor: pair[0].0,
                currency,
                date: observation_date,
            });
        }

        let (tenors, rates): (Vec<f64>, Vec<f64>) = pillars.into_iter().unzip();
        let interpolator =
            LinearInterpolator::new(tenors.clone(), rates.clone())?.with_flat_extrapolation();

        Ok(Self {
            currency,
            observation_date,
            tenors,
            rates,
            interpolator,
        })
    }

    /// Returns the rate in percent at a tenor in years.
    pub fn rate_at(&self, tenor: f64) -> CurveResult<f64> {
        Ok(self.interpolator.interpolate(tenor)?)
    }

    /// Returns the curve currency.
    #[must_use]
    pub fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// Returns the observation date.
    #[must_use]
    pub fn observation_date(&self) -> Date {
        self.observation_date
    }

    /// Returns the pillar tenors, ascending.
    #[must_use]
    pub fn tenors(&self) -> &[f64] {
        &self.tenors
    }

    /// Returns the pillar rates in tenor order.
    #[must_use]
    pub fn rates(&self) -> &[f64] {
        &self.rates
    }

    /// Returns `(tenor, rate)` pairs in tenor order.
    pub fn pillars(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.tenors.iter().copied().zip(self.rates.iter().copied())
    }

    /// Returns the number of pillars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tenors.len()
    }

    /// Always false; a curve holds at least one pillar.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tenors.is_empty()
    }
}
