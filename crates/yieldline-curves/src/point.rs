//! Raw yield curve observations.

use serde::{Deserialize, Serialize};
use yieldline_core::{CurrencyCode, Date};

use crate::curve::ZeroRateCurve;
use crate::error::CurveResult;

/// One observed curve point.
///
/// Field names match the columns of the yield curve dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldCurvePoint {
    /// Currency of the curve.
    pub currency: CurrencyCode,
    /// Date the curve was observed.
    pub observation_date: Date,
    /// Tenor in years.
    pub tenor: f64,
    /// Rate in percent.
    pub rate: f64,
}

impl YieldCurvePoint {
    /// Creates a new curve point.
    #[must_use]
    pub fn new(currency: CurrencyCode, observation_date: Date, tenor: f64, rate: f64) -> Self {
        Self {
            currency,
            observation_date,
            tenor,
            rate,
        }
    }

    /// Returns true if the point belongs to the given curve.
    #[must_use]
    pub fn matches(&self, currency: CurrencyCode, date: Date) -> bool {
        self.currency == currency && self.observation_date == date
    }
}

/// A collection of curve points across currencies and observation dates.
///
/// The set is never mutated by valuation; [`YieldCurveSet::curve`] copies the
/// matching subset into a fresh [`ZeroRateCurve`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YieldCurveSet {
    points: Vec<YieldCurvePoint>,
}

impl YieldCurveSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set from points.
    #[must_use]
    pub fn from_points(points: Vec<YieldCurvePoint>) -> Self {
        Self { points }
    }

    /// Adds a point.
    pub fn push(&mut self, point: YieldCurvePoint) {
        self.points.push(point);
    }

    /// Returns all points in insertion order.
    #[must_use]
    pub fn points(&self) -> &[YieldCurvePoint] {
        &self.points
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the set holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the points of one curve, sorted ascending by tenor.
    #[must_use]
    pub fn select(&self, currency: CurrencyCode, date: Date) -> Vec<YieldCurvePoint> {
        let mut selected: Vec<YieldCurvePoint> = self
            .points
            .iter()
            .filter(|p| p.matches(currency, date))
            .copied()
            .collect();
        selected.sort_by(|a, b| a.tenor.total_cmp(&b.tenor));
        selected
    }

    /// Builds the interpolating curve for one currency and observation date.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::NoCurveData` if no point matches the pair.
    pub fn curve(&self, currency: CurrencyCode, date: Date) -> CurveResult<ZeroRateCurve> {
        let pillars = self
            .select(currency, date)
            .into_iter()
            .map(|p| (p.tenor, p.rate))
            .collect();
        ZeroRateCurve::new(currency, date, pillars)
    }

    /// Returns the distinct currencies, sorted.
    #[must_use]
    pub fn currencies(&self) -> Vec<CurrencyCode> {
        let mut currencies: Vec<CurrencyCode> = self.points.iter().map(|p| p.currency).collect();
        currencies.sort();
        currencies.dedup();
        currencies
    }

    /// Returns the distinct observation dates for a currency, ascending.
    #[must_use]
    pub fn observation_dates(&self, currency: CurrencyCode) -> Vec<Date> {
        let mut dates: Vec<Date> = self
            .points
            .iter()
            .filter(|p| p.currency == currency)
            .map(|p| p.observation_date)
            .collect();
        dates.sort();
        dates.dedup();
        dates
    }
}

impl FromIterator<YieldCurvePoint> for YieldCurveSet {
    fn from_iter<I: IntoIterator<Item = YieldCurvePoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<YieldCurvePoint> for YieldCurveSet {
    fn extend<I: IntoIterator<Item = YieldCurvePoint>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}
