//! Cash flow generation for bonds.
//!
//! [`CashFlowGenerator`] projects every scheduled payment on or after the
//! trade date and discounts it on a zero-rate curve:
//!
//! - coupon accrues from the preceding schedule date (the issue date for the
//!   first) under the bond's day count convention
//! - discounting time is cumulative accrual days of the retained payments
//!   over a fixed 360-day year
//! - the discount factor is `(1 + r / 100) ^ -t` with `r` the shifted curve
//!   rate in percent

mod record;
mod schedule;

pub use record::{CashFlowRecord, DISCOUNT_DAY_BASIS};
pub use schedule::{generate_schedule, Schedule, ScheduleConfig};

use yieldline_curves::{YieldCurveSet, ZeroRateCurve};

use crate::error::{BondError, BondResult};
use crate::types::{BondTerms, TradeContext};

/// Generates discounted cash flows for bonds.
pub struct CashFlowGenerator;

impl CashFlowGenerator {
    /// Projects the cash flows of a position on a given curve.
    ///
    /// Payment dates strictly before the trade date are skipped; no partial
    /// period is emitted for them. Returns an empty vector when the trade
    /// date is after maturity.
    ///
    /// # Errors
    ///
    /// - `BondError::InvalidTerms` if the terms fail validation
    /// - `BondError::DegenerateValuation` if a shifted rate reaches -100%
    pub fn generate(
        terms: &BondTerms,
        curve: &ZeroRateCurve,
        trade: &TradeContext,
    ) -> BondResult<Vec<CashFlowRecord>> {
        terms.validate()?;

        let schedule = terms.schedule()?;
        let schedule_len = schedule.len() as f64;
        let pieces = trade.signed_pieces as f64;
        let nominal = terms.nominal_f64()?;
        let coupon_rate = terms.coupon_rate_f64()?;
        let amortizing = terms.principal_frequency.is_amortizing();

        let mut outstanding = pieces * nominal;
        let mut cumulative_days = 0_i64;
        let mut records = Vec::with_capacity(schedule.len());

        for (accrual_start, payment_date) in schedule.periods() {
            if payment_date < trade.trade_date {
                continue;
            }

            let accrual_days = terms.day_count.accrual_days(accrual_start, payment_date);
            let accrual_fraction = terms.day_count.year_fraction(accrual_start, payment_date);
            let coupon = pieces * nominal * coupon_rate / 100.0 * accrual_fraction;
            cumulative_days += accrual_days;

            let principal = if payment_date == terms.maturity_date {
                outstanding
            } else if amortizing {
                pieces * nominal / schedule_len
            } else {
                0.0
            };
            outstanding -= principal;

            let time = cumulative_days as f64 / DISCOUNT_DAY_BASIS;
            let discount_rate = curve.rate_at(time)? + trade.shift_percent;
            let base = 1.0 + discount_rate / 100.0;
            if base <= 0.0 {
                return Err(BondError::degenerate(format!(
                    "discount rate {discount_rate}% on {payment_date} leaves no positive discount base"
                )));
            }
            let discount_factor = base.powf(-time);

            records.push(CashFlowRecord {
                payment_date,
                coupon,
                principal,
                accrual_days,
                cumulative_days,
                remaining_principal: outstanding,
                discount_rate,
                discounted_coupon: coupon * discount_factor,
                discounted_principal: principal * discount_factor,
            });
        }

        Ok(records)
    }
}

/// Projects the cash flows of a position, selecting the curve observed on
/// the trade date in the bond's currency.
///
/// # Errors
///
/// Returns `CurveError::NoCurveData` (wrapped) if the set has no points for
/// that pair, or any error from [`CashFlowGenerator::generate`].
pub fn compute_cash_flows(
    terms: &BondTerms,
    curves: &YieldCurveSet,
    trade: &TradeContext,
) -> BondResult<Vec<CashFlowRecord>> {
    let curve = curves.curve(terms.currency, trade.trade_date)?;
    CashFlowGenerator::generate(terms, &curve, trade)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;
    use yieldline_core::calendars::BusinessDayConvention;
    use yieldline_core::daycounts::DayCountConvention;
    use yieldline_core::{CouponFrequency, CurrencyCode, Date, PrincipalFrequency};

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn czk() -> CurrencyCode {
        CurrencyCode::new("CZK").unwrap()
    }

    fn terms(principal_frequency: PrincipalFrequency) -> BondTerms {
        BondTerms {
            name: "Test 3% 2026".to_string(),
            isin: "CZ0000000001".to_string(),
            issue_date: date(2024, 1, 15),
            maturity_date: date(2026, 1, 15),
            nominal_value: dec!(1000),
            currency: czk(),
            coupon_rate: dec!(3),
            coupon_frequency: CouponFrequency::SemiAnnual,
            principal_frequency,
            day_count: DayCountConvention::Thirty360,
            business_day_convention: BusinessDayConvention::Following,
        }
    }

    fn flat_curve(rate: f64) -> ZeroRateCurve {
        ZeroRateCurve::new(czk(), date(2024, 1, 15), vec![(1.0, rate)]).unwrap()
    }

    #[test]
    fn test_bullet_flows() {
        let trade = TradeContext::with_signed_pieces(date(2024, 1, 15), 1, 0.0);
        let flows =
            CashFlowGenerator::generate(&terms(PrincipalFrequency::AtMaturity), &flat_curve(0.0), &trade)
                .unwrap();

        assert_eq!(flows.len(), 4);
        for flow in &flows {
            assert_eq!(flow.accrual_days, 180);
            assert_relative_eq!(flow.coupon, 15.0);
            // zero rate, undiscounted
            assert_relative_eq!(flow.discounted_coupon, flow.coupon);
        }
        assert_eq!(flows[3].cumulative_days, 720);
        assert_relative_eq!(flows[3].time_to_payment(), 2.0);
        assert_relative_eq!(flows[2].principal, 0.0);
        assert_relative_eq!(flows[2].remaining_principal, 1000.0);
        assert_relative_eq!(flows[3].principal, 1000.0);
        assert_relative_eq!(flows[3].remaining_principal, 0.0);
    }

    #[test]
    fn test_act365_coupon_fraction() {
        let mut bond = terms(PrincipalFrequency::AtMaturity);
        bond.day_count = DayCountConvention::Act365;
        let trade = TradeContext::with_signed_pieces(date(2024, 1, 15), 1, 0.0);
        let flows = CashFlowGenerator::generate(&bond, &flat_curve(0.0), &trade).unwrap();

        assert_eq!(flows[0].accrual_days, 182);
        assert_relative_eq!(flows[0].coupon, 30.0 * 182.0 / 365.0);
        // discounting time stays on the 360-day axis
        assert_relative_eq!(flows[0].time_to_payment(), 182.0 / 360.0);
    }

    #[test]
    fn test_amortizing_flows() {
        let trade = TradeContext::with_signed_pieces(date(2024, 1, 15), 2, 0.0);
        let flows = CashFlowGenerator::generate(
            &terms(PrincipalFrequency::SemiAnnual),
            &flat_curve(2.0),
            &trade,
        )
        .unwrap();

        for flow in &flows[..3] {
            assert_relative_eq!(flow.principal, 500.0);
        }
        assert_relative_eq!(flows[3].principal, 500.0);
        let repaid: f64 = flows.iter().map(|f| f.principal).sum();
        assert_relative_eq!(repaid, 2000.0);
        assert_relative_eq!(flows[3].remaining_principal, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_skipped_dates_keep_outstanding() {
        let trade = TradeContext::with_signed_pieces(date(2025, 3, 1), 1, 0.0);
        let flows = CashFlowGenerator::generate(
            &terms(PrincipalFrequency::SemiAnnual),
            &flat_curve(2.0),
            &trade,
        )
        .unwrap();

        assert_eq!(flows.len(), 2);
        assert_eq!(flows[0].payment_date, date(2025, 7, 15));
        assert_eq!(flows[0].cumulative_days, 180);
        assert_relative_eq!(flows[0].principal, 250.0);
        // nothing was repaid on the skipped dates
        assert_relative_eq!(flows[1].principal, 750.0);
    }

    #[test]
    fn test_discounting_uses_shifted_rate() {
        let trade = TradeContext::with_signed_pieces(date(2024, 1, 15), 1, 0.5);
        let flows =
            CashFlowGenerator::generate(&terms(PrincipalFrequency::AtMaturity), &flat_curve(2.0), &trade)
                .unwrap();

        let last = flows[3];
        assert_relative_eq!(last.discount_rate, 2.5);
        assert_relative_eq!(last.discounted_principal, 1000.0 * 1.025_f64.powf(-2.0));
    }

    #[test]
    fn test_sell_flips_signs() {
        let trade = TradeContext::with_signed_pieces(date(2024, 1, 15), -3, 0.0);
        let flows =
            CashFlowGenerator::generate(&terms(PrincipalFrequency::AtMaturity), &flat_curve(2.0), &trade)
                .unwrap();
        assert!(flows.iter().all(|f| f.coupon < 0.0));
        assert_relative_eq!(flows[3].principal, -3000.0);
    }

    #[test]
    fn test_trade_after_maturity_is_empty() {
        let trade = TradeContext::with_signed_pieces(date(2027, 1, 1), 1, 0.0);
        let flows =
            CashFlowGenerator::generate(&terms(PrincipalFrequency::AtMaturity), &flat_curve(2.0), &trade)
                .unwrap();
        assert!(flows.is_empty());
    }

    #[test]
    fn test_rate_below_minus_hundred_is_degenerate() {
        let trade = TradeContext::with_signed_pieces(date(2024, 1, 15), 1, -150.0);
        let err =
            CashFlowGenerator::generate(&terms(PrincipalFrequency::AtMaturity), &flat_curve(2.0), &trade)
                .unwrap_err();
        assert!(matches!(err, BondError::DegenerateValuation { .. }));
    }

    #[test]
    fn test_compute_requires_curve_for_trade_date() {
        let curves: YieldCurveSet = vec![yieldline_curves::YieldCurvePoint::new(
            czk(),
            date(2024, 1, 15),
            1.0,
            2.0,
        )]
        .into_iter()
        .collect();

        let trade = TradeContext::with_signed_pieces(date(2024, 1, 16), 1, 0.0);
        let err =
            compute_cash_flows(&terms(PrincipalFrequency::AtMaturity), &curves, &trade).unwrap_err();
        assert!(matches!(
            err,
            BondError::Curve(yieldline_curves::CurveError::NoCurveData { .. })
        ));
    }
}
