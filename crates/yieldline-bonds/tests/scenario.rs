//! End-to-end valuation of a government bond against a three-pillar curve.

use approx::assert_relative_eq;
use proptest::prelude::*;
use rust_decimal_macros::dec;

use yieldline_bonds::prelude::*;
use yieldline_core::calendars::BusinessDayConvention;
use yieldline_core::daycounts::DayCountConvention;
use yieldline_core::{CouponFrequency, CurrencyCode, Date, PrincipalFrequency};
use yieldline_curves::{CurveError, YieldCurvePoint, YieldCurveSet};

// =============================================================================
// Fixtures
// =============================================================================

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn czk() -> CurrencyCode {
    CurrencyCode::new("CZK").unwrap()
}

fn trade_date() -> Date {
    date(2024, 11, 24)
}

fn bond(principal_frequency: PrincipalFrequency) -> BondTerms {
    BondTerms {
        name: "CZGB 3.00/33".to_string(),
        isin: "CZ0001005037".to_string(),
        issue_date: date(2022, 1, 15),
        maturity_date: date(2033, 1, 15),
        nominal_value: dec!(1000),
        currency: czk(),
        coupon_rate: dec!(3),
        coupon_frequency: CouponFrequency::Annual,
        principal_frequency,
        day_count: DayCountConvention::Thirty360,
        business_day_convention: BusinessDayConvention::Following,
    }
}

fn curves() -> YieldCurveSet {
    [(1.0, 2.0), (3.0, 2.5), (5.0, 3.0)]
        .into_iter()
        .map(|(tenor, rate)| YieldCurvePoint::new(czk(), trade_date(), tenor, rate))
        .collect()
}

fn buy(pieces: u32, shift: f64) -> TradeContext {
    TradeContext::new(trade_date(), TradeDirection::Buy, pieces, shift)
}

// =============================================================================
// Reference scenario
// =============================================================================

#[test]
fn reference_npv_and_duration() {
    let terms = bond(PrincipalFrequency::AtMaturity);
    let value = npv(&terms, &curves(), &buy(1, 0.0)).unwrap();
    let duration = macaulay_duration(&terms, &curves(), &buy(1, 0.0)).unwrap();

    assert!(value > 900.0 && value < 1010.0, "npv {value}");
    assert_relative_eq!(value, 1001.366, epsilon = 1e-2);
    assert!(duration > 0.0 && duration < 8.2, "duration {duration}");
    assert_relative_eq!(duration, 8.012, epsilon = 1e-2);
}

#[test]
fn reference_cash_flows() {
    let flows = compute_cash_flows(
        &bond(PrincipalFrequency::AtMaturity),
        &curves(),
        &buy(1, 0.0),
    )
    .unwrap();

    assert_eq!(flows.len(), 9);
    assert_eq!(flows[0].payment_date, date(2025, 1, 15));
    assert_eq!(flows[0].cumulative_days, 360);
    assert_relative_eq!(flows[0].discount_rate, 2.0);

    // Saturday coupon rolled to Monday: a long and a short period follow
    assert_eq!(flows[3].payment_date, date(2028, 1, 17));
    assert_eq!(flows[3].accrual_days, 362);
    assert_eq!(flows[4].accrual_days, 358);

    let last = flows[8];
    assert_eq!(last.payment_date, date(2033, 1, 15));
    assert_eq!(last.cumulative_days, 3240);
    assert_relative_eq!(last.principal, 1000.0);
    assert_relative_eq!(last.remaining_principal, 0.0);
    assert_relative_eq!(last.discount_rate, 3.0);
}

#[test]
fn flows_are_dated_after_trade_and_ordered() {
    let flows = compute_cash_flows(
        &bond(PrincipalFrequency::AtMaturity),
        &curves(),
        &buy(1, 0.0),
    )
    .unwrap();

    assert!(flows.iter().all(|f| f.payment_date >= trade_date()));
    assert!(flows.windows(2).all(|w| w[0].payment_date < w[1].payment_date));
    assert!(flows
        .windows(2)
        .all(|w| w[0].cumulative_days < w[1].cumulative_days));
}

#[test]
fn missing_curve_date_fails() {
    let terms = bond(PrincipalFrequency::AtMaturity);
    let trade = TradeContext::new(date(2024, 11, 25), TradeDirection::Buy, 1, 0.0);
    let err = npv(&terms, &curves(), &trade).unwrap_err();
    assert_eq!(
        err,
        BondError::Curve(CurveError::no_curve_data(czk(), date(2024, 11, 25)))
    );
}

#[test]
fn repeated_curve_point_prices_like_deduplicated_curve() {
    let repeated: YieldCurveSet = [(1.0, 2.0), (1.0, 2.0), (5.0, 3.0)]
        .into_iter()
        .map(|(tenor, rate)| YieldCurvePoint::new(czk(), trade_date(), tenor, rate))
        .collect();
    let distinct: YieldCurveSet = [(1.0, 2.0), (5.0, 3.0)]
        .into_iter()
        .map(|(tenor, rate)| YieldCurvePoint::new(czk(), trade_date(), tenor, rate))
        .collect();

    let terms = bond(PrincipalFrequency::AtMaturity);
    let trade = buy(1, 0.0);
    assert_eq!(
        npv(&terms, &repeated, &trade).unwrap(),
        npv(&terms, &distinct, &trade).unwrap()
    );
}

#[test]
fn conflicting_curve_point_fails() {
    let conflicting: YieldCurveSet = [(1.0, 2.0), (1.0, 2.2), (5.0, 3.0)]
        .into_iter()
        .map(|(tenor, rate)| YieldCurvePoint::new(czk(), trade_date(), tenor, rate))
        .collect();

    let err = npv(&bond(PrincipalFrequency::AtMaturity), &conflicting, &buy(1, 0.0)).unwrap_err();
    assert!(matches!(
        err,
        BondError::Curve(CurveError::DuplicateTenor { tenor, .. }) if tenor == 1.0
    ));
}

#[test]
fn invalid_terms_fail() {
    let mut terms = bond(PrincipalFrequency::AtMaturity);
    terms.issue_date = terms.maturity_date;
    let err = npv(&terms, &curves(), &buy(1, 0.0)).unwrap_err();
    assert!(matches!(err, BondError::InvalidTerms { .. }));
}

// =============================================================================
// Position size and direction
// =============================================================================

#[test]
fn sell_mirrors_buy() {
    let terms = bond(PrincipalFrequency::AtMaturity);
    let long = npv(&terms, &curves(), &buy(5, 0.0)).unwrap();
    let short = npv(
        &terms,
        &curves(),
        &TradeContext::new(trade_date(), TradeDirection::Sell, 5, 0.0),
    )
    .unwrap();
    assert_relative_eq!(short, -long, epsilon = 1e-9);
}

#[test]
fn npv_scales_with_pieces() {
    let terms = bond(PrincipalFrequency::AtMaturity);
    let one = npv(&terms, &curves(), &buy(1, 0.0)).unwrap();
    let ten = npv(&terms, &curves(), &buy(10, 0.0)).unwrap();
    assert_relative_eq!(ten, 10.0 * one, max_relative = 1e-12);
}

#[test]
fn duration_ignores_direction() {
    let terms = bond(PrincipalFrequency::AtMaturity);
    let long = macaulay_duration(&terms, &curves(), &buy(3, 0.0)).unwrap();
    let short = macaulay_duration(
        &terms,
        &curves(),
        &TradeContext::new(trade_date(), TradeDirection::Sell, 3, 0.0),
    )
    .unwrap();
    assert_relative_eq!(long, short, epsilon = 1e-12);
}

#[test]
fn valuation_is_idempotent() {
    let terms = bond(PrincipalFrequency::Annual);
    let set = curves();
    let first = compute_cash_flows(&terms, &set, &buy(2, 0.25)).unwrap();
    let second = compute_cash_flows(&terms, &set, &buy(2, 0.25)).unwrap();
    assert_eq!(first, second);
}

// =============================================================================
// Amortization
// =============================================================================

#[test]
fn amortizing_principal_is_fully_repaid() {
    let flows =
        compute_cash_flows(&bond(PrincipalFrequency::Annual), &curves(), &buy(1, 0.0)).unwrap();

    // eleven scheduled dates, two before the trade date
    for flow in &flows[..8] {
        assert_relative_eq!(flow.principal, 1000.0 / 11.0, epsilon = 1e-9);
    }
    let repaid: f64 = flows.iter().map(|f| f.principal).sum();
    assert_relative_eq!(repaid, 1000.0, epsilon = 1e-9);
    assert_relative_eq!(flows[8].remaining_principal, 0.0, epsilon = 1e-9);
}

// =============================================================================
// Shifts and yield
// =============================================================================

#[test]
fn npv_falls_as_shift_rises() {
    let terms = bond(PrincipalFrequency::AtMaturity);
    let ladder = ShiftLadder::range(-1.0, 1.0, 0.5).unwrap();
    let results = ladder.evaluate(&terms, &curves(), &buy(1, 0.0)).unwrap();

    assert_eq!(results.len(), 5);
    assert_eq!(results[2].shift_percent, 0.0);
    assert!(results.windows(2).all(|w| w[0].npv > w[1].npv));

    let base = npv(&terms, &curves(), &buy(1, 0.0)).unwrap();
    assert_relative_eq!(results[2].npv, base, epsilon = 1e-9);
}

#[test]
fn yield_reprices_npv() {
    let terms = bond(PrincipalFrequency::AtMaturity);
    let config = ValuationConfig::default();
    let target = npv(&terms, &curves(), &buy(1, 0.0)).unwrap();
    let y = yield_to_maturity(&terms, &curves(), &buy(1, 0.0), target, &config).unwrap();

    assert_relative_eq!(y, 2.982, epsilon = 1e-2);

    let flows = compute_cash_flows(&terms, &curves(), &buy(1, 0.0)).unwrap();
    let repriced: f64 = flows
        .iter()
        .map(|f| f.total() * (1.0 + y / 100.0).powf(-f.time_to_payment()))
        .sum();
    assert_relative_eq!(repriced, target, max_relative = 1e-4);
}

#[test]
fn yield_for_sell_matches_buy() {
    let terms = bond(PrincipalFrequency::AtMaturity);
    let config = ValuationConfig::default();
    let sell = TradeContext::new(trade_date(), TradeDirection::Sell, 1, 0.0);

    let long = yield_to_maturity(&terms, &curves(), &buy(1, 0.0), 990.0, &config).unwrap();
    let short = yield_to_maturity(&terms, &curves(), &sell, -990.0, &config).unwrap();
    assert_relative_eq!(long, short, epsilon = 1e-8);
}

#[test]
fn yield_after_maturity_fails() {
    let terms = bond(PrincipalFrequency::AtMaturity);
    let late = date(2034, 1, 2);
    let set: YieldCurveSet = vec![YieldCurvePoint::new(czk(), late, 1.0, 2.0)]
        .into_iter()
        .collect();
    let trade = TradeContext::new(late, TradeDirection::Buy, 1, 0.0);

    assert_eq!(npv(&terms, &set, &trade).unwrap(), 0.0);
    assert!(matches!(
        macaulay_duration(&terms, &set, &trade),
        Err(BondError::DegenerateValuation { .. })
    ));
    assert!(matches!(
        yield_to_maturity(&terms, &set, &trade, 1000.0, &ValuationConfig::default()),
        Err(BondError::YtmNotConverged { .. })
    ));
}

#[test]
fn report_combines_metrics() {
    let terms = bond(PrincipalFrequency::AtMaturity);
    let price = TradePrice::new(dec!(98.5), dec!(25.5));
    let report = value_bond(
        &terms,
        &curves(),
        &buy(2, 0.5),
        Some(&price),
        &ValuationConfig::default(),
    )
    .unwrap();

    let base = npv(&terms, &curves(), &buy(2, 0.0)).unwrap();
    assert_relative_eq!(report.npv_base, base, epsilon = 1e-9);
    assert!(report.npv_scenario < report.npv_base);
    assert_eq!(report.cash_flows.len(), 9);
    assert_relative_eq!(report.target_price.unwrap(), 2021.0, epsilon = 1e-9);
    assert!(report.yield_to_maturity.is_some());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["isin"], "CZ0001005037");
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn schedule_ends_at_maturity(
        issue_year in 2000i32..2030,
        issue_month in 1u32..=12,
        issue_day in 1u32..=28,
        years in 1i32..15,
        frequency in prop::sample::select(CouponFrequency::all().to_vec()),
    ) {
        let issue = date(issue_year, issue_month, issue_day);
        let maturity = issue.add_years(years).unwrap();
        let dates = generate_schedule(
            issue,
            maturity,
            frequency,
            BusinessDayConvention::ModifiedFollowing,
        )
        .unwrap();

        prop_assert_eq!(dates.last().copied(), Some(maturity));
        prop_assert!(dates.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(dates.iter().all(|d| *d > issue && *d <= maturity));
        prop_assert!(dates[..dates.len() - 1].iter().all(|d| !d.is_weekend()));
    }

    #[test]
    fn principal_is_conserved(
        pieces in 1u32..50,
        shift in -2.0f64..2.0,
        month in 1u32..=12,
    ) {
        let trade = TradeContext::new(date(2024, month, 10), TradeDirection::Buy, pieces, shift);
        let set: YieldCurveSet = [(1.0, 2.0), (5.0, 3.0)]
            .into_iter()
            .map(|(tenor, rate)| YieldCurvePoint::new(czk(), trade.trade_date, tenor, rate))
            .collect();

        let flows = compute_cash_flows(&bond(PrincipalFrequency::Annual), &set, &trade).unwrap();
        let repaid: f64 = flows.iter().map(|f| f.principal).sum();
        prop_assert!((repaid - 1000.0 * f64::from(pieces)).abs() < 1e-6);
    }

    #[test]
    fn npv_flips_sign_with_direction(
        pieces in 1u32..100,
        shift in -1.5f64..3.0,
    ) {
        let terms = bond(PrincipalFrequency::AtMaturity);
        let long = npv(&terms, &curves(), &buy(pieces, shift)).unwrap();
        let short = npv(
            &terms,
            &curves(),
            &TradeContext::new(trade_date(), TradeDirection::Sell, pieces, shift),
        )
        .unwrap();

        prop_assert!(long > 0.0);
        prop_assert!((long + short).abs() < 1e-9 * long);
    }
}
