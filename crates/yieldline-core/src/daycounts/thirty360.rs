//! 30/360 day count convention.

use super::DayCount;
use crate::types::Date;

/// 30/360 day count convention.
///
/// # Rules
///
/// 1. If D1 is 31, change D1 to 30
/// 2. If D2 is 31, change D2 to 30
///
/// There is no special February end-of-month handling: 2024-01-31 to
/// 2024-02-28 counts 28 days.
///
/// # Formula
///
/// $$\text{Days} = 360 \times (Y_2 - Y_1) + 30 \times (M_2 - M_1) + (D_2 - D_1)$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360;

impl DayCount for Thirty360 {
    fn name(&self) -> &'static str {
        "30/360"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let y1 = start.year() as i64;
        let y2 = end.year() as i64;
        let m1 = start.month() as i64;
        let m2 = end.month() as i64;
        let d1 = start.day().min(30) as i64;
        let d2 = end.day().min(30) as i64;

        360 * (y2 - y1) + 30 * (m2 - m1) + (d2 - d1)
    }

    fn basis(&self) -> u32 {
        360
    }
}
