//! Business day calendars and conventions.
//!
//! Business days are determined by weekday only. Holiday calendars are not
//! modelled.

mod conventions;

pub use conventions::{adjust, BusinessDayConvention};

use crate::types::Date;

/// Trait for business day calendars.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &'static str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Adjusts a date according to the given business day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Date {
        conventions::adjust(date, convention, self)
    }
}

/// A weekend-only calendar (no holidays).
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &'static str {
        "Weekend Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekend_calendar() {
        let cal = WeekendCalendar;
        // 2024-11-24 is a Sunday
        assert!(!cal.is_business_day(Date::from_ymd(2024, 11, 24).unwrap()));
        assert!(cal.is_business_day(Date::from_ymd(2024, 11, 25).unwrap()));
    }

    #[test]
    fn test_calendar_adjust() {
        let cal = WeekendCalendar;
        let sunday = Date::from_ymd(2024, 11, 24).unwrap();
        assert_eq!(
            cal.adjust(sunday, BusinessDayConvention::Following),
            Date::from_ymd(2024, 11, 25).unwrap()
        );
        assert_eq!(
            cal.adjust(sunday, BusinessDayConvention::ModifiedPreceding),
            Date::from_ymd(2024, 11, 22).unwrap()
        );
    }
}
