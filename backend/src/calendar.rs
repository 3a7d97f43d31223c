//! Business-day calendar policy.
//!
//! A date is eligible for hearings iff its weekday is not Saturday/Sunday
//! and it does not appear in the configured holiday set. The holiday set is
//! injected data (see [`crate::config::ScheduleConfig`]), never derived.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Display classification for a calendar date.
///
/// Mutually exclusive, evaluated Holiday first, then Weekend, else
/// Business. A holiday falling on a weekend reports `Holiday`; both are
/// excluded from hearings exactly the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayClass {
    Business,
    Weekend,
    Holiday,
}

impl DayClass {
    /// Whether hearings may be placed on a day of this class.
    pub fn is_business(self) -> bool {
        self == DayClass::Business
    }
}

/// Calendar policy: weekday rule plus the injected holiday set.
#[derive(Debug, Clone, Default)]
pub struct CalendarPolicy {
    holidays: HashSet<NaiveDate>,
}

impl CalendarPolicy {
    pub fn new(holidays: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            holidays: holidays.into_iter().collect(),
        }
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    /// A business day is a weekday that is not in the holiday set.
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !is_weekend(date) && !self.is_holiday(date)
    }

    pub fn classify(&self, date: NaiveDate) -> DayClass {
        if self.is_holiday(date) {
            DayClass::Holiday
        } else if is_weekend(date) {
            DayClass::Weekend
        } else {
            DayClass::Business
        }
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
