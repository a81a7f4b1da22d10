//! Proleptic Gregorian calendar.

use std::str::FromStr;

use tracing::trace;

use crate::calendar::{AbsoluteDay, Calendar};
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DECEMBER, FEBRUARY, FEBRUARY_DAYS_COMMON,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE, MAX_ABSOLUTE_DAY, MAX_YEAR, MIN_DAY, MIN_YEAR,
    THIRTY_DAY_MONTHS, THIRTY_DAYS, THIRTY_ONE_DAYS, YEAR_ESTIMATE_DAYS,
};
use crate::prelude::*;
use crate::{DateError, HebrewDate, parse};

/// A date in the proleptic Gregorian calendar.
///
/// Fields compare in calendar order, so the derived ordering matches the
/// absolute day ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct GregorianDate {
    year:  i32,
    month: u8,
    day:   u8,
}

impl GregorianDate {
    /// Creates a date after checking the month and day against the year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` outside `MIN_YEAR..=MAX_YEAR`,
    /// `DateError::InvalidMonth` outside 1-12 and `DateError::InvalidDay` past
    /// the end of the month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateError::InvalidYear(year));
        }
        Self::with_valid_fields(year, month, day)
    }

    /// Checks month and day for any year, including the zero and negative
    /// years `from_absolute` produces before the epoch.
    fn with_valid_fields(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if !(JANUARY..=DECEMBER).contains(&month) {
            return Err(DateError::InvalidMonth {
                year,
                month,
                max: DECEMBER,
            });
        }
        let max = last_day_of_month(year, month);
        if !(MIN_DAY..=max).contains(&day) {
            return Err(DateError::InvalidDay {
                year,
                month,
                day,
                max,
            });
        }
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Creates a date without validation. Out-of-range fields convert to
    /// meaningless absolute days rather than failing.
    pub const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month, 1 = January.
    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Whether this date's year has a February 29.
    pub const fn in_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Number of days in this date's month.
    pub fn days_in_month(&self) -> u8 {
        last_day_of_month(self.year, self.month)
    }
}

impl Calendar for GregorianDate {
    fn to_absolute(&self) -> AbsoluteDay {
        absolute_from_parts(self.year, self.month, self.day)
    }

    /// Days beyond `MAX_ABSOLUTE_DAY` in either direction are clamped to it.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from_absolute(day: AbsoluteDay) -> Self {
        let day = day.clamp(-MAX_ABSOLUTE_DAY, MAX_ABSOLUTE_DAY);
        let estimate = day.div_euclid(YEAR_ESTIMATE_DAYS) as i32;

        // The estimate only overshoots for years before 1
        let mut year = estimate;
        while absolute_from_parts(year, JANUARY, MIN_DAY) > day {
            year -= 1;
        }
        while absolute_from_parts(year + 1, JANUARY, MIN_DAY) <= day {
            year += 1;
        }
        trace!(absolute = day, estimate, year, "resolved gregorian year");

        let mut month = JANUARY;
        while absolute_from_parts(year, month, last_day_of_month(year, month)) < day {
            month += 1;
        }

        let day_of_month = (day - absolute_from_parts(year, month, MIN_DAY) + 1) as u8;
        Self::new_unchecked(year, month, day_of_month)
    }
}

impl From<HebrewDate> for GregorianDate {
    fn from(date: HebrewDate) -> Self {
        date.convert()
    }
}

impl TryFrom<(i32, u8, u8)> for GregorianDate {
    type Error = DateError;

    fn try_from((year, month, day): (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl FromStr for GregorianDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse::parse_ymd(s)?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Accepts every year `Display` can emit, so converted dates before
        // the epoch read back
        let s = String::deserialize(deserializer)?;
        let (year, month, day) = parse::parse_ymd(&s).map_err(serde::de::Error::custom)?;
        Self::with_valid_fields(year, month, day).map_err(serde::de::Error::custom)
    }
}

// Helper functions

/// Divisible by 4 and not by 100, or divisible by 400.
pub const fn is_leap_year(year: i32) -> bool {
    let year = year as i64;
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Length of `month` in `year`. Months outside 1-12 are treated as 31 days.
pub fn last_day_of_month(year: i32, month: u8) -> u8 {
    if month == FEBRUARY {
        if is_leap_year(year) {
            FEBRUARY_DAYS_LEAP
        } else {
            FEBRUARY_DAYS_COMMON
        }
    } else if THIRTY_DAY_MONTHS.contains(&month) {
        THIRTY_DAYS
    } else {
        THIRTY_ONE_DAYS
    }
}

/// Absolute day of `year-month-day` without constructing a date.
pub(crate) fn absolute_from_parts(year: i32, month: u8, day: u8) -> AbsoluteDay {
    let prior_months: AbsoluteDay = (JANUARY..month)
        .map(|m| AbsoluteDay::from(last_day_of_month(year, m)))
        .sum();
    let prior_years = AbsoluteDay::from(year) - 1;

    AbsoluteDay::from(day)
        + prior_months
        + DAYS_IN_COMMON_YEAR * prior_years
        // Julian leap days, minus century years, plus years divisible by 400
        + prior_years.div_euclid(LEAP_YEAR_CYCLE)
        - prior_years.div_euclid(CENTURY_CYCLE)
        + prior_years.div_euclid(GREGORIAN_CYCLE)
}
