//! Hebrew lunisolar calendar.
//!
//! Year starts are found from the mean conjunction (molad) of Tishri, counted
//! in parts (1080 per hour) from the first molad, then shifted by the
//! postponement rules. Month lengths follow from the resulting year length.
//!
//! Months are numbered from Nisan (1) although the civil year begins at
//! Tishri (7); Adar II (13) exists only in leap years.

use std::cmp::Ordering;
use std::ops::Range;
use std::str::FromStr;

use tracing::trace;

use crate::calendar::{AbsoluteDay, Calendar, Weekday};
use crate::consts::{
    ADAR, ADAR_II, ELUL, FIRST_MOLAD_HOURS, FIRST_MOLAD_PARTS, HEBREW_COMMON_MONTHS,
    HEBREW_EPOCH, HEBREW_FULL_MONTH, HEBREW_HOLLOW_MONTH, HEBREW_LEAP_MONTHS, HESHVAN,
    HOURS_PER_DAY, IYYAR, KISLEV, MEAN_MONTH_DAYS, MEAN_MONTH_HOURS, METONIC_LEAP_YEARS,
    MAX_ABSOLUTE_DAY, MAX_YEAR, METONIC_MONTHS, METONIC_YEARS, MIDDAY_PARTS, MIN_DAY, MIN_YEAR, MONDAY_AFTER_LEAP_PARTS,
    MONTH_REMAINDER_PARTS, NISAN, PARTS_PER_HOUR, TAMMUZ, TEVET, TISHRI, TUESDAY_COMMON_PARTS,
    YEAR_ESTIMATE_DAYS,
};
use crate::prelude::*;
use crate::{DateError, GregorianDate, parse};

/// A date in the Hebrew calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Into)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct HebrewDate {
    year:  i32,
    month: u8,
    day:   u8,
}

impl HebrewDate {
    /// Creates a date after checking the month and day against the year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` outside `MIN_YEAR..=MAX_YEAR`,
    /// `DateError::InvalidMonth` past the last month of the year and
    /// `DateError::InvalidDay` past the end of the month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateError::InvalidYear(year));
        }
        Self::with_valid_fields(year, month, day)
    }

    /// Checks month and day for any year, including years before the epoch.
    fn with_valid_fields(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        let max_month = last_month_of_year(year);
        if !(NISAN..=max_month).contains(&month) {
            return Err(DateError::InvalidMonth {
                year,
                month,
                max: max_month,
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

    /// Creates a date without validation.
    pub const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month, 1 = Nisan, 7 = Tishri, 13 = Adar II.
    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    pub fn in_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    pub fn days_in_month(&self) -> u8 {
        last_day_of_month(self.year, self.month)
    }

    /// Position of the month within the civil year, Tishri first.
    const fn civil_month_index(month: u8) -> u8 {
        if month >= TISHRI {
            month - TISHRI
        } else {
            month + HEBREW_LEAP_MONTHS
        }
    }
}

impl PartialOrd for HebrewDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HebrewDate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Tishri..Adar II precede Nisan..Elul within a year
        let key = |d: &Self| (d.year, Self::civil_month_index(d.month), d.day);
        key(self).cmp(&key(other))
    }
}

impl Calendar for HebrewDate {
    fn to_absolute(&self) -> AbsoluteDay {
        absolute_from_parts(self.year, self.month, self.day)
    }

    /// Days beyond `MAX_ABSOLUTE_DAY` in either direction are clamped to it.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from_absolute(day: AbsoluteDay) -> Self {
        let day = day.clamp(-MAX_ABSOLUTE_DAY, MAX_ABSOLUTE_DAY);
        let estimate = (day - HEBREW_EPOCH).div_euclid(YEAR_ESTIMATE_DAYS) as i32;

        // The estimate only overshoots before the Hebrew epoch
        let mut year = estimate;
        while absolute_from_parts(year, TISHRI, MIN_DAY) > day {
            year -= 1;
        }
        while absolute_from_parts(year + 1, TISHRI, MIN_DAY) <= day {
            year += 1;
        }
        trace!(absolute = day, estimate, year, "resolved hebrew year");

        let mut month = if day < absolute_from_parts(year, NISAN, MIN_DAY) {
            TISHRI
        } else {
            NISAN
        };
        while absolute_from_parts(year, month, last_day_of_month(year, month)) < day {
            month += 1;
        }

        let day_of_month = (day - absolute_from_parts(year, month, MIN_DAY) + 1) as u8;
        Self::new_unchecked(year, month, day_of_month)
    }
}

impl From<GregorianDate> for HebrewDate {
    fn from(date: GregorianDate) -> Self {
        date.convert()
    }
}

impl TryFrom<(i32, u8, u8)> for HebrewDate {
    type Error = DateError;

    fn try_from((year, month, day): (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl FromStr for HebrewDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse::parse_ymd(s)?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for HebrewDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for HebrewDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Accepts every year `Display` can emit, so dates before the epoch
        // read back
        let s = String::deserialize(deserializer)?;
        let (year, month, day) = parse::parse_ymd(&s).map_err(serde::de::Error::custom)?;
        Self::with_valid_fields(year, month, day).map_err(serde::de::Error::custom)
    }
}

/// Seven years of every nineteen-year cycle are leap years.
pub fn is_leap_year(year: i32) -> bool {
    leap_year_of(i64::from(year))
}

fn leap_year_of(year: i64) -> bool {
    (METONIC_LEAP_YEARS * year + 1).rem_euclid(METONIC_YEARS) < METONIC_LEAP_YEARS
}

pub fn last_month_of_year(year: i32) -> u8 {
    if is_leap_year(year) {
        HEBREW_LEAP_MONTHS
    } else {
        HEBREW_COMMON_MONTHS
    }
}

/// Days from the day before the epoch's Sunday to 1 Tishri of `year`.
///
/// Starts from the molad of Tishri and applies the postponements in order:
/// first for a late molad, then to keep the new year off Sunday, Wednesday
/// and Friday.
pub fn elapsed_days(year: i32) -> i64 {
    elapsed_days_of(i64::from(year))
}

// Widened so the neighbouring years of any `i32` year stay representable
fn elapsed_days_of(year: i64) -> i64 {
    let prior_years = year - 1;
    let cycle_year = prior_years.rem_euclid(METONIC_YEARS);
    let months_elapsed = METONIC_MONTHS * prior_years.div_euclid(METONIC_YEARS)
        + i64::from(HEBREW_COMMON_MONTHS) * cycle_year
        + (METONIC_LEAP_YEARS * cycle_year + 1).div_euclid(METONIC_YEARS);

    let parts_elapsed =
        FIRST_MOLAD_PARTS + MONTH_REMAINDER_PARTS * months_elapsed.rem_euclid(PARTS_PER_HOUR);
    let hours_elapsed = FIRST_MOLAD_HOURS
        + MEAN_MONTH_HOURS * months_elapsed
        + MONTH_REMAINDER_PARTS * months_elapsed.div_euclid(PARTS_PER_HOUR)
        + parts_elapsed.div_euclid(PARTS_PER_HOUR);
    let conjunction_day =
        1 + MEAN_MONTH_DAYS * months_elapsed + hours_elapsed.div_euclid(HOURS_PER_DAY);
    let conjunction_parts = PARTS_PER_HOUR * hours_elapsed.rem_euclid(HOURS_PER_DAY)
        + parts_elapsed.rem_euclid(PARTS_PER_HOUR);

    let conjunction_weekday = weekday_of_elapsed(conjunction_day);
    let late_molad = conjunction_parts >= MIDDAY_PARTS
        || (conjunction_weekday == Weekday::Tuesday
            && conjunction_parts >= TUESDAY_COMMON_PARTS
            && !leap_year_of(year))
        || (conjunction_weekday == Weekday::Monday
            && conjunction_parts >= MONDAY_AFTER_LEAP_PARTS
            && leap_year_of(year - 1));

    let new_year = if late_molad {
        trace!(year, conjunction_day, conjunction_parts, "late molad postponed");
        conjunction_day + 1
    } else {
        conjunction_day
    };

    match weekday_of_elapsed(new_year) {
        Weekday::Sunday | Weekday::Wednesday | Weekday::Friday => {
            trace!(year, new_year, "new year moved off a forbidden weekday");
            new_year + 1
        }
        _ => new_year,
    }
}

/// Elapsed day counts share the absolute axis's weekday alignment: multiples
/// of seven fall on Sunday.
fn weekday_of_elapsed(day: i64) -> Weekday {
    Weekday::from_absolute(day)
}

pub fn days_in_year(year: i32) -> i64 {
    let year = i64::from(year);
    elapsed_days_of(year + 1) - elapsed_days_of(year)
}

/// Heshvan has 30 days in complete years (355 or 385 days).
pub fn long_heshvan(year: i32) -> bool {
    days_in_year(year) % 10 == 5
}

/// Kislev has 29 days in deficient years (353 or 383 days).
pub fn short_kislev(year: i32) -> bool {
    days_in_year(year) % 10 == 3
}

/// Length of `month` in `year`.
pub fn last_day_of_month(year: i32, month: u8) -> u8 {
    let hollow = match month {
        IYYAR | TAMMUZ | ELUL | TEVET | ADAR_II => true,
        HESHVAN => !long_heshvan(year),
        KISLEV => short_kislev(year),
        ADAR => !is_leap_year(year),
        _ => false,
    };
    if hollow {
        HEBREW_HOLLOW_MONTH
    } else {
        HEBREW_FULL_MONTH
    }
}

/// Absolute day of `year-month-day` without constructing a date.
pub(crate) fn absolute_from_parts(year: i32, month: u8, day: u8) -> AbsoluteDay {
    let month_days = |months: Range<u8>| -> AbsoluteDay {
        months
            .map(|m| AbsoluteDay::from(last_day_of_month(year, m)))
            .sum()
    };

    // The year runs Tishri..=last month, then Nisan..=Elul
    let prior_months = if month < TISHRI {
        month_days(TISHRI..last_month_of_year(year) + 1) + month_days(NISAN..month)
    } else {
        month_days(TISHRI..month)
    };

    AbsoluteDay::from(day) + prior_months + elapsed_days(year) + HEBREW_EPOCH
}
