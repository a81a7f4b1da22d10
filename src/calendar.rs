//! The absolute day axis shared by every calendar.

use crate::consts::DAYS_PER_WEEK;
use crate::prelude::*;

/// Day count where day 1 is January 1 of year 1 in the proleptic Gregorian
/// calendar. Earlier days are zero or negative.
pub type AbsoluteDay = i64;

/// A calendar system whose dates map one-to-one onto [`AbsoluteDay`]s.
///
/// For every valid date `d`, `Self::from_absolute(d.to_absolute()) == d`.
pub trait Calendar: Copy {
    /// Position of this date on the absolute day axis.
    fn to_absolute(&self) -> AbsoluteDay;

    /// The date of this calendar that falls on `day`.
    fn from_absolute(day: AbsoluteDay) -> Self;

    /// Day of the week this date falls on.
    fn weekday(&self) -> Weekday {
        Weekday::from_absolute(self.to_absolute())
    }

    /// Re-expresses this date in another calendar.
    fn convert<C: Calendar>(&self) -> C {
        C::from_absolute(self.to_absolute())
    }
}

/// Day of the week, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Absolute day 0 (December 31, 1 BC) is a Sunday.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn from_absolute(day: AbsoluteDay) -> Self {
        Self::ALL[day.rem_euclid(DAYS_PER_WEEK) as usize]
    }

    /// Days since the preceding Sunday (Sunday = 0).
    pub const fn days_from_sunday(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_epoch() {
        assert_eq!(Weekday::from_absolute(0), Weekday::Sunday);
        assert_eq!(Weekday::from_absolute(1), Weekday::Monday);
        assert_eq!(Weekday::from_absolute(6), Weekday::Saturday);
        assert_eq!(Weekday::from_absolute(7), Weekday::Sunday);
    }

    #[test]
    fn test_weekday_before_epoch() {
        assert_eq!(Weekday::from_absolute(-1), Weekday::Saturday);
        assert_eq!(Weekday::from_absolute(-7), Weekday::Sunday);
        // Sunday preceding the start of the Hebrew calendar
        assert_eq!(
            Weekday::from_absolute(crate::HEBREW_EPOCH + 1),
            Weekday::Sunday
        );
    }

    #[test]
    fn test_weekday_display() {
        assert_eq!(Weekday::Wednesday.to_string(), "Wednesday");
        assert_eq!(Weekday::Friday.days_from_sunday(), 5);
    }
}
