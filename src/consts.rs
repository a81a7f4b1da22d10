/// Smallest year accepted by the validating constructors
pub const MIN_YEAR: i32 = 1;
/// Largest year accepted by the validating constructors (inclusive)
pub const MAX_YEAR: i32 = 1_000_000;

/// Absolute days are clamped to `-MAX_ABSOLUTE_DAY..=MAX_ABSOLUTE_DAY` before
/// searching for a date, which keeps every resulting year well inside `i32`
pub const MAX_ABSOLUTE_DAY: i64 = 1 << 32;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Gregorian months with 30 days
pub(crate) const THIRTY_DAY_MONTHS: [u8; 4] = [4, 6, 9, 11];
/// Days in February for common years
pub const FEBRUARY_DAYS_COMMON: u8 = 28;
/// Days in the remaining Gregorian months
pub(crate) const THIRTY_DAYS: u8 = 30;
pub(crate) const THIRTY_ONE_DAYS: u8 = 31;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Length of a common Gregorian year
pub(crate) const DAYS_IN_COMMON_YEAR: i64 = 365;
/// Longer than the mean year of either calendar, so dividing by it under-estimates the year
pub(crate) const YEAR_ESTIMATE_DAYS: i64 = 366;

/// Offset from Hebrew elapsed days to absolute days.
/// `HEBREW_EPOCH + 1` is the Sunday preceding 1 Tishri of Hebrew year 1.
pub const HEBREW_EPOCH: i64 = -1_373_429;

/// Hebrew month numbers. Numbering starts at Nisan; the civil year starts at Tishri.
pub const NISAN: u8 = 1;
/// Second month, always 29 days
pub const IYYAR: u8 = 2;
/// Fourth month, always 29 days
pub const TAMMUZ: u8 = 4;
/// Sixth month, always 29 days, last month of the civil year
pub const ELUL: u8 = 6;
/// Seventh month, first month of the civil year
pub const TISHRI: u8 = 7;
/// Eighth month, 29 or 30 days
pub const HESHVAN: u8 = 8;
/// Ninth month, 29 or 30 days
pub const KISLEV: u8 = 9;
/// Tenth month, always 29 days
pub const TEVET: u8 = 10;
/// Twelfth month (Adar, or Adar I in leap years)
pub const ADAR: u8 = 12;
/// Thirteenth month, only in leap years
pub const ADAR_II: u8 = 13;

/// Months in a common Hebrew year
pub const HEBREW_COMMON_MONTHS: u8 = 12;
/// Months in a leap Hebrew year
pub const HEBREW_LEAP_MONTHS: u8 = 13;

/// Full and hollow Hebrew month lengths
pub(crate) const HEBREW_FULL_MONTH: u8 = 30;
pub(crate) const HEBREW_HOLLOW_MONTH: u8 = 29;

/// Years in one Metonic cycle
pub(crate) const METONIC_YEARS: i64 = 19;
/// Lunar months in one Metonic cycle
pub(crate) const METONIC_MONTHS: i64 = 235;
/// Leap years per Metonic cycle
pub(crate) const METONIC_LEAP_YEARS: i64 = 7;

/// Parts (halakim) in one hour
pub(crate) const PARTS_PER_HOUR: i64 = 1080;
pub(crate) const HOURS_PER_DAY: i64 = 24;
pub(crate) const DAYS_PER_WEEK: i64 = 7;

/// Whole days and hours of a mean lunar month (29d 12h 793p)
pub(crate) const MEAN_MONTH_DAYS: i64 = 29;
pub(crate) const MEAN_MONTH_HOURS: i64 = 12;
/// Fractional part of a mean lunar month beyond 29d 12h, in parts
pub(crate) const MONTH_REMAINDER_PARTS: i64 = 793;
/// Molad of Tishri in year 1 (Monday, 5h 204p)
pub(crate) const FIRST_MOLAD_HOURS: i64 = 5;
pub(crate) const FIRST_MOLAD_PARTS: i64 = 204;

/// Molad at or after noon postpones the new year
pub(crate) const MIDDAY_PARTS: i64 = 19_440;
/// 9h 204p, Tuesday threshold for common years
pub(crate) const TUESDAY_COMMON_PARTS: i64 = 9_924;
/// 15h 589p, Monday threshold following a leap year
pub(crate) const MONDAY_AFTER_LEAP_PARTS: i64 = 16_789;

/// Separator in `YYYY-MM-DD`
pub const DATE_SEPARATOR: char = '-';
/// Separator in month-first `M/D/YYYY`
pub const MONTH_FIRST_SEPARATOR: char = '/';
