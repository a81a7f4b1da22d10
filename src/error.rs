/// Error type for validated date construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Year outside `MIN_YEAR..=MAX_YEAR`.
    #[error("Invalid year: {0} (must be {min}-{max})", min = crate::MIN_YEAR, max = crate::MAX_YEAR)]
    InvalidYear(i32),

    /// Month outside the months of the given year.
    #[error("Invalid month {month} for year {year} (must be 1-{max})")]
    InvalidMonth { year: i32, month: u8, max: u8 },

    /// Day outside the days of the given month.
    #[error("Invalid day {day} for month {year}-{month:02} (must be 1-{max})")]
    InvalidDay { year: i32, month: u8, day: u8, max: u8 },

    /// Input is not a recognized date layout.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Input is empty or whitespace.
    #[error("Empty date string")]
    EmptyInput,
}
