//! Numeric `(year, month, day)` extraction shared by the date `FromStr` impls.
//!
//! Accepts `YYYY-MM-DD` (with an optional leading `-` for years before 1) and
//! month-first `M/D/YYYY`. Range checks are left to the calendar that owns the
//! triple.

use crate::{DATE_SEPARATOR, DateError, MONTH_FIRST_SEPARATOR};

/// Splits `s` into a raw `(year, month, day)` triple.
pub(crate) fn parse_ymd(s: &str) -> Result<(i32, u8, u8), DateError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(DateError::EmptyInput);
    }

    // Strictly enforce delimiters: DATE_SEPARATOR for ISO, MONTH_FIRST_SEPARATOR for month-first
    let has_hyphen = trimmed.contains(DATE_SEPARATOR);
    let has_slash = trimmed.contains(MONTH_FIRST_SEPARATOR);

    if has_hyphen && has_slash {
        return Err(DateError::InvalidFormat(format!(
            "Mixed delimiters ({DATE_SEPARATOR} and {MONTH_FIRST_SEPARATOR})"
        )));
    }

    if has_hyphen {
        // A leading separator is the sign of the year
        let (negative, body) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let parts: Vec<&str> = body.split(DATE_SEPARATOR).map(str::trim).collect();
        match parts.as_slice() {
            [year, month, day] => {
                let year = parse_i32(year)?;
                let year = if negative { -year } else { year };
                Ok((year, parse_u8(month)?, parse_u8(day)?))
            }
            _ => Err(DateError::InvalidFormat(format!(
                "Expected 2 {DATE_SEPARATOR} separators, found {}",
                parts.len() - 1
            ))),
        }
    } else if has_slash {
        let parts: Vec<&str> = trimmed
            .split(MONTH_FIRST_SEPARATOR)
            .map(str::trim)
            .collect();
        match parts.as_slice() {
            [month, day, year] => Ok((parse_i32(year)?, parse_u8(month)?, parse_u8(day)?)),
            _ => Err(DateError::InvalidFormat(format!(
                "Expected 2 {MONTH_FIRST_SEPARATOR} separators, found {}",
                parts.len() - 1
            ))),
        }
    } else {
        Err(DateError::InvalidFormat(trimmed.to_owned()))
    }
}

fn parse_i32(s: &str) -> Result<i32, DateError> {
    s.parse::<i32>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

fn parse_u8(s: &str) -> Result<u8, DateError> {
    s.parse::<u8>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_layout() {
        assert_eq!(parse_ymd("2015-05-13").unwrap(), (2015, 5, 13));
        assert_eq!(parse_ymd(" 5775 - 02 - 24 ").unwrap(), (5775, 2, 24));
    }

    #[test]
    fn test_signed_year() {
        assert_eq!(parse_ymd("-3760-09-07").unwrap(), (-3760, 9, 7));
        assert_eq!(parse_ymd("0000-12-31").unwrap(), (0, 12, 31));
        assert_eq!(parse_ymd("-005-01-01").unwrap(), (-5, 1, 1));

        // Only the ISO layout carries a sign
        assert!(matches!(
            parse_ymd("-5/13/2015"),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(parse_ymd("--5-01-01"), Err(DateError::InvalidFormat(_))));
        assert!(matches!(parse_ymd("-2015"), Err(DateError::InvalidFormat(_))));
    }

    #[test]
    fn test_month_first_layout() {
        assert_eq!(parse_ymd("5/13/2015").unwrap(), (2015, 5, 13));
    }

    #[test]
    fn test_empty() {
        assert_eq!(parse_ymd("   "), Err(DateError::EmptyInput));
    }

    #[test]
    fn test_mixed_delimiters() {
        assert!(matches!(
            parse_ymd("2015-05/13"),
            Err(DateError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_wrong_part_count() {
        let err = parse_ymd("2015-05").unwrap_err();
        assert!(err.to_string().contains("Expected 2 - separators, found 1"));

        let err = parse_ymd("5/13/2015/1").unwrap_err();
        assert!(err.to_string().contains("Expected 2 / separators, found 3"));

        assert!(matches!(parse_ymd("2015"), Err(DateError::InvalidFormat(_))));
    }

    #[test]
    fn test_bad_tokens() {
        assert_eq!(
            parse_ymd("2015-XX-13"),
            Err(DateError::InvalidFormat("XX".to_owned()))
        );
        assert!(matches!(parse_ymd("2015-05-300"), Err(DateError::InvalidFormat(_))));
    }
}
