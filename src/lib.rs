//! Conversion between Gregorian and Hebrew calendar dates.
//!
//! Every calendar maps its dates onto a shared [`AbsoluteDay`] count, where
//! day 1 is January 1 of year 1 in the proleptic Gregorian calendar. Converting
//! between calendars goes through that number.
//!
//! ```
//! use calendrics::{Calendar, GregorianDate, HebrewDate};
//!
//! let gregorian = GregorianDate::new(2015, 5, 13).unwrap();
//! assert_eq!(gregorian.to_absolute(), 735_731);
//!
//! // 24 Iyyar 5775 (months are numbered from Nisan)
//! let hebrew = HebrewDate::from_absolute(gregorian.to_absolute());
//! assert_eq!((hebrew.year(), hebrew.month(), hebrew.day()), (5775, 2, 24));
//! assert_eq!(GregorianDate::from(hebrew), gregorian);
//! ```

mod calendar;
mod consts;
mod error;
mod parse;
mod prelude;

pub mod gregorian;
pub mod hebrew;

pub use calendar::{AbsoluteDay, Calendar, Weekday};
pub use consts::*;
pub use error::DateError;
pub use gregorian::GregorianDate;
pub use hebrew::HebrewDate;
