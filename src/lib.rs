//! Conversion between continuous day counts and the French Republican
//! (Revolutionary) calendar.
//!
//! The Republican year opens on 1 Vendémiaire and holds twelve months of
//! thirty days followed by five Sansculottides, or six in a leap (sextile)
//! year. Year I began on 22 September 1792. Which years are sextile depends
//! on the [`LeapRule`] a [`Converter`] is built with; the free functions in
//! this crate use Romme's rule.
//!
//! Romme's rule applies its arithmetic from year I, so it places the new
//! year one day early in years IV, VIII, XII and XVI compared with the
//! calendar as it was kept. Dates from the period of civil use (years I to
//! XIV) need a converter built with [`LeapRule::Historical`].
//!
//! ```
//! use frenchrev::{Month, RataDie, to_day_count, to_revolutionary};
//!
//! let date = to_revolutionary(RataDie::new(655_145)).unwrap();
//! assert_eq!((date.year(), date.month(), date.day_of_month()), (3, Month::Vendemiaire, 1));
//! assert_eq!(to_day_count(date).unwrap(), RataDie::new(655_145));
//! ```

mod consts;
mod converter;
mod day_count;
mod decade;
mod error;
mod leap;
mod prelude;
mod types;

pub use consts::*;
pub use converter::Converter;
pub use day_count::RataDie;
pub use decade::{DayOfDecade, Sansculottide};
pub use error::{ConversionError, DateError};
pub use leap::LeapRule;
pub use types::{Day, Month, Year};

use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// A date of the Republican calendar.
///
/// The day is valid for its month under the leap rule it was built with;
/// converting it under another rule re-checks the sixth Sansculottide.
/// Deserialization accepts a sixth Sansculottide in any year and leaves
/// that check to the converter. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
#[serde(try_from = "RawDate")]
pub struct RevolutionaryDate {
    year:  Year,
    month: Month,
    day:   Day,
}

/// Unvalidated wire form of [`RevolutionaryDate`].
#[derive(Deserialize)]
struct RawDate {
    year:  u16,
    month: u8,
    day:   u8,
}

impl TryFrom<RawDate> for RevolutionaryDate {
    type Error = DateError;

    fn try_from(raw: RawDate) -> Result<Self, Self::Error> {
        let year = Year::new(raw.year)?;
        let month = Month::new(raw.month)?;
        let day = Day::new_any_rule(raw.day, raw.year, month)?;
        Ok(Self::from_parts(year, month, day))
    }
}

impl RevolutionaryDate {
    /// Creates a date, validating the day under Romme's rule.
    ///
    /// Use [`Converter::date`] to validate under another rule.
    ///
    /// # Errors
    /// Returns the `DateError` for the first component out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        Converter::default().date(year, month, day)
    }

    /// Assembles a date from components that are already validated together.
    pub(crate) const fn from_parts(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day_of_month(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Day within the year, 1 Vendémiaire being day 1.
    pub const fn day_of_year(&self) -> u16 {
        DAYS_IN_MONTH as u16 * (self.month.get() as u16 - 1) + self.day.get() as u16
    }

    /// Returns `true` for the intercalary days closing the year
    pub const fn is_sansculottides(&self) -> bool {
        self.month.is_sansculottides()
    }

    /// Décade of the year (1..=36), or `None` for the Sansculottides.
    pub const fn decade(&self) -> Option<u8> {
        if self.is_sansculottides() {
            return None;
        }
        Some((self.month.get() - 1) * DECADES_IN_MONTH + (self.day.get() - 1) / DAYS_IN_DECADE + 1)
    }

    /// Named day within the décade, or `None` for the Sansculottides.
    pub fn day_of_decade(&self) -> Option<DayOfDecade> {
        if self.is_sansculottides() {
            return None;
        }
        DayOfDecade::new((self.day.get() - 1) % DAYS_IN_DECADE + 1).ok()
    }

    /// Named Sansculottide, or `None` within the regular months.
    pub fn sansculottide(&self) -> Option<Sansculottide> {
        if self.is_sansculottides() {
            Sansculottide::new(self.day.get()).ok()
        } else {
            None
        }
    }
}

/// Converts a day count into a Republican date using Romme's rule.
///
/// # Errors
/// Returns `ConversionError::OutOfRange` if the day count precedes the epoch
/// or follows the last day of `MAX_YEAR`.
pub fn to_revolutionary(day_count: RataDie) -> Result<RevolutionaryDate, ConversionError> {
    Converter::default().to_revolutionary(day_count)
}

/// Converts a Republican date into a day count using Romme's rule.
///
/// # Errors
/// Returns `ConversionError::InvalidDate` if the date is a sixth
/// Sansculottide in a year that is common under Romme's rule.
pub fn to_day_count(date: RevolutionaryDate) -> Result<RataDie, ConversionError> {
    Converter::default().to_day_count(date)
}

/// Returns `true` if `year` is a leap (sextile) year under Romme's rule.
pub const fn is_leap_year(year: u16) -> bool {
    LeapRule::Romme.is_leap_year(year)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_new_valid() {
        let d = RevolutionaryDate::new(2, 11, 9).expect("9 Thermidor II should be valid");
        assert_eq!(d.year(), 2);
        assert_eq!(d.month(), Month::Thermidor);
        assert_eq!(d.day_of_month(), 9);
        assert_eq!(d.year_typed(), Year::new(2).expect("valid year"));
        assert_eq!(d.day_typed().get(), 9);
    }

    #[test]
    fn test_new_invalid() {
        assert!(matches!(RevolutionaryDate::new(0, 1, 1), Err(DateError::InvalidYear(0))));
        assert!(matches!(RevolutionaryDate::new(1, 0, 1), Err(DateError::InvalidMonth(0))));
        assert!(matches!(RevolutionaryDate::new(1, 1, 0), Err(DateError::InvalidDay { .. })));
        assert!(matches!(RevolutionaryDate::new(1, 1, 31), Err(DateError::InvalidDay { .. })));
        assert!(matches!(RevolutionaryDate::new(1, 13, 6), Err(DateError::InvalidDay { .. })));
        assert!(RevolutionaryDate::new(4, 13, 6).is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(date(2, 11, 9).to_string(), "0002-11-09");
        assert_eq!(date(1202, 13, 5).to_string(), "1202-13-05");
    }

    #[test]
    fn test_ordering() {
        assert!(date(1, 12, 30) < date(1, 13, 1));
        assert!(date(1, 13, 5) < date(2, 1, 1));
        assert!(date(2, 1, 2) > date(2, 1, 1));
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(date(1, 1, 1).day_of_year(), 1);
        assert_eq!(date(1, 2, 1).day_of_year(), 31);
        assert_eq!(date(1, 13, 5).day_of_year(), 365);
        assert_eq!(date(4, 13, 6).day_of_year(), 366);
    }

    #[test]
    fn test_decade_fields() {
        struct TestCase {
            date:          (u16, u8, u8),
            decade:        Option<u8>,
            day_of_decade: Option<DayOfDecade>,
            sansculottide: Option<Sansculottide>,
        }

        let cases = [
            TestCase {
                date:          (1, 1, 1),
                decade:        Some(1),
                day_of_decade: Some(DayOfDecade::Primidi),
                sansculottide: None,
            },
            TestCase {
                date:          (1, 1, 10),
                decade:        Some(1),
                day_of_decade: Some(DayOfDecade::Decadi),
                sansculottide: None,
            },
            TestCase {
                date:          (1, 1, 11),
                decade:        Some(2),
                day_of_decade: Some(DayOfDecade::Primidi),
                sansculottide: None,
            },
            TestCase {
                date:          (2, 11, 9),
                decade:        Some(31),
                day_of_decade: Some(DayOfDecade::Nonidi),
                sansculottide: None,
            },
            TestCase {
                date:          (1, 12, 30),
                decade:        Some(36),
                day_of_decade: Some(DayOfDecade::Decadi),
                sansculottide: None,
            },
            TestCase {
                date:          (1, 13, 1),
                decade:        None,
                day_of_decade: None,
                sansculottide: Some(Sansculottide::Vertu),
            },
            TestCase {
                date:          (4, 13, 6),
                decade:        None,
                day_of_decade: None,
                sansculottide: Some(Sansculottide::Revolution),
            },
        ];

        for case in &cases {
            let (y, m, d) = case.date;
            let republican = date(y, m, d);
            assert_eq!(republican.decade(), case.decade, "decade of {republican}");
            assert_eq!(republican.day_of_decade(), case.day_of_decade, "day of décade of {republican}");
            assert_eq!(republican.sansculottide(), case.sansculottide, "Sansculottide of {republican}");
            assert_eq!(republican.is_sansculottides(), case.sansculottide.is_some());
        }
    }

    #[test]
    fn test_free_functions_use_romme() {
        assert!(is_leap_year(4));
        assert!(!is_leap_year(3));
        assert!(!is_leap_year(100));

        let epoch = to_revolutionary(RataDie::EPOCH).expect("epoch should convert");
        assert_eq!(epoch, date(1, 1, 1));
        assert_eq!(to_day_count(epoch), Ok(RataDie::EPOCH));
        assert!(matches!(
            to_revolutionary(RataDie::new(EPOCH_RATA_DIE - 1)),
            Err(ConversionError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_serde_object_form() {
        let d = date(2, 11, 9);
        let json = serde_json::to_string(&d).expect("failed to serialize date");
        assert_eq!(json, r#"{"year":2,"month":11,"day":9}"#);

        let parsed: RevolutionaryDate = serde_json::from_str(&json).expect("failed to deserialize date");
        assert_eq!(parsed, d);
    }

    #[test]
    fn test_serde_round_trips_historical_sextile() {
        let converter = Converter::new().with_leap_rule(LeapRule::Historical);
        for year in [3, 7, 11, 15] {
            let sixth = converter.date(year, 13, 6).expect("historical sextile day should be valid");
            let json = serde_json::to_string(&sixth).expect("failed to serialize sextile day");
            let parsed: RevolutionaryDate = serde_json::from_str(&json).expect("failed to deserialize sextile day");
            assert_eq!(parsed, sixth);
            assert_eq!(converter.to_day_count(parsed), converter.to_day_count(sixth));
        }
    }

    #[test]
    fn test_deserialized_sextile_is_checked_by_converter() {
        let parsed: RevolutionaryDate =
            serde_json::from_str(r#"{"year":1,"month":13,"day":6}"#).expect("sixth Sansculottide should deserialize");
        assert!(matches!(to_day_count(parsed), Err(ConversionError::InvalidDate(_))));
    }

    #[test]
    fn test_serde_rejects_invalid_dates() {
        assert!(serde_json::from_str::<RevolutionaryDate>(r#"{"year":1,"month":13,"day":7}"#).is_err());
        assert!(serde_json::from_str::<RevolutionaryDate>(r#"{"year":1,"month":1,"day":31}"#).is_err());
        assert!(serde_json::from_str::<RevolutionaryDate>(r#"{"year":0,"month":1,"day":1}"#).is_err());
        assert!(serde_json::from_str::<RevolutionaryDate>(r#"{"year":1,"month":14,"day":1}"#).is_err());
    }
}
