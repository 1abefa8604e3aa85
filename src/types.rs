use crate::consts::{DAYS_IN_MONTH, MAX_YEAR, MIN_DAY, SANSCULOTTIDES, SANSCULOTTIDES_LEAP};
use crate::error::DateError;
use crate::leap::LeapRule;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A Republican year guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, DateError> {
        let non_zero = NonZeroU16::new(value).ok_or(DateError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(DateError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The twelve thirty-day months of the Republican year, followed by the
/// Sansculottides as a thirteenth pseudo-month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Month {
    Vendemiaire = 1,
    Brumaire,
    Frimaire,
    Nivose,
    Pluviose,
    Ventose,
    Germinal,
    Floreal,
    Prairial,
    Messidor,
    Thermidor,
    Fructidor,
    Sansculottides,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Self; SANSCULOTTIDES as usize] = [
        Self::Vendemiaire,
        Self::Brumaire,
        Self::Frimaire,
        Self::Nivose,
        Self::Pluviose,
        Self::Ventose,
        Self::Germinal,
        Self::Floreal,
        Self::Prairial,
        Self::Messidor,
        Self::Thermidor,
        Self::Fructidor,
        Self::Sansculottides,
    ];

    /// Creates a Month from its number (1..=13)
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > 13.
    pub const fn new(value: u8) -> Result<Self, DateError> {
        if value == 0 || value > SANSCULOTTIDES {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self::ALL[(value - 1) as usize])
    }

    /// Returns the month number (1..=13)
    #[inline]
    pub const fn get(self) -> u8 {
        self as u8
    }

    /// Returns `true` for the intercalary thirteenth month
    #[inline]
    pub const fn is_sansculottides(self) -> bool {
        matches!(self, Self::Sansculottides)
    }

    /// Number of days in this month of `year` under `rule`
    pub const fn length(self, year: u16, rule: LeapRule) -> u8 {
        if self.is_sansculottides() {
            rule.sansculottides_in_year(year)
        } else {
            DAYS_IN_MONTH
        }
    }

    /// Longest this month can be under any leap rule
    pub const fn max_length(self) -> u8 {
        if self.is_sansculottides() {
            SANSCULOTTIDES_LEAP
        } else {
            DAYS_IN_MONTH
        }
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the length of the month in
    /// the given year under `rule`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: u16, month: Month, rule: LeapRule) -> Result<Self, DateError> {
        let invalid = DateError::InvalidDay {
            year,
            month: month.get(),
            day: value,
        };
        let non_zero = NonZeroU8::new(value).ok_or(invalid)?;
        if value > month.length(year, rule) {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    /// Creates a new Day that exists in `month` of `year` under at least one
    /// leap rule. A sixth Sansculottide passes in any year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or past `month.max_length()`.
    pub fn new_any_rule(value: u8, year: u16, month: Month) -> Result<Self, DateError> {
        let invalid = DateError::InvalidDay {
            year,
            month: month.get(),
            day: value,
        };
        let non_zero = NonZeroU8::new(value).ok_or(invalid)?;
        if value > month.max_length() {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate without year/month context, so only the widest month bounds apply
        let invalid = DateError::InvalidDay {
            year:  0,
            month: 0,
            day:   value,
        };
        if !(MIN_DAY..=DAYS_IN_MONTH).contains(&value) {
            return Err(invalid);
        }
        NonZeroU8::new(value).map(Self).ok_or(invalid)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
