use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::RevolutionaryDate;
use crate::consts::{DAYS_IN_MONTH, MAX_YEAR, MIN_DAY};
use crate::day_count::RataDie;
use crate::error::{ConversionError, DateError};
use crate::leap::LeapRule;
use crate::types::{Day, Month, Year};

/// Days in four years holding one leap year.
const FOUR_YEAR_CYCLE_DAYS: i64 = 1461;

/// Converts between day counts and Republican dates under one leap rule.
///
/// `Converter::default()` uses [`LeapRule::Romme`].
///
/// # Example
///
/// ```
/// use frenchrev::{Converter, LeapRule, Month, RataDie};
///
/// let converter = Converter::new().with_leap_rule(LeapRule::Historical);
/// let date = converter.to_revolutionary(RataDie::EPOCH).unwrap();
///
/// assert_eq!(date.year(), 1);
/// assert_eq!(date.month(), Month::Vendemiaire);
/// assert_eq!(date.day_of_month(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Converter {
    leap_rule: LeapRule,
}

impl Converter {
    pub const fn new() -> Self {
        Self {
            leap_rule: LeapRule::Romme,
        }
    }

    /// Sets the leap-year rule.
    #[must_use]
    pub const fn with_leap_rule(mut self, leap_rule: LeapRule) -> Self {
        self.leap_rule = leap_rule;
        self
    }

    pub const fn leap_rule(&self) -> LeapRule {
        self.leap_rule
    }

    pub const fn is_leap_year(&self, year: u16) -> bool {
        self.leap_rule.is_leap_year(year)
    }

    pub const fn days_in_year(&self, year: u16) -> u16 {
        self.leap_rule.days_in_year(year)
    }

    pub const fn length_of_month(&self, year: u16, month: Month) -> u8 {
        month.length(year, self.leap_rule)
    }

    /// Builds a date, checking the day against this converter's leap rule.
    ///
    /// # Errors
    /// Returns the `DateError` for the first component out of range.
    pub fn date(&self, year: u16, month: u8, day: u8) -> Result<RevolutionaryDate, DateError> {
        let year_typed = Year::new(year)?;
        let month_typed = Month::new(month)?;
        let day_typed = Day::new(day, year, month_typed, self.leap_rule)?;
        Ok(RevolutionaryDate::from_parts(year_typed, month_typed, day_typed))
    }

    /// Day count of 1 Vendémiaire of `year`.
    pub const fn first_day_of_year(&self, year: Year) -> RataDie {
        RataDie::EPOCH.saturating_add_days(self.leap_rule.days_before_year(year.get()))
    }

    /// Earliest convertible day count (the epoch).
    pub const fn min_day_count(&self) -> RataDie {
        RataDie::EPOCH
    }

    /// Latest convertible day count (the last Sansculottide of `MAX_YEAR`).
    pub const fn max_day_count(&self) -> RataDie {
        RataDie::EPOCH.saturating_add_days(self.leap_rule.days_before_year(MAX_YEAR + 1) - 1)
    }

    /// Converts a day count into a Republican date.
    ///
    /// # Errors
    /// Returns `ConversionError::OutOfRange` if the day count precedes the
    /// epoch or follows the last day of `MAX_YEAR`.
    pub fn to_revolutionary(&self, day_count: RataDie) -> Result<RevolutionaryDate, ConversionError> {
        if day_count < self.min_day_count() || day_count > self.max_day_count() {
            debug!(day_count = day_count.get(), rule = ?self.leap_rule, "day count out of range");
            return Err(self.out_of_range(day_count));
        }

        let elapsed = day_count
            .days_since_epoch()
            .ok_or_else(|| self.out_of_range(day_count))?;
        let year = self.year_containing(elapsed);
        let day_of_year = elapsed - self.leap_rule.days_before_year(year);
        let (month, day) = split_day_of_year(day_of_year);

        let month = Month::new(month)?;
        let date = RevolutionaryDate::from_parts(
            Year::new(year)?,
            month,
            Day::new(day, year, month, self.leap_rule)?,
        );
        trace!(day_count = day_count.get(), %date, "converted day count");
        Ok(date)
    }

    /// Converts a Republican date into a day count.
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidDate` if the day does not exist under
    /// this converter's leap rule (a sixth Sansculottide in a common year).
    pub fn to_day_count(&self, date: RevolutionaryDate) -> Result<RataDie, ConversionError> {
        let year = date.year();
        if let Err(e) = Day::new(date.day_of_month(), year, date.month(), self.leap_rule) {
            debug!(%date, rule = ?self.leap_rule, "date invalid under leap rule");
            return Err(e.into());
        }

        let within_year = i64::from(DAYS_IN_MONTH) * i64::from(date.month().get() - 1)
            + i64::from(date.day_of_month() - MIN_DAY);
        let day_count = RataDie::EPOCH.saturating_add_days(self.leap_rule.days_before_year(year) + within_year);
        trace!(%date, day_count = day_count.get(), "converted date");
        Ok(day_count)
    }

    /// Moves `date` by `days` (negative moves backwards).
    ///
    /// # Errors
    /// Returns `ConversionError` if `date` is invalid under this rule or the
    /// result falls outside the supported range.
    pub fn add_days(&self, date: RevolutionaryDate, days: i64) -> Result<RevolutionaryDate, ConversionError> {
        let day_count = self.to_day_count(date)?;
        self.to_revolutionary(day_count.saturating_add_days(days))
    }

    /// Number of days from `start` to `end` (negative if `end` is earlier).
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidDate` if either date is invalid under this rule.
    pub fn days_between(&self, start: RevolutionaryDate, end: RevolutionaryDate) -> Result<i64, ConversionError> {
        Ok(self.to_day_count(end)?.get() - self.to_day_count(start)?.get())
    }

    /// Converts a Gregorian date into a Republican date.
    ///
    /// # Errors
    /// Returns `ConversionError::OutOfRange` for dates before 22 September 1792
    /// or after the end of `MAX_YEAR`.
    pub fn from_gregorian(&self, date: NaiveDate) -> Result<RevolutionaryDate, ConversionError> {
        self.to_revolutionary(RataDie::from(date))
    }

    /// Converts a Republican date into a Gregorian date.
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidDate` if the date is invalid under this rule.
    pub fn to_gregorian(&self, date: RevolutionaryDate) -> Result<NaiveDate, ConversionError> {
        let day_count = self.to_day_count(date)?;
        day_count.to_naive_date().ok_or_else(|| self.out_of_range(day_count))
    }

    const fn out_of_range(&self, day_count: RataDie) -> ConversionError {
        ConversionError::OutOfRange {
            day_count: day_count.get(),
            min:       self.min_day_count().get(),
            max:       self.max_day_count().get(),
        }
    }

    /// Finds the year whose first day is the latest one not after `elapsed`
    /// days since the epoch. `elapsed` must lie within the supported range.
    fn year_containing(&self, elapsed: i64) -> u16 {
        // The four-year mean lands within a year of the answer for every rule
        let estimate = elapsed * 4 / FOUR_YEAR_CYCLE_DAYS + 1;
        let mut year = u16::try_from(estimate).unwrap_or(MAX_YEAR).clamp(1, MAX_YEAR);

        while year > 1 && self.leap_rule.days_before_year(year) > elapsed {
            year -= 1;
        }
        while year < MAX_YEAR && self.leap_rule.days_before_year(year + 1) <= elapsed {
            year += 1;
        }
        year
    }
}

/// Splits a zero-based day of year into (month, day), both one-based.
/// Days past the twelfth month fall into month 13.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn split_day_of_year(day_of_year: i64) -> (u8, u8) {
    let month_len = DAYS_IN_MONTH as i64;
    ((day_of_year / month_len) as u8 + 1, (day_of_year % month_len) as u8 + MIN_DAY)
}
