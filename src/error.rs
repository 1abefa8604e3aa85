use crate::consts::{DAYS_IN_DECADE, MAX_YEAR, SANSCULOTTIDES, SANSCULOTTIDES_LEAP};
use crate::prelude::*;

/// A year, month or day that does not form a valid Republican date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", SANSCULOTTIDES)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Invalid day of décade: {} (must be 1-{})", "_0", DAYS_IN_DECADE)]
    InvalidDayOfDecade(u8),
    #[display(fmt = "Invalid Sansculottide: {} (must be 1-{})", "_0", SANSCULOTTIDES_LEAP)]
    InvalidSansculottide(u8),
}

impl std::error::Error for DateError {}

/// Error type for conversions between day counts and Republican dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The day count lies outside the years the calendar can represent.
    #[error("Day count {day_count} is out of range (must be {min}-{max})")]
    OutOfRange { day_count: i64, min: i64, max: i64 },

    /// The date is not valid under the converter's leap rule.
    #[error(transparent)]
    InvalidDate(#[from] DateError),
}
