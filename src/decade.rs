//! Named days: the ten days of the décade and the Sansculottides.

use serde::{Deserialize, Serialize};

use crate::consts::{DAYS_IN_DECADE, SANSCULOTTIDES_LEAP};
use crate::error::DateError;

/// Day of the décade, the ten-day week that replaced the seven-day week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum DayOfDecade {
    Primidi = 1,
    Duodi,
    Tridi,
    Quartidi,
    Quintidi,
    Sextidi,
    Septidi,
    Octidi,
    Nonidi,
    Decadi,
}

impl DayOfDecade {
    pub const ALL: [Self; DAYS_IN_DECADE as usize] = [
        Self::Primidi,
        Self::Duodi,
        Self::Tridi,
        Self::Quartidi,
        Self::Quintidi,
        Self::Sextidi,
        Self::Septidi,
        Self::Octidi,
        Self::Nonidi,
        Self::Decadi,
    ];

    /// Creates a day of décade from its number (1..=10)
    ///
    /// # Errors
    /// Returns `DateError::InvalidDayOfDecade` if the value is 0 or > 10.
    pub const fn new(value: u8) -> Result<Self, DateError> {
        if value == 0 || value > DAYS_IN_DECADE {
            return Err(DateError::InvalidDayOfDecade(value));
        }
        Ok(Self::ALL[(value - 1) as usize])
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for DayOfDecade {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DayOfDecade> for u8 {
    fn from(day: DayOfDecade) -> Self {
        day.get()
    }
}

/// The complementary days closing the year, each dedicated to a civic value.
/// `Revolution` exists only in leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Sansculottide {
    Vertu = 1,
    Genie,
    Travail,
    Opinion,
    Recompenses,
    Revolution,
}

impl Sansculottide {
    pub const ALL: [Self; SANSCULOTTIDES_LEAP as usize] = [
        Self::Vertu,
        Self::Genie,
        Self::Travail,
        Self::Opinion,
        Self::Recompenses,
        Self::Revolution,
    ];

    /// Creates a Sansculottide from its position in month 13 (1..=6)
    ///
    /// # Errors
    /// Returns `DateError::InvalidSansculottide` if the value is 0 or > 6.
    pub const fn new(value: u8) -> Result<Self, DateError> {
        if value == 0 || value > SANSCULOTTIDES_LEAP {
            return Err(DateError::InvalidSansculottide(value));
        }
        Ok(Self::ALL[(value - 1) as usize])
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Sansculottide {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Sansculottide> for u8 {
    fn from(day: Sansculottide) -> Self {
        day.get()
    }
}
