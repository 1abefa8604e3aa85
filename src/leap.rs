//! Leap-year rules of the Republican calendar.
//!
//! The decree of 1793 tied the new year to the autumn equinox, which made the
//! leap (sextile) years irregular. Several arithmetic replacements were
//! proposed; each one is a variant of [`LeapRule`].

use serde::{Deserialize, Serialize};

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR, GREGORIAN_CYCLE,
    HISTORICAL_ARITHMETIC_START, HISTORICAL_SEXTILES, LEAP_YEAR_CYCLE, MAEDLER_CYCLE, ROMME_CYCLE,
    SANSCULOTTIDES_COMMON, SANSCULOTTIDES_LEAP,
};

/// The rule deciding which years carry a sixth Sansculottide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeapRule {
    /// Romme's proposal: every fourth year, except centuries not divisible
    /// by 400, and except multiples of 4000.
    #[default]
    Romme,
    /// Years 3, 7, 11 and 15 as observed, then Romme's rule from year 20.
    Historical,
    /// Every fourth year, except multiples of 128.
    VonMaedler,
}

impl LeapRule {
    /// Returns `true` if `year` has six Sansculottides under this rule.
    pub const fn is_leap_year(self, year: u16) -> bool {
        match self {
            Self::Romme => romme_leap(year),
            Self::Historical => {
                if year < HISTORICAL_ARITHMETIC_START {
                    is_historical_sextile(year)
                } else {
                    romme_leap(year)
                }
            }
            Self::VonMaedler => year % LEAP_YEAR_CYCLE == 0 && year % MAEDLER_CYCLE != 0,
        }
    }

    /// Number of days in `year` (365 or 366).
    pub const fn days_in_year(self, year: u16) -> u16 {
        if self.is_leap_year(year) {
            DAYS_IN_LEAP_YEAR
        } else {
            DAYS_IN_COMMON_YEAR
        }
    }

    /// Number of Sansculottides in `year` (5 or 6).
    pub const fn sansculottides_in_year(self, year: u16) -> u8 {
        if self.is_leap_year(year) {
            SANSCULOTTIDES_LEAP
        } else {
            SANSCULOTTIDES_COMMON
        }
    }

    /// Counts the leap years in `1..=year`.
    pub(crate) const fn leap_years_through(self, year: u16) -> i64 {
        let n = year as i64;
        match self {
            Self::Romme => romme_leaps_through(n),
            Self::Historical => {
                if year < HISTORICAL_ARITHMETIC_START {
                    let mut count = 0;
                    let mut i = 0;
                    while i < HISTORICAL_SEXTILES.len() {
                        if HISTORICAL_SEXTILES[i] <= year {
                            count += 1;
                        }
                        i += 1;
                    }
                    count
                } else {
                    // Sextiles 3..=15 and Romme's 4..=16 both number four
                    romme_leaps_through(n)
                }
            }
            Self::VonMaedler => n / LEAP_YEAR_CYCLE as i64 - n / MAEDLER_CYCLE as i64,
        }
    }

    /// Days elapsed between the epoch and 1 Vendémiaire of `year`.
    pub(crate) const fn days_before_year(self, year: u16) -> i64 {
        debug_assert!(year != 0);
        let prior = year - 1;
        DAYS_IN_COMMON_YEAR as i64 * prior as i64 + self.leap_years_through(prior)
    }
}

const fn romme_leap(year: u16) -> bool {
    ((year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || year % GREGORIAN_CYCLE == 0)
        && year % ROMME_CYCLE != 0
}

const fn romme_leaps_through(n: i64) -> i64 {
    n / LEAP_YEAR_CYCLE as i64 - n / CENTURY_CYCLE as i64 + n / GREGORIAN_CYCLE as i64
        - n / ROMME_CYCLE as i64
}

const fn is_historical_sextile(year: u16) -> bool {
    let mut i = 0;
    while i < HISTORICAL_SEXTILES.len() {
        if HISTORICAL_SEXTILES[i] == year {
            return true;
        }
        i += 1;
    }
    false
}
