use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::consts::{EPOCH_RATA_DIE, JULIAN_DAY_OFFSET};
use crate::prelude::*;

/// A continuous day count where day 1 is 1 January 1 CE (proleptic Gregorian).
///
/// Every calendar conversion in this crate passes through a `RataDie`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RataDie(i64);

impl RataDie {
    /// 1 Vendémiaire year I
    pub const EPOCH: Self = Self(EPOCH_RATA_DIE);

    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Julian Day Number of the noon falling on this day, or `None` on overflow.
    pub const fn to_julian_day_number(self) -> Option<i64> {
        self.0.checked_add(JULIAN_DAY_OFFSET)
    }

    /// Day count for a Julian Day Number, or `None` on overflow.
    pub const fn from_julian_day_number(jdn: i64) -> Option<Self> {
        match jdn.checked_sub(JULIAN_DAY_OFFSET) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Days elapsed since 1 Vendémiaire year I (negative before it), or
    /// `None` on overflow.
    pub const fn days_since_epoch(self) -> Option<i64> {
        self.0.checked_sub(EPOCH_RATA_DIE)
    }

    /// Shifts by `days`, clamping at the bounds of `i64`.
    pub const fn saturating_add_days(self, days: i64) -> Self {
        Self(self.0.saturating_add(days))
    }

    /// Converts to a Gregorian date, or `None` outside chrono's supported range.
    pub fn to_naive_date(self) -> Option<NaiveDate> {
        i32::try_from(self.0).ok().and_then(NaiveDate::from_num_days_from_ce_opt)
    }
}

impl From<NaiveDate> for RataDie {
    fn from(date: NaiveDate) -> Self {
        Self(i64::from(date.num_days_from_ce()))
    }
}
