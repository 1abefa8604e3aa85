/// Rata Die of 1 Vendémiaire year I (22 September 1792, Gregorian)
pub const EPOCH_RATA_DIE: i64 = 654_415;

/// Offset added to a Rata Die to obtain the Julian Day Number at noon
pub const JULIAN_DAY_OFFSET: i64 = 1_721_425;

/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Number of regular (thirty-day) months in a year
pub const REGULAR_MONTHS: u8 = 12;

/// Month number of the Sansculottides, the intercalary days closing the year
pub const SANSCULOTTIDES: u8 = 13;

/// First day of a month
pub const MIN_DAY: u8 = 1;

/// Days in each regular month
pub const DAYS_IN_MONTH: u8 = 30;

/// Number of Sansculottides in a common year
pub const SANSCULOTTIDES_COMMON: u8 = 5;
/// Number of Sansculottides in a leap (sextile) year
pub const SANSCULOTTIDES_LEAP: u8 = 6;

/// Days in a décade, the Republican ten-day week
pub const DAYS_IN_DECADE: u8 = 10;
/// Décades in a regular month
pub const DECADES_IN_MONTH: u8 = 3;

/// Days in a common year
pub const DAYS_IN_COMMON_YEAR: u16 = 365;
/// Days in a leap year
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400...
pub(crate) const GREGORIAN_CYCLE: u16 = 400;
/// ...and not divisible by 4000 (Romme's correction)
pub(crate) const ROMME_CYCLE: u16 = 4000;
/// Von Mädler drops one leap day every 128 years
pub(crate) const MAEDLER_CYCLE: u16 = 128;

/// Leap years observed while the calendar was in civil use
pub(crate) const HISTORICAL_SEXTILES: [u16; 4] = [3, 7, 11, 15];
/// First year governed by the arithmetic rule under the historical reckoning
pub(crate) const HISTORICAL_ARITHMETIC_START: u16 = 20;
