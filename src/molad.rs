//! Fixed-point arithmetic over *chalakim* for the molad, the calculated
//! mean instant of lunar conjunction.
//!
//! A chelek (plural chalakim) is 1/1080 of an hour, the finest unit the
//! calendar works in. All molad computation is integer arithmetic over a
//! single running count of chalakim since the reference conjunction,
//! *molad Tohu* (BaHaRaD: day 2, 5 hours, 204 chalakim on the molad
//! scale, where the day begins at 6 PM the prior evening).

use crate::{
    error::ErrorMessage,
    hebrew::{is_hebrew_leap_year, HebrewMonth},
    LuachError, LuachResult,
};

/// Chalakim per minute: 1080 / 60.
pub const CHALAKIM_PER_MINUTE: i64 = 18;
/// Chalakim per hour.
pub const CHALAKIM_PER_HOUR: i64 = 1080;
/// Chalakim per day: 24 * 1080.
pub const CHALAKIM_PER_DAY: i64 = 25920;
/// Chalakim per lunar month: 29 days, 12 hours, and 793 chalakim.
pub const CHALAKIM_PER_MONTH: i64 = 765_433;
/// Chalakim from the start of Sunday to molad Tohu: 1 day, 5 hours and
/// 204 chalakim.
pub(crate) const CHALAKIM_MOLAD_TOHU: i64 = 31_524;

/// A molad instant, stored as chalakim elapsed since molad Tohu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Molad(pub(crate) i64);

impl Molad {
    /// Computes the molad for the given Hebrew month.
    #[must_use]
    pub fn for_month(year: i32, month: HebrewMonth) -> Self {
        let ordinal = month.ordinal_from_tishrei(is_hebrew_leap_year(year));
        Self(chalakim_since_molad_tohu(i64::from(year), ordinal))
    }

    /// Returns the raw chalakim count since molad Tohu.
    #[inline]
    #[must_use]
    pub const fn as_chalakim(&self) -> i64 {
        self.0
    }

    /// Returns the whole days elapsed since the start of the epoch week.
    #[inline]
    #[must_use]
    pub const fn days(&self) -> i64 {
        self.0 / CHALAKIM_PER_DAY
    }

    /// Returns the chalakim remainder within the molad's day.
    #[inline]
    #[must_use]
    pub const fn parts(&self) -> i64 {
        self.0 % CHALAKIM_PER_DAY
    }

    /// Decomposes the in-day remainder into a [`MoladTime`].
    ///
    /// The hours are on the molad scale, counted from 6 PM of the prior
    /// evening.
    #[must_use]
    pub fn time(&self) -> MoladTime {
        let parts = self.parts();
        MoladTime {
            hours: (parts / CHALAKIM_PER_HOUR) as u8,
            minutes: (parts % CHALAKIM_PER_HOUR / CHALAKIM_PER_MINUTE) as u8,
            chalakim: (parts % CHALAKIM_PER_MINUTE) as u8,
        }
    }
}

/// A time of day expressed in hours, minutes and chalakim.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MoladTime {
    hours: u8,
    minutes: u8,
    chalakim: u8,
}

impl MoladTime {
    /// Creates a new validated `MoladTime`.
    pub fn try_new(hours: u8, minutes: u8, chalakim: u8) -> LuachResult<Self> {
        if hours > 23 {
            return Err(LuachError::range().with_enum(ErrorMessage::MoladHoursOutOfRange));
        }
        if minutes > 59 {
            return Err(LuachError::range().with_enum(ErrorMessage::MoladMinutesOutOfRange));
        }
        if chalakim > 17 {
            return Err(LuachError::range().with_enum(ErrorMessage::MoladChalakimOutOfRange));
        }
        Ok(Self {
            hours,
            minutes,
            chalakim,
        })
    }

    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(hours: u8, minutes: u8, chalakim: u8) -> Self {
        Self {
            hours,
            minutes,
            chalakim,
        }
    }

    /// Returns the hours (0-23).
    #[inline]
    #[must_use]
    pub const fn hours(&self) -> u8 {
        self.hours
    }

    /// Returns the minutes (0-59).
    #[inline]
    #[must_use]
    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Returns the chalakim remainder (0-17).
    #[inline]
    #[must_use]
    pub const fn chalakim(&self) -> u8 {
        self.chalakim
    }
}

/// Returns the chalakim elapsed from molad Tohu to the molad of the month
/// with the given Tishrei-based ordinal.
///
/// The month count across whole 19-year cycles is `235 * cycles`; within
/// the current cycle, `12` months for each elapsed year plus one for each
/// elapsed leap year, then the month's ordinal within its own year.
pub(crate) fn chalakim_since_molad_tohu(year: i64, ordinal: u8) -> i64 {
    let prior = year - 1;
    let months_elapsed = 235 * (prior / 19)
        + 12 * (prior % 19)
        + (7 * (prior % 19) + 1) / 19
        + (i64::from(ordinal) - 1);
    CHALAKIM_MOLAD_TOHU + CHALAKIM_PER_MONTH * months_elapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn molad_tohu_is_beharad() {
        // Molad of Tishrei, year 1: day 2 of the week (Monday), 5 hours
        // and 204 chalakim.
        let molad = Molad::for_month(1, HebrewMonth::Tishrei);
        assert_eq!(molad.as_chalakim(), CHALAKIM_MOLAD_TOHU);
        assert_eq!(molad.days(), 1);
        let time = molad.time();
        assert_eq!((time.hours(), time.minutes(), time.chalakim()), (5, 11, 6));
        // 204 chalakim past the hour is 11 minutes and 6 chalakim.
        assert_eq!(molad.parts(), 5 * CHALAKIM_PER_HOUR + 204);
    }

    #[test]
    fn decompose_is_lossless() {
        let molad = Molad::for_month(5772, HebrewMonth::Tishrei);
        let time = molad.time();
        let rebuilt = molad.days() * CHALAKIM_PER_DAY
            + i64::from(time.hours()) * CHALAKIM_PER_HOUR
            + i64::from(time.minutes()) * CHALAKIM_PER_MINUTE
            + i64::from(time.chalakim());
        assert_eq!(rebuilt, molad.as_chalakim());
    }

    #[test]
    fn consecutive_months_differ_by_one_lunation() {
        let elul = Molad::for_month(5771, HebrewMonth::Elul);
        let tishrei = Molad::for_month(5772, HebrewMonth::Tishrei);
        assert_eq!(tishrei.as_chalakim() - elul.as_chalakim(), CHALAKIM_PER_MONTH);
    }

    #[test]
    fn time_range_validation() {
        assert!(MoladTime::try_new(23, 59, 17).is_ok());
        assert!(MoladTime::try_new(24, 0, 0).is_err());
        assert!(MoladTime::try_new(0, 60, 0).is_err());
        assert!(MoladTime::try_new(0, 0, 18).is_err());
    }
}
