//! This module implements the civil (proleptic Gregorian) date record and
//! its conversion to and from the fixed day count.
//!
//! A *fixed day* is a single monotonically increasing `i64`; day 1 is
//! Gregorian January 1 of year 1. Every supported date in both calendars
//! maps bijectively onto this count, and all cross-calendar arithmetic in
//! the crate funnels through it.

use num_traits::ToPrimitive;

use crate::{
    error::ErrorMessage,
    utils::{self, gregorian_days_in_month},
    LuachError, LuachResult,
};

/// A civil (proleptic Gregorian) calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CivilDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CivilDate {
    /// Creates a new `CivilDate` without validating the fields.
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new validated `CivilDate`.
    ///
    /// The year must be 1 or later; earlier dates precede the supported
    /// fixed-day range.
    pub fn try_new(year: i32, month: u8, day: u8) -> LuachResult<Self> {
        if year < 1 {
            return Err(LuachError::range().with_enum(ErrorMessage::GregorianYearOutOfRange));
        }
        if !(1..=12).contains(&month) {
            return Err(LuachError::range().with_enum(ErrorMessage::GregorianMonthOutOfRange));
        }
        if day < 1 || day > gregorian_days_in_month(month, year) {
            return Err(LuachError::range().with_enum(ErrorMessage::GregorianDayOutOfRange));
        }
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Returns the year.
    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12).
    #[inline]
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of the month.
    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Converts this date to its fixed day number.
    #[must_use]
    pub fn to_fixed_day(&self) -> i64 {
        let mut days = i64::from(self.day);
        for m in 1..self.month {
            days += i64::from(gregorian_days_in_month(m, self.year));
        }
        let prior = i64::from(self.year) - 1;
        days + 365 * prior + prior / 4 - prior / 100 + prior / 400
    }

    /// Converts a fixed day number back into a `CivilDate`.
    ///
    /// The year is approximated from the day count and then corrected by a
    /// short forward search, first by year and then by month.
    pub fn from_fixed_day(fixed: i64) -> LuachResult<Self> {
        if fixed < 1 {
            return Err(LuachError::range().with_enum(ErrorMessage::FixedDayBeforeEpoch));
        }
        let mut year = (fixed / 366 + 1)
            .to_i32()
            .ok_or(LuachError::range().with_enum(ErrorMessage::NumberOutOfCastRange))?;
        let mut start = fixed_from_year(year);
        loop {
            let next = start + utils::gregorian_days_in_year(year);
            if fixed < next {
                break;
            }
            start = next;
            year += 1;
        }
        let mut month = 1u8;
        let mut day_of_year = fixed - start + 1;
        loop {
            let len = i64::from(gregorian_days_in_month(month, year));
            if day_of_year <= len {
                break;
            }
            day_of_year -= len;
            month += 1;
        }
        Ok(Self::new_unchecked(year, month, day_of_year as u8))
    }
}

/// Returns the fixed day of January 1 of the given year.
#[inline]
fn fixed_from_year(year: i32) -> i64 {
    let prior = i64::from(year) - 1;
    1 + 365 * prior + prior / 4 - prior / 100 + prior / 400
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_day_one() {
        let date = CivilDate::try_new(1, 1, 1).unwrap();
        assert_eq!(date.to_fixed_day(), 1);
        assert_eq!(CivilDate::from_fixed_day(1).unwrap(), date);
    }

    #[test]
    fn known_fixed_days() {
        // 1970-01-01 and the start of both Daf Yomi cycles.
        assert_eq!(
            CivilDate::try_new(1970, 1, 1).unwrap().to_fixed_day(),
            719_163
        );
        assert_eq!(
            CivilDate::try_new(1923, 9, 11).unwrap().to_fixed_day(),
            702_249
        );
        assert_eq!(
            CivilDate::try_new(1980, 2, 2).unwrap().to_fixed_day(),
            722_847
        );
        assert_eq!(
            CivilDate::try_new(2011, 1, 31).unwrap().to_fixed_day(),
            734_168
        );
    }

    #[test]
    fn round_trips_across_boundaries() {
        let cases = [
            (1899, 12, 31),
            (1900, 3, 1),
            (2000, 2, 29),
            (2001, 2, 28),
            (2011, 1, 31),
            (2024, 12, 31),
            (9999, 12, 31),
        ];
        for (y, m, d) in cases {
            let date = CivilDate::try_new(y, m, d).unwrap();
            assert_eq!(
                CivilDate::from_fixed_day(date.to_fixed_day()).unwrap(),
                date,
                "round trip failed for {y}-{m}-{d}"
            );
        }
    }

    #[test]
    fn sequential_fixed_days() {
        // A dense scan across a leap-year February.
        let mut fixed = CivilDate::try_new(2020, 2, 1).unwrap().to_fixed_day();
        for day in 1..=29u8 {
            let date = CivilDate::from_fixed_day(fixed).unwrap();
            assert_eq!((date.month(), date.day()), (2, day));
            fixed += 1;
        }
        let date = CivilDate::from_fixed_day(fixed).unwrap();
        assert_eq!((date.month(), date.day()), (3, 1));
    }

    #[test]
    fn rejects_invalid_fields() {
        assert!(CivilDate::try_new(0, 1, 1).is_err());
        assert!(CivilDate::try_new(2024, 13, 1).is_err());
        assert!(CivilDate::try_new(2024, 0, 1).is_err());
        assert!(CivilDate::try_new(2023, 2, 29).is_err());
        assert!(CivilDate::from_fixed_day(0).is_err());
    }

    #[test]
    fn weekday_of_known_dates() {
        // 2011-01-31 was a Monday.
        let date = CivilDate::try_new(2011, 1, 31).unwrap();
        assert_eq!(utils::day_of_week(date.to_fixed_day()), 1);
        // 2020-01-04 was a Saturday.
        let date = CivilDate::try_new(2020, 1, 4).unwrap();
        assert_eq!(utils::day_of_week(date.to_fixed_day()), 6);
    }
}
