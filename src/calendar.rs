//! This module implements the mutable calendar cursor.
//!
//! A [`HebrewCalendar`] holds one instant in three synchronized
//! representations: the fixed day number, the civil date, and the Hebrew
//! date. Navigation mutates the cursor in place and recomputes all three
//! atomically, so they can never disagree. Lookahead helpers clone the
//! cursor and work on the copy; the holiday, parsha, and Daf Yomi views
//! read from a cursor without mutating it.

use crate::{
    civil::CivilDate,
    error::ErrorMessage,
    hebrew::{
        days_in_hebrew_month, is_hebrew_leap_year, last_month_of_year, HebrewDate, HebrewMonth,
        HEBREW_EPOCH,
    },
    molad::{Molad, MoladTime},
    options::DateUnit,
    utils, LuachError, LuachResult, LuachUnwrap,
};

/// A mutable cursor over the Hebrew and civil calendars.
///
/// Two cursors are equal when their fixed days and Israel flags agree;
/// ordering compares the fixed day alone. The cursor is `Clone`, and a
/// clone is fully independent of its source.
#[derive(Debug, Clone)]
pub struct HebrewCalendar {
    fixed: i64,
    hebrew: HebrewDate,
    civil: CivilDate,
    in_israel: bool,
    use_modern_holidays: bool,
    in_walled_city: bool,
}

impl HebrewCalendar {
    fn from_parts(fixed: i64, hebrew: HebrewDate, civil: CivilDate) -> Self {
        Self {
            fixed,
            hebrew,
            civil,
            in_israel: false,
            use_modern_holidays: false,
            in_walled_city: false,
        }
    }

    /// Creates a cursor from a Gregorian (year, month, day) triple.
    pub fn from_gregorian(year: i32, month: u8, day: u8) -> LuachResult<Self> {
        let civil = CivilDate::try_new(year, month, day)?;
        let fixed = civil.to_fixed_day();
        Ok(Self::from_parts(fixed, HebrewDate::from_fixed_day(fixed)?, civil))
    }

    /// Creates a cursor from a validated [`HebrewDate`].
    pub fn from_hebrew(date: HebrewDate) -> LuachResult<Self> {
        let fixed = date.to_fixed_day();
        Ok(Self::from_parts(fixed, date, CivilDate::from_fixed_day(fixed)?))
    }

    /// Creates a cursor from a Hebrew (year, month, day) triple with a
    /// Nissan-based month number.
    pub fn from_hebrew_fields(year: i32, month: u8, day: u8) -> LuachResult<Self> {
        Self::from_hebrew(HebrewDate::try_from_fields(year, month, day)?)
    }

    /// Creates a cursor from a fixed day number.
    pub fn from_fixed_day(fixed: i64) -> LuachResult<Self> {
        Ok(Self::from_parts(
            fixed,
            HebrewDate::from_fixed_day(fixed)?,
            CivilDate::from_fixed_day(fixed)?,
        ))
    }

    /// Creates a cursor for the current system day (UTC).
    #[cfg(feature = "sys")]
    pub fn now() -> LuachResult<Self> {
        Self::from_fixed_day(crate::sys::current_fixed_day()?)
    }

    // ==== Region flags ====

    /// Returns whether holiday calculations follow Eretz Yisrael.
    #[inline]
    #[must_use]
    pub const fn in_israel(&self) -> bool {
        self.in_israel
    }

    /// Sets whether holiday calculations follow Eretz Yisrael (second
    /// festival days drop, Shemini Atzeres and Simchas Torah merge).
    #[inline]
    pub fn set_in_israel(&mut self, in_israel: bool) {
        self.in_israel = in_israel;
    }

    /// Returns whether the modern Israeli holidays are reported.
    #[inline]
    #[must_use]
    pub const fn uses_modern_holidays(&self) -> bool {
        self.use_modern_holidays
    }

    /// Sets whether the modern Israeli holidays (Yom HaShoah, Yom
    /// HaZikaron, Yom HaAtzmaut, Yom Yerushalayim) are reported.
    #[inline]
    pub fn set_use_modern_holidays(&mut self, use_modern_holidays: bool) {
        self.use_modern_holidays = use_modern_holidays;
    }

    /// Returns whether the location is treated as a walled city (mukaf
    /// choma), which observes Shushan Purim.
    #[inline]
    #[must_use]
    pub const fn in_walled_city(&self) -> bool {
        self.in_walled_city
    }

    /// Sets the walled-city (mukaf choma) flag.
    #[inline]
    pub fn set_in_walled_city(&mut self, in_walled_city: bool) {
        self.in_walled_city = in_walled_city;
    }

    // ==== Field accessors ====

    /// Returns the fixed day number.
    #[inline]
    #[must_use]
    pub const fn fixed_day(&self) -> i64 {
        self.fixed
    }

    /// Returns the Hebrew date.
    #[inline]
    #[must_use]
    pub const fn hebrew_date(&self) -> HebrewDate {
        self.hebrew
    }

    /// Returns the civil date.
    #[inline]
    #[must_use]
    pub const fn civil_date(&self) -> CivilDate {
        self.civil
    }

    /// Returns the Hebrew year.
    #[inline]
    #[must_use]
    pub const fn hebrew_year(&self) -> i32 {
        self.hebrew.year()
    }

    /// Returns the Hebrew month.
    #[inline]
    #[must_use]
    pub const fn hebrew_month(&self) -> HebrewMonth {
        self.hebrew.month()
    }

    /// Returns the Hebrew day of the month.
    #[inline]
    #[must_use]
    pub const fn hebrew_day_of_month(&self) -> u8 {
        self.hebrew.day()
    }

    /// Returns the Gregorian year.
    #[inline]
    #[must_use]
    pub const fn gregorian_year(&self) -> i32 {
        self.civil.year()
    }

    /// Returns the Gregorian month (1-12).
    #[inline]
    #[must_use]
    pub const fn gregorian_month(&self) -> u8 {
        self.civil.month()
    }

    /// Returns the Gregorian day of the month.
    #[inline]
    #[must_use]
    pub const fn gregorian_day_of_month(&self) -> u8 {
        self.civil.day()
    }

    /// Returns the day of the week, 1 = Sunday through 7 = Shabbos.
    #[inline]
    #[must_use]
    pub fn day_of_week(&self) -> u8 {
        utils::day_of_week(self.fixed) + 1
    }

    /// Returns the day of the week as 0 = Sunday through 6 = Shabbos,
    /// the form the internal rule tables use.
    #[inline]
    #[must_use]
    pub(crate) fn weekday0(&self) -> u8 {
        utils::day_of_week(self.fixed)
    }

    /// Returns the molad of the cursor's Hebrew month as a Hebrew date
    /// and a time of day on the civil 24-hour scale.
    ///
    /// The raw molad scale counts hours from 6 PM of the prior evening;
    /// a molad at or past midnight therefore lands on the next civil day.
    pub fn molad(&self) -> LuachResult<(HebrewDate, MoladTime)> {
        let molad = Molad::for_month(self.hebrew.year(), self.hebrew.month());
        let time = molad.time();
        let mut fixed = molad.days() + HEBREW_EPOCH;
        if time.hours() >= 6 {
            fixed += 1;
        }
        let hours = (time.hours() + 18) % 24;
        Ok((
            HebrewDate::from_fixed_day(fixed)?,
            MoladTime::new_unchecked(hours, time.minutes(), time.chalakim()),
        ))
    }

    // ==== Navigation ====

    /// Advances the cursor forward by the given amount of the given unit.
    ///
    /// Day navigation steps the civil and Hebrew fields in lock-step.
    /// Month navigation rolls the Hebrew month (Elul into Tishrei of the
    /// next year, the final Adar into Nissan) and recomputes the civil
    /// side from the result; year navigation re-sets the Hebrew year and
    /// reclamps the day. The amount must be at least 1.
    pub fn forward(&mut self, unit: DateUnit, amount: i32) -> LuachResult<()> {
        if amount < 1 {
            return Err(LuachError::range().with_enum(ErrorMessage::NavigationAmountNotPositive));
        }
        match unit {
            DateUnit::Day => {
                for _ in 0..amount {
                    self.step_forward_day()?;
                }
                Ok(())
            }
            DateUnit::Month => {
                let (mut year, mut month, day) =
                    (self.hebrew.year(), self.hebrew.month(), self.hebrew.day());
                for _ in 0..amount {
                    (year, month) = next_month(year, month)?;
                }
                self.reset_hebrew(year, month, day)
            }
            DateUnit::Year => {
                let year = self
                    .hebrew
                    .year()
                    .checked_add(amount)
                    .ok_or(LuachError::range().with_enum(ErrorMessage::NumberOutOfCastRange))?;
                let mut month = self.hebrew.month();
                if month == HebrewMonth::AdarII && !is_hebrew_leap_year(year) {
                    month = HebrewMonth::Adar;
                }
                self.reset_hebrew(year, month, self.hebrew.day())
            }
        }
    }

    /// Moves the cursor back a single day.
    ///
    /// Fails at fixed day 1, the start of the supported range.
    pub fn back(&mut self) -> LuachResult<()> {
        if self.fixed <= 1 {
            return Err(LuachError::range().with_enum(ErrorMessage::FixedDayBeforeEpoch));
        }
        self.fixed -= 1;

        // Civil side.
        let (cy, cm, cd) = (self.civil.year(), self.civil.month(), self.civil.day());
        self.civil = if cd > 1 {
            CivilDate::new_unchecked(cy, cm, cd - 1)
        } else if cm == 1 {
            CivilDate::new_unchecked(cy - 1, 12, 31)
        } else {
            CivilDate::new_unchecked(cy, cm - 1, utils::gregorian_days_in_month(cm - 1, cy))
        };

        // Hebrew side.
        let (hy, hm, hd) = (self.hebrew.year(), self.hebrew.month(), self.hebrew.day());
        self.hebrew = if hd > 1 {
            HebrewDate::new_unchecked(hy, hm, hd - 1)
        } else {
            let (year, month) = match hm {
                HebrewMonth::Nissan => (hy, last_month_of_year(hy)),
                HebrewMonth::Tishrei => (hy - 1, HebrewMonth::Elul),
                _ => {
                    let month = HebrewMonth::from_value(hm.value() - 1, is_hebrew_leap_year(hy))
                        .luach_unwrap()?;
                    (hy, month)
                }
            };
            HebrewDate::new_unchecked(year, month, days_in_hebrew_month(month, year))
        };
        Ok(())
    }

    /// Single-day step shared by day navigation.
    fn step_forward_day(&mut self) -> LuachResult<()> {
        self.fixed += 1;

        // Civil side.
        let (cy, cm, cd) = (self.civil.year(), self.civil.month(), self.civil.day());
        self.civil = if cd < utils::gregorian_days_in_month(cm, cy) {
            CivilDate::new_unchecked(cy, cm, cd + 1)
        } else if cm == 12 {
            CivilDate::new_unchecked(cy + 1, 1, 1)
        } else {
            CivilDate::new_unchecked(cy, cm + 1, 1)
        };

        // Hebrew side.
        let (hy, hm, hd) = (self.hebrew.year(), self.hebrew.month(), self.hebrew.day());
        self.hebrew = if hd < days_in_hebrew_month(hm, hy) {
            HebrewDate::new_unchecked(hy, hm, hd + 1)
        } else if hm == HebrewMonth::Elul {
            HebrewDate::new_unchecked(hy + 1, HebrewMonth::Tishrei, 1)
        } else if hm == last_month_of_year(hy) {
            HebrewDate::new_unchecked(hy, HebrewMonth::Nissan, 1)
        } else {
            // Within the year and not at a wrap point, so the next month
            // value is always valid.
            let month = HebrewMonth::from_value(hm.value() + 1, is_hebrew_leap_year(hy))
                .luach_unwrap()?;
            HebrewDate::new_unchecked(hy, month, 1)
        };
        Ok(())
    }

    /// Re-anchors the cursor on a Hebrew date, clamping the day to the
    /// month's length and recomputing the fixed and civil fields.
    fn reset_hebrew(&mut self, year: i32, month: HebrewMonth, day: u8) -> LuachResult<()> {
        let day = day.min(days_in_hebrew_month(month, year));
        let hebrew = HebrewDate::new_unchecked(year, month, day);
        let fixed = hebrew.to_fixed_day();
        self.civil = CivilDate::from_fixed_day(fixed)?;
        self.hebrew = hebrew;
        self.fixed = fixed;
        Ok(())
    }
}

/// Rolls a Hebrew (year, month) one month forward in calendar order.
fn next_month(year: i32, month: HebrewMonth) -> LuachResult<(i32, HebrewMonth)> {
    if month == HebrewMonth::Elul {
        return Ok((year + 1, HebrewMonth::Tishrei));
    }
    if month == last_month_of_year(year) {
        return Ok((year, HebrewMonth::Nissan));
    }
    let month = HebrewMonth::from_value(month.value() + 1, is_hebrew_leap_year(year))
        .luach_unwrap()?;
    Ok((year, month))
}

impl PartialEq for HebrewCalendar {
    fn eq(&self, other: &Self) -> bool {
        self.fixed == other.fixed && self.in_israel == other.in_israel
    }
}

impl Eq for HebrewCalendar {}

impl PartialOrd for HebrewCalendar {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.fixed.cmp(&other.fixed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Month-boundary crossings stepping one day at a time from
    /// 2011-01-31 (5771 Shevat 26) through the end of 2011:
    /// (gregorian month, day, hebrew year, month value, day).
    const BOUNDARIES_2011: [(u8, u8, i32, u8, u8); 22] = [
        (2, 1, 5771, 11, 27),
        (2, 5, 5771, 12, 1),
        (3, 1, 5771, 12, 25),
        (3, 7, 5771, 13, 1),
        (4, 1, 5771, 13, 26),
        (4, 5, 5771, 1, 1),
        (5, 1, 5771, 1, 27),
        (5, 5, 5771, 2, 1),
        (6, 1, 5771, 2, 28),
        (6, 3, 5771, 3, 1),
        (7, 1, 5771, 3, 29),
        (7, 3, 5771, 4, 1),
        (8, 1, 5771, 5, 1),
        (8, 31, 5771, 6, 1),
        (9, 1, 5771, 6, 2),
        (9, 29, 5772, 7, 1),
        (10, 1, 5772, 7, 3),
        (10, 29, 5772, 8, 1),
        (11, 1, 5772, 8, 4),
        (11, 27, 5772, 9, 1),
        (12, 1, 5772, 9, 5),
        (12, 27, 5772, 10, 1),
    ];

    #[test]
    fn day_navigation_crosses_month_boundaries() {
        let mut cal = HebrewCalendar::from_gregorian(2011, 1, 31).unwrap();
        assert_eq!(cal.hebrew_year(), 5771);
        assert_eq!(cal.hebrew_month(), HebrewMonth::Shevat);
        assert_eq!(cal.hebrew_day_of_month(), 26);
        assert_eq!(cal.day_of_week(), 2); // Monday

        let mut crossings = std::vec::Vec::new();
        while cal.gregorian_year() == 2011 {
            cal.forward(DateUnit::Day, 1).unwrap();
            if cal.gregorian_year() != 2011 {
                break;
            }
            if cal.gregorian_day_of_month() == 1 || cal.hebrew_day_of_month() == 1 {
                crossings.push((
                    cal.gregorian_month(),
                    cal.gregorian_day_of_month(),
                    cal.hebrew_year(),
                    cal.hebrew_month().value(),
                    cal.hebrew_day_of_month(),
                ));
            }
        }
        assert_eq!(crossings.as_slice(), &BOUNDARIES_2011);
    }

    #[test]
    fn day_navigation_matches_direct_construction() {
        let start = HebrewCalendar::from_gregorian(2019, 12, 15).unwrap();
        let mut stepped = start.clone();
        for n in 1..=800i64 {
            stepped.forward(DateUnit::Day, 1).unwrap();
            let direct = HebrewCalendar::from_fixed_day(start.fixed_day() + n).unwrap();
            assert_eq!(stepped.hebrew_date(), direct.hebrew_date());
            assert_eq!(stepped.civil_date(), direct.civil_date());
        }
    }

    #[test]
    fn bulk_day_navigation() {
        let mut one_by_one = HebrewCalendar::from_gregorian(2011, 1, 31).unwrap();
        for _ in 0..365 {
            one_by_one.forward(DateUnit::Day, 1).unwrap();
        }
        let mut bulk = HebrewCalendar::from_gregorian(2011, 1, 31).unwrap();
        bulk.forward(DateUnit::Day, 365).unwrap();
        assert_eq!(one_by_one, bulk);
    }

    #[test]
    fn month_navigation_rolls_years_and_adars() {
        // Elul rolls into Tishrei of the next year.
        let mut cal = HebrewCalendar::from_hebrew_fields(5771, 6, 15).unwrap();
        cal.forward(DateUnit::Month, 1).unwrap();
        assert_eq!(cal.hebrew_year(), 5772);
        assert_eq!(cal.hebrew_month(), HebrewMonth::Tishrei);
        assert_eq!(cal.hebrew_day_of_month(), 15);

        // In leap 5771, Shevat 30 -> Adar I 30 -> Adar II 29 (clamped)
        // -> Nissan 29.
        let mut cal = HebrewCalendar::from_hebrew_fields(5771, 11, 30).unwrap();
        cal.forward(DateUnit::Month, 1).unwrap();
        assert_eq!(cal.hebrew_month(), HebrewMonth::Adar);
        assert_eq!(cal.hebrew_day_of_month(), 30);
        cal.forward(DateUnit::Month, 1).unwrap();
        assert_eq!(cal.hebrew_month(), HebrewMonth::AdarII);
        assert_eq!(cal.hebrew_day_of_month(), 29);
        cal.forward(DateUnit::Month, 1).unwrap();
        assert_eq!(cal.hebrew_month(), HebrewMonth::Nissan);

        // In common 5772, Adar rolls straight into Nissan.
        let mut cal = HebrewCalendar::from_hebrew_fields(5772, 12, 10).unwrap();
        cal.forward(DateUnit::Month, 1).unwrap();
        assert_eq!(cal.hebrew_month(), HebrewMonth::Nissan);
        assert_eq!(cal.hebrew_year(), 5772);
    }

    #[test]
    fn year_navigation_reclamps() {
        // Adar II of leap 5771 maps to Adar the following year.
        let mut cal = HebrewCalendar::from_hebrew_fields(5771, 13, 5).unwrap();
        cal.forward(DateUnit::Year, 1).unwrap();
        assert_eq!(cal.hebrew_year(), 5772);
        assert_eq!(cal.hebrew_month(), HebrewMonth::Adar);
        assert_eq!(cal.hebrew_day_of_month(), 5);

        // Cheshvan 30 of a complete year clamps in a regular year.
        let mut cal = HebrewCalendar::from_hebrew_fields(5771, 8, 30).unwrap();
        cal.forward(DateUnit::Year, 1).unwrap();
        assert_eq!(cal.hebrew_year(), 5772);
        assert_eq!(cal.hebrew_day_of_month(), 29);
    }

    #[test]
    fn back_is_inverse_of_forward() {
        let mut cal = HebrewCalendar::from_gregorian(2011, 4, 5).unwrap();
        let snapshot = cal.clone();
        for _ in 0..200 {
            cal.forward(DateUnit::Day, 1).unwrap();
        }
        for _ in 0..200 {
            cal.back().unwrap();
        }
        assert_eq!(cal, snapshot);
        assert_eq!(cal.hebrew_date(), snapshot.hebrew_date());

        // Stepping back across Rosh Hashana lands in Elul.
        let mut cal = HebrewCalendar::from_hebrew_fields(5772, 7, 1).unwrap();
        cal.back().unwrap();
        assert_eq!(cal.hebrew_year(), 5771);
        assert_eq!(cal.hebrew_month(), HebrewMonth::Elul);
        assert_eq!(cal.hebrew_day_of_month(), 29);
    }

    #[test]
    fn back_fails_at_epoch() {
        let mut cal = HebrewCalendar::from_fixed_day(1).unwrap();
        assert!(cal.back().is_err());
    }

    #[test]
    fn forward_rejects_non_positive_amounts() {
        let mut cal = HebrewCalendar::from_gregorian(2011, 1, 31).unwrap();
        assert!(cal.forward(DateUnit::Day, 0).is_err());
        assert!(cal.forward(DateUnit::Month, -3).is_err());
    }

    #[test]
    fn clone_is_independent() {
        let original = HebrewCalendar::from_gregorian(2011, 1, 31).unwrap();
        let mut copy = original.clone();
        copy.forward(DateUnit::Day, 40).unwrap();
        copy.set_in_israel(true);
        assert_eq!(original.hebrew_day_of_month(), 26);
        assert_eq!(original.gregorian_day_of_month(), 31);
        assert!(!original.in_israel());
    }

    #[test]
    fn equality_includes_israel_flag_ordering_does_not() {
        let a = HebrewCalendar::from_gregorian(2011, 1, 31).unwrap();
        let mut b = a.clone();
        b.set_in_israel(true);
        assert_ne!(a, b);
        assert_eq!(a.partial_cmp(&b), Some(core::cmp::Ordering::Equal));
        let later = HebrewCalendar::from_gregorian(2011, 2, 1).unwrap();
        assert!(a < later);
    }

    #[test]
    fn molad_of_tishrei_5772() {
        // Molad Tishrei 5772: September 27, 2011, 17:08 and 14 chalakim
        // on the civil scale.
        let cal = HebrewCalendar::from_hebrew_fields(5772, 7, 1).unwrap();
        let (date, time) = cal.molad().unwrap();
        let civil = CivilDate::from_fixed_day(date.to_fixed_day()).unwrap();
        assert_eq!((civil.year(), civil.month(), civil.day()), (2011, 9, 27));
        assert_eq!((time.hours(), time.minutes(), time.chalakim()), (17, 8, 14));
    }
}
