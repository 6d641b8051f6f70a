//! This module implements the Hebrew calendar's year arithmetic and its
//! date record.
//!
//! The year arithmetic turns the raw molad of Tishrei into the actual day
//! of Rosh Hashana by applying the four postponement rules (dechiyos),
//! classifies the year's length (kviah), and derives every month length
//! from that classification. The [`HebrewDate`] record then converts to
//! and from the fixed day count with an approximate-then-correct search,
//! mirroring the civil conversion in [`crate::civil`].

use num_traits::ToPrimitive;
use tinystr::{tinystr, TinyAsciiStr};

use crate::{
    error::ErrorMessage,
    luach_assert,
    molad::{chalakim_since_molad_tohu, CHALAKIM_PER_DAY},
    LuachError, LuachResult, LuachUnwrap,
};

/// Fixed-day offset of the Hebrew epoch: Rosh Hashana of year `y` falls
/// on fixed day `elapsed_days(y) + HEBREW_EPOCH + 1`.
pub(crate) const HEBREW_EPOCH: i64 = -1_373_429;

/// The molad-parts threshold for the Molad Zaken postponement (noon).
const MOLAD_ZAKEN_PARTS: i64 = 19440;
/// The GaTRaD threshold: 9 hours and 204 chalakim.
const GATRAD_PARTS: i64 = 9924;
/// The BeTuTaKPaT threshold: 15 hours and 589 chalakim.
const BETUTAKPAT_PARTS: i64 = 16789;

// ==== `HebrewMonth` ====

/// The months of the Hebrew year, numbered from Nissan.
///
/// Nissan is month 1 through Elul at 6; Tishrei, the first month of the
/// civil year, is 7. Adar II exists only in leap years.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HebrewMonth {
    Nissan = 1,
    Iyar = 2,
    Sivan = 3,
    Tammuz = 4,
    Av = 5,
    Elul = 6,
    Tishrei = 7,
    Cheshvan = 8,
    Kislev = 9,
    Teves = 10,
    Shevat = 11,
    Adar = 12,
    AdarII = 13,
}

impl HebrewMonth {
    /// Creates a `HebrewMonth` from its Nissan-based number, or `None` if
    /// the number is out of range (Adar II requires a leap year).
    #[must_use]
    pub fn from_value(value: u8, leap_year: bool) -> Option<Self> {
        let month = match value {
            1 => Self::Nissan,
            2 => Self::Iyar,
            3 => Self::Sivan,
            4 => Self::Tammuz,
            5 => Self::Av,
            6 => Self::Elul,
            7 => Self::Tishrei,
            8 => Self::Cheshvan,
            9 => Self::Kislev,
            10 => Self::Teves,
            11 => Self::Shevat,
            12 => Self::Adar,
            13 if leap_year => Self::AdarII,
            _ => return None,
        };
        Some(month)
    }

    /// Returns the Nissan-based month number (1-13).
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the month's ordinal within the civil year, counting from
    /// Tishrei as 1.
    #[must_use]
    pub(crate) const fn ordinal_from_tishrei(self, leap_year: bool) -> u8 {
        let value = self as u8;
        if value >= 7 {
            value - 6
        } else if leap_year {
            value + 7
        } else {
            value + 6
        }
    }

    /// The inverse of [`Self::ordinal_from_tishrei`].
    #[must_use]
    pub(crate) fn from_tishrei_ordinal(ordinal: u8, leap_year: bool) -> Option<Self> {
        let months_in_year = if leap_year { 13 } else { 12 };
        if ordinal < 1 || ordinal > months_in_year {
            return None;
        }
        let boundary = if leap_year { 7 } else { 6 };
        let value = if ordinal <= boundary {
            ordinal + 6
        } else {
            ordinal - boundary
        };
        Self::from_value(value, leap_year)
    }

    /// Returns the ICU-style month code for this month, e.g. `"M01"` for
    /// Tishrei. In a leap year Adar I is `"M05L"` and Adar II `"M06L"`.
    #[must_use]
    pub fn month_code(self, leap_year: bool) -> MonthCode {
        if leap_year {
            if self == Self::Adar {
                return MonthCode(tinystr!(4, "M05L"));
            }
            if self == Self::AdarII {
                return MonthCode(tinystr!(4, "M06L"));
            }
        }
        let code = match self {
            Self::Tishrei => tinystr!(4, "M01"),
            Self::Cheshvan => tinystr!(4, "M02"),
            Self::Kislev => tinystr!(4, "M03"),
            Self::Teves => tinystr!(4, "M04"),
            Self::Shevat => tinystr!(4, "M05"),
            Self::Adar => tinystr!(4, "M06"),
            Self::Nissan => tinystr!(4, "M07"),
            Self::Iyar => tinystr!(4, "M08"),
            Self::Sivan => tinystr!(4, "M09"),
            Self::Tammuz => tinystr!(4, "M10"),
            Self::Av => tinystr!(4, "M11"),
            Self::Elul => tinystr!(4, "M12"),
            Self::AdarII => tinystr!(4, "und"),
        };
        MonthCode(code)
    }
}

/// A compact month-code identifier in the ICU convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthCode(pub TinyAsciiStr<4>);

impl MonthCode {
    /// Returns the month code as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

// ==== Year arithmetic ====

/// Leap test over a widened year so that year+1 arithmetic cannot
/// overflow the public `i32` year type.
#[inline]
pub(crate) fn is_leap(year: i64) -> bool {
    (7 * year + 1).rem_euclid(19) < 7
}

/// Returns whether the given Hebrew year is a leap year: years 3, 6, 8,
/// 11, 14, 17 and 19 of each 19-year cycle.
#[inline]
#[must_use]
pub fn is_hebrew_leap_year(year: i32) -> bool {
    is_leap(i64::from(year))
}

/// Returns the last month of the given year.
#[inline]
#[must_use]
pub fn last_month_of_year(year: i32) -> HebrewMonth {
    if is_hebrew_leap_year(year) {
        HebrewMonth::AdarII
    } else {
        HebrewMonth::Adar
    }
}

/// Returns the number of days from the Hebrew epoch to Rosh Hashana of
/// the given year, applying the dechiyos to the raw molad day.
///
/// The postponements, in order:
/// 1. Molad Zaken (molad at or after noon), GaTRaD (Tuesday molad at or
///    after 9h 204p in a common year), or BeTuTaKPaT (Monday molad at or
///    after 15h 589p in a year following a leap year) push Rosh Hashana
///    one day forward.
/// 2. Lo ADU Rosh: a result landing on Sunday, Wednesday or Friday is
///    pushed one further day.
pub(crate) fn elapsed_days(year: i64) -> i64 {
    // Tishrei's ordinal from Tishrei is 1 regardless of leap status.
    let chalakim = chalakim_since_molad_tohu(year, 1);
    let molad_day = chalakim / CHALAKIM_PER_DAY;
    let molad_parts = chalakim % CHALAKIM_PER_DAY;
    let mut rosh_hashana = molad_day;
    if molad_parts >= MOLAD_ZAKEN_PARTS
        || (molad_day % 7 == 2 && molad_parts >= GATRAD_PARTS && !is_leap(year))
        || (molad_day % 7 == 1 && molad_parts >= BETUTAKPAT_PARTS && is_leap(year - 1))
    {
        rosh_hashana += 1;
    }
    if matches!(rosh_hashana % 7, 0 | 3 | 5) {
        rosh_hashana += 1;
    }
    rosh_hashana
}

/// Returns the number of days in the given Hebrew year: 353-355, or
/// 383-385 in a leap year.
#[inline]
#[must_use]
pub fn days_in_hebrew_year(year: i32) -> i64 {
    let year = i64::from(year);
    elapsed_days(year + 1) - elapsed_days(year)
}

/// The kviah: a year's length classification, fixed by whether Cheshvan
/// and Kislev carry their long or short counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearLength {
    /// Chaserim: both Cheshvan and Kislev are 29 days (353/383).
    Deficient,
    /// Kesidran: Cheshvan 29, Kislev 30 (354/384).
    Regular,
    /// Shelaimim: both Cheshvan and Kislev are 30 days (355/385).
    Complete,
}

impl YearLength {
    /// Classifies the given year.
    #[must_use]
    pub fn of_year(year: i32) -> Self {
        match days_in_hebrew_year(year) % 10 {
            3 => Self::Deficient,
            5 => Self::Complete,
            _ => Self::Regular,
        }
    }
}

/// Returns whether Cheshvan has 30 days in the given year.
#[inline]
#[must_use]
pub fn is_cheshvan_long(year: i32) -> bool {
    days_in_hebrew_year(year) % 10 == 5
}

/// Returns whether Kislev has 29 days in the given year.
#[inline]
#[must_use]
pub fn is_kislev_short(year: i32) -> bool {
    days_in_hebrew_year(year) % 10 == 3
}

/// Returns the number of days in the given month of the given year.
#[must_use]
pub fn days_in_hebrew_month(month: HebrewMonth, year: i32) -> u8 {
    match month {
        HebrewMonth::Iyar
        | HebrewMonth::Tammuz
        | HebrewMonth::Elul
        | HebrewMonth::Teves
        | HebrewMonth::AdarII => 29,
        HebrewMonth::Cheshvan if !is_cheshvan_long(year) => 29,
        HebrewMonth::Kislev if is_kislev_short(year) => 29,
        HebrewMonth::Adar if !is_hebrew_leap_year(year) => 29,
        _ => 30,
    }
}

/// Returns the fixed day of 1 Tishrei of the given year.
#[inline]
pub(crate) fn fixed_of_rosh_hashana(year: i64) -> i64 {
    1 + elapsed_days(year) + HEBREW_EPOCH
}

// ==== `HebrewDate` ====

/// A Hebrew calendar date.
///
/// The valid range begins at 18 Teves 3761 (fixed day 1). Requesting day
/// 30 of a 29-day month clamps to 29; this is a documented non-error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HebrewDate {
    year: i32,
    month: HebrewMonth,
    day: u8,
}

impl HebrewDate {
    /// Creates a new `HebrewDate` without validating the fields.
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(year: i32, month: HebrewMonth, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new validated `HebrewDate`.
    ///
    /// The month must exist in the year (Adar II only in leap years) and
    /// the day must be within 1-30; a day beyond the month's real length
    /// clamps down to it. Dates before 18 Teves 3761 are rejected.
    pub fn try_new(year: i32, month: HebrewMonth, day: u8) -> LuachResult<Self> {
        if year < 1 {
            return Err(LuachError::range().with_enum(ErrorMessage::HebrewDateBeforeEpoch));
        }
        if month == HebrewMonth::AdarII && !is_hebrew_leap_year(year) {
            return Err(LuachError::range().with_enum(ErrorMessage::HebrewMonthOutOfRange));
        }
        if day < 1 || day > 30 {
            return Err(LuachError::range().with_enum(ErrorMessage::HebrewDayOutOfRange));
        }
        let day = day.min(days_in_hebrew_month(month, year));
        let date = Self::new_unchecked(year, month, day);
        if date.to_fixed_day() < 1 {
            return Err(LuachError::range().with_enum(ErrorMessage::HebrewDateBeforeEpoch));
        }
        Ok(date)
    }

    /// Creates a new `HebrewDate` from a Nissan-based month number.
    pub fn try_from_fields(year: i32, month: u8, day: u8) -> LuachResult<Self> {
        let month = HebrewMonth::from_value(month, is_hebrew_leap_year(year))
            .ok_or(LuachError::range().with_enum(ErrorMessage::HebrewMonthOutOfRange))?;
        Self::try_new(year, month, day)
    }

    /// Returns the year.
    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month.
    #[inline]
    #[must_use]
    pub const fn month(&self) -> HebrewMonth {
        self.month
    }

    /// Returns the day of the month.
    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the ICU-style month code of this date's month.
    #[inline]
    #[must_use]
    pub fn month_code(&self) -> MonthCode {
        self.month.month_code(is_hebrew_leap_year(self.year))
    }

    /// Returns the day count from Rosh Hashana of this date's year,
    /// counting the date itself.
    #[must_use]
    pub(crate) fn days_since_year_start(&self) -> i64 {
        let leap = is_hebrew_leap_year(self.year);
        let ordinal = self.month.ordinal_from_tishrei(leap);
        let mut days = i64::from(self.day);
        for prior in 1..ordinal {
            // The ordinal range is always valid, so the lookup cannot fail.
            if let Some(month) = HebrewMonth::from_tishrei_ordinal(prior, leap) {
                days += i64::from(days_in_hebrew_month(month, self.year));
            }
        }
        days
    }

    /// Converts this date to its fixed day number.
    #[must_use]
    pub fn to_fixed_day(&self) -> i64 {
        self.days_since_year_start() + elapsed_days(i64::from(self.year)) + HEBREW_EPOCH
    }

    /// Converts a fixed day number into a `HebrewDate`.
    ///
    /// The year is approximated from the day count and corrected by a
    /// forward search; the month search then starts from Tishrei or
    /// Nissan, whichever is nearer.
    pub fn from_fixed_day(fixed: i64) -> LuachResult<Self> {
        if fixed < 1 {
            return Err(LuachError::range().with_enum(ErrorMessage::FixedDayBeforeEpoch));
        }
        let mut year: i64 = ((fixed - HEBREW_EPOCH) / 366).max(1);
        while fixed >= fixed_of_rosh_hashana(year + 1) {
            year += 1;
        }
        let year = year
            .to_i32()
            .ok_or(LuachError::range().with_enum(ErrorMessage::NumberOutOfCastRange))?;
        let leap = is_hebrew_leap_year(year);
        let nissan = Self::new_unchecked(year, HebrewMonth::Nissan, 1);
        let mut month = if fixed < nissan.to_fixed_day() {
            HebrewMonth::Tishrei
        } else {
            HebrewMonth::Nissan
        };
        loop {
            let month_end = Self::new_unchecked(year, month, days_in_hebrew_month(month, year));
            if fixed <= month_end.to_fixed_day() {
                break;
            }
            // The search cannot run past the final month of the year.
            luach_assert!(
                month.value() < 13,
                "month search overran year {year} for fixed day {fixed}"
            );
            month = HebrewMonth::from_value(month.value() + 1, leap).luach_unwrap()?;
        }
        let day = (fixed - Self::new_unchecked(year, month, 1).to_fixed_day() + 1) as u8;
        Ok(Self::new_unchecked(year, month, day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{civil::CivilDate, utils};

    #[test]
    fn epoch_is_18_teves_3761() {
        let date = HebrewDate::try_new(3761, HebrewMonth::Teves, 18).unwrap();
        assert_eq!(date.to_fixed_day(), 1);
        assert_eq!(HebrewDate::from_fixed_day(1).unwrap(), date);
        // One day earlier is out of range.
        assert!(HebrewDate::try_new(3761, HebrewMonth::Teves, 17).is_err());
    }

    #[test]
    fn leap_year_cycle() {
        // The 19-year cycle containing 5771-5795.
        let expected = [5771, 5774, 5776, 5779, 5782, 5784, 5787, 5790, 5793, 5795];
        for year in 5771..=5795 {
            assert_eq!(
                is_hebrew_leap_year(year),
                expected.contains(&year),
                "leap classification failed for {year}"
            );
        }
    }

    #[test]
    fn rosh_hashana_never_on_sunday_wednesday_friday() {
        for year in 2..7000 {
            let rh = HebrewDate::new_unchecked(year, HebrewMonth::Tishrei, 1);
            assert!(
                !matches!(utils::day_of_week(rh.to_fixed_day()), 0 | 3 | 5),
                "Rosh Hashana of {year} fell on a forbidden weekday"
            );
        }
    }

    #[test]
    fn year_lengths_are_valid() {
        for year in 2..7000 {
            let days = days_in_hebrew_year(year);
            if is_hebrew_leap_year(year) {
                assert!((383..=385).contains(&days), "leap year {year}: {days}");
            } else {
                assert!((353..=355).contains(&days), "common year {year}: {days}");
            }
        }
    }

    #[test]
    fn kviah_matches_month_lengths() {
        for year in [5770, 5771, 5772, 5783, 5784] {
            let class = YearLength::of_year(year);
            let cheshvan = days_in_hebrew_month(HebrewMonth::Cheshvan, year);
            let kislev = days_in_hebrew_month(HebrewMonth::Kislev, year);
            match class {
                YearLength::Deficient => assert_eq!((cheshvan, kislev), (29, 29)),
                YearLength::Regular => assert_eq!((cheshvan, kislev), (29, 30)),
                YearLength::Complete => assert_eq!((cheshvan, kislev), (30, 30)),
            }
        }
    }

    #[test]
    fn fixed_day_round_trip() {
        // Sampled sweep from the epoch into the far future.
        let limit = HebrewDate::new_unchecked(9999, HebrewMonth::Tishrei, 1).to_fixed_day();
        assert_eq!(limit, 2_278_298);
        let mut fixed = 1;
        while fixed <= limit {
            let date = HebrewDate::from_fixed_day(fixed).unwrap();
            assert_eq!(
                date.to_fixed_day(),
                fixed,
                "round trip failed at fixed day {fixed}"
            );
            fixed += 10_007; // prime step keeps month/year phases varied
        }
        // Dense coverage across a year boundary (Elul 5771 into Tishrei 5772).
        let rh = HebrewDate::new_unchecked(5772, HebrewMonth::Tishrei, 1).to_fixed_day();
        for fixed in rh - 40..rh + 40 {
            let date = HebrewDate::from_fixed_day(fixed).unwrap();
            assert_eq!(date.to_fixed_day(), fixed);
        }
    }

    #[test]
    fn matches_civil_conversion_fixtures() {
        // Hand-checked civil/Hebrew pairs, including both Adars of 5782.
        let pairs = [
            ((2021, 1, 10), (5781, HebrewMonth::Teves, 26)),
            ((2021, 3, 25), (5781, HebrewMonth::Nissan, 12)),
            ((2022, 2, 10), (5782, HebrewMonth::Adar, 9)),
            ((2022, 3, 10), (5782, HebrewMonth::AdarII, 7)),
            ((2022, 11, 25), (5783, HebrewMonth::Kislev, 1)),
            ((2011, 1, 31), (5771, HebrewMonth::Shevat, 26)),
        ];
        for ((gy, gm, gd), (hy, hm, hd)) in pairs {
            let fixed = CivilDate::try_new(gy, gm, gd).unwrap().to_fixed_day();
            let date = HebrewDate::from_fixed_day(fixed).unwrap();
            assert_eq!(
                (date.year(), date.month(), date.day()),
                (hy, hm, hd),
                "conversion failed for {gy}-{gm}-{gd}"
            );
        }
    }

    #[test]
    fn day_thirty_clamps_in_short_months() {
        // 5772 is a regular year: Cheshvan is 29 days.
        let date = HebrewDate::try_new(5772, HebrewMonth::Cheshvan, 30).unwrap();
        assert_eq!(date.day(), 29);
        // Kislev 30 exists that year.
        let date = HebrewDate::try_new(5772, HebrewMonth::Kislev, 30).unwrap();
        assert_eq!(date.day(), 30);
    }

    #[test]
    fn rejects_invalid_months_and_days() {
        assert!(HebrewDate::try_new(5770, HebrewMonth::AdarII, 1).is_err());
        assert!(HebrewDate::try_new(5771, HebrewMonth::AdarII, 1).is_ok());
        assert!(HebrewDate::try_new(5771, HebrewMonth::Nissan, 0).is_err());
        assert!(HebrewDate::try_new(5771, HebrewMonth::Nissan, 31).is_err());
        assert!(HebrewDate::try_from_fields(5770, 13, 1).is_err());
        assert!(HebrewDate::try_from_fields(5770, 14, 1).is_err());
    }

    #[test]
    fn month_codes_follow_leap_year() {
        assert_eq!(HebrewMonth::Tishrei.month_code(false).as_str(), "M01");
        assert_eq!(HebrewMonth::Adar.month_code(false).as_str(), "M06");
        assert_eq!(HebrewMonth::Adar.month_code(true).as_str(), "M05L");
        assert_eq!(HebrewMonth::AdarII.month_code(true).as_str(), "M06L");
        assert_eq!(HebrewMonth::Nissan.month_code(false).as_str(), "M07");
    }

    #[test]
    fn tishrei_ordinal_round_trip() {
        for leap in [false, true] {
            let last = if leap { 13 } else { 12 };
            for ordinal in 1..=last {
                let month = HebrewMonth::from_tishrei_ordinal(ordinal, leap).unwrap();
                assert_eq!(month.ordinal_from_tishrei(leap), ordinal);
            }
        }
        assert_eq!(HebrewMonth::Tishrei.ordinal_from_tishrei(false), 1);
        assert_eq!(HebrewMonth::Elul.ordinal_from_tishrei(true), 13);
        assert_eq!(HebrewMonth::Nissan.ordinal_from_tishrei(true), 8);
    }
}
