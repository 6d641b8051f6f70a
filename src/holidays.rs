//! This module implements the holiday state derived from a Hebrew date.
//!
//! The [`YomTov`] index is a per-month rule table over the day of the
//! month and, for the fasts and the modern Israeli holidays, the day of
//! the week; the fast of 17 Tammuz, 9 Av and the Fast of Gedalya move off
//! Shabbos to Sunday, and the Fast of Esther moves off Friday/Shabbos
//! back to Thursday. The Israel flag drops the second festival days and
//! merges Simchas Torah into Shemini Atzeres; the modern-holidays flag
//! gates the four state holidays, each with its own weekday shift table.
//!
//! Every predicate here is a pure function of the cursor's date and
//! flags.

use core_maths::CoreFloat;

use crate::{
    calendar::HebrewCalendar,
    hebrew::{elapsed_days, is_hebrew_leap_year, is_kislev_short, HebrewDate, HebrewMonth},
};

/// The holiday and fast identifiers.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YomTov {
    ErevPesach,
    Pesach,
    CholHamoedPesach,
    PesachSheni,
    ErevShavuos,
    Shavuos,
    SeventeenOfTammuz,
    TishaBeav,
    TuBeav,
    ErevRoshHashana,
    RoshHashana,
    FastOfGedalyah,
    ErevYomKippur,
    YomKippur,
    ErevSuccos,
    Succos,
    CholHamoedSuccos,
    HoshanaRabba,
    SheminiAtzeres,
    SimchasTorah,
    Chanukah,
    TenthOfTeves,
    TuBeshvat,
    FastOfEsther,
    Purim,
    ShushanPurim,
    PurimKatan,
    ShushanPurimKatan,
    LagBaomer,
    YomHashoah,
    YomHazikaron,
    YomHaatzmaut,
    YomYerushalayim,
}

/// Computes the holiday index for a date.
///
/// `weekday` is 0 = Sunday through 6 = Shabbos.
pub(crate) fn yom_tov_index(
    date: HebrewDate,
    weekday: u8,
    in_israel: bool,
    use_modern_holidays: bool,
) -> Option<YomTov> {
    let day = date.day();
    match date.month() {
        HebrewMonth::Nissan => {
            if day == 14 {
                return Some(YomTov::ErevPesach);
            }
            if day == 15 || day == 21 || (!in_israel && (day == 16 || day == 22)) {
                return Some(YomTov::Pesach);
            }
            if (17..=20).contains(&day) || (day == 16 && in_israel) {
                return Some(YomTov::CholHamoedPesach);
            }
            if use_modern_holidays
                && ((day == 26 && weekday == 4)
                    || (day == 28 && weekday == 1)
                    || (day == 27 && weekday != 0 && weekday != 5))
            {
                return Some(YomTov::YomHashoah);
            }
        }
        HebrewMonth::Iyar => {
            // Yom Hazikaron and Yom Haatzmaut shift so that neither falls
            // adjacent to Shabbos: 5 Iyar on Shabbos or Friday observes on
            // the prior Wednesday/Thursday, on Monday pushes to Tuesday.
            if use_modern_holidays
                && ((day == 4 && weekday == 2)
                    || ((day == 2 || day == 3) && weekday == 3)
                    || (day == 5 && weekday == 1))
            {
                return Some(YomTov::YomHazikaron);
            }
            if use_modern_holidays
                && ((day == 5 && weekday == 3)
                    || ((day == 3 || day == 4) && weekday == 4)
                    || (day == 6 && weekday == 2))
            {
                return Some(YomTov::YomHaatzmaut);
            }
            if day == 14 {
                return Some(YomTov::PesachSheni);
            }
            if day == 18 {
                return Some(YomTov::LagBaomer);
            }
            if use_modern_holidays && day == 28 {
                return Some(YomTov::YomYerushalayim);
            }
        }
        HebrewMonth::Sivan => {
            if day == 5 {
                return Some(YomTov::ErevShavuos);
            }
            if day == 6 || (day == 7 && !in_israel) {
                return Some(YomTov::Shavuos);
            }
        }
        HebrewMonth::Tammuz => {
            // The fast moves to Sunday when 17 Tammuz is Shabbos.
            if (day == 17 && weekday != 6) || (day == 18 && weekday == 0) {
                return Some(YomTov::SeventeenOfTammuz);
            }
        }
        HebrewMonth::Av => {
            if (day == 9 && weekday != 6) || (day == 10 && weekday == 0) {
                return Some(YomTov::TishaBeav);
            }
            if day == 15 {
                return Some(YomTov::TuBeav);
            }
        }
        HebrewMonth::Elul => {
            if day == 29 {
                return Some(YomTov::ErevRoshHashana);
            }
        }
        HebrewMonth::Tishrei => {
            if day == 1 || day == 2 {
                return Some(YomTov::RoshHashana);
            }
            if (day == 3 && weekday != 6) || (day == 4 && weekday == 0) {
                return Some(YomTov::FastOfGedalyah);
            }
            if day == 9 {
                return Some(YomTov::ErevYomKippur);
            }
            if day == 10 {
                return Some(YomTov::YomKippur);
            }
            if day == 14 {
                return Some(YomTov::ErevSuccos);
            }
            if day == 15 || (day == 16 && !in_israel) {
                return Some(YomTov::Succos);
            }
            if (17..=20).contains(&day) || (day == 16 && in_israel) {
                return Some(YomTov::CholHamoedSuccos);
            }
            if day == 21 {
                return Some(YomTov::HoshanaRabba);
            }
            if day == 22 {
                return Some(YomTov::SheminiAtzeres);
            }
            if day == 23 && !in_israel {
                return Some(YomTov::SimchasTorah);
            }
        }
        HebrewMonth::Cheshvan => {}
        HebrewMonth::Kislev => {
            if day >= 25 {
                return Some(YomTov::Chanukah);
            }
        }
        HebrewMonth::Teves => {
            if day == 1 || day == 2 || (day == 3 && is_kislev_short(date.year())) {
                return Some(YomTov::Chanukah);
            }
            if day == 10 {
                return Some(YomTov::TenthOfTeves);
            }
        }
        HebrewMonth::Shevat => {
            if day == 15 {
                return Some(YomTov::TuBeshvat);
            }
        }
        HebrewMonth::Adar if !is_hebrew_leap_year(date.year()) => {
            if let Some(index) = purim_block(day, weekday) {
                return Some(index);
            }
        }
        HebrewMonth::Adar => {
            if day == 14 {
                return Some(YomTov::PurimKatan);
            }
            if day == 15 {
                return Some(YomTov::ShushanPurimKatan);
            }
        }
        HebrewMonth::AdarII => {
            if let Some(index) = purim_block(day, weekday) {
                return Some(index);
            }
        }
    }
    None
}

/// The Fast of Esther / Purim / Shushan Purim cluster, shared by Adar in
/// common years and Adar II in leap years. The fast moves back off
/// Friday and Shabbos to the preceding Thursday.
fn purim_block(day: u8, weekday: u8) -> Option<YomTov> {
    if ((day == 11 || day == 12) && weekday == 4)
        || (day == 13 && !(weekday == 5 || weekday == 6))
    {
        return Some(YomTov::FastOfEsther);
    }
    if day == 14 {
        return Some(YomTov::Purim);
    }
    if day == 15 {
        return Some(YomTov::ShushanPurim);
    }
    None
}

impl HebrewCalendar {
    /// Returns the holiday index for the cursor's date, or `None` on an
    /// ordinary day.
    #[must_use]
    pub fn yom_tov(&self) -> Option<YomTov> {
        yom_tov_index(
            self.hebrew_date(),
            self.weekday0(),
            self.in_israel(),
            self.uses_modern_holidays(),
        )
    }

    /// Returns whether the day is a holiday of any kind, excluding erev
    /// days and the fasts other than Yom Kippur.
    #[must_use]
    pub fn is_yom_tov(&self) -> bool {
        let Some(index) = self.yom_tov() else {
            return false;
        };
        if self.is_erev_yom_tov()
            && !matches!(index, YomTov::HoshanaRabba | YomTov::CholHamoedPesach)
        {
            return false;
        }
        if self.is_taanis() && index != YomTov::YomKippur {
            return false;
        }
        true
    }

    /// Returns whether the day is a Yom Tov on which melacha is
    /// forbidden.
    #[must_use]
    pub fn is_yom_tov_assur_bemelacha(&self) -> bool {
        matches!(
            self.yom_tov(),
            Some(
                YomTov::Pesach
                    | YomTov::Shavuos
                    | YomTov::Succos
                    | YomTov::SheminiAtzeres
                    | YomTov::SimchasTorah
                    | YomTov::RoshHashana
                    | YomTov::YomKippur
            )
        )
    }

    /// Returns whether melacha is forbidden: Shabbos or a Yom Tov.
    #[must_use]
    pub fn is_assur_bemelacha(&self) -> bool {
        self.day_of_week() == 7 || self.is_yom_tov_assur_bemelacha()
    }

    /// Returns whether the day is erev Yom Tov, including Hoshana Rabba
    /// and 20 Nissan (erev of the last days of Pesach).
    #[must_use]
    pub fn is_erev_yom_tov(&self) -> bool {
        match self.yom_tov() {
            Some(
                YomTov::ErevPesach
                | YomTov::ErevShavuos
                | YomTov::ErevRoshHashana
                | YomTov::ErevYomKippur
                | YomTov::ErevSuccos
                | YomTov::HoshanaRabba,
            ) => true,
            Some(YomTov::CholHamoedPesach) => self.hebrew_day_of_month() == 20,
            _ => false,
        }
    }

    /// Returns whether the day is the first day of a two-day Yom Tov
    /// observance (the day before a diaspora second day).
    #[must_use]
    pub fn is_erev_yom_tov_sheni(&self) -> bool {
        let (month, day) = (self.hebrew_month(), self.hebrew_day_of_month());
        if month == HebrewMonth::Tishrei && day == 1 {
            return true;
        }
        if self.in_israel() {
            return false;
        }
        match month {
            HebrewMonth::Nissan => day == 15 || day == 21,
            HebrewMonth::Sivan => day == 6,
            HebrewMonth::Tishrei => day == 15 || day == 22,
            _ => false,
        }
    }

    /// Returns whether the day is Chol Hamoed.
    #[must_use]
    pub fn is_chol_hamoed(&self) -> bool {
        matches!(
            self.yom_tov(),
            Some(YomTov::CholHamoedPesach | YomTov::CholHamoedSuccos | YomTov::HoshanaRabba)
        )
    }

    /// Returns whether the day is a public fast.
    #[must_use]
    pub fn is_taanis(&self) -> bool {
        matches!(
            self.yom_tov(),
            Some(
                YomTov::SeventeenOfTammuz
                    | YomTov::TishaBeav
                    | YomTov::YomKippur
                    | YomTov::FastOfGedalyah
                    | YomTov::TenthOfTeves
                    | YomTov::FastOfEsther
            )
        )
    }

    /// Returns whether the day is the Fast of the Firstborn: 14 Nissan,
    /// moved back to Thursday 12 Nissan when erev Pesach is Shabbos.
    #[must_use]
    pub fn is_taanis_bechoros(&self) -> bool {
        let day = self.hebrew_day_of_month();
        self.hebrew_month() == HebrewMonth::Nissan
            && ((day == 14 && self.weekday0() != 6) || (day == 12 && self.weekday0() == 4))
    }

    /// Returns whether the day is Rosh Chodesh. 1 Tishrei is Rosh
    /// Hashana, not Rosh Chodesh.
    #[must_use]
    pub fn is_rosh_chodesh(&self) -> bool {
        let day = self.hebrew_day_of_month();
        (day == 1 && self.hebrew_month() != HebrewMonth::Tishrei) || day == 30
    }

    /// Returns whether the day is erev Rosh Chodesh. 29 Elul is erev
    /// Rosh Hashana, not erev Rosh Chodesh.
    #[must_use]
    pub fn is_erev_rosh_chodesh(&self) -> bool {
        self.hebrew_day_of_month() == 29 && self.hebrew_month() != HebrewMonth::Elul
    }

    /// Returns whether Yom Kippur Katan is observed on this day: erev
    /// Rosh Chodesh moved back off Friday and Shabbos, and skipped
    /// entirely before Tishrei, Cheshvan, Teves and Iyar.
    #[must_use]
    pub fn is_yom_kippur_katan(&self) -> bool {
        let month = self.hebrew_month();
        if matches!(
            month,
            HebrewMonth::Elul | HebrewMonth::Tishrei | HebrewMonth::Kislev | HebrewMonth::Nissan
        ) {
            return false;
        }
        let (day, weekday) = (self.hebrew_day_of_month(), self.weekday0());
        if day == 29 && weekday != 5 && weekday != 6 {
            return true;
        }
        (day == 27 || day == 28) && weekday == 4
    }

    /// Returns whether the day is within Chanukah.
    #[must_use]
    pub fn is_chanukah(&self) -> bool {
        self.yom_tov() == Some(YomTov::Chanukah)
    }

    /// Returns the day of Chanukah (1-8), or `None` outside it.
    #[must_use]
    pub fn day_of_chanukah(&self) -> Option<u8> {
        if !self.is_chanukah() {
            return None;
        }
        let day = self.hebrew_day_of_month();
        match self.hebrew_month() {
            HebrewMonth::Kislev => Some(day - 24),
            HebrewMonth::Teves => {
                if is_kislev_short(self.hebrew_year()) {
                    Some(day + 5)
                } else {
                    Some(day + 6)
                }
            }
            _ => None,
        }
    }

    /// Returns the day of the Omer count (1-49), or `None` outside the
    /// counting period of 16 Nissan through 5 Sivan.
    #[must_use]
    pub fn day_of_omer(&self) -> Option<u8> {
        let day = self.hebrew_day_of_month();
        match self.hebrew_month() {
            HebrewMonth::Nissan if day >= 16 => Some(day - 15),
            HebrewMonth::Iyar => Some(day + 15),
            HebrewMonth::Sivan if day < 6 => Some(day + 44),
            _ => None,
        }
    }

    /// Returns whether the day is Purim as observed locally: Shushan
    /// Purim in a walled city (mukaf choma), 14 Adar elsewhere.
    #[must_use]
    pub fn is_purim(&self) -> bool {
        if self.in_walled_city() {
            self.yom_tov() == Some(YomTov::ShushanPurim)
        } else {
            self.yom_tov() == Some(YomTov::Purim)
        }
    }

    /// Returns whether the day is Shabbos Mevorchim, the Shabbos before
    /// Rosh Chodesh. Elul is excluded; the coming month's Rosh Hashana
    /// is not blessed.
    #[must_use]
    pub fn is_shabbos_mevorchim(&self) -> bool {
        let day = self.hebrew_day_of_month();
        self.day_of_week() == 7
            && (23..=29).contains(&day)
            && self.hebrew_month() != HebrewMonth::Elul
    }

    /// Returns whether the day is Shabbos erev Rosh Chodesh, when the
    /// Machar Chodesh haftara replaces the weekly one.
    #[must_use]
    pub fn is_machar_chodesh(&self) -> bool {
        let day = self.hebrew_day_of_month();
        self.day_of_week() == 7 && (day == 29 || day == 30)
    }

    /// Returns whether the day is Isru Chag, the day after each of the
    /// three festivals.
    #[must_use]
    pub fn is_isru_chag(&self) -> bool {
        let day = self.hebrew_day_of_month();
        let boundary_shift = u8::from(!self.in_israel());
        match self.hebrew_month() {
            HebrewMonth::Nissan => day == 22 + boundary_shift,
            HebrewMonth::Sivan => day == 7 + boundary_shift,
            HebrewMonth::Tishrei => day == 23 + boundary_shift,
            _ => false,
        }
    }

    /// Returns the days elapsed from the tekufa of Tishrei of year 1 to
    /// this day, on Shmuel's solar year of exactly 365.25 days.
    ///
    /// The first tekufas Tishrei preceded the epoch by half a day; the
    /// half-day offset keeps the count aligned to it.
    #[must_use]
    pub fn tekufas_tishrei_elapsed_days(&self) -> i64 {
        let year = i64::from(self.hebrew_year());
        let days = elapsed_days(year) as f64
            + (self.hebrew_date().days_since_year_start() - 1) as f64
            + 0.5;
        let solar = (year - 1) as f64 * 365.25;
        CoreFloat::floor(days - solar) as i64
    }

    /// Returns whether Birkas Hachamah, said once per 28-year solar
    /// cycle, falls on this day.
    ///
    /// The computation follows the original floating-point modulus over
    /// the 10,227-day cycle; an exact-integer reformulation can disagree
    /// at extreme year values, so the float semantics are kept.
    #[must_use]
    pub fn is_birkas_hachamah(&self) -> bool {
        let elapsed = (elapsed_days(i64::from(self.hebrew_year()))
            + self.hebrew_date().days_since_year_start()) as f64;
        elapsed % (28.0 * 365.25) == 172.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greg(year: i32, month: u8, day: u8) -> HebrewCalendar {
        HebrewCalendar::from_gregorian(year, month, day).unwrap()
    }

    fn modern(year: i32, month: u8, day: u8) -> HebrewCalendar {
        let mut cal = greg(year, month, day);
        cal.set_use_modern_holidays(true);
        cal
    }

    #[test]
    fn fasts_move_off_shabbos() {
        // 17 Tammuz 5782 fell on Shabbos; the fast was Sunday July 17.
        assert_eq!(greg(2022, 7, 16).yom_tov(), None);
        assert_eq!(
            greg(2022, 7, 17).yom_tov(),
            Some(YomTov::SeventeenOfTammuz)
        );
        // 9 Av 5775 fell on Shabbos; the fast was Sunday July 26.
        assert_eq!(greg(2015, 7, 25).yom_tov(), None);
        assert_eq!(greg(2015, 7, 26).yom_tov(), Some(YomTov::TishaBeav));
        // Rosh Hashana 5784 was Shabbos; Tzom Gedalya moved to Sunday.
        assert_eq!(greg(2023, 9, 16).yom_tov(), Some(YomTov::RoshHashana));
        assert_eq!(greg(2023, 9, 18).yom_tov(), Some(YomTov::FastOfGedalyah));
        // Purim 5784 was Sunday; the Fast of Esther moved back to Thursday.
        assert_eq!(greg(2024, 3, 21).yom_tov(), Some(YomTov::FastOfEsther));
        assert_eq!(greg(2024, 3, 23).yom_tov(), None);
        assert_eq!(greg(2024, 3, 24).yom_tov(), Some(YomTov::Purim));
    }

    #[test]
    fn pesach_days_by_region() {
        // Pesach 5782 began Shabbos April 16, 2022.
        let mut cal = greg(2022, 4, 16);
        assert_eq!(cal.yom_tov(), Some(YomTov::Pesach));
        assert!(cal.is_yom_tov_assur_bemelacha());
        cal.forward(crate::DateUnit::Day, 1).unwrap();
        assert_eq!(cal.yom_tov(), Some(YomTov::Pesach)); // 16 Nissan, diaspora
        cal.set_in_israel(true);
        assert_eq!(cal.yom_tov(), Some(YomTov::CholHamoedPesach));
        assert!(cal.is_chol_hamoed());
        // 22 Nissan: eighth day in the diaspora, Isru Chag in Israel.
        let mut last = greg(2022, 4, 23);
        assert_eq!(last.yom_tov(), Some(YomTov::Pesach));
        last.set_in_israel(true);
        assert_eq!(last.yom_tov(), None);
        assert!(last.is_isru_chag());
    }

    #[test]
    fn tishrei_sequence() {
        // 5772: Rosh Hashana Thursday September 29, 2011.
        let mut cal = greg(2011, 9, 29);
        assert_eq!(cal.yom_tov(), Some(YomTov::RoshHashana));
        assert!(cal.is_erev_yom_tov_sheni());
        assert!(!cal.is_rosh_chodesh());
        cal = greg(2011, 10, 8);
        assert_eq!(cal.yom_tov(), Some(YomTov::YomKippur));
        assert!(cal.is_taanis());
        assert!(cal.is_yom_tov());
        cal = greg(2011, 10, 19);
        assert_eq!(cal.yom_tov(), Some(YomTov::HoshanaRabba));
        assert!(cal.is_erev_yom_tov());
        assert!(cal.is_chol_hamoed());
        cal = greg(2011, 10, 21);
        assert_eq!(cal.yom_tov(), Some(YomTov::SimchasTorah));
        cal.set_in_israel(true);
        assert_eq!(cal.yom_tov(), None);
    }

    #[test]
    fn chanukah_days() {
        // Chanukah 5777 began 25 Kislev = December 25, 2016; Kislev was
        // short, so the eighth day was 3 Teves = January 1, 2017.
        assert_eq!(greg(2016, 12, 24).day_of_chanukah(), None);
        assert_eq!(greg(2016, 12, 25).day_of_chanukah(), Some(1));
        assert_eq!(greg(2016, 12, 31).day_of_chanukah(), Some(7));
        let cal = greg(2017, 1, 1);
        assert!(cal.is_chanukah());
        assert_eq!(cal.day_of_chanukah(), Some(8));
        assert_eq!(greg(2017, 1, 2).day_of_chanukah(), None);
    }

    #[test]
    fn modern_holidays_shift_tables() {
        // 5 Iyar 5785 fell on Shabbos May 3, 2025: Yom Haatzmaut moved to
        // Thursday May 1, Yom Hazikaron to Wednesday April 30.
        assert_eq!(modern(2025, 5, 1).yom_tov(), Some(YomTov::YomHaatzmaut));
        assert_eq!(modern(2025, 4, 30).yom_tov(), Some(YomTov::YomHazikaron));
        assert_eq!(modern(2025, 5, 3).yom_tov(), None);
        // 5781: 5 Iyar was Shabbos April 17, 2021; observed Thursday.
        assert_eq!(modern(2021, 4, 15).yom_tov(), Some(YomTov::YomHaatzmaut));
        // The flag gates the whole family.
        assert_eq!(greg(2025, 5, 1).yom_tov(), None);
    }

    #[test]
    fn omer_count() {
        assert_eq!(greg(2025, 4, 13).day_of_omer(), None); // 15 Nissan
        assert_eq!(greg(2025, 4, 14).day_of_omer(), Some(1)); // 16 Nissan
        let lag = HebrewCalendar::from_hebrew_fields(5785, 2, 18).unwrap();
        assert_eq!(lag.day_of_omer(), Some(33));
        assert_eq!(lag.yom_tov(), Some(YomTov::LagBaomer));
        let erev_shavuos = HebrewCalendar::from_hebrew_fields(5785, 3, 5).unwrap();
        assert_eq!(erev_shavuos.day_of_omer(), Some(49));
        let shavuos = HebrewCalendar::from_hebrew_fields(5785, 3, 6).unwrap();
        assert_eq!(shavuos.day_of_omer(), None);
    }

    #[test]
    fn purim_in_walled_cities() {
        let mut cal = greg(2024, 3, 24);
        assert!(cal.is_purim());
        cal.set_in_walled_city(true);
        assert!(!cal.is_purim());
        cal.forward(crate::DateUnit::Day, 1).unwrap();
        assert!(cal.is_purim()); // Shushan Purim
        // Purim Katan in Adar I of leap 5784.
        let katan = HebrewCalendar::from_hebrew_fields(5784, 12, 14).unwrap();
        assert_eq!(katan.yom_tov(), Some(YomTov::PurimKatan));
    }

    #[test]
    fn rosh_chodesh_predicates() {
        // 30 Cheshvan 5772 does not exist (regular year); 1 Kislev 5772
        // was November 27, 2011.
        let cal = greg(2011, 11, 27);
        assert!(cal.is_rosh_chodesh());
        // 30 Nissan is the first day of Rosh Chodesh Iyar.
        let cal = HebrewCalendar::from_hebrew_fields(5785, 1, 30).unwrap();
        assert!(cal.is_rosh_chodesh());
        let erev = HebrewCalendar::from_hebrew_fields(5785, 1, 29).unwrap();
        assert!(erev.is_erev_rosh_chodesh());
        // 29 Elul is erev Rosh Hashana, not erev Rosh Chodesh.
        let erev_rh = HebrewCalendar::from_hebrew_fields(5785, 6, 29).unwrap();
        assert!(!erev_rh.is_erev_rosh_chodesh());
        assert_eq!(erev_rh.yom_tov(), Some(YomTov::ErevRoshHashana));
    }

    #[test]
    fn yom_kippur_katan_shifts() {
        // 29 Iyar 5785 was Tuesday May 27, 2025.
        assert!(greg(2025, 5, 27).is_yom_kippur_katan());
        assert!(!greg(2025, 5, 26).is_yom_kippur_katan());
        // Excluded months observe nothing on the 29th.
        let elul29 = HebrewCalendar::from_hebrew_fields(5785, 6, 29).unwrap();
        assert!(!elul29.is_yom_kippur_katan());
    }

    #[test]
    fn shabbos_linked_predicates() {
        // Saturday May 24, 2025 was 26 Iyar: Shabbos Mevorchim Sivan.
        let cal = greg(2025, 5, 24);
        assert!(cal.is_shabbos_mevorchim());
        assert!(!cal.is_machar_chodesh());
        assert!(cal.is_assur_bemelacha());
        // A Shabbos on 29 of the month is also Machar Chodesh.
        let cal = greg(2025, 6, 25); // 29 Sivan 5785, a Wednesday
        assert!(!cal.is_machar_chodesh());
    }

    #[test]
    fn taanis_bechoros_moves_to_thursday() {
        // Erev Pesach 5781 fell on Shabbos March 27, 2021; the fast of
        // the firstborn was Thursday March 25 (12 Nissan).
        assert!(greg(2021, 3, 25).is_taanis_bechoros());
        assert!(!greg(2021, 3, 27).is_taanis_bechoros());
        // In an ordinary year it sits on 14 Nissan itself: April 5, 2023.
        assert!(greg(2023, 4, 5).is_taanis_bechoros());
    }

    #[test]
    fn birkas_hachamah_cycle() {
        // The blessing was said April 8, 2009 and before that April 8,
        // 1981; the next occurrence is April 8, 2037.
        assert!(greg(2009, 4, 8).is_birkas_hachamah());
        assert!(greg(1981, 4, 8).is_birkas_hachamah());
        assert!(greg(2037, 4, 8).is_birkas_hachamah());
        assert!(!greg(2009, 4, 7).is_birkas_hachamah());
        assert!(!greg(2009, 4, 9).is_birkas_hachamah());
    }

    #[test]
    fn tekufas_tishrei_day_count() {
        assert_eq!(greg(2009, 4, 8).tekufas_tishrei_elapsed_days(), 171);
        assert_eq!(greg(2026, 4, 8).tekufas_tishrei_elapsed_days(), 171);
    }
}
