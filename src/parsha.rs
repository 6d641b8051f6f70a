//! This module implements the weekly Torah reading (parsha) lookup.
//!
//! Every year belongs to one of 17 types, fixed by the weekday of Rosh
//! Hashana, the year's kviah, leap status, and the Israel flag. Each
//! type owns a fixed schedule row of readings, one entry per
//! Tishrei-anchored week; the week index for a Shabbos is derived
//! directly from its day count since Rosh Hashana. Festival Shabbosos
//! carry a `None` sentinel in the row, and the special Shabbosos
//! (Shekalim through Hachodesh, Shuva, Shira, Hagadol, Chazon, Nachamu)
//! are layered on top as independent date-range checks.

use crate::{
    calendar::HebrewCalendar,
    hebrew::{elapsed_days, is_cheshvan_long, is_hebrew_leap_year, is_kislev_short, HebrewMonth},
    options::DateUnit,
    LuachResult,
};

/// The weekly Torah readings, the seven doubled readings, and the
/// special Shabbos names. `None` marks a week with no assigned reading.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parsha {
    #[default]
    None,
    Bereshis,
    Noach,
    LechLecha,
    Vayera,
    ChayeiSara,
    Toldos,
    Vayetzei,
    Vayishlach,
    Vayeshev,
    Miketz,
    Vayigash,
    Vayechi,
    Shemos,
    Vaera,
    Bo,
    Beshalach,
    Yisro,
    Mishpatim,
    Terumah,
    Tetzaveh,
    KiSisa,
    Vayakhel,
    Pekudei,
    Vayikra,
    Tzav,
    Shmini,
    Tazria,
    Metzora,
    AchreiMos,
    Kedoshim,
    Emor,
    Behar,
    Bechukosai,
    Bamidbar,
    Nasso,
    Behaaloscha,
    Shlach,
    Korach,
    Chukas,
    Balak,
    Pinchas,
    Matos,
    Masei,
    Devarim,
    Vaeschanan,
    Eikev,
    Reeh,
    Shoftim,
    KiSeitzei,
    KiSavo,
    Nitzavim,
    Vayeilech,
    Haazinu,
    VzosHaberacha,
    VayakhelPekudei,
    TazriaMetzora,
    AchreiMosKedoshim,
    BeharBechukosai,
    ChukasBalak,
    MatosMasei,
    NitzavimVayeilech,
    Shkalim,
    Zachor,
    Para,
    Hachodesh,
    Shuva,
    Shira,
    Hagadol,
    Chazon,
    Nachamu,
}

/// The 17 year types driving the weekly reading schedule.
///
/// A type is fixed by the weekday Rosh Hashana falls on (Monday,
/// Tuesday, Thursday or Shabbos), the year's kviah, whether the year is
/// a leap year, and the Israel flag. Tuesday years share their schedule
/// with the Monday type one kviah longer, which is why 14 kviah
/// combinations collapse to 12 schedules plus 5 Israel variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearType {
    MondayShort,
    MondayLong,
    ThursdayLong,
    ThursdayRegular,
    SaturdayShort,
    SaturdayLong,
    MondayShortLeap,
    MondayLongLeap,
    ThursdayShortLeap,
    ThursdayLongLeap,
    SaturdayShortLeap,
    SaturdayLongLeap,
    MondayLongIsrael,
    ThursdayRegularIsrael,
    MondayShortLeapIsrael,
    MondayLongLeapIsrael,
    SaturdayLongLeapIsrael,
}

impl YearType {
    /// Classifies a year from its Rosh Hashana weekday (0 = Sunday
    /// through 6 = Shabbos), kviah flags, leap status and region.
    #[must_use]
    pub fn classify(
        rosh_hashana_weekday: u8,
        leap_year: bool,
        kislev_short: bool,
        cheshvan_long: bool,
        in_israel: bool,
    ) -> Option<Self> {
        match (leap_year, rosh_hashana_weekday) {
            (false, 1) if kislev_short => Some(Self::MondayShort),
            (false, 1) if cheshvan_long => Some(if in_israel {
                Self::MondayLongIsrael
            } else {
                Self::MondayLong
            }),
            (false, 2) => Some(if in_israel {
                Self::MondayLongIsrael
            } else {
                Self::MondayLong
            }),
            (false, 4) if cheshvan_long => Some(Self::ThursdayLong),
            (false, 4) if !kislev_short => Some(if in_israel {
                Self::ThursdayRegularIsrael
            } else {
                Self::ThursdayRegular
            }),
            (false, 6) if kislev_short => Some(Self::SaturdayShort),
            (false, 6) if cheshvan_long => Some(Self::SaturdayLong),
            (true, 1) if kislev_short => Some(if in_israel {
                Self::MondayShortLeapIsrael
            } else {
                Self::MondayShortLeap
            }),
            (true, 1) if cheshvan_long => Some(if in_israel {
                Self::MondayLongLeapIsrael
            } else {
                Self::MondayLongLeap
            }),
            (true, 2) => Some(if in_israel {
                Self::MondayLongLeapIsrael
            } else {
                Self::MondayLongLeap
            }),
            (true, 4) if kislev_short => Some(Self::ThursdayShortLeap),
            (true, 4) if cheshvan_long => Some(Self::ThursdayLongLeap),
            (true, 6) if kislev_short => Some(Self::SaturdayShortLeap),
            (true, 6) if cheshvan_long => Some(if in_israel {
                Self::SaturdayLongLeapIsrael
            } else {
                Self::SaturdayLongLeap
            }),
            _ => None,
        }
    }

    /// Classifies the year a cursor sits in.
    #[must_use]
    pub fn of_calendar(calendar: &HebrewCalendar) -> Option<Self> {
        let year = calendar.hebrew_year();
        Self::classify(
            (elapsed_days(i64::from(year)) % 7) as u8,
            is_hebrew_leap_year(year),
            is_kislev_short(year),
            is_cheshvan_long(year),
            calendar.in_israel(),
        )
    }

    /// Returns the type's schedule row.
    #[must_use]
    pub fn schedule(self) -> &'static [Parsha] {
        match self {
            Self::MondayShort => schedule::MONDAY_SHORT,
            Self::MondayLong => schedule::MONDAY_LONG,
            Self::ThursdayLong => schedule::THURSDAY_LONG,
            Self::ThursdayRegular => schedule::THURSDAY_REGULAR,
            Self::SaturdayShort => schedule::SATURDAY_SHORT,
            Self::SaturdayLong => schedule::SATURDAY_LONG,
            Self::MondayShortLeap => schedule::MONDAY_SHORT_LEAP,
            Self::MondayLongLeap => schedule::MONDAY_LONG_LEAP,
            Self::ThursdayShortLeap => schedule::THURSDAY_SHORT_LEAP,
            Self::ThursdayLongLeap => schedule::THURSDAY_LONG_LEAP,
            Self::SaturdayShortLeap => schedule::SATURDAY_SHORT_LEAP,
            Self::SaturdayLongLeap => schedule::SATURDAY_LONG_LEAP,
            Self::MondayLongIsrael => schedule::MONDAY_LONG_ISRAEL,
            Self::ThursdayRegularIsrael => schedule::THURSDAY_REGULAR_ISRAEL,
            Self::MondayShortLeapIsrael => schedule::MONDAY_SHORT_LEAP_ISRAEL,
            Self::MondayLongLeapIsrael => schedule::MONDAY_LONG_LEAP_ISRAEL,
            Self::SaturdayLongLeapIsrael => schedule::SATURDAY_LONG_LEAP_ISRAEL,
        }
    }
}

/// The 17 weekly schedules, one per year type. Each row is indexed by
/// the Tishrei-anchored week number; weeks whose Shabbos falls on a
/// festival carry the `None` sentinel.
mod schedule {
    use super::Parsha::{self, *};

    pub(super) static MONDAY_SHORT: &[Parsha] = &[
        None, Vayeilech, Haazinu, None, Bereshis, Noach, LechLecha, Vayera,
        ChayeiSara, Toldos, Vayetzei, Vayishlach, Vayeshev, Miketz,
        Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach, Yisro, Mishpatim,
        Terumah, Tetzaveh, KiSisa, VayakhelPekudei, Vayikra, Tzav, None,
        Shmini, TazriaMetzora, AchreiMosKedoshim, Emor, BeharBechukosai,
        Bamidbar, Nasso, Behaaloscha, Shlach, Korach, Chukas, Balak,
        Pinchas, MatosMasei, Devarim, Vaeschanan, Eikev, Reeh, Shoftim,
        KiSeitzei, KiSavo, NitzavimVayeilech
    ];
    pub(super) static MONDAY_LONG: &[Parsha] = &[
        None, Vayeilech, Haazinu, None, Bereshis, Noach, LechLecha, Vayera,
        ChayeiSara, Toldos, Vayetzei, Vayishlach, Vayeshev, Miketz,
        Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach, Yisro, Mishpatim,
        Terumah, Tetzaveh, KiSisa, VayakhelPekudei, Vayikra, Tzav, None,
        Shmini, TazriaMetzora, AchreiMosKedoshim, Emor, BeharBechukosai,
        Bamidbar, None, Nasso, Behaaloscha, Shlach, Korach, ChukasBalak,
        Pinchas, MatosMasei, Devarim, Vaeschanan, Eikev, Reeh, Shoftim,
        KiSeitzei, KiSavo, NitzavimVayeilech
    ];
    pub(super) static THURSDAY_LONG: &[Parsha] = &[
        None, Haazinu, None, None, Bereshis, Noach, LechLecha, Vayera,
        ChayeiSara, Toldos, Vayetzei, Vayishlach, Vayeshev, Miketz,
        Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach, Yisro, Mishpatim,
        Terumah, Tetzaveh, KiSisa, Vayakhel, Pekudei, Vayikra, Tzav, None,
        Shmini, TazriaMetzora, AchreiMosKedoshim, Emor, BeharBechukosai,
        Bamidbar, Nasso, Behaaloscha, Shlach, Korach, Chukas, Balak,
        Pinchas, MatosMasei, Devarim, Vaeschanan, Eikev, Reeh, Shoftim,
        KiSeitzei, KiSavo, Nitzavim
    ];
    pub(super) static THURSDAY_REGULAR: &[Parsha] = &[
        None, Haazinu, None, None, Bereshis, Noach, LechLecha, Vayera,
        ChayeiSara, Toldos, Vayetzei, Vayishlach, Vayeshev, Miketz,
        Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach, Yisro, Mishpatim,
        Terumah, Tetzaveh, KiSisa, VayakhelPekudei, Vayikra, Tzav, None,
        None, Shmini, TazriaMetzora, AchreiMosKedoshim, Emor,
        BeharBechukosai, Bamidbar, Nasso, Behaaloscha, Shlach, Korach,
        Chukas, Balak, Pinchas, MatosMasei, Devarim, Vaeschanan, Eikev,
        Reeh, Shoftim, KiSeitzei, KiSavo, Nitzavim
    ];
    pub(super) static SATURDAY_SHORT: &[Parsha] = &[
        None, None, Haazinu, None, None, Bereshis, Noach, LechLecha,
        Vayera, ChayeiSara, Toldos, Vayetzei, Vayishlach, Vayeshev, Miketz,
        Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach, Yisro, Mishpatim,
        Terumah, Tetzaveh, KiSisa, VayakhelPekudei, Vayikra, Tzav, None,
        Shmini, TazriaMetzora, AchreiMosKedoshim, Emor, BeharBechukosai,
        Bamidbar, Nasso, Behaaloscha, Shlach, Korach, Chukas, Balak,
        Pinchas, MatosMasei, Devarim, Vaeschanan, Eikev, Reeh, Shoftim,
        KiSeitzei, KiSavo, Nitzavim
    ];
    pub(super) static SATURDAY_LONG: &[Parsha] = &[
        None, None, Haazinu, None, None, Bereshis, Noach, LechLecha,
        Vayera, ChayeiSara, Toldos, Vayetzei, Vayishlach, Vayeshev, Miketz,
        Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach, Yisro, Mishpatim,
        Terumah, Tetzaveh, KiSisa, VayakhelPekudei, Vayikra, Tzav, None,
        Shmini, TazriaMetzora, AchreiMosKedoshim, Emor, BeharBechukosai,
        Bamidbar, Nasso, Behaaloscha, Shlach, Korach, Chukas, Balak,
        Pinchas, MatosMasei, Devarim, Vaeschanan, Eikev, Reeh, Shoftim,
        KiSeitzei, KiSavo, NitzavimVayeilech
    ];
    pub(super) static MONDAY_SHORT_LEAP: &[Parsha] = &[
        None, Vayeilech, Haazinu, None, Bereshis, Noach, LechLecha, Vayera,
        ChayeiSara, Toldos, Vayetzei, Vayishlach, Vayeshev, Miketz,
        Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach, Yisro, Mishpatim,
        Terumah, Tetzaveh, KiSisa, Vayakhel, Pekudei, Vayikra, Tzav,
        Shmini, Tazria, Metzora, None, AchreiMos, Kedoshim, Emor, Behar,
        Bechukosai, Bamidbar, None, Nasso, Behaaloscha, Shlach, Korach,
        ChukasBalak, Pinchas, MatosMasei, Devarim, Vaeschanan, Eikev, Reeh,
        Shoftim, KiSeitzei, KiSavo, NitzavimVayeilech
    ];
    pub(super) static MONDAY_LONG_LEAP: &[Parsha] = &[
        None, Vayeilech, Haazinu, None, Bereshis, Noach, LechLecha, Vayera,
        ChayeiSara, Toldos, Vayetzei, Vayishlach, Vayeshev, Miketz,
        Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach, Yisro, Mishpatim,
        Terumah, Tetzaveh, KiSisa, Vayakhel, Pekudei, Vayikra, Tzav,
        Shmini, Tazria, Metzora, None, None, AchreiMos, Kedoshim, Emor,
        Behar, Bechukosai, Bamidbar, Nasso, Behaaloscha, Shlach, Korach,
        Chukas, Balak, Pinchas, MatosMasei, Devarim, Vaeschanan, Eikev,
        Reeh, Shoftim, KiSeitzei, KiSavo, Nitzavim
    ];
    pub(super) static THURSDAY_SHORT_LEAP: &[Parsha] = &[
        None, Haazinu, None, None, Bereshis, Noach, LechLecha, Vayera,
        ChayeiSara, Toldos, Vayetzei, Vayishlach, Vayeshev, Miketz,
        Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach, Yisro, Mishpatim,
        Terumah, Tetzaveh, KiSisa, Vayakhel, Pekudei, Vayikra, Tzav,
        Shmini, Tazria, Metzora, AchreiMos, None, Kedoshim, Emor, Behar,
        Bechukosai, Bamidbar, Nasso, Behaaloscha, Shlach, Korach, Chukas,
        Balak, Pinchas, Matos, Masei, Devarim, Vaeschanan, Eikev, Reeh,
        Shoftim, KiSeitzei, KiSavo, Nitzavim
    ];
    pub(super) static THURSDAY_LONG_LEAP: &[Parsha] = &[
        None, Haazinu, None, None, Bereshis, Noach, LechLecha, Vayera,
        ChayeiSara, Toldos, Vayetzei, Vayishlach, Vayeshev, Miketz,
        Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach, Yisro, Mishpatim,
        Terumah, Tetzaveh, KiSisa, Vayakhel, Pekudei, Vayikra, Tzav,
        Shmini, Tazria, Metzora, AchreiMos, None, Kedoshim, Emor, Behar,
        Bechukosai, Bamidbar, Nasso, Behaaloscha, Shlach, Korach, Chukas,
        Balak, Pinchas, Matos, Masei, Devarim, Vaeschanan, Eikev, Reeh,
        Shoftim, KiSeitzei, KiSavo, NitzavimVayeilech
    ];
    pub(super) static SATURDAY_SHORT_LEAP: &[Parsha] = &[
        None, None, Haazinu, None, None, Bereshis, Noach, LechLecha,
        Vayera, ChayeiSara, Toldos, Vayetzei, Vayishlach, Vayeshev, Miketz,
        Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach, Yisro, Mishpatim,
        Terumah, Tetzaveh, KiSisa, Vayakhel, Pekudei, Vayikra, Tzav,
        Shmini, Tazria, Metzora, None, AchreiMos, Kedoshim, Emor, Behar,
        Bechukosai, Bamidbar, Nasso, Behaaloscha, Shlach, Korach, Chukas,
        Balak, Pinchas, MatosMasei, Devarim, Vaeschanan, Eikev, Reeh,
        Shoftim, KiSeitzei, KiSavo, NitzavimVayeilech
    ];
    pub(super) static SATURDAY_LONG_LEAP: &[Parsha] = &[
        None, None, Haazinu, None, None, Bereshis, Noach, LechLecha,
        Vayera, ChayeiSara, Toldos, Vayetzei, Vayishlach, Vayeshev, Miketz,
        Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach, Yisro, Mishpatim,
        Terumah, Tetzaveh, KiSisa, Vayakhel, Pekudei, Vayikra, Tzav,
        Shmini, Tazria, Metzora, None, AchreiMos, Kedoshim, Emor, Behar,
        Bechukosai, Bamidbar, None, Nasso, Behaaloscha, Shlach, Korach,
        ChukasBalak, Pinchas, MatosMasei, Devarim, Vaeschanan, Eikev, Reeh,
        Shoftim, KiSeitzei, KiSavo, NitzavimVayeilech
    ];
    pub(super) static MONDAY_LONG_ISRAEL: &[Parsha] = &[
        None, Vayeilech, Haazinu, None, Bereshis, Noach, LechLecha, Vayera,
        ChayeiSara, Toldos, Vayetzei, Vayishlach, Vayeshev, Miketz,
        Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach, Yisro, Mishpatim,
        Terumah, Tetzaveh, KiSisa, VayakhelPekudei, Vayikra, Tzav, None,
        Shmini, TazriaMetzora, AchreiMosKedoshim, Emor, BeharBechukosai,
        Bamidbar, Nasso, Behaaloscha, Shlach, Korach, Chukas, Balak,
        Pinchas, MatosMasei, Devarim, Vaeschanan, Eikev, Reeh, Shoftim,
        KiSeitzei, KiSavo, NitzavimVayeilech
    ];
    pub(super) static THURSDAY_REGULAR_ISRAEL: &[Parsha] = &[
        None, Haazinu, None, None, Bereshis, Noach, LechLecha, Vayera,
        ChayeiSara, Toldos, Vayetzei, Vayishlach, Vayeshev, Miketz,
        Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach, Yisro, Mishpatim,
        Terumah, Tetzaveh, KiSisa, VayakhelPekudei, Vayikra, Tzav, None,
        Shmini, TazriaMetzora, AchreiMosKedoshim, Emor, Behar, Bechukosai,
        Bamidbar, Nasso, Behaaloscha, Shlach, Korach, Chukas, Balak,
        Pinchas, MatosMasei, Devarim, Vaeschanan, Eikev, Reeh, Shoftim,
        KiSeitzei, KiSavo, Nitzavim
    ];
    pub(super) static MONDAY_SHORT_LEAP_ISRAEL: &[Parsha] = &[
        None, Vayeilech, Haazinu, None, Bereshis, Noach, LechLecha, Vayera,
        ChayeiSara, Toldos, Vayetzei, Vayishlach, Vayeshev, Miketz,
        Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach, Yisro, Mishpatim,
        Terumah, Tetzaveh, KiSisa, Vayakhel, Pekudei, Vayikra, Tzav,
        Shmini, Tazria, Metzora, None, AchreiMos, Kedoshim, Emor, Behar,
        Bechukosai, Bamidbar, Nasso, Behaaloscha, Shlach, Korach, Chukas,
        Balak, Pinchas, MatosMasei, Devarim, Vaeschanan, Eikev, Reeh,
        Shoftim, KiSeitzei, KiSavo, NitzavimVayeilech
    ];
    pub(super) static MONDAY_LONG_LEAP_ISRAEL: &[Parsha] = &[
        None, Vayeilech, Haazinu, None, Bereshis, Noach, LechLecha, Vayera,
        ChayeiSara, Toldos, Vayetzei, Vayishlach, Vayeshev, Miketz,
        Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach, Yisro, Mishpatim,
        Terumah, Tetzaveh, KiSisa, Vayakhel, Pekudei, Vayikra, Tzav,
        Shmini, Tazria, Metzora, None, AchreiMos, Kedoshim, Emor, Behar,
        Bechukosai, Bamidbar, Nasso, Behaaloscha, Shlach, Korach, Chukas,
        Balak, Pinchas, Matos, Masei, Devarim, Vaeschanan, Eikev, Reeh,
        Shoftim, KiSeitzei, KiSavo, Nitzavim
    ];
    pub(super) static SATURDAY_LONG_LEAP_ISRAEL: &[Parsha] = &[
        None, None, Haazinu, None, None, Bereshis, Noach, LechLecha,
        Vayera, ChayeiSara, Toldos, Vayetzei, Vayishlach, Vayeshev, Miketz,
        Vayigash, Vayechi, Shemos, Vaera, Bo, Beshalach, Yisro, Mishpatim,
        Terumah, Tetzaveh, KiSisa, Vayakhel, Pekudei, Vayikra, Tzav,
        Shmini, Tazria, Metzora, None, AchreiMos, Kedoshim, Emor, Behar,
        Bechukosai, Bamidbar, Nasso, Behaaloscha, Shlach, Korach, Chukas,
        Balak, Pinchas, MatosMasei, Devarim, Vaeschanan, Eikev, Reeh,
        Shoftim, KiSeitzei, KiSavo, NitzavimVayeilech
    ];
}

impl HebrewCalendar {
    /// Returns the parsha read this Shabbos, or [`Parsha::None`] when the
    /// cursor is not on Shabbos or the week has no assigned reading
    /// (a festival Shabbos).
    #[must_use]
    pub fn parsha(&self) -> Parsha {
        if self.day_of_week() != 7 {
            return Parsha::None;
        }
        let Some(year_type) = YearType::of_calendar(self) else {
            return Parsha::None;
        };
        let rosh_hashana_weekday = elapsed_days(i64::from(self.hebrew_year())) % 7;
        let day = rosh_hashana_weekday + self.hebrew_date().days_since_year_start();
        let week = (day / 7) as usize;
        year_type
            .schedule()
            .get(week)
            .copied()
            .unwrap_or(Parsha::None)
    }

    /// Returns the special Shabbos designation for the cursor's date, or
    /// [`Parsha::None`]. The four pre-Pesach Shabbosos (Shekalim, Zachor,
    /// Para, Hachodesh) and Shuva, Shira, Hagadol, Chazon and Nachamu are
    /// range checks layered over the weekly reading, never replacing it.
    #[must_use]
    pub fn special_shabbos(&self) -> Parsha {
        if self.day_of_week() != 7 {
            return Parsha::None;
        }
        let (month, day) = (self.hebrew_month(), self.hebrew_day_of_month());
        let leap = is_hebrew_leap_year(self.hebrew_year());
        if (month == HebrewMonth::Shevat && !leap) || (month == HebrewMonth::Adar && leap) {
            if matches!(day, 25 | 27 | 29) {
                return Parsha::Shkalim;
            }
        }
        if (month == HebrewMonth::Adar && !leap) || month == HebrewMonth::AdarII {
            if day == 1 {
                return Parsha::Shkalim;
            }
            if matches!(day, 8 | 9 | 11 | 13) {
                return Parsha::Zachor;
            }
            if matches!(day, 18 | 20 | 22 | 23) {
                return Parsha::Para;
            }
            if matches!(day, 25 | 27 | 29) {
                return Parsha::Hachodesh;
            }
        }
        if month == HebrewMonth::Nissan {
            if day == 1 {
                return Parsha::Hachodesh;
            }
            if (8..=14).contains(&day) {
                return Parsha::Hagadol;
            }
        }
        if month == HebrewMonth::Av {
            if (2..=8).contains(&day) {
                return Parsha::Chazon;
            }
            if (10..=16).contains(&day) {
                return Parsha::Nachamu;
            }
        }
        if month == HebrewMonth::Tishrei && (3..=8).contains(&day) {
            return Parsha::Shuva;
        }
        if self.parsha() == Parsha::Beshalach {
            return Parsha::Shira;
        }
        Parsha::None
    }

    /// Returns the parsha of the coming Shabbos, skipping festival weeks
    /// with no reading. On Shabbos itself this looks a week ahead.
    ///
    /// The lookahead works on a clone; the cursor is not disturbed.
    pub fn upcoming_parsha(&self) -> LuachResult<Parsha> {
        let mut lookahead = self.clone();
        let days_to_shabbos = (6 + 7 - self.weekday0()) % 7;
        if days_to_shabbos == 0 {
            lookahead.forward(DateUnit::Day, 7)?;
        } else {
            lookahead.forward(DateUnit::Day, i32::from(days_to_shabbos))?;
        }
        while lookahead.parsha() == Parsha::None {
            lookahead.forward(DateUnit::Day, 7)?;
        }
        Ok(lookahead.parsha())
    }
}
