//! This module implements the two Daf Yomi cycle calculators.
//!
//! The Bavli cycle began September 11, 1923 and ran 2,702 days per cycle
//! until the eighth cycle (June 24, 1975), when Shekalim grew from 13 to
//! 22 pages and the cycle stretched to 2,711 days. The Yerushalmi cycle
//! began February 2, 1980; its length is not constant, because no daf is
//! learned on Yom Kippur or Tisha B'Av, so every candidate cycle end
//! must be widened by the number of skipped days inside the window
//! before the boundary can be fixed.

use crate::{
    calendar::HebrewCalendar,
    error::ErrorMessage,
    hebrew::{HebrewDate, HebrewMonth},
    holidays::YomTov,
    LuachError, LuachResult,
};

/// Fixed day of the first Bavli cycle's start, September 11, 1923.
const BAVLI_CYCLE_START: i64 = 702_249;
/// Fixed day of the eighth Bavli cycle's start, June 24, 1975.
const SHEKALIM_CHANGE: i64 = 721_163;
/// Days per Bavli cycle while Shekalim was learned over 13 pages.
const EARLY_CYCLE_DAYS: i64 = 2702;
/// Days per Bavli cycle from cycle 8 on.
const LATER_CYCLE_DAYS: i64 = 2711;
/// Shekalim's page count during the first seven cycles.
const EARLY_SHEKALIM_PAGES: u16 = 13;

/// Fixed day of the first Yerushalmi cycle's start, February 2, 1980.
const YERUSHALMI_CYCLE_START: i64 = 722_847;
/// Nominal Yerushalmi pages per cycle, before skipped days.
const YERUSHALMI_PAGES_PER_CYCLE: i64 = 1554;

/// The Bavli tractates in cycle order with their page counts (Shekalim
/// carries its post-1975 count).
const BAVLI_TRACTATES: [(&str, u16); 40] = [
    ("Berachos", 64),
    ("Shabbos", 157),
    ("Eruvin", 105),
    ("Pesachim", 121),
    ("Shekalim", 22),
    ("Yoma", 88),
    ("Sukkah", 56),
    ("Beitzah", 40),
    ("Rosh Hashana", 35),
    ("Taanis", 31),
    ("Megillah", 32),
    ("Moed Katan", 29),
    ("Chagigah", 27),
    ("Yevamos", 122),
    ("Kesubos", 112),
    ("Nedarim", 91),
    ("Nazir", 66),
    ("Sotah", 49),
    ("Gitin", 90),
    ("Kiddushin", 82),
    ("Bava Kamma", 119),
    ("Bava Metzia", 119),
    ("Bava Basra", 176),
    ("Sanhedrin", 113),
    ("Makkos", 24),
    ("Shevuos", 49),
    ("Avodah Zarah", 76),
    ("Horiyos", 14),
    ("Zevachim", 120),
    ("Menachos", 110),
    ("Chullin", 142),
    ("Bechoros", 61),
    ("Arachin", 34),
    ("Temurah", 34),
    ("Kerisos", 28),
    ("Meilah", 22),
    ("Kinnim", 4),
    ("Tamid", 9),
    ("Midos", 5),
    ("Niddah", 73),
];

/// The Yerushalmi tractates in cycle order with their page counts.
const YERUSHALMI_TRACTATES: [(&str, u16); 39] = [
    ("Berachos", 68),
    ("Pe'ah", 37),
    ("Demai", 34),
    ("Kilayim", 44),
    ("Shevi'is", 31),
    ("Terumos", 59),
    ("Ma'asros", 26),
    ("Ma'aser Sheni", 33),
    ("Chalah", 28),
    ("Orlah", 20),
    ("Bikurim", 13),
    ("Shabbos", 92),
    ("Eruvin", 65),
    ("Pesachim", 71),
    ("Beitzah", 22),
    ("Rosh Hashanah", 22),
    ("Yoma", 42),
    ("Sukah", 26),
    ("Ta'anis", 26),
    ("Shekalim", 33),
    ("Megilah", 34),
    ("Chagigah", 22),
    ("Moed Katan", 19),
    ("Yevamos", 85),
    ("Kesuvos", 72),
    ("Sotah", 47),
    ("Nedarim", 40),
    ("Nazir", 47),
    ("Gitin", 54),
    ("Kidushin", 48),
    ("Bava Kama", 44),
    ("Bava Metzia", 37),
    ("Bava Basra", 34),
    ("Shevuos", 44),
    ("Makos", 9),
    ("Sanhedrin", 57),
    ("Avodah Zarah", 37),
    ("Horayos", 19),
    ("Nidah", 13),
];

/// A pointer into one of the tractate sequences: a tractate index and a
/// page (daf) number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Daf {
    masechta: u8,
    page: u16,
}

impl Daf {
    #[inline]
    #[must_use]
    const fn new(masechta: u8, page: u16) -> Self {
        Self { masechta, page }
    }

    /// Returns the tractate index within its cycle's sequence.
    #[inline]
    #[must_use]
    pub const fn masechta(&self) -> u8 {
        self.masechta
    }

    /// Returns the page (daf) number.
    #[inline]
    #[must_use]
    pub const fn page(&self) -> u16 {
        self.page
    }

    /// Returns the transliterated Bavli tractate name for this daf.
    #[must_use]
    pub fn bavli_masechta_name(&self) -> Option<&'static str> {
        BAVLI_TRACTATES
            .get(usize::from(self.masechta))
            .map(|(name, _)| *name)
    }

    /// Returns the transliterated Yerushalmi tractate name for this daf.
    #[must_use]
    pub fn yerushalmi_masechta_name(&self) -> Option<&'static str> {
        YERUSHALMI_TRACTATES
            .get(usize::from(self.masechta))
            .map(|(name, _)| *name)
    }
}

/// Computes the Daf Yomi Bavli daf for the calendar's day.
///
/// Dates before September 11, 1923 are rejected.
pub fn bavli_daf(calendar: &HebrewCalendar) -> LuachResult<Daf> {
    let fixed = calendar.fixed_day();
    if fixed < BAVLI_CYCLE_START {
        return Err(LuachError::range().with_enum(ErrorMessage::DateBeforeBavliCycles));
    }
    let (cycle, daf_number) = if fixed >= SHEKALIM_CHANGE {
        (
            8 + (fixed - SHEKALIM_CHANGE) / LATER_CYCLE_DAYS,
            (fixed - SHEKALIM_CHANGE) % LATER_CYCLE_DAYS,
        )
    } else {
        (
            1 + (fixed - BAVLI_CYCLE_START) / EARLY_CYCLE_DAYS,
            (fixed - BAVLI_CYCLE_START) % EARLY_CYCLE_DAYS,
        )
    };
    let mut total = 0i64;
    for (index, &(_, pages)) in BAVLI_TRACTATES.iter().enumerate() {
        let pages = if index == 4 && cycle <= 7 {
            EARLY_SHEKALIM_PAGES
        } else {
            pages
        };
        // Each tractate starts on daf 2; page counts overlap by one.
        total += i64::from(pages) - 1;
        if daf_number < total {
            let mut page = 1 + i64::from(pages) - (total - daf_number);
            // The last three minor tractates are paginated continuously
            // with Meilah in the printed Shas.
            match index {
                36 => page += 21,
                37 => page += 24,
                38 => page += 32,
                _ => {}
            }
            return Ok(Daf::new(index as u8, page as u16));
        }
    }
    Err(LuachError::assert())
}

/// Computes the Daf Yomi Yerushalmi daf for the calendar's day, or
/// `None` on Yom Kippur and Tisha B'Av, which have no daf.
///
/// Dates before February 2, 1980 are rejected.
pub fn yerushalmi_daf(calendar: &HebrewCalendar) -> LuachResult<Option<Daf>> {
    if matches!(
        calendar.yom_tov(),
        Some(YomTov::YomKippur | YomTov::TishaBeav)
    ) {
        return Ok(None);
    }
    let fixed = calendar.fixed_day();
    if fixed < YERUSHALMI_CYCLE_START {
        return Err(LuachError::range().with_enum(ErrorMessage::DateBeforeYerushalmiCycles));
    }
    // Walk cycle by cycle; each tentative end widens by the skipped days
    // inside the window it spans.
    let mut cycle_start = YERUSHALMI_CYCLE_START;
    let mut next_cycle = YERUSHALMI_CYCLE_START;
    while fixed >= next_cycle {
        cycle_start = next_cycle;
        next_cycle += YERUSHALMI_PAGES_PER_CYCLE;
        next_cycle += skipped_days(cycle_start, next_cycle)?;
    }
    let mut page_number = fixed - cycle_start - skipped_days(cycle_start, fixed)?;
    for (index, &(_, pages)) in YERUSHALMI_TRACTATES.iter().enumerate() {
        if page_number < i64::from(pages) {
            return Ok(Some(Daf::new(index as u8, (page_number + 1) as u16)));
        }
        page_number -= i64::from(pages);
    }
    Err(LuachError::assert())
}

/// Counts the days with no daf (Yom Kippur and Tisha B'Av) in the
/// inclusive fixed-day window.
fn skipped_days(start: i64, end: i64) -> LuachResult<i64> {
    let start_year = HebrewDate::from_fixed_day(start)?.year();
    let end_year = HebrewDate::from_fixed_day(end)?.year();
    let mut skipped = 0;
    for year in start_year..=end_year {
        let yom_kippur = HebrewDate::new_unchecked(year, HebrewMonth::Tishrei, 10).to_fixed_day();
        let tisha_beav = HebrewDate::new_unchecked(year, HebrewMonth::Av, 9).to_fixed_day();
        if (start..=end).contains(&yom_kippur) {
            skipped += 1;
        }
        if (start..=end).contains(&tisha_beav) {
            skipped += 1;
        }
    }
    Ok(skipped)
}

impl HebrewCalendar {
    /// Returns the Daf Yomi Bavli daf for the cursor's day.
    pub fn daf_yomi_bavli(&self) -> LuachResult<Daf> {
        bavli_daf(self)
    }

    /// Returns the Daf Yomi Yerushalmi daf for the cursor's day, or
    /// `None` on Yom Kippur and Tisha B'Av.
    pub fn daf_yomi_yerushalmi(&self) -> LuachResult<Option<Daf>> {
        yerushalmi_daf(self)
    }
}
