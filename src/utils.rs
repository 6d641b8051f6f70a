//! Utility date equations for the civil (proleptic Gregorian) calendar.

/// Mathematically determine whether a year is a Gregorian leap year.
pub(crate) fn is_gregorian_leap_year(y: i32) -> bool {
    (y % 4 == 0 && y % 100 != 0) || y % 400 == 0
}

/// Mathematically determine the days in a Gregorian year.
pub(crate) fn gregorian_days_in_year(y: i32) -> i64 {
    if is_gregorian_leap_year(y) {
        366
    } else {
        365
    }
}

/// Returns the last day of the given Gregorian month.
pub(crate) fn gregorian_days_in_month(month: u8, year: i32) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_gregorian_leap_year(year) => 29,
        2 => 28,
        _ => unreachable!("month is validated to be within 1..=12."),
    }
}

/// Returns the day of the week for a fixed day, `0` = Sunday through
/// `6` = Saturday.
///
/// Fixed day 1 (Gregorian January 1, year 1) is a Monday.
pub(crate) fn day_of_week(fixed: i64) -> u8 {
    fixed.rem_euclid(7) as u8
}
