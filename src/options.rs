//! Native implementation of calendar navigation options.

use core::fmt;

/// The date unit a [`crate::HebrewCalendar`] cursor navigates by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DateUnit {
    /// A single calendar day.
    Day,
    /// A Hebrew calendar month.
    Month,
    /// A Hebrew calendar year.
    Year,
}

impl fmt::Display for DateUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => f.write_str("day"),
            Self::Month => f.write_str("month"),
            Self::Year => f.write_str("year"),
        }
    }
}
