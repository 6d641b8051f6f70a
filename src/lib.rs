//! The `luach_rs` crate is an implementation of the Hebrew (lunisolar)
//! calendar in Rust.
//!
//! ```rust
//! use luach_rs::{DateUnit, HebrewCalendar, HebrewMonth};
//!
//! // Create a calendar cursor from a Gregorian date
//! let mut cal = HebrewCalendar::from_gregorian(2011, 1, 31).unwrap();
//! assert_eq!(cal.hebrew_year(), 5771);
//! assert_eq!(cal.hebrew_month(), HebrewMonth::Shevat);
//! assert_eq!(cal.hebrew_day_of_month(), 26);
//!
//! // Advance a day; the civil and Hebrew fields move in lock-step
//! cal.forward(DateUnit::Day, 1).unwrap();
//! assert_eq!(cal.gregorian_month(), 2);
//! assert_eq!(cal.hebrew_day_of_month(), 27);
//! ```
//!
//! The crate covers the arithmetic core of the calendar: the bidirectional
//! day-count engine (including the molad computation and the four Rosh
//! Hashana postponement rules), the holiday and weekly Torah-reading
//! derivations, and the two Daf Yomi cycle calculators. Rendering,
//! localization, and solar-time computation are out of scope.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::too_many_lines,
    clippy::cognitive_complexity,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap
)]

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod calendar;
pub mod civil;
pub mod daf_yomi;
pub mod error;
pub mod hebrew;
pub mod holidays;
pub mod molad;
pub mod options;
pub mod parsha;

#[cfg(feature = "sys")]
pub(crate) mod sys;

#[doc(hidden)]
pub(crate) mod utils;

#[doc(inline)]
pub use error::LuachError;

/// The `luach_rs` result type.
pub type LuachResult<T> = Result<T, LuachError>;

pub use calendar::HebrewCalendar;
pub use civil::CivilDate;
pub use daf_yomi::Daf;
pub use hebrew::{HebrewDate, HebrewMonth, MonthCode, YearLength};
pub use holidays::YomTov;
pub use molad::{Molad, MoladTime};
pub use options::DateUnit;
pub use parsha::Parsha;

/// A library specific trait for unwrapping assertions.
pub(crate) trait LuachUnwrap {
    type Output;

    /// `luach_rs` based assertion for unwrapping. This will panic in
    /// debug builds, but throws an error during runtime.
    fn luach_unwrap(self) -> LuachResult<Self::Output>;
}

impl<T> LuachUnwrap for Option<T> {
    type Output = T;

    fn luach_unwrap(self) -> LuachResult<Self::Output> {
        debug_assert!(self.is_some());
        self.ok_or(LuachError::assert())
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! luach_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::LuachError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err($crate::LuachError::assert());
        }
    };
}
