//! The error type for `luach_rs`.
//!
//! Every fallible operation in the crate returns a [`LuachError`], a small
//! value carrying an [`ErrorKind`] and a static message. Errors are raised
//! synchronously at the constructor or setter that would produce an invalid
//! value; nothing in the crate is transient or retryable.

use core::fmt;

/// The error kind for a [`LuachError`].
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A generic error, usually from an external system.
    #[default]
    Generic,
    /// A value was outside its valid range.
    Range,
    /// An internal invariant did not hold.
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => f.write_str("generic"),
            Self::Range => f.write_str("range"),
            Self::Assert => f.write_str("implementation error"),
        }
    }
}

/// The set of error messages raised by the crate.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMessage {
    GregorianYearOutOfRange,
    GregorianMonthOutOfRange,
    GregorianDayOutOfRange,
    FixedDayBeforeEpoch,
    HebrewMonthOutOfRange,
    HebrewDayOutOfRange,
    HebrewDateBeforeEpoch,
    MoladHoursOutOfRange,
    MoladMinutesOutOfRange,
    MoladChalakimOutOfRange,
    NavigationAmountNotPositive,
    DateBeforeBavliCycles,
    DateBeforeYerushalmiCycles,
    NumberOutOfCastRange,
}

impl ErrorMessage {
    pub(crate) const fn as_str(&self) -> &'static str {
        match self {
            Self::GregorianYearOutOfRange => "Gregorian year must be 1 or later.",
            Self::GregorianMonthOutOfRange => "Gregorian month must be between 1 and 12.",
            Self::GregorianDayOutOfRange => "Gregorian day is not valid for the month.",
            Self::FixedDayBeforeEpoch => "fixed day precedes day 1 (Gregorian 1-01-01).",
            Self::HebrewMonthOutOfRange => "Hebrew month is not valid for the year.",
            Self::HebrewDayOutOfRange => "Hebrew day must be between 1 and 30.",
            Self::HebrewDateBeforeEpoch => "Hebrew date precedes 18 Teves 3761.",
            Self::MoladHoursOutOfRange => "molad hours must be between 0 and 23.",
            Self::MoladMinutesOutOfRange => "molad minutes must be between 0 and 59.",
            Self::MoladChalakimOutOfRange => "molad chalakim must be between 0 and 17.",
            Self::NavigationAmountNotPositive => "navigation amount must be at least 1.",
            Self::DateBeforeBavliCycles => {
                "date precedes the first Daf Yomi cycle (September 11, 1923)."
            }
            Self::DateBeforeYerushalmiCycles => {
                "date precedes the first Yerushalmi cycle (February 2, 1980)."
            }
            Self::NumberOutOfCastRange => "number exceeded a valid cast range.",
        }
    }
}

/// The error type of `luach_rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuachError {
    kind: ErrorKind,
    msg: &'static str,
}

impl LuachError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self { kind, msg: "" }
    }

    /// Creates a generic error with the provided message.
    #[inline]
    #[must_use]
    pub const fn general(msg: &'static str) -> Self {
        Self {
            kind: ErrorKind::Generic,
            msg,
        }
    }

    /// Creates a range error.
    #[inline]
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Creates an assertion error for a broken internal invariant.
    #[inline]
    #[must_use]
    pub const fn assert() -> Self {
        Self::new(ErrorKind::Assert)
    }

    /// Attaches a message to this error.
    #[inline]
    #[must_use]
    pub const fn with_message(mut self, msg: &'static str) -> Self {
        self.msg = msg;
        self
    }

    /// Attaches a predefined [`ErrorMessage`] to this error.
    #[inline]
    #[must_use]
    pub const fn with_enum(mut self, msg: ErrorMessage) -> Self {
        self.msg = msg.as_str();
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns this error's message.
    #[inline]
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.msg
    }
}

impl fmt::Display for LuachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if !self.msg.is_empty() {
            write!(f, ": {}", self.msg)?;
        }
        Ok(())
    }
}

impl core::error::Error for LuachError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn display_includes_kind_and_message() {
        let err = LuachError::range().with_enum(ErrorMessage::HebrewDayOutOfRange);
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(
            err.to_string(),
            "range: Hebrew day must be between 1 and 30."
        );
    }

    #[test]
    fn general_keeps_message() {
        let err = LuachError::general("boom");
        assert_eq!(err.message(), "boom");
        assert_eq!(err.kind(), ErrorKind::Generic);
    }
}
