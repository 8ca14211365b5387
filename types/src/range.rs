//! Discrete range codec
//!
//! PostgreSQL prints discrete ranges (`int4range`, `int8range`) as bound
//! markers around two integers, e.g. `[3,7)`. [`Interval`] normalises these to
//! inclusive bounds so callers never reason about exclusivity.

use std::sync::LazyLock;

use regex::Regex;

static RANGE_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([\[(])(\d+),(\d+)([\])])$").expect("range literal pattern is valid")
});

/// PostgreSQL's output for a range containing no values
const EMPTY_LITERAL: &str = "empty";

/// An inclusive integer interval parsed from a PostgreSQL discrete range
///
/// The empty range is always `{ start: 0, end: 0 }`.
///
/// # Examples
///
/// ```
/// use pgrest_types::Interval;
///
/// let interval = Interval::parse("[3,7)").unwrap();
/// assert_eq!(interval, Interval::new(3, 6));
/// assert_eq!(interval.to_string(), "[3,6]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    /// Creates an interval with inclusive bounds.
    ///
    /// An `end` below `start` yields the canonical empty interval.
    #[must_use]
    pub const fn new(start: i64, end: i64) -> Self {
        if end < start {
            Self::EMPTY
        } else {
            Self { start, end }
        }
    }

    pub const EMPTY: Interval = Interval { start: 0, end: 0 };

    /// Parse a range literal such as `[3,7)` or `(3,7]`.
    pub fn parse(text: &str) -> Result<Self, ParseRangeError> {
        if text == EMPTY_LITERAL {
            return Ok(Self::EMPTY);
        }

        let malformed = || ParseRangeError {
            literal: text.to_string(),
        };
        let captures = RANGE_LITERAL.captures(text).ok_or_else(malformed)?;

        let lower: i64 = captures[2].parse().map_err(|_| malformed())?;
        let upper: i64 = captures[3].parse().map_err(|_| malformed())?;

        let start = match &captures[1] {
            "[" => lower,
            _ => lower.checked_add(1).ok_or_else(malformed)?,
        };
        let end = match &captures[4] {
            "]" => upper,
            _ => upper - 1,
        };

        Ok(Self::new(start, end))
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == 0 && self.end == 0
    }
}

impl core::fmt::Display for Interval {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{},{}]", self.start, self.end)
    }
}

impl core::str::FromStr for Interval {
    type Err = ParseRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interval::parse(s)
    }
}

impl From<core::ops::RangeInclusive<i64>> for Interval {
    fn from(range: core::ops::RangeInclusive<i64>) -> Self {
        Interval::new(*range.start(), *range.end())
    }
}

impl From<core::ops::Range<i64>> for Interval {
    fn from(range: core::ops::Range<i64>) -> Self {
        Interval::new(range.start, range.end.saturating_sub(1))
    }
}

/// Error returned when a range literal does not match `[a,b]`, `[a,b)`,
/// `(a,b]` or `(a,b)`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed range literal: {literal:?}")]
pub struct ParseRangeError {
    pub literal: String,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Interval {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Interval {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Interval::parse(&text).map_err(serde::de::Error::custom)
    }
}
