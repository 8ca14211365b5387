//! Criterion values.
//!
//! Right-hand sides are evaluated eagerly into a [`Value`] when a predicate is
//! built. Scalars are rendered to their wire text through [`ToLiteral`], so a
//! compiled filter never holds anything that still needs evaluating.

use pgrest_types::Interval;
use serde_json::{Map, Value as JsonValue};

use crate::filter::LiteralCategory;

/// Conversion of a Rust value into the literal text PostgREST compares against.
///
/// `None` stands for SQL `NULL`, which PostgREST only accepts through the
/// `is` operator.
pub trait ToLiteral {
    fn to_literal(&self) -> Option<String>;
}

impl<T: ToLiteral + ?Sized> ToLiteral for &T {
    fn to_literal(&self) -> Option<String> {
        (**self).to_literal()
    }
}

impl<T: ToLiteral> ToLiteral for Option<T> {
    fn to_literal(&self) -> Option<String> {
        self.as_ref().and_then(ToLiteral::to_literal)
    }
}

impl ToLiteral for str {
    fn to_literal(&self) -> Option<String> {
        Some(self.to_owned())
    }
}

impl ToLiteral for String {
    fn to_literal(&self) -> Option<String> {
        Some(self.clone())
    }
}

macro_rules! impl_display_literal {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToLiteral for $ty {
                fn to_literal(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

impl_display_literal!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

#[cfg(feature = "uuid")]
impl ToLiteral for uuid::Uuid {
    fn to_literal(&self) -> Option<String> {
        Some(self.hyphenated().to_string())
    }
}

#[cfg(feature = "chrono")]
mod chrono_literals {
    use super::ToLiteral;
    use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone};

    impl<Tz: TimeZone> ToLiteral for DateTime<Tz>
    where
        Tz::Offset: core::fmt::Display,
    {
        fn to_literal(&self) -> Option<String> {
            Some(self.to_rfc3339_opts(SecondsFormat::AutoSi, true))
        }
    }

    impl ToLiteral for NaiveDateTime {
        fn to_literal(&self) -> Option<String> {
            Some(self.format("%Y-%m-%dT%H:%M:%S%.f").to_string())
        }
    }

    impl ToLiteral for NaiveDate {
        fn to_literal(&self) -> Option<String> {
            Some(self.format("%Y-%m-%d").to_string())
        }
    }

    impl ToLiteral for NaiveTime {
        fn to_literal(&self) -> Option<String> {
            Some(self.format("%H:%M:%S%.f").to_string())
        }
    }
}

/// Query text and language configuration for the full-text operators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullTextQuery {
    pub query: String,
    pub config: String,
}

impl FullTextQuery {
    /// Search configuration used when none is given
    pub const DEFAULT_CONFIG: &'static str = "english";

    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            config: Self::DEFAULT_CONFIG.to_owned(),
        }
    }

    pub fn with_config(mut self, config: impl Into<String>) -> Self {
        self.config = config.into();
        self
    }
}

/// A fully evaluated criterion
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Scalar(String),
    /// Elements in order, `None` for `NULL`
    List(Vec<Option<String>>),
    /// JSON object, keys kept in insertion order
    Mapping(Map<String, JsonValue>),
    Range(Interval),
    FullText(FullTextQuery),
}

impl Value {
    /// Evaluates a scalar, mapping `None` to [`Value::Null`].
    pub fn scalar<T: ToLiteral + ?Sized>(value: &T) -> Self {
        match value.to_literal() {
            Some(text) => Value::Scalar(text),
            None => Value::Null,
        }
    }

    /// Evaluates every element of a list.
    ///
    /// `NULL` elements are kept as `None`; compiling them into a filter fails.
    pub fn list<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToLiteral,
    {
        Value::List(values.into_iter().map(|v| v.to_literal()).collect())
    }

    pub fn category(&self) -> LiteralCategory {
        match self {
            Value::Null => LiteralCategory::Null,
            Value::Scalar(_) => LiteralCategory::Scalar,
            Value::List(_) => LiteralCategory::List,
            Value::Mapping(_) => LiteralCategory::Mapping,
            Value::Range(_) => LiteralCategory::Interval,
            Value::FullText(_) => LiteralCategory::FullText,
        }
    }
}

macro_rules! impl_value_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::scalar(&value)
                }
            }
        )*
    };
}

impl_value_from_scalar!(
    &str, String, &String, bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128,
    usize, f32, f64
);

#[cfg(feature = "uuid")]
impl_value_from_scalar!(uuid::Uuid);

#[cfg(feature = "chrono")]
impl_value_from_scalar!(chrono::NaiveDateTime, chrono::NaiveDate, chrono::NaiveTime);

#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> From<chrono::DateTime<Tz>> for Value
where
    Tz::Offset: core::fmt::Display,
{
    fn from(value: chrono::DateTime<Tz>) -> Self {
        Value::scalar(&value)
    }
}

impl<T: ToLiteral> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        Value::scalar(&value)
    }
}

impl<T: ToLiteral> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::list(values)
    }
}

impl<T: ToLiteral> From<&[T]> for Value {
    fn from(values: &[T]) -> Self {
        Value::list(values)
    }
}

impl From<Map<String, JsonValue>> for Value {
    fn from(map: Map<String, JsonValue>) -> Self {
        Value::Mapping(map)
    }
}

impl From<Interval> for Value {
    fn from(interval: Interval) -> Self {
        Value::Range(interval)
    }
}

impl From<FullTextQuery> for Value {
    fn from(query: FullTextQuery) -> Self {
        Value::FullText(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_literals() {
        assert_eq!(Value::from("bar"), Value::Scalar("bar".into()));
        assert_eq!(Value::from(42), Value::Scalar("42".into()));
        assert_eq!(Value::from(1.5), Value::Scalar("1.5".into()));
        assert_eq!(Value::from(true), Value::Scalar("true".into()));
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::Scalar("x".into()));
    }

    #[test]
    fn test_list_literals() {
        assert_eq!(
            Value::from(vec!["a", "b"]),
            Value::List(vec![Some("a".into()), Some("b".into())])
        );
        assert_eq!(
            Value::list([Some(1), None]),
            Value::List(vec![Some("1".into()), None])
        );
    }

    #[test]
    fn test_full_text_default_config() {
        let query = FullTextQuery::new("fat & cat");
        assert_eq!(query.config, "english");
        assert_eq!(query.with_config("simple").config, "simple");
    }

    #[test]
    fn test_categories() {
        assert_eq!(Value::Null.category(), LiteralCategory::Null);
        assert_eq!(Value::from(vec![1]).category(), LiteralCategory::List);
        assert_eq!(
            Value::from(Interval::new(1, 2)).category(),
            LiteralCategory::Interval
        );
    }
}
