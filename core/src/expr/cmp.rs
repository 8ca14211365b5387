//! Comparison, membership, range and full-text predicates on [`Column`].
//!
//! Every method evaluates its argument immediately. Whether the operator
//! accepts the argument's kind is checked when the predicate is compiled, so
//! `eq(vec![1, 2])` builds fine and fails later with `UnsupportedOperator`.

use pgrest_types::{Interval, Operator};
use serde_json::{Map, Value as JsonValue};

use crate::value::{FullTextQuery, ToLiteral, Value};

use super::{Column, Expr, Predicate, Receiver};

const CONTAINS: &str = "contains";

impl<M, T> Column<M, T> {
    fn compare(&self, operator: Operator, value: impl Into<Value>) -> Predicate<M> {
        Predicate::new(Expr::compare(self.property(), operator, value))
    }

    // =========================================================================
    // Equality and ordering
    // =========================================================================

    /// `eq`; `None` compiles to `is.null`
    pub fn eq(&self, value: impl Into<Value>) -> Predicate<M> {
        self.compare(Operator::Equals, value)
    }

    /// `neq`; `None` compiles to `not.is.null`
    pub fn neq(&self, value: impl Into<Value>) -> Predicate<M> {
        self.compare(Operator::NotEqual, value)
    }

    pub fn gt(&self, value: impl Into<Value>) -> Predicate<M> {
        self.compare(Operator::GreaterThan, value)
    }

    pub fn gte(&self, value: impl Into<Value>) -> Predicate<M> {
        self.compare(Operator::GreaterThanOrEqual, value)
    }

    pub fn lt(&self, value: impl Into<Value>) -> Predicate<M> {
        self.compare(Operator::LessThan, value)
    }

    pub fn lte(&self, value: impl Into<Value>) -> Predicate<M> {
        self.compare(Operator::LessThanOrEqual, value)
    }

    pub fn is_null(&self) -> Predicate<M> {
        self.compare(Operator::Is, Value::Null)
    }

    pub fn is_not_null(&self) -> Predicate<M> {
        self.compare(Operator::Not, Value::Null)
    }

    // =========================================================================
    // Pattern matching
    // =========================================================================

    /// Case-sensitive pattern match; `%` and `*` are both wildcards
    pub fn like(&self, pattern: impl Into<String>) -> Predicate<M> {
        self.compare(Operator::Like, Value::Scalar(pattern.into()))
    }

    pub fn ilike(&self, pattern: impl Into<String>) -> Predicate<M> {
        self.compare(Operator::ILike, Value::Scalar(pattern.into()))
    }

    // =========================================================================
    // Membership
    // =========================================================================

    pub fn in_list<I>(&self, values: I) -> Predicate<M>
    where
        I: IntoIterator,
        I::Item: ToLiteral,
    {
        self.compare(Operator::In, Value::list(values))
    }

    pub fn in_map(&self, mapping: Map<String, JsonValue>) -> Predicate<M> {
        self.compare(Operator::In, mapping)
    }

    /// `cd`: the column is contained in a list, mapping or range
    pub fn contained_in(&self, value: impl Into<Value>) -> Predicate<M> {
        self.compare(Operator::ContainedIn, value)
    }

    /// `ov`: the column overlaps a list or range
    pub fn overlaps(&self, value: impl Into<Value>) -> Predicate<M> {
        self.compare(Operator::Overlap, value)
    }

    /// `cs` against an explicit list, mapping or range
    pub fn contains_all(&self, value: impl Into<Value>) -> Predicate<M> {
        self.compare(Operator::Contains, value)
    }

    // =========================================================================
    // Range positions
    // =========================================================================

    pub fn strictly_left(&self, interval: impl Into<Interval>) -> Predicate<M> {
        self.compare(Operator::StrictlyLeft, Value::Range(interval.into()))
    }

    pub fn strictly_right(&self, interval: impl Into<Interval>) -> Predicate<M> {
        self.compare(Operator::StrictlyRight, Value::Range(interval.into()))
    }

    pub fn not_right_of(&self, interval: impl Into<Interval>) -> Predicate<M> {
        self.compare(Operator::NotRightOf, Value::Range(interval.into()))
    }

    pub fn not_left_of(&self, interval: impl Into<Interval>) -> Predicate<M> {
        self.compare(Operator::NotLeftOf, Value::Range(interval.into()))
    }

    pub fn adjacent(&self, interval: impl Into<Interval>) -> Predicate<M> {
        self.compare(Operator::Adjacent, Value::Range(interval.into()))
    }

    // =========================================================================
    // Full-text search
    // =========================================================================

    pub fn fts(&self, query: FullTextQuery) -> Predicate<M> {
        self.compare(Operator::FTS, query)
    }

    pub fn plfts(&self, query: FullTextQuery) -> Predicate<M> {
        self.compare(Operator::PLFTS, query)
    }

    pub fn phfts(&self, query: FullTextQuery) -> Predicate<M> {
        self.compare(Operator::PHFTS, query)
    }

    pub fn wfts(&self, query: FullTextQuery) -> Predicate<M> {
        self.compare(Operator::WFTS, query)
    }
}

// =============================================================================
// `contains`
// =============================================================================

impl<M> Column<M, String> {
    /// Substring match, compiled to `like.*needle*`
    pub fn contains(&self, needle: impl Into<String>) -> Predicate<M> {
        Predicate::new(Expr::call(
            self.property(),
            Receiver::Text,
            CONTAINS,
            Value::Scalar(needle.into()),
        ))
    }
}

impl<M> Column<M, Option<String>> {
    /// Substring match, compiled to `like.*needle*`
    pub fn contains(&self, needle: impl Into<String>) -> Predicate<M> {
        Predicate::new(Expr::call(
            self.property(),
            Receiver::Text,
            CONTAINS,
            Value::Scalar(needle.into()),
        ))
    }
}

impl<M, E: ToLiteral> Column<M, Vec<E>> {
    /// Element membership, compiled to `cs.{item}`
    pub fn contains(&self, item: E) -> Predicate<M> {
        Predicate::new(Expr::call(
            self.property(),
            Receiver::Collection,
            CONTAINS,
            Value::scalar(&item),
        ))
    }
}

impl<M, E: ToLiteral> Column<M, Option<Vec<E>>> {
    /// Element membership, compiled to `cs.{item}`
    pub fn contains(&self, item: E) -> Predicate<M> {
        Predicate::new(Expr::call(
            self.property(),
            Receiver::Collection,
            CONTAINS,
            Value::scalar(&item),
        ))
    }
}
