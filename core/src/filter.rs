//! Filter node model.
//!
//! A [`Filter`] is one predicate, or a group of predicates, addressed to
//! PostgREST columns. Constructors check that the operator accepts the kind of
//! criterion it is given and fail with [`PgRestError::UnsupportedOperator`]
//! otherwise; nothing is coerced.

use pgrest_types::{Interval, Operator};
use serde_json::{Map, Value as JsonValue};

use crate::error::{PgRestError, Result};
use crate::value::{FullTextQuery, Value};

/// The kind of criterion an operator is paired with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralCategory {
    Null,
    Scalar,
    List,
    Mapping,
    Interval,
    FullText,
    Group,
}

impl LiteralCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            LiteralCategory::Null => "null",
            LiteralCategory::Scalar => "scalar",
            LiteralCategory::List => "list",
            LiteralCategory::Mapping => "mapping",
            LiteralCategory::Interval => "range",
            LiteralCategory::FullText => "full-text",
            LiteralCategory::Group => "filter group",
        }
    }

    /// Whether `operator` may carry a criterion of this category
    pub const fn accepts(&self, operator: Operator) -> bool {
        match self {
            LiteralCategory::Null | LiteralCategory::Scalar => operator.is_comparison(),
            LiteralCategory::List | LiteralCategory::Mapping => operator.is_membership(),
            LiteralCategory::Interval => operator.is_range(),
            LiteralCategory::FullText => operator.is_full_text(),
            LiteralCategory::Group => operator.is_logical(),
        }
    }
}

impl core::fmt::Display for LiteralCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// List or mapping criterion of a membership filter
#[derive(Debug, Clone, PartialEq)]
pub enum Members {
    List(Vec<String>),
    Mapping(Map<String, JsonValue>),
}

/// A compiled predicate
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Comparison {
        column: String,
        operator: Operator,
        literal: String,
    },
    Membership {
        column: String,
        operator: Operator,
        members: Members,
    },
    Range {
        column: String,
        operator: Operator,
        interval: Interval,
    },
    FullText {
        column: String,
        operator: Operator,
        query: FullTextQuery,
    },
    Not(Box<Filter>),
    Group {
        operator: Operator,
        children: Vec<Filter>,
    },
}

fn check(operator: Operator, category: LiteralCategory) -> Result<()> {
    if category.accepts(operator) {
        Ok(())
    } else {
        Err(PgRestError::UnsupportedOperator { operator, category })
    }
}

impl Filter {
    /// `column <op> literal` for the scalar comparators
    pub fn comparison(
        column: impl Into<String>,
        operator: Operator,
        literal: impl Into<String>,
    ) -> Result<Self> {
        check(operator, LiteralCategory::Scalar)?;
        Ok(Filter::Comparison {
            column: column.into(),
            operator,
            literal: literal.into(),
        })
    }

    /// `in`, `cs`, `cd` or `ov` against a list
    pub fn list(column: impl Into<String>, operator: Operator, values: Vec<String>) -> Result<Self> {
        check(operator, LiteralCategory::List)?;
        Ok(Filter::Membership {
            column: column.into(),
            operator,
            members: Members::List(values),
        })
    }

    /// `in`, `cs`, `cd` or `ov` against a JSON mapping
    pub fn mapping(
        column: impl Into<String>,
        operator: Operator,
        mapping: Map<String, JsonValue>,
    ) -> Result<Self> {
        check(operator, LiteralCategory::Mapping)?;
        Ok(Filter::Membership {
            column: column.into(),
            operator,
            members: Members::Mapping(mapping),
        })
    }

    pub fn range(column: impl Into<String>, operator: Operator, interval: Interval) -> Result<Self> {
        check(operator, LiteralCategory::Interval)?;
        Ok(Filter::Range {
            column: column.into(),
            operator,
            interval,
        })
    }

    pub fn full_text(
        column: impl Into<String>,
        operator: Operator,
        query: FullTextQuery,
    ) -> Result<Self> {
        check(operator, LiteralCategory::FullText)?;
        Ok(Filter::FullText {
            column: column.into(),
            operator,
            query,
        })
    }

    /// `column is null`
    pub fn is_null(column: impl Into<String>) -> Self {
        Filter::Comparison {
            column: column.into(),
            operator: Operator::Is,
            literal: "null".to_owned(),
        }
    }

    /// Negates `inner`; negating a negation yields the original filter
    pub fn negate(inner: Filter) -> Self {
        match inner {
            Filter::Not(filter) => *filter,
            other => Filter::Not(Box::new(other)),
        }
    }

    /// `and(...)` / `or(...)` over `children`, in order
    ///
    /// A group needs at least one child.
    pub fn group(operator: Operator, children: Vec<Filter>) -> Result<Self> {
        check(operator, LiteralCategory::Group)?;
        if children.is_empty() {
            return Err(PgRestError::InvalidExpression(format!(
                "`{operator}` group has no filters"
            )));
        }
        Ok(Filter::Group { operator, children })
    }

    pub fn and(children: Vec<Filter>) -> Result<Self> {
        Filter::group(Operator::And, children)
    }

    pub fn or(children: Vec<Filter>) -> Result<Self> {
        Filter::group(Operator::Or, children)
    }

    /// Builds the node matching the category of an evaluated [`Value`].
    ///
    /// `NULL` only pairs with equality: `eq`/`is` become `is.null` and
    /// `neq`/`not` become `not.is.null`. Lists may not contain `NULL`.
    /// Scalar text given to `sl`/`sr`/`nxr`/`nxl` is parsed as a range literal.
    pub fn from_value(column: impl Into<String>, operator: Operator, value: Value) -> Result<Self> {
        let column = column.into();
        match value {
            Value::Null => match operator {
                Operator::Equals | Operator::Is => Ok(Filter::is_null(column)),
                Operator::NotEqual | Operator::Not => Ok(Filter::negate(Filter::is_null(column))),
                _ => Err(PgRestError::UnsupportedOperator {
                    operator,
                    category: LiteralCategory::Null,
                }),
            },
            Value::Scalar(literal) if operator.is_range_position() => {
                Filter::range(column, operator, Interval::parse(&literal)?)
            }
            Value::Scalar(literal) => Filter::comparison(column, operator, literal),
            Value::List(values) => {
                let values = values.into_iter().collect::<Option<Vec<_>>>().ok_or(
                    PgRestError::UnsupportedOperator {
                        operator,
                        category: LiteralCategory::Null,
                    },
                )?;
                Filter::list(column, operator, values)
            }
            Value::Mapping(mapping) => Filter::mapping(column, operator, mapping),
            Value::Range(interval) => Filter::range(column, operator, interval),
            Value::FullText(query) => Filter::full_text(column, operator, query),
        }
    }

    /// The column this node filters, `None` for groups
    pub fn column(&self) -> Option<&str> {
        match self {
            Filter::Comparison { column, .. }
            | Filter::Membership { column, .. }
            | Filter::Range { column, .. }
            | Filter::FullText { column, .. } => Some(column),
            Filter::Not(inner) => inner.column(),
            Filter::Group { .. } => None,
        }
    }
}

impl core::ops::Not for Filter {
    type Output = Filter;

    fn not(self) -> Filter {
        Filter::negate(self)
    }
}
