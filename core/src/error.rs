use pgrest_types::{Operator, ParseRangeError};
use thiserror::Error;

use crate::filter::LiteralCategory;

/// Errors raised while compiling query intent into wire text.
///
/// Every variant is a construction mistake detected before any request is
/// issued; none of them are worth retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PgRestError {
    /// A property, projection or assignment does not resolve to a known column
    #[error("Invalid expression: {0}")]
    InvalidExpression(String),

    /// An operator was paired with a literal category it does not accept
    #[error("Operator `{operator}` does not accept a {category} criterion")]
    UnsupportedOperator {
        operator: Operator,
        category: LiteralCategory,
    },

    /// An unrecognised method-style call appeared in a predicate
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// A range literal did not match the discrete range grammar
    #[error(transparent)]
    MalformedRange(#[from] ParseRangeError),

    /// A request body could not be converted to JSON
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for PgRestError {
    fn from(err: serde_json::Error) -> Self {
        PgRestError::Serialization(err.to_string())
    }
}

/// Result type for query compilation
pub type Result<T> = std::result::Result<T, PgRestError>;
