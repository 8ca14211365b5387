//! Shared type definitions for pgrest
//!
//! This crate holds the vocabulary shared between the query compiler and
//! anything that decodes PostgREST payloads:
//!
//! - [`Operator`], [`Ordering`], [`NullPosition`] - the operator registry and
//!   their PostgREST wire tokens
//! - [`Interval`] - PostgreSQL discrete range literals normalised to inclusive
//!   integer bounds
//!
//! # Features
//!
//! - `serde` - (de)serialize [`Interval`] through its range literal text

mod operator;
mod range;

pub use operator::{NullPosition, Operator, OperatorParseError, Ordering};
pub use range::{Interval, ParseRangeError};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{Interval, NullPosition, Operator, Ordering};
}
