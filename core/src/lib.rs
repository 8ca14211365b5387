//! PostgREST query compiler.
//!
//! Turns typed query intent into the query-string grammar PostgREST reads:
//!
//! - [`expr`] - typed predicate DSL and its compiler to [`Filter`] trees
//! - [`filter`] - the filter node model
//! - [`relation`] - resource embedding over static [`ModelSchema`]s
//! - [`serialize`] - filters, ordering, projection and pagination to query pairs
//! - [`query`] - [`QueryState`] and the fluent [`QueryBuilder`]
//!
//! # Features
//!
//! - `tracing` - emit compile and embed events through the `tracing` crate
//! - `chrono`, `uuid` - literal conversions for those value types

pub mod error;
pub mod expr;
pub mod filter;
pub mod headers;
pub mod options;
pub mod query;
pub mod relation;
pub mod request;
pub mod schema;
pub mod serialize;
mod trace;
pub mod value;

// Re-export key types and traits
pub use error::{PgRestError, Result};
pub use expr::{Column, Expr, Predicate, compile_predicate};
pub use filter::{Filter, LiteralCategory, Members};
pub use options::ClientOptions;
pub use query::{CountType, Method, QueryBuilder, QueryState, ReturnPreference};
pub use relation::{Embeds, resolve_embeds};
pub use request::Request;
pub use schema::{ColumnDef, ColumnResolver, JoinKind, Model, ModelSchema, RelationshipDef};
pub use value::{FullTextQuery, ToLiteral, Value};

pub use pgrest_types::{Interval, NullPosition, Operator, Ordering, ParseRangeError};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::expr::{Column, Predicate, and, not, or};
    pub use crate::{
        ClientOptions, CountType, Filter, FullTextQuery, Interval, Model, NullPosition, Operator,
        Ordering, PgRestError, QueryBuilder, ReturnPreference, ToLiteral, Value,
    };
}
