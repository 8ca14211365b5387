//! # pgrest
//!
//! A typed query compiler for PostgREST. Models describe their columns and
//! foreign-key relationships once, predicates are built from typed column
//! handles, and the compiler produces the exact query string, headers and body
//! PostgREST expects. Nothing here performs I/O; hand the resulting
//! [`Request`] to any HTTP client.
//!
//! ## Quick Start
//!
//! ```ignore
//! use pgrest::prelude::*;
//!
//! #[derive(PostgrestModel)]
//! #[table(name = "users")]
//! struct User {
//!     #[column(primary_key)]
//!     id: i64,
//!     name: String,
//!     #[reference(model = Post, foreign_key = "author_id")]
//!     posts: Vec<Post>,
//! }
//!
//! #[derive(PostgrestModel)]
//! #[table(name = "posts")]
//! struct Post {
//!     #[column(primary_key)]
//!     id: i64,
//!     title: String,
//! }
//!
//! let request = QueryBuilder::<User>::new()
//!     .r#where(User::NAME.ilike("%ann%") | User::ID.lt(10))?
//!     .order_by(User::NAME.asc())?
//!     .limit(20)
//!     .get()?;
//!
//! assert_eq!(
//!     request.url("https://example.com/rest/v1"),
//!     "https://example.com/rest/v1/users?or=(name.ilike.*ann*,id.lt.10)\
//!      &order=name.asc.nullsfirst&select=*,posts:author_id(id,title)&limit=20",
//! );
//! ```
//!
//! ## Features
//!
//! | Feature   | Effect |
//! |-----------|--------|
//! | `tracing` | compile and embed events through `tracing` (default) |
//! | `chrono`  | `chrono` date/time values as literals |
//! | `uuid`    | `uuid::Uuid` values as literals |

// =============================================================================
// Root-level exports
// =============================================================================

pub use pgrest_core::error::Result;
pub use pgrest_core::{ClientOptions, QueryBuilder, Request};

/// Derive macros
pub use pgrest_macros::{PostgrestEnum, PostgrestModel};

/// Error types
pub mod error {
    pub use pgrest_core::error::PgRestError;
}

/// Operator registry and range codec
pub mod types {
    pub use pgrest_types::*;
}

/// Compiler internals, also the paths generated code refers to
pub mod core {
    // ==========================================================================
    // Schema descriptors
    // ==========================================================================

    pub use pgrest_core::schema::{
        ColumnDef, ColumnResolver, JoinKind, Model, ModelSchema, RelationshipDef,
    };

    // ==========================================================================
    // Expressions and filters
    // ==========================================================================

    pub use pgrest_core::expr::{
        Assignment, Column, Expr, OrderExpr, Predicate, Projection, Property, Receiver, and,
        compile_assignment, compile_order, compile_predicate, compile_projection, not, or,
    };
    pub use pgrest_core::filter::{Filter, LiteralCategory, Members};
    pub use pgrest_core::value::{FullTextQuery, ToLiteral, Value};

    // ==========================================================================
    // Compilation
    // ==========================================================================

    pub use pgrest_core::headers::{HeaderPairs, SINGLE_OBJECT, compile_headers};
    pub use pgrest_core::query::{
        CountType, Method, Orderer, Page, QueryState, ReturnPreference,
    };
    pub use pgrest_core::relation::{EdgeKey, Embeds, Visited, resolve_embeds, resolve_with};
    pub use pgrest_core::serialize::{
        QueryPairs, compile_query, render_filter, render_orderers, render_select,
    };
}

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{PostgrestEnum, PostgrestModel};
    pub use pgrest_core::prelude::*;
    pub use pgrest_core::schema::{ColumnResolver, ModelSchema};
}
