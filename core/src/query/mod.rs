//! Query state and the fluent builder over it.
//!
//! The pipeline: [`QueryBuilder`] records filters, ordering, projection and
//! pagination into a [`QueryState`]. A terminal verb resolves the model's
//! embeds, runs the wire serializer and header compiler, and returns a
//! [`Request`](crate::request::Request).

mod builder;
mod state;

pub use builder::QueryBuilder;
pub use state::{CountType, Method, Orderer, Page, QueryState, ReturnPreference};
