use core::marker::PhantomData;
use std::borrow::Cow;

use pgrest_types::Ordering;
use serde_json::Value as JsonValue;

use super::{Assignment, OrderExpr, Property};

/// Typed handle to a property of model `M` holding values of type `T`.
///
/// `#[derive(PostgrestModel)]` emits one constant per field:
///
/// ```ignore
/// #[derive(PostgrestModel)]
/// struct User {
///     #[column(primary_key)]
///     id: i64,
///     name: String,
/// }
///
/// let by_name = User::NAME.eq("bob");
/// ```
pub struct Column<M, T> {
    name: &'static str,
    _marker: PhantomData<fn() -> (M, T)>,
}

impl<M, T> Column<M, T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    /// Rust field name of this property
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub fn property(&self) -> Property {
        Property(Cow::Borrowed(self.name))
    }

    /// `SET column = value` for updates
    pub fn set(&self, value: impl Into<JsonValue>) -> Assignment<M> {
        Assignment::new(self.property(), value)
    }

    pub fn asc(&self) -> OrderExpr<M> {
        OrderExpr::new(self.property(), Ordering::Ascending)
    }

    pub fn desc(&self) -> OrderExpr<M> {
        OrderExpr::new(self.property(), Ordering::Descending)
    }
}

impl<M, T> Clone for Column<M, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M, T> Copy for Column<M, T> {}

impl<M, T> core::fmt::Debug for Column<M, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Column").field(&self.name).finish()
    }
}
