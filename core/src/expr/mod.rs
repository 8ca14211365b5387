//! Typed predicate expressions.
//!
//! Expressions are built from [`Column`] handles generated for each model and
//! combined with [`and`], [`or`], [`not`] or the `&`, `|`, `!` operators:
//!
//! ```ignore
//! let adults_named_bob = User::AGE.gte(18) & User::NAME.eq("bob");
//! let filter = compile_predicate(adults_named_bob.into_expr(), User::schema())?;
//! ```
//!
//! Literals are evaluated when the expression is built. Column names are only
//! resolved when the expression is compiled against a [`ColumnResolver`], which
//! is where unknown properties are reported.
//!
//! [`ColumnResolver`]: crate::schema::ColumnResolver

mod cmp;
mod column;
mod compile;
mod logical;

use core::marker::PhantomData;
use std::borrow::Cow;

use pgrest_types::{NullPosition, Operator, Ordering};
use serde_json::Value as JsonValue;

use crate::value::Value;

pub use column::Column;
pub use compile::{compile_assignment, compile_order, compile_predicate, compile_projection};
pub use logical::{and, not, or};

/// A model property referenced by an expression
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Property(pub Cow<'static, str>);

impl Property {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Property(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl<M, T> From<Column<M, T>> for Property {
    fn from(column: Column<M, T>) -> Self {
        column.property()
    }
}

impl From<&'static str> for Property {
    fn from(name: &'static str) -> Self {
        Property(Cow::Borrowed(name))
    }
}

impl From<String> for Property {
    fn from(name: String) -> Self {
        Property(Cow::Owned(name))
    }
}

/// What a method-style call is invoked on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Receiver {
    Text,
    Collection,
    Scalar,
}

/// Untyped boolean expression AST
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Compare {
        property: Property,
        operator: Operator,
        value: Value,
    },
    Call {
        property: Property,
        receiver: Receiver,
        method: Cow<'static, str>,
        argument: Value,
    },
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Not(Box<Expr>),
}

impl Expr {
    /// `property <operator> value`
    pub fn compare(
        property: impl Into<Property>,
        operator: Operator,
        value: impl Into<Value>,
    ) -> Self {
        Expr::Compare {
            property: property.into(),
            operator,
            value: value.into(),
        }
    }

    /// Method-style call such as `contains`, for dynamically built predicates
    pub fn call(
        property: impl Into<Property>,
        receiver: Receiver,
        method: impl Into<Cow<'static, str>>,
        argument: impl Into<Value>,
    ) -> Self {
        Expr::Call {
            property: property.into(),
            receiver,
            method: method.into(),
            argument: argument.into(),
        }
    }
}

/// An [`Expr`] over the properties of model `M`
pub struct Predicate<M> {
    expr: Expr,
    _model: PhantomData<fn() -> M>,
}

impl<M> Predicate<M> {
    pub fn new(expr: Expr) -> Self {
        Self {
            expr,
            _model: PhantomData,
        }
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn into_expr(self) -> Expr {
        self.expr
    }
}

impl<M> From<Expr> for Predicate<M> {
    fn from(expr: Expr) -> Self {
        Predicate::new(expr)
    }
}

impl<M> From<Predicate<M>> for Expr {
    fn from(predicate: Predicate<M>) -> Self {
        predicate.expr
    }
}

/// `property = value` for updates
pub struct Assignment<M> {
    pub property: Property,
    pub value: JsonValue,
    _model: PhantomData<fn() -> M>,
}

impl<M> Assignment<M> {
    pub fn new(property: impl Into<Property>, value: impl Into<JsonValue>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            _model: PhantomData,
        }
    }
}

/// An ordered list of properties to select
pub struct Projection<M> {
    pub properties: Vec<Property>,
    _model: PhantomData<fn() -> M>,
}

impl<M> Projection<M> {
    pub fn of<I, P>(properties: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Property>,
    {
        Self {
            properties: properties.into_iter().map(Into::into).collect(),
            _model: PhantomData,
        }
    }
}

/// Sort key for one property
pub struct OrderExpr<M> {
    pub property: Property,
    pub ordering: Ordering,
    pub null_position: NullPosition,
    _model: PhantomData<fn() -> M>,
}

impl<M> OrderExpr<M> {
    pub fn new(property: impl Into<Property>, ordering: Ordering) -> Self {
        Self {
            property: property.into(),
            ordering,
            null_position: NullPosition::First,
            _model: PhantomData,
        }
    }

    pub fn nulls_first(mut self) -> Self {
        self.null_position = NullPosition::First;
        self
    }

    pub fn nulls_last(mut self) -> Self {
        self.null_position = NullPosition::Last;
        self
    }
}

// Implemented by hand so `M` needs no bounds.
macro_rules! impl_model_scoped {
    ($ty:ident { $($field:ident),* }) => {
        impl<M> Clone for $ty<M> {
            fn clone(&self) -> Self {
                Self {
                    $($field: self.$field.clone(),)*
                    _model: PhantomData,
                }
            }
        }

        impl<M> PartialEq for $ty<M> {
            fn eq(&self, other: &Self) -> bool {
                true $(&& self.$field == other.$field)*
            }
        }

        impl<M> core::fmt::Debug for $ty<M> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_struct(stringify!($ty))
                    $(.field(stringify!($field), &self.$field))*
                    .finish()
            }
        }
    };
}

impl_model_scoped!(Predicate { expr });
impl_model_scoped!(Assignment { property, value });
impl_model_scoped!(Projection { properties });
impl_model_scoped!(OrderExpr { property, ordering, null_position });
