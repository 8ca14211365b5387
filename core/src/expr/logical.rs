//! Logical operators (AND, OR, NOT).
//!
//! This module provides both function-based and operator-based logical operations:
//!
//! ```ignore
//! // Function style
//! and(condition1, condition2)
//! or(condition1, condition2)
//! not(condition)
//!
//! // Operator style (via std::ops traits)
//! condition1 & condition2   // BitAnd
//! condition1 | condition2   // BitOr
//! !condition                 // Not
//! ```
//!
//! Both styles build the same tree: each side is compiled independently and
//! wrapped in a two-child `and(...)` / `or(...)` group.

use core::ops::{BitAnd, BitOr, Not};

use super::{Expr, Predicate};

pub fn and<M>(left: Predicate<M>, right: Predicate<M>) -> Predicate<M> {
    Predicate::new(Expr::And(
        Box::new(left.into_expr()),
        Box::new(right.into_expr()),
    ))
}

pub fn or<M>(left: Predicate<M>, right: Predicate<M>) -> Predicate<M> {
    Predicate::new(Expr::Or(
        Box::new(left.into_expr()),
        Box::new(right.into_expr()),
    ))
}

pub fn not<M>(inner: Predicate<M>) -> Predicate<M> {
    Predicate::new(Expr::Not(Box::new(inner.into_expr())))
}

impl<M> BitAnd for Predicate<M> {
    type Output = Predicate<M>;

    fn bitand(self, rhs: Self) -> Self::Output {
        and(self, rhs)
    }
}

impl<M> BitOr for Predicate<M> {
    type Output = Predicate<M>;

    fn bitor(self, rhs: Self) -> Self::Output {
        or(self, rhs)
    }
}

impl<M> Not for Predicate<M> {
    type Output = Predicate<M>;

    fn not(self) -> Self::Output {
        not(self)
    }
}
