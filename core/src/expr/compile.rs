//! Expression compilation against a [`ColumnResolver`].

use pgrest_types::Operator;
use serde_json::Value as JsonValue;

use crate::error::{PgRestError, Result};
use crate::filter::Filter;
use crate::query::Orderer;
use crate::schema::ColumnResolver;
use crate::value::Value;

use super::{Assignment, Expr, OrderExpr, Projection, Property, Receiver};

fn resolve(resolver: &dyn ColumnResolver, property: &Property) -> Result<String> {
    resolver
        .resolve(property.name())
        .map(str::to_owned)
        .ok_or_else(|| {
            PgRestError::InvalidExpression(format!(
                "`{}` is not a column of `{}`",
                property.name(),
                resolver.table_name()
            ))
        })
}

/// Compiles a predicate into a [`Filter`] tree.
pub fn compile_predicate(expr: impl Into<Expr>, resolver: &dyn ColumnResolver) -> Result<Filter> {
    let result = compile_expr(expr.into(), resolver);
    if let Err(err) = &result {
        crate::pgrest_trace_reject!(err);
    }
    result
}

fn compile_expr(expr: Expr, resolver: &dyn ColumnResolver) -> Result<Filter> {
    match expr {
        Expr::Compare {
            property,
            operator,
            value,
        } => Filter::from_value(resolve(resolver, &property)?, operator, value),
        Expr::Call {
            property,
            receiver,
            method,
            argument,
        } => compile_call(&property, receiver, &method, argument, resolver),
        Expr::And(left, right) => Filter::and(vec![
            compile_expr(*left, resolver)?,
            compile_expr(*right, resolver)?,
        ]),
        Expr::Or(left, right) => Filter::or(vec![
            compile_expr(*left, resolver)?,
            compile_expr(*right, resolver)?,
        ]),
        Expr::Not(inner) => Ok(Filter::negate(compile_expr(*inner, resolver)?)),
    }
}

fn compile_call(
    property: &Property,
    receiver: Receiver,
    method: &str,
    argument: Value,
    resolver: &dyn ColumnResolver,
) -> Result<Filter> {
    if method != "contains" || receiver == Receiver::Scalar {
        return Err(PgRestError::UnsupportedOperation(format!(
            "`{method}` on `{}`",
            property.name()
        )));
    }

    let column = resolve(resolver, property)?;
    let Value::Scalar(literal) = argument else {
        let operator = match receiver {
            Receiver::Text => Operator::Like,
            _ => Operator::Contains,
        };
        return Err(PgRestError::UnsupportedOperator {
            operator,
            category: argument.category(),
        });
    };

    match receiver {
        Receiver::Text => Filter::comparison(column, Operator::Like, format!("*{literal}*")),
        _ => Filter::list(column, Operator::Contains, vec![literal]),
    }
}

/// Compiles an update assignment into `(column, value)`.
pub fn compile_assignment<M>(
    assignment: Assignment<M>,
    resolver: &dyn ColumnResolver,
) -> Result<(String, JsonValue)> {
    let column = resolve(resolver, &assignment.property)?;
    Ok((column, assignment.value))
}

/// Compiles a projection into its ordered column names.
pub fn compile_projection<M>(
    projection: &Projection<M>,
    resolver: &dyn ColumnResolver,
) -> Result<Vec<String>> {
    if projection.properties.is_empty() {
        return Err(PgRestError::InvalidExpression(
            "projection selects no columns".to_owned(),
        ));
    }
    projection
        .properties
        .iter()
        .map(|property| resolve(resolver, property))
        .collect()
}

/// Compiles a sort key into an [`Orderer`] on the root table.
pub fn compile_order<M>(order: OrderExpr<M>, resolver: &dyn ColumnResolver) -> Result<Orderer> {
    let column = resolve(resolver, &order.property)?;
    Ok(Orderer {
        foreign_table: None,
        column,
        ordering: order.ordering,
        null_position: order.null_position,
    })
}
