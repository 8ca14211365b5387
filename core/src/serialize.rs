//! Wire serializer.
//!
//! Renders a [`QueryState`] into the ordered query-string pairs PostgREST
//! reads. Each operator family has its own literal syntax:
//!
//! | Node | Rendering |
//! |------|-----------|
//! | `in` + list | `in.("a","b")` |
//! | `cs`/`cd`/`ov` + list | `cs.{a,b}` |
//! | any membership + mapping | `cs.{"k":"v"}` (compact JSON) |
//! | range operators | `sl.[1,5]` |
//! | full-text | `fts(english).query` |
//! | `like`/`ilike` | `%` rewritten to `*` |
//! | group | `or=(a.gte.0,a.lte.100)` |
//! | negation | `not.` prefix on the value, or `not.or` on a group key |

use core::fmt::Write;

use pgrest_types::Operator;
use serde_json::Value as JsonValue;

use crate::filter::{Filter, Members};
use crate::options::ClientOptions;
use crate::query::{Orderer, Page, QueryState};
use crate::relation::Embeds;

/// Ordered `(key, value)` query parameters
pub type QueryPairs = Vec<(String, String)>;

/// Compiles `state` into query parameters.
///
/// Order: static client parameters, filters, orderers, `select`,
/// `on_conflict`, pagination.
pub fn compile_query(state: &QueryState, embeds: &Embeds, options: &ClientOptions) -> QueryPairs {
    let mut pairs = QueryPairs::with_capacity(state.filters.len() + 4);

    pairs.extend(
        options
            .query_params
            .iter()
            .map(|(k, v)| (k.clone(), v.clone())),
    );
    pairs.extend(state.filters.iter().map(render_filter));
    pairs.extend(render_orderers(&state.orderers));

    if state.returns_rows() {
        pairs.push(("select".to_owned(), render_select(state.projection.as_deref(), embeds)));
    }
    if let Some(target) = &state.on_conflict {
        pairs.push(("on_conflict".to_owned(), strip_whitespace(target)));
    }
    for page in &state.pages {
        render_page(page, &mut pairs);
    }

    pairs
}

// =============================================================================
// Filters
// =============================================================================

/// Renders one filter node to its `(key, value)` pair.
pub fn render_filter(filter: &Filter) -> (String, String) {
    let (key, value, _) = render_node(filter);
    (key, value)
}

/// Returns `(key, value, grouped)`; grouped nodes nest as `key(...)` rather
/// than `key.value`.
fn render_node(filter: &Filter) -> (String, String, bool) {
    match filter {
        Filter::Comparison {
            column,
            operator,
            literal,
        } => {
            let literal = match operator {
                Operator::Like | Operator::ILike => literal.replace('%', "*"),
                _ => literal.clone(),
            };
            (column.clone(), format!("{operator}.{literal}"), false)
        }
        Filter::Membership {
            column,
            operator,
            members,
        } => (column.clone(), render_members(*operator, members), false),
        Filter::Range {
            column,
            operator,
            interval,
        } => (column.clone(), format!("{operator}.{interval}"), false),
        Filter::FullText {
            column,
            operator,
            query,
        } => (
            column.clone(),
            format!("{operator}({}).{}", query.config, query.query),
            false,
        ),
        Filter::Not(inner) => {
            let (key, value, grouped) = render_node(inner);
            if grouped {
                (format!("not.{key}"), value, true)
            } else {
                (key, format!("not.{value}"), false)
            }
        }
        Filter::Group { operator, children } => {
            let mut value = String::from("(");
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    value.push(',');
                }
                let (key, inner, grouped) = render_node(child);
                if grouped {
                    let _ = write!(value, "{key}{inner}");
                } else {
                    let _ = write!(value, "{key}.{inner}");
                }
            }
            value.push(')');
            (operator.as_str().to_owned(), value, true)
        }
    }
}

fn render_members(operator: Operator, members: &Members) -> String {
    match members {
        Members::Mapping(mapping) => {
            format!("{operator}.{}", JsonValue::Object(mapping.clone()))
        }
        Members::List(values) if operator == Operator::In => {
            let mut out = String::from("in.(");
            for (i, value) in values.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push('"');
                for ch in value.chars() {
                    if ch == '"' || ch == '\\' {
                        out.push('\\');
                    }
                    out.push(ch);
                }
                out.push('"');
            }
            out.push(')');
            out
        }
        Members::List(values) => format!("{operator}.{{{}}}", values.join(",")),
    }
}

// =============================================================================
// Ordering, projection and pagination
// =============================================================================

/// Groups orderers by scope, accumulating every key of a scope into one value.
///
/// Scopes appear in the order they were first used.
pub fn render_orderers(orderers: &[Orderer]) -> QueryPairs {
    let mut pairs = QueryPairs::new();
    for orderer in orderers {
        let key = match &orderer.foreign_table {
            Some(table) => format!("{table}.order"),
            None => "order".to_owned(),
        };
        let rendered = orderer.render();
        match pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, value)) => {
                value.push(',');
                value.push_str(&rendered);
            }
            None => pairs.push((key, rendered)),
        }
    }
    pairs
}

/// Projection text followed by embed fragments
pub fn render_select(projection: Option<&str>, embeds: &Embeds) -> String {
    let mut out = match projection {
        Some(text) => strip_whitespace(text),
        None => String::new(),
    };
    if out.is_empty() {
        out.push('*');
    }
    for fragment in &embeds.fragments {
        out.push(',');
        out.push_str(fragment);
    }
    out
}

/// Removes whitespace outside double-quoted identifiers
pub fn strip_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut quoted = false;
    for ch in text.chars() {
        if ch == '"' {
            quoted = !quoted;
        }
        if quoted || !ch.is_whitespace() {
            out.push(ch);
        }
    }
    out
}

fn render_page(page: &Page, pairs: &mut QueryPairs) {
    let key = |name: &str| match &page.foreign_table {
        Some(table) => format!("{table}.{name}"),
        None => name.to_owned(),
    };
    if let Some(limit) = page.limit {
        pairs.push((key("limit"), limit.to_string()));
    }
    if let Some(offset) = page.offset {
        pairs.push((key("offset"), offset.to_string()));
    }
}
