//! Per-request query intent.

use pgrest_types::{NullPosition, Ordering};
use serde_json::{Map, Value as JsonValue};

use crate::filter::Filter;

// =============================================================================
// Verbs and preferences
// =============================================================================

/// HTTP verb a compiled request is issued with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    #[default]
    Get,
    Head,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// `GET` and `HEAD` read; everything else writes
    pub const fn is_read(&self) -> bool {
        matches!(self, Method::Get | Method::Head)
    }
}

impl core::fmt::Display for Method {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row counting strategy requested through `Prefer: count=...`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountType {
    Exact,
    Planned,
    Estimated,
}

impl CountType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            CountType::Exact => "exact",
            CountType::Planned => "planned",
            CountType::Estimated => "estimated",
        }
    }
}

/// What a write returns, sent as `Prefer: return=...`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnPreference {
    Minimal,
    HeadersOnly,
    Representation,
}

impl ReturnPreference {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ReturnPreference::Minimal => "minimal",
            ReturnPreference::HeadersOnly => "headers-only",
            ReturnPreference::Representation => "representation",
        }
    }
}

// =============================================================================
// Ordering and pagination
// =============================================================================

/// One sort key, optionally scoped to an embedded resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orderer {
    /// Embedded resource the key applies to, `None` for the root table
    pub foreign_table: Option<String>,
    pub column: String,
    pub ordering: Ordering,
    pub null_position: NullPosition,
}

impl Orderer {
    /// `column.asc.nullsfirst`
    pub fn render(&self) -> String {
        format!(
            "{}.{}.{}",
            self.column,
            self.ordering.as_str(),
            self.null_position.as_str()
        )
    }
}

/// `limit`/`offset` for the root table or one embedded resource
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub foreign_table: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

// =============================================================================
// QueryState
// =============================================================================

/// Everything one fluent chain has asked for.
///
/// Created per chain, compiled once. [`QueryState::take`] hands the state to
/// the compiler and leaves a fresh one for the same table behind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryState {
    pub table: String,
    pub method: Method,
    /// Caller supplied `select` text; `None` selects `*`
    pub projection: Option<String>,
    /// Implicitly AND-ed, in insertion order
    pub filters: Vec<Filter>,
    pub orderers: Vec<Orderer>,
    pub pages: Vec<Page>,
    pub on_conflict: Option<String>,
    /// Update assignments, column to value, in insertion order
    pub assignments: Map<String, JsonValue>,
    /// Inclusive row range sent through the `Range` header
    pub rows: Option<(u64, u64)>,
    pub count: Option<CountType>,
    pub returning: Option<ReturnPreference>,
    /// Expect exactly one row back
    pub single: bool,
    /// Insert merges duplicates instead of failing
    pub upsert: bool,
    pub body: Option<JsonValue>,
}

impl QueryState {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    /// Moves the accumulated intent out, resetting `self` for reuse
    pub fn take(&mut self) -> QueryState {
        let fresh = QueryState::new(self.table.clone());
        core::mem::replace(self, fresh)
    }

    /// Page for `foreign_table`, created on first use
    pub fn page_mut(&mut self, foreign_table: Option<&str>) -> &mut Page {
        let index = match self
            .pages
            .iter()
            .position(|p| p.foreign_table.as_deref() == foreign_table)
        {
            Some(index) => index,
            None => {
                self.pages.push(Page {
                    foreign_table: foreign_table.map(str::to_owned),
                    ..Page::default()
                });
                self.pages.len() - 1
            }
        };
        &mut self.pages[index]
    }

    /// Whether the response carries rows and therefore needs `select`
    pub fn returns_rows(&self) -> bool {
        self.method.is_read() || self.projection.is_some()
    }
}
