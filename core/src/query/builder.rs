//! Fluent `QueryBuilder`: collects intent, then compiles one [`Request`].

use core::marker::PhantomData;

use pgrest_types::{NullPosition, Operator, Ordering};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::error::{PgRestError, Result};
use crate::expr::{
    Assignment, OrderExpr, Predicate, Projection, compile_assignment, compile_order,
    compile_predicate, compile_projection,
};
use crate::filter::Filter;
use crate::headers::compile_headers;
use crate::options::ClientOptions;
use crate::relation::resolve_embeds;
use crate::request::Request;
use crate::schema::Model;
use crate::serialize::compile_query;
use crate::value::Value;

use super::state::{CountType, Method, Orderer, QueryState, ReturnPreference};

// =============================================================================
// QueryBuilder
// =============================================================================

/// Query builder for model `M`.
///
/// Raw methods take wire column names; typed ones (`r#where`, `columns`,
/// `order_by`, `set`) take expressions over `M` and resolve them through
/// `M::schema()`. Every method consumes `self`, so a builder is only ever
/// mutated by the chain that owns it.
///
/// ```ignore
/// let request = QueryBuilder::<User>::new()
///     .r#where(User::AGE.gte(18))?
///     .order_by(User::NAME.asc())?
///     .limit(10)
///     .get()?;
/// ```
pub struct QueryBuilder<M> {
    state: QueryState,
    options: ClientOptions,
    _model: PhantomData<fn() -> M>,
}

impl<M: Model> QueryBuilder<M> {
    pub fn new() -> Self {
        Self::with_options(ClientOptions::default())
    }

    pub fn with_options(options: ClientOptions) -> Self {
        Self {
            state: QueryState::new(M::schema().table_name),
            options,
            _model: PhantomData,
        }
    }

    /// Intent collected so far
    pub fn state(&self) -> &QueryState {
        &self.state
    }

    // =========================================================================
    // Filters
    // =========================================================================

    /// `column=<operator>.<value>`
    pub fn filter(
        mut self,
        column: impl Into<String>,
        operator: Operator,
        value: impl Into<Value>,
    ) -> Result<Self> {
        let filter = Filter::from_value(column, operator, value.into())?;
        self.state.filters.push(filter);
        Ok(self)
    }

    /// `column=not.<operator>.<value>`
    pub fn not(
        mut self,
        column: impl Into<String>,
        operator: Operator,
        value: impl Into<Value>,
    ) -> Result<Self> {
        let filter = Filter::from_value(column, operator, value.into())?;
        self.state.filters.push(Filter::negate(filter));
        Ok(self)
    }

    /// `or=(...)` over `filters`
    pub fn or(mut self, filters: Vec<Filter>) -> Result<Self> {
        self.state.filters.push(Filter::or(filters)?);
        Ok(self)
    }

    /// `and=(...)` over `filters`
    pub fn and(mut self, filters: Vec<Filter>) -> Result<Self> {
        self.state.filters.push(Filter::and(filters)?);
        Ok(self)
    }

    /// Adds a typed predicate
    pub fn r#where(mut self, predicate: Predicate<M>) -> Result<Self> {
        let filter = compile_predicate(predicate, M::schema())?;
        self.state.filters.push(filter);
        Ok(self)
    }

    /// One `eq` filter per `(column, value)` pair
    pub fn r#match<I, K, V>(mut self, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (column, value) in pairs {
            let filter = Filter::from_value(column, Operator::Equals, value.into())?;
            self.state.filters.push(filter);
        }
        Ok(self)
    }

    // =========================================================================
    // Projection
    // =========================================================================

    /// Raw `select` text; embed fragments are still appended
    pub fn select(mut self, columns: impl Into<String>) -> Self {
        self.state.projection = Some(columns.into());
        self
    }

    /// Typed projection
    pub fn columns(mut self, projection: Projection<M>) -> Result<Self> {
        let columns = compile_projection(&projection, M::schema())?;
        self.state.projection = Some(columns.join(","));
        Ok(self)
    }

    // =========================================================================
    // Ordering and pagination
    // =========================================================================

    pub fn order(
        mut self,
        column: impl Into<String>,
        ordering: Ordering,
        null_position: NullPosition,
    ) -> Self {
        self.state.orderers.push(Orderer {
            foreign_table: None,
            column: column.into(),
            ordering,
            null_position,
        });
        self
    }

    /// Typed sort key on the root table
    pub fn order_by(mut self, order: OrderExpr<M>) -> Result<Self> {
        let orderer = compile_order(order, M::schema())?;
        self.state.orderers.push(orderer);
        Ok(self)
    }

    /// Sort key on an embedded resource
    pub fn order_foreign(
        mut self,
        foreign_table: impl Into<String>,
        column: impl Into<String>,
        ordering: Ordering,
        null_position: NullPosition,
    ) -> Self {
        self.state.orderers.push(Orderer {
            foreign_table: Some(foreign_table.into()),
            column: column.into(),
            ordering,
            null_position,
        });
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.state.page_mut(None).limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.state.page_mut(None).offset = Some(offset);
        self
    }

    pub fn limit_foreign(mut self, foreign_table: &str, limit: u64) -> Self {
        self.state.page_mut(Some(foreign_table)).limit = Some(limit);
        self
    }

    pub fn offset_foreign(mut self, foreign_table: &str, offset: u64) -> Self {
        self.state.page_mut(Some(foreign_table)).offset = Some(offset);
        self
    }

    /// Inclusive row range, sent as a `Range` header
    pub fn range(mut self, from: u64, to: u64) -> Result<Self> {
        if to < from {
            return Err(PgRestError::InvalidExpression(format!(
                "row range {from}-{to} ends before it starts"
            )));
        }
        self.state.rows = Some((from, to));
        Ok(self)
    }

    // =========================================================================
    // Response shape
    // =========================================================================

    /// Expect exactly one row, returned as an object
    pub fn single(mut self) -> Self {
        self.state.single = true;
        self
    }

    pub fn count(mut self, count: CountType) -> Self {
        self.state.count = Some(count);
        self
    }

    pub fn returning(mut self, returning: ReturnPreference) -> Self {
        self.state.returning = Some(returning);
        self
    }

    /// Conflict target for upserts, comma separated columns
    pub fn on_conflict(mut self, columns: impl Into<String>) -> Self {
        self.state.on_conflict = Some(columns.into());
        self
    }

    // =========================================================================
    // Updates
    // =========================================================================

    /// Typed `SET`
    pub fn set(mut self, assignment: Assignment<M>) -> Result<Self> {
        let (column, value) = compile_assignment(assignment, M::schema())?;
        self.state.assignments.insert(column, value);
        Ok(self)
    }

    /// `SET` by wire column name
    pub fn set_value(mut self, column: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.state.assignments.insert(column.into(), value.into());
        self
    }

    // =========================================================================
    // Verbs
    // =========================================================================

    pub fn get(self) -> Result<Request> {
        self.finish(Method::Get)
    }

    /// `HEAD`: counts and headers only
    pub fn head(self) -> Result<Request> {
        self.finish(Method::Head)
    }

    pub fn insert<T: Serialize + ?Sized>(mut self, rows: &T) -> Result<Request> {
        self.state.body = Some(serde_json::to_value(rows)?);
        self.finish(Method::Post)
    }

    /// Insert, merging rows that collide on the conflict target
    pub fn upsert<T: Serialize + ?Sized>(mut self, rows: &T) -> Result<Request> {
        self.state.upsert = true;
        self.state.body = Some(serde_json::to_value(rows)?);
        self.finish(Method::Post)
    }

    /// `PATCH` with the collected assignments
    pub fn update(mut self) -> Result<Request> {
        if self.state.assignments.is_empty() {
            return Err(PgRestError::InvalidExpression(
                "update sets no columns".to_owned(),
            ));
        }
        let assignments = core::mem::take(&mut self.state.assignments);
        self.state.body = Some(JsonValue::Object(assignments));
        self.finish(Method::Patch)
    }

    pub fn delete(self) -> Result<Request> {
        self.finish(Method::Delete)
    }

    fn finish(mut self, method: Method) -> Result<Request> {
        self.state.method = method;
        let state = self.state.take();

        let embeds = resolve_embeds(M::schema());
        let query = compile_query(&state, &embeds, &self.options);
        let headers = compile_headers(&state, &self.options);

        Ok(Request::new(
            method,
            format!("/{}", state.table),
            query,
            headers,
            state.body,
        ))
    }
}

impl<M: Model> Default for QueryBuilder<M> {
    fn default() -> Self {
        Self::new()
    }
}
