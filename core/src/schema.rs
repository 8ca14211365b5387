//! Static per-model schema descriptors.
//!
//! `#[derive(PostgrestModel)]` builds one [`ModelSchema`] per struct as a
//! `static`. Relationship targets are reached through function pointers so
//! cyclic model graphs can be described without runtime registration.

/// Column metadata collaborator used by the predicate compiler
pub trait ColumnResolver {
    /// Wire column name for a model property, `None` if the property is not a column
    fn resolve(&self, property: &str) -> Option<&str>;

    /// Primary key column, when the model declares one
    fn primary_key(&self) -> Option<&str>;

    fn table_name(&self) -> &str;
}

/// A struct mapped to a PostgREST resource
pub trait Model: 'static {
    fn schema() -> &'static ModelSchema;
}

/// One mapped column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    /// Rust field name
    pub property: &'static str,
    /// Column name on the wire
    pub column: &'static str,
    pub primary_key: bool,
}

/// How an embedded resource is joined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JoinKind {
    /// Parent rows without a match are dropped (`!inner`)
    Inner,
    #[default]
    Left,
}

/// A declared foreign-key relationship to another model
#[derive(Clone, Copy)]
pub struct RelationshipDef {
    /// Rust field holding the embedded rows
    pub property: &'static str,
    /// Name the embedded rows are returned under
    pub column: &'static str,
    pub target: fn() -> &'static ModelSchema,
    pub join: JoinKind,
    /// Explicit foreign key hint; the target table name is used when absent
    pub foreign_key: Option<&'static str>,
    /// Whether default projections embed this relationship
    pub include_in_query: bool,
}

impl RelationshipDef {
    pub fn target_schema(&self) -> &'static ModelSchema {
        (self.target)()
    }
}

impl core::fmt::Debug for RelationshipDef {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RelationshipDef")
            .field("property", &self.property)
            .field("column", &self.column)
            .field("target", &self.target_schema().model)
            .field("join", &self.join)
            .field("foreign_key", &self.foreign_key)
            .field("include_in_query", &self.include_in_query)
            .finish()
    }
}

/// Everything the compiler needs to know about a model
#[derive(Debug)]
pub struct ModelSchema {
    /// Fully qualified Rust type name, used as model identity
    pub model: &'static str,
    pub table_name: &'static str,
    pub columns: &'static [ColumnDef],
    pub relationships: &'static [RelationshipDef],
}

impl ModelSchema {
    /// Wire column names in declaration order
    pub fn column_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|c| c.column)
    }

    pub fn column(&self, property: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.property == property)
    }

    pub fn relationship(&self, property: &str) -> Option<&RelationshipDef> {
        self.relationships.iter().find(|r| r.property == property)
    }
}

impl ColumnResolver for ModelSchema {
    fn resolve(&self, property: &str) -> Option<&str> {
        self.column(property).map(|c| c.column)
    }

    fn primary_key(&self) -> Option<&str> {
        self.columns.iter().find(|c| c.primary_key).map(|c| c.column)
    }

    fn table_name(&self) -> &str {
        self.table_name
    }
}
