//! Resource embedding.
//!
//! Expands a model's declared relationships into the nested `select`
//! fragments PostgREST uses to return related rows inline, e.g.
//! `author:user_id!inner(id,name)`.

use core::fmt::Write;

use hashbrown::HashSet;

use crate::schema::{JoinKind, ModelSchema, RelationshipDef};

/// Identity of a relationship edge: target table, embed column, target model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    pub table: &'static str,
    pub column: &'static str,
    pub model: &'static str,
}

impl EdgeKey {
    pub fn of(edge: &RelationshipDef) -> Self {
        let target = edge.target_schema();
        Self {
            table: target.table_name,
            column: edge.column,
            model: target.model,
        }
    }
}

/// Edges already expanded during one resolution walk
pub type Visited = HashSet<EdgeKey>;

/// A model's own columns plus the embed fragments of its relationships
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Embeds {
    pub columns: Vec<&'static str>,
    pub fragments: Vec<String>,
}

impl Embeds {
    /// Columns followed by fragments, comma separated
    pub fn selector(&self) -> String {
        let mut out = String::new();
        for (i, part) in self
            .columns
            .iter()
            .copied()
            .chain(self.fragments.iter().map(String::as_str))
            .enumerate()
        {
            if i > 0 {
                out.push(',');
            }
            out.push_str(part);
        }
        if out.is_empty() {
            out.push('*');
        }
        out
    }
}

/// Resolves every included relationship reachable from `schema`.
///
/// Each edge is expanded at most once per walk: once an edge has been seen
/// on any path it is skipped everywhere else. This keeps self references and
/// cycles finite, and means a relationship reachable along two paths is only
/// embedded along the first one.
pub fn resolve_embeds(schema: &'static ModelSchema) -> Embeds {
    let (embeds, _) = resolve_with(schema, Visited::new());
    crate::pgrest_trace_embed!(schema.table_name, embeds.fragments.len());
    embeds
}

/// Resolves `schema` against an existing visited set, returning the grown set.
pub fn resolve_with(schema: &'static ModelSchema, mut visited: Visited) -> (Embeds, Visited) {
    let mut fragments = Vec::new();

    for edge in schema.relationships.iter().filter(|e| e.include_in_query) {
        if !visited.insert(EdgeKey::of(edge)) {
            continue;
        }
        let target = edge.target_schema();
        let (nested, grown) = resolve_with(target, visited);
        visited = grown;
        fragments.push(render_fragment(edge, target, &nested));
    }

    let embeds = Embeds {
        columns: schema.column_names().collect(),
        fragments,
    };
    (embeds, visited)
}

fn render_fragment(edge: &RelationshipDef, target: &ModelSchema, nested: &Embeds) -> String {
    let mut out = String::with_capacity(32);
    match edge.foreign_key {
        Some(fk) => {
            let _ = write!(out, "{}:{}", edge.column, fk);
        }
        None => out.push_str(target.table_name),
    }
    if edge.join == JoinKind::Inner {
        out.push_str("!inner");
    }
    out.push('(');
    out.push_str(&nested.selector());
    out.push(')');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnDef;

    const ID: ColumnDef = ColumnDef {
        property: "id",
        column: "id",
        primary_key: true,
    };

    fn node() -> &'static ModelSchema {
        &NODE
    }

    static NODE: ModelSchema = ModelSchema {
        model: "tests::Node",
        table_name: "nodes",
        columns: &[ID],
        relationships: &[RelationshipDef {
            property: "parent",
            column: "parent",
            target: node,
            join: JoinKind::Left,
            foreign_key: Some("parent_id"),
            include_in_query: true,
        }],
    };

    #[test]
    fn test_self_reference_embeds_one_level() {
        let embeds = resolve_embeds(&NODE);
        assert_eq!(embeds.columns, ["id"]);
        assert_eq!(embeds.fragments, ["parent:parent_id(id)"]);
    }

    #[test]
    fn test_preseeded_visited_suppresses_edge() {
        let mut visited = Visited::new();
        visited.insert(EdgeKey::of(&NODE.relationships[0]));
        let (embeds, visited) = resolve_with(&NODE, visited);
        assert!(embeds.fragments.is_empty());
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_empty_selector_is_star() {
        assert_eq!(Embeds::default().selector(), "*");
    }
}
