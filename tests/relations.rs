mod common;

use common::*;
use pgrest::core::{EdgeKey, Visited, resolve_embeds, resolve_with};
use pgrest::prelude::*;

#[test]
fn test_schema_columns_skip_references() {
    let schema = User::schema();
    assert_eq!(schema.table_name, "users");
    assert_eq!(
        schema.column_names().collect::<Vec<_>>(),
        ["id", "full_name", "email", "age", "tags", "role"]
    );
    assert_eq!(schema.primary_key(), Some("id"));
    assert_eq!(schema.relationships.len(), 1);
    assert!(!schema.relationships[0].include_in_query);
}

#[test]
fn test_excluded_relationship_is_not_embedded() {
    let embeds = resolve_embeds(User::schema());
    assert!(embeds.fragments.is_empty());
}

#[test]
fn test_foreign_key_and_table_fragments() {
    let embeds = resolve_embeds(Post::schema());
    assert_eq!(embeds.columns, ["id", "title", "body", "author_id", "views"]);
    assert_eq!(
        embeds.fragments,
        [
            "author:author_id!inner(id,full_name,email,age,tags,role)",
            "comments(id,body,post_id,post:post_id(id,title,body,author_id,views))",
        ]
    );
}

#[test]
fn test_self_reference_terminates() {
    let embeds = resolve_embeds(Category::schema());
    assert_eq!(embeds.fragments, ["parent:parent_id(id,name,parent_id)"]);
}

#[test]
fn test_two_model_cycle_terminates() {
    let embeds = resolve_embeds(Comment::schema());
    assert_eq!(
        embeds.fragments,
        ["post:post_id(id,title,body,author_id,views,\
          author:author_id!inner(id,full_name,email,age,tags,role),comments(id,body,post_id))"]
    );
}

// A relationship reachable along two paths is embedded only on the first.
#[test]
fn test_diamond_embeds_shared_edge_once() {
    let embeds = resolve_embeds(Shipment::schema());
    assert_eq!(Shipment::schema().table_name, "shipment");
    assert_eq!(
        embeds.fragments,
        [
            "customer:customer_id(id,name,address_id,address:address_id(id,city))",
            "warehouse:warehouse_id(id,code,address_id)",
        ]
    );
}

#[test]
fn test_visited_set_is_returned_grown() {
    let (embeds, visited) = resolve_with(Shipment::schema(), Visited::new());
    assert_eq!(embeds.fragments.len(), 2);
    assert_eq!(visited.len(), 3);

    let address = &Customer::schema().relationships[0];
    assert!(visited.contains(&EdgeKey::of(address)));
}
