mod common;

use common::*;
use pgrest::core::{Column, JoinKind};
use pgrest::prelude::*;

#[allow(dead_code)]
#[derive(PostgrestModel)]
struct AuditLogEntry {
    #[column(primary_key, name = "entry_id")]
    id: i64,
    r#type: String,
    #[column(skip)]
    scratch: Vec<u8>,
}

#[test]
fn test_default_table_name_is_snake_case() {
    assert_eq!(AuditLogEntry::schema().table_name, "audit_log_entry");
    assert_eq!(
        AuditLogEntry::schema().column_names().collect::<Vec<_>>(),
        ["entry_id", "type"]
    );
    assert_eq!(AuditLogEntry::schema().primary_key(), Some("entry_id"));
}

#[test]
fn test_column_constants() {
    let id: Column<AuditLogEntry, i64> = AuditLogEntry::ID;
    assert_eq!(id.name(), "id");
    assert_eq!(AuditLogEntry::TYPE.name(), "type");
    assert_eq!(AuditLogEntry::SCRATCH.name(), "scratch");
    assert_eq!(AuditLogEntry::schema().resolve("id"), Some("entry_id"));
    assert_eq!(AuditLogEntry::schema().resolve("scratch"), None);
}

#[test]
fn test_model_identity_is_module_qualified() {
    assert!(User::schema().model.ends_with("::User"));
    assert_ne!(User::schema().model, Post::schema().model);
}

#[test]
fn test_relationship_descriptors() {
    let author = Post::schema().relationship("author").unwrap();
    assert_eq!(author.column, "author");
    assert_eq!(author.foreign_key, Some("author_id"));
    assert_eq!(author.join, JoinKind::Inner);
    assert!(author.include_in_query);
    assert_eq!(author.target_schema().table_name, "users");

    let comments = Post::schema().relationship("comments").unwrap();
    assert_eq!(comments.foreign_key, None);
    assert_eq!(comments.join, JoinKind::Left);

    let posts = User::schema().relationship("posts").unwrap();
    assert!(!posts.include_in_query);
}
