mod common;

use common::*;
use pgrest::core::{Method, Projection};
use pgrest::error::PgRestError;
use pgrest::prelude::*;
use serde::Serialize;
use serde_json::json;

const BASE: &str = "https://db.example.com/rest/v1";

#[test]
fn test_get_with_filters_order_and_pagination() -> pgrest::Result<()> {
    let request = QueryBuilder::<User>::new()
        .r#where(User::AGE.gte(18))?
        .filter("role", Operator::Equals, "Admin")?
        .order_by(User::NAME.asc())?
        .order("id", Ordering::Descending, NullPosition::Last)
        .limit(10)
        .offset(20)
        .get()?;

    assert_eq!(request.method, Method::Get);
    assert_eq!(request.path, "/users");
    assert_eq!(
        request.query,
        [
            pair("age", "gte.18"),
            pair("role", "eq.Admin"),
            pair("order", "full_name.asc.nullsfirst,id.desc.nullslast"),
            pair("select", "*"),
            pair("limit", "10"),
            pair("offset", "20"),
        ]
    );
    assert!(request.headers.is_empty());
    assert_eq!(request.body, None);
    Ok(())
}

#[test]
fn test_get_embeds_relationships() -> pgrest::Result<()> {
    let request = QueryBuilder::<Category>::new()
        .select("id, name")
        .order_foreign("parent", "name", Ordering::Ascending, NullPosition::First)
        .limit_foreign("parent", 1)
        .get()?;

    assert_eq!(
        request.query,
        [
            pair("parent.order", "name.asc.nullsfirst"),
            pair("select", "id,name,parent:parent_id(id,name,parent_id)"),
            pair("parent.limit", "1"),
        ]
    );
    Ok(())
}

#[test]
fn test_or_and_not_groups() -> pgrest::Result<()> {
    let request = QueryBuilder::<Post>::new()
        .or(vec![
            Filter::comparison("views", Operator::GreaterThanOrEqual, "0")?,
            Filter::comparison("views", Operator::LessThanOrEqual, "100")?,
        ])?
        .not("title", Operator::Equals, "draft")?
        .and(vec![Filter::is_null("body")])?
        .select("id")
        .get()?;

    assert_eq!(request.param("or"), Some("(views.gte.0,views.lte.100)"));
    assert_eq!(request.param("title"), Some("not.eq.draft"));
    assert_eq!(request.param("and"), Some("(body.is.null)"));
    Ok(())
}

#[test]
fn test_match_adds_equality_filters() -> pgrest::Result<()> {
    let request = QueryBuilder::<User>::new()
        .r#match([("full_name", "ann"), ("role", "Member")])?
        .get()?;

    assert_eq!(request.param("full_name"), Some("eq.ann"));
    assert_eq!(request.param("role"), Some("eq.Member"));
    Ok(())
}

#[test]
fn test_typed_projection() -> pgrest::Result<()> {
    let request = QueryBuilder::<User>::new()
        .columns(Projection::of([User::ID.property(), User::NAME.property()]))?
        .get()?;
    assert_eq!(request.param("select"), Some("id,full_name"));

    let err = QueryBuilder::<User>::new()
        .columns(Projection::of([User::CACHED_LABEL]))
        .err();
    assert!(matches!(err, Some(PgRestError::InvalidExpression(_))));
    Ok(())
}

#[test]
fn test_update_sends_assignments() -> pgrest::Result<()> {
    let request = QueryBuilder::<User>::new()
        .set(User::NAME.set("Ann"))?
        .set(User::AGE.set(31))?
        .set_value("role", "Admin")
        .r#where(User::ID.eq(7))?
        .update()?;

    assert_eq!(request.method, Method::Patch);
    assert_eq!(request.query, [pair("id", "eq.7")]);
    assert_eq!(
        request.body,
        Some(json!({"full_name": "Ann", "age": 31, "role": "Admin"}))
    );

    let err = QueryBuilder::<User>::new().update().unwrap_err();
    assert!(matches!(err, PgRestError::InvalidExpression(_)));
    Ok(())
}

#[derive(Serialize)]
struct NewPost<'a> {
    title: &'a str,
    author_id: i64,
}

#[test]
fn test_insert_and_upsert() -> pgrest::Result<()> {
    let rows = [NewPost {
        title: "hello",
        author_id: 1,
    }];

    let request = QueryBuilder::<Post>::new().insert(&rows)?;
    assert_eq!(request.method, Method::Post);
    assert!(request.query.is_empty());
    assert_eq!(request.header("Prefer"), None);
    assert_eq!(
        request.body,
        Some(json!([{"title": "hello", "author_id": 1}]))
    );

    let request = QueryBuilder::<Post>::new()
        .on_conflict("title, author_id")
        .select("id")
        .upsert(&rows)?;
    assert_eq!(
        request.query,
        [
            pair(
                "select",
                "id,author:author_id!inner(id,full_name,email,age,tags,role),\
                 comments(id,body,post_id,post:post_id(id,title,body,author_id,views))"
            ),
            pair("on_conflict", "title,author_id"),
        ]
    );
    assert_eq!(
        request.header("prefer"),
        Some("return=representation,resolution=merge-duplicates")
    );
    Ok(())
}

#[test]
fn test_delete_and_head() -> pgrest::Result<()> {
    let request = QueryBuilder::<Comment>::new()
        .filter("id", Operator::In, vec![1, 2, 3])?
        .returning(ReturnPreference::Minimal)
        .delete()?;
    assert_eq!(request.method, Method::Delete);
    assert_eq!(request.query, [pair("id", r#"in.("1","2","3")"#)]);
    assert_eq!(request.header("Prefer"), Some("return=minimal"));

    let request = QueryBuilder::<Comment>::new()
        .count(CountType::Exact)
        .head()?;
    assert_eq!(request.method, Method::Head);
    assert_eq!(request.header("Prefer"), Some("count=exact"));
    Ok(())
}

#[test]
fn test_single_range_and_profile() -> pgrest::Result<()> {
    let options = ClientOptions::default()
        .with_schema("api")
        .with_header("apikey", "anon")
        .with_query_param("apikey", "anon");

    let request = QueryBuilder::<User>::with_options(options)
        .r#where(User::ID.eq(1))?
        .range(0, 24)?
        .single()
        .get()?;

    assert_eq!(request.query[0], pair("apikey", "anon"));
    assert_eq!(request.header("Accept-Profile"), Some("api"));
    assert_eq!(
        request.header("Accept"),
        Some("application/vnd.pgrst.object+json")
    );
    assert_eq!(request.header("Range"), Some("0-24"));
    assert_eq!(request.header("Range-Unit"), Some("items"));

    assert!(QueryBuilder::<User>::new().range(5, 1).is_err());
    Ok(())
}

#[test]
fn test_url_encoding() -> pgrest::Result<()> {
    let request = QueryBuilder::<User>::new()
        .r#where(User::NAME.in_list(["Ann Lee", "Bo"]))?
        .r#where(User::TAGS.contains("a&b".to_string()))?
        .get()?;

    assert_eq!(
        request.url(BASE),
        "https://db.example.com/rest/v1/users\
         ?full_name=in.(%22Ann%20Lee%22,%22Bo%22)&tags=cs.%7Ba%26b%7D&select=*"
    );
    Ok(())
}

#[test]
fn test_builder_errors_surface_early() {
    let err = QueryBuilder::<User>::new()
        .filter("age", Operator::In, 3)
        .err();
    assert!(matches!(err, Some(PgRestError::UnsupportedOperator { .. })));

    let err = QueryBuilder::<User>::new()
        .order_by(User::POSTS.desc())
        .err();
    assert!(matches!(err, Some(PgRestError::InvalidExpression(_))));

    let err = QueryBuilder::<Post>::new().or(vec![]).err();
    assert!(matches!(err, Some(PgRestError::InvalidExpression(_))));
}
