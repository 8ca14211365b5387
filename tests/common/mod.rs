//! Shared models for the integration tests.

#![allow(dead_code)]

use pgrest::prelude::*;

// =============================================================================
// Enums
// =============================================================================

#[derive(PostgrestEnum, Debug, Clone, Copy, PartialEq)]
pub enum Role {
    Member,
    Admin,
}

#[derive(PostgrestEnum, Debug, Clone, Copy, PartialEq)]
#[repr(i16)]
pub enum Status {
    Banned = -1,
    Inactive = 3,
    Active,
}

// =============================================================================
// Users, posts and comments
// =============================================================================

#[derive(PostgrestModel, Debug, Clone)]
#[table(name = "users")]
pub struct User {
    #[column(primary_key)]
    pub id: i64,
    #[column(name = "full_name")]
    pub name: String,
    pub email: Option<String>,
    pub age: i32,
    pub tags: Vec<String>,
    pub role: Role,
    #[column(skip)]
    pub cached_label: Option<String>,
    #[reference(model = Post, foreign_key = "author_id", exclude)]
    pub posts: Vec<Post>,
}

#[derive(PostgrestModel, Debug, Clone)]
#[table(name = "posts")]
pub struct Post {
    #[column(primary_key)]
    pub id: i64,
    pub title: String,
    pub body: Option<String>,
    pub author_id: i64,
    pub views: i64,
    #[reference(model = User, foreign_key = "author_id", name = "author", inner)]
    pub author: Option<User>,
    #[reference(model = Comment)]
    pub comments: Vec<Comment>,
}

#[derive(PostgrestModel, Debug, Clone)]
#[table(name = "comments")]
pub struct Comment {
    #[column(primary_key)]
    pub id: i64,
    pub body: String,
    pub post_id: i64,
    #[reference(model = Post, foreign_key = "post_id", name = "post")]
    pub post: Option<Post>,
}

// =============================================================================
// Self reference
// =============================================================================

#[derive(PostgrestModel, Debug, Clone)]
#[table(name = "categories")]
pub struct Category {
    #[column(primary_key)]
    pub id: i64,
    pub name: String,
    pub parent_id: Option<i64>,
    #[reference(model = Category, foreign_key = "parent_id", name = "parent")]
    pub parent: Option<Box<Category>>,
}

// =============================================================================
// Diamond: shipment -> customer -> address, shipment -> warehouse -> address
// =============================================================================

#[derive(PostgrestModel, Debug, Clone)]
pub struct Shipment {
    #[column(primary_key)]
    pub id: i64,
    #[reference(model = Customer, foreign_key = "customer_id")]
    pub customer: Option<Customer>,
    #[reference(model = Warehouse, foreign_key = "warehouse_id")]
    pub warehouse: Option<Warehouse>,
}

#[derive(PostgrestModel, Debug, Clone)]
#[table(name = "customers")]
pub struct Customer {
    #[column(primary_key)]
    pub id: i64,
    pub name: String,
    pub address_id: i64,
    #[reference(model = Address, foreign_key = "address_id", name = "address")]
    pub address: Option<Address>,
}

#[derive(PostgrestModel, Debug, Clone)]
#[table(name = "warehouses")]
pub struct Warehouse {
    #[column(primary_key)]
    pub id: i64,
    pub code: String,
    pub address_id: i64,
    #[reference(model = Address, foreign_key = "address_id", name = "address")]
    pub address: Option<Address>,
}

#[derive(PostgrestModel, Debug, Clone)]
#[table(name = "addresses")]
pub struct Address {
    #[column(primary_key)]
    pub id: i64,
    pub city: String,
}

// =============================================================================
// Helpers
// =============================================================================

/// Renders the compiled filter of a typed predicate over `M`
pub fn render<M: Model>(predicate: Predicate<M>) -> (String, String) {
    let filter = pgrest::core::compile_predicate(predicate, M::schema()).unwrap();
    pgrest::core::render_filter(&filter)
}

pub fn pair(key: &str, value: &str) -> (String, String) {
    (key.to_owned(), value.to_owned())
}
