//! `#[reference]` must name its target model.

use pgrest::prelude::*;

#[derive(PostgrestModel)]
#[table(name = "posts")]
struct Post {
    #[column(primary_key)]
    id: i64,
    #[reference(foreign_key = "author_id")]
    author: Option<i64>,
}

fn main() {}
