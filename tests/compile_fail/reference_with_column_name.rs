//! A relationship field is not a column and cannot be renamed as one.

use pgrest::prelude::*;

#[derive(PostgrestModel)]
#[table(name = "authors")]
struct Author {
    #[column(primary_key)]
    id: i64,
}

#[derive(PostgrestModel)]
#[table(name = "posts")]
struct Post {
    #[column(primary_key)]
    id: i64,
    #[column(name = "writer")]
    #[reference(model = Author, foreign_key = "author_id")]
    author: Option<Author>,
}

fn main() {}
