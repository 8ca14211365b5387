//! At most one field may be the primary key.

use pgrest::prelude::*;

#[derive(PostgrestModel)]
#[table(name = "pairs")]
struct Pair {
    #[column(primary_key)]
    left: i64,
    #[column(primary_key)]
    right: i64,
}

fn main() {}
