//! Models cannot be generic.

use pgrest::prelude::*;

#[derive(PostgrestModel)]
struct Wrapper<T> {
    #[column(primary_key)]
    id: i64,
    inner: T,
}

fn main() {}
