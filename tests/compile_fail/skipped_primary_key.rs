//! A skipped field cannot be the primary key.

use pgrest::prelude::*;

#[derive(PostgrestModel)]
#[table(name = "sessions")]
struct Session {
    #[column(primary_key, skip)]
    token: String,
    user_id: i64,
}

fn main() {}
