//! Two variants rendering the same discriminant would be ambiguous.

use pgrest::prelude::*;

#[derive(PostgrestEnum)]
#[repr(i32)]
enum Priority {
    Low = 1,
    Normal = 2,
    High = 2,
}

fn main() {}
