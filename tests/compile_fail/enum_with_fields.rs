//! Only fieldless enums have a literal form.

use pgrest::prelude::*;

#[derive(PostgrestEnum)]
enum Shape {
    Point,
    Circle(f64),
}

fn main() {}
