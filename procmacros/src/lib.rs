extern crate proc_macro;

mod enums;
mod model;
mod paths;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Builds the static schema descriptor and typed column handles for a model.
///
/// # Attributes
///
/// - `#[table(name = "...")]` on the struct: resource name, defaults to the
///   snake_case struct name
/// - `#[column(name = "...", primary_key)]` on a field: wire column name
///   (defaults to the field name) and primary key marker
/// - `#[column(skip)]`: the field is not a column
/// - `#[reference(model = Target, foreign_key = "...", name = "...", inner, exclude)]`:
///   the field holds embedded rows of `Target`
///
/// Every field also gets a `Column<Self, FieldType>` constant named in
/// SCREAMING_SNAKE_CASE for the predicate DSL.
///
/// # Example
///
/// ```ignore
/// #[derive(PostgrestModel)]
/// #[table(name = "posts")]
/// struct Post {
///     #[column(primary_key)]
///     id: i64,
///     title: String,
///     #[reference(model = User, foreign_key = "author_id", inner)]
///     author: Option<User>,
/// }
///
/// let recent = Post::TITLE.ilike("%rust%") & Post::ID.gt(100);
/// ```
#[proc_macro_derive(PostgrestModel, attributes(table, column, reference))]
pub fn postgrest_model_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match model::generate_model(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Implements `ToLiteral` and `From<Self> for Value` for a fieldless enum.
///
/// - Enums with `#[repr(i32)]`, `#[repr(u8)]`, etc. render their integer
///   discriminant
/// - Enums without a repr attribute render the variant name
///
/// # Example
///
/// ```ignore
/// #[derive(PostgrestEnum)]
/// enum Role {
///     User,
///     Admin,
/// }
/// // Role::Admin renders as "Admin"
///
/// #[derive(PostgrestEnum)]
/// #[repr(i32)]
/// enum Status {
///     Active = 1,
///     Banned = -1,
/// }
/// // Status::Banned renders as "-1"
/// ```
#[proc_macro_derive(PostgrestEnum)]
pub fn postgrest_enum_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match enums::generate_enum(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
