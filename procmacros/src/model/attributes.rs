use syn::spanned::Spanned;
use syn::{Attribute, Expr, Lit, Meta, Path, Result, Token, parse::Parse};

fn string_value(nv: &syn::MetaNameValue, key: &str) -> Result<String> {
    if let Expr::Lit(lit) = &nv.value
        && let Lit::Str(str_lit) = &lit.lit
    {
        return Ok(str_lit.value());
    }
    Err(syn::Error::new(
        nv.span(),
        format!("Expected a string literal for '{key}'"),
    ))
}

/// Parses every `#[name(...)]` attribute on an item into one `T`, merged.
pub(crate) fn parse_all<T: Parse + Default + Merge>(attrs: &[Attribute], name: &str) -> Result<T> {
    let mut merged = T::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident(name)) {
        merged.merge(attr.parse_args::<T>()?);
    }
    Ok(merged)
}

pub(crate) trait Merge {
    fn merge(&mut self, other: Self);
}

// =============================================================================
// #[table(...)]
// =============================================================================

#[derive(Default)]
pub(crate) struct TableAttributes {
    pub(crate) name: Option<String>,
}

impl Parse for TableAttributes {
    fn parse(input: syn::parse::ParseStream) -> Result<Self> {
        let mut attrs = TableAttributes::default();
        let metas = input.parse_terminated(Meta::parse, Token![,])?;

        for meta in metas {
            match meta {
                Meta::NameValue(nv) if nv.path.is_ident("name") => {
                    attrs.name = Some(string_value(&nv, "name")?);
                }
                _ => {
                    return Err(syn::Error::new(
                        meta.span(),
                        "Unrecognized table attribute.\n\
                         Supported attributes:\n\
                         - name: Resource name (e.g., #[table(name = \"users\")])",
                    ));
                }
            }
        }
        Ok(attrs)
    }
}

impl Merge for TableAttributes {
    fn merge(&mut self, other: Self) {
        self.name = other.name.or(self.name.take());
    }
}

// =============================================================================
// #[column(...)]
// =============================================================================

#[derive(Default)]
pub(crate) struct ColumnAttributes {
    pub(crate) name: Option<String>,
    pub(crate) primary_key: bool,
    pub(crate) skip: bool,
}

impl Parse for ColumnAttributes {
    fn parse(input: syn::parse::ParseStream) -> Result<Self> {
        let mut attrs = ColumnAttributes::default();
        let metas = input.parse_terminated(Meta::parse, Token![,])?;

        for meta in metas {
            match meta {
                Meta::NameValue(nv) if nv.path.is_ident("name") => {
                    attrs.name = Some(string_value(&nv, "name")?);
                }
                Meta::Path(path) if path.is_ident("primary_key") => attrs.primary_key = true,
                Meta::Path(path) if path.is_ident("skip") => attrs.skip = true,
                _ => {
                    return Err(syn::Error::new(
                        meta.span(),
                        "Unrecognized column attribute.\n\
                         Supported attributes:\n\
                         - name: Wire column name (e.g., #[column(name = \"full_name\")])\n\
                         - primary_key: Marks the primary key column\n\
                         - skip: Field is not a column",
                    ));
                }
            }
        }
        Ok(attrs)
    }
}

impl Merge for ColumnAttributes {
    fn merge(&mut self, other: Self) {
        self.name = other.name.or(self.name.take());
        self.primary_key |= other.primary_key;
        self.skip |= other.skip;
    }
}

// =============================================================================
// #[reference(...)]
// =============================================================================

#[derive(Default)]
pub(crate) struct ReferenceAttributes {
    pub(crate) model: Option<Path>,
    pub(crate) foreign_key: Option<String>,
    pub(crate) name: Option<String>,
    pub(crate) inner: bool,
    pub(crate) exclude: bool,
}

impl Parse for ReferenceAttributes {
    fn parse(input: syn::parse::ParseStream) -> Result<Self> {
        let mut attrs = ReferenceAttributes::default();
        let metas = input.parse_terminated(Meta::parse, Token![,])?;

        for meta in metas {
            match meta {
                Meta::NameValue(nv) if nv.path.is_ident("model") => {
                    let Expr::Path(path) = &nv.value else {
                        return Err(syn::Error::new(
                            nv.value.span(),
                            "Expected a model type path for 'model'",
                        ));
                    };
                    attrs.model = Some(path.path.clone());
                }
                Meta::NameValue(nv) if nv.path.is_ident("foreign_key") => {
                    attrs.foreign_key = Some(string_value(&nv, "foreign_key")?);
                }
                Meta::NameValue(nv) if nv.path.is_ident("name") => {
                    attrs.name = Some(string_value(&nv, "name")?);
                }
                Meta::Path(path) if path.is_ident("inner") => attrs.inner = true,
                Meta::Path(path) if path.is_ident("exclude") => attrs.exclude = true,
                _ => {
                    return Err(syn::Error::new(
                        meta.span(),
                        "Unrecognized reference attribute.\n\
                         Supported attributes:\n\
                         - model: Target model (e.g., #[reference(model = Post)])\n\
                         - foreign_key: Foreign key hint (e.g., foreign_key = \"author_id\")\n\
                         - name: Embed column name (defaults to the field name)\n\
                         - inner: Inner join, drops parents without a match\n\
                         - exclude: Not embedded in default projections",
                    ));
                }
            }
        }
        Ok(attrs)
    }
}

impl Merge for ReferenceAttributes {
    fn merge(&mut self, other: Self) {
        self.model = other.model.or(self.model.take());
        self.foreign_key = other.foreign_key.or(self.foreign_key.take());
        self.name = other.name.or(self.name.take());
        self.inner |= other.inner;
        self.exclude |= other.exclude;
    }
}
