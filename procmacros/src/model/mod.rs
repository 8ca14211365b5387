//! `#[derive(PostgrestModel)]` code generation.

mod attributes;

use heck::{ToShoutySnakeCase, ToSnakeCase};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Result};

use crate::paths::{core as core_paths, std as std_paths};
use attributes::{ColumnAttributes, ReferenceAttributes, TableAttributes, parse_all};

/// One field of the model after attribute parsing
enum FieldKind {
    Column {
        column: String,
        primary_key: bool,
    },
    Reference(ReferenceAttributes),
    Skipped,
}

pub(crate) fn generate_model(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new(
            input.generics.span(),
            "PostgrestModel cannot be derived for generic structs",
        ));
    }

    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new(
            name.span(),
            "PostgrestModel can only be derived for structs",
        ));
    };
    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new(
            data.fields.span(),
            "PostgrestModel requires named fields",
        ));
    };

    let table: TableAttributes = parse_all(&input.attrs, "table")?;
    let table_name = table
        .name
        .unwrap_or_else(|| name.to_string().to_snake_case());

    let model = core_paths::model();
    let model_schema = core_paths::model_schema();
    let column_def = core_paths::column_def();
    let relationship_def = core_paths::relationship_def();
    let join_kind = core_paths::join_kind();
    let column_handle = core_paths::column();
    let option = std_paths::option();

    let mut columns = Vec::new();
    let mut relationships = Vec::new();
    let mut constants = Vec::new();
    let mut primary_keys = 0usize;

    for field in &fields.named {
        let Some(ident) = &field.ident else { continue };
        let property = ident.to_string().trim_start_matches("r#").to_owned();
        let ty = &field.ty;

        let const_ident = format_ident!("{}", property.to_shouty_snake_case(), span = ident.span());
        constants.push(quote! {
            pub const #const_ident: #column_handle<#name, #ty> = #column_handle::new(#property);
        });

        match classify(field, &property)? {
            FieldKind::Column {
                column,
                primary_key,
            } => {
                primary_keys += usize::from(primary_key);
                columns.push(quote! {
                    #column_def {
                        property: #property,
                        column: #column,
                        primary_key: #primary_key,
                    }
                });
            }
            FieldKind::Reference(reference) => {
                let Some(target) = &reference.model else {
                    return Err(syn::Error::new(
                        field.span(),
                        "#[reference] requires a target model, e.g. #[reference(model = Post)]",
                    ));
                };
                let embed = reference.name.clone().unwrap_or_else(|| property.clone());
                let join = if reference.inner {
                    quote!(#join_kind::Inner)
                } else {
                    quote!(#join_kind::Left)
                };
                let foreign_key = match &reference.foreign_key {
                    Some(fk) => quote!(#option::Some(#fk)),
                    None => quote!(#option::None),
                };
                let include = !reference.exclude;
                relationships.push(quote! {
                    #relationship_def {
                        property: #property,
                        column: #embed,
                        target: <#target as #model>::schema,
                        join: #join,
                        foreign_key: #foreign_key,
                        include_in_query: #include,
                    }
                });
            }
            FieldKind::Skipped => {}
        }
    }

    if primary_keys > 1 {
        return Err(syn::Error::new(
            name.span(),
            "PostgrestModel supports at most one #[column(primary_key)]",
        ));
    }

    let model_name = name.to_string();

    Ok(quote! {
        impl #model for #name {
            fn schema() -> &'static #model_schema {
                static SCHEMA: #model_schema = #model_schema {
                    model: ::core::concat!(::core::module_path!(), "::", #model_name),
                    table_name: #table_name,
                    columns: &[#(#columns),*],
                    relationships: &[#(#relationships),*],
                };
                &SCHEMA
            }
        }

        #[allow(dead_code)]
        impl #name {
            #(#constants)*
        }
    })
}

fn classify(field: &syn::Field, property: &str) -> Result<FieldKind> {
    let column: ColumnAttributes = parse_all(&field.attrs, "column")?;
    let has_reference = field.attrs.iter().any(|a| a.path().is_ident("reference"));

    if has_reference {
        if column.name.is_some() || column.primary_key {
            return Err(syn::Error::new(
                field.span(),
                "A #[reference] field cannot also be a #[column]",
            ));
        }
        let reference: ReferenceAttributes = parse_all(&field.attrs, "reference")?;
        return Ok(if column.skip {
            FieldKind::Skipped
        } else {
            FieldKind::Reference(reference)
        });
    }

    if column.skip {
        if column.primary_key {
            return Err(syn::Error::new(
                field.span(),
                "A skipped field cannot be the primary key",
            ));
        }
        return Ok(FieldKind::Skipped);
    }

    Ok(FieldKind::Column {
        column: column.name.unwrap_or_else(|| property.to_owned()),
        primary_key: column.primary_key,
    })
}
