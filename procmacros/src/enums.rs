//! `#[derive(PostgrestEnum)]` code generation.

use std::collections::HashMap;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DataEnum, DeriveInput, Expr, ExprLit, ExprUnary, Fields, Lit, UnOp, spanned::Spanned};

use crate::paths::{core as core_paths, std as std_paths};

pub(crate) fn generate_enum(input: DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;

    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new(
            name.span(),
            "PostgrestEnum can only be derived for enums",
        ));
    };
    if data.variants.is_empty() {
        return Err(syn::Error::new(
            name.span(),
            "PostgrestEnum cannot be derived for empty enums",
        ));
    }
    if let Some(variant) = data
        .variants
        .iter()
        .find(|v| !matches!(v.fields, Fields::Unit))
    {
        return Err(syn::Error::new(
            variant.span(),
            "PostgrestEnum variants cannot carry fields",
        ));
    }

    // `#[repr(..)]` enums render their discriminant, others their variant name
    let has_repr = input.attrs.iter().any(|attr| attr.path().is_ident("repr"));
    let arms: Vec<TokenStream> = if has_repr {
        resolve_discriminants(data)?
            .into_iter()
            .map(|(ident, value)| {
                let text = value.to_string();
                quote! { #name::#ident => #text }
            })
            .collect()
    } else {
        data.variants
            .iter()
            .map(|variant| {
                let ident = &variant.ident;
                quote! { #name::#ident => stringify!(#ident) }
            })
            .collect()
    };

    let to_literal = core_paths::to_literal();
    let value = core_paths::value();
    let option = std_paths::option();
    let from = std_paths::from();
    let string = std_paths::string();

    Ok(quote! {
        impl #to_literal for #name {
            fn to_literal(&self) -> #option<#string> {
                let text: &'static str = match self {
                    #(#arms,)*
                };
                #option::Some(#string::from(text))
            }
        }

        impl #from<#name> for #value {
            fn from(value: #name) -> Self {
                #value::scalar(&value)
            }
        }

        impl #from<&#name> for #value {
            fn from(value: &#name) -> Self {
                #value::scalar(value)
            }
        }
    })
}

/// Parse a discriminant expression into an i64 value.
///
/// Handles positive literals (`3`) and negative literals (`-1`).
fn parse_discriminant(expr: &Expr) -> syn::Result<i64> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(i), ..
        }) => i
            .base10_parse::<i64>()
            .map_err(|e| syn::Error::new(i.span(), e)),

        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr,
            ..
        }) => match &**expr {
            Expr::Lit(ExprLit {
                lit: Lit::Int(i), ..
            }) => i
                .base10_parse::<i64>()
                .map(|v| -v)
                .map_err(|e| syn::Error::new(i.span(), e)),
            other => Err(syn::Error::new(
                other.span(),
                "Expected integer literal after unary minus",
            )),
        },

        other => Err(syn::Error::new(
            other.span(),
            "Expected integer literal or unary minus",
        )),
    }
}

/// Discriminant of every variant, implicit ones counting up from the previous.
///
/// Two variants sharing a value is a compile error.
fn resolve_discriminants(data: &DataEnum) -> syn::Result<Vec<(&syn::Ident, i64)>> {
    let mut results = Vec::with_capacity(data.variants.len());
    let mut seen: HashMap<i64, &syn::Ident> = HashMap::new();
    let mut next_value: i64 = 0;

    for variant in &data.variants {
        let value = match &variant.discriminant {
            Some((_, expr)) => parse_discriminant(expr)?,
            None => next_value,
        };

        if let Some(prev_ident) = seen.insert(value, &variant.ident) {
            return Err(syn::Error::new(
                variant.ident.span(),
                format!(
                    "Duplicate discriminant value {value}: variant `{}` conflicts with `{prev_ident}`",
                    variant.ident,
                ),
            ));
        }

        results.push((&variant.ident, value));
        next_value = value + 1;
    }

    Ok(results)
}
