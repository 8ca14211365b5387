//! Centralized path definitions for generated code.
//!
//! Generated code names everything through the `pgrest` facade (without a
//! leading `::`) so tests inside the workspace can provide a `mod pgrest`
//! shim when needed.

use proc_macro2::TokenStream;
use quote::quote;

// =============================================================================
// STANDARD LIBRARY
// =============================================================================

pub mod std {
    use super::*;

    pub fn option() -> TokenStream {
        quote!(::std::option::Option)
    }

    pub fn from() -> TokenStream {
        quote!(::std::convert::From)
    }

    pub fn string() -> TokenStream {
        quote!(::std::string::String)
    }
}

// =============================================================================
// SCHEMA DESCRIPTORS
// =============================================================================

pub mod core {
    use super::*;

    pub fn model() -> TokenStream {
        quote!(pgrest::core::Model)
    }

    pub fn model_schema() -> TokenStream {
        quote!(pgrest::core::ModelSchema)
    }

    pub fn column_def() -> TokenStream {
        quote!(pgrest::core::ColumnDef)
    }

    pub fn relationship_def() -> TokenStream {
        quote!(pgrest::core::RelationshipDef)
    }

    pub fn join_kind() -> TokenStream {
        quote!(pgrest::core::JoinKind)
    }

    pub fn column() -> TokenStream {
        quote!(pgrest::core::Column)
    }

    // =========================================================================
    // LITERALS
    // =========================================================================

    pub fn to_literal() -> TokenStream {
        quote!(pgrest::core::ToLiteral)
    }

    pub fn value() -> TokenStream {
        quote!(pgrest::core::Value)
    }
}
