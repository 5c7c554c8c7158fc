// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Database row struct generation.
//!
//! Generates a `{Name}Row` struct that maps directly to database query
//! results via `sqlx::FromRow`. Unlike the DTOs, the Row struct includes
//! every field of the record — conventional columns and skipped fields are
//! still stored.
//!
//! The `sqlx::FromRow` derive is gated behind the downstream `postgres`
//! feature, so the crate can be used for DTO-only scenarios without sqlx.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::RecordDef;

/// Generates the `{Name}Row` struct for database query results.
pub fn generate(record: &RecordDef) -> TokenStream {
    let vis = &record.vis;
    let row_name = record.ident_with("", "Row");
    let field_defs = record.all_fields().iter().map(|f| {
        let name = f.name();
        let ty = f.ty();
        quote! { pub #name: #ty }
    });

    quote! {
        #[derive(Debug, Clone)]
        #[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
        #vis struct #row_name { #(#field_defs),* }
    }
}
