// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Insertable struct generation for INSERT operations.
//!
//! Generates an `Insertable{Name}` struct that owns all values for a single
//! INSERT, ready for positional binding. The store builds it from a record
//! value after stamping the conventional columns.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::RecordDef;

/// Generates the `Insertable{Name}` struct for INSERT operations.
pub fn generate(record: &RecordDef) -> TokenStream {
    let vis = &record.vis;
    let insertable_name = record.ident_with("Insertable", "");
    let field_defs = record.all_fields().iter().map(|f| {
        let name = f.name();
        let ty = f.ty();
        quote! { pub #name: #ty }
    });

    quote! {
        #[derive(Debug, Clone)]
        #vis struct #insertable_name { #(#field_defs),* }
    }
}
