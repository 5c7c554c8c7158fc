// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field assignment utilities for `From` implementations.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

use crate::record::parse::{FieldDef, RecordDef};

/// Generate `name: source.name` assignments.
pub fn assigns(fields: &[FieldDef], source: &str) -> Vec<TokenStream> {
    let src = Ident::new(source, Span::call_site());
    fields
        .iter()
        .map(|f| {
            let name = f.name();
            quote! { #name: #src.#name }
        })
        .collect()
}

/// Generate `name: source.name.clone()` assignments.
pub fn assigns_clone(fields: &[FieldDef], source: &str) -> Vec<TokenStream> {
    let src = Ident::new(source, Span::call_site());
    fields
        .iter()
        .map(|f| {
            let name = f.name();
            quote! { #name: #src.#name.clone() }
        })
        .collect()
}

/// Generate `name: source.name` assignments from references.
pub fn assigns_from_refs(fields: &[&FieldDef], source: &str) -> Vec<TokenStream> {
    let src = Ident::new(source, Span::call_site());
    fields
        .iter()
        .map(|f| {
            let name = f.name();
            quote! { #name: #src.#name }
        })
        .collect()
}

/// Generate `name: source.name.clone()` assignments from references.
pub fn assigns_clone_from_refs(fields: &[&FieldDef], source: &str) -> Vec<TokenStream> {
    let src = Ident::new(source, Span::call_site());
    fields
        .iter()
        .map(|f| {
            let name = f.name();
            quote! { #name: #src.#name.clone() }
        })
        .collect()
}

/// Generate field assignments for `From<CreateRequest>`.
///
/// Create fields come from the DTO, the id is generated app-side, and
/// everything else — conventional columns included — starts from
/// `Default::default()`. The store stamps `created`/`status` before the
/// INSERT.
pub fn create_assigns(record: &RecordDef) -> Vec<TokenStream> {
    let create_fields = record.create_fields();
    let id_expr = record.uuid.generate_expr();

    record
        .all_fields()
        .iter()
        .map(|f| {
            let name = f.name();
            let in_create = create_fields.iter().any(|cf| cf.name() == name);

            if in_create {
                quote! { #name: dto.#name }
            } else if f.is_id {
                quote! { #name: #id_expr }
            } else {
                quote! { #name: Default::default() }
            }
        })
        .collect()
}
