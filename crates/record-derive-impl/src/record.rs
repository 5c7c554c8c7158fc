// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Record derive macro implementation.
//!
//! This module contains all code generation logic for the
//! `#[derive(Record)]` macro.

mod conventions;
mod dto;
mod hooks;
mod insertable;
mod mappers;
pub(crate) mod parse;
mod repository;
mod row;
mod sql;
mod store;

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use self::parse::RecordDef;

/// Main entry point for the Record derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match RecordDef::from_derive_input(&input) {
        Ok(record) => generate(record),
        Err(err) => err.write_errors().into()
    }
}

/// Generate all code for the record.
fn generate(record: RecordDef) -> TokenStream {
    let dto_tokens = dto::generate(&record);
    let row_tokens = row::generate(&record);
    let insertable_tokens = insertable::generate(&record);
    let mapper_tokens = mappers::generate(&record);
    let conventions_tokens = conventions::generate(&record);
    let repository_tokens = repository::generate(&record);
    let hooks_tokens = hooks::generate(&record);
    let store_tokens = store::generate(&record);
    let sql_tokens = sql::generate(&record);

    let expanded = quote! {
        #dto_tokens
        #row_tokens
        #insertable_tokens
        #mapper_tokens
        #conventions_tokens
        #repository_tokens
        #hooks_tokens
        #store_tokens
        #sql_tokens
    };

    expanded.into()
}
