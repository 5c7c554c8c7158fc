// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! DTO generation for the Record derive macro.
//!
//! Generates CreateRequest, UpdateRequest, and Response structs. The
//! conventional columns never appear in CreateRequest or UpdateRequest —
//! parsing rejects the flags — which is what keeps `created` immutable and
//! the soft-delete state out of client hands.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::RecordDef;

/// Generate all DTOs for the record.
pub fn generate(record: &RecordDef) -> TokenStream {
    let create_dto = generate_create_dto(record);
    let update_dto = generate_update_dto(record);
    let response_dto = generate_response_dto(record);

    quote! {
        #create_dto
        #update_dto
        #response_dto
    }
}

/// Generate the CreateRequest DTO.
fn generate_create_dto(record: &RecordDef) -> TokenStream {
    let vis = &record.vis;
    let name = record.ident_with("Create", "Request");
    let fields = record.create_fields();

    if fields.is_empty() {
        return TokenStream::new();
    }

    let field_defs: Vec<_> = fields
        .iter()
        .map(|f| {
            let name = f.name();
            let ty = f.ty();
            quote! { pub #name: #ty }
        })
        .collect();

    quote! {
        /// Request DTO for creating a new record.
        #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
        #vis struct #name {
            #(#field_defs),*
        }
    }
}

/// Generate the UpdateRequest DTO.
fn generate_update_dto(record: &RecordDef) -> TokenStream {
    let vis = &record.vis;
    let name = record.ident_with("Update", "Request");
    let fields = record.update_fields();

    if fields.is_empty() {
        return TokenStream::new();
    }

    // Non-Option fields gain an Option wrapper for partial payloads.
    let field_defs: Vec<_> = fields
        .iter()
        .map(|f| {
            let name = f.name();
            let ty = f.ty();
            if f.is_option() {
                quote! { pub #name: #ty }
            } else {
                quote! { pub #name: Option<#ty> }
            }
        })
        .collect();

    quote! {
        /// Request DTO for updating an existing record.
        #[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
        #vis struct #name {
            #(#field_defs),*
        }
    }
}

/// Generate the Response DTO.
fn generate_response_dto(record: &RecordDef) -> TokenStream {
    let vis = &record.vis;
    let name = record.ident_with("", "Response");
    let fields = record.response_fields();

    if fields.is_empty() {
        return TokenStream::new();
    }

    let field_defs: Vec<_> = fields
        .iter()
        .map(|f| {
            let name = f.name();
            let ty = f.ty();
            quote! { pub #name: #ty }
        })
        .collect();

    quote! {
        /// Response DTO for presenting a record.
        #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
        #vis struct #name {
            #(#field_defs),*
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> RecordDef {
        let input: syn::DeriveInput = syn::parse_quote! {
            #[record(table = "documents")]
            pub struct Document {
                #[id]
                pub id: uuid::Uuid,
                #[field(create, update, response)]
                pub name: String,
                #[field(response)]
                pub created: Option<chrono::DateTime<chrono::Utc>>,
                pub status: i32,
            }
        };
        RecordDef::from_derive_input(&input).expect("valid record")
    }

    #[test]
    fn generates_all_three_dtos() {
        let output = generate(&record()).to_string();
        assert!(output.contains("CreateDocumentRequest"));
        assert!(output.contains("UpdateDocumentRequest"));
        assert!(output.contains("DocumentResponse"));
    }

    #[test]
    fn conventional_columns_stay_out_of_write_dtos() {
        let record = record();
        let create = generate_create_dto(&record).to_string();
        let update = generate_update_dto(&record).to_string();
        assert!(!create.contains("created"));
        assert!(!create.contains("status"));
        assert!(!update.contains("created"));
        assert!(!update.contains("status"));
    }

    #[test]
    fn response_may_carry_conventional_columns() {
        let response = generate_response_dto(&record()).to_string();
        assert!(response.contains("created"));
    }

    #[test]
    fn no_create_fields_no_create_dto() {
        let input: syn::DeriveInput = syn::parse_quote! {
            #[record(table = "snapshots")]
            pub struct Snapshot {
                #[id]
                pub id: uuid::Uuid,
                #[field(response)]
                pub size: i64,
            }
        };
        let record = RecordDef::from_derive_input(&input).expect("valid record");
        assert!(generate_create_dto(&record).is_empty());
        assert!(generate_update_dto(&record).is_empty());
    }
}
