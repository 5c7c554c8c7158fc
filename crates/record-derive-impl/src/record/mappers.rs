// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Mapper generation for the Record derive macro.
//!
//! Generates `From` implementations between the record, DTOs, Row, and
//! Insertable. `From<CreateRequest>` generates the id and leaves every
//! conventional column at its default (`None` timestamps, status `0`); the
//! store overwrites `created`/`status` from the stamp plan before inserting.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::RecordDef;
use crate::utils::fields;

/// Generate all `From` implementations.
pub fn generate(record: &RecordDef) -> TokenStream {
    let row_to_record = generate_row_to_record(record);
    let record_to_insertable = generate_record_to_insertable(record);
    let record_to_response = generate_record_to_response(record);
    let create_to_record = generate_create_to_record(record);

    quote! {
        #row_to_record
        #record_to_insertable
        #record_to_response
        #create_to_record
    }
}

fn generate_row_to_record(record: &RecordDef) -> TokenStream {
    let record_name = record.name();
    let row_name = record.ident_with("", "Row");
    let assigns = fields::assigns(record.all_fields(), "row");

    quote! {
        impl From<#row_name> for #record_name {
            fn from(row: #row_name) -> Self {
                Self { #(#assigns),* }
            }
        }
    }
}

fn generate_record_to_insertable(record: &RecordDef) -> TokenStream {
    let record_name = record.name();
    let insertable_name = record.ident_with("Insertable", "");
    let assigns = fields::assigns(record.all_fields(), "record");
    let assigns_clone = fields::assigns_clone(record.all_fields(), "record");

    quote! {
        impl From<#record_name> for #insertable_name {
            fn from(record: #record_name) -> Self {
                Self { #(#assigns),* }
            }
        }

        impl From<&#record_name> for #insertable_name {
            fn from(record: &#record_name) -> Self {
                Self { #(#assigns_clone),* }
            }
        }
    }
}

fn generate_record_to_response(record: &RecordDef) -> TokenStream {
    let response_fields = record.response_fields();
    if response_fields.is_empty() {
        return TokenStream::new();
    }

    let record_name = record.name();
    let response_name = record.ident_with("", "Response");
    let assigns = fields::assigns_from_refs(&response_fields, "record");
    let assigns_clone = fields::assigns_clone_from_refs(&response_fields, "record");

    quote! {
        impl From<#record_name> for #response_name {
            fn from(record: #record_name) -> Self {
                Self { #(#assigns),* }
            }
        }

        impl From<&#record_name> for #response_name {
            fn from(record: &#record_name) -> Self {
                Self { #(#assigns_clone),* }
            }
        }
    }
}

fn generate_create_to_record(record: &RecordDef) -> TokenStream {
    if record.create_fields().is_empty() {
        return TokenStream::new();
    }

    let record_name = record.name();
    let create_name = record.ident_with("Create", "Request");
    let assigns = fields::create_assigns(record);

    quote! {
        impl From<#create_name> for #record_name {
            fn from(dto: #create_name) -> Self {
                Self { #(#assigns),* }
            }
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
                #[field(create, response)]
                pub name: String,
                pub created: Option<chrono::DateTime<chrono::Utc>>,
                pub status: i32,
            }
        };
        RecordDef::from_derive_input(&input).expect("valid record")
    }

    #[test]
    fn generates_all_mappers() {
        let output = generate(&record()).to_string();
        assert!(output.contains("impl From < DocumentRow > for Document"));
        assert!(output.contains("InsertableDocument"));
        assert!(output.contains("DocumentResponse"));
        assert!(output.contains("CreateDocumentRequest"));
    }

    #[test]
    fn create_mapper_defaults_conventional_columns() {
        let output = generate_create_to_record(&record()).to_string();
        assert!(output.contains("created : Default :: default ()"));
        assert!(output.contains("status : Default :: default ()"));
        assert!(output.contains("now_v7"));
    }

    #[test]
    fn no_create_fields_no_create_mapper() {
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
        assert!(generate_create_to_record(&record).is_empty());
    }
}
