// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `RecordConventions` impl generation.
//!
//! Lowers the detected conventional columns into the record's
//! `record_core::RecordConventions` implementation: table metadata, the
//! capability descriptor, and attribute labels. Labels for declared
//! conventional columns use the fixed defaults from `record_core`; a
//! `#[field(label = "…")]` attribute overrides them or adds entries for
//! ordinary fields.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::RecordDef;

/// Generate the `RecordConventions` implementation.
pub fn generate(record: &RecordDef) -> TokenStream {
    let record_name = record.name();
    let table = &record.table;
    let schema = &record.schema;
    let conventional = record.conventional;
    let created = conventional.created;
    let updated = conventional.updated;
    let deleted = conventional.deleted;
    let status = conventional.status;

    let labels = label_entries(record);
    let labels_fn = if labels.is_empty() {
        // Trait default (empty) already matches.
        TokenStream::new()
    } else {
        quote! {
            fn attribute_labels() -> Vec<record_core::Label> {
                vec![ #(#labels),* ]
            }
        }
    };

    quote! {
        #[automatically_derived]
        impl record_core::RecordConventions for #record_name {
            const TABLE: &'static str = #table;
            const SCHEMA: &'static str = #schema;
            const CONVENTIONS: record_core::Conventions = record_core::Conventions {
                created: #created,
                updated: #updated,
                deleted: #deleted,
                status:  #status
            };

            #labels_fn
        }
    }
}

/// Build the label entry list: conventional columns first (canonical
/// order), then user-labeled ordinary fields in declaration order.
fn label_entries(record: &RecordDef) -> Vec<TokenStream> {
    let mut entries = Vec::new();

    for (column, default) in [
        ("created", quote! { record_core::LABEL_CREATED }),
        ("updated", quote! { record_core::LABEL_UPDATED }),
        ("deleted", quote! { record_core::LABEL_DELETED }),
        ("status", quote! { record_core::LABEL_STATUS })
    ] {
        let Some(field) = record.all_fields().iter().find(|f| f.name_str() == column) else {
            continue;
        };
        let label = match &field.label {
            Some(text) => quote! { #text },
            None => default
        };
        entries.push(quote! {
            record_core::Label { attribute: #column, label: #label }
        });
    }

    for field in record.all_fields() {
        if field.is_conventional() {
            continue;
        }
        if let Some(text) = &field.label {
            let attribute = field.name_str();
            entries.push(quote! {
                record_core::Label { attribute: #attribute, label: #text }
            });
        }
    }

    entries
}
