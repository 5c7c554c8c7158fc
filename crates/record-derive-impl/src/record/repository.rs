// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Repository trait generation for the Record derive macro.
//!
//! Generates an async `{Name}Repository` trait with default-scoped CRUD
//! operations. Method availability follows the record definition:
//!
//! | Method | Condition |
//! |--------|-----------|
//! | `create` | at least one `#[field(create)]` field |
//! | `update` | at least one `#[field(update)]` field |
//! | `find_by_id`, `delete`, `list` | always |
//! | `select_options` | a display column exists |
//! | `find_by_id_with_deleted`, `list_with_deleted` | the record has `status` |
//!
//! The `_with_deleted` variants are the explicit opt-out from the default
//! scope; there is no restore and no hard delete for status-bearing records.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::parse::RecordDef;

/// Generate the Repository trait for the record.
pub fn generate(record: &RecordDef) -> TokenStream {
    let vis = &record.vis;
    let record_name = record.name();
    let trait_name = format_ident!("{}Repository", record_name);

    let create_dto = record.ident_with("Create", "Request");
    let update_dto = record.ident_with("Update", "Request");
    let id_type = record.id_field().ty();

    let create_method = if record.create_fields().is_empty() {
        TokenStream::new()
    } else {
        quote! {
            /// Create a new record, stamping its audit columns.
            async fn create(&self, dto: #create_dto) -> Result<#record_name, Self::Error>;
        }
    };

    let update_method = if record.update_fields().is_empty() {
        TokenStream::new()
    } else {
        quote! {
            /// Update a record within the default scope.
            ///
            /// Returns `None` when no visible record carries the id.
            async fn update(
                &self,
                id: #id_type,
                dto: #update_dto
            ) -> Result<Option<#record_name>, Self::Error>;
        }
    };

    let select_options_method = if record.display_field().is_some() {
        quote! {
            /// Id → display-name pairs of all visible records, ordered by
            /// display name. For dropdown population.
            async fn select_options(
                &self
            ) -> Result<Vec<record_core::SelectOption<#id_type>>, Self::Error>;
        }
    } else {
        TokenStream::new()
    };

    let with_deleted_methods = if record.conventional.soft_deletes() {
        quote! {
            /// Find a record by primary key, ignoring the default scope.
            async fn find_by_id_with_deleted(
                &self,
                id: #id_type
            ) -> Result<Option<#record_name>, Self::Error>;

            /// List records including soft-deleted ones.
            async fn list_with_deleted(
                &self,
                page: record_core::Pagination
            ) -> Result<Vec<#record_name>, Self::Error>;
        }
    } else {
        TokenStream::new()
    };

    quote! {
        /// Repository trait for record persistence operations.
        #[async_trait::async_trait]
        #vis trait #trait_name: Send + Sync {
            /// Error type for repository operations.
            type Error: std::error::Error + Send + Sync;

            #create_method

            /// Find a record by primary key within the default scope.
            async fn find_by_id(&self, id: #id_type) -> Result<Option<#record_name>, Self::Error>;

            #update_method

            /// Delete a record.
            ///
            /// Records with a `status` column are soft-deleted: the row is
            /// kept and hidden from the default scope. Returns whether a
            /// record was affected.
            async fn delete(&self, id: #id_type) -> Result<bool, Self::Error>;

            /// List records within the default scope.
            async fn list(
                &self,
                page: record_core::Pagination
            ) -> Result<Vec<#record_name>, Self::Error>;

            #select_options_method

            #with_deleted_methods
        }
    }
}
