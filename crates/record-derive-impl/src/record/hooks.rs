// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Lifecycle hooks trait generation.
//!
//! Generates a `{Name}Hooks` trait for records with `#[record(hooks)]`.
//! Unlike ad-hoc callback wiring, the generated store invokes the hooks
//! itself, in a fixed order: the before-hook runs first, then the store's
//! own convention logic (timestamps, soft-delete flags), then the SQL
//! statement, then the after-hook. A failing before-hook aborts the
//! operation before any state is touched, and the error propagates
//! unchanged.
//!
//! # Generated Code
//!
//! For a record `Doc`, generates:
//!
//! ```rust,ignore
//! #[async_trait]
//! pub trait DocHooks: Send + Sync {
//!     type Error: std::error::Error + Send + Sync;
//!
//!     async fn before_create(&self, dto: &mut CreateDocRequest) -> Result<(), Self::Error> { Ok(()) }
//!     async fn after_create(&self, record: &Doc) -> Result<(), Self::Error> { Ok(()) }
//!     async fn before_update(&self, id: &Uuid, dto: &mut UpdateDocRequest) -> Result<(), Self::Error> { Ok(()) }
//!     async fn after_update(&self, record: &Doc) -> Result<(), Self::Error> { Ok(()) }
//!     async fn before_delete(&self, id: &Uuid) -> Result<(), Self::Error> { Ok(()) }
//!     async fn after_delete(&self, id: &Uuid) -> Result<(), Self::Error> { Ok(()) }
//! }
//! ```
//!
//! plus an all-default implementation for `record_core::NoHooks`, the
//! store's default hook parameter.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::parse::RecordDef;

/// Generates the lifecycle hooks trait for a record.
///
/// Returns empty `TokenStream` if `hooks` is not enabled.
pub fn generate(record: &RecordDef) -> TokenStream {
    if !record.has_hooks() {
        return TokenStream::new();
    }

    let vis = &record.vis;
    let record_name = record.name();
    let hooks_trait = format_ident!("{}Hooks", record_name);
    let error_type = record.error_type();
    let id_type = record.id_field().ty();

    let create_hooks = generate_create_hooks(record);
    let update_hooks = generate_update_hooks(record, id_type);
    let delete_hooks = generate_delete_hooks(id_type);

    quote! {
        /// Lifecycle hooks invoked by the generated store.
        ///
        /// All methods default to no-ops. If a `before_*` hook returns an
        /// error, the operation is aborted before anything is written. If an
        /// `after_*` hook returns an error, the operation has already
        /// completed but the error is propagated to the caller.
        #[async_trait::async_trait]
        #vis trait #hooks_trait: Send + Sync {
            /// Error type for hook operations.
            type Error: std::error::Error + Send + Sync;

            #create_hooks
            #update_hooks
            #delete_hooks
        }

        #[cfg(feature = "postgres")]
        #[async_trait::async_trait]
        impl #hooks_trait for record_core::NoHooks {
            type Error = #error_type;
        }
    }
}

/// Generate before/after hooks for the create operation.
fn generate_create_hooks(record: &RecordDef) -> TokenStream {
    if record.create_fields().is_empty() {
        return TokenStream::new();
    }

    let record_name = record.name();
    let create_dto = record.ident_with("Create", "Request");

    quote! {
        /// Called before record creation.
        ///
        /// Use for validation or normalization; modify `dto` to transform
        /// input before persistence.
        async fn before_create(&self, dto: &mut #create_dto) -> Result<(), Self::Error> {
            let _ = dto;
            Ok(())
        }

        /// Called after record creation.
        async fn after_create(&self, record: &#record_name) -> Result<(), Self::Error> {
            let _ = record;
            Ok(())
        }
    }
}

/// Generate before/after hooks for the update operation.
fn generate_update_hooks(record: &RecordDef, id_type: &syn::Type) -> TokenStream {
    if record.update_fields().is_empty() {
        return TokenStream::new();
    }

    let record_name = record.name();
    let update_dto = record.ident_with("Update", "Request");

    quote! {
        /// Called before record update.
        async fn before_update(
            &self,
            id: &#id_type,
            dto: &mut #update_dto
        ) -> Result<(), Self::Error> {
            let _ = (id, dto);
            Ok(())
        }

        /// Called after record update. Not called when the id matched no
        /// visible record.
        async fn after_update(&self, record: &#record_name) -> Result<(), Self::Error> {
            let _ = record;
            Ok(())
        }
    }
}

/// Generate before/after hooks for the delete operation.
///
/// The same pair serves soft and physical deletion; which one runs is a
/// property of the record type, not of the call site.
fn generate_delete_hooks(id_type: &syn::Type) -> TokenStream {
    quote! {
        /// Called before record deletion.
        ///
        /// Use to check whether deletion is allowed; an error keeps the
        /// record untouched.
        async fn before_delete(&self, id: &#id_type) -> Result<(), Self::Error> {
            let _ = id;
            Ok(())
        }

        /// Called after record deletion. Not called when nothing was
        /// affected.
        async fn after_delete(&self, id: &#id_type) -> Result<(), Self::Error> {
            let _ = id;
            Ok(())
        }
    }
}
