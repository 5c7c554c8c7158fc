// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # record-derive
//!
//! Audit-timestamp and soft-delete conventions for sqlx records, driven by
//! a single derive. Re-exports:
//!
//! - [`Record`] derive macro from `record-derive-impl`
//! - All runtime types from `record-core` ([`Scope`], [`Clock`],
//!   [`Conventions`], [`Pagination`], …)
//!
//! # The convention
//!
//! Declare any of the four conventional columns and the generated store
//! maintains them:
//!
//! | Column | Behavior |
//! |--------|----------|
//! | `created` | stamped once on insert, excluded from every UPDATE |
//! | `updated` | stamped on ordinary updates, never by a delete |
//! | `deleted` | stamped when the record is soft-deleted |
//! | `status` | `delete` becomes `UPDATE … SET status = -1`; default scope hides the row |
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use chrono::{DateTime, Utc};
//! use record_derive::Record;
//! use uuid::Uuid;
//!
//! #[derive(Debug, Clone, Record)]
//! #[record(table = "documents")]
//! pub struct Document {
//!     #[id]
//!     pub id: Uuid,
//!
//!     #[field(create, update, response)]
//!     pub name: String,
//!
//!     #[field(response)]
//!     pub created: Option<DateTime<Utc>>,
//!     pub updated: Option<DateTime<Utc>>,
//!     pub deleted: Option<DateTime<Utc>>,
//!     pub status: i32,
//! }
//!
//! // Generated: CreateDocumentRequest, UpdateDocumentRequest,
//! // DocumentResponse, DocumentRow, InsertableDocument, DocumentRepository,
//! // DocumentStore, RecordConventions impl, From mappers.
//!
//! let store = DocumentStore::new(pool);
//! let doc = store.create(CreateDocumentRequest { name: "Q3 report".into() }).await?;
//! store.delete(doc.id).await?;          // row stays, status = -1
//! store.find_by_id(doc.id).await?;      // None: hidden by the default scope
//! store.select_options().await?;        // id → name pairs of visible docs
//! ```
//!
//! Deletion is irreversible through this API: there is no restore method,
//! and records with a `status` column never see a `DELETE` statement. The
//! `find_by_id_with_deleted`/`list_with_deleted` methods are the explicit
//! way around the default scope when an audit view needs the hidden rows.

// Re-export all core types
pub use record_core::*;
// Re-export derive macro
pub use record_derive_impl::Record;
