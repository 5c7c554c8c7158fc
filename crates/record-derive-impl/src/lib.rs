// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Proc-macro implementation for `record-derive`.
//!
//! This crate houses the `#[derive(Record)]` macro. Use `record-derive`
//! instead, which re-exports the macro together with the runtime types from
//! `record-core`.
//!
//! # The convention
//!
//! The macro inspects the record struct for the four *conventional columns*
//! — `created`, `updated`, `deleted`, `status` — and generates persistence
//! code that maintains them:
//!
//! - `created` is stamped once on insert and excluded from every UPDATE.
//! - `updated` is stamped on every ordinary update, never by a delete.
//! - `deleted` is stamped by the soft-delete mutation.
//! - `status` turns deletion into `UPDATE … SET status = -1` and puts
//!   `status >= 0` into the default scope of every query.
//!
//! Detection is by field name; a record missing a column simply opts out of
//! that part of the convention.
//!
//! # Generated Code Overview
//!
//! For a `Doc` record, the macro generates:
//!
//! | Generated Item | Description |
//! |----------------|-------------|
//! | `CreateDocRequest` | DTO for creation (fields marked `#[field(create)]`) |
//! | `UpdateDocRequest` | DTO for updates (fields marked `#[field(update)]`, wrapped in `Option`) |
//! | `DocResponse` | DTO for output (fields marked `#[field(response)]`) |
//! | `DocRow` | Database row mapping (`sqlx::FromRow`) |
//! | `InsertableDoc` | Struct for `INSERT` statements |
//! | `impl RecordConventions for Doc` | Table metadata, capability descriptor, labels |
//! | `DocRepository` | Async trait with scoped CRUD methods |
//! | `DocStore` + `impl DocRepository` | PostgreSQL store with injected clock |
//! | `DocHooks` | Lifecycle hooks trait (with `#[record(hooks)]`) |
//! | `From<…>` impls | Conversions between all structs |
//!
//! # Record Attributes
//!
//! Configure the record with `#[record(...)]`:
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `table` | **Yes** | — | Database table name |
//! | `schema` | No | `"public"` | Database schema name |
//! | `error` | No | `sqlx::Error` | Error type of the generated store; must be `From<sqlx::Error>` |
//! | `uuid` | No | `"v7"` | UUID version for generated ids: `"v7"` or `"v4"` |
//! | `hooks` | No | off | Generate the `{Name}Hooks` lifecycle trait |
//! | `display` | No | field `name` | Column used by `select_options` |
//!
//! # Field Attributes
//!
//! | Attribute | Description |
//! |-----------|-------------|
//! | `#[id]` | Primary key. UUID generated app-side. Always in `Response`. |
//! | `#[field(create)]` | Include in `CreateRequest`. |
//! | `#[field(update)]` | Include in `UpdateRequest`, wrapped in `Option<T>`. |
//! | `#[field(response)]` | Include in `Response`. |
//! | `#[field(skip)]` | Exclude from all DTOs. |
//! | `#[field(label = "…")]` | Attribute label; overrides the conventional default. |
//!
//! Conventional columns are managed by the store and may not carry
//! `#[field(create)]` or `#[field(update)]` — the macro rejects that at
//! compile time, which is what keeps `created` immutable after insert.

mod record;
mod utils;

use proc_macro::TokenStream;

/// Derive macro for the record convention layer.
///
/// See the crate-level documentation for the attribute reference and the
/// `record-derive` crate for usage examples.
#[proc_macro_derive(Record, attributes(record, id, field))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive(input)
}
