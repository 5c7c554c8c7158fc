// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for the Record derive macro.
//!
//! Record-level attributes like `#[record(table = "invoices")]` are parsed
//! with darling's `FromDeriveInput`, which handles required fields, defaults,
//! and error spans. Field-level attributes (`#[id]`, `#[field(...)]`) are
//! marker-style and parsed manually.
//!
//! # Data Structures
//!
//! ```text
//! RecordDef
//! ├── ident: Ident                  (struct name, e.g., "Invoice")
//! ├── vis: Visibility
//! ├── table / schema: String
//! ├── error: syn::Path              (store error type)
//! ├── uuid: UuidVersion             (id generation)
//! ├── hooks: bool                   (generate hooks trait)
//! ├── display: Option<String>       (select_options column)
//! ├── conventional: ConventionalColumns
//! └── fields: Vec<FieldDef>
//! ```
//!
//! Parsing also validates the convention: exactly one `#[id]` field, no
//! writable conventional columns, and a resolvable display column.

mod conventions;
mod def;
mod field;
mod uuid_version;

pub use conventions::ConventionalColumns;
pub use def::RecordDef;
pub use field::FieldDef;
pub use uuid_version::UuidVersion;
