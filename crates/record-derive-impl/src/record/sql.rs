// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! SQL implementation generation for the Record derive macro.
//!
//! PostgreSQL via `sqlx::PgPool` is the only supported backend; the
//! generated implementation is gated behind the downstream `postgres`
//! feature.

mod postgres;

use proc_macro2::TokenStream;

use super::parse::RecordDef;

/// Generate the repository implementation for the record's store.
pub fn generate(record: &RecordDef) -> TokenStream {
    postgres::generate(record)
}
