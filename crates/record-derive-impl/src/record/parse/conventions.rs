// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Conventional-column detection.
//!
//! The four conventional columns are recognized purely by field name. The
//! result is a compile-time capability descriptor: every generator consults
//! it before emitting convention logic, so a record missing a column is
//! never touched for it.

use super::field::FieldDef;

/// Names of the conventional columns, in canonical order.
pub const CONVENTIONAL_COLUMNS: [&str; 4] = ["created", "updated", "deleted", "status"];

/// Which conventional columns a record struct declares.
///
/// Compile-time twin of `record_core::Conventions`; the conventions
/// generator lowers it into the generated `RecordConventions` impl.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConventionalColumns {
    /// Struct has a `created` field.
    pub created: bool,

    /// Struct has an `updated` field.
    pub updated: bool,

    /// Struct has a `deleted` field.
    pub deleted: bool,

    /// Struct has a `status` field.
    pub status: bool
}

impl ConventionalColumns {
    /// Detect conventional columns among the parsed fields.
    pub fn detect(fields: &[FieldDef]) -> Self {
        let mut columns = Self::default();
        for field in fields {
            match field.name_str().as_str() {
                "created" => columns.created = true,
                "updated" => columns.updated = true,
                "deleted" => columns.deleted = true,
                "status" => columns.status = true,
                _ => {}
            }
        }
        columns
    }

    /// Check whether a field name is one of the conventional columns.
    pub fn is_conventional(name: &str) -> bool {
        CONVENTIONAL_COLUMNS.contains(&name)
    }

    /// Whether deletion degrades to a soft delete for this record type.
    ///
    /// Only the `status` column decides this; a lone `deleted` timestamp
    /// keeps physical deletion.
    pub const fn soft_deletes(&self) -> bool {
        self.status
    }

    /// Whether any conventional column is declared.
    pub const fn any(&self) -> bool {
        self.created || self.updated || self.deleted || self.status
    }
}
