// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! SQL fragment building utilities.
//!
//! All fragments use PostgreSQL positional placeholders (`$1, $2, …`).
//! Placeholder numbering is decided at macro time, so the generated
//! statements stay static apart from the default-scope composition.

use crate::record::parse::FieldDef;

/// Join field names into a comma-separated column list.
pub fn join_columns(fields: &[FieldDef]) -> String {
    fields
        .iter()
        .map(|f| f.name_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build placeholders `$1, $2, …, $count`.
pub fn placeholders(count: usize) -> String {
    (1..=count)
        .map(|i| format!("${i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build a SET clause `col1 = $1, col2 = $2, …` starting at `$1`.
pub fn set_clause(fields: &[&FieldDef]) -> String {
    fields
        .iter()
        .enumerate()
        .map(|(i, f)| format!("{} = ${}", f.name_str(), i + 1))
        .collect::<Vec<_>>()
        .join(", ")
}
