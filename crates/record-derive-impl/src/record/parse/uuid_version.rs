// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! UUID version configuration for id generation.
//!
//! Record ids are generated app-side when a `CreateRequest` is lifted into
//! the record type. [`UuidVersion`] controls which UUID version is used.

use darling::FromMeta;
use proc_macro2::TokenStream;
use quote::quote;

/// UUID version for id generation.
///
/// | Version | Method | Properties |
/// |---------|--------|------------|
/// | `V7` | `Uuid::now_v7()` | Time-ordered, sortable, default |
/// | `V4` | `Uuid::new_v4()` | Random, widely compatible |
///
/// # Examples
///
/// ```rust,ignore
/// #[record(table = "users")]              // v7 default
/// #[record(table = "users", uuid = "v4")] // random
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UuidVersion {
    /// UUID version 7 — time-ordered.
    ///
    /// Recommended for database primary keys as it provides natural
    /// ordering by creation time.
    #[default]
    V7,

    /// UUID version 4 — random.
    V4
}

impl UuidVersion {
    /// Expression generating a new id of this version.
    pub fn generate_expr(&self) -> TokenStream {
        match self {
            Self::V7 => quote! { uuid::Uuid::now_v7() },
            Self::V4 => quote! { uuid::Uuid::new_v4() }
        }
    }
}

impl FromMeta for UuidVersion {
    /// Parse UUID version from string attribute value.
    ///
    /// Accepts `"v7"`/`"7"` and `"v4"`/`"4"`, case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns `darling::Error::unknown_value` for unrecognized values.
    fn from_string(value: &str) -> darling::Result<Self> {
        match value.to_lowercase().as_str() {
            "v7" | "7" => Ok(UuidVersion::V7),
            "v4" | "4" => Ok(UuidVersion::V4),
            _ => Err(darling::Error::unknown_value(value))
        }
    }
}
