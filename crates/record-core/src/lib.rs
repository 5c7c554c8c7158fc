// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core traits and types for record-derive.
//!
//! This crate provides the runtime half of the record convention layer:
//! record-derive generated code calls into it, and it can also be used
//! standalone for manual implementations.
//!
//! # Overview
//!
//! - [`Conventions`] — static capability descriptor for the conventional
//!   columns (`created`, `updated`, `deleted`, `status`)
//! - [`RecordConventions`] — per-record trait exposing table metadata,
//!   the descriptor, and [attribute labels](RecordConventions::attribute_labels)
//! - [`Scope`] — default-scope composition (`(base) AND (status >= 0)`)
//! - [`Clock`] — injected time source for audit timestamps
//! - [`stamps`] — timestamp planning for insert/update/soft-delete mutations
//! - [`Pagination`] — common pagination parameters for list operations
//! - [`SelectOption`] — id → display-name pair for selection UI
//! - [`prelude`] — convenient re-exports
//!
//! # The convention
//!
//! A record type opts into each behavior simply by declaring the column:
//!
//! | Column | Type | Behavior |
//! |--------|------|----------|
//! | `created` | `Option<DateTime<Utc>>` | set once on insert, immutable afterwards |
//! | `updated` | `Option<DateTime<Utc>>` | set on every ordinary update |
//! | `deleted` | `Option<DateTime<Utc>>` | set by the soft-delete mutation |
//! | `status` | `i32` | `>= 0` visible, [`STATUS_DELETED`] hidden |
//!
//! Records without a `status` column keep ordinary hard-delete semantics;
//! records with one never see a `DELETE` statement — deletion degrades to an
//! `UPDATE` flipping the status flag.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clock;
pub mod conventions;
pub mod lifecycle;
pub mod prelude;
pub mod scope;

/// Re-export async_trait for generated code.
pub use async_trait::async_trait;
pub use clock::{Clock, FixedClock, SystemClock};
pub use conventions::{
    Conventions, LABEL_CREATED, LABEL_DELETED, LABEL_STATUS, LABEL_UPDATED, Label,
    RecordConventions
};
pub use lifecycle::{Mutation, Stamps, stamps};
pub use scope::{Scope, VISIBLE_CONDITION};

/// Status code of an ordinary, visible record.
///
/// Assigned on insert when the record declares a `status` column. Positive
/// codes are left to the application; everything `>= 0` passes the default
/// scope.
pub const STATUS_DEFAULT: i32 = 0;

/// Status code of a soft-deleted record.
///
/// Assigned by the soft-delete mutation. Rows carrying it are excluded from
/// every default-scoped query; there is no restore operation.
pub const STATUS_DELETED: i32 = -1;

/// Pagination parameters for list operations.
///
/// Used by generated `list` methods to control result pagination.
///
/// # Example
///
/// ```rust
/// use record_core::Pagination;
///
/// let page = Pagination::new(10, 0); // First 10 items
/// let next = Pagination::new(10, 10); // Next 10 items
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Maximum number of results to return.
    pub limit: i64,

    /// Number of results to skip.
    pub offset: i64
}

impl Pagination {
    /// Create new pagination parameters.
    pub const fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit,
            offset
        }
    }

    /// Create pagination for a specific page.
    ///
    /// # Example
    ///
    /// ```rust
    /// use record_core::Pagination;
    ///
    /// let page_0 = Pagination::page(0, 25); // offset=0, limit=25
    /// let page_2 = Pagination::page(2, 25); // offset=50, limit=25
    /// ```
    pub const fn page(page: i64, per_page: i64) -> Self {
        Self {
            limit:  per_page,
            offset: page * per_page
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit:  100,
            offset: 0
        }
    }
}

/// One id → display-name pair for selection UI (dropdowns, pickers).
///
/// Produced by generated `select_options` methods from all non-deleted
/// records of a type, ordered by display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption<K> {
    /// Primary key of the record.
    pub id: K,

    /// Display name taken from the record's display column.
    pub label: String
}

/// Hook set with no behavior.
///
/// Default hook parameter of generated stores. Each generated `{Name}Hooks`
/// trait gets an implementation for `NoHooks` in which every hook is the
/// default no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoHooks;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_new() {
        let p = Pagination::new(50, 100);
        assert_eq!(p.limit, 50);
        assert_eq!(p.offset, 100);
    }

    #[test]
    fn pagination_page() {
        let p = Pagination::page(2, 25);
        assert_eq!(p.limit, 25);
        assert_eq!(p.offset, 50);
    }

    #[test]
    fn pagination_default() {
        let p = Pagination::default();
        assert_eq!(p.limit, 100);
        assert_eq!(p.offset, 0);
    }

    #[test]
    fn status_codes() {
        assert_eq!(STATUS_DEFAULT, 0);
        assert_eq!(STATUS_DELETED, -1);
        assert!(STATUS_DEFAULT >= 0);
        assert!(STATUS_DELETED < 0);
    }

    #[test]
    fn select_option_fields() {
        let opt = SelectOption {
            id:    7_i64,
            label: "Billing".to_string()
        };
        assert_eq!(opt.id, 7);
        assert_eq!(opt.label, "Billing");
    }
}
