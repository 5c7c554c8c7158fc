// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Timestamp planning for record mutations.
//!
//! [`stamps`] decides which conventional columns a mutation writes and with
//! what values. The rules:
//!
//! | Mutation | `created` | `updated` | `deleted` | `status` |
//! |----------|-----------|-----------|-----------|----------|
//! | [`Insert`](Mutation::Insert) | now | — | — | [`STATUS_DEFAULT`] |
//! | [`Update`](Mutation::Update) | — | now | — | — |
//! | [`SoftDelete`](Mutation::SoftDelete) | — | — | now | [`STATUS_DELETED`] |
//!
//! A column is only ever stamped when the record's [`Conventions`] declare
//! it. `created` is never stamped after insert, and the soft-delete mutation
//! never refreshes `updated` — the deletion save leaves the last-edit
//! timestamp untouched.

use chrono::{DateTime, Utc};

use crate::{
    STATUS_DEFAULT, STATUS_DELETED, clock::Clock, conventions::Conventions
};

/// Kind of record mutation being planned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutation {
    /// First save of a new record.
    Insert,

    /// Ordinary update of an existing record.
    Update,

    /// Deletion degraded to a status flip.
    SoftDelete
}

impl Mutation {
    /// Whether this mutation hides the record from the default scope.
    #[must_use]
    pub const fn is_delete(&self) -> bool {
        matches!(self, Self::SoftDelete)
    }
}

/// Planned writes to the conventional columns for one mutation.
///
/// `None` means the column is not written by this mutation, either because
/// the record does not declare it or because the mutation never touches it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stamps {
    /// Value for the `created` column.
    pub created: Option<DateTime<Utc>>,

    /// Value for the `updated` column.
    pub updated: Option<DateTime<Utc>>,

    /// Value for the `deleted` column.
    pub deleted: Option<DateTime<Utc>>,

    /// Value for the `status` column.
    pub status: Option<i32>
}

/// Plan the conventional-column writes for one mutation.
///
/// Pure apart from the single [`Clock::now`] call; every generated store
/// method goes through it before building its SQL statement.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use record_core::{Conventions, FixedClock, Mutation, stamps};
///
/// let conventions = Conventions {
///     created: true,
///     updated: true,
///     deleted: true,
///     status:  true
/// };
/// let clock = FixedClock::at(Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap());
///
/// let plan = stamps(conventions, Mutation::SoftDelete, &clock);
/// assert!(plan.deleted.is_some());
/// assert!(plan.updated.is_none()); // deletion never refreshes `updated`
/// ```
#[must_use]
pub fn stamps(conventions: Conventions, mutation: Mutation, clock: &dyn Clock) -> Stamps {
    let now = clock.now();
    let mut plan = Stamps::default();

    match mutation {
        Mutation::Insert => {
            if conventions.created {
                plan.created = Some(now);
            }
            if conventions.status {
                plan.status = Some(STATUS_DEFAULT);
            }
        }
        Mutation::Update => {
            if conventions.updated {
                plan.updated = Some(now);
            }
        }
        Mutation::SoftDelete => {
            if conventions.deleted {
                plan.deleted = Some(now);
            }
            if conventions.status {
                plan.status = Some(STATUS_DELETED);
            }
        }
    }

    plan
}
