// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Audit timestamps without a status column: deletion stays physical.

use chrono::{DateTime, Utc};
use record_derive::{Record, RecordConventions};
use uuid::Uuid;

#[derive(Debug, Clone, Record)]
#[record(table = "log_entries")]
pub struct LogEntry {
    #[id]
    pub id: Uuid,

    #[field(create, response)]
    pub message: String,

    #[field(response)]
    pub created: Option<DateTime<Utc>>,

    pub updated: Option<DateTime<Utc>>,
}

fn main() {
    assert!(LogEntry::CONVENTIONS.created);
    assert!(LogEntry::CONVENTIONS.updated);
    assert!(!LogEntry::CONVENTIONS.status);
    assert!(!LogEntry::CONVENTIONS.soft_deletes());

    let labels = LogEntry::attribute_labels();
    assert_eq!(labels.len(), 2);
    assert_eq!(labels[0].attribute, "created");
    assert_eq!(labels[0].label, "Created");
    assert_eq!(labels[1].attribute, "updated");
}
