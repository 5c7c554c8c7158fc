// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! A record declaring all four conventional columns.

use chrono::{DateTime, Utc};
use record_derive::{Record, RecordConventions, STATUS_DEFAULT};
use uuid::Uuid;

#[derive(Debug, Clone, Record)]
#[record(table = "documents")]
pub struct Document {
    #[id]
    pub id: Uuid,

    #[field(create, update, response)]
    pub name: String,

    #[field(response)]
    pub created: Option<DateTime<Utc>>,

    pub updated: Option<DateTime<Utc>>,

    pub deleted: Option<DateTime<Utc>>,

    pub status: i32,
}

fn _check_repository<T: DocumentRepository>() {}

fn main() {
    assert!(Document::CONVENTIONS.created);
    assert!(Document::CONVENTIONS.updated);
    assert!(Document::CONVENTIONS.deleted);
    assert!(Document::CONVENTIONS.status);
    assert!(Document::CONVENTIONS.soft_deletes());

    // A freshly lifted record carries the initial conventional state; the
    // store stamps `created` right before the INSERT.
    let doc = Document::from(CreateDocumentRequest {
        name: "Quarterly report".to_string(),
    });
    assert_eq!(doc.status, STATUS_DEFAULT);
    assert!(doc.created.is_none());
    assert!(doc.updated.is_none());
    assert!(doc.deleted.is_none());

    // All four conventional labels are present.
    let labels = Document::attribute_labels();
    assert_eq!(labels.len(), 4);
    assert_eq!(labels[1].label, "Last edit");
}
