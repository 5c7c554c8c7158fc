// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute labels: conventional defaults plus per-field overrides.

use chrono::{DateTime, Utc};
use record_derive::{Record, RecordConventions};
use uuid::Uuid;

#[derive(Debug, Clone, Record)]
#[record(table = "audits", schema = "ops")]
pub struct Audit {
    #[id]
    pub id: Uuid,

    #[field(create, response, label = "Reason")]
    pub reason: String,

    #[field(response)]
    pub created: Option<DateTime<Utc>>,

    #[field(label = "Removed")]
    pub deleted: Option<DateTime<Utc>>,
}

fn main() {
    assert_eq!(Audit::SCHEMA, "ops");

    let labels = Audit::attribute_labels();
    assert_eq!(labels.len(), 3);

    // Conventional columns come first, in canonical order.
    assert_eq!(labels[0].attribute, "created");
    assert_eq!(labels[0].label, "Created");

    // An explicit label overrides the conventional default.
    assert_eq!(labels[1].attribute, "deleted");
    assert_eq!(labels[1].label, "Removed");

    // Ordinary fields appear only with an explicit label.
    assert_eq!(labels[2].attribute, "reason");
    assert_eq!(labels[2].label, "Reason");
}
