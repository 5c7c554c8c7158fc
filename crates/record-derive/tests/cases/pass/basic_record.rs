// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use record_derive::{Conventions, Record, RecordConventions};
use uuid::Uuid;

#[derive(Debug, Clone, Record)]
#[record(table = "tags")]
pub struct Tag {
    #[id]
    pub id: Uuid,

    #[field(create, update, response)]
    pub name: String,

    #[field(skip)]
    pub internal_weight: i64,
}

fn main() {
    // No conventional columns: nothing is declared, deletion stays physical.
    assert_eq!(Tag::CONVENTIONS, Conventions::NONE);
    assert!(!Tag::CONVENTIONS.soft_deletes());
    assert_eq!(Tag::TABLE, "tags");
    assert_eq!(Tag::SCHEMA, "public");
    assert!(Tag::attribute_labels().is_empty());

    // CreateTagRequest has: name (skip keeps internal_weight out)
    let create = CreateTagRequest {
        name: "infra".to_string(),
    };
    let tag = Tag::from(create);
    assert_eq!(tag.name, "infra");
    assert_eq!(tag.internal_weight, 0);
    assert!(!tag.id.is_nil());

    // UpdateTagRequest wraps fields in Option
    let update = UpdateTagRequest {
        name: Some("platform".to_string()),
    };
    assert!(update.name.is_some());

    // TagResponse has: id, name
    let response = TagResponse::from(&tag);
    assert_eq!(response.id, tag.id);
    assert_eq!(response.name, "infra");
}
