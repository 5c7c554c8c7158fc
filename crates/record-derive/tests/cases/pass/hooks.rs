// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[record(hooks)]` generates the lifecycle hooks trait.

use async_trait::async_trait;
use record_derive::Record;
use uuid::Uuid;

#[derive(Debug, Clone, Record)]
#[record(table = "posts", hooks)]
pub struct Post {
    #[id]
    pub id: Uuid,

    #[field(create, update, response)]
    pub title: String,

    pub status: i32,
}

struct TitleGuard;

#[async_trait]
impl PostHooks for TitleGuard {
    type Error = sqlx::Error;

    async fn before_create(&self, dto: &mut CreatePostRequest) -> Result<(), Self::Error> {
        dto.title = dto.title.trim().to_string();
        Ok(())
    }
}

fn main() {
    // Hooks trait exists and custom implementations may override any subset.
    let _guard = TitleGuard;
}
