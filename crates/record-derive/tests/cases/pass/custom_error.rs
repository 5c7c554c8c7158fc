// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Custom store error type via `#[record(error = "…")]`.

use record_derive::Record;
use uuid::Uuid;

#[derive(Debug)]
pub enum AppError {
    Database(sqlx::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Database(err) => write!(f, "database error: {err}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err)
    }
}

#[derive(Debug, Clone, Record)]
#[record(table = "invoices", error = "AppError")]
pub struct Invoice {
    #[id]
    pub id: Uuid,

    #[field(create, response)]
    pub name: String,

    pub status: i32,
}

fn main() {
    let invoice = Invoice::from(CreateInvoiceRequest {
        name: "INV-0042".to_string(),
    });
    assert_eq!(invoice.status, 0);
}
