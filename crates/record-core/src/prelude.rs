// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use record_core::prelude::*;
//! ```

pub use crate::{
    Clock, Conventions, FixedClock, Label, Mutation, NoHooks, Pagination, RecordConventions,
    STATUS_DEFAULT, STATUS_DELETED, Scope, SelectOption, Stamps, SystemClock, async_trait, stamps
};
