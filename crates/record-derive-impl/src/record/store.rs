// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Store struct generation.
//!
//! Generates the `{Name}Store` struct that implements the repository trait
//! against PostgreSQL. The store owns the pool and an injected
//! [`Clock`](record_core::Clock) — audit timestamps are written from the
//! application clock, never from the database's `NOW()`, so tests can pin
//! time with `FixedClock`. With `#[record(hooks)]` the store additionally
//! carries the hook set (defaulting to `record_core::NoHooks`).
//!
//! # Generated Code
//!
//! ```rust,ignore
//! #[cfg(feature = "postgres")]
//! pub struct DocStore<C = SystemClock> {
//!     pool: sqlx::PgPool,
//!     clock: C,
//! }
//!
//! impl DocStore {
//!     pub fn new(pool: sqlx::PgPool) -> Self { … }
//! }
//!
//! impl<C> DocStore<C> {
//!     pub fn with_clock(pool: sqlx::PgPool, clock: C) -> Self { … }
//!     pub fn pool(&self) -> &sqlx::PgPool { … }
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::RecordDef;

/// Generate the store struct and its constructors.
pub fn generate(record: &RecordDef) -> TokenStream {
    if record.has_hooks() {
        generate_with_hooks(record)
    } else {
        generate_plain(record)
    }
}

fn generate_plain(record: &RecordDef) -> TokenStream {
    let vis = &record.vis;
    let store_name = record.ident_with("", "Store");

    quote! {
        /// PostgreSQL store with an injected clock.
        #[cfg(feature = "postgres")]
        #vis struct #store_name<C = record_core::SystemClock> {
            pool: sqlx::PgPool,
            clock: C
        }

        #[cfg(feature = "postgres")]
        impl #store_name {
            /// Create a store using the system clock.
            #vis fn new(pool: sqlx::PgPool) -> Self {
                Self {
                    pool,
                    clock: record_core::SystemClock
                }
            }
        }

        #[cfg(feature = "postgres")]
        impl<C> #store_name<C> {
            /// Create a store with an explicit clock.
            #vis fn with_clock(pool: sqlx::PgPool, clock: C) -> Self {
                Self {
                    pool,
                    clock
                }
            }

            /// Reference to the underlying pool, for custom queries.
            #vis fn pool(&self) -> &sqlx::PgPool {
                &self.pool
            }
        }
    }
}

fn generate_with_hooks(record: &RecordDef) -> TokenStream {
    let vis = &record.vis;
    let store_name = record.ident_with("", "Store");

    quote! {
        /// PostgreSQL store with an injected clock and lifecycle hooks.
        #[cfg(feature = "postgres")]
        #vis struct #store_name<C = record_core::SystemClock, H = record_core::NoHooks> {
            pool: sqlx::PgPool,
            clock: C,
            hooks: H
        }

        #[cfg(feature = "postgres")]
        impl #store_name {
            /// Create a store using the system clock and no hooks.
            #vis fn new(pool: sqlx::PgPool) -> Self {
                Self {
                    pool,
                    clock: record_core::SystemClock,
                    hooks: record_core::NoHooks
                }
            }
        }

        #[cfg(feature = "postgres")]
        impl<C> #store_name<C> {
            /// Create a store with an explicit clock and no hooks.
            #vis fn with_clock(pool: sqlx::PgPool, clock: C) -> Self {
                Self {
                    pool,
                    clock,
                    hooks: record_core::NoHooks
                }
            }
        }

        #[cfg(feature = "postgres")]
        impl<C, H> #store_name<C, H> {
            /// Create a store with an explicit clock and hook set.
            #vis fn with_hooks(pool: sqlx::PgPool, clock: C, hooks: H) -> Self {
                Self {
                    pool,
                    clock,
                    hooks
                }
            }

            /// Reference to the underlying pool, for custom queries.
            #vis fn pool(&self) -> &sqlx::PgPool {
                &self.pool
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: syn::DeriveInput) -> RecordDef {
        RecordDef::from_derive_input(&input).expect("valid record")
    }

    #[test]
    fn plain_store_has_clock_constructors() {
        let record = parse(syn::parse_quote! {
            #[record(table = "documents")]
            pub struct Document {
                #[id]
                pub id: uuid::Uuid,
                #[field(create, response)]
                pub name: String,
            }
        });
        let output = generate(&record).to_string();
        assert!(output.contains("DocumentStore"));
        assert!(output.contains("fn new"));
        assert!(output.contains("fn with_clock"));
        assert!(output.contains("fn pool"));
        assert!(!output.contains("hooks"));
    }

    #[test]
    fn hooks_store_carries_hook_set() {
        let record = parse(syn::parse_quote! {
            #[record(table = "documents", hooks)]
            pub struct Document {
                #[id]
                pub id: uuid::Uuid,
                #[field(create, response)]
                pub name: String,
            }
        });
        let output = generate(&record).to_string();
        assert!(output.contains("fn with_hooks"));
        assert!(output.contains("NoHooks"));
    }
}
