// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! PostgreSQL store implementation generator.
//!
//! Generates `impl {Name}Repository for {Name}Store` with the convention
//! logic baked into each statement:
//!
//! | Method | Statement |
//! |--------|-----------|
//! | `create` | `INSERT … RETURNING *`, `created`/`status` stamped app-side |
//! | `find_by_id` | `SELECT … WHERE id = $1` + default scope |
//! | `update` | `UPDATE … SET …, updated = $n` + default scope, `RETURNING *` |
//! | `delete` | `UPDATE … SET status = -1(, deleted = $n)` or `DELETE FROM` |
//! | `list` | scoped `SELECT … ORDER BY id DESC LIMIT $1 OFFSET $2` |
//! | `select_options` | scoped `SELECT id, display ORDER BY display` |
//! | `*_with_deleted` | unscoped variants (only for `status` records) |
//!
//! The default scope is composed at runtime through `record_core::Scope`,
//! so the effective condition is always `(base) AND (status >= 0)` for
//! soft-deletable records and the plain base otherwise. The soft-delete
//! UPDATE never sets `updated`, and no generated UPDATE ever touches
//! `created`.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::super::parse::{ConventionalColumns, FieldDef, RecordDef};
use crate::utils::sql::{join_columns, placeholders, set_clause};

/// Generate the PostgreSQL repository implementation.
pub fn generate(record: &RecordDef) -> TokenStream {
    let ctx = Context::new(record);
    let trait_name = &ctx.trait_name;
    let store_name = &ctx.store_name;
    let error_type = record.error_type();

    let create_impl = ctx.create_method();
    let find_impl = ctx.find_by_id_method();
    let update_impl = ctx.update_method();
    let delete_impl = ctx.delete_method();
    let list_impl = ctx.list_method();
    let select_options_impl = ctx.select_options_method();
    let with_deleted_impls = ctx.with_deleted_methods();

    let methods = quote! {
        #create_impl
        #find_impl
        #update_impl
        #delete_impl
        #list_impl
        #select_options_impl
        #with_deleted_impls
    };

    if let Some(hooks_trait) = &ctx.hooks_trait {
        quote! {
            #[cfg(feature = "postgres")]
            #[async_trait::async_trait]
            impl<C, H> #trait_name for #store_name<C, H>
            where
                C: record_core::Clock,
                H: #hooks_trait<Error = #error_type>
            {
                type Error = #error_type;

                #methods
            }
        }
    } else {
        quote! {
            #[cfg(feature = "postgres")]
            #[async_trait::async_trait]
            impl<C> #trait_name for #store_name<C>
            where
                C: record_core::Clock
            {
                type Error = #error_type;

                #methods
            }
        }
    }
}

/// Context for PostgreSQL code generation.
///
/// Precomputes identifiers and SQL fragments shared by the method
/// generators. Placeholder numbering is fixed at macro time; only the
/// default-scope composition happens at runtime.
struct Context<'a> {
    record:           &'a RecordDef,
    trait_name:       syn::Ident,
    store_name:       syn::Ident,
    hooks_trait:      Option<syn::Ident>,
    record_name:      &'a syn::Ident,
    row_name:         syn::Ident,
    insertable_name:  syn::Ident,
    create_dto:       syn::Ident,
    update_dto:       syn::Ident,
    table:            String,
    id_name_str:      String,
    id_type:          &'a syn::Type,
    columns_str:      String,
    placeholders_str: String,
    conventional:     ConventionalColumns
}

impl<'a> Context<'a> {
    fn new(record: &'a RecordDef) -> Self {
        let id_field = record.id_field();
        let fields = record.all_fields();

        Self {
            record,
            trait_name: format_ident!("{}Repository", record.name()),
            store_name: record.ident_with("", "Store"),
            hooks_trait: record
                .has_hooks()
                .then(|| format_ident!("{}Hooks", record.name())),
            record_name: record.name(),
            row_name: record.ident_with("", "Row"),
            insertable_name: record.ident_with("Insertable", ""),
            create_dto: record.ident_with("Create", "Request"),
            update_dto: record.ident_with("Update", "Request"),
            table: record.full_table_name(),
            id_name_str: id_field.name_str(),
            id_type: id_field.ty(),
            columns_str: join_columns(fields),
            placeholders_str: placeholders(fields.len()),
            conventional: record.conventional
        }
    }

    /// `<Record as RecordConventions>::CONVENTIONS` accessor expression.
    fn conventions_expr(&self) -> TokenStream {
        let record_name = self.record_name;
        quote! { <#record_name as record_core::RecordConventions>::CONVENTIONS }
    }

    fn has_hooks(&self) -> bool {
        self.hooks_trait.is_some()
    }

    fn create_method(&self) -> TokenStream {
        if self.record.create_fields().is_empty() {
            return TokenStream::new();
        }

        let Self {
            record_name,
            row_name,
            insertable_name,
            create_dto,
            table,
            columns_str,
            placeholders_str,
            conventional,
            ..
        } = self;
        let bindings = insert_bindings(self.record.all_fields());
        let conventions = self.conventions_expr();

        let before_hook = if self.has_hooks() {
            quote! {
                let mut dto = dto;
                self.hooks.before_create(&mut dto).await?;
            }
        } else {
            TokenStream::new()
        };

        let uses_stamps = conventional.created || conventional.status;
        let record_binding = if uses_stamps {
            quote! { let mut record = #record_name::from(dto); }
        } else {
            quote! { let record = #record_name::from(dto); }
        };

        let stamp_created = conventional.created.then(|| {
            quote! { record.created = stamps.created; }
        });
        let stamp_status = conventional.status.then(|| {
            quote! {
                if let Some(code) = stamps.status {
                    record.status = code;
                }
            }
        });
        let stamp_block = uses_stamps.then(|| {
            quote! {
                let stamps = record_core::stamps(
                    #conventions,
                    record_core::Mutation::Insert,
                    &self.clock
                );
                #stamp_created
                #stamp_status
            }
        });

        let finish = if self.has_hooks() {
            quote! {
                let record = #record_name::from(row);
                self.hooks.after_create(&record).await?;
                Ok(record)
            }
        } else {
            quote! { Ok(#record_name::from(row)) }
        };

        quote! {
            async fn create(&self, dto: #create_dto) -> Result<#record_name, Self::Error> {
                #before_hook
                #record_binding
                #stamp_block
                let insertable = #insertable_name::from(&record);
                let row: #row_name = sqlx::query_as(
                    concat!(
                        "INSERT INTO ", #table,
                        " (", #columns_str, ") VALUES (", #placeholders_str, ") RETURNING *"
                    )
                )
                    #(#bindings)*
                    .fetch_one(self.pool())
                    .await?;
                #finish
            }
        }
    }

    fn find_by_id_method(&self) -> TokenStream {
        let Self {
            record_name,
            row_name,
            table,
            columns_str,
            id_type,
            ..
        } = self;
        let conventions = self.conventions_expr();
        let base_condition = format!("{} = $1", self.id_name_str);

        quote! {
            async fn find_by_id(&self, id: #id_type) -> Result<Option<#record_name>, Self::Error> {
                let scope = record_core::Scope::from(#base_condition)
                    .and_status_filter(#conventions);
                let row: Option<#row_name> = sqlx::query_as(
                    &format!("SELECT {} FROM {} {}", #columns_str, #table, scope.where_clause())
                )
                .bind(&id)
                .fetch_optional(self.pool())
                .await?;
                Ok(row.map(#record_name::from))
            }
        }
    }

    fn update_method(&self) -> TokenStream {
        let update_fields = self.record.update_fields();
        if update_fields.is_empty() {
            return TokenStream::new();
        }

        let Self {
            record_name,
            row_name,
            update_dto,
            table,
            id_type,
            conventional,
            ..
        } = self;
        let conventions = self.conventions_expr();

        let mut set = set_clause(&update_fields);
        let mut next = update_fields.len() + 1;
        if conventional.updated {
            set.push_str(&format!(", updated = ${next}"));
            next += 1;
        }
        let base_condition = format!("{} = ${}", self.id_name_str, next);

        let bindings = update_bindings(&update_fields);
        let updated_binding = conventional.updated.then(|| {
            quote! { .bind(stamps.updated) }
        });
        let stamp_block = conventional.updated.then(|| {
            quote! {
                let stamps = record_core::stamps(
                    #conventions,
                    record_core::Mutation::Update,
                    &self.clock
                );
            }
        });

        let before_hook = if self.has_hooks() {
            quote! {
                let mut dto = dto;
                self.hooks.before_update(&id, &mut dto).await?;
            }
        } else {
            TokenStream::new()
        };
        let finish = if self.has_hooks() {
            quote! {
                let record = row.map(#record_name::from);
                if let Some(record) = &record {
                    self.hooks.after_update(record).await?;
                }
                Ok(record)
            }
        } else {
            quote! { Ok(row.map(#record_name::from)) }
        };

        quote! {
            async fn update(
                &self,
                id: #id_type,
                dto: #update_dto
            ) -> Result<Option<#record_name>, Self::Error> {
                #before_hook
                #stamp_block
                let scope = record_core::Scope::from(#base_condition)
                    .and_status_filter(#conventions);
                let row: Option<#row_name> = sqlx::query_as(
                    &format!("UPDATE {} SET {} {}RETURNING *", #table, #set, scope.where_clause())
                )
                    #(#bindings)*
                    #updated_binding
                    .bind(&id)
                    .fetch_optional(self.pool())
                    .await?;
                #finish
            }
        }
    }

    fn delete_method(&self) -> TokenStream {
        let Self {
            table,
            id_type,
            conventional,
            ..
        } = self;

        let before_hook = if self.has_hooks() {
            quote! { self.hooks.before_delete(&id).await?; }
        } else {
            TokenStream::new()
        };
        let after_hook = if self.has_hooks() {
            quote! {
                if affected {
                    self.hooks.after_delete(&id).await?;
                }
            }
        } else {
            TokenStream::new()
        };

        if conventional.soft_deletes() {
            let conventions = self.conventions_expr();
            let mut set = String::from("status = $1");
            let mut next = 2;
            if conventional.deleted {
                set.push_str(&format!(", deleted = ${next}"));
                next += 1;
            }
            let base_condition = format!("{} = ${}", self.id_name_str, next);

            let deleted_binding = conventional.deleted.then(|| {
                quote! { .bind(stamps.deleted) }
            });
            let stamp_block = conventional.deleted.then(|| {
                quote! {
                    let stamps = record_core::stamps(
                        #conventions,
                        record_core::Mutation::SoftDelete,
                        &self.clock
                    );
                }
            });

            quote! {
                async fn delete(&self, id: #id_type) -> Result<bool, Self::Error> {
                    #before_hook
                    #stamp_block
                    let scope = record_core::Scope::from(#base_condition)
                        .and_status_filter(#conventions);
                    let result = sqlx::query(
                        &format!("UPDATE {} SET {} {}", #table, #set, scope.where_clause())
                    )
                    .bind(record_core::STATUS_DELETED)
                    #deleted_binding
                    .bind(&id)
                    .execute(self.pool())
                    .await?;
                    let affected = result.rows_affected() > 0;
                    #after_hook
                    Ok(affected)
                }
            }
        } else {
            let base_condition = format!("{} = $1", self.id_name_str);

            quote! {
                async fn delete(&self, id: #id_type) -> Result<bool, Self::Error> {
                    #before_hook
                    let result = sqlx::query(
                        concat!("DELETE FROM ", #table, " WHERE ", #base_condition)
                    )
                    .bind(&id)
                    .execute(self.pool())
                    .await?;
                    let affected = result.rows_affected() > 0;
                    #after_hook
                    Ok(affected)
                }
            }
        }
    }

    fn list_method(&self) -> TokenStream {
        let Self {
            record_name,
            row_name,
            table,
            columns_str,
            id_name_str,
            ..
        } = self;
        let conventions = self.conventions_expr();

        quote! {
            async fn list(
                &self,
                page: record_core::Pagination
            ) -> Result<Vec<#record_name>, Self::Error> {
                let scope = record_core::Scope::new().and_status_filter(#conventions);
                let rows: Vec<#row_name> = sqlx::query_as(
                    &format!(
                        "SELECT {} FROM {} {}ORDER BY {} DESC LIMIT $1 OFFSET $2",
                        #columns_str, #table, scope.where_clause(), #id_name_str
                    )
                )
                .bind(page.limit)
                .bind(page.offset)
                .fetch_all(self.pool())
                .await?;
                Ok(rows.into_iter().map(#record_name::from).collect())
            }
        }
    }

    fn select_options_method(&self) -> TokenStream {
        let Some(display) = self.record.display_field() else {
            return TokenStream::new();
        };
        let display_col = display.name_str();

        let Self {
            table,
            id_name_str,
            id_type,
            ..
        } = self;
        let conventions = self.conventions_expr();

        quote! {
            async fn select_options(
                &self
            ) -> Result<Vec<record_core::SelectOption<#id_type>>, Self::Error> {
                let scope = record_core::Scope::new().and_status_filter(#conventions);
                let rows: Vec<(#id_type, String)> = sqlx::query_as(
                    &format!(
                        "SELECT {}, {} FROM {} {}ORDER BY {} ASC",
                        #id_name_str, #display_col, #table, scope.where_clause(), #display_col
                    )
                )
                .fetch_all(self.pool())
                .await?;
                Ok(rows
                    .into_iter()
                    .map(|(id, label)| record_core::SelectOption {
                        id,
                        label
                    })
                    .collect())
            }
        }
    }

    fn with_deleted_methods(&self) -> TokenStream {
        if !self.conventional.soft_deletes() {
            return TokenStream::new();
        }

        let Self {
            record_name,
            row_name,
            table,
            columns_str,
            id_name_str,
            id_type,
            ..
        } = self;
        let base_condition = format!("{} = $1", id_name_str);

        quote! {
            async fn find_by_id_with_deleted(
                &self,
                id: #id_type
            ) -> Result<Option<#record_name>, Self::Error> {
                let row: Option<#row_name> = sqlx::query_as(
                    concat!("SELECT ", #columns_str, " FROM ", #table, " WHERE ", #base_condition)
                )
                .bind(&id)
                .fetch_optional(self.pool())
                .await?;
                Ok(row.map(#record_name::from))
            }

            async fn list_with_deleted(
                &self,
                page: record_core::Pagination
            ) -> Result<Vec<#record_name>, Self::Error> {
                let rows: Vec<#row_name> = sqlx::query_as(
                    concat!(
                        "SELECT ", #columns_str, " FROM ", #table,
                        " ORDER BY ", #id_name_str, " DESC LIMIT $1 OFFSET $2"
                    )
                )
                .bind(page.limit)
                .bind(page.offset)
                .fetch_all(self.pool())
                .await?;
                Ok(rows.into_iter().map(#record_name::from).collect())
            }
        }
    }
}

/// Build `.bind(insertable.field)` chain for INSERT.
fn insert_bindings(fields: &[FieldDef]) -> Vec<TokenStream> {
    fields
        .iter()
        .map(|f| {
            let name = f.name();
            quote! { .bind(insertable.#name) }
        })
        .collect()
}

/// Build `.bind(dto.field)` chain for UPDATE.
fn update_bindings(fields: &[&FieldDef]) -> Vec<TokenStream> {
    fields
        .iter()
        .map(|f| {
            let name = f.name();
            quote! { .bind(dto.#name) }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: syn::DeriveInput) -> RecordDef {
        RecordDef::from_derive_input(&input).expect("valid record")
    }

    fn soft_deletable() -> RecordDef {
        parse(syn::parse_quote! {
            #[record(table = "documents")]
            pub struct Document {
                #[id]
                pub id: uuid::Uuid,
                #[field(create, update, response)]
                pub name: String,
                pub created: Option<chrono::DateTime<chrono::Utc>>,
                pub updated: Option<chrono::DateTime<chrono::Utc>>,
                pub deleted: Option<chrono::DateTime<chrono::Utc>>,
                pub status: i32,
            }
        })
    }

    fn plain() -> RecordDef {
        parse(syn::parse_quote! {
            #[record(table = "tags")]
            pub struct Tag {
                #[id]
                pub id: uuid::Uuid,
                #[field(create, update, response)]
                pub name: String,
            }
        })
    }

    #[test]
    fn soft_delete_is_an_update() {
        let output = Context::new(&soft_deletable()).delete_method().to_string();
        assert!(output.contains("UPDATE {} SET {} {}"));
        assert!(output.contains("status = $1, deleted = $2"));
        assert!(output.contains("STATUS_DELETED"));
        assert!(output.contains("SoftDelete"));
        assert!(!output.contains("DELETE FROM"));
    }

    #[test]
    fn soft_delete_never_touches_updated() {
        let output = Context::new(&soft_deletable()).delete_method().to_string();
        assert!(!output.contains("updated"));
    }

    #[test]
    fn plain_record_gets_physical_delete() {
        let output = Context::new(&plain()).delete_method().to_string();
        assert!(output.contains("DELETE FROM"));
        assert!(!output.contains("STATUS_DELETED"));
    }

    #[test]
    fn status_only_record_soft_deletes_without_timestamp() {
        let record = parse(syn::parse_quote! {
            #[record(table = "flags")]
            pub struct Flag {
                #[id]
                pub id: uuid::Uuid,
                #[field(create, response)]
                pub name: String,
                pub status: i32,
            }
        });
        let output = Context::new(&record).delete_method().to_string();
        assert!(output.contains("status = $1"));
        assert!(!output.contains("deleted = $2"));
        assert!(!output.contains("stamps"));
    }

    #[test]
    fn deleted_timestamp_alone_keeps_physical_delete() {
        let record = parse(syn::parse_quote! {
            #[record(table = "notes")]
            pub struct Note {
                #[id]
                pub id: uuid::Uuid,
                #[field(create, response)]
                pub name: String,
                pub deleted: Option<chrono::DateTime<chrono::Utc>>,
            }
        });
        let output = Context::new(&record).delete_method().to_string();
        assert!(output.contains("DELETE FROM"));
    }

    #[test]
    fn reads_are_scoped_through_the_status_filter() {
        let record = soft_deletable();
        let ctx = Context::new(&record);
        assert!(ctx.find_by_id_method().to_string().contains("and_status_filter"));
        assert!(ctx.list_method().to_string().contains("and_status_filter"));
    }

    #[test]
    fn update_stamps_updated_after_the_dto_fields() {
        let output = Context::new(&soft_deletable()).update_method().to_string();
        assert!(output.contains("name = $1, updated = $2"));
        assert!(output.contains("id = $3"));
        assert!(output.contains("Mutation :: Update"));
    }

    #[test]
    fn update_never_touches_created() {
        let output = Context::new(&soft_deletable()).update_method().to_string();
        assert!(!output.contains("created"));
    }

    #[test]
    fn create_stamps_created_and_status() {
        let output = Context::new(&soft_deletable()).create_method().to_string();
        assert!(output.contains("Mutation :: Insert"));
        assert!(output.contains("record . created = stamps . created"));
        assert!(output.contains("record . status = code"));
        assert!(output.contains("RETURNING *"));
    }

    #[test]
    fn plain_create_skips_stamping() {
        let output = Context::new(&plain()).create_method().to_string();
        assert!(!output.contains("stamps"));
        assert!(output.contains("INSERT INTO"));
    }

    #[test]
    fn with_deleted_methods_only_for_status_records() {
        let soft = generate(&soft_deletable()).to_string();
        assert!(soft.contains("find_by_id_with_deleted"));
        assert!(soft.contains("list_with_deleted"));

        let plain = generate(&plain()).to_string();
        assert!(!plain.contains("with_deleted"));
    }

    #[test]
    fn select_options_orders_by_display_column() {
        let output = Context::new(&soft_deletable()).select_options_method().to_string();
        assert!(output.contains("SELECT {}, {} FROM {} {}ORDER BY {} ASC"));
        assert!(output.contains("SelectOption"));
    }

    #[test]
    fn hooks_wire_into_every_mutation() {
        let record = parse(syn::parse_quote! {
            #[record(table = "documents", hooks)]
            pub struct Document {
                #[id]
                pub id: uuid::Uuid,
                #[field(create, update, response)]
                pub name: String,
                pub status: i32,
            }
        });
        let output = generate(&record).to_string();
        assert!(output.contains("before_create"));
        assert!(output.contains("after_create"));
        assert!(output.contains("before_update"));
        assert!(output.contains("before_delete"));
        assert!(output.contains("DocumentHooks"));
    }

    #[test]
    fn no_hooks_no_hook_calls() {
        let output = generate(&soft_deletable()).to_string();
        assert!(!output.contains("before_create"));
        assert!(!output.contains("hooks"));
    }

    #[test]
    fn impl_is_feature_gated() {
        let output = generate(&soft_deletable()).to_string();
        assert!(output.contains("feature = \"postgres\""));
        assert!(output.contains("DocumentStore"));
        assert!(output.contains("DocumentRepository"));
    }
}
