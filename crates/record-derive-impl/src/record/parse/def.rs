// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Record-level attribute parsing.
//!
//! This module parses `#[record(...)]` attributes with darling and combines
//! them with the field definitions into [`RecordDef`], the structure every
//! code generator consumes. Convention rules are validated here so the
//! generators can assume a well-formed record.

use darling::FromDeriveInput;
use proc_macro2::Span;
use syn::{DeriveInput, Ident, Visibility};

use super::{conventions::ConventionalColumns, field::FieldDef, uuid_version::UuidVersion};

/// Default error type path for the generated store.
fn default_error_type() -> syn::Path {
    syn::parse_quote!(sqlx::Error)
}

/// Returns the default schema name.
fn default_schema() -> String {
    "public".to_string()
}

/// Record-level attributes parsed from `#[record(...)]`.
///
/// Internal darling struct; the public API is [`RecordDef`].
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(record), supports(struct_named))]
struct RecordAttrs {
    /// Struct identifier (e.g., `Invoice`).
    ident: Ident,

    /// Struct visibility (e.g., `pub`, `pub(crate)`).
    vis: Visibility,

    /// Database table name. Required.
    table: String,

    /// Database schema name. Defaults to `"public"`.
    #[darling(default = "default_schema")]
    schema: String,

    /// Error type of the generated store.
    ///
    /// Defaults to `sqlx::Error`. A custom type must implement
    /// `From<sqlx::Error>`.
    #[darling(default = "default_error_type")]
    error: syn::Path,

    /// UUID version for id generation. Defaults to v7.
    #[darling(default)]
    uuid: UuidVersion,

    /// Generate the `{Name}Hooks` lifecycle trait and wire it into the
    /// store.
    #[darling(default)]
    hooks: bool,

    /// Column used as the display name by `select_options`.
    ///
    /// Defaults to a `String` field literally named `name`, when present.
    #[darling(default)]
    display: Option<String>
}

/// Complete parsed record definition.
///
/// This is the main data structure passed to all code generators. It
/// combines record-level metadata, field definitions, and the detected
/// conventional columns.
#[derive(Debug)]
pub struct RecordDef {
    /// Struct identifier (e.g., `Invoice`).
    pub ident: Ident,

    /// Struct visibility, propagated to all generated items.
    pub vis: Visibility,

    /// Database table name (e.g., `"invoices"`).
    pub table: String,

    /// Database schema name (e.g., `"public"`).
    pub schema: String,

    /// Error type of the generated store.
    pub error: syn::Path,

    /// UUID version for id generation.
    pub uuid: UuidVersion,

    /// Whether to generate the lifecycle hooks trait.
    pub hooks: bool,

    /// Explicit display column for `select_options`, if any.
    pub display: Option<String>,

    /// Conventional columns declared by the struct.
    pub conventional: ConventionalColumns,

    /// All field definitions from the struct.
    pub fields: Vec<FieldDef>,

    id_index: usize
}

impl RecordDef {
    /// Parse and validate a record definition from syn's `DeriveInput`.
    ///
    /// # Errors
    ///
    /// - Missing `table` attribute, or applied to an enum/tuple struct
    ///   (reported by darling)
    /// - No `#[id]` field, or more than one
    /// - A conventional column marked `#[id]`, `#[field(create)]`, or
    ///   `#[field(update)]` — the store owns those writes
    /// - `display = "…"` naming a field the struct does not have
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = RecordAttrs::from_derive_input(input)?;

        let fields = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => named
                    .named
                    .iter()
                    .map(|field| FieldDef::from_field(field).map_err(darling::Error::from))
                    .collect::<darling::Result<Vec<_>>>()?,
                _ => {
                    return Err(darling::Error::custom("Record requires named fields")
                        .with_span(&input.ident));
                }
            },
            _ => {
                return Err(
                    darling::Error::custom("Record can only be derived for structs")
                        .with_span(&input.ident)
                );
            }
        };

        let conventional = ConventionalColumns::detect(&fields);
        let id_index = validate(&attrs, &fields)?;

        Ok(Self {
            ident: attrs.ident,
            vis: attrs.vis,
            table: attrs.table,
            schema: attrs.schema,
            error: attrs.error,
            uuid: attrs.uuid,
            hooks: attrs.hooks,
            display: attrs.display,
            conventional,
            fields,
            id_index
        })
    }

    /// Get the primary key field.
    ///
    /// Validation guarantees exactly one `#[id]` field exists.
    pub fn id_field(&self) -> &FieldDef {
        &self.fields[self.id_index]
    }

    /// Get fields to include in the `CreateRequest` DTO.
    pub fn create_fields(&self) -> Vec<&FieldDef> {
        self.fields.iter().filter(|f| f.in_create()).collect()
    }

    /// Get fields to include in the `UpdateRequest` DTO.
    pub fn update_fields(&self) -> Vec<&FieldDef> {
        self.fields.iter().filter(|f| f.in_update()).collect()
    }

    /// Get fields to include in the `Response` DTO.
    pub fn response_fields(&self) -> Vec<&FieldDef> {
        self.fields.iter().filter(|f| f.in_response()).collect()
    }

    /// Get all fields for the Row and Insertable structs.
    pub fn all_fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Get the display column used by `select_options`, if any.
    ///
    /// An explicit `display = "…"` attribute wins; otherwise a `String`
    /// field literally named `name` is used. Records with neither get no
    /// `select_options` method.
    pub fn display_field(&self) -> Option<&FieldDef> {
        match &self.display {
            Some(name) => self.fields.iter().find(|f| f.name_str() == *name),
            None => self
                .fields
                .iter()
                .find(|f| f.name_str() == "name" && f.is_string())
        }
    }

    /// Get the record name as an identifier.
    pub fn name(&self) -> &Ident {
        &self.ident
    }

    /// Get the record name as a string.
    pub fn name_str(&self) -> String {
        self.ident.to_string()
    }

    /// Get the fully qualified table name with schema.
    pub fn full_table_name(&self) -> String {
        format!("{}.{}", self.schema, self.table)
    }

    /// Create a new identifier with prefix and/or suffix.
    ///
    /// Used to generate related type names following naming conventions.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// // For record "Invoice":
    /// record.ident_with("Create", "Request") // CreateInvoiceRequest
    /// record.ident_with("", "Row")           // InvoiceRow
    /// record.ident_with("", "Store")         // InvoiceStore
    /// ```
    pub fn ident_with(&self, prefix: &str, suffix: &str) -> Ident {
        Ident::new(
            &format!("{}{}{}", prefix, self.name_str(), suffix),
            Span::call_site()
        )
    }

    /// Get the error type of the generated store.
    pub fn error_type(&self) -> &syn::Path {
        &self.error
    }

    /// Whether the hooks trait is requested.
    pub fn has_hooks(&self) -> bool {
        self.hooks
    }
}

/// Validate convention rules; returns the index of the `#[id]` field.
fn validate(attrs: &RecordAttrs, fields: &[FieldDef]) -> darling::Result<usize> {
    let mut id_index = None;
    for (index, field) in fields.iter().enumerate() {
        if field.is_id {
            if id_index.is_some() {
                return Err(darling::Error::custom("Record allows only one #[id] field")
                    .with_span(field.name()));
            }
            id_index = Some(index);
        }
    }
    let Some(id_index) = id_index else {
        return Err(
            darling::Error::custom("Record requires an #[id] field").with_span(&attrs.ident)
        );
    };

    for field in fields {
        if !field.is_conventional() {
            continue;
        }
        if field.is_id {
            return Err(darling::Error::custom(format!(
                "conventional column `{}` cannot be the #[id] field",
                field.name_str()
            ))
            .with_span(field.name()));
        }
        if field.create || field.update {
            return Err(darling::Error::custom(format!(
                "conventional column `{}` is maintained by the store and cannot be marked \
                 #[field(create)] or #[field(update)]",
                field.name_str()
            ))
            .with_span(field.name()));
        }
    }

    if let Some(display) = &attrs.display
        && !fields.iter().any(|f| f.name_str() == *display)
    {
        return Err(darling::Error::custom(format!(
            "display column `{display}` does not match any field"
        ))
        .with_span(&attrs.ident));
    }

    Ok(id_index)
}
