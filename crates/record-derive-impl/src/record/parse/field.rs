// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! This module handles parsing of field attributes like `#[id]` and
//! `#[field(create, update, response, skip, label = "…")]`.

use syn::{Attribute, Field, Ident, LitStr, Meta, Type, Visibility};

use super::conventions::ConventionalColumns;

/// Field definition with all parsed attributes.
///
/// # Attribute Flags
///
/// | Field | Attribute | Effect |
/// |-------|-----------|--------|
/// | `is_id` | `#[id]` | Primary key, auto-generated UUID |
/// | `create` | `#[field(create)]` | Include in CreateRequest |
/// | `update` | `#[field(update)]` | Include in UpdateRequest |
/// | `response` | `#[field(response)]` | Include in Response |
/// | `skip` | `#[field(skip)]` | Exclude from all DTOs |
/// | `label` | `#[field(label = "…")]` | Attribute display label |
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier (e.g., `id`, `title`, `created`).
    pub ident: Ident,

    /// Field type (e.g., `Uuid`, `Option<String>`, `i32`).
    pub ty: Type,

    /// Field visibility.
    ///
    /// Preserved for potential future use in generated code.
    #[allow(dead_code)]
    pub vis: Visibility,

    /// Whether this is the primary key field (`#[id]`).
    pub is_id: bool,

    /// Include in `CreateRequest` DTO.
    pub create: bool,

    /// Include in `UpdateRequest` DTO.
    pub update: bool,

    /// Include in `Response` DTO.
    pub response: bool,

    /// Exclude from all DTOs.
    ///
    /// Overrides `create`, `update`, and `response` flags.
    pub skip: bool,

    /// Display label override from `#[field(label = "…")]`.
    pub label: Option<String>
}

impl FieldDef {
    /// Parse field definition from syn's `Field`.
    ///
    /// # Panics
    ///
    /// Panics if the field doesn't have an identifier (tuple struct field).
    /// This is caught earlier by darling's `supports(struct_named)`.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let ident = field.ident.clone().expect("named field required");
        let ty = field.ty.clone();
        let vis = field.vis.clone();

        let mut is_id = false;
        let mut create = false;
        let mut update = false;
        let mut response = false;
        let mut skip = false;
        let mut label = None;

        for attr in &field.attrs {
            if attr.path().is_ident("id") {
                is_id = true;
            } else if attr.path().is_ident("field") {
                parse_field_attr(
                    attr,
                    &mut create,
                    &mut update,
                    &mut response,
                    &mut skip,
                    &mut label
                )?;
            }
        }

        Ok(Self {
            ident,
            ty,
            vis,
            is_id,
            create,
            update,
            response,
            skip,
            label
        })
    }

    /// Get the field name as an identifier.
    pub fn name(&self) -> &Ident {
        &self.ident
    }

    /// Get the field name as a string.
    ///
    /// Used for generating SQL column names.
    pub fn name_str(&self) -> String {
        self.ident.to_string()
    }

    /// Check if field should be in `CreateRequest`.
    pub fn in_create(&self) -> bool {
        !self.skip && self.create && !self.is_id
    }

    /// Check if field should be in `UpdateRequest`.
    pub fn in_update(&self) -> bool {
        !self.skip && self.update && !self.is_id
    }

    /// Check if field should be in `Response`.
    ///
    /// IDs are always in the response unless skipped.
    pub fn in_response(&self) -> bool {
        !self.skip && (self.response || self.is_id)
    }

    /// Check if this field is one of the conventional columns.
    pub fn is_conventional(&self) -> bool {
        ConventionalColumns::is_conventional(&self.name_str())
    }

    /// Check if the field type is `Option<T>`.
    ///
    /// Used to decide whether update DTO fields need an extra `Option`
    /// wrapper. Checks the last path segment, so custom types named
    /// `Option` give false positives.
    pub fn is_option(&self) -> bool {
        self.type_is("Option")
    }

    /// Check if the field type is `String`.
    ///
    /// Used when auto-detecting the display column for `select_options`.
    pub fn is_string(&self) -> bool {
        self.type_is("String")
    }

    fn type_is(&self, name: &str) -> bool {
        if let Type::Path(type_path) = &self.ty
            && let Some(segment) = type_path.path.segments.last()
        {
            return segment.ident == name;
        }
        false
    }

    /// Get the field type.
    pub fn ty(&self) -> &Type {
        &self.ty
    }
}

/// Parse `#[field(create, update, response, skip, label = "…")]`.
///
/// Marker identifiers set the corresponding flag; `label` takes a string
/// value. Unknown identifiers are rejected so typos surface at compile time.
fn parse_field_attr(
    attr: &Attribute,
    create: &mut bool,
    update: &mut bool,
    response: &mut bool,
    skip: &mut bool,
    label: &mut Option<String>
) -> syn::Result<()> {
    if let Meta::List(meta_list) = &attr.meta {
        meta_list.parse_nested_meta(|meta| {
            if meta.path.is_ident("create") {
                *create = true;
            } else if meta.path.is_ident("update") {
                *update = true;
            } else if meta.path.is_ident("response") {
                *response = true;
            } else if meta.path.is_ident("skip") {
                *skip = true;
            } else if meta.path.is_ident("label") {
                let value: LitStr = meta.value()?.parse()?;
                *label = Some(value.value());
            } else {
                return Err(meta.error("unknown #[field] option"));
            }
            Ok(())
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parse the first field of a struct; `syn::Field` itself has no
    /// standalone `Parse` impl.
    fn first_field(input: syn::ItemStruct) -> syn::Result<FieldDef> {
        let field = input.fields.iter().next().expect("struct has a field");
        FieldDef::from_field(field)
    }

    fn parse(input: syn::ItemStruct) -> FieldDef {
        first_field(input).expect("field parses")
    }

    #[test]
    fn plain_field_has_no_flags() {
        let def = parse(syn::parse_quote! {
            struct T {
                pub amount: i64,
            }
        });
        assert!(!def.is_id);
        assert!(!def.in_create());
        assert!(!def.in_update());
        assert!(!def.in_response());
        assert_eq!(def.label, None);
    }

    #[test]
    fn id_field_is_in_response() {
        let def = parse(syn::parse_quote! {
            struct T {
                #[id]
                pub id: uuid::Uuid,
            }
        });
        assert!(def.is_id);
        assert!(def.in_response());
        assert!(!def.in_create());
        assert!(!def.in_update());
    }

    #[test]
    fn field_flags() {
        let def = parse(syn::parse_quote! {
            struct T {
                #[field(create, update, response)]
                pub title: String,
            }
        });
        assert!(def.in_create());
        assert!(def.in_update());
        assert!(def.in_response());
    }

    #[test]
    fn skip_overrides_other_flags() {
        let def = parse(syn::parse_quote! {
            struct T {
                #[field(create, response, skip)]
                pub secret: String,
            }
        });
        assert!(!def.in_create());
        assert!(!def.in_response());
    }

    #[test]
    fn label_value_is_captured() {
        let def = parse(syn::parse_quote! {
            struct T {
                #[field(response, label = "Last edit")]
                pub updated: Option<chrono::DateTime<chrono::Utc>>,
            }
        });
        assert_eq!(def.label.as_deref(), Some("Last edit"));
    }

    #[test]
    fn unknown_field_option_is_rejected() {
        let result = first_field(syn::parse_quote! {
            struct T {
                #[field(creat)]
                pub title: String,
            }
        });
        assert!(result.is_err());
    }

    #[test]
    fn conventional_detection_by_name() {
        let def = parse(syn::parse_quote! {
            struct T {
                pub status: i32,
            }
        });
        assert!(def.is_conventional());

        let def = parse(syn::parse_quote! {
            struct T {
                pub title: String,
            }
        });
        assert!(!def.is_conventional());
    }

    #[test]
    fn option_and_string_detection() {
        let def = parse(syn::parse_quote! {
            struct T {
                pub note: Option<String>,
            }
        });
        assert!(def.is_option());
        assert!(!def.is_string());

        let def = parse(syn::parse_quote! {
            struct T {
                pub name: String,
            }
        });
        assert!(def.is_string());
        assert!(!def.is_option());
    }
}
