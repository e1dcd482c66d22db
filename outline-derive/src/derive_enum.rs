//! Enum-specific `Outline` derivation.
//!
//! This module generates one match arm per variant:
//!
//! | Variant | Value |
//! |---------|-------|
//! | unit | bare literal of the (renamed) variant name |
//! | with fields | record holding one field named after the variant |
//! | `#[outline(sensitive)]` | the redaction marker in place of the payload |
//! | `#[outline(skip)]` | absent, so the enclosing field is omitted |

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DataEnum, Fields, Result};

use crate::{
    crate_path,
    strategy::{parse_field_options, Strategy},
    transform::{generate_fields, DeriveOutput, FieldsOutput},
};

pub(crate) fn derive_enum(
    record_name: &str,
    data: &DataEnum,
    generics: &syn::Generics,
) -> Result<DeriveOutput> {
    let record_path = crate_path("Record");
    let field_path = crate_path("Field");
    let value_path = crate_path("Value");
    let mut used_generics = Vec::new();
    let mut arms = Vec::new();

    for variant in &data.variants {
        let variant_ident = &variant.ident;
        let options = parse_field_options(&variant.attrs)?;
        let variant_name = options
            .rename
            .unwrap_or_else(|| variant_ident.to_string());
        let ignore_fields = ignore_pattern(&variant.fields);

        let arm = match (options.strategy, &variant.fields) {
            (Strategy::Skip, _) => quote! {
                Self::#variant_ident #ignore_fields => #value_path::absent(),
            },
            (Strategy::Redact, Fields::Unit) => quote! {
                Self::#variant_ident => #value_path::redacted(),
            },
            (Strategy::Redact, _) => quote! {
                Self::#variant_ident #ignore_fields => #value_path::Record(
                    #record_path::new(#record_name).with(#field_path::redacted(#variant_name))
                ),
            },
            (Strategy::Render, Fields::Unit) => quote! {
                Self::#variant_ident => #value_path::literal(#variant_name),
            },
            (Strategy::Render, fields) => {
                let FieldsOutput { pattern, value } =
                    generate_fields(&variant_name, fields, generics, &mut used_generics)?;
                quote! {
                    Self::#variant_ident #pattern => #value_path::Record(
                        #record_path::new(#record_name).with(#field_path::new(#variant_name, #value))
                    ),
                }
            }
        };
        arms.push(arm);
    }

    let outline_body = if arms.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            match self {
                #(#arms)*
            }
        }
    };

    Ok(DeriveOutput {
        outline_body,
        used_generics,
    })
}

fn ignore_pattern(fields: &Fields) -> TokenStream {
    match fields {
        Fields::Named(_) => quote! { { .. } },
        Fields::Unnamed(_) => quote! { (..) },
        Fields::Unit => quote! {},
    }
}
