//! Shared metadata-table generation for struct and enum derivation.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote, quote_spanned};
use syn::{spanned::Spanned, Fields, Result};

use crate::{
    crate_path,
    generics::collect_generics_from_type,
    strategy::{parse_field_options, Strategy},
};

/// Generated `outline()` body plus the generics that need an `Outline` bound.
pub(crate) struct DeriveOutput {
    pub(crate) outline_body: TokenStream,
    pub(crate) used_generics: Vec<Ident>,
}

/// Destructuring pattern and value expression for one set of fields.
pub(crate) struct FieldsOutput {
    /// Pattern contents: `{ a, b, .. }`, `( field_0, _ )` or empty for units.
    pub(crate) pattern: TokenStream,
    /// Expression producing the `Value` for these fields.
    pub(crate) value: TokenStream,
}

/// Generates the metadata table for a struct body or an enum variant.
///
/// ## Field Entry Rules
///
/// | Strategy | Entry | Binding |
/// |----------|-------|---------|
/// | `Render` | `Field::new(name, Outline::outline(binding))` | bound |
/// | `Redact` | `Field::redacted(name)` | ignored |
/// | `Skip` | `Field::unexported(name)` | ignored |
///
/// A tuple body with exactly one rendered, unrenamed field is transparent and
/// yields the inner value directly.
pub(crate) fn generate_fields(
    record_name: &str,
    fields: &Fields,
    generics: &syn::Generics,
    used_generics: &mut Vec<Ident>,
) -> Result<FieldsOutput> {
    let record_path = crate_path("Record");
    let field_path = crate_path("Field");
    let value_path = crate_path("Value");
    let outline_path = crate_path("Outline");

    let mut patterns = Vec::new();
    let mut entries = Vec::new();
    let mut transparent = None;

    let named = matches!(fields, Fields::Named(_));
    let single_unnamed = matches!(fields, Fields::Unnamed(unnamed) if unnamed.unnamed.len() == 1);

    for (index, field) in fields.iter().enumerate() {
        let span = field.span();
        let options = parse_field_options(&field.attrs)?;
        let (member, binding) = match &field.ident {
            Some(ident) => (ident.to_string(), ident.clone()),
            None => (index.to_string(), format_ident!("field_{index}")),
        };
        let name = options.rename.clone().unwrap_or(member);

        match options.strategy {
            Strategy::Render => {
                collect_generics_from_type(&field.ty, generics, used_generics);
                patterns.push(quote! { #binding });
                if single_unnamed && options.rename.is_none() {
                    transparent = Some(quote_spanned! { span =>
                        #outline_path::outline(#binding)
                    });
                }
                entries.push(quote_spanned! { span =>
                    record.push(#field_path::new(#name, #outline_path::outline(#binding)));
                });
            }
            Strategy::Redact => {
                if !named {
                    patterns.push(quote! { _ });
                }
                if single_unnamed && options.rename.is_none() {
                    transparent = Some(quote_spanned! { span =>
                        #value_path::redacted()
                    });
                }
                entries.push(quote_spanned! { span =>
                    record.push(#field_path::redacted(#name));
                });
            }
            Strategy::Skip => {
                if !named {
                    patterns.push(quote! { _ });
                }
                entries.push(quote_spanned! { span =>
                    record.push(#field_path::unexported(#name));
                });
            }
        }
    }

    let pattern = match fields {
        Fields::Named(_) => quote! { { #(#patterns,)* .. } },
        Fields::Unnamed(_) => quote! { ( #(#patterns),* ) },
        Fields::Unit => quote! {},
    };

    let value = if let Some(inner) = transparent {
        inner
    } else if entries.is_empty() {
        quote! { #value_path::Record(#record_path::new(#record_name)) }
    } else {
        quote! {
            {
                let mut record = #record_path::new(#record_name);
                #(#entries)*
                #value_path::Record(record)
            }
        }
    };

    Ok(FieldsOutput { pattern, value })
}
