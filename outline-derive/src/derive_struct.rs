//! Struct-specific `Outline` derivation.
//!
//! Named and tuple structs become records (or a transparent inner value for
//! single-field tuple structs); unit structs become empty records.

use quote::quote;
use syn::{DataStruct, Fields, Result};

use crate::transform::{generate_fields, DeriveOutput, FieldsOutput};

pub(crate) fn derive_struct(
    record_name: &str,
    data: &DataStruct,
    generics: &syn::Generics,
) -> Result<DeriveOutput> {
    let mut used_generics = Vec::new();
    let FieldsOutput { pattern, value } =
        generate_fields(record_name, &data.fields, generics, &mut used_generics)?;

    let outline_body = match data.fields {
        Fields::Unit => value,
        Fields::Named(_) | Fields::Unnamed(_) => quote! {
            let Self #pattern = self;
            #value
        },
    };

    Ok(DeriveOutput {
        outline_body,
        used_generics,
    })
}
