//! Generic type parameter handling and trait bound management.
//!
//! Bounds are added only for generics that appear in rendered fields.
//! Sensitive and skipped fields are never read, so their types stay
//! unconstrained:
//!
//! ```ignore
//! #[derive(Outline)]
//! struct Tagged<C, T> {
//!     #[outline(sensitive)]
//!     credentials: C,   // C needs no bound
//!     tags: Vec<T>,     // T: Outline
//! }
//! ```
//!
//! ## PhantomData Handling
//!
//! `PhantomData<T>` renders as absent regardless of `T`, so its parameters
//! are skipped when collecting generics.

use syn::{parse_quote, Ident};

use crate::crate_path;

pub(crate) fn collect_generics_from_type(
    ty: &syn::Type,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    match ty {
        syn::Type::Path(path) => {
            if let Some(segment) = path.path.segments.last() {
                if segment.ident == "PhantomData" {
                    return;
                }

                if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
                    for arg in &args.args {
                        if let syn::GenericArgument::Type(inner_ty) = arg {
                            collect_generics_from_type(inner_ty, generics, result);
                        }
                    }
                }

                // Check if this type identifier matches a generic parameter
                for param in generics.type_params() {
                    if segment.ident == param.ident && !result.iter().any(|g| g == &param.ident) {
                        result.push(param.ident.clone());
                    }
                }
            }
        }
        syn::Type::Reference(reference) => {
            collect_generics_from_type(&reference.elem, generics, result);
        }
        syn::Type::Slice(slice) => collect_generics_from_type(&slice.elem, generics, result),
        syn::Type::Array(array) => collect_generics_from_type(&array.elem, generics, result),
        syn::Type::Paren(paren) => collect_generics_from_type(&paren.elem, generics, result),
        syn::Type::Group(group) => collect_generics_from_type(&group.elem, generics, result),
        _ => {}
    }
}

/// Adds `Outline` bounds to generic parameters used in rendered fields.
pub(crate) fn add_outline_bounds(mut generics: syn::Generics, used_generics: &[Ident]) -> syn::Generics {
    for param in generics.type_params_mut() {
        if used_generics.iter().any(|g| g == &param.ident) {
            let outline_path = crate_path("Outline");
            param.bounds.push(parse_quote!(#outline_path));
        }
    }
    generics
}

#[cfg(test)]
mod tests {
    use quote::{quote, ToTokens};

    use super::*;

    fn generics(tokens: proc_macro2::TokenStream) -> syn::Generics {
        syn::parse2(tokens).expect("should parse as Generics")
    }

    fn ty(tokens: proc_macro2::TokenStream) -> syn::Type {
        syn::parse2(tokens).expect("should parse as Type")
    }

    #[test]
    fn finds_nested_parameters_once() {
        let generics = generics(quote! { <K, V, U> });
        let mut used = Vec::new();
        collect_generics_from_type(&ty(quote! { BTreeMap<K, Vec<V>> }), &generics, &mut used);
        collect_generics_from_type(&ty(quote! { Option<V> }), &generics, &mut used);
        let names: Vec<_> = used.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["K", "V"]);
    }

    #[test]
    fn looks_through_references_and_slices() {
        let generics = generics(quote! { <'a, T, U> });
        let mut used = Vec::new();
        collect_generics_from_type(&ty(quote! { &'a [T] }), &generics, &mut used);
        collect_generics_from_type(&ty(quote! { [U; 4] }), &generics, &mut used);
        let names: Vec<_> = used.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["T", "U"]);
    }

    #[test]
    fn phantom_data_is_skipped() {
        let generics = generics(quote! { <T> });
        let mut used = Vec::new();
        collect_generics_from_type(&ty(quote! { PhantomData<T> }), &generics, &mut used);
        assert!(used.is_empty());
    }

    #[test]
    fn bounds_only_used_parameters() {
        let bounded = add_outline_bounds(
            generics(quote! { <T, U> }),
            &[Ident::new("U", proc_macro2::Span::call_site())],
        );
        let params: Vec<_> = bounded.type_params().collect();
        assert!(params[0].bounds.is_empty());
        assert!(params[1]
            .bounds
            .to_token_stream()
            .to_string()
            .contains("Outline"));
    }
}
