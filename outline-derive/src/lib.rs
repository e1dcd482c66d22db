//! Derive macros for `outline`.
//!
//! This crate generates the metadata table behind `#[derive(Outline)]`. It:
//! - reads `#[outline(...)]` container and field attributes
//! - emits an `Outline` implementation that lists every field with its name,
//!   accessor, and `exported` / `sensitive` flags
//!
//! It does **not** render anything. Rendering lives in the main `outline`
//! crate and runs over the generated value at runtime.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

#[cfg(feature = "slog")]
use proc_macro2::Span;
use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Result};

mod container;
mod derive_enum;
mod derive_struct;
mod generics;
mod strategy;
mod transform;
use container::{parse_container_options, ContainerOptions};
use derive_enum::derive_enum;
use derive_struct::derive_struct;
use generics::add_outline_bounds;

/// Derives `outline::Outline` (and related impls) for structs and enums.
///
/// # Container Attributes
///
/// These attributes are placed on the struct/enum itself:
///
/// - `#[outline(rename = "Name")]` - Record name stored in the generated value. Defaults to the
///   type name. Record names are metadata and do not appear in rendered text.
/// - `#[outline(skip_debug)]` - Opt out of `Debug` impl generation. Use this when you need a
///   custom `Debug` implementation or the type already derives `Debug` elsewhere.
///
/// # Field Attributes
///
/// - **No annotation**: The field is rendered through its own `Outline` impl.
///
/// - `#[outline(sensitive)]`: The field renders as `<sensitive>`. Its value is never read, so
///   the field type does not need to implement `Outline`.
///
/// - `#[outline(skip)]`: The field is unexported and never appears in output. Its type does not
///   need to implement `Outline`.
///
/// - `#[outline(rename = "Name")]`: Field name used in output. Combines with `sensitive`.
///
/// Tuple structs with a single unannotated field are transparent: they render as the inner
/// value. Enums render unit variants as their bare name and data-carrying variants as a
/// one-entry record keyed by the variant name. Unions are rejected at compile time.
///
/// # Additional Generated Impls
///
/// - `Debug`: formats the rendered text, so sensitive fields show `<sensitive>` there too.
///   Use `#[outline(skip_debug)]` on the container to opt out.
/// - `slog::Value` (behind `cfg(feature = "slog")`): logs the rendered text through
///   `outline::slog::ToRenderedText`. The derive first looks for a top-level `slog` crate; if
///   not found, it checks the `OUTLINE_SLOG_CRATE` env var for an alternate path (e.g.,
///   `my_log::slog`). If neither is available, compilation fails with a clear error.
#[proc_macro_derive(Outline, attributes(outline))]
pub fn derive_outline(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the outline crate root.
///
/// Handles crate renaming (e.g., `my_outline = { package = "outline", ... }`)
/// and internal usage (when derive is used inside the outline crate itself).
fn crate_root() -> TokenStream {
    match crate_name("outline") {
        Ok(FoundCrate::Itself) => quote! { crate },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::outline },
    }
}

/// Returns the token stream to reference the slog crate root.
///
/// Handles crate renaming (e.g., `my_slog = { package = "slog", ... }`).
/// If the top-level `slog` crate is not available, falls back to the
/// `OUTLINE_SLOG_CRATE` env var, which should be a path like `my_log::slog`.
#[cfg(feature = "slog")]
fn slog_crate() -> Result<TokenStream> {
    match crate_name("slog") {
        Ok(FoundCrate::Itself) => Ok(quote! { crate }),
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            Ok(quote! { ::#ident })
        }
        Err(_) => {
            let env_value = std::env::var("OUTLINE_SLOG_CRATE").map_err(|_| {
                syn::Error::new(
                    Span::call_site(),
                    "slog support is enabled, but no top-level `slog` crate was found. \
Set the OUTLINE_SLOG_CRATE env var to a path (e.g., `my_log::slog`) or add \
`slog` as a direct dependency.",
                )
            })?;
            let path = syn::parse_str::<syn::Path>(&env_value).map_err(|_| {
                syn::Error::new(
                    Span::call_site(),
                    format!("OUTLINE_SLOG_CRATE must be a valid Rust path (got `{env_value}`)"),
                )
            })?;
            Ok(quote! { #path })
        }
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item_ident = format_ident!("{}", item);
    quote! { #root::#item_ident }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let ContainerOptions { rename, skip_debug } = parse_container_options(&attrs)?;
    let record_name = rename.unwrap_or_else(|| ident.to_string());

    let crate_root = crate_root();

    let output = match &data {
        Data::Struct(data) => derive_struct(&record_name, data, &generics)?,
        Data::Enum(data) => derive_enum(&record_name, data, &generics)?,
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`Outline` cannot be derived for unions",
            ));
        }
    };

    let outline_generics = add_outline_bounds(generics.clone(), &output.used_generics);
    let (impl_generics, ty_generics, where_clause) = outline_generics.split_for_impl();
    let outline_body = &output.outline_body;

    let debug_impl = if skip_debug {
        quote! {}
    } else {
        quote! {
            impl #impl_generics ::core::fmt::Debug for #ident #ty_generics #where_clause {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    ::core::fmt::Display::fmt(&#crate_root::Outline::outline(self), f)
                }
            }
        }
    };

    // Only generate slog impl when the slog feature is enabled on outline-derive.
    #[cfg(feature = "slog")]
    let slog_impl = {
        let slog_crate = slog_crate()?;
        quote! {
            impl #impl_generics #slog_crate::Value for #ident #ty_generics #where_clause {
                fn serialize(
                    &self,
                    record: &#slog_crate::Record<'_>,
                    key: #slog_crate::Key,
                    serializer: &mut dyn #slog_crate::Serializer,
                ) -> #slog_crate::Result {
                    let rendered = #crate_root::slog::ToRenderedText::to_rendered_text(self);
                    #slog_crate::Value::serialize(&rendered, record, key, serializer)
                }
            }
        }
    };

    #[cfg(not(feature = "slog"))]
    let slog_impl = quote! {};

    Ok(quote! {
        impl #impl_generics #crate_root::Outline for #ident #ty_generics #where_clause {
            fn outline(&self) -> #crate_root::Value {
                #outline_body
            }
        }

        #debug_impl

        #slog_impl

        // `slog` already provides `impl<V: Value> Value for &V`, so a reference
        // impl here would conflict with the blanket impl.
    })
}
