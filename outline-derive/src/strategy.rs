//! Parsing of `#[outline(...)]` field attributes.
//!
//! This module maps attribute syntax to metadata-table decisions and produces
//! structured errors for invalid forms.

use proc_macro2::Span;
use syn::{spanned::Spanned, Attribute, LitStr, Meta, Result};

/// How a field appears in the generated metadata table.
///
/// ## Strategy Mapping
///
/// | Attribute | Strategy | Behavior |
/// |-----------|----------|----------|
/// | None | `Render` | Field value rendered through `Outline` |
/// | `#[outline(sensitive)]` | `Redact` | Marker emitted, value never read |
/// | `#[outline(skip)]` | `Skip` | Field unexported, never rendered |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Strategy {
    /// No annotation: render the field's own value.
    Render,
    /// `#[outline(sensitive)]`: emit the redaction marker.
    Redact,
    /// `#[outline(skip)]`: mark the field unexported.
    Skip,
}

/// Everything parsed from a field's `#[outline(...)]` attributes.
#[derive(Clone, Debug)]
pub(crate) struct FieldOptions {
    pub(crate) strategy: Strategy,
    pub(crate) rename: Option<String>,
}

fn set_strategy(target: &mut Option<Strategy>, next: Strategy, span: Span) -> Result<()> {
    if let Some(existing) = target {
        let message = if *existing == next {
            "duplicate #[outline] option on the same field"
        } else {
            "`sensitive` and `skip` cannot be combined on the same field"
        };
        return Err(syn::Error::new(span, message));
    }
    *target = Some(next);
    Ok(())
}

pub(crate) fn parse_field_options(attrs: &[Attribute]) -> Result<FieldOptions> {
    let mut strategy: Option<Strategy> = None;
    let mut rename: Option<String> = None;

    for attr in attrs {
        if !attr.path().is_ident("outline") {
            continue;
        }

        match &attr.meta {
            Meta::Path(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "expected options: #[outline(sensitive)], #[outline(skip)] or \
                    #[outline(rename = \"...\")]",
                ));
            }
            Meta::List(list) => {
                list.parse_nested_meta(|meta| {
                    let span = meta.path.span();
                    if meta.path.is_ident("sensitive") {
                        set_strategy(&mut strategy, Strategy::Redact, span)
                    } else if meta.path.is_ident("skip") {
                        set_strategy(&mut strategy, Strategy::Skip, span)
                    } else if meta.path.is_ident("rename") {
                        if rename.is_some() {
                            return Err(meta.error("multiple renames specified on the same field"));
                        }
                        let name: LitStr = meta.value()?.parse()?;
                        rename = Some(name.value());
                        Ok(())
                    } else {
                        Err(meta.error(format!(
                            "unknown field option `{}`; expected `sensitive`, `skip` or `rename`",
                            meta.path
                                .get_ident()
                                .map_or_else(|| "?".to_string(), ToString::to_string)
                        )))
                    }
                })?;
            }
            Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "name-value syntax is not supported for #[outline]",
                ));
            }
        }
    }

    // Default: no annotation means render the value
    Ok(FieldOptions {
        strategy: strategy.unwrap_or(Strategy::Render),
        rename,
    })
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::DeriveInput;

    use super::*;

    fn parse_attrs(tokens: proc_macro2::TokenStream) -> Vec<Attribute> {
        let input: DeriveInput = syn::parse2(quote! {
            #tokens
            struct Dummy;
        })
        .expect("should parse as DeriveInput");
        input.attrs
    }

    #[test]
    fn no_attribute_returns_render() {
        let attrs = parse_attrs(quote! {});
        let options = parse_field_options(&attrs).unwrap();
        assert_eq!(options.strategy, Strategy::Render);
        assert!(options.rename.is_none());
    }

    #[test]
    fn sensitive_returns_redact() {
        let attrs = parse_attrs(quote! { #[outline(sensitive)] });
        let options = parse_field_options(&attrs).unwrap();
        assert_eq!(options.strategy, Strategy::Redact);
    }

    #[test]
    fn skip_returns_skip() {
        let attrs = parse_attrs(quote! { #[outline(skip)] });
        let options = parse_field_options(&attrs).unwrap();
        assert_eq!(options.strategy, Strategy::Skip);
    }

    #[test]
    fn rename_combines_with_sensitive() {
        let attrs = parse_attrs(quote! { #[outline(sensitive, rename = "TemplateURL")] });
        let options = parse_field_options(&attrs).unwrap();
        assert_eq!(options.strategy, Strategy::Redact);
        assert_eq!(options.rename.as_deref(), Some("TemplateURL"));
    }

    #[test]
    fn options_may_span_several_attributes() {
        let attrs = parse_attrs(quote! {
            #[outline(rename = "Name")]
            #[outline(sensitive)]
        });
        let options = parse_field_options(&attrs).unwrap();
        assert_eq!(options.strategy, Strategy::Redact);
        assert_eq!(options.rename.as_deref(), Some("Name"));
    }

    #[test]
    fn sensitive_and_skip_conflict() {
        let attrs = parse_attrs(quote! { #[outline(sensitive, skip)] });
        let result = parse_field_options(&attrs);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("cannot be combined"));
    }

    #[test]
    fn duplicate_option_errors() {
        let attrs = parse_attrs(quote! {
            #[outline(skip)]
            #[outline(skip)]
        });
        let result = parse_field_options(&attrs);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("duplicate #[outline] option"));
    }

    #[test]
    fn bare_outline_errors() {
        let attrs = parse_attrs(quote! { #[outline] });
        let result = parse_field_options(&attrs);
        assert!(result.unwrap_err().to_string().contains("expected options"));
    }

    #[test]
    fn name_value_syntax_error() {
        let attrs = parse_attrs(quote! { #[outline = "value"] });
        let result = parse_field_options(&attrs);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("name-value syntax is not supported"));
    }

    #[test]
    fn unknown_option_errors() {
        let attrs = parse_attrs(quote! { #[outline(secret)] });
        let result = parse_field_options(&attrs);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("unknown field option"));
    }

    #[test]
    fn other_attributes_ignored() {
        let attrs = parse_attrs(quote! {
            #[derive(Clone)]
            #[serde(skip)]
        });
        let options = parse_field_options(&attrs).unwrap();
        assert_eq!(options.strategy, Strategy::Render);
    }
}
