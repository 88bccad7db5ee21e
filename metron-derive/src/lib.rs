//! Derive macro implementation used by `metron-core`.
//!
//! `metron-derive` is an implementation detail of this workspace. The `Quantity` derive expands in
//! terms of `crate::Quantity`, `crate::Unit`, `crate::Dimension` and `crate::differentiator`, so it
//! is intended to be used by `metron-core` (or by crates that expose an identical crate-root API).
//!
//! Most users should depend on `metron` instead and use the predefined quantities.
//!
//! # Generated impls
//!
//! For a quantity marker type `MyQuantity`, the derive implements `crate::Quantity for MyQuantity`.
//! The dimension is computed once and cached in a function-local `OnceLock`.
//!
//! # Attributes
//!
//! The derive reads a required `#[quantity(...)]` attribute:
//!
//! - `reference = METER`: reference unit (any constant expression of type `Unit`)
//! - `dimension = Dimension::LENGTH`: dimension expression, **or**
//! - `dimensionless = "plane angle"`: label of a dimensionless quantity drawing its own prime
//!   differentiator from the global registry
//! - `name = "Length"` (optional): display name, defaults to the type name

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Ident, LitStr, Token,
};

/// Derive `crate::Quantity` for a quantity marker type.
///
/// The derive must be paired with a `#[quantity(...)]` attribute providing `reference` and
/// exactly one of `dimension` or `dimensionless`.
///
/// This macro is intended for use by `metron-core`.
#[proc_macro_derive(Quantity, attributes(quantity))]
pub fn derive_quantity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_quantity_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_quantity_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;

    let attr = parse_quantity_attribute(&input.attrs)?;

    let name = attr
        .name
        .unwrap_or_else(|| LitStr::new(&ident.to_string(), ident.span()));
    let reference = &attr.reference;
    let dimension = match &attr.dimension {
        DimensionSource::Expr(expr) => quote! { #expr },
        DimensionSource::Dimensionless(label) => {
            quote! { crate::differentiator::named_dimensionless(#label) }
        }
    };

    let expanded = quote! {
        impl crate::Quantity for #ident {
            const NAME: &'static str = #name;
            const REFERENCE: crate::Unit = #reference;

            fn dimension() -> crate::Dimension {
                static DIMENSION: ::std::sync::OnceLock<crate::Dimension> =
                    ::std::sync::OnceLock::new();
                *DIMENSION.get_or_init(|| #dimension)
            }
        }
    };

    Ok(expanded)
}

/// Where a quantity's dimension comes from.
enum DimensionSource {
    Expr(Expr),
    Dimensionless(LitStr),
}

/// Parsed contents of the `#[quantity(...)]` attribute.
struct QuantityAttribute {
    name: Option<LitStr>,
    dimension: DimensionSource,
    reference: Expr,
}

impl Parse for QuantityAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name: Option<LitStr> = None;
        let mut dimension: Option<DimensionSource> = None;
        let mut reference: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "name" => {
                    name = Some(input.parse()?);
                }
                "dimension" | "dimensionless" => {
                    if dimension.is_some() {
                        return Err(syn::Error::new(
                            ident.span(),
                            "`dimension` and `dimensionless` are mutually exclusive",
                        ));
                    }
                    dimension = Some(if ident == "dimension" {
                        DimensionSource::Expr(input.parse()?)
                    } else {
                        DimensionSource::Dimensionless(input.parse()?)
                    });
                }
                "reference" => {
                    reference = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            // Consume trailing comma if present
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let dimension = dimension.ok_or_else(|| {
            syn::Error::new(
                input.span(),
                "missing required attribute `dimension` or `dimensionless`",
            )
        })?;
        let reference = reference.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `reference`")
        })?;

        Ok(QuantityAttribute {
            name,
            dimension,
            reference,
        })
    }
}

fn parse_quantity_attribute(attrs: &[Attribute]) -> syn::Result<QuantityAttribute> {
    for attr in attrs {
        if attr.path().is_ident("quantity") {
            return attr.parse_args::<QuantityAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[quantity(...)] attribute",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    #[test]
    fn test_parse_quantity_attribute_complete() {
        let input: DeriveInput = parse_quote! {
            #[quantity(dimension = Dimension::LENGTH, reference = METER)]
            pub enum Length {}
        };

        let attr = parse_quantity_attribute(&input.attrs).unwrap();
        assert!(attr.name.is_none());
        assert!(matches!(attr.dimension, DimensionSource::Expr(_)));
    }

    #[test]
    fn test_parse_quantity_attribute_dimensionless() {
        let input: DeriveInput = parse_quote! {
            #[quantity(dimensionless = "plane angle", reference = RADIAN)]
            pub enum PlaneAngle {}
        };

        let attr = parse_quantity_attribute(&input.attrs).unwrap();
        match attr.dimension {
            DimensionSource::Dimensionless(label) => assert_eq!(label.value(), "plane angle"),
            DimensionSource::Expr(_) => panic!("expected a dimensionless label"),
        }
    }

    #[test]
    fn test_parse_quantity_attribute_missing() {
        let input: DeriveInput = parse_quote! {
            pub enum Length {}
        };

        let result = parse_quantity_attribute(&input.attrs);
        let err = result.err().unwrap();
        assert!(err
            .to_string()
            .contains("missing #[quantity(...)] attribute"));
    }

    #[test]
    fn test_parse_quantity_attribute_missing_dimension() {
        let input: DeriveInput = parse_quote! {
            #[quantity(reference = METER)]
            pub enum Length {}
        };

        let err = parse_quantity_attribute(&input.attrs).err().unwrap();
        assert!(err
            .to_string()
            .contains("missing required attribute `dimension` or `dimensionless`"));
    }

    #[test]
    fn test_parse_quantity_attribute_missing_reference() {
        let input: DeriveInput = parse_quote! {
            #[quantity(dimension = Dimension::LENGTH)]
            pub enum Length {}
        };

        let err = parse_quantity_attribute(&input.attrs).err().unwrap();
        assert!(err
            .to_string()
            .contains("missing required attribute `reference`"));
    }

    #[test]
    fn test_parse_quantity_attribute_both_dimensions() {
        let input: DeriveInput = parse_quote! {
            #[quantity(dimension = Dimension::NONE, dimensionless = "angle", reference = RADIAN)]
            pub enum PlaneAngle {}
        };

        let err = parse_quantity_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("mutually exclusive"));
    }

    #[test]
    fn test_parse_quantity_attribute_unknown_field() {
        let input: DeriveInput = parse_quote! {
            #[quantity(dimension = Dimension::LENGTH, reference = METER, ratio = 1.0)]
            pub enum Length {}
        };

        let err = parse_quantity_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("unknown attribute `ratio`"));
    }

    #[test]
    fn test_derive_quantity_impl_basic() {
        let input: DeriveInput = parse_quote! {
            #[quantity(dimension = Dimension::LENGTH, reference = METER)]
            pub enum Length {}
        };

        let code = derive_quantity_impl(input).unwrap().to_string();
        assert!(code.contains("impl crate :: Quantity for Length"));
        assert!(code.contains("const NAME : & 'static str = \"Length\""));
        assert!(code.contains("const REFERENCE : crate :: Unit = METER"));
        assert!(code.contains("OnceLock"));
        assert!(code.contains("Dimension :: LENGTH"));
    }

    #[test]
    fn test_derive_quantity_impl_custom_name() {
        let input: DeriveInput = parse_quote! {
            #[quantity(name = "Electric current", dimension = Dimension::ELECTRIC_CURRENT, reference = AMPERE)]
            pub enum ElectricCurrent {}
        };

        let code = derive_quantity_impl(input).unwrap().to_string();
        assert!(code.contains("\"Electric current\""));
    }

    #[test]
    fn test_derive_quantity_impl_dimensionless() {
        let input: DeriveInput = parse_quote! {
            #[quantity(dimensionless = "refractive index", reference = UNIT)]
            pub enum RefractiveIndex {}
        };

        let code = derive_quantity_impl(input).unwrap().to_string();
        assert!(code.contains(
            "crate :: differentiator :: named_dimensionless (\"refractive index\")"
        ));
    }

    #[test]
    fn test_attribute_parse_with_trailing_comma() {
        let tokens = quote! {
            dimension = Dimension::LENGTH, reference = METER,
        };
        let attr: QuantityAttribute = syn::parse2(tokens).unwrap();
        assert!(attr.name.is_none());
    }

    #[test]
    fn test_parse_empty_attribute() {
        let tokens = quote! {};
        let result: syn::Result<QuantityAttribute> = syn::parse2(tokens);
        assert!(result.is_err());
    }

    #[test]
    fn test_derive_quantity_impl_error_path() {
        let input: DeriveInput = parse_quote! {
            pub enum Length {}
        };
        let err = derive_quantity_impl(input).err().unwrap();
        let code = err.to_compile_error().to_string();
        assert!(code.contains("compile_error"));
    }
}
