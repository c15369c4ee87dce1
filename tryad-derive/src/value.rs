//! Implementation of the `#[derive(Value)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, ExprPath, LitStr, parse_macro_input};

/// Main implementation of the Value derive macro.
pub fn derive_value_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = expand(&input).unwrap_or_else(syn::Error::into_compile_error);

    TokenStream::from(expanded)
}

/// The predicates named by `#[value(...)]` attributes.
#[derive(Default)]
struct Predicates {
    nil: Option<ExprPath>,
    falsy: Option<ExprPath>,
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    if let Data::Union(_) = input.data {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Value cannot be derived for unions.",
        ));
    }

    let predicates = parse_predicates(&input.attrs)?;

    let name = &input.ident;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    let is_nil = predicates.nil.map(|path| {
        quote! {
            #[inline]
            fn is_nil(&self) -> bool {
                #path(self)
            }
        }
    });

    let is_falsy = predicates.falsy.map(|path| {
        quote! {
            #[inline]
            fn is_falsy(&self) -> bool {
                <Self as ::tryad::value::Value>::is_nil(self) || #path(self)
            }
        }
    });

    Ok(quote! {
        impl #impl_generics ::tryad::value::Value for #name #type_generics #where_clause {
            #is_nil
            #is_falsy
        }
    })
}

fn parse_predicates(attributes: &[Attribute]) -> syn::Result<Predicates> {
    let mut predicates = Predicates::default();

    for attribute in attributes.iter().filter(|attribute| attribute.path().is_ident("value")) {
        attribute.parse_nested_meta(|meta| {
            let slot = if meta.path.is_ident("nil") {
                &mut predicates.nil
            } else if meta.path.is_ident("falsy") {
                &mut predicates.falsy
            } else {
                return Err(meta.error("expected `nil` or `falsy`"));
            };

            if slot.is_some() {
                return Err(meta.error("duplicate predicate"));
            }

            let literal: LitStr = meta.value()?.parse()?;
            *slot = Some(literal.parse()?);
            Ok(())
        })?;
    }

    Ok(predicates)
}
