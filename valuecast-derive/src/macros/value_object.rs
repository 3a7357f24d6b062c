//! Derive macro for `ValueObject`
//!
//! Generates the contract implementation plus the derived behaviour that
//! every value object shares: `Display`, `PartialEq`, `Serialize` and
//! `Deserialize`, all in terms of the raw field.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Index, Type};

use crate::attributes::{is_raw_field, ValueObjectOptions};

pub fn derive_value_object(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(expanded) => expanded.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// The field holding the raw value
struct RawField<'a> {
    /// `self.value` or `self.0`
    access: TokenStream2,
    ty: &'a Type,
}

fn find_raw_field<'a>(input: &'a DeriveInput, fields: &'a Fields) -> syn::Result<RawField<'a>> {
    let all: Vec<_> = fields.iter().enumerate().collect();
    let marked: Vec<_> = all.iter().filter(|(_, f)| is_raw_field(f)).collect();

    let (index, field) = match (all.len(), marked.as_slice()) {
        (0, _) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "ValueObject requires a field holding the raw value",
            ))
        }
        (1, _) => all[0],
        (_, [single]) => **single,
        (_, []) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "mark the field holding the raw value with #[value]",
            ))
        }
        (_, [_, second, ..]) => {
            return Err(syn::Error::new_spanned(
                &second.1.ident,
                "only one field can be marked with #[value]",
            ))
        }
    };

    let access = match &field.ident {
        Some(ident) => quote! { self.#ident },
        None => {
            let index = Index::from(index);
            quote! { self.#index }
        }
    };

    Ok(RawField { access, ty: &field.ty })
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "ValueObject cannot be derived for generic structs",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "ValueObject can only be derived for structs",
            ))
        }
    };

    let options = ValueObjectOptions::from_attrs(&input.attrs)?;
    let raw = find_raw_field(input, fields)?;
    let raw_ty = raw.ty;
    let access = &raw.access;
    let name = options.name.unwrap_or_else(|| struct_name.to_string());

    let construct = if options.unchecked {
        if fields.len() != 1 {
            return Err(syn::Error::new_spanned(
                struct_name,
                "`unchecked` requires a struct with a single field",
            ));
        }
        match fields {
            Fields::Named(named) => {
                let ident = &named.named[0].ident;
                quote! { ::core::result::Result::Ok(Self { #ident: raw }) }
            }
            _ => quote! { ::core::result::Result::Ok(Self(raw)) },
        }
    } else {
        match &options.constructor {
            Some(path) => quote! { #path(raw) },
            None => quote! { Self::new(raw) },
        }
    };

    Ok(quote! {
        impl ::valuecast::ValueObject for #struct_name {
            type Raw = #raw_ty;

            const NAME: &'static str = #name;

            fn value(&self) -> &Self::Raw {
                &#access
            }

            fn make(raw: Self::Raw) -> ::core::result::Result<Self, ::valuecast::ValidationError> {
                #construct
            }
        }

        impl ::core::fmt::Display for #struct_name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&::valuecast::base::stringify(::valuecast::ValueObject::value(self)))
            }
        }

        impl ::core::cmp::PartialEq for #struct_name {
            fn eq(&self, other: &Self) -> bool {
                ::valuecast::base::equals(self, other)
            }
        }

        impl ::valuecast::__private::serde::Serialize for #struct_name {
            fn serialize<__S>(&self, serializer: __S) -> ::core::result::Result<__S::Ok, __S::Error>
            where
                __S: ::valuecast::__private::serde::Serializer,
            {
                ::valuecast::base::serialize(self, serializer)
            }
        }

        impl<'de> ::valuecast::__private::serde::Deserialize<'de> for #struct_name {
            fn deserialize<__D>(deserializer: __D) -> ::core::result::Result<Self, __D::Error>
            where
                __D: ::valuecast::__private::serde::Deserializer<'de>,
            {
                let raw = <#raw_ty as ::valuecast::__private::serde::Deserialize<'de>>::deserialize(deserializer)?;
                <Self as ::valuecast::ValueObject>::make(raw)
                    .map_err(<__D::Error as ::valuecast::__private::serde::de::Error>::custom)
            }
        }
    })
}
