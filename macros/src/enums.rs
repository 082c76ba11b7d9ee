//! Enum expansion: fieldless enums are leaves.
//!
//! The discriminant is cast to the repr type and hashed as that integer, so
//! `#[repr(u8)] enum E { A = 3 }` feeds the single byte `3`. Without an
//! integer `repr` the discriminant is hashed as `isize`.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{DataEnum, DeriveInput, Fields, Result};

use crate::attrs::{repr_int, ContainerArgs};

pub fn expand(input: &DeriveInput, data: &DataEnum) -> Result<TokenStream> {
    let args = ContainerArgs::from_attrs(&input.attrs)?;
    if args.contiguous {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "`contiguous` applies to structs; fieldless enums are leaves already",
        ));
    }

    if let Some(variant) = data.variants.iter().find(|v| !matches!(v.fields, Fields::Unit)) {
        return Err(syn::Error::new_spanned(
            variant,
            "HashAppend can only be derived for fieldless enums",
        ));
    }

    let repr = repr_int(&input.attrs)?.unwrap_or_else(|| format_ident!("isize"));

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let arms = data.variants.iter().map(|v| {
        let ident = &v.ident;
        quote! { Self::#ident => Self::#ident as #repr, }
    });

    Ok(quote! {
        impl #impl_generics ::hash_append::HashAppend for #name #ty_generics #where_clause {
            const SHAPE: ::hash_append::Shape = ::hash_append::Shape::Contiguous;

            #[inline]
            fn hash_append<__H: ::hash_append::Accumulator>(&self, h: &mut __H) {
                let discriminant: #repr = match self {
                    #(#arms)*
                };
                ::hash_append::HashAppend::hash_append(&discriminant, h);
            }
        }
    })
}
