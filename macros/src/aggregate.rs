//! Struct expansion: aggregate rule, or leaf rule with `contiguous`.
//!
//! ```ignore
//! #[derive(HashAppend)]
//! struct Point { x: i32, y: i32 }
//!
//! // Generates:
//! impl HashAppend for Point {
//!     const SHAPE: Shape = Shape::Tuple;
//!     fn hash_append<__H: Accumulator>(&self, h: &mut __H) {
//!         HashAppend::hash_append(&self.x, h);
//!         HashAppend::hash_append(&self.y, h);
//!     }
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, DataStruct, DeriveInput, Fields, GenericParam, Index, Result};

use crate::attrs::{is_skipped, ContainerArgs};

pub fn expand(input: &DeriveInput, data: &DataStruct) -> Result<TokenStream> {
    let args = ContainerArgs::from_attrs(&input.attrs)?;
    if args.contiguous {
        return Ok(expand_contiguous(input));
    }

    let name = &input.ident;

    // Every type parameter must itself be hashable.
    let mut generics = input.generics.clone();
    for param in generics.params.iter_mut() {
        if let GenericParam::Type(ty) = param {
            ty.bounds.push(parse_quote!(::hash_append::HashAppend));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let mut appends = Vec::new();
    match &data.fields {
        Fields::Named(named) => {
            for field in &named.named {
                if is_skipped(&field.attrs)? {
                    continue;
                }
                let ident = &field.ident;
                appends.push(quote! {
                    ::hash_append::HashAppend::hash_append(&self.#ident, h);
                });
            }
        }
        Fields::Unnamed(unnamed) => {
            for (i, field) in unnamed.unnamed.iter().enumerate() {
                if is_skipped(&field.attrs)? {
                    continue;
                }
                let index = Index::from(i);
                appends.push(quote! {
                    ::hash_append::HashAppend::hash_append(&self.#index, h);
                });
            }
        }
        Fields::Unit => {}
    }

    // `h` is unused for unit structs and fully skipped structs.
    Ok(quote! {
        impl #impl_generics ::hash_append::HashAppend for #name #ty_generics #where_clause {
            const SHAPE: ::hash_append::Shape = ::hash_append::Shape::Tuple;

            #[inline]
            #[allow(unused_variables)]
            fn hash_append<__H: ::hash_append::Accumulator>(&self, h: &mut __H) {
                #(#appends)*
            }
        }
    })
}

/// Leaf rule over the struct's own bytes.
///
/// The padding check is delegated to zerocopy: the generated impl only
/// type-checks if the struct implements `IntoBytes + Immutable`. That bound
/// does not make the bytes canonical. Structs containing floats must not be
/// declared contiguous, since `-0.0` and `0.0` would hash differently.
fn expand_contiguous(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;
    let mut generics = input.generics.clone();
    generics.make_where_clause().predicates.push(parse_quote! {
        Self: ::hash_append::zerocopy::IntoBytes + ::hash_append::zerocopy::Immutable
    });
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::hash_append::HashAppend for #name #ty_generics #where_clause {
            const SHAPE: ::hash_append::Shape = ::hash_append::Shape::Contiguous;

            #[inline]
            fn hash_append<__H: ::hash_append::Accumulator>(&self, h: &mut __H) {
                h.update(::hash_append::zerocopy::IntoBytes::as_bytes(self));
            }

            #[inline]
            fn hash_append_slice<__H: ::hash_append::Accumulator>(data: &[Self], h: &mut __H) {
                h.update(::hash_append::zerocopy::IntoBytes::as_bytes(data));
            }
        }
    }
}
