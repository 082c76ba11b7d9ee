//! `#[hash_append(...)]` helper attribute parsing.
//!
//! Container: `#[hash_append(contiguous)]`
//! Field:     `#[hash_append(skip)]`

use syn::{Attribute, Ident, Result};

/// Options on the struct or enum itself.
#[derive(Default)]
pub struct ContainerArgs {
    /// Hash the value's raw bytes instead of its fields.
    pub contiguous: bool,
}

impl ContainerArgs {
    pub fn from_attrs(attrs: &[Attribute]) -> Result<Self> {
        let mut args = Self::default();
        for ident in helper_idents(attrs)? {
            if ident == "contiguous" {
                args.contiguous = true;
            } else {
                return Err(syn::Error::new_spanned(
                    ident,
                    "unknown option, expected `contiguous`",
                ));
            }
        }
        Ok(args)
    }
}

/// Whether a field carries `#[hash_append(skip)]`.
pub fn is_skipped(attrs: &[Attribute]) -> Result<bool> {
    let mut skip = false;
    for ident in helper_idents(attrs)? {
        if ident == "skip" {
            skip = true;
        } else {
            return Err(syn::Error::new_spanned(
                ident,
                "unknown field option, expected `skip`",
            ));
        }
    }
    Ok(skip)
}

/// Primitive integer named in `#[repr(..)]`, if any.
pub fn repr_int(attrs: &[Attribute]) -> Result<Option<Ident>> {
    const INTS: [&str; 12] = [
        "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16", "i32", "i64", "i128", "isize",
    ];

    let mut found = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("repr")) {
        attr.parse_nested_meta(|meta| {
            if let Some(ident) = meta.path.get_ident() {
                if INTS.iter().any(|int| ident == int) {
                    found = Some(ident.clone());
                }
            }
            // align(N) / packed(N)
            if meta.input.peek(syn::token::Paren) {
                let _args;
                syn::parenthesized!(_args in meta.input);
            }
            Ok(())
        })?;
    }
    Ok(found)
}

fn helper_idents(attrs: &[Attribute]) -> Result<Vec<Ident>> {
    let mut idents = Vec::new();
    for attr in attrs.iter().filter(|a| a.path().is_ident("hash_append")) {
        attr.parse_nested_meta(|meta| {
            match meta.path.get_ident() {
                Some(ident) => idents.push(ident.clone()),
                None => return Err(meta.error("expected a bare identifier")),
            }
            Ok(())
        })?;
    }
    Ok(idents)
}
