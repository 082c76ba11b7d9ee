//! Procedural macros for hash-append
//!
//! Provides `#[derive(HashAppend)]`:
//!
//! - structs: aggregate rule, fields in declaration order
//! - `#[hash_append(contiguous)]` structs: leaf rule over the raw bytes (not
//!   for structs containing floats, whose equal values can differ in bytes)
//! - fieldless enums: leaf rule over the discriminant (`isize` without an integer `#[repr]`)
//!
//! Everything else (data-carrying enums, unions) is rejected at compile time.

use proc_macro::TokenStream;
use syn::{parse_macro_input, Data, DeriveInput};

mod aggregate;
mod attrs;
mod enums;

/// Derive `HashAppend`.
///
/// # Usage
///
/// ```ignore
/// #[derive(HashAppend)]
/// struct Entry {
///     key: String,
///     weight: f64,
///     #[hash_append(skip)]
///     cached_len: usize,
/// }
///
/// #[derive(HashAppend, IntoBytes, Immutable)]
/// #[hash_append(contiguous)]
/// #[repr(C)]
/// struct Rgb { r: u8, g: u8, b: u8 }
///
/// #[derive(HashAppend)]
/// #[repr(u8)]
/// enum Level { Low = 1, High = 2 }
/// ```
///
/// Paths are emitted as `::hash_append::...` (works inside the crate too,
/// thanks to `extern crate self as hash_append` in its lib.rs).
#[proc_macro_derive(HashAppend, attributes(hash_append))]
pub fn derive_hash_append(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match &input.data {
        Data::Struct(data) => aggregate::expand(&input, data),
        Data::Enum(data) => enums::expand(&input, data),
        Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "HashAppend cannot be derived for unions",
        )),
    };

    expanded.unwrap_or_else(syn::Error::into_compile_error).into()
}
