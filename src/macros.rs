//! Registration macros.
//!
//! Each macro expands to exactly one `HashAppend` impl per listed type, so the
//! set of hashable types and their categories stays explicit and auditable.

// =============================================================================
// Leaf registration
// =============================================================================

/// Register padding-free types for the leaf rule.
///
/// Each listed type must implement `zerocopy::IntoBytes + zerocopy::Immutable`
/// (derive them with `zerocopy`, which rejects types containing padding).
/// Values are fed as their raw in-memory bytes, and slices of them collapse
/// to a single `update`.
///
/// zerocopy only rules out padding. Equal values must also have equal bytes,
/// so types containing floats must not be registered here: `-0.0` and `0.0`
/// compare equal but differ in their sign bit. Derive the aggregate rule for
/// them instead.
///
/// # Example
///
/// ```
/// use hash_append::{hash_append_contiguous, shape_of, Shape};
/// use zerocopy::{Immutable, IntoBytes};
///
/// #[derive(IntoBytes, Immutable)]
/// #[repr(C)]
/// struct Rgba {
///     r: u8,
///     g: u8,
///     b: u8,
///     a: u8,
/// }
///
/// hash_append_contiguous!(Rgba);
/// assert_eq!(shape_of::<Rgba>(), Shape::Contiguous);
/// ```
#[macro_export]
macro_rules! hash_append_contiguous {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::HashAppend for $ty {
                const SHAPE: $crate::Shape = $crate::Shape::Contiguous;

                #[inline]
                fn hash_append<H: $crate::Accumulator>(&self, h: &mut H) {
                    h.update($crate::zerocopy::IntoBytes::as_bytes(self));
                }

                #[inline]
                fn hash_append_slice<H: $crate::Accumulator>(data: &[Self], h: &mut H) {
                    h.update($crate::zerocopy::IntoBytes::as_bytes(data));
                }
            }
        )*
    };
}

// =============================================================================
// Internal registration
// =============================================================================

/// Forward `HashAppend` through a smart pointer to its pointee.
macro_rules! impl_hash_append_deref {
    ($($ptr:ident),* $(,)?) => {
        $(
            impl<T: $crate::HashAppend + ?Sized> $crate::HashAppend for $ptr<T> {
                const SHAPE: $crate::Shape = T::SHAPE;

                #[inline]
                fn hash_append<H: $crate::Accumulator>(&self, h: &mut H) {
                    (**self).hash_append(h);
                }
            }
        )*
    };
}

/// Tuple impls: each field in declaration order, no suffix.
macro_rules! impl_hash_append_tuple {
    ($(($($name:ident),+)),* $(,)?) => {
        $(
            impl<$($name: $crate::HashAppend),+> $crate::HashAppend for ($($name,)+) {
                const SHAPE: $crate::Shape = $crate::Shape::Tuple;

                #[inline]
                #[allow(non_snake_case)]
                fn hash_append<H: $crate::Accumulator>(&self, h: &mut H) {
                    let ($(ref $name,)+) = *self;
                    $($name.hash_append(h);)+
                }
            }
        )*
    };
}

pub(crate) use impl_hash_append_deref;
pub(crate) use impl_hash_append_tuple;
