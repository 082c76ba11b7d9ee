//! Leaf and floating-point rules.

use crate::{Accumulator, HashAppend, Shape};

// =============================================================================
// Contiguous scalars
// =============================================================================

crate::hash_append_contiguous!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char,
);

// Raw pointers are opaque addresses. Metadata of fat pointers is ignored.

impl<T: ?Sized> HashAppend for *const T {
    const SHAPE: Shape = Shape::Contiguous;

    #[inline]
    fn hash_append<H: Accumulator>(&self, h: &mut H) {
        self.addr().hash_append(h);
    }
}

impl<T: ?Sized> HashAppend for *mut T {
    const SHAPE: Shape = Shape::Contiguous;

    #[inline]
    fn hash_append<H: Accumulator>(&self, h: &mut H) {
        self.addr().hash_append(h);
    }
}

// Function pointers hash as their code address. Higher-ranked signatures
// such as `for<'a> fn(&'a str)` are not covered.

macro_rules! impl_hash_append_fn_ptr {
    ($(($($arg:ident),*)),* $(,)?) => {
        $(
            impl<R, $($arg),*> HashAppend for fn($($arg),*) -> R {
                const SHAPE: Shape = Shape::Contiguous;

                #[inline]
                fn hash_append<H: Accumulator>(&self, h: &mut H) {
                    (*self as usize).hash_append(h);
                }
            }

            impl<R, $($arg),*> HashAppend for unsafe fn($($arg),*) -> R {
                const SHAPE: Shape = Shape::Contiguous;

                #[inline]
                fn hash_append<H: Accumulator>(&self, h: &mut H) {
                    (*self as usize).hash_append(h);
                }
            }
        )*
    };
}

impl_hash_append_fn_ptr!(
    (),
    (A0),
    (A0, A1),
    (A0, A1, A2),
    (A0, A1, A2, A3),
    (A0, A1, A2, A3, A4),
    (A0, A1, A2, A3, A4, A5),
    (A0, A1, A2, A3, A4, A5, A6),
    (A0, A1, A2, A3, A4, A5, A6, A7),
    (A0, A1, A2, A3, A4, A5, A6, A7, A8),
    (A0, A1, A2, A3, A4, A5, A6, A7, A8, A9),
    (A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10),
    (A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11),
);

// =============================================================================
// Floating point
// =============================================================================

macro_rules! impl_hash_append_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl HashAppend for $ty {
                const SHAPE: Shape = Shape::Float;

                /// `-0.0` is fed as `+0.0`. NaN payloads are kept as-is.
                #[inline]
                fn hash_append<H: Accumulator>(&self, h: &mut H) {
                    let value = if *self == 0.0 { 0.0 } else { *self };
                    h.update(&value.to_ne_bytes());
                }
            }
        )*
    };
}

impl_hash_append_float!(f32, f64);

// =============================================================================
// Tests
// =============================================================================
