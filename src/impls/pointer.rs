//! References and owning pointers forward to the pointee.
//!
//! A pointer is never hashed as an address here; `Box<str>` hashes exactly
//! like `str`. Raw pointers are the exception and live in `scalar`.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use crate::macros::impl_hash_append_deref;
use crate::{Accumulator, HashAppend, Shape};

impl<T: HashAppend + ?Sized> HashAppend for &T {
    const SHAPE: Shape = T::SHAPE;

    #[inline]
    fn hash_append<H: Accumulator>(&self, h: &mut H) {
        (**self).hash_append(h);
    }
}

impl<T: HashAppend + ?Sized> HashAppend for &mut T {
    const SHAPE: Shape = T::SHAPE;

    #[inline]
    fn hash_append<H: Accumulator>(&self, h: &mut H) {
        (**self).hash_append(h);
    }
}

impl_hash_append_deref!(Box, Rc, Arc);

impl<T> HashAppend for Cow<'_, T>
where
    T: HashAppend + ToOwned + ?Sized,
{
    const SHAPE: Shape = T::SHAPE;

    #[inline]
    fn hash_append<H: Accumulator>(&self, h: &mut H) {
        (**self).hash_append(h);
    }
}
