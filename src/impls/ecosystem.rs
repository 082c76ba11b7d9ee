//! Optional impls for third-party containers.

#[cfg(feature = "smallvec")]
mod small_vec {
    use smallvec::{Array, SmallVec};

    use crate::{Accumulator, HashAppend, Shape};

    /// Inline or spilled, a `SmallVec` is a contiguous sized range.
    impl<A> HashAppend for SmallVec<A>
    where
        A: Array,
        A::Item: HashAppend,
    {
        const SHAPE: Shape = Shape::ContiguousRange;

        #[inline]
        fn hash_append<H: Accumulator>(&self, h: &mut H) {
            self.as_slice().hash_append(h);
        }
    }

}

#[cfg(feature = "compact_str")]
mod compact_string {
    use compact_str::CompactString;

    use crate::{Accumulator, HashAppend, Shape};

    impl HashAppend for CompactString {
        const SHAPE: Shape = Shape::ContiguousRange;

        #[inline]
        fn hash_append<H: Accumulator>(&self, h: &mut H) {
            self.as_str().hash_append(h);
        }
    }

}
