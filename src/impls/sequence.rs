//! Array, range and unordered-range rules.

use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};

use crate::append::{
    hash_append_exact_range, hash_append_size, hash_append_unordered_range,
};
use crate::{Accumulator, HashAppend, Shape};

// =============================================================================
// Fixed-size arrays
// =============================================================================

impl<T: HashAppend, const N: usize> HashAppend for [T; N] {
    const SHAPE: Shape = Shape::Array;

    #[inline]
    fn hash_append<H: Accumulator>(&self, h: &mut H) {
        T::hash_append_slice(self, h);
    }

    /// Nested arrays flatten, so `[[u8; 4]; 4]` is still one `update`.
    #[inline]
    fn hash_append_slice<H: Accumulator>(data: &[Self], h: &mut H) {
        T::hash_append_slice(data.as_flattened(), h);
    }
}

// =============================================================================
// Contiguous sized ranges
// =============================================================================

impl<T: HashAppend> HashAppend for [T] {
    const SHAPE: Shape = Shape::ContiguousRange;

    #[inline]
    fn hash_append<H: Accumulator>(&self, h: &mut H) {
        T::hash_append_slice(self, h);
        hash_append_size(h, self.len());
    }
}

impl<T: HashAppend> HashAppend for Vec<T> {
    const SHAPE: Shape = Shape::ContiguousRange;

    #[inline]
    fn hash_append<H: Accumulator>(&self, h: &mut H) {
        self.as_slice().hash_append(h);
    }
}

impl HashAppend for str {
    const SHAPE: Shape = Shape::ContiguousRange;

    #[inline]
    fn hash_append<H: Accumulator>(&self, h: &mut H) {
        h.update(self.as_bytes());
        hash_append_size(h, self.len());
    }
}

impl HashAppend for String {
    const SHAPE: Shape = Shape::ContiguousRange;

    #[inline]
    fn hash_append<H: Accumulator>(&self, h: &mut H) {
        self.as_str().hash_append(h);
    }
}

// =============================================================================
// Ordered ranges (size known up front)
// =============================================================================

macro_rules! impl_hash_append_ordered {
    ($($coll:ident<$($param:ident),+>),* $(,)?) => {
        $(
            impl<$($param: HashAppend),+> HashAppend for $coll<$($param),+> {
                const SHAPE: Shape = Shape::Range;

                #[inline]
                fn hash_append<H: Accumulator>(&self, h: &mut H) {
                    hash_append_exact_range(h, self);
                }
            }
        )*
    };
}

impl_hash_append_ordered!(VecDeque<T>, LinkedList<T>, BTreeSet<T>, BTreeMap<K, V>);

// =============================================================================
// Unordered ranges
// =============================================================================

impl<T: HashAppend, S> HashAppend for HashSet<T, S> {
    const SHAPE: Shape = Shape::UnorderedRange;

    #[inline]
    fn hash_append<H: Accumulator>(&self, h: &mut H) {
        hash_append_unordered_range(h, self);
    }
}

impl<K: HashAppend, V: HashAppend, S> HashAppend for HashMap<K, V, S> {
    const SHAPE: Shape = Shape::UnorderedRange;

    #[inline]
    fn hash_append<H: Accumulator>(&self, h: &mut H) {
        hash_append_unordered_range(h, self);
    }
}

/// Heap iteration order is an implementation detail, not part of the value.
impl<T: HashAppend> HashAppend for BinaryHeap<T> {
    const SHAPE: Shape = Shape::UnorderedRange;

    #[inline]
    fn hash_append<H: Accumulator>(&self, h: &mut H) {
        hash_append_unordered_range(h, self);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rustc_hash::FxHashSet;

    use super::*;
    use crate::hash::StableHasher;
    use crate::shape_of;
    use crate::testing::{size_bytes, Transcript};

    fn digest<T: HashAppend + ?Sized>(value: &T) -> u64 {
        StableHasher::new().append(value).finish()
    }

    #[test]
    fn test_category_table() {
        assert_eq!(shape_of::<[u8; 4]>(), Shape::Array);
        assert_eq!(shape_of::<[String; 2]>(), Shape::Array);
        assert_eq!(shape_of::<[u8]>(), Shape::ContiguousRange);
        assert_eq!(shape_of::<Vec<f64>>(), Shape::ContiguousRange);
        assert_eq!(shape_of::<str>(), Shape::ContiguousRange);
        assert_eq!(shape_of::<String>(), Shape::ContiguousRange);
        assert_eq!(shape_of::<VecDeque<u8>>(), Shape::Range);
        assert_eq!(shape_of::<LinkedList<u8>>(), Shape::Range);
        assert_eq!(shape_of::<BTreeSet<u8>>(), Shape::Range);
        assert_eq!(shape_of::<BTreeMap<u8, u8>>(), Shape::Range);
        assert_eq!(shape_of::<HashSet<u8>>(), Shape::UnorderedRange);
        assert_eq!(shape_of::<HashMap<u8, String>>(), Shape::UnorderedRange);
        assert_eq!(shape_of::<FxHashSet<u8>>(), Shape::UnorderedRange);
        assert_eq!(shape_of::<BinaryHeap<u8>>(), Shape::UnorderedRange);
    }

    #[test]
    fn test_array_has_no_suffix() {
        let mut h = Transcript::new();
        [1u8, 2, 3].hash_append(&mut h);
        assert_eq!(h.calls, vec![vec![1u8, 2, 3]]);
    }

    #[test]
    fn test_nested_array_is_one_update() {
        let mut h = Transcript::new();
        [[1u8, 2], [3, 4]].hash_append(&mut h);
        assert_eq!(h.calls, vec![vec![1u8, 2, 3, 4]]);
    }

    #[test]
    fn test_array_of_non_leaves_recurses() {
        let mut h = Transcript::new();
        ["ab".to_string(), "c".to_string()].hash_append(&mut h);
        assert_eq!(
            h.calls,
            vec![b"ab".to_vec(), size_bytes(2), b"c".to_vec(), size_bytes(1)]
        );
    }

    #[test]
    fn test_vec_of_leaves_collapses_then_appends_size() {
        let mut h = Transcript::new();
        vec![1u16, 2].hash_append(&mut h);

        let mut body = 1u16.to_ne_bytes().to_vec();
        body.extend_from_slice(&2u16.to_ne_bytes());
        assert_eq!(h.calls, vec![body, size_bytes(2)]);
    }

    #[test]
    fn test_string_and_str_agree() {
        let mut a = Transcript::new();
        "hello".hash_append(&mut a);
        let mut b = Transcript::new();
        String::from("hello").hash_append(&mut b);
        assert_eq!(a, b);
        assert_eq!(a.calls, vec![b"hello".to_vec(), size_bytes(5)]);
    }

    #[test]
    fn test_vec_and_slice_agree() {
        let v = vec![3i32, -4, 5];
        assert_eq!(digest(&v), digest(v.as_slice()));
    }

    #[test]
    fn test_length_sensitivity() {
        let ab = digest(&vec![1u32, 2]);
        let abc = digest(&vec![1u32, 2, 3]);
        let a = digest(&vec![1u32]);
        assert_ne!(ab, abc);
        assert_ne!(ab, a);
        assert_ne!(a, abc);
    }

    #[test]
    fn test_concatenation_is_not_ambiguous() {
        // ("ab", "c") and ("a", "bc") share the same content bytes.
        assert_ne!(digest(&("ab", "c")), digest(&("a", "bc")));
        assert_ne!(
            digest(&vec![vec![1u8, 2], vec![3]]),
            digest(&vec![vec![1u8], vec![2, 3]])
        );
    }

    #[test]
    fn test_ordered_range_matches_manual_sequence() {
        let deque: VecDeque<u32> = [7, 8].into_iter().collect();
        let mut h = Transcript::new();
        deque.hash_append(&mut h);
        assert_eq!(
            h.calls,
            vec![7u32.to_ne_bytes().to_vec(), 8u32.to_ne_bytes().to_vec(), size_bytes(2)]
        );
    }

    #[test]
    fn test_contiguous_and_ordered_ranges_share_bytes() {
        // One update vs one per element; same concatenated stream.
        let v = vec![1u64, 2, 3];
        let d: VecDeque<u64> = v.iter().copied().collect();

        let mut a = Transcript::new();
        v.hash_append(&mut a);
        let mut b = Transcript::new();
        d.hash_append(&mut b);
        assert_eq!(a.bytes(), b.bytes());
    }

    #[test]
    fn test_ordered_range_is_order_sensitive() {
        let forward: VecDeque<u8> = [1, 2, 3].into_iter().collect();
        let reversed: VecDeque<u8> = [3, 2, 1].into_iter().collect();
        assert_ne!(digest(&forward), digest(&reversed));
        assert_ne!(digest(&vec![1u8, 2, 3]), digest(&vec![2u8, 1, 3]));
    }

    #[test]
    fn test_btree_map_hashes_entries_in_key_order() {
        let map: BTreeMap<u8, u8> = [(2, 20), (1, 10)].into_iter().collect();
        let mut h = Transcript::new();
        map.hash_append(&mut h);
        assert_eq!(
            h.calls,
            vec![vec![1u8], vec![10u8], vec![2u8], vec![20u8], size_bytes(2)]
        );
    }

    #[test]
    fn test_hash_map_clone_isolation() {
        let map: HashMap<u32, &str> = [(1, "one"), (2, "two")].into_iter().collect();

        let mut outer = StableHasher::new();
        map.hash_append(&mut outer);

        let mut sum = 0u64;
        for (k, v) in [(1u32, "one"), (2u32, "two")] {
            sum = sum.wrapping_add(StableHasher::new().append(&(k, v)).finish());
        }
        let reference = StableHasher::new().append(&sum).append(&2u64);
        assert_eq!(outer.finish(), reference.finish());
    }

    #[test]
    fn test_unordered_range_clones_outer_state() {
        // The per-element clone starts from whatever the outer accumulator
        // has seen so far, so a prefix changes the combined word.
        let set: HashSet<u8> = [1, 2].into_iter().collect();
        let plain = digest(&set);
        let prefixed = StableHasher::new().append(&0u8).append(&set).finish();
        let manual_prefix_only = StableHasher::new().append(&0u8).finish();
        assert_ne!(plain, prefixed);
        assert_ne!(prefixed, manual_prefix_only);
    }

    #[test]
    fn test_hash_set_and_fx_hash_set_agree() {
        let std_set: HashSet<u16> = (0..50).collect();
        let fx_set: FxHashSet<u16> = (0..50).collect();
        assert_eq!(digest(&std_set), digest(&fx_set));
    }

    #[test]
    fn test_binary_heap_independent_of_push_order() {
        let a: BinaryHeap<i32> = [5, 1, 9, 3].into_iter().collect();
        let b: BinaryHeap<i32> = [3, 9, 1, 5].into_iter().collect();
        assert_eq!(digest(&a), digest(&b));
    }

    #[test]
    fn test_unordered_multiset_size_sensitivity() {
        let one: HashSet<u8> = [1].into_iter().collect();
        let two: HashSet<u8> = [1, 2].into_iter().collect();
        let empty: HashSet<u8> = HashSet::new();
        assert_ne!(digest(&one), digest(&two));
        assert_ne!(digest(&one), digest(&empty));
    }

    proptest! {
        #[test]
        fn prop_hash_set_order_independent(mut items in proptest::collection::vec(any::<u32>(), 0..32), seed in any::<u64>()) {
            let forward: HashSet<u32> = items.iter().copied().collect();
            // Rebuild from a rotated and reversed insertion order.
            if !items.is_empty() {
                let k = (seed as usize) % items.len();
                items.rotate_left(k);
            }
            items.reverse();
            let mut shuffled: HashSet<u32> = HashSet::with_capacity(items.len() * 2 + 1);
            shuffled.extend(items.iter().copied());

            prop_assert_eq!(digest(&forward), digest(&shuffled));
        }

        #[test]
        fn prop_unordered_range_permutation_invariant(
            (items, permuted) in proptest::collection::vec(any::<i64>(), 0..16)
                .prop_flat_map(|items| (Just(items.clone()), Just(items).prop_shuffle()))
        ) {
            let mut a = StableHasher::new();
            hash_append_unordered_range(&mut a, items.iter());
            let mut b = StableHasher::new();
            hash_append_unordered_range(&mut b, permuted.iter());
            prop_assert_eq!(a.finish(), b.finish());
        }

        #[test]
        fn prop_vec_deterministic(items in proptest::collection::vec(any::<u8>(), 0..64)) {
            prop_assert_eq!(digest(&items), digest(&items.clone()));
        }
    }
}
