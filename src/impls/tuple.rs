//! Tuple rule: fields in declaration order, no count suffix.

use crate::macros::impl_hash_append_tuple;
use crate::{Accumulator, HashAppend, Shape};

/// The zero-arity aggregate contributes nothing.
impl HashAppend for () {
    const SHAPE: Shape = Shape::Tuple;

    #[inline]
    fn hash_append<H: Accumulator>(&self, _h: &mut H) {}
}

impl_hash_append_tuple!(
    (T0),
    (T0, T1),
    (T0, T1, T2),
    (T0, T1, T2, T3),
    (T0, T1, T2, T3, T4),
    (T0, T1, T2, T3, T4, T5),
    (T0, T1, T2, T3, T4, T5, T6),
    (T0, T1, T2, T3, T4, T5, T6, T7),
    (T0, T1, T2, T3, T4, T5, T6, T7, T8),
    (T0, T1, T2, T3, T4, T5, T6, T7, T8, T9),
    (T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10),
    (T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11),
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::StableHasher;
    use crate::shape_of;
    use crate::testing::{size_bytes, Transcript};

    #[test]
    fn test_unit_contributes_nothing() {
        let mut h = Transcript::new();
        ().hash_append(&mut h);
        assert!(h.calls.is_empty());
        assert_eq!(shape_of::<()>(), Shape::Tuple);
    }

    #[test]
    fn test_fields_in_declaration_order() {
        let mut h = Transcript::new();
        (1u8, 2u16, 'z').hash_append(&mut h);
        assert_eq!(
            h.calls,
            vec![vec![1u8], 2u16.to_ne_bytes().to_vec(), ('z' as u32).to_ne_bytes().to_vec()]
        );
    }

    #[test]
    fn test_swapped_pair_differs() {
        let ab = StableHasher::new().append(&(1u32, 2u32)).finish();
        let ba = StableHasher::new().append(&(2u32, 1u32)).finish();
        assert_ne!(ab, ba);
    }

    #[test]
    fn test_pair_and_array_share_bytes() {
        // Both categories emit the elements with no suffix.
        let mut pair = Transcript::new();
        (3u8, 4u8).hash_append(&mut pair);
        let mut array = Transcript::new();
        [3u8, 4u8].hash_append(&mut array);
        assert_eq!(pair.bytes(), array.bytes());
    }

    #[test]
    fn test_nested_composition_matches_manual_sequence() {
        let value = vec![(1u32, 2u32), (3u32, 4u32)];
        let mut h = Transcript::new();
        value.hash_append(&mut h);

        let expected: Vec<Vec<u8>> = vec![
            1u32.to_ne_bytes().to_vec(),
            2u32.to_ne_bytes().to_vec(),
            3u32.to_ne_bytes().to_vec(),
            4u32.to_ne_bytes().to_vec(),
            size_bytes(2),
        ];
        assert_eq!(h.calls, expected);
    }

    #[test]
    fn test_max_arity() {
        let t = (0u8, 1u8, 2u8, 3u8, 4u8, 5u8, 6u8, 7u8, 8u8, 9u8, 10u8, 11u8);
        let mut h = Transcript::new();
        t.hash_append(&mut h);
        assert_eq!(h.bytes(), (0u8..12).collect::<Vec<_>>());
    }
}
