//! Brute-force reverse lookup.

use crate::{Encoding, Key, Label};

/// Finds the key that `encoding` maps to `target`, scanning every key.
///
/// Keys are tried in [`Encoding::keys`] order (`i` outer, `j` inner, both
/// ascending) and the first match wins. Diagonal pairs of `xpos` and `ypos`
/// have no offset and never match. Returns `None` if no key maps to `target`.
///
/// This is a debugging aid: it runs in `O(nnodes²)` for the pair encodings.
/// Use [`xpos_inverse`](crate::xpos_inverse) for a direct `xpos` inverse.
///
/// # Examples
///
/// ```
/// use pairmap_core::{Encoding, Label, rev};
///
/// assert_eq!(rev(4, Encoding::Xx, 6), Some(Label::Pair(2, 3)));
/// assert_eq!(rev(3, Encoding::U, 10), Some(Label::Node(3)));
/// assert_eq!(rev(4, Encoding::X, 6), None);
/// ```
#[must_use]
pub fn rev(nnodes: usize, encoding: Encoding, target: usize) -> Option<Label> {
    encoding
        .keys(nnodes)
        .find(|&key| encoding.encode(key, nnodes) == Ok(target))
        .map(Key::label)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{upos, xpos, xxpos, ypos};

    #[test]
    fn test_xxpos_worked_example() {
        assert_eq!(xxpos(1, 2, 4), 6);
        assert_eq!(rev(4, Encoding::Xx, 6), Some(Label::Pair(2, 3)));
    }

    #[test]
    fn test_xpos_prefers_upper_triangle() {
        // (1, 2) and (2, 1) share offset 3; the scan reaches (1, 2) first.
        assert_eq!(rev(4, Encoding::X, 3), Some(Label::Pair(2, 3)));
    }

    #[test]
    fn test_upos_zero_is_reachable() {
        // node 0 maps to the last grid cell, one before u(2)
        assert_eq!(rev(3, Encoding::U, 8), Some(Label::Node(1)));
    }

    #[test]
    fn test_not_found() {
        assert_eq!(rev(4, Encoding::Xx, 16), None);
        assert_eq!(rev(3, Encoding::U, 12), None);
        assert_eq!(rev(3, Encoding::Y, 15), None);
        assert_eq!(rev(0, Encoding::X, 0), None);
    }

    #[test]
    fn test_recovers_every_column() {
        for encoding in Encoding::ALL {
            for n in 1..=8 {
                for (key, offset) in encoding.columns(n) {
                    assert_eq!(rev(n, encoding, offset), Some(key.label()), "{encoding} n={n}");
                }
            }
        }
    }

    fn distinct_pair() -> impl Strategy<Value = (usize, usize, usize)> {
        (2usize..24)
            .prop_flat_map(|n| (Just(n), 0..n, 0..n))
            .prop_filter("i != j", |&(_, i, j)| i != j)
    }

    proptest! {
        #[test]
        fn xpos_round_trip((n, i, j) in distinct_pair()) {
            let (lo, hi) = (i.min(j), i.max(j));
            let target = xpos(i, j, n).unwrap();
            prop_assert_eq!(rev(n, Encoding::X, target), Some(Label::Pair(lo + 1, hi + 1)));
        }

        #[test]
        fn xxpos_round_trip((n, i, j) in (1usize..24).prop_flat_map(|n| (Just(n), 0..n, 0..n))) {
            prop_assert_eq!(rev(n, Encoding::Xx, xxpos(i, j, n)), Some(Label::Pair(i + 1, j + 1)));
        }

        #[test]
        fn upos_round_trip((n, i) in (2usize..24).prop_flat_map(|n| (Just(n), 1..n))) {
            prop_assert_eq!(rev(n, Encoding::U, upos(i, n)), Some(Label::Node(i + 1)));
        }

        #[test]
        fn ypos_round_trip((n, i, j) in distinct_pair()) {
            let target = ypos(i, j, n).unwrap();
            prop_assert_eq!(rev(n, Encoding::Y, target), Some(Label::Pair(i + 1, j + 1)));
        }
    }
}
