//! Logical keys addressed by the encodings.

/// A zero-based logical key into one of the variable blocks.
///
/// [`Key::Node`] addresses a per-node variable (the `upos` block), while
/// [`Key::Pair`] addresses a variable indexed by a pair of nodes.
///
/// # Examples
///
/// ```
/// use pairmap_core::{Key, Label};
///
/// let key = Key::Pair(1, 2);
/// assert_eq!(key.label(), Label::Pair(2, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Key {
    /// A single node index.
    Node(usize),
    /// An ordered pair of node indices `(i, j)`.
    Pair(usize, usize),
}

impl Key {
    /// Converts the key into its 1-based [`Label`].
    #[must_use]
    pub const fn label(self) -> Label {
        match self {
            Key::Node(i) => Label::Node(i + 1),
            Key::Pair(i, j) => Label::Pair(i + 1, j + 1),
        }
    }
}

/// A 1-based rendering of a [`Key`], as reported by [`rev`](crate::rev).
///
/// The [`Display`](std::fmt::Display) output is the bare index (`"3"`) or the
/// two indices separated by a space (`"2 3"`).
///
/// # Examples
///
/// ```
/// use pairmap_core::Label;
///
/// assert_eq!(Label::Node(3).to_string(), "3");
/// assert_eq!(Label::Pair(2, 3).to_string(), "2 3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum Label {
    /// A 1-based node number.
    #[display("{_0}")]
    Node(usize),
    /// A 1-based pair of node numbers.
    #[display("{_0} {_1}")]
    Pair(usize, usize),
}

/// An unordered node pair stored with `i < j`.
///
/// Returned by [`xpos_inverse`](crate::xpos_inverse).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// The smaller node index.
    pub i: usize,
    /// The larger node index.
    pub j: usize,
}

impl Edge {
    /// Creates an edge, ordering the endpoints so that `i < j`.
    ///
    /// # Panics
    ///
    /// Panics if `a == b`.
    #[must_use]
    pub fn new(a: usize, b: usize) -> Self {
        assert_ne!(a, b, "edge endpoints must differ");
        Self {
            i: a.min(b),
            j: a.max(b),
        }
    }
}

impl From<Edge> for Key {
    fn from(edge: Edge) -> Self {
        Key::Pair(edge.i, edge.j)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_is_one_based() {
        assert_eq!(Key::Node(0).label(), Label::Node(1));
        assert_eq!(Key::Pair(0, 3).label(), Label::Pair(1, 4));
    }

    #[test]
    fn test_label_display() {
        assert_eq!(Label::Node(10).to_string(), "10");
        assert_eq!(Label::Pair(1, 2).to_string(), "1 2");
    }

    #[test]
    fn test_edge_orders_endpoints() {
        assert_eq!(Edge::new(3, 1), Edge { i: 1, j: 3 });
        assert_eq!(Key::from(Edge::new(0, 2)), Key::Pair(0, 2));
    }

    #[test]
    #[should_panic(expected = "edge endpoints must differ")]
    fn test_edge_rejects_loop() {
        let _ = Edge::new(2, 2);
    }
}
