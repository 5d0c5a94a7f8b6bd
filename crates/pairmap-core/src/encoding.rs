//! Encodings as values.
//!
//! [`Encoding`] names one of the four offset functions so it can be passed to
//! [`rev`](crate::rev), parsed from the command line, or asked about the block
//! of columns it occupies.

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
    str::FromStr,
};

use crate::{IndexError, Key, position};

/// One of the four offset schemes.
///
/// # Examples
///
/// ```
/// use pairmap_core::{Encoding, Key};
///
/// let encoding: Encoding = "ypos".parse()?;
/// assert_eq!(encoding, Encoding::Y);
/// assert_eq!(encoding.encode(Key::Pair(1, 0), 3), Ok(11));
/// # Ok::<(), pairmap_core::ParseEncodingError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Encoding {
    /// Unordered pairs, upper triangle without the diagonal ([`xpos`](crate::xpos)).
    X,
    /// Ordered pairs, full row-major grid ([`xxpos`](crate::xxpos)).
    Xx,
    /// Single 1-based nodes after the grid ([`upos`](crate::upos)).
    U,
    /// Ordered pairs without the diagonal, after the grid ([`ypos`](crate::ypos)).
    Y,
}

impl Encoding {
    /// All encodings.
    pub const ALL: [Self; 4] = [Self::X, Self::Xx, Self::U, Self::Y];

    /// Returns the function name of the encoding.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::X => "xpos",
            Self::Xx => "xxpos",
            Self::U => "upos",
            Self::Y => "ypos",
        }
    }

    /// Returns `true` if the encoding is keyed by [`Key::Pair`].
    #[must_use]
    pub const fn takes_pair(self) -> bool {
        !matches!(self, Self::U)
    }

    /// Computes the offset of `key`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::KeyKind`] if the key shape does not match the
    /// encoding, and the diagonal errors of [`xpos`](crate::xpos) and
    /// [`ypos`](crate::ypos).
    pub fn encode(self, key: Key, nnodes: usize) -> Result<usize, IndexError> {
        match (self, key) {
            (Self::X, Key::Pair(i, j)) => position::xpos(i, j, nnodes),
            (Self::Xx, Key::Pair(i, j)) => Ok(position::xxpos(i, j, nnodes)),
            (Self::U, Key::Node(i)) => Ok(position::upos(i, nnodes)),
            (Self::Y, Key::Pair(i, j)) => position::ypos(i, j, nnodes),
            (encoding, key) => Err(IndexError::KeyKind { encoding, key }),
        }
    }

    /// Returns `true` if `key` names a column that the model builders create
    /// for this encoding.
    ///
    /// `upos` columns start at node 1, and `xpos` columns are only created
    /// for `i < j`. Indices are not checked against a node count.
    #[must_use]
    pub const fn has_column(self, key: Key) -> bool {
        match (self, key) {
            (Self::X, Key::Pair(i, j)) => i < j,
            (Self::Xx, Key::Pair(..)) => true,
            (Self::U, Key::Node(i)) => i >= 1,
            (Self::Y, Key::Pair(i, j)) => i != j,
            _ => false,
        }
    }

    /// Returns the offset of the first column of the block.
    #[must_use]
    pub const fn block_start(self, nnodes: usize) -> usize {
        match self {
            Self::X | Self::Xx => 0,
            Self::U | Self::Y => nnodes * nnodes,
        }
    }

    /// Returns the number of columns in the block.
    ///
    /// # Examples
    ///
    /// ```
    /// use pairmap_core::Encoding;
    ///
    /// assert_eq!(Encoding::X.block_len(5), 10);
    /// assert_eq!(Encoding::Xx.block_len(5), 25);
    /// assert_eq!(Encoding::U.block_len(5), 4);
    /// assert_eq!(Encoding::Y.block_len(5), 20);
    /// ```
    #[must_use]
    pub const fn block_len(self, nnodes: usize) -> usize {
        let off_diagonal = nnodes * nnodes.saturating_sub(1);
        match self {
            Self::X => off_diagonal / 2,
            Self::Xx => nnodes * nnodes,
            Self::U => nnodes.saturating_sub(1),
            Self::Y => off_diagonal,
        }
    }

    /// Returns the keys searched by [`rev`](crate::rev), in search order.
    ///
    /// For `upos` these are nodes `0..nnodes`. For the pair encodings these
    /// are all `nnodes * nnodes` pairs, `i` outer and `j` inner, diagonal
    /// included.
    #[must_use]
    pub fn keys(self, nnodes: usize) -> Keys {
        Keys::new(self, nnodes, Scope::All)
    }

    /// Returns the columns of the block as `(key, offset)`, in the order the
    /// model builders create them.
    ///
    /// The offsets run from [`block_start`](Self::block_start) without gaps.
    ///
    /// # Examples
    ///
    /// ```
    /// use pairmap_core::{Encoding, Key};
    ///
    /// let columns: Vec<_> = Encoding::U.columns(3).collect();
    /// assert_eq!(columns, [(Key::Node(1), 9), (Key::Node(2), 10)]);
    /// ```
    #[must_use]
    pub fn columns(self, nnodes: usize) -> Columns {
        Columns {
            keys: Keys::new(self, nnodes, Scope::Columns),
        }
    }

    /// Returns the 1-based variable name of the column for `key`.
    ///
    /// Names follow the model builders: `x(1-2)` for both `x` encodings,
    /// `u(2)` for `upos` node 1, and `y(1)(2)`. `xpos` names are
    /// normalized to the smaller index first.
    ///
    /// # Errors
    ///
    /// Returns an error if `key` has no offset under this encoding.
    ///
    /// # Examples
    ///
    /// ```
    /// use pairmap_core::{Encoding, Key};
    ///
    /// assert_eq!(Encoding::X.column_name(Key::Pair(2, 0))?, "x(1-3)");
    /// assert_eq!(Encoding::U.column_name(Key::Node(1))?, "u(2)");
    /// assert_eq!(Encoding::Y.column_name(Key::Pair(2, 0))?, "y(3)(1)");
    /// # Ok::<(), pairmap_core::IndexError>(())
    /// ```
    pub fn column_name(self, key: Key) -> Result<String, IndexError> {
        match (self, key) {
            (Self::X, Key::Pair(i, j)) if i == j => Err(IndexError::XposDiagonal { i }),
            (Self::X, Key::Pair(i, j)) => Ok(format!("x({}-{})", i.min(j) + 1, i.max(j) + 1)),
            (Self::Xx, Key::Pair(i, j)) => Ok(format!("x({}-{})", i + 1, j + 1)),
            (Self::U, Key::Node(i)) => Ok(format!("u({})", i + 1)),
            (Self::Y, Key::Pair(i, j)) if i == j => Err(IndexError::YposDiagonal { i }),
            (Self::Y, Key::Pair(i, j)) => Ok(format!("y({})({})", i + 1, j + 1)),
            (encoding, key) => Err(IndexError::KeyKind { encoding, key }),
        }
    }
}

impl Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an [`Encoding`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown encoding `{input}` (expected xpos, xxpos, upos or ypos)")]
pub struct ParseEncodingError {
    input: String,
}

impl FromStr for Encoding {
    type Err = ParseEncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xpos" | "x" => Ok(Self::X),
            "xxpos" | "xx" => Ok(Self::Xx),
            "upos" | "u" => Ok(Self::U),
            "ypos" | "y" => Ok(Self::Y),
            _ => Err(ParseEncodingError {
                input: s.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    All,
    Columns,
}

/// Iterator over the keys of an encoding.
///
/// Created by [`Encoding::keys`].
#[derive(Debug, Clone)]
pub struct Keys {
    encoding: Encoding,
    nnodes: usize,
    scope: Scope,
    front: (usize, usize),
}

impl Keys {
    fn new(encoding: Encoding, nnodes: usize, scope: Scope) -> Self {
        Self {
            encoding,
            nnodes,
            scope,
            front: (0, 0),
        }
    }

    fn step(&mut self) -> Option<Key> {
        let (i, j) = self.front;
        if i >= self.nnodes {
            return None;
        }
        if self.encoding.takes_pair() {
            self.front = if j + 1 < self.nnodes { (i, j + 1) } else { (i + 1, 0) };
            Some(Key::Pair(i, j))
        } else {
            self.front = (i + 1, 0);
            Some(Key::Node(i))
        }
    }
}

impl Iterator for Keys {
    type Item = Key;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(key) = self.step() {
            if self.scope == Scope::All || self.encoding.has_column(key) {
                return Some(key);
            }
        }
        None
    }
}

impl FusedIterator for Keys {}

/// Iterator over the `(key, offset)` columns of an encoding.
///
/// Created by [`Encoding::columns`].
#[derive(Debug, Clone)]
pub struct Columns {
    keys: Keys,
}

impl Iterator for Columns {
    type Item = (Key, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let Keys {
            encoding, nnodes, ..
        } = self.keys;
        self.keys
            .find_map(|key| encoding.encode(key, nnodes).ok().map(|offset| (key, offset)))
    }
}

impl FusedIterator for Columns {}
