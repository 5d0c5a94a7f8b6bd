use crate::{Encoding, Key};

/// Errors returned when a key has no offset under an encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum IndexError {
    /// `xpos` was called with `i == j`.
    #[display("i == j in xpos")]
    XposDiagonal {
        /// The repeated node index.
        i: usize,
    },
    /// `ypos` was called with `i == j`.
    #[display("variable y does not exist for same i and j")]
    YposDiagonal {
        /// The repeated node index.
        i: usize,
    },
    /// A node key was given to a pair encoding, or a pair key to `upos`.
    #[display("{encoding} does not accept key {key:?}")]
    KeyKind {
        /// The encoding that rejected the key.
        encoding: Encoding,
        /// The rejected key.
        key: Key,
    },
}
