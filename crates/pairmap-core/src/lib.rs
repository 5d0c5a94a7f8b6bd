//! Column offsets for node-pair variables over a complete graph.
//!
//! Optimization models over a complete graph on `nnodes` nodes index their
//! variables by nodes or pairs of nodes, while a solver stores them in one flat
//! column array. This crate provides the mappings between the two.
//!
//! # Overview
//!
//! 1. **Offset functions** - Closed-form position encodings
//!    - [`xpos`]: unordered pairs, upper triangle without the diagonal
//!    - [`xxpos`]: ordered pairs, full row-major grid
//!    - [`upos`]: 1-based single nodes placed after the grid
//!    - [`ypos`]: ordered pairs without the diagonal, placed after the grid
//!
//! 2. **Encodings as values** - [`Encoding`] names one of the functions and
//!    describes its column block ([`Encoding::columns`],
//!    [`Encoding::column_name`]).
//!
//! 3. **Inverses**
//!    - [`rev`]: brute-force scan returning the 1-based [`Label`] of the first
//!      key mapping to an offset
//!    - [`xpos_inverse`]: direct inverse of [`xpos`]
//!
//! Calls that have no offset (`i == j` for [`xpos`] and [`ypos`]) return an
//! [`IndexError`].
//!
//! # Examples
//!
//! ```
//! use pairmap_core::{Encoding, Label, rev, xxpos, ypos};
//!
//! let offset = xxpos(1, 2, 4);
//! assert_eq!(offset, 6);
//! assert_eq!(rev(4, Encoding::Xx, offset), Some(Label::Pair(2, 3)));
//!
//! let err = ypos(2, 2, 4).unwrap_err();
//! assert_eq!(err.to_string(), "variable y does not exist for same i and j");
//! ```

pub mod encoding;
pub mod key;
pub mod position;

mod error;
mod reverse;

// Re-export commonly used types
pub use self::{
    encoding::{Encoding, ParseEncodingError},
    error::IndexError,
    key::{Edge, Key, Label},
    position::{upos, xpos, xpos_inverse, xxpos, ypos},
    reverse::rev,
};
