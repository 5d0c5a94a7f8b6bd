//! Closed-form offset functions.
//!
//! For `n = 4` the blocks are laid out as follows (`.` marks pairs without a
//! variable):
//!
//! ```text
//! xpos           xxpos            ypos (after n*n)
//!   . 0 1 2        0  1  2  3       .  16 17 18
//!   . . 3 4        4  5  6  7       19 .  20 21
//!   . . . 5        8  9  10 11      22 23 .  24
//!   . . . .        12 13 14 15      25 26 27 .
//! ```
//!
//! `upos` places per-node variables `u(2)..u(n)` right after the `n*n` block.
//!
//! None of the functions check that indices are below `nnodes`. Out-of-range
//! indices give meaningless offsets, and in debug builds the subtractions
//! may overflow.

use crate::{Edge, IndexError};

/// Returns the offset of the unordered pair `{i, j}` in the upper triangle of
/// an `nnodes × nnodes` matrix, diagonal excluded.
///
/// The result does not depend on argument order.
///
/// # Errors
///
/// Returns [`IndexError::XposDiagonal`] if `i == j`.
///
/// # Examples
///
/// ```
/// use pairmap_core::xpos;
///
/// assert_eq!(xpos(1, 2, 4)?, 3);
/// assert_eq!(xpos(2, 1, 4)?, 3);
/// assert!(xpos(2, 2, 4).is_err());
/// # Ok::<(), pairmap_core::IndexError>(())
/// ```
pub fn xpos(i: usize, j: usize, nnodes: usize) -> Result<usize, IndexError> {
    if i == j {
        return Err(IndexError::XposDiagonal { i });
    }
    let (i, j) = if i > j { (j, i) } else { (i, j) };
    // (i + 1) * (i + 2) is even, so the division is exact.
    Ok(i * nnodes + j - (i + 1) * (i + 2) / 2)
}

/// Returns the row-major offset of `(i, j)` in an `nnodes × nnodes` grid.
///
/// # Examples
///
/// ```
/// use pairmap_core::xxpos;
///
/// assert_eq!(xxpos(1, 2, 4), 6);
/// assert_eq!(xxpos(3, 3, 4), 15);
/// ```
#[must_use]
pub const fn xxpos(i: usize, j: usize, nnodes: usize) -> usize {
    i * nnodes + j
}

/// Returns the offset of the per-node variable with 1-based index `i`,
/// placed after the `nnodes * nnodes` block.
///
/// # Panics
///
/// Overflows when both `i` and `nnodes` are zero.
///
/// # Examples
///
/// ```
/// use pairmap_core::upos;
///
/// assert_eq!(upos(1, 3), 9);
/// assert_eq!(upos(2, 3), 10);
/// ```
#[must_use]
pub const fn upos(i: usize, nnodes: usize) -> usize {
    nnodes * nnodes + i - 1
}

/// Returns the offset of the ordered pair `(i, j)`, `i != j`, in an
/// `nnodes * (nnodes - 1)` block placed after the `nnodes * nnodes` block.
///
/// Unlike [`xpos`], `(i, j)` and `(j, i)` have different offsets.
///
/// # Errors
///
/// Returns [`IndexError::YposDiagonal`] if `i == j`.
///
/// # Panics
///
/// Overflows when `nnodes` is zero and `i != j`.
///
/// # Examples
///
/// ```
/// use pairmap_core::ypos;
///
/// assert_eq!(ypos(0, 1, 3)?, 9);
/// assert_eq!(ypos(1, 0, 3)?, 11);
/// # Ok::<(), pairmap_core::IndexError>(())
/// ```
pub fn ypos(i: usize, j: usize, nnodes: usize) -> Result<usize, IndexError> {
    if i == j {
        return Err(IndexError::YposDiagonal { i });
    }
    let pos = nnodes * nnodes + i * (nnodes - 1) + j;
    // columns right of the diagonal shift left by one
    Ok(if i < j { pos - 1 } else { pos })
}

/// Recovers the edge whose [`xpos`] offset is `pos`.
///
/// Walks the triangle row by row, so it runs in `O(nnodes)`. Returns `None`
/// when `pos` is past the last edge.
///
/// # Examples
///
/// ```
/// use pairmap_core::{Edge, xpos, xpos_inverse};
///
/// assert_eq!(xpos_inverse(3, 4), Some(Edge { i: 1, j: 2 }));
/// assert_eq!(xpos_inverse(6, 4), None);
/// assert_eq!(xpos_inverse(xpos(3, 0, 5)?, 5), Some(Edge::new(0, 3)));
/// # Ok::<(), pairmap_core::IndexError>(())
/// ```
#[must_use]
pub fn xpos_inverse(pos: usize, nnodes: usize) -> Option<Edge> {
    let mut row_len = nnodes.checked_sub(1)?;
    let mut rest = pos;
    let mut i = 0;
    while rest >= row_len {
        if row_len == 0 {
            return None;
        }
        rest -= row_len;
        row_len -= 1;
        i += 1;
    }
    Some(Edge { i, j: i + 1 + rest })
}
