//! Crossing oracle.
//!
//! Two arcs drawn above a line (equivalently, two chords of a circle) cross
//! iff their endpoints alternate: positions `i < k < j < l` for arcs `(i, j)`
//! and `(k, l)`. Counting is the naive O(n⁴) scan over the adjacency matrix of
//! an ordering.

use crate::error::{Error, Result};
use crate::graph::AdjacencyMatrix;

/// Total number of pairwise arc crossings for `ordering`.
pub fn count_crossings<S: AsRef<str>, E: AsRef<str>>(
    ordering: &[S],
    edges: &[(E, E)],
) -> Result<usize> {
    Ok(AdjacencyMatrix::from_ordering(ordering, edges)?.total_crossings())
}

/// Number of crossings involving an arc incident to `node`.
///
/// Fails with `NodeNotFound` when `node` is not in `ordering`.
pub fn count_node_crossings<S: AsRef<str>, E: AsRef<str>>(
    node: &str,
    ordering: &[S],
    edges: &[(E, E)],
) -> Result<usize> {
    let position = ordering
        .iter()
        .position(|l| l.as_ref() == node)
        .ok_or_else(|| Error::node_not_found(node))?;
    AdjacencyMatrix::from_ordering(ordering, edges)?.node_crossings(position)
}

impl AdjacencyMatrix {
    /// Sum of `m[i][j] * m[k][l]` over `i < k < j < l`.
    pub fn total_crossings(&self) -> usize {
        let n = self.size();
        let mut total = 0usize;
        for i in 0..n.saturating_sub(2) {
            for j in (i + 2)..n.saturating_sub(1) {
                if !self.is_adjacent(i, j) {
                    continue;
                }
                for k in (i + 1)..j {
                    for l in (j + 1)..n {
                        if self.is_adjacent(k, l) {
                            total += 1;
                        }
                    }
                }
            }
        }
        total
    }

    /// Crossings on the arcs incident to the node at `position`.
    ///
    /// Positions are rotated so that `position` becomes 0; every arc
    /// `(0, j)` is then crossed exactly by the arcs `(k, l)` with
    /// `0 < k < j < l`. Crossing is invariant under rotation, so the count is
    /// exact for every node.
    pub fn node_crossings(&self, position: usize) -> Result<usize> {
        let n = self.size();
        let p = Permutator::new(n, position)?;
        let mut total = 0usize;
        for j in 2..n {
            if !self.is_adjacent(position, p.apply(j)) {
                continue;
            }
            for k in 1..j {
                for l in (j + 1)..n {
                    if self.is_adjacent(p.apply(k), p.apply(l)) {
                        total += 1;
                    }
                }
            }
        }
        Ok(total)
    }
}

/// Circular index rotation: `i ↦ (i + offset) mod size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permutator {
    size: usize,
    offset: usize,
}

impl Permutator {
    /// An offset that does not address a row of the matrix is rejected
    /// instead of wrapping.
    pub fn new(size: usize, offset: usize) -> Result<Self> {
        if offset >= size {
            return Err(Error::InvalidOffset { offset, size });
        }
        Ok(Self { size, offset })
    }

    pub fn apply(&self, index: usize) -> usize {
        (index + self.offset) % self.size
    }
}

/// Total crossings of a permutation of node ids.
pub(crate) fn permutation_crossings(perm: &[usize], edges: &[(usize, usize)]) -> usize {
    AdjacencyMatrix::from_permutation(perm, edges).total_crossings()
}

#[cfg(test)]
#[path = "../tests/rust/test_crossing.rs"]
mod tests;
