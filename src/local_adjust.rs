//! Local adjusting — remove each node and reinsert it at its best position.
//!
//! Nodes are visited in descending order of incident crossings, measured once
//! on the input ordering. Each step starts from the ordering the previous step
//! left behind.

use std::cmp::Reverse;

use tracing::{debug, trace};

use crate::crossing::permutation_crossings;
use crate::error::Result;
use crate::graph::{AdjacencyMatrix, ArcGraph};
use crate::local_search::Refined;

pub fn local_adjusting<S: AsRef<str>, E: AsRef<str>>(
    ordering: &[S],
    edges: &[(E, E)],
) -> Result<Refined> {
    let graph = ArcGraph::new(ordering, edges)?;
    let perm: Vec<usize> = (0..graph.node_count()).collect();
    let (perm, crossings) = adjust_permutation(perm, &graph.edge_ids())?;
    Ok(Refined {
        ordering: graph.labels_for(&perm),
        crossings,
    })
}

/// Node ids of `perm` ranked by incident crossings, highest first.
///
/// Ties keep their current position order.
pub(crate) fn rank_by_crossings(perm: &[usize], edges: &[(usize, usize)]) -> Result<Vec<usize>> {
    let matrix = AdjacencyMatrix::from_permutation(perm, edges);
    let mut ranked: Vec<(usize, usize)> = Vec::with_capacity(perm.len());
    for (position, &id) in perm.iter().enumerate() {
        ranked.push((id, matrix.node_crossings(position)?));
    }
    ranked.sort_by_key(|&(_, crossings)| Reverse(crossings));
    Ok(ranked.into_iter().map(|(id, _)| id).collect())
}

pub(crate) fn adjust_permutation(
    mut perm: Vec<usize>,
    edges: &[(usize, usize)],
) -> Result<(Vec<usize>, usize)> {
    let before = permutation_crossings(&perm, edges);
    let mut current = before;

    for id in rank_by_crossings(&perm, edges)? {
        let Some(from) = perm.iter().position(|&x| x == id) else {
            continue;
        };
        let mut rest = perm.clone();
        rest.remove(from);

        // position `from` reproduces the current ordering, so the best
        // candidate is never worse than `current`
        let mut best: Option<(usize, Vec<usize>)> = None;
        for to in 0..=rest.len() {
            let mut candidate = rest.clone();
            candidate.insert(to, id);
            let crossings = permutation_crossings(&candidate, edges);
            if best.as_ref().is_none_or(|(c, _)| crossings < *c) {
                best = Some((crossings, candidate));
            }
        }

        if let Some((crossings, candidate)) = best {
            if candidate != perm {
                trace!(node = id, from, crossings, "node reinserted");
            }
            perm = candidate;
            current = crossings;
        }
    }

    debug!(before, after = current, "local adjusting done");
    Ok((perm, current))
}

#[cfg(test)]
#[path = "../tests/rust/test_local_adjust.rs"]
mod tests;
