//! AVSDF ("adjacent vertex with smallest degree first") ordering.
//!
//! Degree-guided depth-first construction of an initial ordering
//! (He & Sýkora, "New circular drawing algorithms", ITAT 2004).

use std::cmp::Reverse;

use tracing::debug;

use crate::error::Result;
use crate::graph::ArcGraph;

/// Order `nodes` with AVSDF.
///
/// Roots are taken in ascending degree; from each visited node its unvisited
/// neighbors go onto the stack highest degree first, so the next pop is the
/// neighbor with the smallest degree. Equal degrees fall back to declaration
/// order in both places.
pub fn avsdf<S: AsRef<str>, E: AsRef<str>>(nodes: &[S], edges: &[(E, E)]) -> Result<Vec<String>> {
    let graph = ArcGraph::new(nodes, edges)?;
    Ok(graph.labels_for(&avsdf_permutation(&graph)))
}

pub(crate) fn avsdf_permutation(graph: &ArcGraph) -> Vec<usize> {
    let n = graph.node_count();
    let adjacency = graph.adjacency();
    let degree: Vec<usize> = adjacency.iter().map(Vec::len).collect();

    let mut roots: Vec<usize> = (0..n).collect();
    // stable: equal degrees keep declaration order
    roots.sort_by_key(|&id| degree[id]);

    let mut order = Vec::with_capacity(n);
    let mut explored = vec![false; n];
    let mut components = 0usize;
    for root in roots {
        if !explored[root] {
            components += 1;
            dfs(vec![root], &mut order, &mut explored, &adjacency, &degree);
        }
    }

    debug!(nodes = n, components, "avsdf ordering built");
    order
}

fn dfs(
    mut stack: Vec<usize>,
    order: &mut Vec<usize>,
    explored: &mut [bool],
    adjacency: &[Vec<usize>],
    degree: &[usize],
) {
    while let Some(current) = stack.pop() {
        if explored[current] {
            continue;
        }
        order.push(current);
        explored[current] = true;

        let mut next: Vec<usize> = adjacency[current]
            .iter()
            .copied()
            .filter(|&id| !explored[id])
            .collect();
        next.sort_by_key(|&id| Reverse((degree[id], id)));
        stack.extend(next);
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_avsdf.rs"]
mod tests;
