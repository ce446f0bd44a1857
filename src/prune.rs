//! Drop pendant chains hanging off the dense part of a graph.

use tracing::debug;

use crate::error::Result;
use crate::graph::ArcGraph;

/// Nodes left after removing every pendant chain, in input order.
///
/// A chain starts at a degree-1 node and follows degree-≤2 nodes until it
/// reaches a node of degree > 2, which is kept. A component that is a simple
/// path disappears entirely; isolated nodes stay.
pub fn exclude_branches<S: AsRef<str>, E: AsRef<str>>(
    nodes: &[S],
    edges: &[(E, E)],
) -> Result<Vec<String>> {
    let graph = ArcGraph::new(nodes, edges)?;
    let branch = branch_members(&graph);
    let kept: Vec<String> = (0..graph.node_count())
        .filter(|&id| !branch[id])
        .map(|id| graph.label(id).to_string())
        .collect();
    debug!(
        nodes = graph.node_count(),
        excluded = graph.node_count() - kept.len(),
        "branches excluded"
    );
    Ok(kept)
}

/// Marks, indexed by node id, of nodes that lie on a pendant chain.
pub(crate) fn branch_members(graph: &ArcGraph) -> Vec<bool> {
    let n = graph.node_count();
    let adjacency = graph.adjacency();
    let degree: Vec<usize> = adjacency.iter().map(Vec::len).collect();

    let mut branch = vec![false; n];
    let mut explored = vec![false; n];
    for start in 0..n {
        if degree[start] != 1 || explored[start] {
            continue;
        }
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if degree[current] > 2 {
                break;
            }
            branch[current] = true;
            if !explored[current] {
                explored[current] = true;
                stack.extend(adjacency[current].iter().copied().filter(|&id| !explored[id]));
            }
        }
    }
    branch
}

#[cfg(test)]
#[path = "../tests/rust/test_prune.rs"]
mod tests;
