//! arc-order — node orderings for arc diagrams with few arc crossings.
//!
//! Public API: `optimize()` and `optimize_grouped()`; the crossing oracle and
//! each heuristic are also exposed on their own.
//!
//! Modules:
//!   graph         adjacency sets (petgraph) and position-indexed matrix
//!   crossing      exact O(n⁴) crossing counts, total and per node
//!   avsdf         adjacent-vertex-smallest-degree-first ordering
//!   local_search  pairwise-swap hill climbing, optionally per group span
//!   local_adjust  remove-and-reinsert refinement
//!   select        best of original / AVSDF / local adjusting
//!   cluster       group-contiguous orderings
//!   prune         pendant branch exclusion
//!   ingest        CSV tables and text edge lists

pub mod avsdf;
pub mod cluster;
pub mod config;
pub mod crossing;
pub mod error;
pub mod graph;
pub mod ingest;
pub mod local_adjust;
pub mod local_search;
pub mod prune;
pub mod select;

#[cfg(feature = "wasm")]
mod wasm;

use std::collections::HashMap;

use tracing::{debug, warn};

pub use crate::config::OptimizeConfig;
pub use crate::crossing::{count_crossings, count_node_crossings};
pub use crate::error::{Error, Result};
pub use crate::select::Strategy;

use crate::cluster::grouped_order;
use crate::crossing::permutation_crossings;
use crate::graph::ArcGraph;
use crate::local_search::swap_pass;
use crate::prune::branch_members;
use crate::select::{best_candidate, run_strategy};

/// Outcome of an optimization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Optimized {
    /// Every input node exactly once.
    pub ordering: Vec<String>,
    /// Crossings of the input order.
    pub crossings_before: usize,
    /// Crossings of `ordering`.
    pub crossings_after: usize,
    pub strategy: Strategy,
    /// Nodes dropped by branch pruning, placed after the ordered nodes in
    /// input order.
    pub excluded: Vec<String>,
}

/// Order `nodes` to reduce arc crossings.
///
/// With the default config this runs candidate selection. `strategy` forces a
/// single heuristic, `refine` adds a swap-search pass, and `prune_branches`
/// orders only the dense part of the graph.
pub fn optimize<S: AsRef<str>, E: AsRef<str>>(
    nodes: &[S],
    edges: &[(E, E)],
    config: &OptimizeConfig,
) -> Result<Optimized> {
    check_size(nodes.len(), config)?;
    let graph = ArcGraph::new(nodes, edges)?;
    let edge_ids = graph.edge_ids();
    let identity: Vec<usize> = (0..graph.node_count()).collect();
    let crossings_before = permutation_crossings(&identity, &edge_ids);

    let pruned = if config.prune_branches {
        branch_members(&graph)
    } else {
        vec![false; graph.node_count()]
    };
    let kept: Vec<&str> = identity
        .iter()
        .filter(|&&id| !pruned[id])
        .map(|&id| graph.label(id))
        .collect();
    let excluded: Vec<String> = identity
        .iter()
        .filter(|&&id| pruned[id])
        .map(|&id| graph.label(id).to_string())
        .collect();
    let kept_edges: Vec<(&str, &str)> = edge_ids
        .iter()
        .filter(|&&(a, b)| !pruned[a] && !pruned[b])
        .map(|&(a, b)| (graph.label(a), graph.label(b)))
        .collect();

    let core = ArcGraph::new(&kept, &kept_edges)?;
    let (perm, strategy) = order_core(&core, config)?;

    let mut ordering = core.labels_for(&perm);
    ordering.extend(excluded.iter().cloned());
    let crossings_after = permutation_crossings(&graph.permutation_of(&ordering)?, &edge_ids);

    if crossings_after > crossings_before {
        warn!(
            crossings_before,
            crossings_after, "pruned ordering has more crossings than the input"
        );
    }
    debug!(%strategy, crossings_before, crossings_after, "optimized");
    Ok(Optimized {
        ordering,
        crossings_before,
        crossings_after,
        strategy,
        excluded,
    })
}

/// Order `nodes` with each group kept contiguous.
///
/// `config.strategy` picks how the groups themselves are ordered; members are
/// always refined by swap search inside their group.
pub fn optimize_grouped<S: AsRef<str>, E: AsRef<str>>(
    nodes: &[S],
    group_of: &HashMap<String, String>,
    edges: &[(E, E)],
    config: &OptimizeConfig,
) -> Result<Optimized> {
    check_size(nodes.len(), config)?;
    let crossings_before = count_crossings(nodes, edges)?;
    let grouped = grouped_order(nodes, group_of, edges, config.strategy)?;
    debug!(
        strategy = %grouped.strategy,
        crossings_before,
        crossings_after = grouped.crossings,
        "optimized with groups"
    );
    Ok(Optimized {
        ordering: grouped.ordering,
        crossings_before,
        crossings_after: grouped.crossings,
        strategy: grouped.strategy,
        excluded: Vec::new(),
    })
}

fn order_core(graph: &ArcGraph, config: &OptimizeConfig) -> Result<(Vec<usize>, Strategy)> {
    let edges = graph.edge_ids();
    let (mut perm, crossings, strategy) = match config.strategy {
        None => {
            let (best, _) = best_candidate(graph, &edges)?;
            (best.perm, best.crossings, best.strategy)
        }
        Some(strategy) => {
            let identity: Vec<usize> = (0..graph.node_count()).collect();
            let (perm, crossings) = run_strategy(strategy, graph, &identity, &edges)?;
            (perm, crossings, strategy)
        }
    };
    if config.refine {
        let len = perm.len();
        swap_pass(&mut perm, &edges, 0..len, crossings);
    }
    Ok((perm, strategy))
}

fn check_size(count: usize, config: &OptimizeConfig) -> Result<()> {
    match config.max_nodes {
        Some(limit) if count > limit => Err(Error::TooManyNodes { count, limit }),
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_lib.rs"]
mod tests;
