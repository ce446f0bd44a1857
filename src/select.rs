//! Candidate selection: keep the ordering with the fewest crossings.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::avsdf::avsdf_permutation;
use crate::crossing::permutation_crossings;
use crate::error::Result;
use crate::graph::ArcGraph;
use crate::local_adjust::adjust_permutation;

/// Where an ordering came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// The input ordering, untouched.
    Original,
    Avsdf,
    LocalAdjusting,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Original => "original",
            Strategy::Avsdf => "avsdf",
            Strategy::LocalAdjusting => "local-adjusting",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "original" | "none" => Ok(Strategy::Original),
            "avsdf" => Ok(Strategy::Avsdf),
            "local-adjusting" | "local_adjusting" | "la" => Ok(Strategy::LocalAdjusting),
            other => Err(format!(
                "Unknown strategy '{other}'; use original, avsdf, or local-adjusting"
            )),
        }
    }
}

/// Result of candidate selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub ordering: Vec<String>,
    pub crossings: usize,
    pub strategy: Strategy,
    /// Crossings of the input ordering.
    pub original_crossings: usize,
}

/// Score the input ordering, AVSDF and local adjusting; return the minimum.
///
/// Ties go to the earlier candidate, so an ordering that cannot be improved
/// comes back unchanged.
pub fn select_best<S: AsRef<str>, E: AsRef<str>>(
    ordering: &[S],
    edges: &[(E, E)],
) -> Result<Selection> {
    let graph = ArcGraph::new(ordering, edges)?;
    let (best, original_crossings) = best_candidate(&graph, &graph.edge_ids())?;
    Ok(Selection {
        ordering: graph.labels_for(&best.perm),
        crossings: best.crossings,
        strategy: best.strategy,
        original_crossings,
    })
}

/// A scored candidate permutation of node ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub strategy: Strategy,
    pub perm: Vec<usize>,
    pub crossings: usize,
}

/// Best candidate for `graph` in declaration order, plus the crossings of
/// that declaration order.
pub(crate) fn best_candidate(
    graph: &ArcGraph,
    edges: &[(usize, usize)],
) -> Result<(Candidate, usize)> {
    let original: Vec<usize> = (0..graph.node_count()).collect();
    let original_crossings = permutation_crossings(&original, edges);

    let mut best = Candidate {
        strategy: Strategy::Original,
        perm: original.clone(),
        crossings: original_crossings,
    };
    for strategy in [Strategy::Avsdf, Strategy::LocalAdjusting] {
        let (perm, crossings) = run_strategy(strategy, graph, &original, edges)?;
        debug!(%strategy, crossings, "candidate scored");
        if crossings < best.crossings {
            best = Candidate {
                strategy,
                perm,
                crossings,
            };
        }
    }

    debug!(
        strategy = %best.strategy,
        original_crossings,
        crossings = best.crossings,
        "candidate selected"
    );
    Ok((best, original_crossings))
}

/// Produce one candidate permutation and its crossing count.
///
/// `perm` is the starting ordering as node ids of `graph`.
pub(crate) fn run_strategy(
    strategy: Strategy,
    graph: &ArcGraph,
    perm: &[usize],
    edges: &[(usize, usize)],
) -> Result<(Vec<usize>, usize)> {
    match strategy {
        Strategy::Original => Ok((perm.to_vec(), permutation_crossings(perm, edges))),
        Strategy::Avsdf => {
            let order = avsdf_permutation(graph);
            let crossings = permutation_crossings(&order, edges);
            Ok((order, crossings))
        }
        Strategy::LocalAdjusting => adjust_permutation(perm.to_vec(), edges),
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_select.rs"]
mod tests;
