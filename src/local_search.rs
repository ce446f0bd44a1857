//! Pairwise-swap local search over a range of positions.
//!
//! The running count always covers the whole ordering: a swap inside the
//! range also moves arcs that reach nodes outside it.

use std::collections::{HashMap, HashSet};
use std::ops::Range;

use tracing::{debug, trace};

use crate::crossing::permutation_crossings;
use crate::error::{Error, Result};
use crate::graph::ArcGraph;

/// An ordering together with its crossing count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refined {
    pub ordering: Vec<String>,
    pub crossings: usize,
}

/// One pass of swap search over `range` (the whole ordering when `None`).
///
/// Every ordered pair of distinct positions is tried once; a swap is kept
/// only when it strictly lowers the total count.
pub fn local_search<S: AsRef<str>, E: AsRef<str>>(
    ordering: &[S],
    edges: &[(E, E)],
    range: Option<Range<usize>>,
) -> Result<Refined> {
    let graph = ArcGraph::new(ordering, edges)?;
    let range = range.unwrap_or(0..ordering.len());
    check_range(&range, ordering.len())?;

    let edge_ids = graph.edge_ids();
    let mut perm: Vec<usize> = (0..graph.node_count()).collect();
    let start = permutation_crossings(&perm, &edge_ids);
    let crossings = swap_pass(&mut perm, &edge_ids, range, start);

    Ok(Refined {
        ordering: graph.labels_for(&perm),
        crossings,
    })
}

/// Swap search confined to each group's contiguous span.
///
/// Every node needs a group and each group must occupy one contiguous run of
/// positions; nodes never leave their group's span.
pub fn local_search_in_clusters<S: AsRef<str>, E: AsRef<str>>(
    ordering: &[S],
    edges: &[(E, E)],
    group_of: &HashMap<String, String>,
) -> Result<Refined> {
    let graph = ArcGraph::new(ordering, edges)?;
    let spans = cluster_spans(ordering, group_of)?;

    let edge_ids = graph.edge_ids();
    let mut perm: Vec<usize> = (0..graph.node_count()).collect();
    let mut crossings = permutation_crossings(&perm, &edge_ids);
    for span in spans {
        crossings = swap_pass(&mut perm, &edge_ids, span, crossings);
    }

    Ok(Refined {
        ordering: graph.labels_for(&perm),
        crossings,
    })
}

/// Contiguous position spans of consecutive nodes sharing a group.
///
/// Fails with `NonContiguousGroup` when a group shows up in two spans.
pub fn cluster_spans<S: AsRef<str>>(
    ordering: &[S],
    group_of: &HashMap<String, String>,
) -> Result<Vec<Range<usize>>> {
    let group = |label: &str| {
        group_of
            .get(label)
            .map(String::as_str)
            .ok_or_else(|| Error::MissingGroup {
                node: label.to_string(),
            })
    };

    let mut spans = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut start = 0usize;
    while start < ordering.len() {
        let current = group(ordering[start].as_ref())?;
        if !seen.insert(current) {
            return Err(Error::NonContiguousGroup {
                group: current.to_string(),
            });
        }
        let mut end = start + 1;
        while end < ordering.len() && group(ordering[end].as_ref())? == current {
            end += 1;
        }
        spans.push(start..end);
        start = end;
    }
    Ok(spans)
}

pub(crate) fn swap_pass(
    perm: &mut Vec<usize>,
    edges: &[(usize, usize)],
    range: Range<usize>,
    mut current: usize,
) -> usize {
    let before = current;
    for i in range.clone() {
        for j in range.clone() {
            if i == j {
                continue;
            }
            let mut candidate = perm.clone();
            candidate.swap(i, j);
            let crossings = permutation_crossings(&candidate, edges);
            if crossings < current {
                trace!(i, j, crossings, "swap committed");
                *perm = candidate;
                current = crossings;
            }
        }
    }
    debug!(
        start = range.start,
        end = range.end,
        before,
        after = current,
        "local search pass"
    );
    current
}

fn check_range(range: &Range<usize>, len: usize) -> Result<()> {
    if range.start > range.end || range.end > len {
        return Err(Error::InvalidRange {
            start: range.start,
            end: range.end,
            len,
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/rust/test_local_search.rs"]
mod tests;
