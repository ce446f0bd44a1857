//! Cluster ordering — keep each group contiguous and order groups as a whole.
//!
//! Groups become nodes of a coarser graph with one arc per pair of groups
//! whose members are linked. That graph is ordered by candidate selection,
//! nodes are laid out group by group, and swap search then runs inside each
//! group's span.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::ArcGraph;
use crate::local_search::local_search_in_clusters;
use crate::select::{Selection, Strategy, run_strategy, select_best};

/// Final layout of a grouped ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedOrder {
    /// Group labels, left to right.
    pub groups: Vec<String>,
    pub ordering: Vec<String>,
    pub crossings: usize,
    /// How the group order was chosen.
    pub strategy: Strategy,
}

/// Group labels in order of first appearance in `nodes`.
pub fn group_labels<S: AsRef<str>>(
    nodes: &[S],
    group_of: &HashMap<String, String>,
) -> Result<Vec<String>> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut groups = Vec::new();
    for node in nodes {
        let group = group_for(group_of, node.as_ref())?;
        if seen.insert(group) {
            groups.push(group.to_string());
        }
    }
    Ok(groups)
}

/// One arc per unordered pair of groups linked by at least one edge.
///
/// An edge inside a group yields a single self-arc for that group.
pub fn cluster_arcs<S: AsRef<str>>(
    group_of: &HashMap<String, String>,
    edges: &[(S, S)],
) -> Result<Vec<(String, String)>> {
    let mut linked: HashSet<(&str, &str)> = HashSet::new();
    let mut arcs = Vec::new();
    for (a, b) in edges {
        let ga = group_for(group_of, a.as_ref())?;
        let gb = group_for(group_of, b.as_ref())?;
        let key = if ga <= gb { (ga, gb) } else { (gb, ga) };
        if linked.insert(key) {
            arcs.push((ga.to_string(), gb.to_string()));
        }
    }
    Ok(arcs)
}

/// Order the group graph by candidate selection.
pub fn order_groups<S: AsRef<str>, E: AsRef<str>>(
    groups: &[S],
    cluster_arcs: &[(E, E)],
) -> Result<Selection> {
    select_best(groups, cluster_arcs)
}

/// Grouped ordering of `nodes`: groups contiguous, groups ordered to reduce
/// crossings between them, members refined by swap search within their group.
///
/// `group_order` picks the group ordering; `None` runs candidate selection.
pub fn grouped_order<S: AsRef<str>, E: AsRef<str>>(
    nodes: &[S],
    group_of: &HashMap<String, String>,
    edges: &[(E, E)],
    group_order: Option<Strategy>,
) -> Result<GroupedOrder> {
    let groups = group_labels(nodes, group_of)?;
    let arcs = cluster_arcs(group_of, edges)?;

    let (groups, strategy) = match group_order {
        None => {
            let selection = order_groups(&groups, &arcs)?;
            (selection.ordering, selection.strategy)
        }
        Some(strategy) => (order_groups_with(strategy, &groups, &arcs)?, strategy),
    };

    // members keep their input order within a group
    let mut laid_out: Vec<&str> = Vec::with_capacity(nodes.len());
    for group in &groups {
        for node in nodes {
            if group_for(group_of, node.as_ref())? == group.as_str() {
                laid_out.push(node.as_ref());
            }
        }
    }

    let edges: Vec<(&str, &str)> = edges.iter().map(|(a, b)| (a.as_ref(), b.as_ref())).collect();
    let refined = local_search_in_clusters(&laid_out, &edges, group_of)?;
    debug!(
        groups = groups.len(),
        crossings = refined.crossings,
        "grouped ordering built"
    );

    Ok(GroupedOrder {
        groups,
        ordering: refined.ordering,
        crossings: refined.crossings,
        strategy,
    })
}

fn order_groups_with(
    strategy: Strategy,
    groups: &[String],
    arcs: &[(String, String)],
) -> Result<Vec<String>> {
    let graph = ArcGraph::new(groups, arcs)?;
    let perm: Vec<usize> = (0..graph.node_count()).collect();
    let (perm, _) = run_strategy(strategy, &graph, &perm, &graph.edge_ids())?;
    Ok(graph.labels_for(&perm))
}

fn group_for<'a>(group_of: &'a HashMap<String, String>, node: &str) -> Result<&'a str> {
    group_of
        .get(node)
        .map(String::as_str)
        .ok_or_else(|| Error::MissingGroup {
            node: node.to_string(),
        })
}

#[cfg(test)]
#[path = "../tests/rust/test_cluster.rs"]
mod tests;
