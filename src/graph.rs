//! Graph representation — adjacency sets and position-indexed adjacency matrix.
//!
//! `ArcGraph` wraps a petgraph `UnGraph` and keeps node indices equal to the
//! declaration position of each label, so algorithms can work on plain
//! `usize` ids and translate back to labels at the edges of the API.
//!
//! `AdjacencyMatrix` is indexed by *ordering position*, not by node identity:
//! row 0 is whatever node currently sits first. It is rebuilt for every
//! ordering that gets scored.

use std::collections::{BTreeSet, HashMap, HashSet};

use petgraph::graph::{NodeIndex, UnGraph};

use crate::error::{Error, Result};

// ─── Adjacency sets ─────────────────────────────────────────────────────────

/// Undirected graph over unique string labels.
///
/// Multi-edges collapse to a single adjacency; self-edges are kept.
#[derive(Debug, Clone)]
pub struct ArcGraph {
    pub graph: UnGraph<String, ()>,
    /// Maps label → petgraph NodeIndex.
    pub node_index: HashMap<String, NodeIndex>,
}

impl ArcGraph {
    /// Build from a node list and an edge list of label pairs.
    ///
    /// Every listed node becomes a key even when isolated. An edge endpoint
    /// missing from `nodes` fails with `NodeNotFound`.
    pub fn new<S: AsRef<str>, E: AsRef<str>>(nodes: &[S], edges: &[(E, E)]) -> Result<Self> {
        let mut graph: UnGraph<String, ()> = UnGraph::with_capacity(nodes.len(), edges.len());
        let mut node_index: HashMap<String, NodeIndex> = HashMap::with_capacity(nodes.len());

        for node in nodes {
            let label = node.as_ref();
            if node_index.contains_key(label) {
                return Err(Error::DuplicateNode {
                    node: label.to_string(),
                });
            }
            let idx = graph.add_node(label.to_string());
            node_index.insert(label.to_string(), idx);
        }

        for (a, b) in edges {
            let a_idx = lookup(&node_index, a.as_ref())?;
            let b_idx = lookup(&node_index, b.as_ref())?;
            // update_edge keeps one edge per pair regardless of endpoint order
            graph.update_edge(a_idx, b_idx, ());
        }

        Ok(Self { graph, node_index })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Declaration position of `label`.
    pub fn index_of(&self, label: &str) -> Result<usize> {
        lookup(&self.node_index, label).map(NodeIndex::index)
    }

    pub fn label(&self, id: usize) -> &str {
        &self.graph[NodeIndex::new(id)]
    }

    /// All labels in declaration order.
    pub fn labels(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .map(|idx| self.graph[idx].as_str())
            .collect()
    }

    /// Neighbor labels of `label`, in declaration order.
    ///
    /// An isolated node yields an empty list; an unknown label is an error.
    pub fn neighbors(&self, label: &str) -> Result<Vec<&str>> {
        let id = self.index_of(label)?;
        Ok(self
            .neighbor_ids(id)
            .into_iter()
            .map(|n| self.label(n))
            .collect())
    }

    /// Size of the neighbor set. A self-edge counts once.
    pub fn degree(&self, label: &str) -> Result<usize> {
        let id = self.index_of(label)?;
        Ok(self.neighbor_ids(id).len())
    }

    /// Label → neighbor set for every node.
    pub fn adjacency_sets(&self) -> HashMap<&str, HashSet<&str>> {
        self.graph
            .node_indices()
            .map(|idx| {
                let neighbors = self
                    .neighbor_ids(idx.index())
                    .into_iter()
                    .map(|n| self.label(n))
                    .collect();
                (self.graph[idx].as_str(), neighbors)
            })
            .collect()
    }

    /// Neighbor ids of `id`, deduplicated and ascending.
    pub(crate) fn neighbor_ids(&self, id: usize) -> Vec<usize> {
        let unique: BTreeSet<usize> = self
            .graph
            .neighbors(NodeIndex::new(id))
            .map(NodeIndex::index)
            .collect();
        unique.into_iter().collect()
    }

    /// Neighbor lists for every id, indexed by id.
    pub(crate) fn adjacency(&self) -> Vec<Vec<usize>> {
        (0..self.node_count()).map(|id| self.neighbor_ids(id)).collect()
    }

    /// Edges as id pairs, one per adjacent pair.
    pub(crate) fn edge_ids(&self) -> Vec<(usize, usize)> {
        self.graph
            .edge_indices()
            .filter_map(|e| self.graph.edge_endpoints(e))
            .map(|(a, b)| (a.index(), b.index()))
            .collect()
    }

    /// Translate an ordering of labels into ids. Every label must be known.
    pub(crate) fn permutation_of<S: AsRef<str>>(&self, ordering: &[S]) -> Result<Vec<usize>> {
        ordering.iter().map(|l| self.index_of(l.as_ref())).collect()
    }

    pub(crate) fn labels_for(&self, perm: &[usize]) -> Vec<String> {
        perm.iter().map(|&id| self.label(id).to_string()).collect()
    }
}

fn lookup(node_index: &HashMap<String, NodeIndex>, label: &str) -> Result<NodeIndex> {
    node_index
        .get(label)
        .copied()
        .ok_or_else(|| Error::node_not_found(label))
}

// ─── Adjacency matrix ───────────────────────────────────────────────────────

/// Square, symmetric boolean matrix indexed by ordering positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    size: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    /// Build the matrix for `ordering`: cell (i, j) is set iff the nodes at
    /// positions i and j share an edge.
    ///
    /// A label listed twice fails with `DuplicateNode`.
    pub fn from_ordering<S: AsRef<str>, E: AsRef<str>>(
        ordering: &[S],
        edges: &[(E, E)],
    ) -> Result<Self> {
        let mut position: HashMap<&str, usize> = HashMap::with_capacity(ordering.len());
        for (i, label) in ordering.iter().enumerate() {
            if position.insert(label.as_ref(), i).is_some() {
                return Err(Error::DuplicateNode {
                    node: label.as_ref().to_string(),
                });
            }
        }
        let find = |label: &str| {
            position
                .get(label)
                .copied()
                .ok_or_else(|| Error::node_not_found(label))
        };

        let mut matrix = Self::empty(ordering.len());
        for (a, b) in edges {
            matrix.set(find(a.as_ref())?, find(b.as_ref())?);
        }
        Ok(matrix)
    }

    /// Build the matrix for a permutation of node ids over id-pair edges.
    pub(crate) fn from_permutation(perm: &[usize], edges: &[(usize, usize)]) -> Self {
        let mut position = vec![0usize; perm.len()];
        for (pos, &id) in perm.iter().enumerate() {
            position[id] = pos;
        }
        let mut matrix = Self::empty(perm.len());
        for &(a, b) in edges {
            matrix.set(position[a], position[b]);
        }
        matrix
    }

    fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    fn set(&mut self, i: usize, j: usize) {
        self.cells[i * self.size + j] = true;
        self.cells[j * self.size + i] = true;
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether positions `i` and `j` are adjacent. Panics when out of range.
    pub fn is_adjacent(&self, i: usize, j: usize) -> bool {
        assert!(i < self.size && j < self.size, "matrix index out of range");
        self.cells[i * self.size + j]
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_graph.rs"]
mod tests;
