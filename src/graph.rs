//! The Graph Store: an immutable in-memory heterogeneous information network.
//!
//! A node carries a `n_id` (its position in `[0, num_nodes())`) and a type
//! label. An edge is an unordered pair `(i, j)`, `i != j`, identified by its
//! position in `[0, num_edges())`. Adjacency is symmetric by construction.

use std::collections::HashSet;

use crate::error::{HeterogeneousMotifError, Result};

/// Read-only view of a heterogeneous information network.
///
/// All operations are safe to call concurrently once the graph has been
/// built: nothing here is mutated after construction.
pub trait Graph {
    /// Returns the number of nodes in the graph.
    fn num_nodes(&self) -> usize;

    /// Returns the number of edges in the graph.
    fn num_edges(&self) -> usize;

    /// Returns the `(i, j)` endpoints of the edge at the given id.
    fn edge(&self, edge_id: usize) -> (usize, usize);

    /// Iterates over the neighbours of the given node.
    fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_;

    /// Returns true if `u` and `v` are adjacent. Must be `O(1)` or `O(log n)`.
    fn is_connected(&self, u: usize, v: usize) -> bool;
}

/// A graph whose nodes additionally carry a type label.
pub trait TypedGraph: Graph {
    /// Returns the type label of the given node.
    fn type_of(&self, node: usize) -> &str;

    /// Returns the set of distinct type labels present in the graph.
    fn node_types(&self) -> &HashSet<String>;
}

/// An immutable heterogeneous information network: nodes with type labels,
/// an edge list, and symmetric adjacency.
#[derive(Debug, Clone)]
pub struct Hin {
    node_types_by_id: Vec<String>,
    edges: Vec<(usize, usize)>,
    neighbors: Vec<HashSet<usize>>,
    node_types: HashSet<String>,
}

impl Hin {
    /// Builds a new HIN from a list of per-node type labels and a list of
    /// edges. Rejects self-loops, duplicate edges, and out-of-range node ids:
    /// enumeration correctness depends on their absence, so construction
    /// fails loudly rather than silently tolerating malformed input.
    pub fn new(node_types_by_id: Vec<String>, edges: Vec<(usize, usize)>) -> Result<Self> {
        let num_nodes = node_types_by_id.len();
        let mut neighbors = vec![HashSet::new(); num_nodes];
        let mut seen_edges = HashSet::with_capacity(edges.len());

        for &(i, j) in &edges {
            if i >= num_nodes || j >= num_nodes {
                return Err(HeterogeneousMotifError::InvalidInput {
                    path: "edges.csv".into(),
                    reason: format!(
                        "edge ({i}, {j}) references a node id outside [0, {num_nodes})"
                    ),
                });
            }
            if i == j {
                return Err(HeterogeneousMotifError::InvalidInput {
                    path: "edges.csv".into(),
                    reason: format!("self-loop at node {i} is not allowed"),
                });
            }
            let canonical = if i < j { (i, j) } else { (j, i) };
            if !seen_edges.insert(canonical) {
                return Err(HeterogeneousMotifError::InvalidInput {
                    path: "edges.csv".into(),
                    reason: format!("duplicate edge ({i}, {j})"),
                });
            }
            neighbors[i].insert(j);
            neighbors[j].insert(i);
        }

        let node_types = node_types_by_id.iter().cloned().collect();

        Ok(Self {
            node_types_by_id,
            edges,
            neighbors,
            node_types,
        })
    }
}

impl Graph for Hin {
    fn num_nodes(&self) -> usize {
        self.node_types_by_id.len()
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    fn edge(&self, edge_id: usize) -> (usize, usize) {
        self.edges[edge_id]
    }

    fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.neighbors[node].iter().copied()
    }

    fn is_connected(&self, u: usize, v: usize) -> bool {
        self.neighbors[u].contains(&v)
    }
}

impl TypedGraph for Hin {
    fn type_of(&self, node: usize) -> &str {
        &self.node_types_by_id[node]
    }

    fn node_types(&self) -> &HashSet<String> {
        &self.node_types
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hin3() -> Hin {
        Hin::new(
            vec!["A".to_string(), "A".to_string(), "A".to_string()],
            vec![(0, 1), (1, 2)],
        )
        .unwrap()
    }

    #[test]
    fn adjacency_is_symmetric() {
        let hin = hin3();
        assert!(hin.is_connected(0, 1));
        assert!(hin.is_connected(1, 0));
        assert!(!hin.is_connected(0, 2));
    }

    #[test]
    fn rejects_self_loops() {
        let err = Hin::new(vec!["A".to_string()], vec![(0, 0)]).unwrap_err();
        assert!(matches!(err, HeterogeneousMotifError::InvalidInput { .. }));
    }

    #[test]
    fn rejects_duplicate_edges() {
        let err = Hin::new(
            vec!["A".to_string(), "A".to_string()],
            vec![(0, 1), (1, 0)],
        )
        .unwrap_err();
        assert!(matches!(err, HeterogeneousMotifError::InvalidInput { .. }));
    }

    #[test]
    fn rejects_out_of_range_node_ids() {
        let err = Hin::new(vec!["A".to_string()], vec![(0, 5)]).unwrap_err();
        assert!(matches!(err, HeterogeneousMotifError::InvalidInput { .. }));
    }

    #[test]
    fn node_types_deduplicated() {
        let hin = hin3();
        assert_eq!(hin.node_types().len(), 1);
    }
}
