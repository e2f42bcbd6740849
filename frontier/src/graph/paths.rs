//! Path reconstruction from a vertex-indexed predecessor tree.
//!
//! Variables:
//!   tree[v] = (v, pred[v], cost[v])   with cost the cumulative distance from start
//!
//! Equations:
//!   path(start) = []
//!   path(v)     = path(pred[v]) ++ [(pred[v], v, cost[v] - cost[pred[v]])]
//!
//!   Evaluated as a backward walk v -> pred[v] -> ... -> start, prepending one
//!   edge per hop. A walk longer than V hops means the chain is cyclic.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::adj_list::{Edge, Weight};
use super::error::GraphError;

/// Edges from the start vertex outward, each carrying its own weight.
///
/// Edges read `(pred, v, weight)`, first edge leaving the start vertex; the
/// tree itself stores `(v, pred, cost)` walked from `v` back to the start.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub edges: Vec<Edge>,
}

impl Path {
    pub fn total_weight(&self) -> Result<Weight, GraphError> {
        self.edges
            .iter()
            .try_fold(0, |acc: Weight, e| acc.checked_add(e.weight))
            .ok_or(GraphError::WeightOverflow)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Vertices visited, start first. Empty for the start vertex's own path.
    pub fn vertices(&self) -> Vec<usize> {
        let mut out: Vec<usize> = self.edges.first().map(|e| e.from).into_iter().collect();
        out.extend(self.edges.iter().map(|e| e.to));
        out
    }
}

/// Path from `start` to every vertex of `tree`; `None` where a vertex is unreachable.
pub fn get_paths(tree: &[Option<Edge>], start: usize) -> Result<Vec<Option<Path>>, GraphError> {
    (0..tree.len()).map(|v| make_path(tree, v, start)).collect()
}

pub fn make_path(tree: &[Option<Edge>], vertex: usize, start: usize) -> Result<Option<Path>, GraphError> {
    let n = tree.len();
    for v in [vertex, start] {
        if v >= n {
            return Err(GraphError::InvalidVertex { vertex: v, num_vertices: n });
        }
    }

    let cost = |v: usize| -> Option<Weight> {
        if v == start {
            return Some(0);
        }
        tree[v].map(|e| e.weight)
    };

    let mut edges = VecDeque::new();
    let mut current = vertex;
    while current != start {
        if edges.len() >= n {
            return Err(GraphError::PathCycle { vertex });
        }
        let Some(hop) = tree[current] else {
            return Ok(None);
        };
        let pred = hop.to;
        if pred >= n {
            return Err(GraphError::InvalidVertex { vertex: pred, num_vertices: n });
        }
        if pred == current {
            // Self-loop away from start: a root that is not ours.
            return Err(GraphError::PathCycle { vertex });
        }
        let Some(pred_cost) = cost(pred) else {
            return Ok(None);
        };
        edges.push_front(Edge::new(pred, current, hop.weight.saturating_sub(pred_cost)));
        current = pred;
    }

    Ok(Some(Path { edges: edges.into() }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Vec<Option<Edge>> {
        // 0 <- 1 <- 2, cumulative costs 0, 4, 9
        vec![
            Some(Edge::new(0, 0, 0)),
            Some(Edge::new(1, 0, 4)),
            Some(Edge::new(2, 1, 9)),
        ]
    }

    #[test]
    fn start_path_is_empty() {
        let path = make_path(&chain(), 0, 0).unwrap().unwrap();
        assert!(path.is_empty());
        assert!(path.vertices().is_empty());
    }

    #[test]
    fn weights_are_incremental_and_ordered_from_start() {
        let path = make_path(&chain(), 2, 0).unwrap().unwrap();
        assert_eq!(path.edges, vec![Edge::new(0, 1, 4), Edge::new(1, 2, 5)]);
        assert_eq!(path.total_weight(), Ok(9));
        assert_eq!(path.vertices(), vec![0, 1, 2]);
    }

    #[test]
    fn cyclic_chain_is_reported() {
        let tree = vec![
            Some(Edge::new(0, 0, 0)),
            Some(Edge::new(1, 2, 3)),
            Some(Edge::new(2, 1, 5)),
        ];
        assert_eq!(make_path(&tree, 1, 0), Err(GraphError::PathCycle { vertex: 1 }));
    }

    #[test]
    fn missing_slot_means_unreachable() {
        let tree = vec![Some(Edge::new(0, 0, 0)), None, Some(Edge::new(2, 1, 5))];
        let paths = get_paths(&tree, 0).unwrap();
        assert!(paths[0].is_some());
        assert!(paths[1].is_none());
        assert!(paths[2].is_none());
    }

    #[test]
    fn oversized_total_is_an_error() {
        let path = Path { edges: vec![Edge::new(0, 1, u64::MAX - 1), Edge::new(1, 2, 2)] };
        assert_eq!(path.total_weight(), Err(GraphError::WeightOverflow));
    }

    #[test]
    fn out_of_range_start_is_rejected() {
        assert_eq!(
            get_paths(&chain(), 5),
            Err(GraphError::InvalidVertex { vertex: 5, num_vertices: 3 })
        );
    }
}
