//! Prim's minimum spanning tree.
//!
//! Variables:
//!   key[v]  = lightest known edge weight joining v to the finished set
//!   pred[v] = the finished endpoint of that edge
//!
//! Equations:
//!   Initialise: key[start] = 0,  key[v] = INFINITY  for v != start
//!   Settle v = argmin key over the frontier, then for each (v, u, w):
//!     w < key[u]  =>  key[u] = w,  pred[u] = v
//!   Tree edge k (k = 1..V-1, insertion order) = (v_k, pred[v_k], key[v_k])
//!
//! On a disconnected graph each further component is rooted at the first of
//! its vertices to leave the frontier, so the result is a spanning forest.

use serde::{Deserialize, Serialize};

use crate::config::RunConfig;
use crate::data_structures::HeapNode;

use super::adj_list::{Edge, Graph, Weight};
use super::error::GraphError;
use super::greedy::{self, GreedyRule};
use super::paths::{get_paths, Path};

pub struct Prim;

impl GreedyRule for Prim {
    fn candidate(_settled: &HeapNode<Weight>, edge: &Edge) -> Option<Weight> {
        Some(edge.weight)
    }

    fn tree_slot(round: usize, _settled: &HeapNode<Weight>) -> Option<usize> {
        round.checked_sub(1)
    }
}

/// MST edges in the order their `from` vertex left the frontier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanningTree {
    pub start: usize,
    pub num_vertices: usize,
    pub edges: Vec<Edge>,
}

impl SpanningTree {
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

    /// True when the tree connects every vertex.
    pub fn is_spanning(&self) -> bool {
        self.edges.len() + 1 == self.num_vertices
    }

    /// Vertex-indexed tree whose weights are the cumulative cost from `start`.
    ///
    /// Vertices outside the start vertex's component get `None`. Fails with
    /// `WeightOverflow` if a cumulative cost does not fit in `Weight`.
    pub fn rooted(&self) -> Result<Vec<Option<Edge>>, GraphError> {
        let mut tree = vec![None; self.num_vertices];
        if self.start >= self.num_vertices {
            return Ok(tree);
        }
        tree[self.start] = Some(Edge::new(self.start, self.start, 0));
        // Insertion order settles every predecessor before its child.
        for edge in self.edges.iter().filter(|e| e.from < self.num_vertices) {
            let parent_cost = tree.get(edge.to).copied().flatten().map(|e| e.weight);
            if let Some(cost) = parent_cost {
                let cost = cost.checked_add(edge.weight).ok_or(GraphError::WeightOverflow)?;
                tree[edge.from] = Some(Edge::new(edge.from, edge.to, cost));
            }
        }
        Ok(tree)
    }

    /// Tree path from `start` to every vertex.
    pub fn paths(&self) -> Result<Vec<Option<Path>>, GraphError> {
        get_paths(&self.rooted()?, self.start)
    }
}

pub fn prim_get_mst(graph: &Graph, start: usize) -> Result<SpanningTree, GraphError> {
    prim_get_mst_with_config(graph, start, &RunConfig::default())
}

pub fn prim_get_mst_with_config(
    graph: &Graph,
    start: usize,
    config: &RunConfig,
) -> Result<SpanningTree, GraphError> {
    let tree = greedy::expand::<Prim>(graph, start, config)?;
    Ok(SpanningTree {
        start,
        num_vertices: graph.vertex_count(),
        edges: tree.into_iter().flatten().collect(),
    })
}
