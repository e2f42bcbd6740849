//! Dijkstra's single-source shortest paths.
//!
//! Variables:
//!   dist[v] = shortest known distance from start to v
//!   pred[v] = vertex preceding v on that path
//!
//! Equations:
//!   Initialise: dist[start] = 0,  dist[v] = INFINITY  for v != start
//!   Settle v = argmin dist over the frontier, then for each (v, u, w):
//!     dist[v] + w < dist[u]  =>  dist[u] = dist[v] + w,  pred[u] = v
//!   tree[v] = (v, pred[v], dist[v]),  tree[start] = (start, start, 0)
//!
//! Edge weights are unsigned, so the greedy order is always correct. A shortest
//! distance that would reach `INFINITY` aborts the run with `WeightOverflow`.

use serde::{Deserialize, Serialize};

use crate::config::RunConfig;
use crate::data_structures::HeapNode;

use super::adj_list::{Edge, Graph, Weight};
use super::error::GraphError;
use super::greedy::{self, GreedyRule};
use super::paths::{get_paths, make_path, Path};
use super::records::INFINITY;

pub struct Dijkstra;

impl GreedyRule for Dijkstra {
    fn candidate(settled: &HeapNode<Weight>, edge: &Edge) -> Option<Weight> {
        // An unreached vertex offers nothing.
        if settled.priority == INFINITY {
            return Some(INFINITY);
        }
        settled.priority.checked_add(edge.weight).filter(|&dist| dist < INFINITY)
    }

    fn tree_slot(_round: usize, settled: &HeapNode<Weight>) -> Option<usize> {
        Some(settled.id)
    }
}

/// `edges[v]` is `(v, pred[v], dist[v])`, or `None` when v is unreachable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceTree {
    pub start: usize,
    pub edges: Vec<Option<Edge>>,
}

impl DistanceTree {
    pub fn num_vertices(&self) -> usize {
        self.edges.len()
    }

    pub fn distance(&self, v: usize) -> Option<Weight> {
        self.edges.get(v).copied().flatten().map(|e| e.weight)
    }

    pub fn distances(&self) -> Vec<Option<Weight>> {
        (0..self.edges.len()).map(|v| self.distance(v)).collect()
    }

    pub fn predecessor(&self, v: usize) -> Option<usize> {
        self.edges.get(v).copied().flatten().map(|e| e.to)
    }

    pub fn path_to(&self, v: usize) -> Result<Option<Path>, GraphError> {
        make_path(&self.edges, v, self.start)
    }

    pub fn paths(&self) -> Result<Vec<Option<Path>>, GraphError> {
        get_paths(&self.edges, self.start)
    }
}

pub fn get_shortest_paths(graph: &Graph, start: usize) -> Result<DistanceTree, GraphError> {
    get_shortest_paths_with_config(graph, start, &RunConfig::default())
}

pub fn get_shortest_paths_with_config(
    graph: &Graph,
    start: usize,
    config: &RunConfig,
) -> Result<DistanceTree, GraphError> {
    let edges = greedy::expand::<Dijkstra>(graph, start, config)?;
    Ok(DistanceTree { start, edges })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighted() -> Graph {
        // 0 -1- 1 -2- 2,  0 -4- 2,  2 -6- 3
        Graph::from_edges(4, &[(0, 1, 1), (1, 2, 2), (0, 2, 4), (2, 3, 6)]).unwrap()
    }

    #[test]
    fn start_records_self_loop() {
        let tree = get_shortest_paths(&weighted(), 0).unwrap();
        assert_eq!(tree.edges[0], Some(Edge::new(0, 0, 0)));
        assert_eq!(tree.predecessor(0), Some(0));
    }

    #[test]
    fn prefers_longer_hop_chain_when_shorter() {
        let tree = get_shortest_paths(&weighted(), 0).unwrap();
        assert_eq!(tree.distances(), vec![Some(0), Some(1), Some(3), Some(9)]);
        assert_eq!(tree.predecessor(2), Some(1));
        assert_eq!(tree.predecessor(3), Some(2));
    }

    #[test]
    fn unreachable_vertex_has_no_slot() {
        let mut graph = Graph::new(3);
        graph.add_undirected(0, 1, 2).unwrap();
        let tree = get_shortest_paths(&graph, 1).unwrap();
        assert_eq!(tree.distances(), vec![Some(2), Some(0), None]);
        assert_eq!(tree.path_to(2), Ok(None));
    }

    #[test]
    fn directed_edges_are_followed_one_way() {
        let mut graph = Graph::new(2);
        graph.add_edge(1, 0, 3).unwrap();
        assert_eq!(get_shortest_paths(&graph, 0).unwrap().distance(1), None);
        assert_eq!(get_shortest_paths(&graph, 1).unwrap().distance(0), Some(3));
    }

    #[test]
    fn distance_reaching_infinity_is_an_error() {
        let half = 1u64 << 63;
        let graph = Graph::from_edges(3, &[(0, 1, half), (1, 2, half)]).unwrap();
        assert_eq!(get_shortest_paths(&graph, 0), Err(GraphError::WeightOverflow));

        // Sums to exactly u64::MAX, which is the unreached marker.
        let graph = Graph::from_edges(3, &[(0, 1, half), (1, 2, half - 1)]).unwrap();
        assert_eq!(get_shortest_paths(&graph, 0), Err(GraphError::WeightOverflow));
    }

    #[test]
    fn oversized_detour_does_not_mask_a_short_route() {
        let graph = Graph::from_edges(3, &[(0, 1, u64::MAX - 1), (0, 2, 1), (2, 1, 1)]).unwrap();
        let tree = get_shortest_paths(&graph, 2).unwrap();
        assert_eq!(tree.distances(), vec![Some(1), Some(1), Some(0)]);
    }

    #[test]
    fn largest_representable_distance_is_kept() {
        let graph = Graph::from_edges(3, &[(0, 1, 1 << 62), (1, 2, (1 << 62) - 1)]).unwrap();
        let tree = get_shortest_paths(&graph, 0).unwrap();
        assert_eq!(tree.distance(2), Some((1u64 << 63) - 1));
        let path = tree.path_to(2).unwrap().unwrap();
        assert_eq!(path.total_weight().ok(), tree.distance(2));
    }
}
