//! Weighted adjacency list graph representation.
//!
//! Variables:
//!   V          = number of vertices, ids dense in 0..V
//!   E          = number of stored (directed) edge entries
//!   adj[u]     = Vec<Edge> of out-edges of vertex u, in insertion order
//!
//! Equations:
//!   add_edge(u, v, w):       adj[u].push((u, v, w)),  E += 1
//!   add_undirected(u, v, w): add_edge(u, v, w) + add_edge(v, u, w),  E += 2
//!   out_degree(u)          = |adj[u]|

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::GraphError;
use super::records::INFINITY;

pub type Weight = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: usize, to: usize, weight: Weight) -> Self {
        Self { from, to, weight }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} -- {}, {})", self.from, self.to, self.weight)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub id: usize,
    adj: Vec<Edge>,
}

impl Vertex {
    fn new(id: usize) -> Self {
        Self { id, adj: Vec::new() }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.adj
    }
}

/// JSON form of a graph: a vertex count plus `(from, to, weight)` triples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSpec {
    pub num_vertices: usize,
    #[serde(default)]
    pub directed: bool,
    pub edges: Vec<(usize, usize, Weight)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    vertices: Vec<Vertex>,
    num_edges: usize,
}

impl Graph {
    /// Create a graph with `v` isolated vertices.
    pub fn new(v: usize) -> Self {
        Self {
            vertices: (0..v).map(Vertex::new).collect(),
            num_edges: 0,
        }
    }

    /// Build an undirected graph from `(from, to, weight)` triples.
    pub fn from_edges(v: usize, edges: &[(usize, usize, Weight)]) -> Result<Self, GraphError> {
        let mut graph = Self::new(v);
        for &(u, w, weight) in edges {
            graph.add_undirected(u, w, weight)?;
        }
        Ok(graph)
    }

    pub fn from_spec(spec: &GraphSpec) -> Result<Self, GraphError> {
        let mut graph = Self::new(spec.num_vertices);
        for &(u, w, weight) in &spec.edges {
            if spec.directed {
                graph.add_edge(u, w, weight)?;
            } else {
                graph.add_undirected(u, w, weight)?;
            }
        }
        Ok(graph)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.num_edges
    }

    pub fn contains_vertex(&self, id: usize) -> bool {
        id < self.vertices.len()
    }

    pub fn vertex_id(&self, i: usize) -> Option<usize> {
        self.vertices.get(i).map(|v| v.id)
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Out-edges of `u`. Empty for an unknown vertex.
    pub fn adjacent_edges(&self, u: usize) -> &[Edge] {
        self.vertices.get(u).map(Vertex::edges).unwrap_or(&[])
    }

    /// Add a directed edge u -> v. `weight` must be below `INFINITY`.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: Weight) -> Result<(), GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if weight >= INFINITY {
            return Err(GraphError::WeightOutOfRange { weight });
        }
        self.vertices[u].adj.push(Edge::new(u, v, weight));
        self.num_edges += 1;
        Ok(())
    }

    /// Add undirected edge (stored once in each endpoint's list).
    pub fn add_undirected(&mut self, u: usize, v: usize, weight: Weight) -> Result<(), GraphError> {
        self.add_edge(u, v, weight)?;
        self.add_edge(v, u, weight)
    }

    pub fn check_vertex(&self, id: usize) -> Result<(), GraphError> {
        if self.contains_vertex(id) {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex: id,
                num_vertices: self.vertex_count(),
            })
        }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Number of vertices: {}. Number of edges: {}.",
            self.vertex_count(),
            self.edge_count()
        )?;
        writeln!(f)?;
        for vertex in &self.vertices {
            write!(f, "{}: ", vertex.id)?;
            for edge in &vertex.adj {
                write!(f, "{edge}  ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undirected_edges_are_stored_symmetrically() {
        let graph = Graph::from_edges(3, &[(0, 1, 4), (1, 2, 7)]).unwrap();
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.adjacent_edges(1), &[Edge::new(1, 0, 4), Edge::new(1, 2, 7)]);
        assert_eq!(graph.adjacent_edges(2), &[Edge::new(2, 1, 7)]);
    }

    #[test]
    fn rejects_out_of_range_endpoint() {
        let mut graph = Graph::new(2);
        let err = graph.add_edge(0, 2, 1).unwrap_err();
        assert_eq!(err, GraphError::InvalidVertex { vertex: 2, num_vertices: 2 });
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn infinite_weight_is_rejected() {
        let mut graph = Graph::new(2);
        let err = graph.add_undirected(0, 1, u64::MAX).unwrap_err();
        assert_eq!(err, GraphError::WeightOutOfRange { weight: u64::MAX });
        assert_eq!(graph.edge_count(), 0);
        graph.add_undirected(0, 1, u64::MAX - 1).unwrap();
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn vertex_ids_follow_positions() {
        let graph = Graph::new(3);
        assert_eq!(graph.vertex_id(0), Some(0));
        assert_eq!(graph.vertex_id(2), Some(2));
        assert_eq!(graph.vertex_id(3), None);
        assert!(graph.vertices().iter().enumerate().all(|(i, v)| graph.vertex_id(i) == Some(v.id)));
    }

    #[test]
    fn directed_spec_stores_one_entry_per_edge() {
        let spec = GraphSpec { num_vertices: 2, directed: true, edges: vec![(0, 1, 3)] };
        let graph = Graph::from_spec(&spec).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.adjacent_edges(1).is_empty());
    }

    #[test]
    fn display_lists_each_adjacency() {
        let graph = Graph::from_edges(2, &[(0, 1, 5)]).unwrap();
        let text = graph.to_string();
        assert!(text.starts_with("Number of vertices: 2. Number of edges: 2."));
        assert!(text.contains("0: (0 -- 1, 5)"));
        assert!(text.contains("1: (1 -- 0, 5)"));
    }
}
