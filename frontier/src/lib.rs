//! # Frontier
//!
//! Greedy frontier expansion over weighted graphs: Prim's minimum spanning
//! tree and Dijkstra's single-source shortest paths, both driven by an
//! indexed binary min-heap with decrease-key.
//!
//! ## Modules
//!
//! - `data_structures` – Indexed min-heap (insert, extract-min, decrease-priority, O(1) id lookup)
//! - `graph` – Adjacency list store, algorithm records, Prim, Dijkstra, path reconstruction
//! - `config` – Run options (tracing, invariant checks) read from the environment
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use frontier::graph::{get_shortest_paths, prim_get_mst, Graph, GraphSpec};
//!
//! let spec = GraphSpec {
//!     num_vertices: 4,
//!     directed: true,
//!     edges: vec![(0, 1, 1), (1, 2, 2), (2, 3, 1), (3, 0, 2), (0, 2, 5)],
//! };
//! let graph = Graph::from_spec(&spec).unwrap();
//!
//! let mst = prim_get_mst(&graph, 0).unwrap();
//! assert_eq!(mst.total_weight(), Ok(4));
//!
//! let tree = get_shortest_paths(&graph, 0).unwrap();
//! assert_eq!(tree.distances(), vec![Some(0), Some(1), Some(3), Some(4)]);
//! ```

pub mod config;
pub mod data_structures;
pub mod graph;
