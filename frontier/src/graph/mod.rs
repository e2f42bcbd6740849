pub mod adj_list;
pub mod dijkstra;
pub mod error;
pub mod greedy;
pub mod invariant;
pub mod paths;
pub mod prim;
pub mod records;

pub use adj_list::{Edge, Graph, GraphSpec, Vertex, Weight};
pub use dijkstra::{get_shortest_paths, get_shortest_paths_with_config, DistanceTree};
pub use error::GraphError;
pub use paths::{get_paths, make_path, Path};
pub use prim::{prim_get_mst, prim_get_mst_with_config, SpanningTree};
pub use records::{Records, INFINITY};
