//! Greedy frontier expansion shared by Prim's and Dijkstra's algorithms.
//!
//! Equations:
//!   repeat V times:
//!     (p, v) = settle()
//!     slot   = R::tree_slot(round, v)      =>  tree[slot] = (v, predecessors[v], p)
//!     for (v, u, w) in adj[v]:
//!       relax(u, R::candidate(p, w), v)
//!
//!   A vertex that settles at INFINITY after receiving an unrepresentable
//!   offer fails the run with WeightOverflow.
//!
//!   Complexity: O((V + E) log V)

use crate::config::RunConfig;
use crate::data_structures::HeapNode;

use super::adj_list::{Edge, Graph, Weight};
use super::error::GraphError;
use super::invariant;
use super::records::{Records, INFINITY};

/// What distinguishes one greedy algorithm from another.
pub trait GreedyRule {
    /// Priority offered to a neighbour reached from `settled` over `edge`,
    /// or `None` when it is not representable below `INFINITY`.
    fn candidate(settled: &HeapNode<Weight>, edge: &Edge) -> Option<Weight>;

    /// Tree slot written for the vertex settled on extraction `round`, if any.
    fn tree_slot(round: usize, settled: &HeapNode<Weight>) -> Option<usize>;
}

/// Run rule `R` over `graph` from `start` and return the raw output tree.
pub fn expand<R: GreedyRule>(
    graph: &Graph,
    start: usize,
    config: &RunConfig,
) -> Result<Vec<Option<Edge>>, GraphError> {
    let mut records = Records::new(graph, start)?;

    for round in 0..graph.vertex_count() {
        let settled = records.settle_next()?;
        // Reached only over offers too large to represent.
        if settled.priority == INFINITY && records.has_overflowed(settled.id) {
            return Err(GraphError::WeightOverflow);
        }

        // A vertex without a predecessor was never reached from start.
        if let (Some(slot), Some(pred)) = (R::tree_slot(round, &settled), records.predecessor(settled.id)) {
            records.add_tree_edge(slot, settled.id, pred, settled.priority);
        }

        for edge in graph.adjacent_edges(settled.id) {
            match R::candidate(&settled, edge) {
                Some(candidate) => {
                    records.relax(edge.to, candidate, settled.id)?;
                }
                None => records.mark_overflow(edge.to),
            }
        }

        if config.trace {
            eprintln!("after settling vertex {} (round {round}):\n{records}", settled.id);
        }
        if config.check_invariants {
            invariant::enforce_all(&records)?;
        }
    }

    Ok(records.into_tree())
}
