use thiserror::Error;

use crate::data_structures::HeapError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex {vertex} is not in a graph of {num_vertices} vertices")]
    InvalidVertex { vertex: usize, num_vertices: usize },
    #[error("edge weight {weight} is out of range")]
    WeightOutOfRange { weight: u64 },
    #[error("path weight overflows the weight type")]
    WeightOverflow,
    #[error("predecessor chain from vertex {vertex} does not reach the start vertex")]
    PathCycle { vertex: usize },
    #[error("invariant `{invariant}` violated")]
    InvariantViolated { invariant: &'static str },
    #[error(transparent)]
    Heap(#[from] HeapError),
}
