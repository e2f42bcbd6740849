use crate::data_structures::IndexedMinHeap;

use super::error::GraphError;
use super::records::Records;

/// Invariant trait for graph algorithm checks
pub trait Invariant<T: ?Sized> {
    fn name(&self) -> &'static str;
    fn check(&self, value: &T) -> bool;

    fn enforce(&self, value: &T) -> Result<(), GraphError> {
        if self.check(value) {
            Ok(())
        } else {
            Err(GraphError::InvariantViolated { invariant: self.name() })
        }
    }
}

/// priority(parent(i)) <= priority(i) for every non-root position
pub struct HeapOrder;

impl<P: Ord + Copy> Invariant<IndexedMinHeap<P>> for HeapOrder {
    fn name(&self) -> &'static str {
        "heap-order"
    }

    fn check(&self, heap: &IndexedMinHeap<P>) -> bool {
        heap.is_heap_ordered()
    }
}

/// index_map[id(i)] == i for every active position
pub struct IndexConsistent;

impl<P: Ord + Copy> Invariant<IndexedMinHeap<P>> for IndexConsistent {
    fn name(&self) -> &'static str {
        "index-map"
    }

    fn check(&self, heap: &IndexedMinHeap<P>) -> bool {
        heap.is_index_consistent()
    }
}

/// A vertex is finished exactly when it has left the frontier.
pub struct FrontierPartition;

impl Invariant<Records> for FrontierPartition {
    fn name(&self) -> &'static str {
        "frontier-partition"
    }

    fn check(&self, records: &Records) -> bool {
        (0..records.num_vertices()).all(|v| records.is_finished(v) != records.heap().contains(v))
    }
}

/// Run every records-level check.
pub fn enforce_all(records: &Records) -> Result<(), GraphError> {
    HeapOrder.enforce(records.heap())?;
    IndexConsistent.enforce(records.heap())?;
    FrontierPartition.enforce(records)
}
