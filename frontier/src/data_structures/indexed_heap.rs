//! Indexed binary min-heap with decrease-key.
//!
//! Variables:
//!   nodes     : Vec<HeapNode<P>>     — heap array, position i stored at nodes[i - 1]
//!   N         : usize                — current size, active positions are 1..=N
//!   C         : usize                — capacity, doubled when N == C on insert
//!   index_map : Vec<Option<usize>>   — id -> current position, None when absent
//!
//! Equations:
//!   parent(i)      = i / 2          (none for the root, i = 1)
//!   left_child(i)  = 2*i            (if 2*i   <= N)
//!   right_child(i) = 2*i + 1        (if 2*i+1 <= N)
//!
//!   Heap invariant:  priority(parent(i)) <= priority(i)   for all 1 < i <= N
//!   Index invariant: index_map[id(i)] == Some(i)          for all 1 <= i <= N
//!
//!   insert(p, id):          N' = N+1, nodes[N'] = (p, id), bubble_up(N')       O(log N)
//!   extract_min():          swap(1, N), N' = N-1, bubble_down(1)               O(log N)
//!   decrease_priority(id,p):i = index_map[id], p < priority(i) => bubble_up(i) O(log N)
//!   get_priority(id), index_of(id)                                             O(1)

use std::fmt;

use thiserror::Error;

pub const ROOT_INDEX: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("extract from an empty heap")]
    EmptyHeap,
    #[error("id {0} is already in the heap")]
    DuplicateId(usize),
    #[error("id {0} is not in the heap")]
    MissingId(usize),
}

/// A `(priority, id)` pair stored in the heap array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapNode<P> {
    pub priority: P,
    pub id: usize,
}

pub struct IndexedMinHeap<P> {
    nodes: Vec<HeapNode<P>>,
    capacity: usize,
    index_map: Vec<Option<usize>>,
}

impl<P: Ord + Copy> IndexedMinHeap<P> {
    /// Create an empty heap able to hold `capacity` elements before growing.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            nodes: Vec::with_capacity(capacity),
            capacity,
            index_map: vec![None; capacity],
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True iff `idx` names an occupied position, i.e. `1 <= idx <= N`.
    pub fn is_valid_index(&self, idx: usize) -> bool {
        (ROOT_INDEX..=self.len()).contains(&idx)
    }

    pub fn peek_min(&self) -> Option<&HeapNode<P>> {
        self.nodes.first()
    }

    pub fn contains(&self, id: usize) -> bool {
        self.index_of(id).is_some()
    }

    /// Current position of `id`, if it is in the heap.
    pub fn index_of(&self, id: usize) -> Option<usize> {
        self.index_map.get(id).copied().flatten()
    }

    pub fn get_priority(&self, id: usize) -> Option<P> {
        self.index_of(id).map(|idx| self.priority_at(idx))
    }

    /// Id stored at position `idx`, if occupied.
    pub fn id_at(&self, idx: usize) -> Option<usize> {
        self.is_valid_index(idx).then(|| self.node(idx).id)
    }

    pub fn insert(&mut self, priority: P, id: usize) -> Result<(), HeapError> {
        if self.contains(id) {
            return Err(HeapError::DuplicateId(id));
        }
        if self.len() == self.capacity {
            self.double_capacity();
        }
        if id >= self.index_map.len() {
            self.index_map.resize(id + 1, None);
        }
        self.nodes.push(HeapNode { priority, id });
        let idx = self.len();
        self.index_map[id] = Some(idx);
        self.bubble_up(idx);
        Ok(())
    }

    pub fn extract_min(&mut self) -> Result<HeapNode<P>, HeapError> {
        if self.is_empty() {
            return Err(HeapError::EmptyHeap);
        }
        let last = self.len();
        self.swap(ROOT_INDEX, last);
        let min = self.nodes.pop().ok_or(HeapError::EmptyHeap)?;
        self.index_map[min.id] = None;
        self.bubble_down(ROOT_INDEX);
        Ok(min)
    }

    /// Lower the priority of `id` to `new_priority`.
    ///
    /// Returns `Ok(false)` and leaves the heap untouched unless
    /// `new_priority` is strictly smaller than the current priority.
    pub fn decrease_priority(&mut self, id: usize, new_priority: P) -> Result<bool, HeapError> {
        let idx = self.index_of(id).ok_or(HeapError::MissingId(id))?;
        if new_priority >= self.priority_at(idx) {
            return Ok(false);
        }
        self.node_mut(idx).priority = new_priority;
        self.bubble_up(idx);
        Ok(true)
    }

    /// Heap order holds at every non-root position.
    pub fn is_heap_ordered(&self) -> bool {
        (ROOT_INDEX + 1..=self.len()).all(|i| self.priority_at(i / 2) <= self.priority_at(i))
    }

    /// Every active id maps to its own position and no stale entries remain.
    pub fn is_index_consistent(&self) -> bool {
        let live = self.index_map.iter().filter(|slot| slot.is_some()).count();
        live == self.len()
            && (ROOT_INDEX..=self.len()).all(|i| self.index_of(self.node(i).id) == Some(i))
    }

    fn node(&self, idx: usize) -> &HeapNode<P> {
        &self.nodes[idx - ROOT_INDEX]
    }

    fn node_mut(&mut self, idx: usize) -> &mut HeapNode<P> {
        &mut self.nodes[idx - ROOT_INDEX]
    }

    fn priority_at(&self, idx: usize) -> P {
        self.node(idx).priority
    }

    fn parent_idx(&self, idx: usize) -> Option<usize> {
        (idx != ROOT_INDEX && self.is_valid_index(idx)).then_some(idx / 2)
    }

    fn left_idx(&self, idx: usize) -> Option<usize> {
        let l = 2 * idx;
        self.is_valid_index(l).then_some(l)
    }

    fn right_idx(&self, idx: usize) -> Option<usize> {
        let r = 2 * idx + 1;
        self.is_valid_index(r).then_some(r)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.nodes.swap(a - ROOT_INDEX, b - ROOT_INDEX);
        let id_a = self.node(a).id;
        let id_b = self.node(b).id;
        self.index_map[id_a] = Some(a);
        self.index_map[id_b] = Some(b);
    }

    fn bubble_up(&mut self, mut idx: usize) {
        while let Some(p) = self.parent_idx(idx) {
            if self.priority_at(idx) >= self.priority_at(p) {
                break;
            }
            self.swap(idx, p);
            idx = p;
        }
    }

    /// Child with the lower priority; left wins ties and when it is the last slot.
    fn lower_priority_child(&self, idx: usize) -> Option<usize> {
        let l = self.left_idx(idx)?;
        match self.right_idx(idx) {
            Some(r) if self.priority_at(r) < self.priority_at(l) => Some(r),
            _ => Some(l),
        }
    }

    fn bubble_down(&mut self, mut idx: usize) {
        while let Some(child) = self.lower_priority_child(idx) {
            if self.priority_at(child) >= self.priority_at(idx) {
                break;
            }
            self.swap(child, idx);
            idx = child;
        }
    }

    fn double_capacity(&mut self) {
        self.capacity *= 2;
        self.nodes.reserve_exact(self.capacity - self.nodes.len());
        if self.index_map.len() < self.capacity {
            self.index_map.resize(self.capacity, None);
        }
    }
}

impl<P: Ord + Copy + fmt::Display> fmt::Display for IndexedMinHeap<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MinHeap with size: {}", self.len())?;
        writeln!(f, "\tcapacity: {}", self.capacity)?;
        writeln!(f)?;
        writeln!(f, "index: priority [ID]")?;
        for i in ROOT_INDEX..=self.len() {
            let node = self.node(i);
            writeln!(f, "{}: {} [{}]", i, node.priority, node.id)?;
        }
        writeln!(f, "ID: index")?;
        for (id, slot) in self.index_map.iter().enumerate() {
            if let Some(idx) = slot {
                writeln!(f, "{id}: {idx}")?;
            }
        }
        Ok(())
    }
}
