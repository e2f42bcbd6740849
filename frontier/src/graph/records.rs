//! Per-run bookkeeping shared by Prim's and Dijkstra's algorithms.
//!
//! Variables:
//!   heap            : IndexedMinHeap<Weight>  — the frontier, seeded with every vertex
//!   finished[v]     : bool                    — v has been extracted (settled)
//!   predecessors[v] : Option<usize>           — best known predecessor of v
//!   tree[slot]      : Option<Edge>            — output edges, length V
//!   overflowed[v]   : bool                    — v was offered an unrepresentable priority
//!
//! Equations:
//!   init:  priority(v) = INFINITY  for all v,  then decrease(start, 0)
//!          predecessors[start] = start
//!   settle():       (p, v) = extract_min(),  finished[v] = true
//!   relax(u, c, v): !finished[u] && c < priority(u)  =>  decrease(u, c), predecessors[u] = v

use std::fmt;

use crate::data_structures::{HeapNode, IndexedMinHeap};

use super::adj_list::{Edge, Graph, Weight};
use super::error::GraphError;

/// Priority of a vertex no settled vertex has reached yet.
pub const INFINITY: Weight = Weight::MAX;

pub struct Records {
    heap: IndexedMinHeap<Weight>,
    finished: Vec<bool>,
    predecessors: Vec<Option<usize>>,
    tree: Vec<Option<Edge>>,
    num_tree_edges: usize,
    overflowed: Vec<bool>,
}

impl Records {
    /// Fails with `InvalidVertex` before allocating anything if `start` is
    /// not a vertex of `graph`.
    pub fn new(graph: &Graph, start: usize) -> Result<Self, GraphError> {
        graph.check_vertex(start)?;
        let n = graph.vertex_count();
        let mut predecessors = vec![None; n];
        predecessors[start] = Some(start);
        Ok(Self {
            heap: init_heap(graph, start)?,
            finished: vec![false; n],
            predecessors,
            tree: vec![None; n],
            num_tree_edges: 0,
            overflowed: vec![false; n],
        })
    }

    pub fn num_vertices(&self) -> usize {
        self.finished.len()
    }

    pub fn heap(&self) -> &IndexedMinHeap<Weight> {
        &self.heap
    }

    pub fn is_finished(&self, v: usize) -> bool {
        self.finished.get(v).copied().unwrap_or(false)
    }

    pub fn predecessor(&self, v: usize) -> Option<usize> {
        self.predecessors.get(v).copied().flatten()
    }

    pub fn num_tree_edges(&self) -> usize {
        self.num_tree_edges
    }

    /// Remove the closest frontier vertex and mark it finished.
    pub fn settle_next(&mut self) -> Result<HeapNode<Weight>, GraphError> {
        let node = self.heap.extract_min()?;
        self.finished[node.id] = true;
        Ok(node)
    }

    /// Offer `candidate` as the new priority of `u`, reached from `via`.
    pub fn relax(&mut self, u: usize, candidate: Weight, via: usize) -> Result<bool, GraphError> {
        if self.is_finished(u) {
            return Ok(false);
        }
        let current = self.heap.get_priority(u).unwrap_or(INFINITY);
        if candidate >= current {
            return Ok(false);
        }
        let decreased = self.heap.decrease_priority(u, candidate)?;
        if decreased {
            self.predecessors[u] = Some(via);
        }
        Ok(decreased)
    }

    /// Note that `u` was offered a priority too large to represent.
    pub fn mark_overflow(&mut self, u: usize) {
        if !self.is_finished(u) {
            if let Some(flag) = self.overflowed.get_mut(u) {
                *flag = true;
            }
        }
    }

    pub fn has_overflowed(&self, v: usize) -> bool {
        self.overflowed.get(v).copied().unwrap_or(false)
    }

    pub fn add_tree_edge(&mut self, slot: usize, from: usize, to: usize, weight: Weight) {
        if self.tree[slot].replace(Edge::new(from, to, weight)).is_none() {
            self.num_tree_edges += 1;
        }
    }

    /// Drop the heap and auxiliary arrays, handing the tree to the caller.
    pub fn into_tree(self) -> Vec<Option<Edge>> {
        self.tree
    }
}

fn init_heap(graph: &Graph, start: usize) -> Result<IndexedMinHeap<Weight>, GraphError> {
    let mut heap = IndexedMinHeap::new(graph.vertex_count());
    for vertex in graph.vertices() {
        heap.insert(INFINITY, vertex.id)?;
    }
    heap.decrease_priority(start, 0)?;
    Ok(heap)
}

impl fmt::Display for Records {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Reporting on algorithm's records on {} vertices...", self.num_vertices())?;
        writeln!(f, "The PQ is:")?;
        write!(f, "{}", self.heap)?;
        writeln!(f, "The finished array is:")?;
        for (v, done) in self.finished.iter().enumerate() {
            writeln!(f, "\t{v}: {done}")?;
        }
        writeln!(f, "The predecessors array is:")?;
        for (v, pred) in self.predecessors.iter().enumerate() {
            match pred {
                Some(p) => writeln!(f, "\t{v}: {p}")?,
                None => writeln!(f, "\t{v}: -")?,
            }
        }
        writeln!(f, "The TREE edges are:")?;
        for edge in self.tree.iter().flatten() {
            writeln!(f, "\t{edge}")?;
        }
        writeln!(f, "... done.")
    }
}
