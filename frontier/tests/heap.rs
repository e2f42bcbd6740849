use frontier::data_structures::{HeapError, IndexedMinHeap};
use frontier::graph::invariant::{HeapOrder, IndexConsistent, Invariant};

/// Deterministic linear congruential sequence.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

fn assert_invariants(heap: &IndexedMinHeap<u64>) {
    HeapOrder.enforce(heap).expect("heap order");
    IndexConsistent.enforce(heap).expect("index map");
}

#[test]
fn mixed_operations_preserve_invariants() {
    let mut rng = Lcg(7);
    let mut heap = IndexedMinHeap::new(1);
    let mut present = Vec::new();
    let mut next_id = 0;
    let mut last_extracted: Option<u64> = None;

    for _ in 0..2_000 {
        match rng.next() % 4 {
            0 | 1 => {
                heap.insert(rng.next() % 1_000, next_id).expect("fresh id");
                present.push(next_id);
                next_id += 1;
                last_extracted = None;
            }
            2 if !present.is_empty() => {
                let id = present[(rng.next() as usize) % present.len()];
                let before = heap.get_priority(id).expect("tracked id");
                let target = rng.next() % 1_000;
                let decreased = heap.decrease_priority(id, target).expect("tracked id");
                assert_eq!(decreased, target < before);
                assert_eq!(heap.get_priority(id), Some(before.min(target)));
                last_extracted = None;
            }
            _ => match heap.extract_min() {
                Ok(node) => {
                    if let Some(prev) = last_extracted {
                        assert!(prev <= node.priority);
                    }
                    last_extracted = Some(node.priority);
                    present.retain(|&id| id != node.id);
                    assert!(!heap.contains(node.id));
                }
                Err(err) => {
                    assert_eq!(err, HeapError::EmptyHeap);
                    assert!(present.is_empty());
                }
            },
        }
        assert_eq!(heap.len(), present.len());
        assert!(heap.len() <= heap.capacity());
        assert_invariants(&heap);
    }
}

#[test]
fn draining_a_seeded_heap_is_sorted() {
    let mut rng = Lcg(99);
    let mut heap = IndexedMinHeap::new(16);
    for id in 0..500 {
        heap.insert(rng.next() % 50, id).expect("fresh id");
    }
    let mut out = Vec::new();
    while let Ok(node) = heap.extract_min() {
        out.push(node.priority);
    }
    assert_eq!(out.len(), 500);
    assert!(out.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn growth_keeps_every_entry_addressable() {
    let mut heap = IndexedMinHeap::new(1);
    for id in 0..33 {
        heap.insert(100 - id as u64, id).expect("fresh id");
    }
    assert_eq!(heap.capacity(), 64);
    for id in 0..33 {
        assert_eq!(heap.get_priority(id), Some(100 - id as u64));
        let idx = heap.index_of(id).expect("tracked id");
        assert_eq!(heap.id_at(idx), Some(id));
    }
    assert_invariants(&heap);
}
