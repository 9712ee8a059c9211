//! Stress tests that push the heaps and queues through long operation runs
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases in the index arithmetic and the map bookkeeping.

use indexed_heaps::{Arity, Binary, Heap, HeapInit, IndexedPriorityQueue, KAry, MinOrder};

/// Deterministic pseudo-random sequence (64-bit LCG)
fn lcg(seed: u64) -> impl Iterator<Item = u64> {
    std::iter::successors(Some(seed), |x| {
        Some(x.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407))
    })
    .map(|x| x >> 33)
}

fn arities() -> Vec<KAry> {
    [3, 4, 5, 8, 16, 64]
        .into_iter()
        .map(|k| KAry::new(k).unwrap())
        .collect()
}

/// Test massive numbers of inserts and pops
fn test_massive_operations<A: Arity>(arity: A) {
    let mut heap = Heap::with_comparator(Vec::new(), arity, MinOrder, HeapInit::Build);

    for i in (0..10_000).rev() {
        heap.push(i);
    }
    assert_eq!(heap.len(), 10_000);

    for i in 0..10_000 {
        assert_eq!(heap.pop(), Ok(i));
    }
    assert!(heap.is_empty());
}

/// Test many decrease_key operations
fn test_many_decrease_keys<A: Arity>(arity: A) {
    let mut queue = IndexedPriorityQueue::empty(arity, MinOrder);

    for i in 0..2_000 {
        queue.push(100_000 + i, i);
    }

    // decrease every key, in reverse, below all remaining ones
    for i in (0..2_000).rev() {
        queue.update_key(&i, i).unwrap();
    }
    assert!(queue.is_valid_heap());

    for i in 0..2_000 {
        assert_eq!(queue.pop(), Ok((i, i)));
    }
}

/// Test alternating insert and pop
fn test_alternating_ops<A: Arity>(arity: A) {
    let mut queue = IndexedPriorityQueue::empty(arity, MinOrder);

    for i in 0..500u64 {
        queue.push(i * 2, i);
        queue.push(i * 2 + 1, i + 1_000);
        let (key, _) = queue.pop().unwrap();
        assert_eq!(key, i);
    }
    assert_eq!(queue.len(), 500);
    assert!(queue.is_valid_heap());
}

/// Test a random mix of pushes, pops and decreases against a sorted model
fn test_random_mix<A: Arity>(arity: A, seed: u64) {
    let mut queue = IndexedPriorityQueue::empty(arity, MinOrder);
    let mut model: Vec<Option<u64>> = vec![None; 512];
    let mut rng = lcg(seed);

    for _ in 0..20_000 {
        let op = rng.next().unwrap() % 4;
        let value = (rng.next().unwrap() % 512) as usize;
        let key = rng.next().unwrap() % 1_000_000;

        match op {
            0 | 1 => {
                if model[value].is_none() {
                    queue.push(key, value);
                    model[value] = Some(key);
                }
            }
            2 => {
                if let Some(current) = model[value] {
                    let lowered = current / 2;
                    queue.update_key(&value, lowered).unwrap();
                    model[value] = Some(lowered);
                }
            }
            _ => {
                let expected = model.iter().flatten().min().copied();
                match queue.pop() {
                    Ok((key, popped)) => {
                        assert_eq!(Some(key), expected);
                        assert_eq!(model[popped], Some(key));
                        model[popped] = None;
                    }
                    Err(_) => assert_eq!(expected, None),
                }
            }
        }
    }

    assert!(queue.is_valid_heap());
    for (slot, value) in queue.values().iter().enumerate() {
        assert_eq!(queue.index_of(value), Some(slot));
        assert_eq!(queue.key_at(value).copied(), model[*value]);
    }
}

#[test]
fn test_massive_operations_all_arities() {
    test_massive_operations(Binary);
    for arity in arities() {
        test_massive_operations(arity);
    }
}

#[test]
fn test_many_decrease_keys_all_arities() {
    test_many_decrease_keys(Binary);
    for arity in arities() {
        test_many_decrease_keys(arity);
    }
}

#[test]
fn test_alternating_ops_all_arities() {
    test_alternating_ops(Binary);
    for arity in arities() {
        test_alternating_ops(arity);
    }
}

#[test]
fn test_random_mix_all_arities() {
    for seed in [1, 7, 42] {
        test_random_mix(Binary, seed);
        for arity in arities() {
            test_random_mix(arity, seed);
        }
    }
}

#[test]
fn test_large_build() {
    let values: Vec<u64> = lcg(99).take(50_000).collect();
    let mut sorted = values.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let heap = Heap::max_k(4, values, HeapInit::Build).unwrap();
    assert!(heap.is_valid_heap());
    assert_eq!(heap.into_sorted_vec(), sorted);
}
