pub mod order;

mod heap;

pub use heap::{heap_sort, heapify, Heap, MaxHeap, MinHeap};
pub use order::{Compare, FloatOrd, FnCompare, KeyCompare, MaxOrd, MinOrd};

use rand::prelude::*;

fn bench<F: FnOnce()>(name: &str, num_tabs: usize, f: F) {
    use std::time::{Duration, Instant};
    let start = Instant::now();
    f();
    let elapsed = start.elapsed();

    print!("BENCH `{}` :", name);
    for _ in 0..num_tabs {
        print!("\t");
    }

    if elapsed < Duration::from_millis(1) {
        println!("{} micros", elapsed.as_micros());
    } else if elapsed < Duration::from_secs(1) {
        println!("{} millis", elapsed.as_millis());
    } else {
        println!("{:.2} secs", elapsed.as_secs_f64());
    }
}

#[allow(dead_code)]
fn validate_heap_binheap() {
    let mut rng = SmallRng::from_entropy();

    const N: usize = 64 * 1024;

    let mut values: Vec<u32> = (0..N).map(|_| rng.gen_range(0..1000_000)).collect();

    println!("[Validate Heap against std BinaryHeap]");
    let mut heap = MaxHeap::new(MaxOrd).unwrap();
    let mut reference = std::collections::BinaryHeap::new();

    for &x in values.iter() {
        assert!(heap.push(x).is_ok());
        reference.push(x);
        assert_eq!(heap.peek(), reference.peek());
        assert_eq!(heap.len(), reference.len());
    }

    for _ in 0..N {
        assert_eq!(heap.pop(), reference.pop());
    }
    assert!(heap.is_empty());

    values.shuffle(&mut rng);
    let mut sorted = values.clone();
    sorted.sort();
    heap_sort(&mut values, &MaxOrd);
    assert_eq!(values, sorted);

    println!("Heap VALIDATED");
    println!();
}

#[allow(dead_code)]
fn bench_heap_binheap() {
    let mut rng = SmallRng::from_entropy();

    const N: usize = 256 * 1024; // 256 KiB

    let values: Vec<u64> = (0..N).map(|_| rng.gen()).collect();

    let mut std_heap = std::collections::BinaryHeap::new();
    bench("std::collections::BinaryHeap::push", 1, || {
        for &x in values.iter() {
            std_heap.push(x);
        }
    });
    bench("std::collections::BinaryHeap::pop", 2, || {
        for _ in 0..N {
            assert!(std_heap.pop().is_some());
        }
    });
    println!();

    let mut heap = MaxHeap::new(MaxOrd).unwrap();
    bench("Heap::push", 5, || {
        for (len, &x) in values.iter().enumerate() {
            assert_eq!(heap.len(), len);
            assert!(heap.push(x).is_ok());
        }
    });
    bench("Heap::pop", 5, || {
        for _ in 0..N {
            assert!(heap.pop().is_some());
        }
    });
    println!();

    let mut data = values.clone();
    bench("heap_sort", 4, || heap_sort(&mut data, &MaxOrd));
}

#[test]
pub fn main() {
    validate_heap_binheap();
    bench_heap_binheap();
}
