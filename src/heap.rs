use std::cmp::Ordering;
use std::collections::TryReserveError;

use crate::order::{Compare, MaxOrd, MinOrd};

/// Slots reserved by `new`, and the floor below which `pop` never shrinks.
const INITIAL_CAPACITY: usize = 4096;
/// Capacity multiplier when a full heap must accept one more push.
const GROWTH_FACTOR: usize = 2;
/// Capacity divisor applied by a shrink.
const SHRINK_FACTOR: usize = 2;
/// Shrink triggers when occupancy drops below `capacity / SHRINK_AT`.
/// Must stay above `GROWTH_FACTOR` or grow/shrink would thrash.
const SHRINK_AT: usize = 4;

/// An array-backed binary max-heap over a caller-supplied total order.
///
/// `data[0]` is always a maximal element under `cmp`: for every `i > 0`,
/// `cmp.compare(&data[i], &data[(i - 1) / 2]) <= Equal`.
#[derive(Clone, Debug)]
pub struct Heap<T, C: Compare<T> = MaxOrd> {
    data: Vec<T>,
    cmp: C,
}

pub type MaxHeap<T> = Heap<T, MaxOrd>;
pub type MinHeap<T> = Heap<T, MinOrd>;

impl<T, C: Compare<T>> Heap<T, C> {
    /// Creates an empty heap with `INITIAL_CAPACITY` slots reserved.
    pub fn new(cmp: C) -> Result<Self, TryReserveError> {
        Self::with_capacity(cmp, INITIAL_CAPACITY)
    }

    /// Creates an empty heap with at least `capacity` slots reserved.
    pub fn with_capacity(cmp: C, capacity: usize) -> Result<Self, TryReserveError> {
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)?;
        Ok(Self { data, cmp })
    }

    /// Takes ownership of `data` and heapifies it in place, O(n).
    ///
    /// No elements are copied; the vector's buffer becomes the heap's
    /// backing storage as-is.
    pub fn from_vec(mut data: Vec<T>, cmp: C) -> Self {
        heapify(&mut data, &cmp);
        Self { data, cmp }
    }

    /// O(1)
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// O(1)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// O(1)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// O(1)
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Amortized O(log n). Doubles the capacity when full; on allocation
    /// failure the heap is left untouched and `value` is handed back.
    pub fn push(&mut self, value: T) -> Result<(), T> {
        let cap = self.data.capacity();
        if self.data.len() == cap {
            let additional = if cap == 0 {
                INITIAL_CAPACITY
            } else {
                (GROWTH_FACTOR - 1) * cap
            };
            if self.data.try_reserve_exact(additional).is_err() {
                return Err(value);
            }
        }
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
        Ok(())
    }

    /// O(log n). Removes and returns a maximal element, `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        use std::mem;

        if self.data.is_empty() {
            return None;
        }
        self.maybe_shrink();

        let mut res = self.data.pop()?;
        if let Some(first) = self.data.first_mut() {
            res = mem::replace(first, res);
            sift_down(&mut self.data, &self.cmp, 0);
        }
        Some(res)
    }

    /// Releases the backing storage to the caller, in heap order.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// O(n log n). Releases the backing storage sorted ascending under the
    /// heap's order.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let Self { mut data, cmp } = self;
        sort_heapified(&mut data, &cmp);
        data
    }

    /// Consumes the heap, handing every live element to `finalizer` exactly
    /// once, in unspecified order. Plain `drop` covers the no-finalizer case.
    pub fn destroy<F: FnMut(T)>(self, finalizer: F) {
        self.data.into_iter().for_each(finalizer);
    }

    /// O(log n)
    fn sift_up(&mut self, mut pos: usize) {
        while pos != 0 {
            let parent = (pos - 1) / 2;

            // Ties stay put: only a strictly greater child moves up.
            if self.cmp.compare(&self.data[pos], &self.data[parent]) == Ordering::Greater {
                self.data.swap(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
    }

    /// Halves the capacity once occupancy after the pending removal falls
    /// below the low-water mark. Advisory: `pop` never depends on it.
    fn maybe_shrink(&mut self) {
        let cap = self.data.capacity();
        if self.data.len() - 1 < cap / SHRINK_AT && cap / SHRINK_FACTOR >= INITIAL_CAPACITY {
            self.data.shrink_to(cap / SHRINK_FACTOR);
        }
    }
}

/// O(log n)
fn sift_down<T, C: Compare<T>>(data: &mut [T], cmp: &C, mut pos: usize) {
    loop {
        let left = 2 * pos + 1;
        let right = left + 1;
        if left >= data.len() {
            break;
        }

        let child = if right < data.len()
            && cmp.compare(&data[left], &data[right]) == Ordering::Less
        {
            right
        } else {
            left
        };

        if cmp.compare(&data[pos], &data[child]) == Ordering::Less {
            data.swap(pos, child);
            pos = child;
        } else {
            break;
        }
    }
}

/// Restores the max-heap invariant over an arbitrary slice, O(n).
///
/// Bottom-up: sifts down every internal node from the last to the root,
/// not repeated insertion (which would be O(n log n)).
pub fn heapify<T, C: Compare<T>>(data: &mut [T], cmp: &C) {
    for pos in (0..data.len() / 2).rev() {
        sift_down(data, cmp, pos);
    }
}

/// Sorts `data` ascending under `cmp` in place, O(n log n), allocating
/// nothing. Independent of any live `Heap`.
pub fn heap_sort<T, C: Compare<T>>(data: &mut [T], cmp: &C) {
    heapify(data, cmp);
    sort_heapified(data, cmp);
}

/// The extraction pass of heap-sort; `data` must already be a max-heap.
fn sort_heapified<T, C: Compare<T>>(data: &mut [T], cmp: &C) {
    for end in (1..data.len()).rev() {
        data.swap(0, end);
        sift_down(&mut data[..end], cmp, 0);
    }
}
