use std::cmp::Ordering;

use ordered_float::OrderedFloat;

/// A total order over `T`, supplied to a heap at construction and fixed for
/// its lifetime. Heap correctness is undefined if this is not a total order.
pub trait Compare<T> {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering;
}

/// Natural `Ord` order.
#[derive(Clone, Copy, Default, Debug)]
pub struct MaxOrd;

impl<T: Ord> Compare<T> for MaxOrd {
    #[inline]
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        lhs.cmp(rhs)
    }
}

/// Reversed natural order. A max-heap under `MinOrd` is a min-heap.
#[derive(Clone, Copy, Default, Debug)]
pub struct MinOrd;

impl<T: Ord> Compare<T> for MinOrd {
    #[inline]
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        rhs.cmp(lhs)
    }
}

/// Order by an arbitrary comparison closure.
#[derive(Clone, Copy, Default, Debug)]
pub struct FnCompare<F>(pub F);

impl<T, F: Fn(&T, &T) -> Ordering> Compare<T> for FnCompare<F> {
    #[inline]
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        (self.0)(lhs, rhs)
    }
}

/// Order by an extracted key.
#[derive(Clone, Copy, Default, Debug)]
pub struct KeyCompare<F>(pub F);

impl<K: Ord, T, F: Fn(&T) -> K> Compare<T> for KeyCompare<F> {
    #[inline]
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        (self.0)(lhs).cmp(&(self.0)(rhs))
    }
}

/// Total order over raw floats (NaN greatest, per `ordered_float`).
#[derive(Clone, Copy, Default, Debug)]
pub struct FloatOrd;

impl Compare<f32> for FloatOrd {
    #[inline]
    fn compare(&self, lhs: &f32, rhs: &f32) -> Ordering {
        OrderedFloat(*lhs).cmp(&OrderedFloat(*rhs))
    }
}

impl Compare<f64> for FloatOrd {
    #[inline]
    fn compare(&self, lhs: &f64, rhs: &f64) -> Ordering {
        OrderedFloat(*lhs).cmp(&OrderedFloat(*rhs))
    }
}
