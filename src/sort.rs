//! Sorting a [`Deque`] in place through a compare/swap view.
//!
//! [`SortableSequence`] is the capability a generic in-place sort needs: a length,
//! a strict "less than" between two positions, and a swap. [`Sortable`] exposes a
//! deque's logical positions through it without copying the elements, and
//! [`sort`] is a heap sort written only against the trait, so the same routine
//! drives a deque, a slice, or any other implementor.
//!
//! ```
//! use ring_deque::{deque, sort};
//!
//! let mut d = deque![9, 8, 7, 6];
//! sort::sort(&mut d.sortable());
//! assert_eq!(d.to_vec(), vec![6, 7, 8, 9]);
//! ```

use crate::deque::Deque;
use crate::error::DequeError;

/// A sequence that can be ordered in place by comparing and swapping positions.
///
/// Both `less` and `swap` must panic when an index is not below `len()`.
pub trait SortableSequence {
    /// Number of positions in the sequence.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the element at `i` orders strictly before the one at `j`.
    fn less(&self, i: usize, j: usize) -> bool;

    /// Exchanges the elements at `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);
}

/// A borrowed, sortable view over a [`Deque`].
///
/// Created by [`Deque::sortable`]. The view holds the only reference to the deque
/// for its lifetime; sorting permutes the elements but leaves `len` and
/// `capacity` untouched.
#[derive(Debug)]
pub struct Sortable<'a, T> {
    deque: &'a mut Deque<T>,
}

impl<'a, T: Ord> Sortable<'a, T> {
    pub fn new(deque: &'a mut Deque<T>) -> Self {
        Self { deque }
    }

    /// Gives back the underlying deque.
    pub fn into_inner(self) -> &'a mut Deque<T> {
        self.deque
    }

    #[track_caller]
    fn element(&self, index: usize) -> &T {
        match self.deque.get(index) {
            Some(item) => item,
            None => panic!(
                "{}",
                DequeError::IndexOutOfBounds {
                    index,
                    len: self.deque.len(),
                }
            ),
        }
    }
}

impl<T: Ord> SortableSequence for Sortable<'_, T> {
    fn len(&self) -> usize {
        self.deque.len()
    }

    #[track_caller]
    fn less(&self, i: usize, j: usize) -> bool {
        self.element(i) < self.element(j)
    }

    #[track_caller]
    fn swap(&mut self, i: usize, j: usize) {
        self.deque.swap(i, j);
    }
}

impl<T: Ord> SortableSequence for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }

    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j);
    }
}

/// Sorts `seq` ascending, in place, using only `len`, `less` and `swap`.
///
/// Heap sort: O(n log n) comparisons, no allocation, not stable.
pub fn sort<S: SortableSequence + ?Sized>(seq: &mut S) {
    let len = seq.len();
    for root in (0..len / 2).rev() {
        sift_down(seq, root, len);
    }
    for end in (1..len).rev() {
        seq.swap(0, end);
        sift_down(seq, 0, end);
    }
}

/// Restores the max-heap property for the subtree at `root` within `[0, end)`.
fn sift_down<S: SortableSequence + ?Sized>(seq: &mut S, mut root: usize, end: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            return;
        }
        if child + 1 < end && seq.less(child, child + 1) {
            child += 1;
        }
        if !seq.less(root, child) {
            return;
        }
        seq.swap(root, child);
        root = child;
    }
}

/// Returns `true` if no element orders strictly before its predecessor.
pub fn is_sorted<S: SortableSequence + ?Sized>(seq: &S) -> bool {
    (1..seq.len()).all(|i| !seq.less(i, i - 1))
}
