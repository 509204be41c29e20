//! Growable double-ended queue over a single circular buffer.
//!
//! [`Deque`] owns one boxed slice of `MaybeUninit<T>` slots, a `head` cursor and a
//! `len` counter. Logical element `i` lives in slot `(head + i) mod capacity`, so the
//! occupied region wraps past the end of the buffer at most once:
//!
//! ```text
//!   capacity = 8, head = 6, len = 4
//!
//!   slot:   0   1   2   3   4   5   6   7
//!         [ c | d | . | . | . | . | a | b ]
//!           ^^^^^ back run          ^^^^^ front run
//! ```
//!
//! Every whole-sequence operation (slices, iteration, formatting, copying, drop and
//! reallocation) goes through that front/back split, computed in one place by
//! `runs`, instead of repeating the modulo arithmetic.
//!
//! Reallocation (`grow`, `clip`, `make_contiguous`) moves the front run and then the
//! back run to the start of a fresh buffer and resets `head` to 0, so right after
//! it physical order equals logical order.

use core::cmp::{self, Ordering};
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::{Enumerate, Rev};
use core::mem::MaybeUninit;
use core::ops::{Index, IndexMut, Range};
use core::ptr;
use std::alloc::Layout;
use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::error::DequeError;
use crate::iter::{IntoIter, Iter, IterMut};
use crate::sort::Sortable;
use crate::utils::growth::grown_capacity;

// ─── AnyDeque ─────────────────────────────────────────────────────────────────

/// An object-safe abstraction over double-ended queue types.
///
/// Implemented by both [`Deque<T>`] and `VecDeque<T>` so that code can drive a
/// queue without knowing which implementation backs it.
pub trait AnyDeque<T> {
    /// Returns the number of elements in the deque.
    fn len(&self) -> usize;
    /// Returns `true` if the deque contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Appends an element to the back.
    fn push_back(&mut self, item: T);
    /// Prepends an element to the front.
    fn push_front(&mut self, item: T);
    /// Removes and returns the element from the back, or `None` if empty.
    fn pop_back(&mut self) -> Option<T>;
    /// Removes and returns the element from the front, or `None` if empty.
    fn pop_front(&mut self) -> Option<T>;
    /// Returns the element at logical `index`, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&T>;
    /// Removes all elements.
    fn clear(&mut self);
    /// Returns a shared reference to the front element, or `None` if empty.
    fn front(&self) -> Option<&T>;
    /// Returns a shared reference to the back element, or `None` if empty.
    fn back(&self) -> Option<&T>;
}

impl<T> AnyDeque<T> for VecDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }
    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }
    fn pop_back(&mut self) -> Option<T> {
        self.pop_back()
    }
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn get(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
}

impl<T> AnyDeque<T> for Deque<T> {
    fn len(&self) -> usize {
        self.len
    }
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }
    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }
    fn pop_back(&mut self) -> Option<T> {
        self.pop_back()
    }
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn get(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
}

// ─── Deque ────────────────────────────────────────────────────────────────────

/// A double-ended queue backed by one contiguous ring buffer.
///
/// Pushing and popping at either end is O(1) amortized, indexing is O(1). The
/// buffer only changes size through [`grow`](Deque::grow) (called implicitly by the
/// push methods) and [`clip`](Deque::clip).
///
/// # Safety invariants
/// * `len <= backing.len()`.
/// * `head < backing.len()`, or `head == 0` when the buffer is empty.
/// * Exactly the slots of the two runs returned by `runs` are initialized.
pub struct Deque<T> {
    len: usize,
    head: usize,
    backing: Box<[MaybeUninit<T>]>,
}

impl<T> Deque<T> {
    /// Creates an empty deque. Does not allocate.
    pub fn new() -> Self {
        Self {
            len: 0,
            head: 0,
            backing: Box::<[T]>::new_uninit_slice(0),
        }
    }

    /// Creates an empty deque with room for exactly `capacity` elements.
    ///
    /// # Panics
    /// Panics if the buffer size overflows `isize::MAX` bytes.
    #[track_caller]
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(deque) => deque,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible counterpart of [`with_capacity`](Deque::with_capacity).
    pub fn try_with_capacity(capacity: usize) -> Result<Self, DequeError> {
        let mut deque = Self::new();
        deque.try_grow(capacity)?;
        Ok(deque)
    }

    /// Returns the number of elements in the deque.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque contains no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the total number of slots in the backing buffer, used or not.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.backing.len()
    }

    /// Returns `true` if the elements occupy a single contiguous run of the buffer.
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.len <= self.capacity() - self.head
    }

    /// Maps logical index `index` (`< capacity`) to its slot.
    #[inline(always)]
    fn physical(&self, index: usize) -> usize {
        let until_end = self.capacity() - self.head;
        if index < until_end {
            self.head + index
        } else {
            index - until_end
        }
    }

    /// Splits the occupied region into the front run (from `head` towards the end
    /// of the buffer) and the back run (from slot 0). The back run is empty unless
    /// the region wraps.
    #[inline]
    fn runs(&self) -> (Range<usize>, Range<usize>) {
        let front_len = cmp::min(self.len, self.capacity() - self.head);
        (
            self.head..self.head + front_len,
            0..self.len - front_len,
        )
    }

    /// Guarantees room for at least `additional` more elements without another
    /// reallocation.
    ///
    /// Does nothing when the free slots already cover `additional`. Otherwise the
    /// buffer grows following [`grown_capacity`] and the elements are re-laid from
    /// slot 0.
    ///
    /// # Panics
    /// Panics if the new buffer size overflows `isize::MAX` bytes.
    #[track_caller]
    pub fn grow(&mut self, additional: usize) {
        if let Err(err) = self.try_grow(additional) {
            panic!("{err}");
        }
    }

    /// Fallible counterpart of [`grow`](Deque::grow).
    pub fn try_grow(&mut self, additional: usize) -> Result<(), DequeError> {
        if self.capacity() - self.len >= additional {
            return Ok(());
        }
        // Prefer the amortized size; fall back to the exact request if only that fits.
        let new_capacity = self.len.checked_add(additional).and_then(|required| {
            [grown_capacity(self.capacity(), required), required]
                .into_iter()
                .find(|&capacity| Layout::array::<T>(capacity).is_ok())
        });
        match new_capacity {
            Some(capacity) => {
                self.relocate(capacity);
                Ok(())
            }
            None => {
                debug!(len = self.len, additional, "deque capacity request overflows");
                Err(DequeError::CapacityOverflow {
                    len: self.len,
                    additional,
                })
            }
        }
    }

    /// Drops unused capacity so that `capacity() == len()`.
    #[doc(alias = "shrink_to_fit")]
    pub fn clip(&mut self) {
        if self.capacity() == self.len {
            return;
        }
        self.relocate(self.len);
    }

    /// Moves every element into a fresh buffer of `capacity` slots, front run
    /// first, and resets `head` to 0.
    fn relocate(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.len);
        trace!(
            from = self.capacity(),
            to = capacity,
            len = self.len,
            "relocating deque storage"
        );
        let mut fresh = Box::<[T]>::new_uninit_slice(capacity);
        let (front, back) = self.runs();
        let front_len = front.len();
        unsafe {
            // Bitwise move: the old buffer is `MaybeUninit` and never drops these.
            let src = self.backing.as_ptr();
            let dst = fresh.as_mut_ptr();
            ptr::copy_nonoverlapping(src.add(front.start), dst, front_len);
            ptr::copy_nonoverlapping(src.add(back.start), dst.add(front_len), back.len());
        }
        self.backing = fresh;
        self.head = 0;
    }

    /// Prepends `value` to the front of the deque.
    pub fn push_front(&mut self, value: T) {
        self.grow(1);
        self.head = if self.head == 0 {
            self.capacity() - 1
        } else {
            self.head - 1
        };
        self.backing[self.head].write(value);
        self.len += 1;
    }

    /// Appends `value` to the back of the deque.
    pub fn push_back(&mut self, value: T) {
        self.grow(1);
        let tail = self.physical(self.len);
        self.backing[tail].write(value);
        self.len += 1;
    }

    /// Removes and returns the first element, or `None` if empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = unsafe { self.backing[self.head].assume_init_read() };
        self.head = self.physical(1);
        self.len -= 1;
        Some(value)
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let tail = self.physical(self.len);
        Some(unsafe { self.backing[tail].assume_init_read() })
    }

    /// Returns a shared reference to the element at logical `index`, or `None`.
    ///
    /// Logical index 0 is the front.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            let slot = self.physical(index);
            Some(unsafe { self.backing[slot].assume_init_ref() })
        } else {
            None
        }
    }

    /// Returns an exclusive reference to the element at logical `index`, or `None`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            let slot = self.physical(index);
            Some(unsafe { self.backing[slot].assume_init_mut() })
        } else {
            None
        }
    }

    /// Returns the front element, or `None` if empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns the back element, or `None` if empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.len.checked_sub(1) {
            Some(last) => self.get_mut(last),
            None => None,
        }
    }

    /// Swaps the elements at logical indices `i` and `j`.
    ///
    /// # Panics
    /// Panics if either index is not below `len()`.
    #[track_caller]
    pub fn swap(&mut self, i: usize, j: usize) {
        if let Err(err) = self.try_swap(i, j) {
            panic!("{err}");
        }
    }

    /// Fallible counterpart of [`swap`](Deque::swap).
    pub fn try_swap(&mut self, i: usize, j: usize) -> Result<(), DequeError> {
        for index in [i, j] {
            if index >= self.len {
                return Err(DequeError::IndexOutOfBounds {
                    index,
                    len: self.len,
                });
            }
        }
        let (a, b) = (self.physical(i), self.physical(j));
        self.backing.swap(a, b);
        Ok(())
    }

    /// Shortens the deque to at most `len` elements, dropping those at the back.
    /// Capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        while self.len > len {
            drop(self.pop_back());
        }
    }

    /// Drops every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);
        self.head = 0;
    }

    /// Returns the front and back runs as slices. Concatenated they are the
    /// logical sequence; the second is empty unless the buffer wraps.
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let (front, back) = self.runs();
        unsafe {
            (
                slice_assume_init(&self.backing[front]),
                slice_assume_init(&self.backing[back]),
            )
        }
    }

    /// Mutable counterpart of [`as_slices`](Deque::as_slices).
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let (front, back) = self.runs();
        // The back run always ends at or before `head`.
        let (low, high) = self.backing.split_at_mut(self.head);
        unsafe {
            (
                slice_assume_init_mut(&mut high[..front.len()]),
                slice_assume_init_mut(&mut low[..back.end]),
            )
        }
    }

    /// Re-lays the elements so that they form one slice, and returns it.
    ///
    /// Capacity is unchanged; no work is done when the deque does not wrap. The
    /// returned slice can be sorted with the standard slice methods.
    pub fn make_contiguous(&mut self) -> &mut [T] {
        if !self.is_contiguous() {
            self.relocate(self.capacity());
        }
        self.as_mut_slices().0
    }

    /// Returns a front-to-back iterator.
    pub fn iter(&self) -> Iter<'_, T> {
        let (front, back) = self.as_slices();
        Iter::new(front, back)
    }

    /// Returns a front-to-back iterator yielding exclusive references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (front, back) = self.as_mut_slices();
        IterMut::new(front, back)
    }

    /// Yields `(index, &element)` pairs from index 0 up to `len() - 1`.
    pub fn indexed(&self) -> Enumerate<Iter<'_, T>> {
        self.iter().enumerate()
    }

    /// Yields `(index, &element)` pairs from index `len() - 1` down to 0.
    pub fn indexed_rev(&self) -> Rev<Enumerate<Iter<'_, T>>> {
        self.iter().enumerate().rev()
    }

    /// Borrows the deque as a compare/swap sequence for
    /// [`sort::sort`](crate::sort::sort).
    pub fn sortable(&mut self) -> Sortable<'_, T>
    where
        T: Ord,
    {
        Sortable::new(self)
    }
}

impl<T: Clone> Deque<T> {
    /// Appends a clone of every item in `items`, reserving room for all of them
    /// up front.
    pub fn extend_from_slice(&mut self, items: &[T]) {
        self.grow(items.len());
        for item in items {
            let tail = self.physical(self.len);
            self.backing[tail].write(item.clone());
            self.len += 1;
        }
    }

    /// Copies the elements, front to back, into a new `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        let (front, back) = self.as_slices();
        let mut out = Vec::with_capacity(self.len);
        out.extend_from_slice(front);
        out.extend_from_slice(back);
        out
    }
}

unsafe fn slice_assume_init<T>(slots: &[MaybeUninit<T>]) -> &[T] {
    unsafe { &*(slots as *const [MaybeUninit<T>] as *const [T]) }
}

unsafe fn slice_assume_init_mut<T>(slots: &mut [MaybeUninit<T>]) -> &mut [T] {
    unsafe { &mut *(slots as *mut [MaybeUninit<T>] as *mut [T]) }
}

impl<T> Drop for Deque<T> {
    fn drop(&mut self) {
        let (front, back) = self.as_mut_slices();
        unsafe {
            ptr::drop_in_place(front);
            ptr::drop_in_place(back);
        }
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Deque<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders `Deque{ len: 3, cap: 4, items: [1, 2, 3]}`.
impl<T: fmt::Display> fmt::Display for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deque{{ len: {}, cap: {}, items: [", self.len, self.capacity())?;
        for (i, item) in self.indexed() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]}")
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}
impl<T: Eq> Eq for Deque<T> {}

impl<T: PartialOrd> PartialOrd for Deque<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for Deque<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for Deque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        self.iter().for_each(|item| item.hash(state));
    }
}

impl<T> Index<usize> for Deque<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        let len = self.len;
        match self.get(index) {
            Some(item) => item,
            None => panic!("{}", DequeError::IndexOutOfBounds { index, len }),
        }
    }
}

impl<T> IndexMut<usize> for Deque<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(item) => item,
            None => panic!("{}", DequeError::IndexOutOfBounds { index, len }),
        }
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.grow(iter.size_hint().0);
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Deque<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T> From<Vec<T>> for Deque<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for Deque<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T> From<Deque<T>> for Vec<T> {
    fn from(deque: Deque<T>) -> Self {
        deque.into_iter().collect()
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Deque<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
