//! Iterators over a [`Deque`].
//!
//! The borrowing iterators walk the front run and then the back run of the ring
//! buffer as two plain slice iterators, so they are lazy, double-ended and report
//! an exact length. [`Iter`] is `Clone`, which makes a traversal restartable.

use core::fmt;
use core::iter::FusedIterator;
use core::slice;

use crate::deque::Deque;

/// Front-to-back iterator over `&T`, created by [`Deque::iter`].
pub struct Iter<'a, T> {
    front: slice::Iter<'a, T>,
    back: slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(front: &'a [T], back: &'a [T]) -> Self {
        Self {
            front: front.iter(),
            back: back.iter(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter")
            .field(&self.front.as_slice())
            .field(&self.back.as_slice())
            .finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.front.next().or_else(|| self.back.next())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }

    fn fold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        self.front.chain(self.back).fold(init, f)
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.back.next_back().or_else(|| self.front.next_back())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.front.len() + self.back.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// Front-to-back iterator over `&mut T`, created by [`Deque::iter_mut`].
pub struct IterMut<'a, T> {
    front: slice::IterMut<'a, T>,
    back: slice::IterMut<'a, T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(front: &'a mut [T], back: &'a mut [T]) -> Self {
        Self {
            front: front.iter_mut(),
            back: back.iter_mut(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut")
            .field(&self.front.as_slice())
            .field(&self.back.as_slice())
            .finish()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        self.front.next().or_else(|| self.back.next())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.back.next_back().or_else(|| self.front.next_back())
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    fn len(&self) -> usize {
        self.front.len() + self.back.len()
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator, created by `Deque::into_iter`.
///
/// Elements not yet yielded are dropped together with the iterator.
pub struct IntoIter<T> {
    deque: Deque<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(deque: Deque<T>) -> Self {
        Self { deque }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.deque).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.deque.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.deque.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.deque.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use crate::Deque;
    use std::cell::Cell;
    use std::rc::Rc;

    /// `[0, 1, 2, 3, 4]` with the last two elements wrapped to slots 0 and 1.
    fn wrapped() -> Deque<i32> {
        let mut d = Deque::with_capacity(5);
        d.extend([9, 9, 0, 1, 2]);
        d.pop_front();
        d.pop_front();
        d.push_back(3);
        d.push_back(4);
        assert!(!d.is_contiguous());
        d
    }

    #[test]
    fn test_iter_forward_and_reverse() {
        let d = wrapped();
        let forward: Vec<_> = d.iter().copied().collect();
        assert_eq!(forward, vec![0, 1, 2, 3, 4]);
        let reverse: Vec<_> = d.iter().rev().copied().collect();
        assert_eq!(reverse, vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_iter_meets_in_the_middle() {
        let d = wrapped();
        let mut it = d.iter();
        assert_eq!(it.len(), 5);
        assert_eq!(it.next(), Some(&0));
        assert_eq!(it.next_back(), Some(&4));
        assert_eq!(it.next_back(), Some(&3));
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.len(), 1);
        assert_eq!(it.next_back(), Some(&2));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_iter_is_restartable() {
        let d = wrapped();
        let it = d.iter();
        let first: i32 = it.clone().sum();
        let second: i32 = it.sum();
        assert_eq!(first, 10);
        assert_eq!(second, 10);
    }

    #[test]
    fn test_iter_stops_early() {
        let d = wrapped();
        let visited = Cell::new(0);
        let found = d
            .iter()
            .inspect(|_| visited.set(visited.get() + 1))
            .find(|&&x| x == 1);
        assert_eq!(found, Some(&1));
        assert_eq!(visited.get(), 2);
    }

    #[test]
    fn test_iter_indexed_pairs() {
        let d = wrapped();
        let forward: Vec<_> = d.indexed().map(|(i, &v)| (i, v)).collect();
        assert_eq!(forward, vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
        let reverse: Vec<_> = d.indexed_rev().map(|(i, &v)| (i, v)).collect();
        assert_eq!(reverse, vec![(4, 4), (3, 3), (2, 2), (1, 1), (0, 0)]);

        let empty: Deque<i32> = Deque::new();
        assert_eq!(empty.indexed().count(), 0);
        assert_eq!(empty.indexed_rev().count(), 0);
    }

    #[test]
    fn test_iter_mut_updates_in_place() {
        let mut d = wrapped();
        for x in d.iter_mut() {
            *x *= 10;
        }
        for x in &mut d {
            *x += 1;
        }
        assert_eq!(d.to_vec(), vec![1, 11, 21, 31, 41]);
        assert_eq!(d.iter_mut().rev().next().map(|x| *x), Some(41));
    }

    #[test]
    fn test_into_iter_both_ends() {
        let mut it = wrapped().into_iter();
        assert_eq!(it.len(), 5);
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.next_back(), Some(4));
        let rest: Vec<_> = it.collect();
        assert_eq!(rest, vec![1, 2, 3]);
    }

    #[test]
    fn test_into_iter_drops_remaining() {
        let tracker = Rc::new(());
        let d: Deque<_> = (0..4).map(|_| Rc::clone(&tracker)).collect();
        let mut it = d.into_iter();
        drop(it.next());
        assert_eq!(Rc::strong_count(&tracker), 4);
        drop(it);
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn test_iter_debug() {
        let d = wrapped();
        assert_eq!(format!("{:?}", d.iter()), "Iter([0, 1, 2], [3, 4])");
    }
}
