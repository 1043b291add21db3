use core::{fmt, iter::FusedIterator, mem};

use crate::collections::RawBuf;

/// An iterator that moves out of a dynamic array.
///
/// This `struct` is created by the `into_iter` method on [`DynArr`](super::DynArr) (provided by the [`IntoIterator`] trait).
///
/// Each element is taken out of its slot, leaving `T::default()` behind, the buffer is released when the iterator is dropped.
///
/// # Example
///
/// ```
/// use vecta_common::dynarr;
///
/// let arr = dynarr![0, 1, 2];
/// let iter: vecta_common::collections::IntoIter<_> = arr.into_iter();
/// assert_eq!(iter.collect::<Vec<_>>(), [0, 1, 2]);
/// ```
pub struct IntoIter<T> {
    buf:   RawBuf<T>,
    start: usize,
    end:   usize,
}

impl<T> IntoIter<T> {
    pub(super) fn new(buf: RawBuf<T>, len: usize) -> Self {
        debug_assert!(len <= buf.len());
        Self { buf, start: 0, end: len }
    }

    /// Returns the remaining items of this iterator as a slice.
    ///
    /// ```
    /// use vecta_common::dynarr;
    ///
    /// let mut iter = dynarr!['a', 'b', 'c'].into_iter();
    /// assert_eq!(iter.as_slice(), &['a', 'b', 'c']);
    /// let _ = iter.next().unwrap();
    /// assert_eq!(iter.as_slice(), &['b', 'c']);
    /// ```
    pub fn as_slice(&self) -> &[T] {
        &self.buf.as_slice()[self.start..self.end]
    }

    /// Returns the remaining items of this iterator as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf.as_mut_slice()[self.start..self.end]
    }
}

impl<T: Default> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        let elem = mem::take(&mut self.buf.as_mut_slice()[self.start]);
        self.start += 1;
        Some(elem)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }

    #[inline]
    fn count(self) -> usize {
        self.len()
    }
}

impl<T: Default> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        Some(mem::take(&mut self.buf.as_mut_slice()[self.end]))
    }
}

impl<T: Default> ExactSizeIterator for IntoIter<T> {}

impl<T: Default> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
