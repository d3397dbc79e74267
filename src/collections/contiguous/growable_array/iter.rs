use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;

use super::GrowableArray;

impl<T: Copy + Default> IntoIterator for GrowableArray<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            buf: self.buf,
            front: 0,
            back: self.len,
        }
    }
}

impl<'a, T: Copy + Default> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;

    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: Copy + Default> IntoIterator for &'a mut GrowableArray<T> {
    type Item = &'a mut T;

    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owned iterator over the elements of a [`GrowableArray`].
pub struct IntoIter<T: Copy> {
    // Only front..back is yielded, anything past the array's length is never touched.
    pub(crate) buf: Box<[T]>,
    pub(crate) front: usize,
    pub(crate) back: usize,
}

impl<T: Copy> IntoIter<T> {
    /// Returns the elements that are yet to be yielded.
    pub fn as_slice(&self) -> &[T] {
        &self.buf[self.front..self.back]
    }
}

impl<T: Copy> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        let value = self.buf[self.front];
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T: Copy> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        Some(self.buf[self.back])
    }
}

impl<T: Copy> FusedIterator for IntoIter<T> {}

impl<T: Copy> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<T: Copy + Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
