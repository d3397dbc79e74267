use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::iter;
use std::ops::{Deref, DerefMut};

use tracing::{trace, warn};

use super::{EmptyArray, EmptyAtIndex, IndexOutOfBounds, InsertError};
use crate::util::result::ResultExtension;

/// The capacity used by [`GrowableArray::new`].
pub const DEFAULT_CAP: usize = 5;

const MIN_CAP: usize = 1;

const GROWTH_FACTOR: usize = 2;
const SHRINK_DIVISOR: usize = 2;

/// A variable size contiguous collection with an exactly tracked capacity.
///
/// The array stores its elements in a single boxed slice. Slots from [`len`](GrowableArray::len)
/// up to [`cap`](GrowableArray::cap) are unused: they hold `T::default()` when first allocated and
/// whatever was last shifted out of them afterwards, but are never observable through the public
/// API.
///
/// # Resizing
/// - Growth: when an insertion finds `len == cap`, the capacity doubles before the value is
///   written.
/// - Shrinking: when a removal leaves `len < cap / 2`, the capacity is halved.
///
/// Each array owns its capacity, so resizing one array never affects another.
///
/// # Teardown
/// Dropping the array releases the backing storage once. Elements are [`Copy`], so there is
/// nothing else to release.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the GrowableArray.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)`*, `O(n)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)`*, `O(n)` |
/// | `try_get` | `O(1)` |
/// | `clear` | `O(1)` |
///
/// \* Unless the operation triggers a reallocation, which copies all `n` elements.
#[derive(Clone)]
pub struct GrowableArray<T: Copy + Default> {
    pub(crate) buf: Box<[T]>,
    pub(crate) len: usize,
}

impl<T: Copy + Default> GrowableArray<T> {
    /// Creates a new, empty GrowableArray with a capacity of [`DEFAULT_CAP`].
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::GrowableArray;
    /// let arr: GrowableArray<i32> = GrowableArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), 5);
    /// ```
    pub fn new() -> GrowableArray<T> {
        GrowableArray::with_cap(DEFAULT_CAP)
    }

    /// Creates a new, empty GrowableArray with capacity exactly equal to the provided value. All
    /// slots are initialized to `T::default()`.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::GrowableArray;
    /// let mut arr = GrowableArray::with_cap(2);
    /// arr.push(1);
    /// arr.push(2);
    /// assert_eq!(arr.cap(), 2);
    /// arr.push(3);
    /// assert_eq!(arr.cap(), 4);
    /// ```
    pub fn with_cap(cap: usize) -> GrowableArray<T> {
        GrowableArray {
            buf: Self::alloc(cap),
            len: 0,
        }
    }

    /// Returns the logical length of the GrowableArray.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the GrowableArray contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the GrowableArray, which is always at least its length.
    pub fn cap(&self) -> usize {
        self.buf.len()
    }

    /// Appends `value` after the last element, doubling the capacity first if the GrowableArray is
    /// full.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::GrowableArray;
    /// let mut arr = GrowableArray::new();
    /// for i in 1..=6 {
    ///     arr.push(i);
    /// }
    /// assert_eq!(&*arr, &[1, 2, 3, 4, 5, 6]);
    /// assert_eq!(arr.cap(), 10);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }

        self.buf[self.len] = value;
        self.len += 1;
    }

    /// Removes the last element and returns it, or None if the GrowableArray is empty. The same
    /// shrinking rule as [`remove`](GrowableArray::remove) applies.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            self.remove(self.len - 1).ok()
        }
    }

    /// Inserts `value` at `index`, shifting all elements from `index` onwards one place to the
    /// right and growing first if required.
    ///
    /// An empty GrowableArray rejects the insertion with [`EmptyArray`], even at index 0; use
    /// [`push`](GrowableArray::push) to add the first element.
    ///
    /// # Panics
    /// The caller is responsible for `index` being in `0..=len`. Panics if it isn't. See
    /// [`try_insert`](GrowableArray::try_insert) for a version that returns an error instead.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::{EmptyArray, GrowableArray};
    /// let mut arr: GrowableArray<_> = (0..3).collect();
    /// arr.insert(1, 100).unwrap();
    /// arr.insert(4, 200).unwrap();
    /// assert_eq!(&*arr, &[0, 100, 1, 2, 200]);
    ///
    /// let mut empty = GrowableArray::new();
    /// assert_eq!(empty.insert(0, 1), Err(EmptyArray));
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), EmptyArray> {
        if self.is_empty() {
            warn!(index, "{}", EmptyArray);
            return Err(EmptyArray);
        }

        self.check_insert_index(index).throw();
        self.shift_in(index, value);
        Ok(())
    }

    /// Inserts `value` at `index` like [`insert`](GrowableArray::insert), but reports an
    /// out-of-bounds `index` as an [`Err`] rather than panicking.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), InsertError> {
        if self.is_empty() {
            warn!(index, "{}", EmptyArray);
            return Err(EmptyArray.into());
        }

        self.check_insert_index(index)?;
        self.shift_in(index, value);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting all following elements one place to
    /// the left. If the removal leaves the GrowableArray less than half full, its capacity is
    /// halved.
    ///
    /// If there is no element at `index`, the GrowableArray is left unchanged and an
    /// [`IndexOutOfBounds`] error is returned.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::GrowableArray;
    /// let mut arr: GrowableArray<_> = (1..=3).collect();
    /// assert_eq!(arr.remove(1), Ok(2));
    /// assert!(arr.remove(5).is_err());
    /// assert_eq!(&*arr, &[1, 3]);
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        if index >= self.len {
            let error = IndexOutOfBounds {
                index,
                len: self.len,
            };
            warn!(index, len = self.len, "{error}");
            return Err(error);
        }

        let value = self.buf[index];
        self.buf.copy_within(index + 1..self.len, index);
        self.len -= 1;

        // Checked against the length after removal.
        if self.len < self.cap() / SHRINK_DIVISOR {
            self.shrink();
        }

        Ok(value)
    }

    /// Returns a reference to the element at `index`, or an [`EmptyAtIndex`] error if the
    /// GrowableArray is empty at that index. Use [`get`](slice::get) (through
    /// [`Deref`]) to check without emitting a diagnostic.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::GrowableArray;
    /// let arr: GrowableArray<_> = (1..=6).collect();
    /// assert_eq!(arr.try_get(5), Ok(&6));
    /// let error = arr.try_get(6).unwrap_err();
    /// assert_eq!(error.to_string(), "Array with 6 elements is empty at index 6!");
    /// ```
    pub fn try_get(&self, index: usize) -> Result<&T, EmptyAtIndex> {
        self.get(index).ok_or_else(|| {
            let error = EmptyAtIndex {
                index,
                len: self.len,
            };
            warn!(index, len = self.len, "{error}");
            error
        })
    }

    /// Removes all elements, leaving the capacity unchanged.
    pub const fn clear(&mut self) {
        self.len = 0;
    }

    /// Writes `value` at `index`, assuming that `index <= len` and the GrowableArray isn't empty.
    fn shift_in(&mut self, index: usize, value: T) {
        if self.len == self.cap() {
            self.grow();
        }

        // Behaves as a back-to-front copy, so no element is overwritten before it is moved.
        self.buf.copy_within(index..self.len, index + 1);
        self.buf[index] = value;
        self.len += 1;
    }

    /// Grows the backing storage so that at least one more element can be added.
    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(self.cap().saturating_mul(GROWTH_FACTOR), MIN_CAP);
        self.realloc_with_cap(new_cap);
    }

    /// Halves the backing storage. Only valid while `len < cap / 2`.
    pub(crate) fn shrink(&mut self) {
        self.realloc_with_cap(self.cap() / SHRINK_DIVISOR);
    }

    /// Moves all elements into a new allocation with the provided capacity.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        debug_assert!(self.len <= new_cap);
        trace!(old_cap = self.cap(), new_cap, len = self.len, "reallocating GrowableArray");

        let mut buf = Self::alloc(new_cap);
        buf[..self.len].copy_from_slice(&self.buf[..self.len]);
        self.buf = buf;
    }

    fn alloc(cap: usize) -> Box<[T]> {
        iter::repeat_n(T::default(), cap).collect()
    }

    /// Checks that the provided index is a valid insertion point, which includes `len` itself.
    pub(crate) const fn check_insert_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }
}

impl<T: Copy + Default> Extend<T> for GrowableArray<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Copy + Default> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut arr = GrowableArray::with_cap(iter.size_hint().0);
        arr.extend(iter);
        arr
    }
}

impl<T: Copy + Default> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default> Deref for GrowableArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.buf[..self.len]
    }
}

impl<T: Copy + Default> DerefMut for GrowableArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buf[..self.len]
    }
}

impl<T: Copy + Default> AsRef<[T]> for GrowableArray<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T: Copy + Default> AsMut<[T]> for GrowableArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T: Copy + Default> Borrow<[T]> for GrowableArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T: Copy + Default> BorrowMut<[T]> for GrowableArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

impl<T: Copy + Default + PartialEq> PartialEq for GrowableArray<T> {
    /// Arrays are compared by their elements only, not their capacity.
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Copy + Default + Eq> Eq for GrowableArray<T> {}

impl<T: Copy + Default + Hash> Hash for GrowableArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Copy + Default + Debug> Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableArray")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Copy + Default + Display> Display for GrowableArray<T> {
    /// Writes all elements in order, separated by spaces.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
            for value in iter {
                write!(f, " {value}")?;
            }
        }
        Ok(())
    }
}
