//! Zero-copy views over shared backing storage.

use crate::elements::{elements_eq, Elements};
use crate::{Index, IndexError};
use parking_lot::RwLock;
use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::ops::{Bound, Range, RangeBounds};
use std::sync::Arc;

thread_local! {
    /// Backing storages the current thread holds a read lock on while running
    /// caller code.
    static ACTIVE_READS: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };
}

/// Marks one backing storage as being read on this thread until dropped.
struct ReadScope(usize);

impl ReadScope {
    fn enter(key: usize) -> Self {
        ACTIVE_READS.with(|reads| reads.borrow_mut().push(key));
        Self(key)
    }

    fn is_active(key: usize) -> bool {
        ACTIVE_READS.with(|reads| reads.borrow().contains(&key))
    }
}

impl Drop for ReadScope {
    fn drop(&mut self) {
        let _ = ACTIVE_READS.try_with(|reads| {
            let mut reads = reads.borrow_mut();
            if let Some(i) = reads.iter().rposition(|&key| key == self.0) {
                reads.swap_remove(i);
            }
        });
    }
}

/// A bounds-checked window `[from, to)` over a shared, fixed-length sequence.
///
/// Cloning or slicing a view never copies elements: the child keeps a handle to
/// the same backing storage and only narrows the range. Writes through
/// [`SliceView::set`] land in that storage and are visible to every view whose
/// range covers the written element.
///
/// Equality is structural. Two views are equal when they hold equal elements in
/// the same order, regardless of which storage or offset they come from, and a
/// view also compares against plain arrays, slices and vectors.
pub struct SliceView<T> {
    backing: Arc<RwLock<Box<[T]>>>,
    from: usize,
    to: usize,
}

impl<T> SliceView<T> {
    /// Creates a view over all of `items`.
    pub fn new(items: Vec<T>) -> Self {
        let to = items.len();
        Self::from_parts(Arc::new(RwLock::new(items.into_boxed_slice())), 0, to)
    }

    fn from_parts(backing: Arc<RwLock<Box<[T]>>>, from: usize, to: usize) -> Self {
        assert!(from <= to, "view starts at {from} but ends at {to}");
        Self { backing, from, to }
    }

    /// Returns the number of elements in this view.
    #[inline]
    pub fn len(&self) -> usize {
        self.to - self.from
    }

    /// Returns true if this view has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }

    /// Returns the absolute range this view covers in its backing storage.
    #[inline]
    pub fn raw_range(&self) -> Range<usize> {
        self.from..self.to
    }

    /// Returns true if both views address the same backing storage.
    #[inline]
    pub fn shares_backing(&self, other: &SliceView<T>) -> bool {
        Arc::ptr_eq(&self.backing, &other.backing)
    }

    /// Identifies the backing storage for re-entrancy checks.
    fn storage_key(&self) -> usize {
        Arc::as_ptr(&self.backing) as *const () as usize
    }

    /// Runs `f` over this view's elements with the backing storage read-locked.
    fn read<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        let backing = self.backing.read_recursive();
        let _scope = ReadScope::enter(self.storage_key());
        f(&backing[self.from..self.to])
    }

    /// Resolves `idx` to a position inside `[0, len)`.
    fn position(&self, idx: Index) -> Option<usize> {
        idx.resolve(self.len()).filter(|&p| p < self.len())
    }

    /// Resolves `idx` as a slice bound inside `[0, len]`.
    fn bound(&self, idx: Index) -> usize {
        match idx.resolve(self.len()) {
            Some(p) if p <= self.len() => p,
            _ => panic!("slice bound {idx} out of range for view of length {}", self.len()),
        }
    }

    /// Returns true if `idx` addresses an element of this view.
    #[inline]
    pub fn can_get(&self, idx: impl Into<Index>) -> bool {
        self.position(idx.into()).is_some()
    }

    /// Calls `f` with a reference to the element at `idx`.
    ///
    /// The backing storage stays read-locked while `f` runs, so `f` must not
    /// [`set`](Self::set) through any view sharing it.
    pub fn with<R>(&self, idx: impl Into<Index>, f: impl FnOnce(&T) -> R) -> Result<R, IndexError> {
        let idx = idx.into();
        let p = self
            .position(idx)
            .ok_or_else(|| IndexError::new(idx, self.len()))?;
        Ok(self.read(|elements| f(&elements[p])))
    }

    /// Returns a copy of the element at `idx`.
    pub fn get(&self, idx: impl Into<Index>) -> Result<T, IndexError>
    where
        T: Clone,
    {
        self.with(idx, T::clone)
    }

    /// Returns a copy of the element at `idx`, or `None` if it is out of range.
    pub fn try_get(&self, idx: impl Into<Index>) -> Option<T>
    where
        T: Clone,
    {
        self.get(idx).ok()
    }

    /// Replaces the element at `idx` in the shared backing storage.
    ///
    /// # Panics
    ///
    /// Panics if called from inside [`with`](Self::with) or
    /// [`Elements::with_elements`] on a view of the same storage, since the
    /// write lock could never be acquired.
    pub fn set(&self, idx: impl Into<Index>, value: T) -> Result<(), IndexError> {
        let idx = idx.into();
        let p = self
            .position(idx)
            .ok_or_else(|| IndexError::new(idx, self.len()))?;
        assert!(
            !ReadScope::is_active(self.storage_key()),
            "cannot set index {idx} while the same storage is being read on this thread"
        );
        self.backing.write()[self.from + p] = value;
        Ok(())
    }

    /// Returns the `len` elements starting at `start`.
    ///
    /// # Panics
    ///
    /// Panics if the resulting range does not fit inside this view.
    pub fn slice_len(&self, start: impl Into<Index>, len: usize) -> Self {
        let start = self.bound(start.into());
        let end = start
            .checked_add(len)
            .filter(|&end| end <= self.len())
            .unwrap_or_else(|| {
                panic!(
                    "slice of {len} at {start} out of range for view of length {}",
                    self.len()
                )
            });
        Self::from_parts(self.backing.clone(), self.from + start, self.from + end)
    }

    /// Returns the elements covered by `range`.
    ///
    /// A missing start means the first element and a missing end means one past
    /// the last. Either bound may be anchored from the end with
    /// [`Index::FromEnd`].
    ///
    /// # Panics
    ///
    /// Panics if a bound falls outside the view or the end resolves before the
    /// start.
    pub fn slice(&self, range: impl RangeBounds<Index>) -> Self {
        let start = match range.start_bound() {
            Bound::Included(&idx) => self.bound(idx),
            Bound::Excluded(&idx) => self.bound(idx) + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&idx) => self.bound(idx) + 1,
            Bound::Excluded(&idx) => self.bound(idx),
            Bound::Unbounded => self.len(),
        };
        assert!(
            start <= end && end <= self.len(),
            "slice {start}..{end} out of range for view of length {}",
            self.len()
        );
        Self::from_parts(self.backing.clone(), self.from + start, self.from + end)
    }

    /// Returns the elements covered by a plain forward `range`.
    ///
    /// # Panics
    ///
    /// Same conditions as [`slice`](Self::slice).
    pub fn range(&self, range: impl RangeBounds<usize>) -> Self {
        let forward = |bound: Bound<&usize>| match bound {
            Bound::Included(&i) => Bound::Included(Index::FromStart(i)),
            Bound::Excluded(&i) => Bound::Excluded(Index::FromStart(i)),
            Bound::Unbounded => Bound::Unbounded,
        };
        self.slice((forward(range.start_bound()), forward(range.end_bound())))
    }

    /// Returns an iterator over copies of the elements.
    ///
    /// Each step reads one element from the backing storage; writes made while
    /// iterating are seen element by element, not as a snapshot.
    pub fn iter(&self) -> Iter<'_, T>
    where
        T: Clone,
    {
        Iter {
            view: self,
            front: 0,
            back: self.len(),
        }
    }

    /// Copies the elements into a new vector.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.with_elements(<[T]>::to_vec)
    }
}

impl<T> Clone for SliceView<T> {
    fn clone(&self) -> Self {
        Self {
            backing: self.backing.clone(),
            from: self.from,
            to: self.to,
        }
    }
}

impl<T> Default for SliceView<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> From<Vec<T>> for SliceView<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for SliceView<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> Elements<T> for SliceView<T> {
    #[inline]
    fn elements_len(&self) -> usize {
        self.len()
    }

    fn with_elements<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        self.read(f)
    }
}

impl<T: PartialEq, S: Elements<T> + ?Sized> PartialEq<S> for SliceView<T> {
    fn eq(&self, other: &S) -> bool {
        elements_eq(self, other)
    }
}

impl<T: Eq> Eq for SliceView<T> {}

impl<T: PartialEq> PartialEq<SliceView<T>> for [T] {
    fn eq(&self, other: &SliceView<T>) -> bool {
        elements_eq(self, other)
    }
}

impl<T: PartialEq> PartialEq<SliceView<T>> for &[T] {
    fn eq(&self, other: &SliceView<T>) -> bool {
        elements_eq(*self, other)
    }
}

impl<T: PartialEq, const N: usize> PartialEq<SliceView<T>> for [T; N] {
    fn eq(&self, other: &SliceView<T>) -> bool {
        elements_eq(self, other)
    }
}

impl<T: PartialEq> PartialEq<SliceView<T>> for Vec<T> {
    fn eq(&self, other: &SliceView<T>) -> bool {
        elements_eq(self, other)
    }
}

impl<T: Hash> Hash for SliceView<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.with_elements(|elements| elements.hash(state))
    }
}

impl<T: fmt::Debug> fmt::Debug for SliceView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_elements(|elements| f.debug_list().entries(elements).finish())
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for SliceView<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.with_elements(|elements| serde::Serialize::serialize(elements, serializer))
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for SliceView<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Vec<T> as serde::Deserialize>::deserialize(deserializer).map(Self::new)
    }
}

/// Iterator over the elements of a [`SliceView`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    view: &'a SliceView<T>,
    front: usize,
    back: usize,
}

impl<'a, T: Clone> Iterator for Iter<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let item = self.view.get(self.front).ok();
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, T: Clone> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.view.get(self.back).ok()
    }
}

impl<'a, T: Clone> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: Clone> FusedIterator for Iter<'a, T> {}

impl<'a, T: Clone> IntoIterator for &'a SliceView<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
