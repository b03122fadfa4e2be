//! Ordered, indexable sequences that take part in structural equality.

/// A finite, ordered sequence of `T` that can lend its elements as a slice.
///
/// [`SliceView`](crate::SliceView) compares equal to any `Elements` sequence with
/// the same length and pairwise-equal elements, whatever the storage behind it.
pub trait Elements<T> {
    /// Number of elements in the sequence.
    fn elements_len(&self) -> usize;

    /// Calls `f` with the sequence's elements in order.
    fn with_elements<R>(&self, f: impl FnOnce(&[T]) -> R) -> R;
}

impl<T> Elements<T> for [T] {
    #[inline]
    fn elements_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn with_elements<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(self)
    }
}

impl<T, const N: usize> Elements<T> for [T; N] {
    #[inline]
    fn elements_len(&self) -> usize {
        N
    }

    #[inline]
    fn with_elements<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(self.as_slice())
    }
}

impl<T> Elements<T> for Vec<T> {
    #[inline]
    fn elements_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn with_elements<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(self.as_slice())
    }
}

impl<T, S: Elements<T> + ?Sized> Elements<T> for &S {
    #[inline]
    fn elements_len(&self) -> usize {
        (**self).elements_len()
    }

    #[inline]
    fn with_elements<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        (**self).with_elements(f)
    }
}

/// Structural equality over any two element sequences.
pub(crate) fn elements_eq<T, A, B>(a: &A, b: &B) -> bool
where
    T: PartialEq,
    A: Elements<T> + ?Sized,
    B: Elements<T> + ?Sized,
{
    a.elements_len() == b.elements_len() && a.with_elements(|x| b.with_elements(|y| x == y))
}
