//! Borrowed fixed-size views.

use std::ops::Deref;

/// A view over `len` contiguous items.
///
/// Sub-slicing never touches the backing storage; every operation returns a
/// new view over the same items.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Slice<'a, T> {
    items: &'a [T],
}

impl<T> Clone for Slice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slice<'_, T> {}

impl<'a, T> Slice<'a, T> {
    /// Wrap a borrowed run of items.
    #[inline]
    pub const fn new(items: &'a [T]) -> Self {
        Self { items }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The viewed items, with the original borrow lifetime.
    #[inline]
    pub const fn as_slice(&self) -> &'a [T] {
        self.items
    }

    /// View of the first `n` items.
    ///
    /// # Panics
    /// Panics if `n > self.len()`.
    pub fn get_first_n(self, n: usize) -> Self {
        self.check_count(n);
        Self::new(&self.items[..n])
    }

    /// View of the last `n` items.
    ///
    /// # Panics
    /// Panics if `n > self.len()`.
    pub fn get_last_n(self, n: usize) -> Self {
        self.check_count(n);
        Self::new(&self.items[self.len() - n..])
    }

    /// View with the first `n` items dropped.
    ///
    /// # Panics
    /// Panics if `n > self.len()`.
    pub fn trim_first_n(self, n: usize) -> Self {
        self.check_count(n);
        Self::new(&self.items[n..])
    }

    /// View with the last `n` items dropped.
    ///
    /// # Panics
    /// Panics if `n > self.len()`.
    pub fn trim_last_n(self, n: usize) -> Self {
        self.check_count(n);
        Self::new(&self.items[..self.len() - n])
    }

    #[inline]
    fn check_count(&self, n: usize) {
        assert!(
            n <= self.len(),
            "slice count out of range: n is {n} but the slice holds {}",
            self.len()
        );
    }
}

impl<T> Deref for Slice<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.items
    }
}

impl<'a, T> From<&'a [T]> for Slice<'a, T> {
    fn from(items: &'a [T]) -> Self {
        Self::new(items)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Slice<'a, T> {
    fn from(items: &'a [T; N]) -> Self {
        Self::new(items)
    }
}

impl<'a, T> IntoIterator for Slice<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
