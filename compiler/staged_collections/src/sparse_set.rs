//! Sparse set keyed by small integer indices.
//!
//! Three parallel vectors back the set:
//!
//! ```text
//! dense           [ a  b  c ]        values, packed
//! dense_to_sparse [ 7  2  5 ]        backing index of each value
//! sparse          [ 0  0  2  0  0  3  0  1 ]
//!                         ^        ^     ^  dense position + 1, 0 = absent
//! ```
//!
//! Invariants held before and after every operation:
//! - `dense.len() == dense_to_sparse.len()`
//! - for every `s` with `sparse[s] != 0`: `dense_to_sparse[sparse[s] - 1] == s`
//!
//! Removal moves the last dense value into the hole, so every operation is
//! O(1) apart from the one-time growth of `sparse`.

use crate::StagedVec;

/// Dense storage of values addressed by sparse indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseSet<T> {
    dense: StagedVec<T>,
    dense_to_sparse: StagedVec<usize>,
    sparse: StagedVec<usize>,
}

impl<T> Default for SparseSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SparseSet<T> {
    pub const fn new() -> Self {
        Self {
            dense: StagedVec::new(),
            dense_to_sparse: StagedVec::new(),
            sparse: StagedVec::new(),
        }
    }

    /// Number of stored values.
    #[inline]
    pub fn len(&self) -> usize {
        self.dense.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    /// Store `item` at `index`, overwriting any value already there in place.
    ///
    /// # Panics
    /// Panics if `index == usize::MAX`, which has no room for the sparse slot.
    pub fn insert(&mut self, index: usize, item: T) {
        let Some(min_len) = index.checked_add(1) else {
            panic!("sparse set index out of range: {index}");
        };
        self.sparse.ensure_length(0, min_len);
        let slot = *self.sparse.get(index);
        if slot == 0 {
            debug_assert_eq!(self.dense.len(), self.dense_to_sparse.len());
            let dense_index = self.dense.len();
            self.dense.append(item);
            self.dense_to_sparse.append(index);
            // zero stays reserved for "absent"
            self.sparse.replace(index, dense_index + 1);
        } else {
            self.dense.replace(slot - 1, item);
        }
    }

    /// Dense position of `index`, if occupied.
    #[inline]
    fn dense_index(&self, index: usize) -> Option<usize> {
        match self.sparse.as_slice().get(index) {
            Some(&slot) if slot != 0 => Some(slot - 1),
            _ => None,
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.dense_index(index).map(|d| self.dense.get(d))
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let d = self.dense_index(index)?;
        Some(self.dense.get_mut(d))
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.dense_index(index).is_some()
    }

    /// Remove the value at `index` by moving the last value into its slot.
    ///
    /// Out-of-range and empty indices are a no-op returning `None`.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let hole = self.dense_index(index)?;
        debug_assert_eq!(self.dense.len(), self.dense_to_sparse.len());

        let top = self.dense.pop();
        let top_index = self.dense_to_sparse.pop();
        let removed = if hole < self.dense.len() {
            let removed = self.dense.replace(hole, top);
            self.sparse.replace(top_index, hole + 1);
            self.dense_to_sparse.replace(hole, top_index);
            removed
        } else {
            // the hole was the last value
            top
        };
        self.sparse.replace(index, 0);
        Some(removed)
    }

    /// Release all three backing vectors.
    pub fn free(&mut self) {
        self.dense.free();
        self.dense_to_sparse.free();
        self.sparse.free();
    }

    /// Iterate `(index, value)` pairs in dense order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.dense_to_sparse.iter().copied().zip(self.dense.iter())
    }

    /// Packed values in dense order.
    #[inline]
    pub fn dense(&self) -> &[T] {
        self.dense.as_slice()
    }

    /// Backing index of each dense value.
    #[inline]
    pub fn dense_to_sparse(&self) -> &[usize] {
        self.dense_to_sparse.as_slice()
    }

    /// Dense position + 1 for each backing index; 0 means absent.
    #[inline]
    pub fn sparse(&self) -> &[usize] {
        self.sparse.as_slice()
    }

    /// Check the dense/sparse round-trip invariants.
    pub fn check_invariant(&self) -> bool {
        if self.dense.len() != self.dense_to_sparse.len() {
            return false;
        }
        let occupied = self.sparse().iter().filter(|&&slot| slot != 0).count();
        occupied == self.dense.len()
            && self.sparse().iter().enumerate().all(|(s, &slot)| {
                slot == 0 || self.dense_to_sparse().get(slot - 1) == Some(&s)
            })
    }
}

#[cfg(test)]
mod tests;
