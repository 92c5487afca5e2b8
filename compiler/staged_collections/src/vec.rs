//! Growable vectors with an explicit capacity policy.
//!
//! [`StagedVec`] tracks its own logical capacity instead of deferring to
//! `Vec`'s growth strategy:
//!
//! - The first allocation reserves exactly the requested capacity.
//! - Growth past the current capacity reserves **twice** the requested
//!   capacity, amortizing future appends.
//!
//! The arena variant draws buffers from a [`VecArena`], a pool that hands
//! back previously released buffers large enough for the request before
//! allocating fresh ones. Outgrown buffers go back into the pool rather than
//! being freed individually.

use std::mem;

/// Growable array with amortized O(1) append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedVec<T> {
    items: Vec<T>,
    /// Logical capacity; zero means unallocated.
    cap: usize,
}

impl<T> Default for StagedVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StagedVec<T> {
    /// Create an unallocated vector.
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            cap: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Logical capacity as set by the growth policy.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Make room for at least `capacity` items.
    pub fn ensure_capacity(&mut self, capacity: usize) {
        if self.cap == 0 {
            self.items = Vec::with_capacity(capacity);
            self.cap = capacity;
        } else if self.cap < capacity {
            self.cap = capacity * 2;
            tracing::trace!(from = self.items.capacity(), to = self.cap, "growing vector");
            self.items.reserve_exact(self.cap - self.items.len());
        }
        debug_assert!(self.cap >= capacity);
    }

    /// Make room for at least `capacity` items, sourcing memory from `arena`.
    pub fn ensure_capacity_via_arena(&mut self, arena: &mut VecArena<T>, capacity: usize) {
        if self.cap == 0 {
            let old = mem::replace(&mut self.items, arena.alloc(capacity));
            arena.recycle(old);
            self.cap = capacity;
        } else if self.cap < capacity {
            self.cap = capacity * 2;
            let old = mem::take(&mut self.items);
            self.items = arena.realloc(old, self.cap);
        }
        debug_assert!(self.cap >= capacity);
    }

    pub fn append(&mut self, item: T) {
        self.ensure_capacity(self.len() + 1);
        self.items.push(item);
    }

    pub fn append_via_arena(&mut self, arena: &mut VecArena<T>, item: T) {
        self.ensure_capacity_via_arena(arena, self.len() + 1);
        self.items.push(item);
    }

    /// Append `times` copies of `item` after a single capacity check.
    pub fn append_n_times(&mut self, item: T, times: usize)
    where
        T: Clone,
    {
        self.ensure_capacity(self.len() + times);
        self.items.extend(std::iter::repeat(item).take(times));
    }

    /// Pad with `default_value` until the vector holds `minimum_length` items.
    pub fn ensure_length(&mut self, default_value: T, minimum_length: usize)
    where
        T: Clone,
    {
        if self.len() >= minimum_length {
            return;
        }
        self.append_n_times(default_value, minimum_length - self.len());
        debug_assert!(self.len() >= minimum_length);
    }

    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn get(&self, index: usize) -> &T {
        self.check_index(index);
        &self.items[index]
    }

    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.check_index(index);
        &mut self.items[index]
    }

    /// Overwrite the item at `index`, returning the previous value.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn replace(&mut self, index: usize, item: T) -> T {
        mem::replace(self.get_mut(index), item)
    }

    /// # Panics
    /// Panics if the vector is empty.
    pub fn pop(&mut self) -> T {
        match self.items.pop() {
            Some(item) => item,
            None => panic!("pop from an empty vector"),
        }
    }

    /// Release the backing storage and return to the unallocated state.
    pub fn free(&mut self) {
        self.items = Vec::new();
        self.cap = 0;
    }

    #[inline]
    fn check_index(&self, index: usize) {
        assert!(
            index < self.len(),
            "vector index out of bounds: the len is {} but the index is {index}",
            self.len()
        );
    }
}

impl<T> std::ops::Index<usize> for StagedVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.get(index)
    }
}

impl<'a, T> IntoIterator for &'a StagedVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Pool of reusable vector buffers.
///
/// Allocation reuses the first pooled buffer whose capacity covers the
/// request; only when none fits is a new buffer allocated. Every buffer is
/// dropped together by [`VecArena::reset`] or when the arena is dropped.
#[derive(Debug)]
pub struct VecArena<T> {
    pooled: Vec<Vec<T>>,
    allocations: usize,
}

impl<T> Default for VecArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> VecArena<T> {
    pub const fn new() -> Self {
        Self {
            pooled: Vec::new(),
            allocations: 0,
        }
    }

    /// Number of fresh buffers allocated since creation or the last reset.
    #[inline]
    pub fn allocations(&self) -> usize {
        self.allocations
    }

    /// Number of idle buffers waiting for reuse.
    #[inline]
    pub fn pooled(&self) -> usize {
        self.pooled.len()
    }

    /// Hand a vector's storage back to the pool, leaving it unallocated.
    pub fn release(&mut self, vec: &mut StagedVec<T>) {
        let buffer = mem::take(&mut vec.items);
        vec.cap = 0;
        self.recycle(buffer);
    }

    /// Drop every pooled buffer at once.
    pub fn reset(&mut self) {
        self.pooled.clear();
        self.allocations = 0;
    }

    fn alloc(&mut self, capacity: usize) -> Vec<T> {
        if let Some(pos) = self.pooled.iter().position(|b| b.capacity() >= capacity) {
            return self.pooled.swap_remove(pos);
        }
        self.allocations += 1;
        Vec::with_capacity(capacity)
    }

    fn realloc(&mut self, mut old: Vec<T>, capacity: usize) -> Vec<T> {
        let mut fresh = self.alloc(capacity);
        fresh.append(&mut old);
        self.recycle(old);
        fresh
    }

    fn recycle(&mut self, mut buffer: Vec<T>) {
        if buffer.capacity() == 0 {
            return;
        }
        buffer.clear();
        self.pooled.push(buffer);
    }
}
