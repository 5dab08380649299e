//! Indexed binary min-heap of vertex ids.
//!
//! The heap stores vertex ids in a 1-indexed slot array and orders them by a
//! key slice owned by the caller. Alongside the slots it keeps a position
//! table, `positions[v] == k` iff slot `k` holds `v`, so a caller that lowers
//! the key of a queued vertex can restore heap order in `O(log V)`.
//!
//! Every operation that compares vertices takes the key slice explicitly. The
//! caller must pass the same slice (or one with identical contents for queued
//! vertices) on every call of a run; the heap never reads a key it was not
//! handed.

use thiserror::Error;

use crate::graph::VertexId;

/// Errors raised while constructing an [`IndexedMinHeap`].
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum HeapError {
    /// The heap was created without room for a single vertex.
    #[error("heap capacity must be at least 1")]
    ZeroCapacity,
}

/// Binary min-heap over vertex ids `1..=capacity` with position tracking.
///
/// # Examples
/// ```
/// use arbor_core::IndexedMinHeap;
///
/// let mut keys = vec![0_i64, 30, 10, 20];
/// let mut heap = IndexedMinHeap::with_capacity(3).expect("capacity is positive");
/// for vertex in 1..=3 {
///     heap.insert(&keys, vertex);
/// }
/// heap.decrease_key(&mut keys, 1, 5);
/// assert_eq!(heap.remove(&keys), Some(1));
/// assert_eq!(heap.remove(&keys), Some(2));
/// assert_eq!(heap.remove(&keys), Some(3));
/// assert!(heap.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct IndexedMinHeap {
    slots: Vec<VertexId>,
    positions: Vec<usize>,
    len: usize,
}

impl IndexedMinHeap {
    /// Creates an empty heap able to hold vertices `1..=capacity`.
    ///
    /// # Errors
    /// Returns [`HeapError::ZeroCapacity`] when `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, HeapError> {
        if capacity == 0 {
            return Err(HeapError::ZeroCapacity);
        }
        let size = capacity.saturating_add(1);
        Ok(Self {
            slots: vec![0; size],
            positions: vec![0; size],
            len: 0,
        })
    }

    /// Returns `true` when no vertex is queued.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of queued vertices, `N`.
    #[must_use]
    #[rustfmt::skip]
    pub const fn len(&self) -> usize { self.len }

    /// Returns the largest vertex id the heap can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len().saturating_sub(1)
    }

    /// Returns `true` when `vertex` is currently queued.
    #[must_use]
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.position(vertex).is_some()
    }

    /// Returns the slot holding `vertex`, or `None` when it is not queued.
    #[must_use]
    pub fn position(&self, vertex: VertexId) -> Option<usize> {
        self.positions
            .get(vertex)
            .copied()
            .filter(|&slot| slot != 0)
    }

    /// Returns the queued vertices in slot order, root first.
    #[must_use]
    pub fn as_slice(&self) -> &[VertexId] {
        &self.slots[1..=self.len]
    }

    /// Returns the vertex with the smallest key without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<VertexId> {
        (self.len > 0).then(|| self.slots[1])
    }

    /// Queues `vertex` with the key already stored at `keys[vertex]`.
    ///
    /// # Panics
    /// Panics in debug builds when the heap is full, `vertex` lies outside
    /// `1..=capacity`, or `vertex` is already queued.
    pub fn insert<K: Ord>(&mut self, keys: &[K], vertex: VertexId) {
        debug_assert!(self.len < self.capacity(), "heap is full");
        debug_assert!(
            vertex != 0 && vertex <= self.capacity(),
            "vertex {vertex} outside 1..={}",
            self.capacity()
        );
        debug_assert!(!self.contains(vertex), "vertex {vertex} is already queued");

        self.len += 1;
        self.slots[self.len] = vertex;
        self.positions[vertex] = self.len;
        self.sift_up(keys, self.len);
    }

    /// Removes and returns the vertex with the smallest key.
    ///
    /// The removed vertex's position is cleared, the last queued vertex moves
    /// to the root and sifts down. Returns `None` when the heap is empty.
    pub fn remove<K: Ord>(&mut self, keys: &[K]) -> Option<VertexId> {
        if self.len == 0 {
            return None;
        }
        let root = self.slots[1];
        let last = self.slots[self.len];
        self.positions[root] = 0;
        self.slots[self.len] = 0;
        self.len -= 1;

        if self.len > 0 {
            self.slots[1] = last;
            self.positions[last] = 1;
            self.sift_down(keys, 1);
        }
        Some(root)
    }

    /// Lowers the key of a queued vertex and restores heap order.
    ///
    /// Writes `key` into `keys[vertex]` before sifting so the key store and
    /// the heap never disagree.
    ///
    /// # Panics
    /// Panics in debug builds when `vertex` is not queued or `key` is larger
    /// than the current key.
    pub fn decrease_key<K: Ord + Copy>(&mut self, keys: &mut [K], vertex: VertexId, key: K) {
        debug_assert!(self.contains(vertex), "vertex {vertex} is not queued");
        debug_assert!(key <= keys[vertex], "decrease_key must not raise a key");

        keys[vertex] = key;
        if let Some(slot) = self.position(vertex) {
            self.sift_up(keys, slot);
        }
    }

    /// Moves the vertex in slot `k` towards the root while its key is
    /// strictly smaller than its parent's.
    ///
    /// # Panics
    /// Panics in debug builds when `k` is not an occupied slot.
    pub fn sift_up<K: Ord>(&mut self, keys: &[K], k: usize) {
        debug_assert!((1..=self.len).contains(&k), "slot {k} outside 1..={}", self.len);
        let vertex = self.slots[k];
        let mut hole = k;
        while hole > 1 {
            let parent = self.slots[hole / 2];
            if keys[vertex] >= keys[parent] {
                break;
            }
            self.slots[hole] = parent;
            self.positions[parent] = hole;
            hole /= 2;
        }
        self.slots[hole] = vertex;
        self.positions[vertex] = hole;
    }

    /// Moves the vertex in slot `k` towards the leaves while a child has a
    /// strictly smaller key. Equal children resolve to the left one.
    ///
    /// # Panics
    /// Panics in debug builds when `k` is not an occupied slot.
    pub fn sift_down<K: Ord>(&mut self, keys: &[K], k: usize) {
        debug_assert!((1..=self.len).contains(&k), "slot {k} outside 1..={}", self.len);
        let vertex = self.slots[k];
        let mut hole = k;
        while 2 * hole <= self.len {
            let mut child = 2 * hole;
            if child < self.len && keys[self.slots[child + 1]] < keys[self.slots[child]] {
                child += 1;
            }
            if keys[vertex] <= keys[self.slots[child]] {
                break;
            }
            self.slots[hole] = self.slots[child];
            self.positions[self.slots[hole]] = hole;
            hole = child;
        }
        self.slots[hole] = vertex;
        self.positions[vertex] = hole;
    }
}
