//! `FrozenChunks`: an append-only chunked store with stable element addresses.
//!
//! Elements live in fixed-capacity chunks that are allocated once and never
//! grown, so pushing a new element never moves an existing one. This is what
//! lets [`LazyCache`](super::LazyCache) hand out `&T` borrowed from `&self`
//! while it keeps forcing its producer.
//!
//! Layout:
//! - `chunks`: `Vec<Vec<T>>`, every inner `Vec` created with capacity `CHUNK`
//! - `len`: total number of elements, mirrored in a `Cell` for cheap reads
//!
//! The outer `Vec` may reallocate, but that only moves the inner `Vec`
//! headers; the element buffers they point to stay where they are.

use core::cell::{Cell, UnsafeCell};

/// Append-only storage whose elements are never moved or dropped before the
/// store itself.
pub(crate) struct FrozenChunks<T, const CHUNK: usize> {
    chunks: UnsafeCell<Vec<Vec<T>>>,
    len: Cell<usize>,
}

impl<T, const CHUNK: usize> FrozenChunks<T, CHUNK> {
    const CHUNK_IS_NON_ZERO: () = assert!(CHUNK > 0, "chunk capacity must be non-zero");

    /// Creates an empty store. No chunk is allocated until the first push.
    pub(crate) const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::CHUNK_IS_NON_ZERO;
        Self {
            chunks: UnsafeCell::new(Vec::new()),
            len: Cell::new(0),
        }
    }

    /// Number of stored elements.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len.get()
    }

    /// Appends `value` and returns a reference to it.
    ///
    /// Takes `&self`: existing references into the store stay valid.
    pub(crate) fn push(&self, value: T) -> &T {
        let idx = self.len.get();
        // SAFETY: no `&mut` to the outer vector escapes this method and no user
        // code runs while it is alive, so this is the only mutable access.
        // Outstanding `&T` point into inner buffers, which are never touched
        // except to write the fresh slot at `idx % CHUNK`.
        let chunks = unsafe { &mut *self.chunks.get() };
        if idx % CHUNK == 0 {
            chunks.push(Vec::with_capacity(CHUNK));
        }
        let chunk = chunks
            .last_mut()
            .unwrap_or_else(|| unreachable!("a chunk was pushed for index {idx}"));
        debug_assert!(chunk.len() < CHUNK, "inner chunk must never reallocate");
        chunk.push(value);
        self.len.set(idx + 1);
        let ptr: *const T = &chunk[idx % CHUNK];
        // SAFETY: the element's buffer is never reallocated or freed while
        // `self` is alive, so the pointer stays valid for the `&self` lifetime.
        unsafe { &*ptr }
    }

    /// Returns the element at `index`, if stored.
    #[inline]
    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len.get() {
            return None;
        }
        // SAFETY: shared access; the only mutable access is the short-lived
        // borrow inside `push`, which never overlaps with this one.
        let chunks = unsafe { &*self.chunks.get() };
        let ptr: *const T = &chunks[index / CHUNK][index % CHUNK];
        // SAFETY: see `push`; element addresses are stable for `&self`.
        Some(unsafe { &*ptr })
    }
}

impl<T, const CHUNK: usize> Default for FrozenChunks<T, CHUNK> {
    fn default() -> Self {
        Self::new()
    }
}
