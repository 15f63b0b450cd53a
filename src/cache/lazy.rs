//! `LazyCache`: memoizes a one-shot iterator so it can be replayed and indexed.
//!
//! The producer is pulled strictly in order and at most once per element,
//! however many cursors or index lookups are served. Once it reports the end of
//! the sequence it is dropped, releasing whatever it borrowed or owned, and the
//! cache becomes a fixed finite sequence.

use core::cell::RefCell;
use core::fmt;

use super::chunks::FrozenChunks;
use crate::error::{GraphError, Result};

/// Elements per storage chunk.
const CHUNK: usize = 64;

/// A lazily filled, append-only cache over an iterator.
///
/// All access goes through `&self`; returned references stay valid for as long
/// as the cache is borrowed, even while further elements are forced.
///
/// # Examples
///
/// ```rust
/// use graphwalk::LazyCache;
///
/// let squares = LazyCache::new((0u64..).map(|n| n * n));
/// assert_eq!(squares.get(10), Ok(&100));
/// assert_eq!(squares.cached_len(), 11);
///
/// // Replays the cached prefix, then keeps pulling.
/// let sum: u64 = squares.iter().take(12).sum();
/// assert_eq!(sum, 506);
/// ```
///
/// # Panics
///
/// Forcing the cache from inside its own producer panics.
pub struct LazyCache<I: Iterator> {
    items: FrozenChunks<I::Item, CHUNK>,
    source: RefCell<Option<I>>,
}

impl<I: Iterator> LazyCache<I> {
    /// Wraps `source` without pulling anything from it.
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            items: FrozenChunks::new(),
            source: RefCell::new(Some(source.into_iter())),
        }
    }

    /// Number of elements produced so far. Never forces the producer.
    #[inline]
    pub fn cached_len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` once the producer has reported the end of the sequence.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.source.borrow().is_none()
    }

    /// Returns the element at `index`, forcing the producer up to it.
    ///
    /// Fails with [`GraphError::IndexOutOfRange`] if the sequence ends first.
    /// On an infinite producer this always succeeds; on a producer that stalls
    /// forever it never returns.
    pub fn get(&self, index: usize) -> Result<&I::Item> {
        self.try_get(index).ok_or(GraphError::IndexOutOfRange {
            index,
            len: self.cached_len(),
        })
    }

    /// Like [`get`](Self::get), returning `None` past the end.
    pub fn try_get(&self, index: usize) -> Option<&I::Item> {
        if self.fill_to(index.saturating_add(1)) {
            self.items.get(index)
        } else {
            None
        }
    }

    /// Returns whether the sequence has at least `n` elements.
    ///
    /// Forces exactly as many elements as needed to decide; `n == 0` forces
    /// nothing, and an exhausted cache answers without touching the producer.
    pub fn has_at_least(&self, n: usize) -> bool {
        self.fill_to(n)
    }

    /// Returns a fresh cursor starting at index 0.
    ///
    /// Cursors are independent: each replays the cached prefix and forces new
    /// elements only once it moves past it.
    pub fn iter(&self) -> Cursor<'_, I> {
        Cursor {
            cache: self,
            next: 0,
        }
    }

    /// Grows the cache to at least `len` elements. Returns `false` if the
    /// producer ended before reaching `len`.
    fn fill_to(&self, len: usize) -> bool {
        if self.items.len() >= len {
            return true;
        }

        let mut guard = self.source.borrow_mut();
        while self.items.len() < len {
            let Some(source) = guard.as_mut() else {
                return false;
            };
            match source.next() {
                Some(item) => {
                    self.items.push(item);
                }
                None => {
                    trace_event!(trace, produced = self.items.len(), "lazy cache producer exhausted");
                    *guard = None;
                    return false;
                }
            }
        }
        true
    }
}

impl<I> fmt::Debug for LazyCache<I>
where
    I: Iterator,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cached: Vec<_> = (0..self.cached_len()).filter_map(|i| self.items.get(i)).collect();
        f.debug_struct("LazyCache")
            .field("cached", &cached)
            .field("exhausted", &self.is_exhausted())
            .finish()
    }
}

impl<I: Iterator> From<I> for LazyCache<I> {
    fn from(source: I) -> Self {
        Self::new(source)
    }
}

impl<'a, I: Iterator> IntoIterator for &'a LazyCache<I> {
    type Item = &'a I::Item;
    type IntoIter = Cursor<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A replaying cursor over a [`LazyCache`].
pub struct Cursor<'a, I: Iterator> {
    cache: &'a LazyCache<I>,
    next: usize,
}

impl<'a, I: Iterator> Cursor<'a, I> {
    /// Index of the element the next call to `next` returns.
    pub fn position(&self) -> usize {
        self.next
    }
}

impl<'a, I: Iterator> Clone for Cursor<'a, I> {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache,
            next: self.next,
        }
    }
}

impl<'a, I: Iterator> Iterator for Cursor<'a, I> {
    type Item = &'a I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.cache.try_get(self.next)?;
        self.next += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let cached = self.cache.cached_len().saturating_sub(self.next);
        if self.cache.is_exhausted() {
            (cached, Some(cached))
        } else {
            (cached, None)
        }
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.next = self.next.saturating_add(n);
        self.next()
    }
}

impl<'a, I: Iterator> core::iter::FusedIterator for Cursor<'a, I> {}
