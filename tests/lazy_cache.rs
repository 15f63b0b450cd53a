use std::cell::Cell;

use graphwalk::{GraphError, LazyCache};

/// Yields `1, 2` and counts every pull, including the final one.
fn two_elements(phase: &Cell<u32>) -> impl Iterator<Item = u32> + '_ {
    let mut next = 0;
    std::iter::from_fn(move || {
        phase.set(phase.get() + 1);
        next += 1;
        (next <= 2).then_some(next)
    })
}

#[test]
fn has_at_least_forces_only_what_it_needs() {
    let phase = Cell::new(0);
    let cache = LazyCache::new(two_elements(&phase));
    assert_eq!(phase.get(), 0);

    assert!(cache.has_at_least(0));
    assert_eq!(phase.get(), 0);

    assert!(cache.has_at_least(1));
    assert_eq!(phase.get(), 1);
    assert!(cache.has_at_least(1));
    assert_eq!(phase.get(), 1);

    assert!(cache.has_at_least(2));
    assert_eq!(phase.get(), 2);

    assert!(!cache.has_at_least(3));
    assert_eq!(phase.get(), 3);

    assert!(!cache.has_at_least(10));
    assert_eq!(phase.get(), 3);
    assert!(cache.is_exhausted());
}

#[test]
fn get_reports_out_of_range() {
    let phase = Cell::new(0);
    let cache = LazyCache::new(two_elements(&phase));

    assert_eq!(cache.get(0), Ok(&1));
    assert_eq!(phase.get(), 1);
    assert_eq!(cache.get(0), Ok(&1));
    assert_eq!(phase.get(), 1);
    assert_eq!(cache.get(1), Ok(&2));
    assert_eq!(phase.get(), 2);

    assert_eq!(
        cache.get(2),
        Err(GraphError::IndexOutOfRange { index: 2, len: 2 })
    );
    assert_eq!(phase.get(), 3);
}

#[test]
fn iteration_replays_then_advances() {
    let phase = Cell::new(0);
    let cache = LazyCache::new(two_elements(&phase));

    assert_eq!(cache.iter().find(|&&n| n == 1), Some(&1));
    assert_eq!(phase.get(), 1);
    assert_eq!(cache.iter().find(|&&n| n == 1), Some(&1));
    assert_eq!(phase.get(), 1);

    assert_eq!(cache.iter().find(|&&n| n == 2), Some(&2));
    assert_eq!(phase.get(), 2);

    assert_eq!(cache.iter().find(|&&n| n == 3), None);
    assert_eq!(phase.get(), 3);

    assert_eq!(cache.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(phase.get(), 3);
}

#[test]
fn producer_calls_track_highest_index() {
    let pulls = Cell::new(0usize);
    let cache = LazyCache::new((0..).inspect(|_| pulls.set(pulls.get() + 1)));

    for index in [5, 2, 17, 3, 17, 0] {
        assert_eq!(cache.get(index), Ok(&index));
    }
    assert_eq!(pulls.get(), 18);
}
