use std::{cmp::Ordering, fmt::Debug, iter::FusedIterator, ops::Range};

use crate::{
    boundary::{locate_with, Boundary},
    error::{PartitionError, Result, Side},
    iter::first_unordered_index_by,
};

/// One block of a partitioning: a run of each input sequence.
///
/// Every element of a partition orders at or before every element of the
/// partitions that follow it, so blocks can be processed independently.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition<'a, T> {
    /// position of this block in the partitioning, starting at 0
    pub index: usize,
    pub a: &'a [T],
    pub b: &'a [T],
    /// offsets of `a` within the first input
    pub a_range: Range<usize>,
    /// offsets of `b` within the second input
    pub b_range: Range<usize>,
}

impl<'a, T> Partition<'a, T> {
    /// returns true if neither side has any elements
    pub fn is_empty(&self) -> bool {
        self.a.is_empty() && self.b.is_empty()
    }

    pub fn len(&self) -> usize {
        self.a.len() + self.b.len()
    }

    pub fn ranges(&self) -> (Range<usize>, Range<usize>) {
        (self.a_range.clone(), self.b_range.clone())
    }
}

/// Lazily splits two sorted sequences into `p` ordered blocks.
///
/// Each call to `next` locates at most one boundary. The iterator yields
/// exactly `p` items and cannot be restarted.
pub struct Partitions<'a, T, F = fn(&T, &T) -> Ordering> {
    a: &'a [T],
    b: &'a [T],
    p: usize,
    /// index of the next partition to yield
    next: usize,
    start: Boundary,
    cmp: F,
}

/// Partitions `a` and `b` into `p` blocks.
///
/// Both sequences must be strictly increasing. This is only checked in debug
/// builds; use [partition_checked] to validate untrusted input.
pub fn partition<'a, T: Ord>(a: &'a [T], b: &'a [T], p: usize) -> Result<Partitions<'a, T>> {
    partition_by(a, b, p, T::cmp as fn(&T, &T) -> Ordering)
}

/// Like [partition], ordering elements with `cmp`.
pub fn partition_by<'a, T, F>(
    a: &'a [T],
    b: &'a [T],
    p: usize,
    mut cmp: F,
) -> Result<Partitions<'a, T, F>>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if p == 0 {
        return Err(PartitionError::ZeroPartitions);
    }
    debug_assert!(
        first_unordered_index_by(a, &mut cmp).is_none(),
        "sequence A must be strictly increasing"
    );
    debug_assert!(
        first_unordered_index_by(b, &mut cmp).is_none(),
        "sequence B must be strictly increasing"
    );
    Ok(Partitions::new(a, b, p, cmp))
}

/// Like [partition], but first verifies that both sequences are strictly
/// increasing.
pub fn partition_checked<'a, T: Ord>(
    a: &'a [T],
    b: &'a [T],
    p: usize,
) -> Result<Partitions<'a, T>> {
    partition_checked_by(a, b, p, T::cmp as fn(&T, &T) -> Ordering)
}

pub fn partition_checked_by<'a, T, F>(
    a: &'a [T],
    b: &'a [T],
    p: usize,
    mut cmp: F,
) -> Result<Partitions<'a, T, F>>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if p == 0 {
        return Err(PartitionError::ZeroPartitions);
    }
    if let Some(index) = first_unordered_index_by(a, &mut cmp) {
        return Err(PartitionError::NotStrictlyIncreasing { side: Side::A, index });
    }
    if let Some(index) = first_unordered_index_by(b, &mut cmp) {
        return Err(PartitionError::NotStrictlyIncreasing { side: Side::B, index });
    }
    Ok(Partitions::new(a, b, p, cmp))
}

impl<'a, T, F> Partitions<'a, T, F> {
    fn new(a: &'a [T], b: &'a [T], p: usize, cmp: F) -> Self {
        log::debug!(
            "partitioning {} + {} elements into {} blocks",
            a.len(),
            b.len(),
            p
        );
        Partitions {
            a,
            b,
            p,
            next: 0,
            start: Boundary::new(0, 0),
            cmp,
        }
    }
}

impl<'a, T, F> Debug for Partitions<'a, T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Partitions")
            .field("a_len", &self.a.len())
            .field("b_len", &self.b.len())
            .field("p", &self.p)
            .field("next", &self.next)
            .field("start", &self.start)
            .finish()
    }
}

impl<'a, T, F> Iterator for Partitions<'a, T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    type Item = Partition<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.p {
            return None;
        }

        let k = self.next + 1;
        let end = if k < self.p {
            locate_with(self.a, self.b, k, self.p, &mut self.cmp)
        } else {
            Boundary::new(self.a.len(), self.b.len())
        };

        let (a, b) = (self.a, self.b);
        let a_range = self.start.a..end.a;
        let b_range = self.start.b..end.b;
        let partition = Partition {
            index: self.next,
            a: &a[a_range.clone()],
            b: &b[b_range.clone()],
            a_range,
            b_range,
        };

        self.start = end;
        self.next = k;
        Some(partition)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.p - self.next;
        (remaining, Some(remaining))
    }
}

impl<'a, T, F> ExactSizeIterator for Partitions<'a, T, F> where F: FnMut(&T, &T) -> Ordering {}

impl<'a, T, F> FusedIterator for Partitions<'a, T, F> where F: FnMut(&T, &T) -> Ordering {}
