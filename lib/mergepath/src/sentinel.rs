use std::cmp::Ordering;

/// A bounds-aware read from a sorted sequence.
///
/// Reads before the start of the sequence compare below every value and
/// reads at or past the end compare above every value. This lets the
/// boundary search step off either end without special cases and without
/// requiring the element type to have its own infinities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Bounded<'a, T> {
    Below,
    At(&'a T),
    Above,
}

impl<'a, T> Bounded<'a, T> {
    /// Reads `seq[idx]`, or `Above` if `idx` is out of range.
    pub(crate) fn at(seq: &'a [T], idx: usize) -> Self {
        seq.get(idx).map_or(Bounded::Above, Bounded::At)
    }

    /// Reads `seq[idx - 1]`, or `Below` if `idx` is zero.
    pub(crate) fn before(seq: &'a [T], idx: usize) -> Self {
        match idx.checked_sub(1) {
            None => Bounded::Below,
            Some(i) => Self::at(seq, i),
        }
    }

    pub(crate) fn cmp_by<F>(&self, other: &Self, cmp: &mut F) -> Ordering
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match (self, other) {
            (Bounded::At(x), Bounded::At(y)) => cmp(*x, *y),
            (Bounded::Below, Bounded::Below) | (Bounded::Above, Bounded::Above) => {
                Ordering::Equal
            }
            (Bounded::Below, _) | (_, Bounded::Above) => Ordering::Less,
            (Bounded::Above, _) | (_, Bounded::Below) => Ordering::Greater,
        }
    }
}
