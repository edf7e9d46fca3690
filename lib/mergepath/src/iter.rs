use std::cmp::Ordering;

/// first_unordered_index_by returns the index of the first element that does
/// not order strictly after its predecessor, or None if the whole sequence is
/// strictly increasing.
pub fn first_unordered_index_by<T, F>(seq: &[T], mut cmp: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    seq.windows(2)
        .position(|w| cmp(&w[0], &w[1]) != Ordering::Less)
        .map(|i| i + 1)
}

pub fn first_unordered_index<T: Ord>(seq: &[T]) -> Option<usize> {
    first_unordered_index_by(seq, T::cmp)
}
