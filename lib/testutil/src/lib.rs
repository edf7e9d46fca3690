use std::cmp::Ordering;

use rand::{seq::index, Rng};

pub use assert_matches::assert_matches;
pub use assert_panic::assert_panic;

#[macro_export]
macro_rules! assert_ok {
    ( $e:expr ) => {
        $crate::assert_matches!($e, Ok(_))
    };
    ( $e:expr , $($arg:tt)*) => {
        $crate::assert_matches!($e, Ok(_), $($arg)*)
    };
}

/// sorted_intersection returns the values present in both inputs
/// requires that both inputs are sorted and free of duplicates
pub fn sorted_intersection<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                out.push(a[i].clone());
                i += 1;
                j += 1;
            }
        }
    }
    out
}

/// random_sorted_unique draws `n` distinct values from `0..universe` and
/// returns them in increasing order
pub fn random_sorted_unique<R: Rng + ?Sized>(rng: &mut R, universe: usize, n: usize) -> Vec<u32> {
    assert!(n <= universe, "cannot draw {} distinct values from {}", n, universe);
    let mut out: Vec<u32> = index::sample(rng, universe, n)
        .into_iter()
        .map(|i| i as u32)
        .collect();
    out.sort_unstable();
    out
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use crate::{random_sorted_unique, sorted_intersection};

    #[test]
    fn test_sorted_intersection() {
        let empty = [0; 0];

        assert_eq!(sorted_intersection(&[0], &[0]), vec![0]);
        assert_eq!(sorted_intersection(&[0, 1], &[1, 2]), vec![1]);
        assert_eq!(sorted_intersection(&[1, 2, 3], &[1, 2, 3]), vec![1, 2, 3]);
        assert_eq!(sorted_intersection(&[1, 3, 5, 7], &[0, 3, 4, 7, 9]), vec![3, 7]);

        assert_eq!(sorted_intersection(&[1, 2], &[3, 4]), empty);
        assert_eq!(sorted_intersection(&[1, 2], &empty), empty);
        assert_eq!(sorted_intersection(&empty, &empty), empty);
    }

    #[test]
    fn test_random_sorted_unique() {
        let mut rng = StdRng::seed_from_u64(7);
        let seq = random_sorted_unique(&mut rng, 50, 20);

        assert_eq!(seq.len(), 20);
        assert!(seq.windows(2).all(|w| w[0] < w[1]));
        assert!(seq.iter().all(|&v| v < 50));

        assert_eq!(random_sorted_unique(&mut rng, 10, 10), (0..10).collect::<Vec<u32>>());
        assert!(random_sorted_unique(&mut rng, 10, 0).is_empty());
    }
}
