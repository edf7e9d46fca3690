use std::{cmp::Ordering, fmt::Debug};

use crate::sentinel::Bounded;

/// A co-rank: the offsets into each sequence at which a partition boundary
/// falls. Everything before `(a, b)` orders before everything after it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    /// offset into the first sequence, exclusive end of the left side
    pub a: usize,
    /// offset into the second sequence, exclusive end of the left side
    pub b: usize,
}

impl Boundary {
    pub fn new(a: usize, b: usize) -> Self {
        Boundary { a, b }
    }

    /// Returns the position of this boundary along the merge path.
    pub fn diag(&self) -> usize {
        self.a + self.b
    }

    fn swap(self) -> Self {
        Boundary::new(self.b, self.a)
    }
}

impl Debug for Boundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Boundary")
            .field(&self.a)
            .field(&self.b)
            .finish()
    }
}

/// Locates the `k`-th of the `p - 1` internal boundaries between two
/// strictly increasing sequences.
///
/// The target diagonal is `k * ((a.len() + b.len()) / p)`. If a value
/// occurring in both sequences would straddle that diagonal, the boundary
/// moves one step forward so that both copies land on the left side.
///
/// Panics unless `p >= 2` and `1 <= k < p`.
pub fn locate<T: Ord>(a: &[T], b: &[T], k: usize, p: usize) -> Boundary {
    locate_by(a, b, k, p, T::cmp)
}

/// Like [locate], ordering elements with `cmp`.
pub fn locate_by<T, F>(a: &[T], b: &[T], k: usize, p: usize, mut cmp: F) -> Boundary
where
    F: FnMut(&T, &T) -> Ordering,
{
    locate_with(a, b, k, p, &mut cmp)
}

pub(crate) fn locate_with<T, F>(a: &[T], b: &[T], k: usize, p: usize, cmp: &mut F) -> Boundary
where
    F: FnMut(&T, &T) -> Ordering,
{
    assert!(p >= 2, "p must be >= 2, got {}", p);
    assert!(k >= 1 && k < p, "k must be in 1..p, got k={} p={}", k, p);

    let diag = k * ((a.len() + b.len()) / p);

    // the search always runs along the longer sequence
    let boundary = if b.len() > a.len() {
        search(b, a, diag, cmp).swap()
    } else {
        search(a, b, diag, cmp)
    };

    log::trace!("boundary {}/{} at {:?}", k, p, boundary);
    boundary
}

/// Binary searches for the smallest offset `ai` into `primary` such that
/// `primary[ai] > secondary[diag - ai - 1]`, then checks the mirrored
/// condition on the other side of the diagonal.
fn search<T, F>(primary: &[T], secondary: &[T], mut diag: usize, cmp: &mut F) -> Boundary
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut top = diag.min(primary.len());
    let mut bottom = diag.saturating_sub(primary.len());
    let mut adjusted = false;

    loop {
        let ai = (top + bottom) / 2;
        let bi = diag - ai;

        let past_left = Bounded::at(primary, ai).cmp_by(&Bounded::before(secondary, bi), cmp);
        if past_left != Ordering::Greater {
            bottom = ai + 1;
            continue;
        }

        match Bounded::before(primary, ai).cmp_by(&Bounded::at(secondary, bi), cmp) {
            Ordering::Less => return Boundary::new(ai, bi),
            Ordering::Equal => {
                // only reachable once, since neither sequence repeats a value
                debug_assert!(!adjusted, "diagonal adjusted twice; input has duplicates");
                adjusted = true;
                log::debug!("equal value straddles diagonal {}, moving to {}", diag, diag + 1);
                diag += 1;
            }
            Ordering::Greater => top = ai - 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use testutil::assert_panic;

    use super::{locate, locate_by, Boundary};

    #[test]
    #[should_panic(expected = "p must be >= 2")]
    fn locate_single_partition() {
        locate(&[1, 2], &[3], 1, 1);
    }

    #[test]
    #[should_panic(expected = "k must be in 1..p")]
    fn locate_k_zero() {
        locate(&[1, 2], &[3], 0, 2);
    }

    #[test]
    fn locate_k_out_of_range() {
        assert_panic!(
            { locate(&[1, 2], &[3], 3, 3); },
            String,
            starts with "k must be in 1..p"
        );
        assert_panic!(
            { locate(&[1, 2], &[3], 7, 3); },
            String,
            starts with "k must be in 1..p"
        );
    }

    #[test]
    fn boundary_diag() {
        assert_eq!(Boundary::new(0, 0).diag(), 0);
        assert_eq!(Boundary::new(4, 1).diag(), 5);
        assert_eq!(format!("{:?}", Boundary::new(4, 1)), "Boundary(4, 1)");
    }

    #[test]
    fn locate_unique() {
        let a = [1, 2, 3, 5, 8, 9];
        let b = [4, 6, 7, 11, 13];

        macro_rules! t {
            ($k:expr, $p:expr, ($ea:expr, $eb:expr)) => {
                assert_eq!(
                    locate(&a, &b, $k, $p),
                    Boundary::new($ea, $eb),
                    "k={} p={}",
                    $k,
                    $p
                );
            };
        }

        t!(1, 2, (4, 1));
        t!(1, 3, (3, 0));
        t!(2, 3, (4, 2));
        t!(1, 4, (2, 0));
        t!(2, 4, (3, 1));
        t!(3, 4, (4, 2));
        t!(4, 5, (5, 3));
    }

    #[test]
    fn locate_equal_straddle() {
        let a = [1, 2, 3, 7, 8, 9];
        let b = [7, 10, 11, 13];

        // diagonal 4 would split the two 7s, so the boundary lands on 5
        let boundary = locate(&a, &b, 2, 4);
        assert_eq!(boundary, Boundary::new(4, 1));
        assert_eq!(boundary.diag(), 5);

        // no straddle at diagonal 5
        assert_eq!(locate(&a, &b, 1, 2), Boundary::new(4, 1));
    }

    #[test]
    fn locate_shorter_first() {
        let a = [8];
        let b = [4, 6, 7, 11, 13];

        assert_eq!(locate(&a, &b, 1, 2), Boundary::new(0, 3));
        assert_eq!(locate(&a, &b, 1, 3), Boundary::new(0, 2));
        assert_eq!(locate(&a, &b, 2, 3), Boundary::new(1, 3));

        // swapping the inputs swaps the result
        assert_eq!(locate(&b, &a, 1, 2), Boundary::new(3, 0));
    }

    #[test]
    fn locate_equal_lengths() {
        assert_eq!(locate(&[1, 3, 5], &[2, 4, 6], 1, 2), Boundary::new(2, 1));
        assert_eq!(locate(&[2, 4, 6], &[1, 3, 5], 1, 2), Boundary::new(1, 2));
    }

    #[test]
    fn locate_empty() {
        let empty: [u32; 0] = [];
        assert_eq!(locate(&[1, 2, 3, 4], &empty, 1, 2), Boundary::new(2, 0));
        assert_eq!(locate(&empty, &[1, 2, 3, 4], 1, 2), Boundary::new(0, 2));
        assert_eq!(locate(&empty, &empty, 1, 3), Boundary::new(0, 0));
        assert_eq!(locate(&empty, &empty, 2, 3), Boundary::new(0, 0));
    }

    #[test]
    fn locate_by_reverse_order() {
        let a = [9, 8, 5, 3, 2, 1];
        let b = [13, 11, 7, 6, 4];
        let boundary = locate_by(&a, &b, 1, 2, |x: &i32, y: &i32| y.cmp(x));

        // left side holds the largest values
        assert_eq!(boundary, Boundary::new(2, 3));
        assert!(a[..boundary.a]
            .iter()
            .chain(&b[..boundary.b])
            .all(|x| a[boundary.a..].iter().chain(&b[boundary.b..]).all(|y| x > y)));
    }
}
