//! Merge-path partitioning of two sorted sequences.
//!
//! [partition] splits a pair of strictly increasing sequences into `p`
//! ordered blocks. Every element of block `i` orders at or before every
//! element of block `i + 1`, and a value present in both sequences always
//! lands in a single block. Per-block work, such as intersecting the two
//! sides, can therefore run independently and be concatenated in block
//! order.
//!
//! ```
//! let a = [1, 2, 3, 7, 8, 9];
//! let b = [7, 10, 11, 13];
//!
//! let blocks: Vec<_> = mergepath::partition(&a, &b, 2)
//!     .unwrap()
//!     .map(|p| (p.a, p.b))
//!     .collect();
//!
//! assert_eq!(blocks, vec![(&a[..4], &b[..1]), (&a[4..], &b[1..])]);
//! ```

mod boundary;
mod error;
mod iter;
mod partition;
mod sentinel;

pub use boundary::{locate, locate_by, Boundary};
pub use error::{PartitionError, Result, Side};
pub use iter::{first_unordered_index, first_unordered_index_by};
pub use partition::{
    partition, partition_by, partition_checked, partition_checked_by, Partition, Partitions,
};
