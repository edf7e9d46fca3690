use std::fmt;

use thiserror::Error;

/// Identifies one of the two input sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => f.write_str("A"),
            Side::B => f.write_str("B"),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PartitionError {
    #[error("partition count must be >= 1")]
    ZeroPartitions,

    #[error("sequence {side} is not strictly increasing at index {index}")]
    NotStrictlyIncreasing { side: Side, index: usize },
}

pub type Result<T, E = PartitionError> = std::result::Result<T, E>;
