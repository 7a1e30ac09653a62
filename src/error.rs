//! Pool-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during pool operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PoolError {
    /// The pool sizes are unusable — zero, or not an exact partition.
    InvalidConfiguration {
        /// Requested total buffer size in bytes.
        pool_size: u32,
        /// Requested per-block size in bytes.
        block_size: u32,
    },
    /// No free blocks remain; every block is currently outstanding.
    Exhausted {
        /// Total number of blocks in the pool.
        capacity: u32,
    },
    /// A released descriptor's length does not match the pool's block size.
    InvalidBlock {
        /// The pool's fixed block size.
        expected: u32,
        /// The length carried by the rejected descriptor.
        actual: u32,
    },
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration {
                pool_size,
                block_size,
            } => {
                write!(
                    f,
                    "invalid pool configuration: pool size {pool_size} is not a positive multiple of block size {block_size}"
                )
            }
            Self::Exhausted { capacity } => {
                write!(f, "pool exhausted: all {capacity} blocks outstanding")
            }
            Self::InvalidBlock { expected, actual } => {
                write!(
                    f,
                    "invalid block: expected length {expected}, got {actual}"
                )
            }
        }
    }
}

impl Error for PoolError {}
