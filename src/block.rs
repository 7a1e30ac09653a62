//! Block descriptors.
//!
//! A [`Block`] encodes the location of one fixed-size byte range within a
//! pool's backing buffer. Descriptors are created once, when the pool
//! partitions its buffer at construction; acquire and release only move
//! them between the free set and the caller.

use std::fmt;

/// A non-owning handle to one block within a pool's backing buffer.
///
/// Describes the half-open byte range `[offset, offset + len)`. The bytes
/// themselves are owned by the pool; a `Block` is a capability to them,
/// cheap to copy and pass by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct Block {
    /// Byte offset within the pool's backing buffer.
    pub(crate) offset: u32,
    /// Length of the range in bytes.
    pub(crate) len: u32,
}

impl Block {
    /// Create a new descriptor. Only the pool partitions blocks.
    pub(crate) fn new(offset: u32, len: u32) -> Self {
        Self { offset, len }
    }

    /// Byte offset of this block within the pool's backing buffer.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Length of this block in bytes.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Whether this is a zero-length descriptor.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Block(off={}, len={})", self.offset, self.len)
    }
}
