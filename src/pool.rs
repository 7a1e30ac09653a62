//! The fixed-block pool allocator.
//!
//! A [`BlockPool`] owns a zero-initialised backing buffer, partitioned at
//! construction into equally-sized blocks. Acquire and release move
//! existing [`Block`] descriptors between the free set and the caller;
//! no descriptor is created after construction.

use std::sync::Mutex;

use crate::block::Block;
use crate::error::PoolError;

/// A fixed-capacity pool of equally-sized blocks over one contiguous buffer.
///
/// The free set is guarded by a mutex, so a single pool can be shared
/// across threads: no two callers can acquire the same block, and
/// concurrent releases are never lost. Block *contents* are not guarded —
/// the pool hands out exclusive descriptors, nothing more.
pub struct BlockPool {
    /// Backing storage. Allocated to full capacity at creation, never resized.
    data: Vec<u8>,
    /// Fixed size of every block in bytes.
    block_size: u32,
    /// Blocks currently available, most-recently-freed last.
    free: Mutex<Vec<Block>>,
}

impl BlockPool {
    /// Create a pool of `pool_size` bytes partitioned into `block_size` blocks.
    ///
    /// The backing buffer is zero-initialised and the free set is populated
    /// with descriptors at offsets `0, block_size, 2 * block_size, …` in
    /// ascending order.
    ///
    /// Returns [`PoolError::InvalidConfiguration`] when either size is zero
    /// or `pool_size` is not an exact multiple of `block_size`.
    pub fn new(pool_size: u32, block_size: u32) -> Result<Self, PoolError> {
        if pool_size == 0 || block_size == 0 || pool_size % block_size != 0 {
            return Err(PoolError::InvalidConfiguration {
                pool_size,
                block_size,
            });
        }

        let free = (0..pool_size)
            .step_by(block_size as usize)
            .map(|offset| Block::new(offset, block_size))
            .collect();

        Ok(Self {
            data: vec![0; pool_size as usize],
            block_size,
            free: Mutex::new(free),
        })
    }

    /// Take a block from the pool.
    ///
    /// Pops from the end of the free set, so the most recently released
    /// block is issued first (LIFO). The returned descriptor is outstanding
    /// and will not be issued again until it is released.
    ///
    /// Returns [`PoolError::Exhausted`] when no free blocks remain; the
    /// pool's state is unchanged by the failed call.
    pub fn acquire(&self) -> Result<Block, PoolError> {
        let mut free = self.free.lock().unwrap();
        free.pop().ok_or(PoolError::Exhausted {
            capacity: self.block_count(),
        })
    }

    /// Return a block to the pool, making it eligible for a future acquire.
    ///
    /// Only the descriptor's length is checked. The pool does NOT verify
    /// that the block was issued by this pool or is not already free:
    /// releasing a forged descriptor, or the same descriptor twice without
    /// re-acquiring it, inserts a duplicate free-set entry and corrupts the
    /// pool's partition invariant. Callers own that contract.
    ///
    /// Returns [`PoolError::InvalidBlock`] when `block.len()` does not
    /// match the pool's block size; the free set is left unchanged.
    pub fn release(&self, block: Block) -> Result<(), PoolError> {
        if block.len() != self.block_size {
            return Err(PoolError::InvalidBlock {
                expected: self.block_size,
                actual: block.len(),
            });
        }
        self.free.lock().unwrap().push(block);
        Ok(())
    }

    /// The fixed block size in bytes.
    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Total number of blocks the buffer is partitioned into.
    pub fn block_count(&self) -> u32 {
        (self.data.len() / self.block_size as usize) as u32
    }

    /// Number of blocks currently free. Takes the free-set lock.
    pub fn free_count(&self) -> usize {
        self.free.lock().unwrap().len()
    }

    /// Memory usage of the backing buffer in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len()
    }

    /// Get a shared view of a block's bytes.
    ///
    /// # Panics
    ///
    /// Panics if the block's range exceeds the backing buffer.
    pub fn bytes(&self, block: Block) -> &[u8] {
        let start = block.offset() as usize;
        let end = start + block.len() as usize;
        &self.data[start..end]
    }

    /// Get an exclusive view of a block's bytes.
    ///
    /// Takes `&mut self`: concurrent writers of block contents must bring
    /// their own synchronisation, as the pool only serialises the free set.
    ///
    /// # Panics
    ///
    /// Panics if the block's range exceeds the backing buffer.
    pub fn bytes_mut(&mut self, block: Block) -> &mut [u8] {
        let start = block.offset() as usize;
        let end = start + block.len() as usize;
        &mut self.data[start..end]
    }
}
