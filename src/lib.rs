//! Fixed-block memory pool allocation.
//!
//! A [`BlockPool`] reserves one contiguous byte buffer at construction and
//! hands out equally-sized [`Block`] descriptors from it, avoiding
//! per-allocation overhead for workloads that repeatedly acquire and
//! release same-size units.
//!
//! # Architecture
//!
//! ```text
//! BlockPool
//! ├── Vec<u8> (zero-initialised backing buffer, never resized)
//! └── Mutex<Vec<Block>> (free set, most-recently-freed last)
//! ```
//!
//! The pool is strictly single-size-class: the buffer is partitioned into
//! `pool_size / block_size` blocks at construction and blocks are never
//! split, coalesced, or added later. [`BlockPool::acquire`] pops from the
//! end of the free set, so the most recently released block is the next
//! one issued.
//!
//! # Concurrency
//!
//! `acquire` and `release` take `&self` and serialise on the free-set
//! mutex, so a single pool can be shared across threads. The pool only
//! guarantees exclusive issuance of descriptors; synchronising access to
//! the *contents* of an acquired block is the caller's responsibility.
//!
//! ```
//! use blockpool::BlockPool;
//!
//! let pool = BlockPool::new(1024, 128)?;
//! let block = pool.acquire()?;
//! assert_eq!(block.len(), 128);
//! pool.release(block)?;
//! # Ok::<(), blockpool::PoolError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod block;
pub mod error;
pub mod pool;

// Public re-exports for the primary API surface.
pub use block::Block;
pub use error::PoolError;
pub use pool::BlockPool;
