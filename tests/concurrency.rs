//! Integration test: no double-issuance under concurrent acquire/release churn.
//!
//! Spawns more threads than the pool has blocks and has each thread churn
//! acquire/release in a tight loop. A per-block "outstanding" flag catches
//! any block handed to two threads at once. Exhaustion is expected under
//! this contention and must leave the pool consistent.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use blockpool::{BlockPool, PoolError};

const BLOCK_SIZE: u32 = 64;
const BLOCK_COUNT: u32 = 4;
const THREADS: usize = 8;
const ITERS: usize = 2_000;

#[test]
fn concurrent_churn_never_double_issues() {
    let pool = Arc::new(BlockPool::new(BLOCK_COUNT * BLOCK_SIZE, BLOCK_SIZE).unwrap());
    let outstanding: Arc<Vec<AtomicBool>> = Arc::new(
        (0..BLOCK_COUNT).map(|_| AtomicBool::new(false)).collect(),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let pool = Arc::clone(&pool);
            let outstanding = Arc::clone(&outstanding);
            thread::spawn(move || {
                for _ in 0..ITERS {
                    let block = match pool.acquire() {
                        Ok(b) => b,
                        // Contention exceeds capacity; back off and retry.
                        Err(PoolError::Exhausted { .. }) => {
                            thread::yield_now();
                            continue;
                        }
                        Err(e) => panic!("unexpected acquire failure: {e}"),
                    };

                    let slot = (block.offset() / BLOCK_SIZE) as usize;
                    let was_outstanding = outstanding[slot].swap(true, Ordering::SeqCst);
                    assert!(
                        !was_outstanding,
                        "block at offset {} issued to two threads",
                        block.offset()
                    );

                    outstanding[slot].store(false, Ordering::SeqCst);
                    pool.release(block).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // Every block made it back: the pool drains exactly to capacity.
    assert_eq!(pool.free_count(), BLOCK_COUNT as usize);
    for _ in 0..BLOCK_COUNT {
        let _ = pool.acquire().unwrap();
    }
    assert!(matches!(
        pool.acquire(),
        Err(PoolError::Exhausted { .. })
    ));
}

#[test]
fn concurrent_drain_issues_each_block_once() {
    // Enough capacity for every thread to hold its blocks simultaneously,
    // so no acquire may fail and every offset must be unique.
    let per_thread = 8u32;
    let capacity = per_thread * THREADS as u32;
    let pool = Arc::new(BlockPool::new(capacity * BLOCK_SIZE, BLOCK_SIZE).unwrap());

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let pool = Arc::clone(&pool);
            thread::spawn(move || {
                (0..per_thread)
                    .map(|_| pool.acquire().unwrap().offset())
                    .collect::<Vec<u32>>()
            })
        })
        .collect();

    let mut offsets: Vec<u32> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();

    assert_eq!(offsets.len(), capacity as usize);
    offsets.sort_unstable();
    offsets.dedup();
    assert_eq!(offsets.len(), capacity as usize, "duplicate issuance");
    assert_eq!(pool.free_count(), 0);
}
