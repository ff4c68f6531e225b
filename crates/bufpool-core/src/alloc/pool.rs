//! Shared recycling pool.
//!
//! Pool-eligible content-unspecified allocations are served from a
//! freelist of previously used slabs instead of fresh system allocations.
//! Recycled slabs are handed back without scrubbing, so a pooled buffer
//! can expose bytes written by an earlier user. That exposure is the
//! facility's documented hazard, not an accident.

use std::collections::VecDeque;
use std::sync::{Arc, OnceLock, Weak};

use parking_lot::Mutex;

use crate::buffer::Buffer;
use crate::error::AllocError;

use super::{POOL_SIZE, check_len};

/// Upper bound on retained lifecycle events; oldest entries drop first.
const EVENT_LOG_CAP: usize = 1024;

/// Pool tuning parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// Largest request served by the pool; bigger requests bypass it.
    pub pool_size: usize,
    /// Maximum number of slabs retained on the freelist.
    pub max_retained: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            pool_size: POOL_SIZE,
            max_retained: 8,
        }
    }
}

/// Counters describing pool traffic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Allocations served from a recycled slab.
    pub hits: u64,
    /// Pool-eligible allocations that needed new storage.
    pub misses: u64,
    /// Requests above `pool_size` served outside the pool.
    pub bypasses: u64,
    /// Slabs kept on the freelist at recycle time.
    pub retained: u64,
    /// Slabs released because the freelist was full.
    pub released: u64,
}

/// Pool operation recorded in the lifecycle event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolOp {
    Allocate,
    Recycle,
}

/// Outcome label for a lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolOutcome {
    Hit,
    Miss,
    Bypass,
    Retained,
    Released,
}

/// Structured pool lifecycle record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolEvent {
    /// Monotonic event id.
    pub seq: u64,
    pub op: PoolOp,
    /// Request or slab size in bytes.
    pub size: usize,
    pub outcome: PoolOutcome,
}

pub(crate) struct PoolInner {
    config: PoolConfig,
    free: Vec<Vec<u8>>,
    stats: PoolStats,
    events: VecDeque<PoolEvent>,
    next_seq: u64,
}

impl PoolInner {
    fn new(config: PoolConfig) -> Self {
        Self {
            config,
            free: Vec::new(),
            stats: PoolStats::default(),
            events: VecDeque::new(),
            next_seq: 1,
        }
    }

    fn record(&mut self, op: PoolOp, size: usize, outcome: PoolOutcome) {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        if self.events.len() == EVENT_LOG_CAP {
            self.events.pop_front();
        }
        self.events.push_back(PoolEvent {
            seq,
            op,
            size,
            outcome,
        });
    }

    /// Removes and returns the first retained slab that can hold `len`.
    fn take_slab(&mut self, len: usize) -> Option<Vec<u8>> {
        let idx = self.free.iter().position(|slab| slab.capacity() >= len)?;
        Some(self.free.swap_remove(idx))
    }

    /// Offers storage back to the pool; called from `Buffer::drop`.
    pub(crate) fn recycle(&mut self, bytes: Vec<u8>) {
        let capacity = bytes.capacity();
        if capacity == 0 {
            return;
        }
        if self.free.len() < self.config.max_retained && capacity <= self.config.pool_size {
            self.stats.retained += 1;
            self.record(PoolOp::Recycle, capacity, PoolOutcome::Retained);
            self.free.push(bytes);
        } else {
            self.stats.released += 1;
            self.record(PoolOp::Recycle, capacity, PoolOutcome::Released);
        }
    }
}

/// Where a buffer's storage came from; drives recycling on drop.
pub(crate) enum Origin {
    /// Dedicated allocation, freed normally.
    Fresh,
    /// Pool-managed storage, offered back to its pool on drop.
    Pooled(Weak<Mutex<PoolInner>>),
}

/// Shared recycling pool for content-unspecified allocations.
///
/// Cloning-free sharing happens through the internal `Arc`; buffers hold
/// a `Weak` back-reference so a dropped pool never leaks through
/// outstanding buffers.
pub struct BufferPool {
    inner: Arc<Mutex<PoolInner>>,
}

impl BufferPool {
    /// Creates a pool with the given configuration.
    pub fn new(config: PoolConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(PoolInner::new(config))),
        }
    }

    /// Creates a pool with the default configuration.
    pub fn with_defaults() -> Self {
        Self::new(PoolConfig::default())
    }

    /// Process-wide pool backing the facility free functions.
    pub fn global() -> &'static BufferPool {
        static GLOBAL: OnceLock<BufferPool> = OnceLock::new();
        GLOBAL.get_or_init(BufferPool::with_defaults)
    }

    /// Allocates `len` bytes with unspecified contents.
    ///
    /// Recycled storage keeps whatever bytes its previous user left
    /// behind; only the length is guaranteed. Requests above the
    /// configured pool size bypass the pool and are not recycled.
    pub fn allocate(&self, len: usize) -> Result<Buffer, AllocError> {
        check_len(len)?;
        let mut inner = self.inner.lock();

        if len > inner.config.pool_size {
            inner.stats.bypasses += 1;
            inner.record(PoolOp::Allocate, len, PoolOutcome::Bypass);
            return Ok(Buffer::fresh(vec![0u8; len]));
        }

        let origin = Origin::Pooled(Arc::downgrade(&self.inner));
        match inner.take_slab(len) {
            Some(mut slab) => {
                inner.stats.hits += 1;
                inner.record(PoolOp::Allocate, len, PoolOutcome::Hit);
                drop(inner);
                // Stale bytes up to the old length are preserved on
                // purpose; only growth within capacity is cleared.
                slab.resize(len, 0);
                Ok(Buffer::from_parts(slab, origin))
            }
            None => {
                inner.stats.misses += 1;
                inner.record(PoolOp::Allocate, len, PoolOutcome::Miss);
                drop(inner);
                Ok(Buffer::from_parts(vec![0u8; len], origin))
            }
        }
    }

    /// Snapshot of the traffic counters.
    pub fn stats(&self) -> PoolStats {
        self.inner.lock().stats
    }

    /// Number of slabs currently retained on the freelist.
    pub fn retained(&self) -> usize {
        self.inner.lock().free.len()
    }

    /// Drains the lifecycle event log.
    pub fn drain_events(&self) -> Vec<PoolEvent> {
        self.inner.lock().events.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miss_then_hit() {
        let pool = BufferPool::with_defaults();
        {
            let buf = pool.allocate(64).unwrap();
            assert_eq!(buf.len(), 64);
        }
        let stats = pool.stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.retained, 1);

        let buf = pool.allocate(64).unwrap();
        assert_eq!(buf.len(), 64);
        assert_eq!(pool.stats().hits, 1);
    }

    #[test]
    fn test_recycled_slab_exposes_previous_contents() {
        let pool = BufferPool::with_defaults();
        {
            let mut buf = pool.allocate(16).unwrap();
            buf.fill_with_text("leaky secret bye");
        }
        let buf = pool.allocate(12).unwrap();
        assert_eq!(&buf[..], &b"leaky secret"[..]);
    }

    #[test]
    fn test_hit_grows_within_capacity_clearing_extension() {
        let pool = BufferPool::with_defaults();
        {
            let mut buf = pool.allocate(16).unwrap();
            buf.fill(0xaau8);
        }
        {
            let buf = pool.allocate(8).unwrap();
            assert_eq!(buf[..], [0xaa; 8]);
        }
        // The slab came back truncated to 8; regrowing to 16 clears only
        // the extension.
        let buf = pool.allocate(16).unwrap();
        assert_eq!(buf[..8], [0xaa; 8]);
        assert_eq!(buf[8..], [0u8; 8]);
    }

    #[test]
    fn test_oversized_request_bypasses_pool() {
        let pool = BufferPool::with_defaults();
        {
            let buf = pool.allocate(POOL_SIZE + 1).unwrap();
            assert_eq!(buf.len(), POOL_SIZE + 1);
        }
        let stats = pool.stats();
        assert_eq!(stats.bypasses, 1);
        assert_eq!(stats.retained, 0);
        assert_eq!(pool.retained(), 0);
    }

    #[test]
    fn test_freelist_respects_max_retained() {
        let pool = BufferPool::new(PoolConfig {
            pool_size: 1024,
            max_retained: 2,
        });
        let bufs: Vec<_> = (0..4).map(|_| pool.allocate(32).unwrap()).collect();
        drop(bufs);

        assert_eq!(pool.retained(), 2);
        let stats = pool.stats();
        assert_eq!(stats.retained, 2);
        assert_eq!(stats.released, 2);
    }

    #[test]
    fn test_events_record_allocate_and_recycle() {
        let pool = BufferPool::with_defaults();
        drop(pool.allocate(8).unwrap());

        let events = pool.drain_events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].op, PoolOp::Allocate);
        assert_eq!(events[0].outcome, PoolOutcome::Miss);
        assert_eq!(events[0].size, 8);
        assert_eq!(events[1].op, PoolOp::Recycle);
        assert_eq!(events[1].outcome, PoolOutcome::Retained);
        assert!(events[0].seq < events[1].seq);
        assert!(pool.drain_events().is_empty());
    }

    #[test]
    fn test_buffer_outliving_pool_does_not_recycle() {
        let pool = BufferPool::with_defaults();
        let buf = pool.allocate(32).unwrap();
        drop(pool);
        drop(buf); // Weak back-reference is dead; nothing to panic over.
    }

    #[test]
    fn test_retained_never_exceeds_limit_under_mixed_trace() {
        fn lcg(state: &mut u64) -> u64 {
            *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            *state
        }

        let config = PoolConfig {
            pool_size: 2048,
            max_retained: 4,
        };
        let pool = BufferPool::new(config);
        let mut live: Vec<Buffer> = Vec::new();
        let mut rng = 0xDEAD_BEEF_0BAD_F00Du64;

        for _ in 0..1000 {
            let r = lcg(&mut rng);
            if r % 2 == 0 {
                let size = ((r >> 8) as usize % (config.pool_size * 2)).max(1);
                let buf = pool.allocate(size).unwrap();
                assert_eq!(buf.len(), size);
                live.push(buf);
            } else if !live.is_empty() {
                let idx = (r as usize) % live.len();
                live.swap_remove(idx);
            }
            assert!(pool.retained() <= config.max_retained);

            // Every hit consumes one previously retained slab.
            let stats = pool.stats();
            assert_eq!(pool.retained() as u64, stats.retained - stats.hits);
        }
    }
}
