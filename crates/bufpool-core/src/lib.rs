//! # bufpool-core
//!
//! A pooled byte-buffer allocation facility in the style of a runtime's
//! buffer API: zero-initialized allocation, pattern-filled allocation,
//! content-unspecified allocation served from a shared recycling pool or
//! from a dedicated fresh allocation, prefix fill from text, and lossy
//! UTF-8 decoding.
//!
//! No `unsafe` code is permitted at the crate level. "Uninitialized"
//! buffers are modeled as recycled storage handed back without scrubbing:
//! the contents are whatever a previous pool user left behind, which is
//! exactly the information-leak hazard the real API carries.

#![deny(unsafe_code)]

pub mod alloc;
pub mod buffer;
pub mod encoding;
pub mod error;

pub use crate::alloc::pool::{BufferPool, PoolConfig, PoolEvent, PoolOp, PoolOutcome, PoolStats};
pub use crate::alloc::{
    MAX_LENGTH, POOL_SIZE, alloc_filled, alloc_uninit_fresh, alloc_uninit_pooled, alloc_zeroed,
};
pub use crate::buffer::{Buffer, FillValue};
pub use crate::encoding::{decode_utf8_lossy, encode_prefix};
pub use crate::error::AllocError;
