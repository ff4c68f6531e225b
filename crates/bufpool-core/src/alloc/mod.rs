//! Buffer allocation.
//!
//! Constructors for zeroed, pattern-filled, and content-unspecified
//! buffers. Content-unspecified allocation comes in two flavors mirroring
//! the runtime API it models:
//! - pooled: served from the shared recycling pool for sizes up to
//!   [`POOL_SIZE`], falling back to a dedicated allocation above it
//! - fresh: always a dedicated allocation, never recycled

pub mod pool;

use crate::buffer::{Buffer, FillValue};
use crate::error::AllocError;

use pool::BufferPool;

/// Size of the shared allocation pool in bytes.
///
/// Requests up to this size are pool-eligible. The value matches the
/// reference runtime's platform default.
pub const POOL_SIZE: usize = 8192;

/// Maximum allocatable buffer length.
pub const MAX_LENGTH: usize = u32::MAX as usize;

pub(crate) fn check_len(len: usize) -> Result<(), AllocError> {
    if len > MAX_LENGTH {
        return Err(AllocError::SizeTooLarge {
            requested: len,
            max: MAX_LENGTH,
        });
    }
    Ok(())
}

/// Allocates a buffer of `len` bytes with every byte zero.
pub fn alloc_zeroed(len: usize) -> Result<Buffer, AllocError> {
    check_len(len)?;
    Ok(Buffer::fresh(vec![0u8; len]))
}

/// Allocates a buffer of `len` bytes with every byte set to `value`.
///
/// Values wider than a byte are masked to their low 8 bits via
/// [`FillValue`].
pub fn alloc_filled(len: usize, value: impl Into<FillValue>) -> Result<Buffer, AllocError> {
    check_len(len)?;
    let byte = value.into().as_byte();
    Ok(Buffer::fresh(vec![byte; len]))
}

/// Allocates `len` bytes with unspecified contents from the shared pool.
///
/// Storage may be recycled from earlier pool allocations and can expose
/// whatever bytes a previous user wrote. Treat the contents as garbage
/// until overwritten; reading them as trusted data is the information
/// leak this operation deliberately demonstrates. The only guarantees are
/// length and mutability.
pub fn alloc_uninit_pooled(len: usize) -> Result<Buffer, AllocError> {
    BufferPool::global().allocate(len)
}

/// Allocates `len` bytes with unspecified contents in dedicated storage.
///
/// Never touches the pool: the storage belongs to this buffer alone and
/// is not recycled on drop. Contents carry no guarantee beyond length.
pub fn alloc_uninit_fresh(len: usize) -> Result<Buffer, AllocError> {
    check_len(len)?;
    Ok(Buffer::fresh(vec![0u8; len]))
}
