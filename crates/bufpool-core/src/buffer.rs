//! The fixed-length byte buffer type.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::alloc::pool::Origin;
use crate::encoding;

/// Maximum number of bytes shown by the `Debug` hex preview.
const DEBUG_PREVIEW_BYTES: usize = 50;

/// A fixed-length, mutable, contiguous sequence of bytes.
///
/// The length is fixed at creation and never changes; no operation grows
/// or shrinks a buffer. Buffers dereference to `[u8]` for indexing and
/// slicing. Pool-originated buffers offer their storage back to the pool
/// when dropped.
pub struct Buffer {
    bytes: Vec<u8>,
    origin: Origin,
}

impl Buffer {
    /// Wraps a dedicated allocation; storage is freed normally on drop.
    pub(crate) fn fresh(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            origin: Origin::Fresh,
        }
    }

    /// Wraps storage with an explicit origin (pool-managed or fresh).
    pub(crate) fn from_parts(bytes: Vec<u8>, origin: Origin) -> Self {
        Self { bytes, origin }
    }

    /// Length of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` for zero-length buffers.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Immutable view of the buffer's bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Mutable view of the buffer's bytes.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Overwrites every byte with `value`.
    pub fn fill(&mut self, value: impl Into<FillValue>) -> &mut Self {
        let byte = value.into().as_byte();
        self.bytes.fill(byte);
        self
    }

    /// Writes the UTF-8 bytes of `text` at index 0, truncating at the
    /// buffer length. Bytes beyond the written prefix are unchanged.
    ///
    /// Returns the buffer itself so fills can chain onto allocation.
    pub fn fill_with_text(&mut self, text: &str) -> &mut Self {
        encoding::encode_prefix(&mut self.bytes, text);
        self
    }

    /// Decodes the buffer's bytes as UTF-8, lossily.
    pub fn to_text(&self) -> String {
        encoding::decode_utf8_lossy(&self.bytes)
    }
}

impl Deref for Buffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl DerefMut for Buffer {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl PartialEq for Buffer {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for Buffer {}

impl PartialEq<[u8]> for Buffer {
    fn eq(&self, other: &[u8]) -> bool {
        self.bytes == other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for Buffer {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.bytes == other
    }
}

/// Renders a hex preview in the reference runtime's inspect style:
/// `<Buffer 00 01 ...>`, capped at 50 bytes with a trailing byte count.
impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Buffer")?;
        for byte in self.bytes.iter().take(DEBUG_PREVIEW_BYTES) {
            write!(f, " {byte:02x}")?;
        }
        if self.bytes.len() > DEBUG_PREVIEW_BYTES {
            write!(f, " ... {} more bytes", self.bytes.len() - DEBUG_PREVIEW_BYTES)?;
        }
        write!(f, ">")
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        if let Origin::Pooled(weak) = &self.origin {
            if let Some(inner) = weak.upgrade() {
                let bytes = std::mem::take(&mut self.bytes);
                inner.lock().recycle(bytes);
            }
        }
    }
}

/// A single fill byte.
///
/// Constructed from wider integer types by keeping the low 8 bits, the
/// masking behavior the reference runtime applies to out-of-range fill
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillValue(u8);

impl FillValue {
    /// The byte this fill value writes.
    pub const fn as_byte(self) -> u8 {
        self.0
    }
}

impl From<u8> for FillValue {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<u16> for FillValue {
    fn from(value: u16) -> Self {
        Self(value as u8)
    }
}

impl From<u32> for FillValue {
    fn from(value: u32) -> Self {
        Self(value as u8)
    }
}

impl From<u64> for FillValue {
    fn from(value: u64) -> Self {
        Self(value as u8)
    }
}

impl From<usize> for FillValue {
    fn from(value: usize) -> Self {
        Self(value as u8)
    }
}

impl From<i32> for FillValue {
    fn from(value: i32) -> Self {
        Self(value as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::alloc_zeroed;

    #[test]
    fn test_fill_overwrites_every_byte() {
        let mut buf = alloc_zeroed(8).unwrap();
        buf.fill(0xabu8);
        assert_eq!(buf, [0xab; 8]);
    }

    #[test]
    fn test_fill_with_text_exact_fit() {
        let mut buf = alloc_zeroed(5).unwrap();
        buf.fill_with_text("Hello");
        assert_eq!(buf.to_text(), "Hello");
    }

    #[test]
    fn test_fill_with_text_truncates_at_length() {
        let mut buf = alloc_zeroed(5).unwrap();
        buf.fill_with_text("Hello World");
        assert_eq!(buf.to_text(), "Hello");
        assert_eq!(buf.len(), 5);
    }

    #[test]
    fn test_fill_with_text_leaves_trailing_bytes() {
        let mut buf = alloc_zeroed(8).unwrap();
        buf.fill(0xffu8).fill_with_text("Hi");
        assert_eq!(buf, *b"Hi\xff\xff\xff\xff\xff\xff");
    }

    #[test]
    fn test_length_is_fixed() {
        let mut buf = alloc_zeroed(5).unwrap();
        buf.fill_with_text("Hello World");
        buf.fill(1u8);
        assert_eq!(buf.len(), 5);
    }

    #[test]
    fn test_debug_preview_small() {
        let mut buf = alloc_zeroed(3).unwrap();
        buf.as_mut_slice()[1] = 0x04;
        assert_eq!(format!("{buf:?}"), "<Buffer 00 04 00>");
    }

    #[test]
    fn test_debug_preview_caps_at_fifty_bytes() {
        let buf = alloc_zeroed(60).unwrap();
        let dump = format!("{buf:?}");
        assert!(dump.ends_with("... 10 more bytes>"));
        assert_eq!(dump.matches("00").count(), 50);
    }

    #[test]
    fn test_fill_value_masks_low_eight_bits() {
        assert_eq!(FillValue::from(0b100u32).as_byte(), 4);
        assert_eq!(FillValue::from(260u32).as_byte(), 4);
        assert_eq!(FillValue::from(0x1_ffu64).as_byte(), 0xff);
        assert_eq!(FillValue::from(-1i32).as_byte(), 0xff);
    }

    #[test]
    fn test_deref_indexing() {
        let mut buf = alloc_zeroed(4).unwrap();
        buf[2] = 7;
        assert_eq!(buf[2], 7);
        assert_eq!(&buf[..2], &[0, 0]);
    }
}
