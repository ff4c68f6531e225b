//! Text encoding and decoding over raw buffer bytes.
//!
//! The facility uses a single fixed encoding (UTF-8). Decoding is lossy:
//! invalid sequences are replaced with U+FFFD per the encoding's
//! replacement rules, with no length or content validation.

/// Writes the UTF-8 bytes of `text` into the front of `dest`, truncating
/// at `dest.len()`. Bytes past the written prefix are left unchanged.
///
/// Truncation happens at the byte level; a multi-byte character split at
/// the boundary simply decodes lossily later.
///
/// Returns the number of bytes actually written.
pub fn encode_prefix(dest: &mut [u8], text: &str) -> usize {
    let src = text.as_bytes();
    let count = src.len().min(dest.len());
    dest[..count].copy_from_slice(&src[..count]);
    count
}

/// Decodes `bytes` as UTF-8, replacing invalid sequences with U+FFFD.
pub fn decode_utf8_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
