//! Structured report types serialized to stdout by the demo binaries.
//!
//! Key names match the original scripts' console output so the dumps are
//! comparable side by side.

use serde::Serialize;

use bufpool_core::Buffer;

/// Length plus hex preview of a buffer.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BufferDump {
    pub length: usize,
    pub preview: String,
}

impl From<&Buffer> for BufferDump {
    fn from(buf: &Buffer) -> Self {
        Self {
            length: buf.len(),
            preview: format!("{buf:?}"),
        }
    }
}

/// Output of the `alloc` driver.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocReport {
    pub zero_buf: BufferDump,
    pub hexa_fill: BufferDump,
    pub decimal_fill: BufferDump,
    pub alloc_and_fill: BufferDump,
    pub alloc_and_fill_str: String,
}

/// First half of the `alloc-unsafe` driver output: pool-size buffers.
#[derive(Debug, Clone, Serialize)]
pub struct UninitReport {
    pub safe: BufferDump,
    #[serde(rename = "unsafe")]
    pub uninit: BufferDump,
    #[serde(rename = "unsafeSlow")]
    pub uninit_slow: BufferDump,
}

/// Second half of the `alloc-unsafe` driver output: decoded text.
#[derive(Debug, Clone, Serialize)]
pub struct UninitDecodeReport {
    #[serde(rename = "unsafe")]
    pub uninit: String,
    #[serde(rename = "unsafeSlow")]
    pub uninit_slow: String,
}
