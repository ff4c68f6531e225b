//! Demonstration drivers for the bufpool allocation facility.
//!
//! Two drivers mirror the original demonstration scripts:
//! - `alloc`: zeroed, pattern-filled, and text-filled allocation
//! - `alloc-unsafe`: pooled vs fresh content-unspecified allocation
//!
//! The report builders live apart from the binaries so integration tests
//! can assert the exact structured output without spawning processes.

#![forbid(unsafe_code)]

pub mod demo;
pub mod error;
pub mod report;

pub use demo::{DECODE_DEMO_LEN, run_alloc_demo, run_alloc_unsafe_demo};
pub use error::DemoError;
pub use report::{AllocReport, BufferDump, UninitDecodeReport, UninitReport};
