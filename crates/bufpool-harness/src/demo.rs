//! Demonstration sequences, literal arguments and all.

use bufpool_core::{POOL_SIZE, alloc_filled, alloc_uninit_fresh, alloc_uninit_pooled, alloc_zeroed};

use crate::error::DemoError;
use crate::report::{AllocReport, BufferDump, UninitDecodeReport, UninitReport};

/// Size of the buffers decoded as text in the `alloc-unsafe` driver.
pub const DECODE_DEMO_LEN: usize = 300;

/// Runs the zeroed/filled allocation demonstration (`alloc` driver).
pub fn run_alloc_demo() -> Result<AllocReport, DemoError> {
    let zero_buf = alloc_zeroed(20)?;
    let hexa_fill = alloc_filled(20, 0b100u32)?;
    let decimal_fill = alloc_filled(1, 4u8)?;
    let mut alloc_and_fill = alloc_zeroed(5)?;
    alloc_and_fill.fill_with_text("Hello");

    Ok(AllocReport {
        zero_buf: BufferDump::from(&zero_buf),
        hexa_fill: BufferDump::from(&hexa_fill),
        decimal_fill: BufferDump::from(&decimal_fill),
        alloc_and_fill_str: alloc_and_fill.to_text(),
        alloc_and_fill: BufferDump::from(&alloc_and_fill),
    })
}

/// Runs the pooled/fresh content-unspecified demonstration
/// (`alloc-unsafe` driver): three pool-size buffers, then two 300-byte
/// buffers decoded as text.
pub fn run_alloc_unsafe_demo() -> Result<(UninitReport, UninitDecodeReport), DemoError> {
    let safe = alloc_zeroed(POOL_SIZE)?;
    let uninit = alloc_uninit_pooled(POOL_SIZE)?;
    let uninit_slow = alloc_uninit_fresh(POOL_SIZE)?;
    let sizes = UninitReport {
        safe: BufferDump::from(&safe),
        uninit: BufferDump::from(&uninit),
        uninit_slow: BufferDump::from(&uninit_slow),
    };

    let pooled = alloc_uninit_pooled(DECODE_DEMO_LEN)?;
    let fresh = alloc_uninit_fresh(DECODE_DEMO_LEN)?;
    let decoded = UninitDecodeReport {
        uninit: pooled.to_text(),
        uninit_slow: fresh.to_text(),
    };

    Ok((sizes, decoded))
}
