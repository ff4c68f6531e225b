//! Pooled vs fresh content-unspecified allocation demonstration.

use bufpool_harness::{DemoError, run_alloc_unsafe_demo};

fn main() -> Result<(), DemoError> {
    let (sizes, decoded) = run_alloc_unsafe_demo()?;
    println!("{}", serde_json::to_string_pretty(&sizes)?);
    println!("{}", serde_json::to_string_pretty(&decoded)?);
    Ok(())
}
