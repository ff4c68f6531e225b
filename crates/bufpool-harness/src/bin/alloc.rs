//! Zeroed and pattern-filled allocation demonstration.

use bufpool_harness::{DemoError, run_alloc_demo};

fn main() -> Result<(), DemoError> {
    let report = run_alloc_demo()?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
