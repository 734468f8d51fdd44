//! Write the equation reference generated from the registry.
//!
//! ```bash
//! cargo run --bin gen-equations [OUTPUT]
//! ```
//!
//! OUTPUT defaults to `metabolic_core/src/EQUATIONS.md`, relative to the
//! workspace root, so the source links in the reference resolve.

use std::path::PathBuf;
use std::process::ExitCode;

use metabolic_core::equations::{generate_equations_markdown, ALL_EQUATIONS};

const DEFAULT_OUTPUT: &str = "metabolic_core/src/EQUATIONS.md";

fn main() -> ExitCode {
    let output = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    match std::fs::write(&output, generate_equations_markdown()) {
        Ok(()) => {
            println!("Documented {} equations in {}", ALL_EQUATIONS.len(), output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Cannot write {}: {}", output.display(), e);
            ExitCode::FAILURE
        }
    }
}
