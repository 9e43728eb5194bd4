//! Defines the command-line arguments for the testrun CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::Parser;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "testrun",
    version,
    about = "Run pre-built test executables and stop on the first failure."
)]
pub struct RunnerArgs {
    /// Test name substrings to match (default: run all tests).
    pub tests: Vec<String>,

    /// Invert selection: exclude matching tests instead of including them.
    #[arg(short = 'v', long = "invert")]
    pub invert: bool,
}
