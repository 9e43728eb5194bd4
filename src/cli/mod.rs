//! The testrun command-line interface.
//!
//! This module is the main entry point for the CLI and orchestrates the
//! discovery, selection, and execution pipeline.

use std::process;

use clap::Parser;

use crate::cli::args::RunnerArgs;
use crate::diagnostics::RunnerError;
use crate::discovery;
use crate::harness::{self, RunStatus, RunnerConfig};
use crate::selection;

pub mod args;

/// The main entry point for the CLI.
pub fn run() {
    let args = RunnerArgs::parse();
    let config = RunnerConfig::default();

    match execute(&args, &config) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            process::exit(1);
        }
    }
}

/// Runs the full pipeline and returns the process exit code.
fn execute(args: &RunnerArgs, config: &RunnerConfig) -> Result<i32, RunnerError> {
    let candidates = discovery::discover_candidates(&config.test_dir)?;
    let plan = selection::plan_run(candidates, &args.tests, args.invert);

    match harness::run_plan(plan, config)? {
        RunStatus::Failed { code, .. } => Ok(code),
        RunStatus::Completed { passed, skipped } => {
            Ok(harness::report_summary(&passed, &skipped, config))
        }
    }
}
