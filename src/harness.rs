//! Test execution harness.
//!
//! Runs the planned test executables one at a time in discovery order,
//! stops at the first failure, and prints the final summary. Children
//! inherit the runner's standard streams and run with no arguments; the
//! exit code is the only signal consulted.

use std::path::PathBuf;
use std::process::Command;

use crate::diagnostics::RunnerError;
use crate::selection::RunPlan;

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Configuration for test execution and reporting.
pub struct RunnerConfig {
    /// Directory holding the pre-built test executables.
    pub test_dir: PathBuf,
    /// Whether to colorize status words on stdout.
    pub use_colors: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            test_dir: PathBuf::from("Debug/test"),
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

// Color constants for terminal output
const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";

impl RunnerConfig {
    /// Apply color formatting to text if colors are enabled.
    pub fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }
}

// =============================================================================
// EXECUTION LOOP
// =============================================================================

/// Terminal state of a run.
#[derive(Debug)]
pub enum RunStatus {
    /// Every selected test exited zero (or nothing was selected).
    Completed {
        passed: Vec<PathBuf>,
        skipped: Vec<PathBuf>,
    },
    /// A test exited non-zero; `code` becomes the process exit code.
    Failed { path: PathBuf, code: i32 },
}

/// Runs the selected tests sequentially, aborting at the first failure.
///
/// Each child is awaited before the next one starts. There is no timeout:
/// a hung test blocks the run.
pub fn run_plan(plan: RunPlan, config: &RunnerConfig) -> Result<RunStatus, RunnerError> {
    let mut passed = Vec::new();

    for path in plan.selected {
        println!("==> running {}", path.display());

        let status = Command::new(&path)
            .status()
            .map_err(|e| RunnerError::spawn(&path, e))?;

        if !status.success() {
            // A signal-killed child has no exit code; report it as 1.
            let code = status.code().unwrap_or(1);
            println!(
                "{}: {} (exit code {})",
                config.colorize("FAIL", RED),
                path.display(),
                code
            );
            return Ok(RunStatus::Failed { path, code });
        }

        passed.push(path);
    }

    Ok(RunStatus::Completed {
        passed,
        skipped: plan.skipped,
    })
}

// =============================================================================
// SUMMARY REPORTING
// =============================================================================

/// Prints the final summary and returns the process exit code: 0 when at
/// least one test passed, 1 when nothing ran.
pub fn report_summary(passed: &[PathBuf], skipped: &[PathBuf], config: &RunnerConfig) -> i32 {
    if passed.is_empty() {
        println!("{}", config.colorize("NO TESTS RUN", YELLOW));
        report_skipped(skipped, config);
        return 1;
    }

    println!("{}", config.colorize("ALL TESTS PASSED", GREEN));
    report_skipped(skipped, config);
    0
}

fn report_skipped(skipped: &[PathBuf], config: &RunnerConfig) {
    if skipped.is_empty() {
        return;
    }
    println!();
    println!("{}", config.colorize("SKIPPED TESTS:", YELLOW));
    for path in skipped {
        println!("  {}", path.display());
    }
}
