//! The unified, `miette`-based diagnostic system for the runner.
//!
//! Fatal conditions are represented by [`RunnerError`] and rendered once at
//! the CLI boundary. A failing test executable is not an error value here:
//! the execution loop reports it inline and propagates its exit code.

use std::path::Path;

use miette::Diagnostic;
use thiserror::Error;

/// Fatal errors that abort a run before or during execution.
#[derive(Debug, Error, Diagnostic)]
pub enum RunnerError {
    /// The test directory could not be listed.
    #[error("failed to list test directory '{dir}'")]
    #[diagnostic(
        code(testrun::discovery),
        help("expected pre-built test executables under '{dir}'")
    )]
    Discovery {
        dir: String,
        #[source]
        source: walkdir::Error,
    },

    /// A selected test executable could not be launched.
    #[error("failed to launch test executable '{path}'")]
    #[diagnostic(code(testrun::spawn))]
    Spawn {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl RunnerError {
    pub fn discovery(dir: &Path, source: walkdir::Error) -> Self {
        Self::Discovery {
            dir: dir.display().to_string(),
            source,
        }
    }

    pub fn spawn(path: &Path, source: std::io::Error) -> Self {
        Self::Spawn {
            path: path.display().to_string(),
            source,
        }
    }
}
