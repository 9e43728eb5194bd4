//! Candidate selection: the inclusion predicate and run planning.
//!
//! Filtering is decoupled from discovery and process spawning so the
//! selection logic can be unit-tested without touching the filesystem.

use std::path::PathBuf;

/// A candidate list partitioned into the tests to execute and the tests to
/// report as skipped. Both halves preserve discovery order.
#[derive(Debug, Default)]
pub struct RunPlan {
    pub selected: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Decides whether a candidate path should run under the given filters.
///
/// With no filters every candidate runs, unless `invert` is set, in which
/// case nothing runs. With filters, a candidate runs when any filter is a
/// substring of its full path (case-sensitive); `invert` flips that
/// decision.
pub fn should_run(path: &str, filters: &[String], invert: bool) -> bool {
    if filters.is_empty() {
        return !invert;
    }
    let matches = filters.iter().any(|f| path.contains(f.as_str()));
    if invert {
        !matches
    } else {
        matches
    }
}

/// Partitions candidates into selected and skipped in one pass.
pub fn plan_run(candidates: Vec<PathBuf>, filters: &[String], invert: bool) -> RunPlan {
    let mut plan = RunPlan::default();
    for path in candidates {
        let path_str = path.to_string_lossy();
        if should_run(&path_str, filters, invert) {
            plan.selected.push(path);
        } else {
            plan.skipped.push(path);
        }
    }
    plan
}
