//! One full pass: discover, then process every candidate in order.

use crate::discovery::discover;
use crate::execute::{process_candidate, CandidateReport, Outcome};
use crate::options::RenameOptions;
use crate::summary::RunSummary;
use anyhow::Result;
use std::path::Path;

/// Rename every candidate under `root`, calling `on_report` after each one.
///
/// Per-file failures are counted in the summary; only a traversal error
/// returns `Err`, and in that case nothing has been renamed yet.
pub fn run<F>(root: &Path, opts: &RenameOptions, mut on_report: F) -> Result<RunSummary>
where
    F: FnMut(&CandidateReport),
{
    tracing::info!(
        root = %root.display(),
        include_jpeg = opts.include_jpeg,
        dry_run = opts.dry_run,
        replace = opts.replace,
        "starting rename run"
    );

    let candidates = discover(root, opts)?;
    let mut summary = RunSummary::new(opts.dry_run);

    for candidate in candidates {
        let report = process_candidate(candidate, opts);
        if let Outcome::Failed(e) = &report.outcome {
            tracing::warn!(path = %report.candidate.path.display(), error = %e, "rename failed");
        }
        summary.record(&report.outcome);
        on_report(&report);
    }

    tracing::info!(
        total = summary.total,
        renamed = summary.renamed,
        skipped_existing = summary.skipped_existing,
        errors = summary.errors,
        "rename run finished"
    );
    Ok(summary)
}
