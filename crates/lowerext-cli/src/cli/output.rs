//! Console rendering of per-candidate reports and the final summary.

use lowerext_core::{CandidateReport, Outcome, RunSummary, Strategy};

pub const PREFIX_DRY_RUN: &str = "➡️  (dry-run)";
pub const PREFIX_CASE_FIX: &str = "✅ renamed (case-fix):";
pub const PREFIX_REPLACED: &str = "♻️  replaced:";
pub const PREFIX_RENAMED: &str = "✅ renamed:";
pub const PREFIX_SKIPPED: &str = "⚠️ skipped:";
pub const PREFIX_ERROR: &str = "❌ error at";

/// One console line for one candidate.
pub fn report_line(report: &CandidateReport) -> String {
    let old = report.candidate.path.display();
    let new = report.target.display();
    match &report.outcome {
        Outcome::Failed(e) => format!("{PREFIX_ERROR} {old}: {e}"),
        Outcome::SkippedExisting => {
            format!("{PREFIX_SKIPPED} {new} already exists (use --replace to overwrite)")
        }
        Outcome::SkippedOther => format!("{PREFIX_SKIPPED} {old}"),
        Outcome::Renamed | Outcome::Replaced if report.dry_run => {
            format!("{PREFIX_DRY_RUN} {old} -> {new}")
        }
        Outcome::Replaced => format!("{PREFIX_REPLACED} {old} -> {new}"),
        Outcome::Renamed => match report.strategy {
            Some(Strategy::CaseFix) => format!("{PREFIX_CASE_FIX} {old} -> {new}"),
            _ => format!("{PREFIX_RENAMED} {old} -> {new}"),
        },
    }
}

/// The summary block printed at the end of a run.
pub fn summary_block(s: &RunSummary) -> String {
    let mut out = String::from("--- Summary ---\n");
    for (label, count) in [
        ("Candidates found", s.total),
        ("Renamed", s.renamed),
        ("Skipped (existing)", s.skipped_existing),
        ("Skipped (other)", s.skipped_other),
        ("Errors", s.errors),
    ] {
        out.push_str(&format!("{label:<22}: {count}\n"));
    }
    if s.dry_run {
        out.push_str("(dry-run: no files were changed)\n");
    }
    out
}
