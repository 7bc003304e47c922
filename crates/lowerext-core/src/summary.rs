//! Aggregate counts for one run.

use crate::execute::Outcome;
use serde::Serialize;

/// Outcome counts over one invocation.
///
/// `total == renamed + skipped_existing + skipped_other + errors` holds after
/// every `record`. `replaced` is the part of `renamed` done by replacing an
/// existing target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub renamed: usize,
    pub replaced: usize,
    pub skipped_existing: usize,
    pub skipped_other: usize,
    pub errors: usize,
    pub dry_run: bool,
}

impl RunSummary {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    pub fn record(&mut self, outcome: &Outcome) {
        self.total += 1;
        match outcome {
            Outcome::Renamed => self.renamed += 1,
            Outcome::Replaced => {
                self.renamed += 1;
                self.replaced += 1;
            }
            Outcome::SkippedExisting => self.skipped_existing += 1,
            Outcome::SkippedOther => self.skipped_other += 1,
            Outcome::Failed(_) => self.errors += 1,
        }
    }

    /// True if the counts add up to the number of candidates.
    pub fn is_consistent(&self) -> bool {
        self.total == self.renamed + self.skipped_existing + self.skipped_other + self.errors
    }
}
