//! Per-candidate processing: probe, pick a strategy, apply it.
//!
//! Failures are captured in the returned report and never propagate, so one
//! bad file cannot stop the batch.

use crate::discovery::Candidate;
use crate::naming::temp_name;
use crate::options::RenameOptions;
use crate::strategy::{probe_target, Strategy};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Attempts at finding an unused temporary name before giving up.
const TEMP_NAME_ATTEMPTS: usize = 8;

/// Failure while renaming a single candidate.
#[derive(Debug, Error)]
pub enum RenameError {
    #[error("cannot inspect {}: {source}", path.display())]
    Inspect {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("rename {} -> {}: {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot remove existing {}: {source}", path.display())]
    RemoveExisting {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no free temporary name in {}: {source}", dir.display())]
    TempName {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Second step failed; the source was put back under its original name.
    #[error("rename {} -> {} failed, original name restored: {source}", from.display(), to.display())]
    TwoStep {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Second step failed and so did the restore; the file sits at `temp`.
    #[error("rename to {} failed and file was left at {}: {source}", to.display(), temp.display())]
    Stranded {
        temp: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result of processing one candidate.
#[derive(Debug)]
pub enum Outcome {
    /// Renamed via case-fix or direct rename (or would be, in dry-run).
    Renamed,
    /// Existing target deleted, then renamed (or would be, in dry-run).
    Replaced,
    /// Target already exists and replace is off.
    SkippedExisting,
    /// Reserved; no current rule produces it.
    SkippedOther,
    Failed(RenameError),
}

/// Everything the caller needs to report one candidate.
#[derive(Debug)]
pub struct CandidateReport {
    pub candidate: Candidate,
    pub target: PathBuf,
    /// `None` when the target could not be inspected.
    pub strategy: Option<Strategy>,
    pub outcome: Outcome,
    pub dry_run: bool,
}

/// Decide and (unless dry-run) apply the rename for one candidate.
pub fn process_candidate(candidate: Candidate, opts: &RenameOptions) -> CandidateReport {
    let target = candidate.target_path();
    let old = candidate.path.as_path();

    let state = match probe_target(old, &target) {
        Ok(s) => s,
        Err(source) => {
            return CandidateReport {
                outcome: Outcome::Failed(RenameError::Inspect {
                    path: target.clone(),
                    source,
                }),
                candidate,
                target,
                strategy: None,
                dry_run: opts.dry_run,
            };
        }
    };

    let strategy = Strategy::select(state, opts.replace);
    tracing::debug!(
        path = %old.display(),
        target = %target.display(),
        ?state,
        ?strategy,
        dry_run = opts.dry_run,
        "strategy selected"
    );

    let outcome = if opts.dry_run {
        planned_outcome(strategy)
    } else {
        match apply(strategy, old, &target) {
            Ok(()) => planned_outcome(strategy),
            Err(e) => Outcome::Failed(e),
        }
    };

    CandidateReport {
        candidate,
        target,
        strategy: Some(strategy),
        outcome,
        dry_run: opts.dry_run,
    }
}

fn planned_outcome(strategy: Strategy) -> Outcome {
    match strategy {
        Strategy::CaseFix | Strategy::Direct => Outcome::Renamed,
        Strategy::Replace => Outcome::Replaced,
        Strategy::SkipExisting => Outcome::SkippedExisting,
    }
}

fn apply(strategy: Strategy, old: &Path, new: &Path) -> Result<(), RenameError> {
    match strategy {
        Strategy::CaseFix => two_step_rename(old, new),
        Strategy::Replace => {
            fs::remove_file(new).map_err(|source| RenameError::RemoveExisting {
                path: new.to_path_buf(),
                source,
            })?;
            rename(old, new)
        }
        Strategy::Direct => rename(old, new),
        Strategy::SkipExisting => Ok(()),
    }
}

fn rename(from: &Path, to: &Path) -> Result<(), RenameError> {
    fs::rename(from, to).map_err(|source| RenameError::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}

/// Rename `old` to `new` through an unused temporary name in the same
/// directory, so a case-insensitive filesystem sees two distinct renames.
///
/// If the second step fails, or leaves the temporary name in place, the file
/// is moved back to `old`; only when that also fails does a temporary file
/// remain (reported as `Stranded`).
pub fn two_step_rename(old: &Path, new: &Path) -> Result<(), RenameError> {
    let dir = old.parent().unwrap_or_else(|| Path::new("."));
    let temp = free_temp_path(dir)?;

    rename(old, &temp)?;
    let step2 = fs::rename(&temp, new).and_then(|()| {
        // rename(2) is a silent no-op when both names link the same file.
        match fs::symlink_metadata(&temp) {
            Ok(_) => Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "target is another link to the same file",
            )),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    });
    if let Err(source) = step2 {
        return match fs::rename(&temp, old) {
            Ok(()) => Err(RenameError::TwoStep {
                from: old.to_path_buf(),
                to: new.to_path_buf(),
                source,
            }),
            Err(restore) => {
                tracing::warn!(temp = %temp.display(), error = %restore, "restore after failed rename also failed");
                Err(RenameError::Stranded {
                    temp,
                    to: new.to_path_buf(),
                    source,
                })
            }
        };
    }
    Ok(())
}

fn free_temp_path(dir: &Path) -> Result<PathBuf, RenameError> {
    for _ in 0..TEMP_NAME_ATTEMPTS {
        let p = dir.join(temp_name());
        match fs::symlink_metadata(&p) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(p),
            Ok(_) => continue,
            Err(source) => {
                return Err(RenameError::TempName {
                    dir: dir.to_path_buf(),
                    source,
                })
            }
        }
    }
    Err(RenameError::TempName {
        dir: dir.to_path_buf(),
        source: io::Error::new(io::ErrorKind::AlreadyExists, "every generated name was taken"),
    })
}
