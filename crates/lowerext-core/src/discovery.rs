//! Recursive discovery of candidate files.

use crate::naming::{matching_suffix, target_name};
use crate::options::RenameOptions;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A file whose name ends with an uppercase JPEG suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Full path of the file as found by the walk.
    pub path: PathBuf,
    /// File name, always valid UTF-8.
    pub file_name: String,
    /// Matched suffix in its original casing (`.JPG` or `.JPEG`).
    pub suffix: &'static str,
}

impl Candidate {
    pub fn target_name(&self) -> String {
        target_name(&self.file_name)
    }

    /// Same directory, extension lowercased.
    pub fn target_path(&self) -> PathBuf {
        self.path.with_file_name(self.target_name())
    }

    pub fn target_suffix(&self) -> String {
        self.suffix.to_lowercase()
    }
}

/// Walk `root` and collect every candidate before anything is renamed.
///
/// Symlinks are not followed. Entries come back sorted by name within each
/// directory. Any traversal error aborts discovery.
pub fn discover(root: &Path, opts: &RenameOptions) -> Result<Vec<Candidate>> {
    let suffixes = opts.suffixes();
    let mut out = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;
        // Links are not followed, so a link to a folder reports as a non-dir.
        if entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir()) {
            continue;
        }
        // Non-UTF-8 names cannot end with an ASCII suffix we could lowercase safely.
        let Some(name) = entry.file_name().to_str() else {
            tracing::debug!(path = %entry.path().display(), "skipping non-UTF-8 name");
            continue;
        };
        if let Some(suffix) = matching_suffix(name, suffixes) {
            out.push(Candidate {
                path: entry.path().to_path_buf(),
                file_name: name.to_string(),
                suffix,
            });
        }
    }

    tracing::debug!(root = %root.display(), found = out.len(), "discovery finished");
    Ok(out)
}
