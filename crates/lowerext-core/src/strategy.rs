//! Rename strategy selection from the observed state of the target path.

use crate::identity::aliases;
use std::fs;
use std::io;
use std::path::Path;

/// What the filesystem reports at the target path, relative to the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    /// Nothing at the target path.
    Absent,
    /// Target is only a case variant of the source's own entry
    /// (case-insensitive filesystem).
    SameEntry,
    /// A different entry already occupies the target path.
    Distinct,
}

/// How a candidate gets renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Rename via a temporary name (case-only change on the same entry).
    CaseFix,
    /// Delete the existing target, then rename.
    Replace,
    /// Target exists and replace is off: leave both files alone.
    SkipExisting,
    /// Plain rename to a free target.
    Direct,
}

impl Strategy {
    pub fn select(state: TargetState, replace: bool) -> Self {
        match state {
            TargetState::SameEntry => Strategy::CaseFix,
            TargetState::Distinct if replace => Strategy::Replace,
            TargetState::Distinct => Strategy::SkipExisting,
            TargetState::Absent => Strategy::Direct,
        }
    }
}

/// Inspect `new` without following symlinks and classify it against `old`.
/// Read-only, so dry-run and live runs see the same decision.
pub fn probe_target(old: &Path, new: &Path) -> io::Result<TargetState> {
    match fs::symlink_metadata(new) {
        Ok(_) => {
            if aliases(old, new)? {
                Ok(TargetState::SameEntry)
            } else {
                Ok(TargetState::Distinct)
            }
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(TargetState::Absent),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::case_insensitive;

    #[test]
    fn select_covers_every_state() {
        assert_eq!(Strategy::select(TargetState::SameEntry, false), Strategy::CaseFix);
        assert_eq!(Strategy::select(TargetState::SameEntry, true), Strategy::CaseFix);
        assert_eq!(Strategy::select(TargetState::Distinct, true), Strategy::Replace);
        assert_eq!(
            Strategy::select(TargetState::Distinct, false),
            Strategy::SkipExisting
        );
        assert_eq!(Strategy::select(TargetState::Absent, false), Strategy::Direct);
        assert_eq!(Strategy::select(TargetState::Absent, true), Strategy::Direct);
    }

    #[test]
    fn probe_lowercase_target_of_lone_file() {
        let dir = tempfile::tempdir().unwrap();
        let old = dir.path().join("Foo.JPG");
        std::fs::write(&old, b"x").unwrap();
        let new = dir.path().join("Foo.jpg");

        let expected = if case_insensitive(dir.path()) {
            TargetState::SameEntry
        } else {
            TargetState::Absent
        };
        assert_eq!(probe_target(&old, &new).unwrap(), expected);
    }

    #[test]
    fn probe_distinct_target() {
        let dir = tempfile::tempdir().unwrap();
        if case_insensitive(dir.path()) {
            return;
        }
        let old = dir.path().join("Foo.JPG");
        let new = dir.path().join("Foo.jpg");
        std::fs::write(&old, b"upper").unwrap();
        std::fs::write(&new, b"lower").unwrap();
        assert_eq!(probe_target(&old, &new).unwrap(), TargetState::Distinct);
    }

    #[test]
    fn probe_hard_linked_target_is_distinct() {
        let dir = tempfile::tempdir().unwrap();
        if case_insensitive(dir.path()) {
            return;
        }
        let old = dir.path().join("Foo.JPG");
        let new = dir.path().join("Foo.jpg");
        std::fs::write(&old, b"x").unwrap();
        std::fs::hard_link(&old, &new).unwrap();
        assert_eq!(probe_target(&old, &new).unwrap(), TargetState::Distinct);
        assert_eq!(
            Strategy::select(probe_target(&old, &new).unwrap(), false),
            Strategy::SkipExisting
        );
    }
}
