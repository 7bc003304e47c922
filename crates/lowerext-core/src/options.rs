use serde::{Deserialize, Serialize};

/// Uppercase JPEG suffix that is always renamed.
pub const JPG_SUFFIX: &str = ".JPG";
/// Uppercase JPEG suffix renamed only with `include_jpeg`.
pub const JPEG_SUFFIX: &str = ".JPEG";

/// Options for one rename run. Built from CLI flags; never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameOptions {
    /// Also match `.JPEG` (in addition to `.JPG`).
    pub include_jpeg: bool,
    /// Compute and report every decision without touching the filesystem.
    pub dry_run: bool,
    /// When the target exists as a distinct file, delete it and rename anyway.
    pub replace: bool,
}

impl RenameOptions {
    /// Suffixes that make a file a candidate (exact case).
    pub fn suffixes(&self) -> &'static [&'static str] {
        if self.include_jpeg {
            &[JPG_SUFFIX, JPEG_SUFFIX]
        } else {
            &[JPG_SUFFIX]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_are_all_off() {
        let opts = RenameOptions::default();
        assert!(!opts.include_jpeg);
        assert!(!opts.dry_run);
        assert!(!opts.replace);
        assert_eq!(opts.suffixes(), &[".JPG"]);
    }

    #[test]
    fn include_jpeg_extends_suffixes() {
        let opts = RenameOptions {
            include_jpeg: true,
            ..Default::default()
        };
        assert_eq!(opts.suffixes(), &[".JPG", ".JPEG"]);
    }
}
