//! Filename rules: which names qualify and what they become.

use crate::options::RenameOptions;

/// Prefix of the transient name used by the two-step rename.
pub const TEMP_PREFIX: &str = ".__tmp_rename__";

/// Returns the configured suffix `name` ends with (exact case), if any.
pub fn matching_suffix(name: &str, suffixes: &[&'static str]) -> Option<&'static str> {
    suffixes.iter().copied().find(|s| name.ends_with(s))
}

/// True if `name` should be renamed: `.JPG` always, `.JPEG` only with `include_jpeg`.
/// Lowercase and mixed-case extensions never qualify.
pub fn should_convert(name: &str, include_jpeg: bool) -> bool {
    let opts = RenameOptions {
        include_jpeg,
        ..Default::default()
    };
    matching_suffix(name, opts.suffixes()).is_some()
}

/// Lowercases the extension after the last `.`; the base is kept verbatim.
/// Names without a `.` are returned unchanged.
///
/// `"a.b.JPG"` → `"a.b.jpg"`, `"IMG_01.JPEG"` → `"IMG_01.jpeg"`.
pub fn target_name(filename: &str) -> String {
    match filename.rfind('.') {
        Some(dot) => {
            let (base, ext) = filename.split_at(dot);
            format!("{base}{}", ext.to_lowercase())
        }
        None => filename.to_string(),
    }
}

/// Fresh transient filename; collisions are checked by the caller.
pub fn temp_name() -> String {
    format!("{TEMP_PREFIX}{}", uuid::Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jpg_always_converts() {
        assert!(should_convert("Photo.JPG", false));
        assert!(should_convert("Photo.JPG", true));
    }

    #[test]
    fn jpeg_converts_only_when_included() {
        assert!(!should_convert("Photo.JPEG", false));
        assert!(should_convert("Photo.JPEG", true));
    }

    #[test]
    fn other_suffixes_never_convert() {
        for name in ["photo.jpg", "photo.jpeg", "Photo.Jpg", "Photo.JPg", "Photo.PNG", "JPG", "x.JPGX"] {
            assert!(!should_convert(name, true), "{name}");
        }
    }

    #[test]
    fn target_name_lowercases_only_the_extension() {
        assert_eq!(target_name("Photo.JPG"), "Photo.jpg");
        assert_eq!(target_name("IMG_01.JPEG"), "IMG_01.jpeg");
        assert_eq!(target_name("a.b.JPG"), "a.b.jpg");
        assert_eq!(target_name("MiXeD Name.JPG"), "MiXeD Name.jpg");
    }

    #[test]
    fn target_name_handles_edge_shapes() {
        assert_eq!(target_name(".JPG"), ".jpg");
        assert_eq!(target_name("NODOT"), "NODOT");
    }

    #[test]
    fn temp_names_are_prefixed_and_unique() {
        let a = temp_name();
        let b = temp_name();
        assert!(a.starts_with(TEMP_PREFIX));
        assert_eq!(a.len(), TEMP_PREFIX.len() + 32);
        assert_ne!(a, b);
        assert!(!should_convert(&a, true));
    }
}
