//! MIME inference from filename extensions.
//!
//! The picker path and the drop path must agree on what a file *is*,
//! and browsers are inconsistent about the `type` they attach to
//! dropped files (notably for BMP). Deriving the MIME type from the
//! extension keeps both paths deterministic; the validation allow-set
//! is expressed in MIME terms, so unknown extensions simply fail the
//! type check downstream.

/// Extension -> MIME pairs for the image types kirinuki accepts.
const EXTENSION_MIME: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("bmp", "image/bmp"),
    ("webp", "image/webp"),
];

/// Infer the MIME type of a file from its extension.
///
/// Matching is case-insensitive. Returns `None` for filenames without
/// an extension or with an extension outside the known set.
#[must_use]
pub fn from_filename(name: &str) -> Option<&'static str> {
    let (_, ext) = name.rsplit_once('.')?;
    EXTENSION_MIME
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(ext))
        .map(|(_, mime)| *mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions_map_to_image_types() {
        assert_eq!(from_filename("photo.png"), Some("image/png"));
        assert_eq!(from_filename("photo.jpg"), Some("image/jpeg"));
        assert_eq!(from_filename("photo.jpeg"), Some("image/jpeg"));
        assert_eq!(from_filename("anim.gif"), Some("image/gif"));
        assert_eq!(from_filename("scan.bmp"), Some("image/bmp"));
        assert_eq!(from_filename("modern.webp"), Some("image/webp"));
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(from_filename("SHOUT.PNG"), Some("image/png"));
        assert_eq!(from_filename("mixed.JpEg"), Some("image/jpeg"));
    }

    #[test]
    fn only_the_last_extension_counts() {
        assert_eq!(from_filename("archive.png.txt"), None);
        assert_eq!(from_filename("double.txt.png"), Some("image/png"));
    }

    #[test]
    fn unknown_or_missing_extensions_yield_none() {
        assert_eq!(from_filename("document.pdf"), None);
        assert_eq!(from_filename("noextension"), None);
        assert_eq!(from_filename(""), None);
    }
}
