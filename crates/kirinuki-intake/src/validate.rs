//! Candidate file validation.
//!
//! The synchronous, ordered check sequence: presence -> type -> size.
//! The first failing check determines the reported reason; later
//! checks are not run (no accumulation of multiple errors).

use crate::types::{CandidateFile, IntakeConfig, InvalidFileReason};

/// Validate a candidate against the configured constraints.
///
/// Total: always returns a verdict, never panics. The result is
/// derived, not stored -- callers recompute it on every selection
/// attempt and never cache it across files.
///
/// # Errors
///
/// Returns [`InvalidFileReason::NoFile`] if `file` is `None`.
/// Returns [`InvalidFileReason::UnsupportedType`] if the MIME type is
/// outside the allow-set.
/// Returns [`InvalidFileReason::TooLarge`] if the size exceeds the
/// ceiling.
pub fn validate(
    file: Option<&CandidateFile>,
    config: &IntakeConfig,
) -> Result<(), InvalidFileReason> {
    let Some(file) = file else {
        return Err(InvalidFileReason::NoFile);
    };

    if !config
        .allowed_mime_types
        .iter()
        .any(|t| t == &file.mime_type)
    {
        return Err(InvalidFileReason::UnsupportedType);
    }

    if file.size_bytes > config.max_size_bytes {
        return Err(InvalidFileReason::TooLarge);
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{ALLOWED_MIME_TYPES, MAX_SIZE_BYTES};

    /// A candidate with the given MIME type and a claimed size.
    ///
    /// `size_bytes` is set directly rather than through content so
    /// tests can model large files without allocating them.
    fn candidate(mime_type: &str, size_bytes: u64) -> CandidateFile {
        let mut c = CandidateFile::new("sample.bin", mime_type, Vec::new());
        c.size_bytes = size_bytes;
        c
    }

    #[test]
    fn no_file_is_reported_first() {
        let result = validate(None, &IntakeConfig::default());
        assert_eq!(result, Err(InvalidFileReason::NoFile));
    }

    #[test]
    fn every_allowed_type_within_ceiling_passes() {
        let config = IntakeConfig::default();
        for mime in ALLOWED_MIME_TYPES {
            let c = candidate(mime, MAX_SIZE_BYTES);
            assert_eq!(validate(Some(&c), &config), Ok(()), "rejected {mime}");
        }
    }

    #[test]
    fn unsupported_type_wins_regardless_of_size() {
        let config = IntakeConfig::default();
        // Oversized AND wrong type: the type check runs first.
        let c = candidate("text/plain", MAX_SIZE_BYTES * 2);
        assert_eq!(validate(Some(&c), &config), Err(InvalidFileReason::UnsupportedType));
    }

    #[test]
    fn mime_comparison_is_exact() {
        let config = IntakeConfig::default();
        let c = candidate("IMAGE/PNG", 10);
        assert_eq!(validate(Some(&c), &config), Err(InvalidFileReason::UnsupportedType));
    }

    #[test]
    fn one_byte_over_the_ceiling_is_too_large() {
        let config = IntakeConfig::default();
        let c = candidate("image/png", MAX_SIZE_BYTES + 1);
        assert_eq!(validate(Some(&c), &config), Err(InvalidFileReason::TooLarge));
    }

    #[test]
    fn exactly_at_the_ceiling_passes() {
        let config = IntakeConfig::default();
        let c = candidate("image/jpeg", MAX_SIZE_BYTES);
        assert_eq!(validate(Some(&c), &config), Ok(()));
    }

    #[test]
    fn custom_config_is_honored() {
        let config = IntakeConfig {
            allowed_mime_types: vec!["image/png".to_owned()],
            max_size_bytes: 100,
        };
        assert_eq!(
            validate(Some(&candidate("image/jpeg", 10)), &config),
            Err(InvalidFileReason::UnsupportedType)
        );
        assert_eq!(
            validate(Some(&candidate("image/png", 101)), &config),
            Err(InvalidFileReason::TooLarge)
        );
        assert_eq!(validate(Some(&candidate("image/png", 100)), &config), Ok(()));
    }
}
