//! Shared types for the kirinuki intake state machine.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Maximum accepted file size: 16 MiB.
pub const MAX_SIZE_BYTES: u64 = 16 * 1024 * 1024;

/// MIME types accepted by the default configuration.
///
/// `image/jpg` is not a registered MIME type, but some sources report
/// it for JPEG files, so it is accepted alongside `image/jpeg`.
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "image/png",
    "image/jpeg",
    "image/jpg",
    "image/gif",
    "image/bmp",
    "image/webp",
];

/// The single file currently held by the controller, awaiting or
/// having passed validation.
///
/// Holds the raw bytes so the preview decode can run without
/// re-reading the source. Bytes are reference-counted because the
/// decode task needs a handle that outlives the selection event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// Original filename, extension included.
    pub name: String,
    /// Size of the content in bytes.
    pub size_bytes: u64,
    /// MIME type as reported by the input source.
    pub mime_type: String,
    /// Raw file content.
    pub bytes: Rc<Vec<u8>>,
}

impl CandidateFile {
    /// Create a candidate from a filename, MIME type, and content.
    ///
    /// `size_bytes` is taken from the content length.
    #[must_use]
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        let size_bytes = bytes.len() as u64;
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
            bytes: Rc::new(bytes),
        }
    }
}

/// Why a candidate file was rejected.
///
/// All variants are user-correctable input errors, never fatal: each
/// maps to a human-readable message (the `Display` impl) and re-arms
/// the controller for another attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidFileReason {
    /// No file was supplied with the selection event.
    #[error("Please select a file")]
    NoFile,

    /// The MIME type is outside the allow-set.
    #[error("Invalid file type. Please upload PNG, JPG, JPEG, GIF, BMP, or WebP files.")]
    UnsupportedType,

    /// The file exceeds the size ceiling.
    #[error("File too large. Maximum size is 16MB.")]
    TooLarge,
}

/// Type and size constraints a candidate must satisfy.
///
/// The defaults match the upload contract of the kirinuki service:
/// common raster image types, 16 MiB ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeConfig {
    /// MIME types accepted for upload.
    pub allowed_mime_types: Vec<String>,
    /// Maximum accepted file size in bytes.
    pub max_size_bytes: u64,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            allowed_mime_types: ALLOWED_MIME_TYPES.iter().map(ToString::to_string).collect(),
            max_size_bytes: MAX_SIZE_BYTES,
        }
    }
}

/// Preview data for the display surface: what the user sees once a
/// valid file has been selected and decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFrame {
    /// Filename shown next to the thumbnail.
    pub filename: String,
    /// Human-readable size string (see [`crate::format_size`]).
    pub size_label: String,
    /// Opaque handle to the displayable image (a Blob URL in the
    /// browser). The controller never interprets it; it only hands it
    /// back to the caller when the frame is replaced or discarded so
    /// the underlying resource can be released.
    pub image_uri: String,
}

/// Derived, display-only mirror of the controller state.
///
/// Invariant: `submit_enabled` is true iff a candidate file exists AND
/// its last validation was ok AND `loading` is false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    /// Whether the preview surface should be shown.
    pub has_preview: bool,
    /// Error message for the error surface, or `None` to clear it.
    pub error_message: Option<String>,
    /// Whether the submit control accepts activation.
    pub submit_enabled: bool,
    /// Whether the submit control shows its loading label.
    pub loading: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_upload_contract() {
        let config = IntakeConfig::default();
        assert_eq!(config.max_size_bytes, 16 * 1024 * 1024);
        assert_eq!(config.allowed_mime_types.len(), 6);
        assert!(config.allowed_mime_types.iter().any(|t| t == "image/webp"));
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = IntakeConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: IntakeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn reason_messages_are_user_facing() {
        assert_eq!(
            InvalidFileReason::NoFile.to_string(),
            "Please select a file"
        );
        assert_eq!(
            InvalidFileReason::TooLarge.to_string(),
            "File too large. Maximum size is 16MB."
        );
        assert!(
            InvalidFileReason::UnsupportedType
                .to_string()
                .contains("PNG, JPG, JPEG, GIF, BMP, or WebP")
        );
    }

    #[test]
    fn candidate_size_comes_from_content_length() {
        let candidate = CandidateFile::new("a.png", "image/png", vec![0u8; 42]);
        assert_eq!(candidate.size_bytes, 42);
    }
}
