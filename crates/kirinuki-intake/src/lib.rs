//! kirinuki-intake: Pure file-intake state machine (sans-IO).
//!
//! Decides whether a candidate file may proceed to form submission:
//! selection -> validation -> preview -> submit-lock/unlock ->
//! loading -> reset-on-visibility.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! file attributes and returns structured verdicts. All browser
//! interaction (drag-and-drop, file reading, Blob URLs, the
//! visibility listener) lives in `kirinuki-io`.

pub mod controller;
pub mod format;
pub mod types;
pub mod validate;

pub use controller::{
    DecodeRequest, DecodeToken, IntakeController, IntakeState, SelectOutcome, SubmitDecision,
};
pub use format::format_size;
pub use types::{CandidateFile, IntakeConfig, InvalidFileReason, PreviewFrame, UiState};
pub use validate::validate;
