//! The file-intake state machine.
//!
//! [`IntakeController`] owns the current candidate file and everything
//! derived from it. It receives discrete input events (`select_file`,
//! `submit_attempt`, `clear`, `visibility_regained`) and exposes the
//! resulting interface state via [`UiState`].
//!
//! Events are synchronous; the one asynchronous collaborator is the
//! preview decode, which the controller *requests* (see
//! [`DecodeRequest`]) but never performs. Completions are matched
//! against a monotonically increasing [`DecodeToken`] so that only the
//! most recent selection may write the preview surface
//! (last-selection-wins).

use std::rc::Rc;

use crate::format::format_size;
use crate::types::{CandidateFile, IntakeConfig, InvalidFileReason, PreviewFrame, UiState};
use crate::validate::validate;

/// Lifecycle state of the intake widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeState {
    /// No candidate held; submit locked.
    Empty,
    /// Last selection was rejected; error shown, submit locked.
    Invalid,
    /// A validated candidate is held; submit unlocked.
    Valid,
    /// Submission handed off to the form transport; submit locked,
    /// loading label shown. Exited via `visibility_regained`.
    Submitting,
}

/// Identifies one preview decode request.
///
/// Tokens increase monotonically; a completion whose token no longer
/// matches the controller's current token is stale and must be
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeToken(u64);

/// A request to decode the candidate into a displayable image.
///
/// Produced by a successful [`IntakeController::select_file`]. The
/// caller runs the decode however it likes (in the browser: verify
/// with the `image` crate, then mint a Blob URL) and reports back via
/// [`IntakeController::complete_decode`] or
/// [`IntakeController::decode_failed`] with the same token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeRequest {
    /// Token to present at completion time.
    pub token: DecodeToken,
    /// Raw content to decode.
    pub bytes: Rc<Vec<u8>>,
    /// MIME type of the content.
    pub mime_type: String,
}

/// Everything a caller must act on after a selection event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectOutcome {
    /// Decode to kick off, present only when validation passed.
    pub decode_request: Option<DecodeRequest>,
    /// Display handle of a preview that was just discarded; the caller
    /// should release the underlying resource (revoke the Blob URL).
    pub released_preview: Option<String>,
}

/// Verdict of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Guard passed: the native submission may proceed.
    Proceed,
    /// Guard failed: the caller must actively prevent the default
    /// submission action.
    Block,
}

/// Owns the candidate file and derives all observable widget state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeController {
    config: IntakeConfig,
    state: IntakeState,
    candidate: Option<CandidateFile>,
    error: Option<InvalidFileReason>,
    preview: Option<PreviewFrame>,
    decode_token: u64,
}

impl Default for IntakeController {
    fn default() -> Self {
        Self::new()
    }
}

impl IntakeController {
    /// Create a controller with the default intake constraints.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(IntakeConfig::default())
    }

    /// Create a controller with custom constraints.
    #[must_use]
    pub const fn with_config(config: IntakeConfig) -> Self {
        Self {
            config,
            state: IntakeState::Empty,
            candidate: None,
            error: None,
            preview: None,
            decode_token: 0,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> IntakeState {
        self.state
    }

    /// The held candidate, if any.
    #[must_use]
    pub const fn candidate(&self) -> Option<&CandidateFile> {
        self.candidate.as_ref()
    }

    /// The applied preview frame, if any.
    #[must_use]
    pub const fn preview(&self) -> Option<&PreviewFrame> {
        self.preview.as_ref()
    }

    /// Constraints this controller validates against.
    #[must_use]
    pub const fn config(&self) -> &IntakeConfig {
        &self.config
    }

    /// Derived display state.
    ///
    /// `submit_enabled` holds exactly when a validated candidate is
    /// present and no submission is in flight; an error message and an
    /// enabled submit control are never visible together.
    #[must_use]
    pub fn ui_state(&self) -> UiState {
        UiState {
            has_preview: self.preview.is_some(),
            error_message: self.error.map(|reason| reason.to_string()),
            submit_enabled: self.state == IntakeState::Valid,
            loading: self.state == IntakeState::Submitting,
        }
    }

    /// Handle a selection event from the picker or the drop surface.
    ///
    /// `None` models an interaction that produced no usable file (the
    /// picker was cancelled mid-read, or the file could not be read).
    ///
    /// Validation is recomputed from scratch; on success the candidate
    /// replaces any prior one and a [`DecodeRequest`] is issued, on
    /// failure the candidate is discarded and the error surface armed.
    /// Either way any pending decode becomes stale and any visible
    /// preview is taken down.
    ///
    /// Returns `None` while a submission is in flight: the widget is
    /// locked, the event is ignored entirely, and callers must not
    /// report it as a rejection.
    pub fn select_file(&mut self, file: Option<CandidateFile>) -> Option<SelectOutcome> {
        if self.state == IntakeState::Submitting {
            return None;
        }

        // A new selection supersedes any in-flight decode, whether or
        // not the new file turns out to be valid.
        self.decode_token += 1;
        let released_preview = self.preview.take().map(|frame| frame.image_uri);

        let outcome = match validate(file.as_ref(), &self.config) {
            Ok(()) => {
                let decode_request = file.as_ref().map(|candidate| DecodeRequest {
                    token: DecodeToken(self.decode_token),
                    bytes: Rc::clone(&candidate.bytes),
                    mime_type: candidate.mime_type.clone(),
                });
                self.candidate = file;
                self.error = None;
                self.state = IntakeState::Valid;
                SelectOutcome {
                    decode_request,
                    released_preview,
                }
            }
            Err(reason) => {
                self.candidate = None;
                self.error = Some(reason);
                self.state = IntakeState::Invalid;
                SelectOutcome {
                    decode_request: None,
                    released_preview,
                }
            }
        };

        self.debug_assert_consistent();
        Some(outcome)
    }

    /// Guard a submit attempt.
    ///
    /// [`SubmitDecision::Proceed`] moves the machine to `Submitting`
    /// and locks the widget; the candidate stays held so a later
    /// `visibility_regained` can restore the `Valid` state. On
    /// [`SubmitDecision::Block`] nothing changes and the caller must
    /// prevent the default submission action -- unvalidated data never
    /// reaches the transport.
    pub fn submit_attempt(&mut self) -> SubmitDecision {
        let decision = if self.state == IntakeState::Valid {
            self.state = IntakeState::Submitting;
            SubmitDecision::Proceed
        } else {
            SubmitDecision::Block
        };

        self.debug_assert_consistent();
        decision
    }

    /// Force the `Empty` state from anywhere.
    ///
    /// Discards the candidate, hides the preview, locks submit, and
    /// clears the error. Returns the discarded preview handle, if one
    /// was visible, so the caller can release it.
    pub fn clear(&mut self) -> Option<String> {
        self.decode_token += 1;
        self.candidate = None;
        self.error = None;
        self.state = IntakeState::Empty;
        let released = self.preview.take().map(|frame| frame.image_uri);

        self.debug_assert_consistent();
        released
    }

    /// React to the page becoming visible again.
    ///
    /// The safety net against a submission that silently hangs (e.g.
    /// navigating away and back): never assumes the in-flight
    /// submission succeeded or failed, just drops `loading` and
    /// recomputes the widget state from the held candidate.
    pub fn visibility_regained(&mut self) {
        if self.state == IntakeState::Submitting {
            self.state = if self.candidate.is_some() {
                IntakeState::Valid
            } else {
                IntakeState::Empty
            };
        }

        self.debug_assert_consistent();
    }

    /// Apply a finished preview decode.
    ///
    /// Applies only if `token` still identifies the most recent
    /// selection; a stale completion returns the display handle to the
    /// caller for release instead of touching the preview surface.
    pub fn complete_decode(&mut self, token: DecodeToken, image_uri: String) -> Option<String> {
        let Some(candidate) = self.candidate.as_ref() else {
            return Some(image_uri);
        };
        if token != DecodeToken(self.decode_token) {
            return Some(image_uri);
        }

        self.preview = Some(PreviewFrame {
            filename: candidate.name.clone(),
            size_label: format_size(candidate.size_bytes),
            image_uri,
        });

        self.debug_assert_consistent();
        None
    }

    /// Record a failed preview decode.
    ///
    /// Non-fatal to the workflow: a `Valid` state stays `Valid` and
    /// submit stays enabled; the preview surface simply remains empty.
    pub fn decode_failed(&mut self, token: DecodeToken) {
        // Nothing to roll back; stale failures are equally inert.
        let _ = token;
        self.debug_assert_consistent();
    }

    /// Internal consistency checks, compiled out of release builds.
    fn debug_assert_consistent(&self) {
        debug_assert_eq!(
            self.candidate.is_some(),
            matches!(self.state, IntakeState::Valid | IntakeState::Submitting),
            "candidate presence must match Valid/Submitting"
        );
        debug_assert_eq!(
            self.error.is_some(),
            self.state == IntakeState::Invalid,
            "error surface must be armed exactly in Invalid"
        );
        debug_assert!(
            !(self.ui_state().submit_enabled && self.error.is_some()),
            "an error must never be shown while submission is enabled"
        );
    }
}
