//! Staging the candidate into the form transport.
//!
//! The upload form's native multipart submission is the transport
//! collaborator, and it only carries what sits in the file input.
//! Picked files land there on their own; dropped files exist only as
//! bytes held by the controller. This module rebuilds the candidate
//! as a browser `File` and injects it into the input through a
//! `DataTransfer`, so both selection paths reach the transport
//! identically.

use kirinuki_intake::CandidateFile;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::FilePropertyBag;

/// DOM id of the form's file input, rendered by
/// [`UploadZone`](crate::UploadZone).
pub const FILE_INPUT_ID: &str = "file-input";

/// Errors that can occur while staging a candidate for submission.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for TransportError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Mirror the held candidate into the form's file input.
///
/// Rebuilds the candidate as a `File` carrying its original name,
/// MIME type, and bytes, then replaces the input's file list with it.
/// Idempotent per selection: restaging simply overwrites the list.
///
/// # Errors
///
/// Returns [`TransportError::JsError`] if the input element cannot be
/// found or any browser API call fails.
pub fn stage_candidate(candidate: &CandidateFile) -> Result<(), TransportError> {
    let input = file_input()?;

    // 1. Rebuild the candidate as a browser File.
    let uint8_array = js_sys::Uint8Array::from(candidate.bytes.as_slice());
    let parts = js_sys::Array::new();
    parts.push(&uint8_array);

    let opts = FilePropertyBag::new();
    opts.set_type(&candidate.mime_type);
    let file =
        web_sys::File::new_with_u8_array_sequence_and_options(&parts, &candidate.name, &opts)?;

    // 2. A file input's list can only be replaced wholesale, via a
    //    DataTransfer's FileList.
    let transfer = web_sys::DataTransfer::new()?;
    transfer.items().add_with_file(&file)?;
    input.set_files(transfer.files().as_ref());

    Ok(())
}

/// Empty the form's file input.
///
/// Keeps the transport in step with a cleared controller; the submit
/// guard already blocks non-validated submissions, so this is
/// hygiene, not a safety boundary.
///
/// # Errors
///
/// Returns [`TransportError::JsError`] if the input element cannot be
/// found.
pub fn clear_staged() -> Result<(), TransportError> {
    let input = file_input()?;
    input.set_value("");
    Ok(())
}

/// Locate the form's file input by its DOM id.
fn file_input() -> Result<web_sys::HtmlInputElement, TransportError> {
    let window =
        web_sys::window().ok_or_else(|| TransportError::JsError("no global window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| TransportError::JsError("no document".into()))?;

    document
        .get_element_by_id(FILE_INPUT_ID)
        .ok_or_else(|| TransportError::JsError("file input not found".into()))?
        .dyn_into()
        .map_err(|e| TransportError::JsError(format!("not a file input: {e:?}")))
}
