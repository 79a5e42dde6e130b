//! Preview decoding and Blob URL creation.
//!
//! Turns candidate file bytes into a browser-displayable image URL.
//! The bytes are first run through the `image` crate as a decode
//! check -- a file that merely *claims* to be an image should leave
//! the preview surface empty rather than render a broken `<img>` --
//! then wrapped in a `Blob` and exposed via an object URL.

use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// Errors that can occur while producing a preview URL.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// The bytes are not a decodable image.
    #[error("image decode failed: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for PreviewError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Decode candidate bytes into a displayable Blob URL.
///
/// The returned URL must be released via [`revoke_preview_url`] when
/// the preview is replaced or discarded to avoid leaking the Blob.
///
/// # Errors
///
/// Returns [`PreviewError::ImageDecode`] if the bytes do not decode
/// as an image. Returns [`PreviewError::JsError`] if Blob or URL
/// creation fails.
pub fn decode_preview(bytes: &[u8], mime_type: &str) -> Result<String, PreviewError> {
    // 1. Verify the bytes actually decode. The decoded pixels are not
    //    needed -- the browser renders from the original bytes.
    let _ = image::load_from_memory(bytes)?;

    // 2. Create a Uint8Array-backed Blob carrying the original bytes
    //    and their MIME type.
    let uint8_array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&uint8_array);

    let opts = BlobPropertyBag::new();
    opts.set_type(mime_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;

    // 3. Generate an object URL for use as an `<img src>`.
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    Ok(url)
}

/// Release a Blob URL minted by [`decode_preview`].
///
/// Best-effort: a failure to revoke only delays garbage collection of
/// the Blob, so it is not reported.
pub fn revoke_preview_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}
