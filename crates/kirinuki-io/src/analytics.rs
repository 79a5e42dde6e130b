//! Lightweight Simple Analytics event tracking.
//!
//! Calls the global `sa_event` function injected by the Simple
//! Analytics `<script>` tag.  All functions silently no-op when the
//! script is absent (e.g., blocked by an ad-blocker or during tests).

use wasm_bindgen::prelude::*;

/// Fire a Simple Analytics custom event.
///
/// Silently does nothing when the analytics script is absent.
fn track_event(name: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(func) = js_sys::Reflect::get(&window, &JsValue::from_str("sa_event")) else {
        return;
    };
    if !func.is_function() {
        return;
    }
    let func: js_sys::Function = func.unchecked_into();
    let _ = func.call1(&JsValue::NULL, &JsValue::from_str(name));
}

/// Record the verdict of a file selection.
///
/// Fires `file_accepted` or `file_rejected`; the rejection reason is
/// deliberately not reported (filenames and types are user data).
pub fn track_selection(accepted: bool) {
    track_event(if accepted {
        "file_accepted"
    } else {
        "file_rejected"
    });
}

/// Record a submission that passed the intake guard.
pub fn track_submit() {
    track_event("upload_submitted");
}
