//! Page-visibility subscription.
//!
//! The intake controller treats "the page became visible again" as an
//! input event (its safety net against a submission that silently
//! hangs). This module owns the underlying `visibilitychange`
//! listener as an explicit subscription with a lifecycle -- created on
//! mount, removed on drop -- rather than ambient global state.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

/// Errors that can occur while attaching the visibility listener.
#[derive(Debug, thiserror::Error)]
pub enum VisibilityError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for VisibilityError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// An owned `visibilitychange` subscription.
///
/// Fires the supplied callback whenever the document transitions to
/// the visible state. Dropping the watcher detaches the listener, so
/// holding it in component-lifecycle storage keeps the subscription
/// scoped to the component.
pub struct VisibilityWatcher {
    document: web_sys::Document,
    closure: Closure<dyn FnMut()>,
}

impl VisibilityWatcher {
    /// Attach a listener that calls `on_visible` each time the page
    /// regains visibility.
    ///
    /// # Errors
    ///
    /// Returns [`VisibilityError::JsError`] outside a browser
    /// environment or if the listener cannot be attached.
    pub fn subscribe(mut on_visible: impl FnMut() + 'static) -> Result<Self, VisibilityError> {
        let window =
            web_sys::window().ok_or_else(|| VisibilityError::JsError("no global window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| VisibilityError::JsError("no document".into()))?;

        let observed = document.clone();
        let closure = Closure::new(move || {
            // The event also fires on hide; only the regain matters.
            if observed.visibility_state() == web_sys::VisibilityState::Visible {
                on_visible();
            }
        });

        document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref())?;

        Ok(Self { document, closure })
    }
}

impl Drop for VisibilityWatcher {
    fn drop(&mut self) {
        // Best-effort detach; the document may already be gone during
        // teardown.
        let _ = self.document.remove_event_listener_with_callback(
            "visibilitychange",
            self.closure.as_ref().unchecked_ref(),
        );
    }
}
