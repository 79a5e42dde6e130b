//! Dioxus UI components for kirinuki.
//!
//! Provides the drag-and-drop upload zone, the file preview card with
//! its remove control, and the gated submit button.

mod preview_card;
mod submit;
mod upload;

pub use preview_card::FilePreviewCard;
pub use submit::SubmitButton;
pub use upload::UploadZone;
