//! kirinuki-io: Browser I/O and Dioxus component library.
//!
//! Everything the intake state machine delegates to the browser lives
//! here: the drag-and-drop upload surface, the preview card and submit
//! control, MIME inference for picked files, Blob URL minting for
//! previews, and the page-visibility subscription.

pub mod analytics;
pub mod components;
pub mod mime;
pub mod preview;
pub mod transport;
pub mod visibility;

pub use components::{FilePreviewCard, SubmitButton, UploadZone};
pub use visibility::VisibilityWatcher;
