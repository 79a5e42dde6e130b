//! Preview card for the selected file.

use dioxus::prelude::*;
use kirinuki_intake::PreviewFrame;

/// Props for the [`FilePreviewCard`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FilePreviewCardProps {
    /// The decoded preview to display.
    frame: PreviewFrame,
    /// Called when the remove control is activated.
    on_clear: EventHandler<()>,
}

/// Shows the selected file's thumbnail, name, and size, with a
/// remove control that resets the intake widget.
#[component]
pub fn FilePreviewCard(props: FilePreviewCardProps) -> Element {
    rsx! {
        div { class: "file-preview",
            img {
                class: "preview-image",
                src: "{props.frame.image_uri}",
                alt: "Preview of {props.frame.filename}",
            }
            div { class: "file-meta",
                p { class: "file-name", "{props.frame.filename}" }
                p { class: "file-size", "{props.frame.size_label}" }
            }
            button {
                r#type: "button",
                class: "remove-file",
                aria_label: "Remove file",
                onclick: move |_| props.on_clear.call(()),
                "Remove"
            }
        }
    }
}
