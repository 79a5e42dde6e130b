//! File upload surface with drag-and-drop and a file picker.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use kirinuki_intake::CandidateFile;

use crate::mime;
use crate::transport::FILE_INPUT_ID;

/// Props for the [`UploadZone`] component.
#[derive(Props, Clone, PartialEq)]
pub struct UploadZoneProps {
    /// Whether a validated candidate is currently held (success
    /// styling on the zone).
    accepted: bool,
    /// Locks the zone while a submission is in flight.
    disabled: bool,
    /// Called with the candidate built from the first supplied file,
    /// or `None` when the interaction produced no readable file.
    on_select: EventHandler<Option<CandidateFile>>,
}

/// A drag-and-drop zone with a file picker button.
///
/// Performs no validation of its own: it packages whatever the user
/// supplied as a [`CandidateFile`] (first file only on multi-file
/// drops) and leaves the verdict to the intake controller. The MIME
/// type is inferred from the filename extension so the picker and
/// drop paths report identically.
#[component]
pub fn UploadZone(props: UploadZoneProps) -> Element {
    let mut dragging = use_signal(|| false);
    let on_select = props.on_select;
    let disabled = props.disabled;

    // Read and forward the first file from a list. Shared by the
    // file-picker and drag-and-drop paths so the packaging logic
    // lives in one place.
    let process_files = move |files: Vec<FileData>| async move {
        if disabled {
            return;
        }
        let Some(file) = files.first() else {
            return;
        };
        let name = file.name();
        match file.read_bytes().await {
            Ok(bytes) => {
                let mime_type = mime::from_filename(&name).unwrap_or("application/octet-stream");
                on_select.call(Some(CandidateFile::new(name, mime_type, bytes.to_vec())));
            }
            // An unreadable file is indistinguishable from no file.
            Err(_) => on_select.call(None),
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        dragging.set(false);
        process_files(evt.files()).await;
    };

    let zone_class = {
        let mut class = String::from("upload-zone");
        if dragging() {
            class.push_str(" dragover");
        }
        if props.accepted {
            class.push_str(" file-success");
        }
        if props.disabled {
            class.push_str(" loading");
        }
        class
    };

    rsx! {
        div {
            class: "{zone_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                if !disabled {
                    dragging.set(true);
                }
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,

            p { class: "upload-hint", "Drag and drop an image here, or" }

            label { class: "upload-picker",
                input {
                    r#type: "file",
                    id: FILE_INPUT_ID,
                    name: "file",
                    accept: ".png,.jpg,.jpeg,.gif,.bmp,.webp",
                    class: "hidden",
                    disabled: disabled,
                    onchange: handle_files,
                }
                "Choose File"
            }

            p { class: "upload-formats", "PNG, JPG, JPEG, GIF, BMP, WebP (max 16 MB)" }
        }
    }
}
