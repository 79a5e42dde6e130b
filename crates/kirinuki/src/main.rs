use std::rc::Rc;

use dioxus::prelude::*;
use kirinuki_intake::{CandidateFile, IntakeController, SubmitDecision};
use kirinuki_io::{
    FilePreviewCard, SubmitButton, UploadZone, VisibilityWatcher, analytics, preview, transport,
};

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Owns the [`IntakeController`] in a signal and wires the upload
/// zone, preview card, error surface, and submit control to its
/// events. The upload form itself is the transport collaborator: its
/// native submission carries the file, and the `onsubmit` handler
/// only consults the intake guard to decide whether to let it run.
fn app() -> Element {
    let mut controller = use_signal(IntakeController::new);

    // Visibility safety net, scoped to this component's lifecycle.
    // Dropping the watcher (on unmount) detaches the listener.
    let _watcher = use_hook(|| {
        Rc::new(VisibilityWatcher::subscribe(move || {
            controller.write().visibility_regained();
        }))
    });

    // --- Selection handler (picker and drop paths) ---
    let on_select = move |file: Option<CandidateFile>| {
        // A locked widget ignores the event entirely; there is
        // nothing to report, stage, or decode.
        let Some(outcome) = controller.write().select_file(file) else {
            return;
        };
        if let Some(uri) = outcome.released_preview {
            preview::revoke_preview_url(&uri);
        }
        analytics::track_selection(outcome.decode_request.is_some());

        let Some(request) = outcome.decode_request else {
            return;
        };

        // Mirror the accepted candidate into the form's file input so
        // the native multipart post carries it on both selection
        // paths; a drop never populates the input on its own. On
        // failure the input stays empty and the server reports the
        // missing file itself.
        if let Some(candidate) = controller.read().candidate() {
            let _ = transport::stage_candidate(candidate);
        }

        // Preview decode: fire-and-forget relative to the state
        // machine. Submission is already unlocked; only the preview
        // surface waits for this task.
        spawn(async move {
            // Yield to the browser event loop so the accepted state
            // paints before the decode blocks the thread.
            gloo_timers::future::TimeoutFuture::new(0).await;

            match preview::decode_preview(&request.bytes, &request.mime_type) {
                Ok(url) => {
                    // A selection made while we were decoding wins;
                    // our URL comes back for release instead.
                    if let Some(stale) = controller.write().complete_decode(request.token, url) {
                        preview::revoke_preview_url(&stale);
                    }
                }
                // Non-fatal: the preview stays empty, submit stays
                // unlocked.
                Err(_) => controller.write().decode_failed(request.token),
            }
        });
    };

    // --- Reset handler (remove control and error dismissal) ---
    // `mut` because writing the controller signal makes this FnMut,
    // and the alert-close handler calls it directly.
    let mut on_clear = move |()| {
        if let Some(uri) = controller.write().clear() {
            preview::revoke_preview_url(&uri);
        }
        let _ = transport::clear_staged();
    };

    // --- Submit guard ---
    let on_submit = move |evt: FormEvent| {
        match controller.write().submit_attempt() {
            SubmitDecision::Proceed => analytics::track_submit(),
            // Unvalidated data must never reach the transport.
            SubmitDecision::Block => evt.prevent_default(),
        }
    };

    let ui = controller.read().ui_state();
    let frame = controller.read().preview().cloned();
    let accepted = controller.read().candidate().is_some();

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/style.css") }

        div { class: "page",
            header { class: "page-header",
                h1 { class: "title-brand", "kirinuki" }
                p { class: "tagline", "Remove the background from an image, right in your browser tab" }
            }

            main { class: "content",
                form {
                    action: "/",
                    method: "post",
                    enctype: "multipart/form-data",
                    onsubmit: on_submit,

                    UploadZone {
                        accepted,
                        disabled: ui.loading,
                        on_select,
                    }

                    if let Some(frame) = frame {
                        FilePreviewCard {
                            frame,
                            on_clear,
                        }
                    }

                    if let Some(ref message) = ui.error_message {
                        div { class: "alert alert-error",
                            span { class: "error-message", "{message}" }
                            button {
                                r#type: "button",
                                class: "alert-close",
                                aria_label: "Dismiss",
                                onclick: move |_| on_clear(()),
                                "\u{d7}"
                            }
                        }
                    }

                    SubmitButton {
                        enabled: ui.submit_enabled,
                        loading: ui.loading,
                    }
                }
            }

            footer { class: "page-footer",
                p { "Images are processed server-side and never stored." }
            }
        }
    }
}
