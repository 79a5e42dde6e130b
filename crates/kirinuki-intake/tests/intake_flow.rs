//! Integration test: walk the two end-to-end intake scenarios through
//! the public API, the way the browser front-end drives it.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use kirinuki_intake::{
    CandidateFile, IntakeController, IntakeState, SubmitDecision, format_size,
};

/// A candidate with a claimed size, without allocating the content.
fn candidate(name: &str, mime_type: &str, size_bytes: u64) -> CandidateFile {
    let mut c = CandidateFile::new(name, mime_type, vec![0u8; 16]);
    c.size_bytes = size_bytes;
    c
}

#[test]
fn five_megabyte_jpeg_happy_path() {
    let mut controller = IntakeController::new();

    // Drop a 5 MB JPEG.
    let file = candidate("holiday.jpg", "image/jpeg", 5 * 1024 * 1024);
    let outcome = controller
        .select_file(Some(file))
        .expect("widget is not locked");
    let request = outcome.decode_request.expect("valid file should request a decode");

    // Submit is already enabled; the decode has not finished yet.
    let ui = controller.ui_state();
    assert!(ui.submit_enabled);
    assert!(!ui.has_preview);
    assert_eq!(ui.error_message, None);

    // Decode completes: preview shows filename, size label, image.
    assert_eq!(
        controller.complete_decode(request.token, "blob:holiday".to_owned()),
        None
    );
    let frame = controller.preview().unwrap();
    assert_eq!(frame.filename, "holiday.jpg");
    assert_eq!(frame.size_label, "5 MB");
    assert_eq!(frame.size_label, format_size(5 * 1024 * 1024));

    // Attempt submit: loading label, submit disabled.
    assert_eq!(controller.submit_attempt(), SubmitDecision::Proceed);
    let ui = controller.ui_state();
    assert!(ui.loading);
    assert!(!ui.submit_enabled);

    // Coming back to the page re-arms the widget.
    controller.visibility_regained();
    assert_eq!(controller.state(), IntakeState::Valid);
    assert!(controller.ui_state().submit_enabled);
}

#[test]
fn twenty_megabyte_png_is_rejected() {
    let mut controller = IntakeController::new();

    let file = candidate("huge.png", "image/png", 20 * 1024 * 1024);
    let outcome = controller
        .select_file(Some(file))
        .expect("widget is not locked");

    assert!(outcome.decode_request.is_none());
    let ui = controller.ui_state();
    assert!(!ui.submit_enabled);
    assert!(!ui.has_preview);
    assert_eq!(
        ui.error_message.as_deref(),
        Some("File too large. Maximum size is 16MB.")
    );

    // The guard keeps blocking the native submission.
    assert_eq!(controller.submit_attempt(), SubmitDecision::Block);
    assert_eq!(controller.state(), IntakeState::Invalid);
}
