//! Gated submit control.

use dioxus::prelude::*;

/// Props for the [`SubmitButton`] component.
#[derive(Props, Clone, PartialEq)]
pub struct SubmitButtonProps {
    /// Whether the control accepts activation.
    enabled: bool,
    /// Swaps the idle label for the loading indicator.
    loading: bool,
}

/// The form's submit button.
///
/// Disabled unless the intake controller reports a validated
/// candidate; shows a loading label while a submission is in flight.
/// The actual submit gating happens in the form's `onsubmit` handler;
/// the disabled attribute is presentation.
#[component]
pub fn SubmitButton(props: SubmitButtonProps) -> Element {
    rsx! {
        button {
            r#type: "submit",
            class: "submit-button",
            disabled: !props.enabled,

            if props.loading {
                span { class: "spinner", aria_hidden: "true" }
                "Processing..."
            } else {
                "Remove Background"
            }
        }
    }
}
