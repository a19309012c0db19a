use dioxus::prelude::*;

/// User-facing error panel with an optional retry button.
///
/// Purely presentational: the caller owns any retry policy; this component
/// only raises the event.
#[component]
pub fn ErrorMessage(message: String, on_retry: Option<EventHandler<()>>) -> Element {
    rsx! {
        div { class: "error-message", role: "alert", aria_live: "polite",
            span { class: "error-icon", aria_hidden: "true", "⚠" }
            p { "{message}" }
            if let Some(handler) = on_retry {
                button {
                    aria_label: "Retry loading",
                    onclick: move |_| handler.call(()),
                    "Try Again"
                }
            }
        }
    }
}
