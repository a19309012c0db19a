use dioxus::prelude::*;

/// Product image with a fallback block for failed loads.
///
/// The error state is a one-way latch: once the source fails there is no
/// retry, only the fallback.
#[component]
pub fn ProductImage(src: String, alt: String) -> Element {
    let mut errored = use_signal(|| false);

    if errored() {
        return rsx! {
            div {
                class: "product-image fallback",
                role: "img",
                aria_label: "{alt}",
                span { class: "fallback-icon", aria_hidden: "true", "🖼" }
                p { "Image unavailable" }
            }
        };
    }

    rsx! {
        img {
            class: "product-image",
            src: "{src}",
            alt: "{alt}",
            loading: "lazy",
            onerror: move |_| errored.set(true),
        }
    }
}
