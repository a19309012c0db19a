use dioxus::prelude::*;

/// Full-width promotional banner at the top of the catalog page.
#[component]
pub fn HeroBanner() -> Element {
    rsx! {
        section { class: "hero-banner",
            h1 { "Digital Products Marketplace" }
            p { "Games • Software • AI Tools • More" }
        }
    }
}
