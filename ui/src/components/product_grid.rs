use dioxus::prelude::*;

use keystall_common::product::Product;

use super::product_card::ProductCard;

/// Number of placeholder cards shown while the catalog loads.
const SKELETON_COUNT: usize = 8;

/// Responsive grid of product cards with a three-state contract:
/// loading (skeleton placeholders, the list is ignored), empty (message),
/// populated (cards).
#[component]
pub fn ProductGrid(
    products: Vec<Product>,
    #[props(default = false)] loading: bool,
    #[props(default = String::from("No products found"))] empty_message: String,
) -> Element {
    if loading {
        return rsx! {
            div {
                class: "product-grid",
                aria_busy: "true",
                aria_label: "Product grid",
                for i in 0..SKELETON_COUNT {
                    div { key: "{i}", class: "product-card skeleton" }
                }
            }
        };
    }

    if products.is_empty() {
        return rsx! {
            div { class: "empty-state",
                p { "{empty_message}" }
            }
        };
    }

    rsx! {
        section { class: "product-grid", aria_label: "Product grid",
            {products.into_iter().map(|product| {
                let id = product.id.0.clone();
                rsx! {
                    ProductCard { key: "{id}", product }
                }
            })}
        }
    }
}
