use dioxus::prelude::*;

use keystall_common::product::Product;

use super::app::Route;
use super::price_display::{PriceDisplay, PriceSize};
use super::product_image::ProductImage;

/// Summary card for browse views. The whole card is the tap target and
/// navigates to the product's detail page.
#[component]
pub fn ProductCard(product: Product) -> Element {
    let nav = use_navigator();
    let slug = product.slug.clone();
    let featured = product.featured.unwrap_or(false);
    let alt = format!("{} - {}", product.name, product.category);

    rsx! {
        article {
            class: "product-card",
            aria_label: "View {product.name}",
            onclick: move |_| {
                nav.push(Route::ProductPage { slug: slug.clone() });
            },
            ProductImage { src: product.image.clone(), alt }
            div { class: "card-body",
                div { class: "card-badges",
                    span { class: "category-badge", "{product.category}" }
                    if featured {
                        span { class: "featured-badge", "Featured" }
                    }
                }
                h3 { "{product.name}" }
                p { class: "card-blurb", "{product.short_description}" }
                PriceDisplay { amount: product.price, size: PriceSize::Large }
            }
        }
    }
}
