use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

use keystall_common::catalog::DEFAULT_RELATED_LIMIT;
use keystall_common::product::Product;

use super::app::{CategoryQuery, Route};
use super::catalog_state::{use_catalog, use_catalog_action, CatalogAction};
use super::error_message::ErrorMessage;
use super::price_display::{PriceDisplay, PriceSize};
use super::product_grid::ProductGrid;
use super::product_image::ProductImage;

/// Full product page: gallery, price, description, specifications, and a
/// "You might also like" section. Optional metadata renders only when
/// present; an unknown slug gets an error panel, not a crash.
#[component]
pub fn ProductDetailView(slug: String) -> Element {
    let catalog_state = use_catalog();
    let actions = use_catalog_action();
    let nav = use_navigator();

    let state = catalog_state.read();

    if state.loading {
        return rsx! {
            div { class: "detail-loading", aria_busy: "true",
                div { class: "detail-skeleton skeleton" }
            }
        };
    }

    if let Some(message) = state.error.clone() {
        return rsx! {
            ErrorMessage {
                message,
                on_retry: move |_| actions.send(CatalogAction::Reload),
            }
        };
    }

    let product = state
        .catalog
        .as_ref()
        .and_then(|catalog| catalog.product_by_slug(&slug));
    let Some(product) = product else {
        return rsx! {
            div { class: "detail-not-found",
                ErrorMessage { message: "Product not found" }
                button {
                    class: "back-link",
                    onclick: move |_| {
                        nav.push(Route::Home { query: CategoryQuery::default() });
                    },
                    "Back to Products"
                }
            }
        };
    };

    let related: Vec<Product> = state
        .catalog
        .as_ref()
        .map(|catalog| {
            catalog
                .related_products(&product.id, DEFAULT_RELATED_LIMIT)
                .into_iter()
                .cloned()
                .collect()
        })
        .unwrap_or_default();
    let product = product.clone();
    drop(state);

    let alt = format!("{} - {}", product.name, product.category);
    let description_html = render_markdown(&product.description);
    let has_specs = product.platform.is_some()
        || product.delivery_method.is_some()
        || product.delivery_time.is_some();

    rsx! {
        article { class: "product-detail",
            button {
                class: "back-link",
                onclick: move |_| {
                    nav.push(Route::Home { query: CategoryQuery::default() });
                },
                "Back to Products"
            }
            div { class: "detail-layout",
                div { class: "detail-image",
                    ProductImage { src: product.image.clone(), alt: alt.clone() }
                    if let Some(images) = product.images.clone() {
                        div { class: "image-gallery",
                            {images.into_iter().enumerate().map(|(i, src)| {
                                rsx! {
                                    ProductImage {
                                        key: "{i}",
                                        src,
                                        alt: format!("{} gallery image {}", product.name, i + 1),
                                    }
                                }
                            })}
                        }
                    }
                }
                div { class: "detail-info",
                    h1 { "{product.name}" }
                    span { class: "category-badge", "{product.category}" }
                    div { class: "detail-price",
                        PriceDisplay { amount: product.price, size: PriceSize::XLarge }
                    }
                    p { class: "detail-blurb", "{product.short_description}" }
                    div { class: "cta-buttons",
                        button { disabled: true, title: "Coming soon", "Add to Cart" }
                        button { disabled: true, title: "Coming soon", "Buy Now" }
                    }
                    p { class: "cta-note", "Cart and checkout are not available yet" }
                }
            }
            section { class: "detail-description",
                h2 { "Description" }
                div {
                    class: "description-body",
                    dangerous_inner_html: "{description_html}"
                }
            }
            if has_specs {
                section { class: "detail-specs",
                    h3 { "Specifications" }
                    dl {
                        if let Some(platform) = product.platform.clone() {
                            dt { "Platform" }
                            dd { "{platform}" }
                        }
                        if let Some(method) = product.delivery_method.clone() {
                            dt { "Delivery Method" }
                            dd { "{method}" }
                        }
                        if let Some(time) = product.delivery_time.clone() {
                            dt { "Delivery Time" }
                            dd { "{time}" }
                        }
                    }
                }
            }
            if !related.is_empty() {
                section { class: "related-products",
                    h2 { "You might also like" }
                    ProductGrid { products: related }
                }
            }
        }
    }
}

/// Render a product's long description (markdown) to HTML.
fn render_markdown(source: &str) -> String {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_STRIKETHROUGH);

    let mut html_out = String::new();
    html::push_html(&mut html_out, Parser::new_ext(source, opts));
    html_out
}
