use std::collections::HashMap;

use dioxus::prelude::*;

use keystall_common::product::{Category, Product};
use keystall_common::url_state::ActiveCategory;

use super::app::{CategoryQuery, Route};
use super::catalog_state::{use_catalog, use_catalog_action, CatalogAction};
use super::category_filter::CategoryFilter;
use super::error_message::ErrorMessage;
use super::hero_banner::HeroBanner;
use super::product_grid::ProductGrid;

/// The catalog browsing page: hero, search, category tabs, product grid.
///
/// The active category arrives from the URL via the router; selecting a tab
/// pushes a new URL, so back/forward restore earlier selections. The search
/// text is deliberately transient and never written to the URL.
#[component]
pub fn HomeView(active: ActiveCategory) -> Element {
    let catalog_state = use_catalog();
    let actions = use_catalog_action();
    let nav = use_navigator();
    let mut search_query = use_signal(String::new);

    let state = catalog_state.read();
    let loading = state.loading;
    let error = state.error.clone();

    // Query-layer reads; everything stays empty until the dataset arrives.
    let searching = !search_query.read().trim().is_empty();
    let (categories, counts, products): (Vec<Category>, HashMap<String, usize>, Vec<Product>) =
        match state.catalog.as_ref() {
            Some(catalog) => {
                let shown = if searching {
                    catalog.search_products(search_query.read().as_str())
                } else {
                    catalog.products_by_category(active.slug())
                };
                (
                    catalog.all_categories().to_vec(),
                    catalog.product_counts_by_category(),
                    shown.into_iter().cloned().collect(),
                )
            }
            None => (Vec::new(), HashMap::new(), Vec::new()),
        };
    drop(state);

    let empty_message = if searching {
        "No products match your search"
    } else {
        "No products found in this category"
    };

    rsx! {
        HeroBanner {}
        div { class: "home-content",
            if let Some(message) = error {
                ErrorMessage {
                    message,
                    on_retry: move |_| actions.send(CatalogAction::Reload),
                }
            } else {
                div { class: "search-bar",
                    input {
                        r#type: "search",
                        placeholder: "Search products...",
                        value: "{search_query}",
                        oninput: move |evt| search_query.set(evt.value()),
                    }
                }
                CategoryFilter {
                    categories,
                    active: active.clone(),
                    counts,
                    on_select: move |slug: String| {
                        nav.push(Route::Home {
                            query: CategoryQuery(ActiveCategory::select(&slug)),
                        });
                    },
                }
                ProductGrid {
                    products,
                    loading,
                    empty_message: empty_message.to_string(),
                }
            }
        }
    }
}
