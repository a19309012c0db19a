use std::fmt;

use dioxus::prelude::*;
use dioxus::router::FromQuery;

use keystall_common::currency::Currency;
use keystall_common::url_state::ActiveCategory;

use super::catalog_state::{use_catalog_coroutine, CatalogState};
use super::home_view::HomeView;
use super::price_display::use_display_currency;
use super::product_detail_view::ProductDetailView;

/// Carries the active category through the home route's query string.
/// Parsing and rendering delegate to the pure [`ActiveCategory`] functions,
/// so the router only supplies "read the URL" and "push a URL".
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CategoryQuery(pub ActiveCategory);

impl FromQuery for CategoryQuery {
    fn from_query(query: &str) -> Self {
        Self(ActiveCategory::from_query(query))
    }
}

impl fmt::Display for CategoryQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_query())
    }
}

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/?:..query")]
    Home { query: CategoryQuery },
    #[route("/products/:slug")]
    ProductPage { slug: String },
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(CatalogState::new()));
    use_context_provider(|| Signal::new(Currency::default()));
    use_catalog_coroutine();

    rsx! { Router::<Route> {} }
}

#[component]
fn AppLayout() -> Element {
    let nav = use_navigator();
    let mut currency = use_display_currency();

    rsx! {
        div { class: "keystall-app",
            header { class: "app-header",
                div { class: "header-top",
                    h1 { "KEYSTALL" }
                    span { class: "tagline", "Digital Products Marketplace" }
                }
                nav {
                    button {
                        onclick: move |_| {
                            nav.push(Route::Home { query: CategoryQuery::default() });
                        },
                        "Browse Products"
                    }
                    select { class: "currency-select",
                        value: "{currency}",
                        onchange: move |evt| {
                            if let Some(picked) = Currency::all()
                                .iter()
                                .find(|c| c.to_string() == evt.value())
                            {
                                currency.set(*picked);
                            }
                        },
                        {Currency::all().iter().map(|c| {
                            let code = c.to_string();
                            let label = c.label();
                            rsx! {
                                option { key: "{code}", value: "{code}", "{label}" }
                            }
                        })}
                    }
                }
            }
            main {
                Outlet::<Route> {}
            }
        }
    }
}

/// Route component: the catalog browsing page.
#[component]
fn Home(query: CategoryQuery) -> Element {
    rsx! { HomeView { active: query.0 } }
}

/// Route component: a product detail page resolved by slug from the URL.
#[component]
fn ProductPage(slug: String) -> Element {
    rsx! { ProductDetailView { slug } }
}
