use dioxus::prelude::*;

use keystall_common::catalog::Catalog;

/// Actions the UI can send to the catalog-loading coroutine.
#[derive(Debug, Clone)]
pub enum CatalogAction {
    /// Drop any previous error and load the dataset again.
    Reload,
}

/// Catalog data shared across all components.
///
/// Loaded once at startup by the coroutine; components read it for every
/// query-layer call. The dataset itself is never mutated, only swapped in.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    /// The loaded dataset, once available.
    pub catalog: Option<Catalog>,
    /// True while a load is in flight.
    pub loading: bool,
    /// Message from the last failed load.
    pub error: Option<String>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }
}

pub fn use_catalog() -> Signal<CatalogState> {
    use_context::<Signal<CatalogState>>()
}

/// Get a handle to send actions to the catalog-loading coroutine.
pub fn use_catalog_action() -> Coroutine<CatalogAction> {
    use_coroutine_handle::<CatalogAction>()
}

/// Start the catalog-loading coroutine: one load at startup, another for
/// every `Reload` action (the error panel's retry button).
pub fn use_catalog_coroutine() {
    let state = use_catalog();
    use_coroutine(move |mut rx: UnboundedReceiver<CatalogAction>| async move {
        use futures::StreamExt;

        load_catalog(state);
        while let Some(action) = rx.next().await {
            match action {
                CatalogAction::Reload => load_catalog(state),
            }
        }
    });
}

fn load_catalog(mut state: Signal<CatalogState>) {
    state.write().loading = true;
    match Catalog::bundled() {
        Ok(catalog) => {
            tracing::debug!(
                products = catalog.all_products().len(),
                categories = catalog.all_categories().len(),
                "catalog loaded"
            );
            let mut s = state.write();
            s.catalog = Some(catalog);
            s.error = None;
            s.loading = false;
        }
        Err(err) => {
            tracing::error!("catalog load failed: {err}");
            let mut s = state.write();
            s.error = Some("Unable to load products".into());
            s.loading = false;
        }
    }
}
