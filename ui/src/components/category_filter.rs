use std::collections::HashMap;

use dioxus::prelude::*;

use keystall_common::product::Category;
use keystall_common::url_state::ActiveCategory;

/// Horizontal category tabs with the active tab highlighted and a product
/// count badge per tab. Selection is reported upward; the parent owns the
/// URL update.
#[component]
pub fn CategoryFilter(
    categories: Vec<Category>,
    active: ActiveCategory,
    counts: HashMap<String, usize>,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "category-filter",
            role: "tablist",
            aria_label: "Filter products by category",
            {categories.into_iter().map(|category| {
                let is_active = active.is_active(&category.slug);
                let class = if is_active { "filter-tab active" } else { "filter-tab" };
                let count = counts.get(&category.slug).copied();
                let slug = category.slug.clone();
                rsx! {
                    button {
                        key: "{category.id}",
                        class: "{class}",
                        role: "tab",
                        aria_selected: "{is_active}",
                        onclick: move |_| on_select.call(slug.clone()),
                        "{category.name}"
                        if let Some(count) = count {
                            span { class: "tab-count", " ({count})" }
                        }
                    }
                }
            })}
        }
    }
}
