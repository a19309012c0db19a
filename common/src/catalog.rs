use std::collections::HashMap;

use thiserror::Error;

use crate::product::{Category, Product, ProductId};

/// Category slug that selects the whole catalog.
pub const ALL_CATEGORIES: &str = "all";

/// Default number of items returned by [`Catalog::related_products`].
pub const DEFAULT_RELATED_LIMIT: usize = 4;

const PRODUCTS_JSON: &str = include_str!("../data/products.json");
const CATEGORIES_JSON: &str = include_str!("../data/categories.json");

/// Failure to parse the bundled dataset. The dataset is a build-time
/// artifact, so this only fires when the data files are broken.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse product data: {0}")]
    BadProductData(#[source] serde_json::Error),
    #[error("failed to parse category data: {0}")]
    BadCategoryData(#[source] serde_json::Error),
}

/// The immutable product/category dataset every query runs against.
///
/// Loaded once at startup from the bundled data files, or constructed from
/// fixture data in tests. Never mutated afterwards; all queries are pure
/// reads that preserve dataset order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// Parse the bundled JSON dataset.
    pub fn bundled() -> Result<Self, CatalogError> {
        let products =
            serde_json::from_str(PRODUCTS_JSON).map_err(CatalogError::BadProductData)?;
        let categories =
            serde_json::from_str(CATEGORIES_JSON).map_err(CatalogError::BadCategoryData)?;
        Ok(Self::new(products, categories))
    }

    /// Every product, in dataset order.
    pub fn all_products(&self) -> &[Product] {
        &self.products
    }

    /// Every category, in dataset order.
    pub fn all_categories(&self) -> &[Category] {
        &self.categories
    }

    /// The product with the given slug. Slugs are unique by dataset
    /// invariant; were that ever violated, the first match wins.
    pub fn product_by_slug(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }

    pub fn product_by_id(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == *id)
    }

    /// Products in the given category, dataset order. The sentinel "all"
    /// selects everything; an unknown slug yields an empty list, not an
    /// error.
    pub fn products_by_category(&self, category_slug: &str) -> Vec<&Product> {
        if category_slug == ALL_CATEGORIES {
            return self.products.iter().collect();
        }
        self.products
            .iter()
            .filter(|p| p.category == category_slug)
            .collect()
    }

    /// Related products for a "You might also like" section.
    ///
    /// Hand-curated relations win over the category fallback; the two are
    /// never mixed. Curated ids resolve in listed order, dangling ids are
    /// skipped, and resolution stops once `limit` items are collected. With
    /// no curation, other products in the same category fill in, dataset
    /// order, truncated to `limit`.
    pub fn related_products(&self, product_id: &ProductId, limit: usize) -> Vec<&Product> {
        let Some(product) = self.product_by_id(product_id) else {
            return Vec::new();
        };

        if let Some(ids) = product
            .related_products
            .as_ref()
            .filter(|ids| !ids.is_empty())
        {
            let mut related = Vec::new();
            for id in ids {
                if let Some(found) = self.product_by_id(id) {
                    related.push(found);
                    if related.len() >= limit {
                        break;
                    }
                }
            }
            return related;
        }

        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != *product_id)
            .take(limit)
            .collect()
    }

    /// Case-insensitive substring search across name, short description and
    /// description. A blank query returns the whole catalog. Dataset order,
    /// no relevance ranking.
    pub fn search_products(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.products.iter().collect();
        }
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.short_description.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Product count per category slug, plus a synthetic "all" entry with
    /// the total. Drives the count badges on the filter tabs.
    pub fn product_counts_by_category(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        counts.insert(ALL_CATEGORIES.to_string(), self.products.len());
        for category in &self.categories {
            if category.id == ALL_CATEGORIES {
                continue;
            }
            let count = self
                .products
                .iter()
                .filter(|p| p.category == category.id)
                .count();
            counts.insert(category.slug.clone(), count);
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url_state::ActiveCategory;

    fn product(id: &str, slug: &str, category: &str) -> Product {
        Product {
            id: ProductId(id.into()),
            slug: slug.into(),
            name: format!("Product {id}"),
            category: category.into(),
            price: 9.99,
            short_description: String::new(),
            description: String::new(),
            image: format!("/images/products/{slug}.jpg"),
            images: None,
            platform: None,
            delivery_method: None,
            delivery_time: None,
            featured: None,
            related_products: None,
        }
    }

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.into(),
            name: name.into(),
            slug: id.into(),
        }
    }

    fn fixture_catalog() -> Catalog {
        let mut curated = product("prod_001", "alpha", "games");
        curated.name = "Premium Game Pass".into();
        curated.short_description = "Access to 100+ premium games.".into();
        curated.related_products = Some(vec![
            ProductId("prod_004".into()),
            ProductId("prod_404".into()), // dangling, must be skipped
            ProductId("prod_002".into()),
        ]);

        let mut searchable = product("prod_002", "bravo", "games");
        searchable.name = "Retro Arcade Collection".into();
        searchable.description = "Classic GAME titles from the golden era.".into();

        Catalog::new(
            vec![
                curated,
                searchable,
                product("prod_003", "charlie", "software"),
                product("prod_004", "delta", "games"),
                product("prod_005", "echo", "software"),
            ],
            vec![
                category("all", "All Products"),
                category("games", "Games"),
                category("software", "Software"),
            ],
        )
    }

    #[test]
    fn all_category_matches_all_products() {
        let catalog = fixture_catalog();
        let all: Vec<_> = catalog.all_products().iter().collect();
        assert_eq!(catalog.products_by_category(ALL_CATEGORIES), all);
    }

    #[test]
    fn category_filter_returns_only_matching_products() {
        let catalog = fixture_catalog();
        let games = catalog.products_by_category("games");
        assert_eq!(games.len(), 3);
        assert!(games.iter().all(|p| p.category == "games"));
        // Dataset order preserved
        let ids: Vec<_> = games.iter().map(|p| p.id.0.as_str()).collect();
        assert_eq!(ids, ["prod_001", "prod_002", "prod_004"]);
    }

    #[test]
    fn unknown_category_is_empty_not_an_error() {
        let catalog = fixture_catalog();
        assert!(catalog.products_by_category("nonexistent").is_empty());
    }

    #[test]
    fn product_by_slug_resolves_every_dataset_slug() {
        let catalog = fixture_catalog();
        for p in catalog.all_products() {
            let found = catalog.product_by_slug(&p.slug).expect("slug must resolve");
            assert_eq!(found.slug, p.slug);
        }
        assert!(catalog.product_by_slug("no-such-slug").is_none());
    }

    #[test]
    fn curated_relations_keep_order_and_skip_dangling_ids() {
        let catalog = fixture_catalog();
        let related = catalog.related_products(&ProductId("prod_001".into()), 4);
        let ids: Vec<_> = related.iter().map(|p| p.id.0.as_str()).collect();
        assert_eq!(ids, ["prod_004", "prod_002"]);
    }

    #[test]
    fn curated_relations_respect_limit() {
        let catalog = fixture_catalog();
        let related = catalog.related_products(&ProductId("prod_001".into()), 1);
        let ids: Vec<_> = related.iter().map(|p| p.id.0.as_str()).collect();
        assert_eq!(ids, ["prod_004"]);
    }

    #[test]
    fn fallback_relations_share_category_and_exclude_self() {
        let catalog = fixture_catalog();
        let subject = ProductId("prod_002".into());
        let related = catalog.related_products(&subject, 4);
        assert!(!related.is_empty());
        assert!(related.iter().all(|p| p.category == "games"));
        assert!(related.iter().all(|p| p.id != subject));
    }

    #[test]
    fn fallback_relations_truncate_to_limit() {
        let catalog = fixture_catalog();
        let related = catalog.related_products(&ProductId("prod_002".into()), 1);
        assert_eq!(related.len(), 1);
    }

    #[test]
    fn related_products_for_unknown_id_is_empty() {
        let catalog = fixture_catalog();
        assert!(catalog
            .related_products(&ProductId("prod_999".into()), 4)
            .is_empty());
    }

    #[test]
    fn blank_search_returns_everything() {
        let catalog = fixture_catalog();
        assert_eq!(
            catalog.search_products("").len(),
            catalog.all_products().len()
        );
        assert_eq!(
            catalog.search_products("   ").len(),
            catalog.all_products().len()
        );
    }

    #[test]
    fn search_is_case_insensitive() {
        let catalog = fixture_catalog();
        let upper = catalog.search_products("GAME");
        let lower = catalog.search_products("game");
        assert!(!upper.is_empty());
        assert_eq!(upper, lower);
    }

    #[test]
    fn search_matches_across_name_and_descriptions() {
        let catalog = fixture_catalog();
        // "golden era" only appears in prod_002's long description
        let hits = catalog.search_products("golden era");
        let ids: Vec<_> = hits.iter().map(|p| p.id.0.as_str()).collect();
        assert_eq!(ids, ["prod_002"]);
        // "premium" only appears in prod_001's name
        let hits = catalog.search_products("premium");
        let ids: Vec<_> = hits.iter().map(|p| p.id.0.as_str()).collect();
        assert_eq!(ids, ["prod_001"]);
    }

    #[test]
    fn counts_cover_every_category_plus_all() {
        let catalog = fixture_catalog();
        let counts = catalog.product_counts_by_category();
        assert_eq!(counts[ALL_CATEGORIES], catalog.all_products().len());
        assert_eq!(counts["games"], 3);
        assert_eq!(counts["software"], 2);

        let known_total: usize = counts
            .iter()
            .filter(|(slug, _)| slug.as_str() != ALL_CATEGORIES)
            .map(|(_, n)| n)
            .sum();
        let in_known_categories = catalog
            .all_products()
            .iter()
            .filter(|p| {
                catalog
                    .all_categories()
                    .iter()
                    .any(|c| c.id == p.category && c.id != ALL_CATEGORIES)
            })
            .count();
        assert_eq!(known_total, in_known_categories);
    }

    // End to end: the URL drives the active category, the active category
    // drives the grid contents.
    #[test]
    fn url_category_drives_the_rendered_grid() {
        let catalog = Catalog::new(
            vec![
                product("p1", "a", "games"),
                product("p2", "b", "software"),
                product("p3", "c", "games"),
            ],
            vec![category("games", "Games"), category("software", "Software")],
        );

        let active = ActiveCategory::from_query("category=games");
        let ids: Vec<_> = catalog
            .products_by_category(active.slug())
            .iter()
            .map(|p| p.id.0.as_str())
            .collect();
        assert_eq!(ids, ["p1", "p3"]);

        let active = ActiveCategory::from_query("category=software");
        assert_eq!(active.slug(), "software");
        let ids: Vec<_> = catalog
            .products_by_category(active.slug())
            .iter()
            .map(|p| p.id.0.as_str())
            .collect();
        assert_eq!(ids, ["p2"]);

        let active = ActiveCategory::from_query("");
        assert!(active.is_all());
        assert_eq!(catalog.products_by_category(active.slug()).len(), 3);
    }

    #[test]
    fn bundled_dataset_parses_and_is_well_formed() {
        let catalog = Catalog::bundled().expect("bundled dataset must parse");
        assert!(!catalog.all_products().is_empty());
        assert!(!catalog.all_categories().is_empty());

        for (i, p) in catalog.all_products().iter().enumerate() {
            for other in &catalog.all_products()[i + 1..] {
                assert_ne!(p.id, other.id, "duplicate product id {:?}", p.id);
                assert_ne!(p.slug, other.slug, "duplicate product slug {}", p.slug);
            }
            assert!(p.price >= 0.0, "negative price on {:?}", p.id);
            assert!(
                catalog.all_categories().iter().any(|c| c.id == p.category),
                "product {:?} references unknown category {}",
                p.id,
                p.category
            );
            // Curated relations must resolve and never point back at the
            // product itself.
            for related in p.related_products.iter().flatten() {
                assert_ne!(*related, p.id, "self-referencing relation on {:?}", p.id);
                assert!(
                    catalog.product_by_id(related).is_some(),
                    "dangling relation {:?} on {:?}",
                    related,
                    p.id
                );
            }
        }
    }
}
