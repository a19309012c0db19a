use serde::{Deserialize, Serialize};

/// Unique product identifier ("prod_001" style), stable across dataset revisions.
/// Distinct from the slug, which is the URL-facing identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

/// A digital product in the catalog.
///
/// Field names on the wire are camelCase, matching the bundled JSON dataset.
/// Optional metadata is rendered only when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    /// URL-safe identifier used for detail-page routing.
    pub slug: String,
    pub name: String,
    /// Matches a [`Category::id`] by convention; not enforced at load time.
    pub category: String,
    /// Decimal amount in the store's base denomination. The display currency
    /// is chosen at render time, never stored per product.
    pub price: f64,
    pub short_description: String,
    /// Long-form description, markdown.
    pub description: String,
    /// Primary image path, e.g. "/images/products/{slug}.jpg".
    pub image: String,
    /// Additional gallery images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    /// Platform compatibility, e.g. "Windows, Mac, Web".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// How the product is delivered, e.g. "Email".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_method: Option<String>,
    /// Expected delivery timeframe, e.g. "Instant".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<String>,
    /// Highlighted with a badge in browse views when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    /// Hand-curated related product ids, in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_products: Option<Vec<ProductId>>,
}

/// A filter facet products are grouped under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Matched against [`Product::category`].
    pub id: String,
    /// Display label.
    pub name: String,
    /// URL parameter value; equal to `id` in the bundled dataset.
    pub slug: String,
}
