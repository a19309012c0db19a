//! Active-category selection backed by the URL query string.
//!
//! The selected category lives in the `?category=` parameter, so the filter
//! is shareable, bookmarkable, and restored by back/forward navigation. This
//! module is the pure half of that contract: reading a selection out of a
//! query string and rendering the query string for a selection event. The
//! router owns the side-effecting push.

use crate::catalog::ALL_CATEGORIES;

/// Name of the query parameter the active category is stored under. No other
/// piece of UI state is persisted to the URL.
pub const CATEGORY_PARAM: &str = "category";

/// The category filter currently in effect, as carried in the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveCategory(String);

impl ActiveCategory {
    /// Read the selection from a raw query string (no leading '?').
    /// A missing or empty `category` parameter means no filter; unrelated
    /// parameters are ignored.
    pub fn from_query(query: &str) -> Self {
        let value = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == CATEGORY_PARAM)
            .map(|(_, value)| value);
        Self::from_param(value)
    }

    /// Read the selection from the bare parameter value, if any.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => Self(v.to_string()),
            _ => Self::default(),
        }
    }

    /// The selection after the user picks a category tab.
    pub fn select(slug: &str) -> Self {
        Self::from_param(Some(slug))
    }

    pub fn slug(&self) -> &str {
        &self.0
    }

    pub fn is_all(&self) -> bool {
        self.0 == ALL_CATEGORIES
    }

    /// Whether the given category slug is the selected one.
    pub fn is_active(&self, slug: &str) -> bool {
        self.0 == slug
    }

    /// Render the query string for this selection (no leading '?'). Always
    /// explicit, including for "all", so the resulting address says what it
    /// shows.
    pub fn to_query(&self) -> String {
        format!("{CATEGORY_PARAM}={}", self.0)
    }
}

impl Default for ActiveCategory {
    fn default() -> Self {
        Self(ALL_CATEGORIES.to_string())
    }
}
