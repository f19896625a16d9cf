//! Catalog
//!
//! The product catalog: display data keyed by external product identifier.

use std::{collections::BTreeSet, fmt};

use rustc_hash::FxHashMap;
use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};

use crate::prices::format_price;

/// Base path that relative product image file names are served from.
pub const STATIC_IMAGE_BASE: &str = "/static/images";

/// External product identifier, as used by the storefront and its URLs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Product
#[derive(Debug, Clone)]
pub struct Product {
    /// Product name
    pub name: String,

    /// Product price
    pub price: Money<'static, Currency>,

    /// Product description
    pub description: String,

    /// Image file name (e.g. `CUNFU5.jpg`) or a full URL
    pub image: String,

    /// Category the product is shelved under (e.g. `health`, `beauty`)
    pub category: String,
}

impl Product {
    /// Resolve the image reference to the URL the storefront serves it from.
    ///
    /// Full URLs pass through unchanged; bare file names are served from
    /// [`STATIC_IMAGE_BASE`].
    #[must_use]
    pub fn image_url(&self) -> String {
        if self.image.starts_with("http://") || self.image.starts_with("https://") {
            self.image.clone()
        } else {
            format!("{STATIC_IMAGE_BASE}/{}", self.image)
        }
    }

    /// Project this product into the display data the quick-view modal shows.
    #[must_use]
    pub fn summary(&self) -> ProductSummary {
        ProductSummary {
            name: self.name.clone(),
            price: format_price(
                self.price.to_minor_units(),
                self.price.currency().iso_alpha_code,
            ),
            description: self.description.clone(),
            image_url: self.image_url(),
        }
    }
}

/// The display projection of a [`Product`]: exactly the fields the quick-view
/// modal renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSummary {
    /// Display name
    pub name: String,

    /// Formatted price (e.g. `$12.99`)
    pub price: String,

    /// Display description
    pub description: String,

    /// Resolved image URL
    pub image_url: String,
}

/// Mapping from [`ProductId`] to [`Product`].
///
/// Lookups for unknown identifiers return `None`; the fallback-to-default
/// policy belongs to [`crate::presenter::QuickViewPresenter`] so it applies to
/// any product source, not just this one.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: FxHashMap<ProductId, Product>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a product under the given identifier, replacing any existing
    /// entry.
    pub fn insert(&mut self, id: ProductId, product: Product) {
        self.products.insert(id, product);
    }

    /// Look up a product by identifier.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Look up a product and project it into its display summary.
    #[must_use]
    pub fn summary(&self, id: ProductId) -> Option<ProductSummary> {
        self.get(id).map(Product::summary)
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterate over all entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (ProductId, &Product)> {
        self.products.iter().map(|(id, product)| (*id, product))
    }

    /// All categories present in the catalog, sorted and de-duplicated.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        self.products
            .values()
            .map(|product| product.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;

    use super::*;

    fn balm() -> Product {
        Product {
            name: "CONFO BALM".to_string(),
            price: Money::from_minor(12_99, iso::USD),
            description: "Soothing relief for muscle aches and pains.".to_string(),
            image: "CUNFU5.jpg".to_string(),
            category: "health".to_string(),
        }
    }

    #[test]
    fn summary_projects_display_fields() {
        let summary = balm().summary();

        assert_eq!(summary.name, "CONFO BALM");
        assert_eq!(summary.price, "$12.99");
        assert_eq!(
            summary.description,
            "Soothing relief for muscle aches and pains."
        );
        assert_eq!(summary.image_url, "/static/images/CUNFU5.jpg");
    }

    #[test]
    fn image_url_prefixes_bare_file_names() {
        let product = balm();

        assert_eq!(product.image_url(), "/static/images/CUNFU5.jpg");
    }

    #[test]
    fn image_url_passes_full_urls_through() {
        let mut product = balm();

        product.image = "https://via.placeholder.com/300x200".to_string();

        assert_eq!(product.image_url(), "https://via.placeholder.com/300x200");
    }

    #[test]
    fn catalog_lookup_hits_and_misses() {
        let mut catalog = Catalog::new();

        catalog.insert(ProductId(1), balm());

        assert!(catalog.get(ProductId(1)).is_some());
        assert!(catalog.get(ProductId(99)).is_none());
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn catalog_summary_matches_product_summary() {
        let mut catalog = Catalog::new();

        catalog.insert(ProductId(1), balm());

        assert_eq!(catalog.summary(ProductId(1)), Some(balm().summary()));
        assert_eq!(catalog.summary(ProductId(2)), None);
    }

    #[test]
    fn categories_are_sorted_and_deduplicated() {
        let mut catalog = Catalog::new();
        let mut serum = balm();

        serum.category = "beauty".to_string();

        catalog.insert(ProductId(1), balm());
        catalog.insert(ProductId(2), balm());
        catalog.insert(ProductId(3), serum);

        assert_eq!(catalog.categories(), vec!["beauty", "health"]);
    }

    #[test]
    fn product_id_displays_as_bare_integer() {
        assert_eq!(ProductId(42).to_string(), "42");
    }
}
