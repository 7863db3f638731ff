//! Products

use jiff::Timestamp;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{categories::same_category, ids::ProductId, pricing, search::SearchQuery};

/// A catalog product.
///
/// Prices are in minor units of the site currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub original_price: Option<u64>,
    pub image: String,
    pub images: Vec<String>,
    pub rating: f64,
    pub review_count: u32,
    pub category: String,
    pub tags: Vec<String>,
    pub benefits: Vec<String>,
    pub ingredients: Vec<String>,
    pub usage: String,
    pub is_new: bool,
    pub is_bestseller: bool,
    pub in_stock: bool,
    pub sku: String,
    pub weight: Option<String>,
    pub dimensions: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Product {
    /// Site-relative detail page path, with the id percent-encoded.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/products/{}", urlencoding::encode(self.id.as_str()))
    }

    /// Percentage saved against the original price, if discounted.
    #[must_use]
    pub fn discount_percentage(&self) -> Option<u64> {
        self.original_price
            .and_then(|original| pricing::discount_percentage(self.price, original))
    }

    /// Featured products are the ones flagged bestseller or new.
    #[must_use]
    pub fn is_featured(&self) -> bool {
        self.is_bestseller || self.is_new
    }

    /// Whether the query occurs in the name, description, category or a tag.
    #[must_use]
    pub fn matches(&self, query: &SearchQuery) -> bool {
        query.matches_any(
            [
                self.name.as_str(),
                self.description.as_str(),
                self.category.as_str(),
            ]
            .into_iter()
            .chain(self.tags.iter().map(String::as_str)),
        )
    }

    /// Main image followed by any gallery images, without repeats.
    #[must_use]
    pub fn gallery(&self) -> Vec<&str> {
        let mut seen = FxHashSet::default();

        std::iter::once(self.image.as_str())
            .chain(self.images.iter().map(String::as_str))
            .filter(|image| !image.is_empty() && seen.insert(*image))
            .collect()
    }
}

/// Other products in the same category as `product`, in catalog order.
pub fn related_products<'a>(
    catalog: &'a [Product],
    product: &Product,
    limit: usize,
) -> SmallVec<[&'a Product; 4]> {
    catalog
        .iter()
        .filter(|candidate| candidate.id != product.id)
        .filter(|candidate| same_category(&candidate.category, &product.category))
        .take(limit)
        .collect()
}

/// Products whose ids appear in `ids`, in catalog order.
///
/// Ids that match nothing are ignored.
pub fn products_with_ids<'a>(
    catalog: &'a [Product],
    ids: &[ProductId],
    limit: usize,
) -> Vec<&'a Product> {
    let wanted: FxHashSet<&str> = ids.iter().map(ProductId::as_str).collect();

    catalog
        .iter()
        .filter(|product| wanted.contains(product.id.as_str()))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::fixtures::product;

    use super::*;

    #[test]
    fn discount_uses_original_price() {
        let mut ashwagandha = product("1", "Wellness");
        ashwagandha.price = 89_900;
        ashwagandha.original_price = Some(119_900);

        assert_eq!(ashwagandha.discount_percentage(), Some(25));

        ashwagandha.original_price = None;

        assert_eq!(ashwagandha.discount_percentage(), None);
    }

    #[test]
    fn path_encodes_the_id() {
        assert_eq!(product("1", "Wellness").path(), "/products/1");
        assert_eq!(product("oil 100ml?", "Hair Care").path(), "/products/oil%20100ml%3F");
    }

    #[test]
    fn featured_means_bestseller_or_new() {
        let mut p = product("1", "Wellness");

        assert!(!p.is_featured());

        p.is_new = true;
        assert!(p.is_featured());

        p.is_new = false;
        p.is_bestseller = true;
        assert!(p.is_featured());
    }

    #[test]
    fn matches_checks_name_description_category_and_tags() {
        let mut p = product("1", "Brain Health");
        p.name = "Brahmi Memory Booster".to_string();
        p.description = "Traditional formula for mental clarity".to_string();
        p.tags = vec!["focus".to_string()];

        assert!(p.matches(&SearchQuery::new("brahmi")));
        assert!(p.matches(&SearchQuery::new("CLARITY")));
        assert!(p.matches(&SearchQuery::new("brain")));
        assert!(p.matches(&SearchQuery::new("Focus")));
        assert!(!p.matches(&SearchQuery::new("turmeric")));
    }

    #[test]
    fn related_products_share_category_and_exclude_self() {
        let catalog = vec![
            product("1", "Wellness"),
            product("2", "wellness"),
            product("3", "Skin Care"),
            product("4", "Wellness"),
        ];

        let related = related_products(&catalog, &catalog[0], 4);
        let ids: Vec<&str> = related.iter().map(|p| p.id.as_str()).collect();

        assert_eq!(ids, vec!["2", "4"]);
    }

    #[test]
    fn related_products_respects_limit() {
        let catalog: Vec<Product> = (0..10)
            .map(|i| product(&i.to_string(), "Wellness"))
            .collect();

        assert_eq!(related_products(&catalog, &catalog[0], 4).len(), 4);
    }

    #[test]
    fn products_with_ids_ignores_stale_ids() {
        let catalog = vec![product("1", "Wellness"), product("2", "Wellness")];
        let ids = vec![ProductId::new("2"), ProductId::new("gone")];

        let found = products_with_ids(&catalog, &ids, 4);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "2");
    }

    #[test]
    fn gallery_deduplicates_main_image() {
        let mut p = product("1", "Wellness");
        p.image = "/a.jpg".to_string();
        p.images = vec!["/a.jpg".to_string(), "/b.jpg".to_string(), String::new()];

        assert_eq!(p.gallery(), vec!["/a.jpg", "/b.jpg"]);
    }
}
