//! Products Data

use herbarium::ids::ProductId;

/// Product as authored, before the store assigns timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
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
    /// Index in the authored catalog. Orders products created together.
    pub position: u32,
}
