//! Product catalog JSON
//!
//! `data/products.json` holds an array of products with camelCase keys and
//! prices in major units:
//!
//! ```json
//! [{ "id": "1", "name": "Ashwagandha Capsules", "price": 899, "originalPrice": 1199.5, ... }]
//! ```

use std::path::Path;

use herbarium::{ids::ProductId, pricing::to_minor_units};
use rust_decimal::Decimal;
use rusty_money::iso::Currency;
use serde::Deserialize;

use crate::{domain::products::data::NewProduct, import::ImportError};

fn in_stock_default() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductJson {
    id: String,
    name: String,
    description: String,
    price: Decimal,
    original_price: Option<Decimal>,
    image: String,
    #[serde(default)]
    images: Vec<String>,
    #[serde(default)]
    rating: f64,
    #[serde(default)]
    review_count: u32,
    category: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    benefits: Vec<String>,
    #[serde(default)]
    ingredients: Vec<String>,
    #[serde(default)]
    usage: String,
    #[serde(default)]
    is_new: bool,
    #[serde(default)]
    is_bestseller: bool,
    #[serde(default = "in_stock_default")]
    in_stock: bool,
    sku: String,
    weight: Option<String>,
    dimensions: Option<String>,
}

fn minor_units(
    id: &str,
    price: Decimal,
    currency: &'static Currency,
) -> Result<u64, ImportError> {
    to_minor_units(price, currency).ok_or_else(|| ImportError::InvalidPrice {
        id: id.to_string(),
        price,
    })
}

impl ProductJson {
    fn into_new_product(
        self,
        position: u32,
        currency: &'static Currency,
    ) -> Result<NewProduct, ImportError> {
        let price = minor_units(&self.id, self.price, currency)?;
        let original_price = self
            .original_price
            .map(|original| minor_units(&self.id, original, currency))
            .transpose()?;

        if !(0.0..=5.0).contains(&self.rating) {
            return Err(ImportError::InvalidRating {
                id: self.id,
                rating: self.rating,
            });
        }

        Ok(NewProduct {
            id: ProductId::new(self.id),
            name: self.name,
            description: self.description,
            price,
            original_price,
            image: self.image,
            images: self.images,
            rating: self.rating,
            review_count: self.review_count,
            category: self.category,
            tags: self.tags,
            benefits: self.benefits,
            ingredients: self.ingredients,
            usage: self.usage,
            is_new: self.is_new,
            is_bestseller: self.is_bestseller,
            in_stock: self.in_stock,
            sku: self.sku,
            weight: self.weight,
            dimensions: self.dimensions,
            position,
        })
    }
}

/// Parse the product catalog, converting prices to minor units of
/// `currency`.
///
/// # Errors
///
/// Fails on malformed JSON, negative or oversized prices, or ratings outside
/// `0..=5`.
pub fn parse_products(
    path: &Path,
    text: &str,
    currency: &'static Currency,
) -> Result<Vec<NewProduct>, ImportError> {
    let products: Vec<ProductJson> =
        serde_json::from_str(text).map_err(|source| ImportError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    (0_u32..)
        .zip(products)
        .map(|(position, product)| product.into_new_product(position, currency))
        .collect()
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;
    use testresult::TestResult;

    use super::*;

    const CATALOG: &str = r#"[
        {
            "id": "1",
            "name": "Ashwagandha Capsules",
            "description": "Organic root extract.",
            "price": 899,
            "originalPrice": 1199.5,
            "image": "/images/products/ashwagandha.jpg",
            "rating": 4.8,
            "reviewCount": 124,
            "category": "Wellness",
            "tags": ["stress", "energy"],
            "benefits": ["Reduces stress"],
            "ingredients": ["Ashwagandha root extract"],
            "usage": "Take 1 capsule twice daily.",
            "isBestseller": true,
            "inStock": true,
            "sku": "CA-ASH-60",
            "weight": "60 capsules"
        },
        {
            "id": "2",
            "name": "Bhringraj Hair Oil",
            "description": "Traditional hair oil.",
            "price": 649,
            "image": "/images/products/bhringraj.jpg",
            "category": "Hair Care",
            "sku": "CA-BHR-100"
        }
    ]"#;

    #[test]
    fn prices_convert_to_minor_units() -> TestResult {
        let products = parse_products(Path::new("products.json"), CATALOG, iso::INR)?;

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].price, 89_900);
        assert_eq!(products[0].original_price, Some(119_950));
        assert_eq!(products[1].original_price, None);
        assert_eq!(products[0].position, 0);
        assert_eq!(products[1].position, 1);

        Ok(())
    }

    #[test]
    fn optional_fields_take_defaults() -> TestResult {
        let products = parse_products(Path::new("products.json"), CATALOG, iso::INR)?;
        let oil = &products[1];

        assert!(oil.in_stock);
        assert!(!oil.is_new);
        assert!(oil.tags.is_empty());
        assert_eq!(oil.review_count, 0);
        assert_eq!(oil.weight, None);

        Ok(())
    }

    #[test]
    fn negative_price_is_rejected() {
        let text = r#"[{"id":"x","name":"n","description":"d","price":-1,"image":"i","category":"c","sku":"s"}]"#;

        let result = parse_products(Path::new("products.json"), text, iso::INR);

        assert!(
            matches!(&result, Err(ImportError::InvalidPrice { id, .. }) if id == "x"),
            "expected invalid price, got {result:?}"
        );
    }

    #[test]
    fn out_of_range_rating_is_rejected() {
        let text = r#"[{"id":"x","name":"n","description":"d","price":1,"image":"i","category":"c","sku":"s","rating":7}]"#;

        let result = parse_products(Path::new("products.json"), text, iso::INR);

        assert!(matches!(result, Err(ImportError::InvalidRating { .. })));
    }

    #[test]
    fn malformed_json_reports_the_file() {
        let result = parse_products(Path::new("data/products.json"), "{", iso::INR);

        assert!(
            matches!(&result, Err(ImportError::Json { path, .. }) if path == Path::new("data/products.json"))
        );
    }
}
