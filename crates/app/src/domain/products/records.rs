//! Product Records

use herbarium::{ids::ProductId, products::Product};
use sqlx::{FromRow, Row, postgres::PgRow};

use crate::domain::columns::{try_get_optional_u64, try_get_timestamp, try_get_u32, try_get_u64};

/// Row of the `products` table.
#[derive(Debug, Clone)]
pub(crate) struct ProductRecord(Product);

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        record.0
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self(Product {
            id: ProductId::new(row.try_get::<String, _>("id")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: try_get_u64(row, "price")?,
            original_price: try_get_optional_u64(row, "original_price")?,
            image: row.try_get("image")?,
            images: row.try_get("images")?,
            rating: row.try_get("rating")?,
            review_count: try_get_u32(row, "review_count")?,
            category: row.try_get("category")?,
            tags: row.try_get("tags")?,
            benefits: row.try_get("benefits")?,
            ingredients: row.try_get("ingredients")?,
            usage: row.try_get("usage")?,
            is_new: row.try_get("is_new")?,
            is_bestseller: row.try_get("is_bestseller")?,
            in_stock: row.try_get("in_stock")?,
            sku: row.try_get("sku")?,
            weight: row.try_get("weight")?,
            dimensions: row.try_get("dimensions")?,
            created_at: try_get_timestamp(row, "created_at")?,
            updated_at: try_get_timestamp(row, "updated_at")?,
        }))
    }
}
