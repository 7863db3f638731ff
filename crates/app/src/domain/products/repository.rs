//! Products Repository

use herbarium::{ids::ProductId, products::Product, search::SearchQuery};
use sqlx::{Postgres, postgres::PgExecutor, query_as, query_scalar};

use crate::domain::{
    columns::{to_i32, to_i64, to_limit},
    products::{data::NewProduct, records::ProductRecord},
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const LIST_FEATURED_PRODUCTS_SQL: &str = include_str!("sql/list_featured_products.sql");
const LIST_PRODUCTS_BY_CATEGORY_SQL: &str = include_str!("sql/list_products_by_category.sql");
const SEARCH_PRODUCTS_SQL: &str = include_str!("sql/search_products.sql");
const LIST_PRODUCT_CATEGORIES_SQL: &str = include_str!("sql/list_product_categories.sql");
const UPSERT_PRODUCT_SQL: &str = include_str!("sql/upsert_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products<'e, E: PgExecutor<'e>>(
        &self,
        executor: E,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let records = query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .fetch_all(executor)
            .await?;

        Ok(records.into_iter().map(Product::from).collect())
    }

    pub(crate) async fn get_product<'e, E: PgExecutor<'e>>(
        &self,
        executor: E,
        id: &ProductId,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(id.as_str())
            .fetch_one(executor)
            .await
            .map(Product::from)
    }

    pub(crate) async fn list_featured_products<'e, E: PgExecutor<'e>>(
        &self,
        executor: E,
        limit: u32,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let records = query_as::<Postgres, ProductRecord>(LIST_FEATURED_PRODUCTS_SQL)
            .bind(i64::from(limit))
            .fetch_all(executor)
            .await?;

        Ok(records.into_iter().map(Product::from).collect())
    }

    pub(crate) async fn list_products_by_category<'e, E: PgExecutor<'e>>(
        &self,
        executor: E,
        category: &str,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let records = query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_BY_CATEGORY_SQL)
            .bind(category)
            .fetch_all(executor)
            .await?;

        Ok(records.into_iter().map(Product::from).collect())
    }

    pub(crate) async fn search_products<'e, E: PgExecutor<'e>>(
        &self,
        executor: E,
        search: &SearchQuery,
        limit: Option<u32>,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let records = query_as::<Postgres, ProductRecord>(SEARCH_PRODUCTS_SQL)
            .bind(search.like_pattern())
            .bind(to_limit(limit))
            .fetch_all(executor)
            .await?;

        Ok(records.into_iter().map(Product::from).collect())
    }

    pub(crate) async fn list_product_categories<'e, E: PgExecutor<'e>>(
        &self,
        executor: E,
    ) -> Result<Vec<String>, sqlx::Error> {
        query_scalar::<Postgres, String>(LIST_PRODUCT_CATEGORIES_SQL)
            .fetch_all(executor)
            .await
    }

    pub(crate) async fn upsert_product<'e, E: PgExecutor<'e>>(
        &self,
        executor: E,
        product: &NewProduct,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(UPSERT_PRODUCT_SQL)
            .bind(product.id.as_str())
            .bind(&product.name)
            .bind(&product.description)
            .bind(to_i64(product.price, "price")?)
            .bind(
                product
                    .original_price
                    .map(|price| to_i64(price, "original_price"))
                    .transpose()?,
            )
            .bind(&product.image)
            .bind(product.images.as_slice())
            .bind(product.rating)
            .bind(to_i32(product.review_count, "review_count")?)
            .bind(&product.category)
            .bind(product.tags.as_slice())
            .bind(product.benefits.as_slice())
            .bind(product.ingredients.as_slice())
            .bind(&product.usage)
            .bind(product.is_new)
            .bind(product.is_bestseller)
            .bind(product.in_stock)
            .bind(&product.sku)
            .bind(product.weight.as_deref())
            .bind(product.dimensions.as_deref())
            .bind(to_i32(product.position, "position")?)
            .fetch_one(executor)
            .await
            .map(Product::from)
    }
}
