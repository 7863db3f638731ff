//! Products service.

use async_trait::async_trait;
use herbarium::{ids::ProductId, products::Product, search::SearchQuery};
use mockall::automock;

use crate::{
    database::Db,
    domain::{errors::ContentError, products::repository::PgProductsRepository},
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ContentError> {
        Ok(self.repository.list_products(self.db.pool()).await?)
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, ContentError> {
        Ok(self.repository.get_product(self.db.pool(), &id).await?)
    }

    async fn list_featured_products(&self, limit: u32) -> Result<Vec<Product>, ContentError> {
        Ok(self
            .repository
            .list_featured_products(self.db.pool(), limit)
            .await?)
    }

    async fn list_products_by_category(
        &self,
        category: String,
    ) -> Result<Vec<Product>, ContentError> {
        Ok(self
            .repository
            .list_products_by_category(self.db.pool(), &category)
            .await?)
    }

    async fn search_products(
        &self,
        query: SearchQuery,
        limit: Option<u32>,
    ) -> Result<Vec<Product>, ContentError> {
        Ok(self
            .repository
            .search_products(self.db.pool(), &query, limit)
            .await?)
    }

    async fn list_product_categories(&self) -> Result<Vec<String>, ContentError> {
        Ok(self
            .repository
            .list_product_categories(self.db.pool())
            .await?)
    }
}

/// Read access to the product catalog.
#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// All products, newest first.
    async fn list_products(&self) -> Result<Vec<Product>, ContentError>;

    /// The product with the given id.
    async fn get_product(&self, id: ProductId) -> Result<Product, ContentError>;

    /// Bestseller or new products, newest first, at most `limit`.
    async fn list_featured_products(&self, limit: u32) -> Result<Vec<Product>, ContentError>;

    /// Products whose category equals `category`, ignoring case.
    async fn list_products_by_category(
        &self,
        category: String,
    ) -> Result<Vec<Product>, ContentError>;

    /// Products whose name, description, category or a tag contains the
    /// query, ignoring case.
    async fn search_products(
        &self,
        query: SearchQuery,
        limit: Option<u32>,
    ) -> Result<Vec<Product>, ContentError>;

    /// Distinct product categories, sorted.
    async fn list_product_categories(&self) -> Result<Vec<String>, ContentError>;
}
