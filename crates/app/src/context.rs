//! App Context

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::{
    database::{self, Db, PoolSettings},
    domain::{
        articles::{ArticlesService, PgArticlesService},
        content::{ContentService, PgContentService},
        posts::{PgPostsService, PostsService},
        products::{PgProductsService, ProductsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// Services the site reads content through.
#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub posts: Arc<dyn PostsService>,
    pub articles: Arc<dyn ArticlesService>,
    pub content: Arc<dyn ContentService>,
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        settings: PoolSettings,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url, settings)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::from_db(&Db::new(pool)))
    }

    /// Build application context over an existing store handle.
    #[must_use]
    pub fn from_db(db: &Db) -> Self {
        Self {
            products: Arc::new(PgProductsService::new(db.clone())),
            posts: Arc::new(PgPostsService::new(db.clone())),
            articles: Arc::new(PgArticlesService::new(db.clone())),
            content: Arc::new(PgContentService::new(db.clone())),
        }
    }
}
