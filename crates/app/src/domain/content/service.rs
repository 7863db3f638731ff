//! Content service.
//!
//! Queries spanning the blog and the article library (and, for categories,
//! the catalog).

use async_trait::async_trait;
use herbarium::{
    publications::{ContentItem, sort_newest_first},
    search::SearchQuery,
};
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        articles::repository::PgArticlesRepository, content::repository::PgContentRepository,
        errors::ContentError, posts::repository::PgPostsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgContentService {
    db: Db,
    posts: PgPostsRepository,
    articles: PgArticlesRepository,
    repository: PgContentRepository,
}

impl PgContentService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            posts: PgPostsRepository::new(),
            articles: PgArticlesRepository::new(),
            repository: PgContentRepository::new(),
        }
    }
}

#[async_trait]
impl ContentService for PgContentService {
    async fn search_content(
        &self,
        query: SearchQuery,
        limit: Option<u32>,
    ) -> Result<Vec<ContentItem>, ContentError> {
        let pool = self.db.pool();

        let (posts, articles) = tokio::try_join!(
            self.posts.search_posts(pool, &query, limit),
            self.articles.search_articles(pool, &query, limit),
        )?;

        let mut items: Vec<ContentItem> = posts
            .into_iter()
            .map(ContentItem::Post)
            .chain(articles.into_iter().map(ContentItem::Article))
            .collect();

        sort_newest_first(&mut items);

        if let Some(limit) = limit {
            items.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }

        Ok(items)
    }

    async fn list_categories(&self) -> Result<Vec<String>, ContentError> {
        Ok(self.repository.list_categories(self.db.pool()).await?)
    }
}

/// Read access across content tables.
#[automock]
#[async_trait]
pub trait ContentService: Send + Sync {
    /// Posts and articles matching the query, newest first, at most `limit`.
    async fn search_content(
        &self,
        query: SearchQuery,
        limit: Option<u32>,
    ) -> Result<Vec<ContentItem>, ContentError>;

    /// Distinct categories across products, posts and articles, sorted.
    async fn list_categories(&self) -> Result<Vec<String>, ContentError>;
}
