//! Blog posts service.

use async_trait::async_trait;
use herbarium::{ids::PostSlug, publications::BlogPost, search::SearchQuery};
use mockall::automock;

use crate::{
    database::Db,
    domain::{errors::ContentError, posts::repository::PgPostsRepository},
};

#[derive(Debug, Clone)]
pub struct PgPostsService {
    db: Db,
    repository: PgPostsRepository,
}

impl PgPostsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgPostsRepository::new(),
        }
    }
}

#[async_trait]
impl PostsService for PgPostsService {
    async fn list_posts(&self) -> Result<Vec<BlogPost>, ContentError> {
        Ok(self.repository.list_posts(self.db.pool()).await?)
    }

    async fn get_post(&self, slug: PostSlug) -> Result<BlogPost, ContentError> {
        Ok(self.repository.get_post(self.db.pool(), &slug).await?)
    }

    async fn list_featured_posts(&self, limit: u32) -> Result<Vec<BlogPost>, ContentError> {
        Ok(self
            .repository
            .list_featured_posts(self.db.pool(), limit)
            .await?)
    }

    async fn list_posts_by_category(&self, category: String) -> Result<Vec<BlogPost>, ContentError> {
        Ok(self
            .repository
            .list_posts_by_category(self.db.pool(), &category)
            .await?)
    }

    async fn search_posts(
        &self,
        query: SearchQuery,
        limit: Option<u32>,
    ) -> Result<Vec<BlogPost>, ContentError> {
        Ok(self
            .repository
            .search_posts(self.db.pool(), &query, limit)
            .await?)
    }

    async fn list_post_categories(&self) -> Result<Vec<String>, ContentError> {
        Ok(self.repository.list_post_categories(self.db.pool()).await?)
    }
}

/// Read access to the blog.
#[automock]
#[async_trait]
pub trait PostsService: Send + Sync {
    /// All posts, newest first. Undated posts go last.
    async fn list_posts(&self) -> Result<Vec<BlogPost>, ContentError>;

    /// The post with the given slug.
    async fn get_post(&self, slug: PostSlug) -> Result<BlogPost, ContentError>;

    /// Featured posts, newest first, at most `limit`.
    async fn list_featured_posts(&self, limit: u32) -> Result<Vec<BlogPost>, ContentError>;

    /// Posts whose category equals `category`, ignoring case.
    async fn list_posts_by_category(&self, category: String) -> Result<Vec<BlogPost>, ContentError>;

    /// Posts whose title, excerpt, category or a tag contains the query.
    async fn search_posts(
        &self,
        query: SearchQuery,
        limit: Option<u32>,
    ) -> Result<Vec<BlogPost>, ContentError>;

    /// Distinct post categories, sorted.
    async fn list_post_categories(&self) -> Result<Vec<String>, ContentError>;
}
