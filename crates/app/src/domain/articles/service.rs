//! Articles service.

use async_trait::async_trait;
use herbarium::{ids::ArticleSlug, publications::Article, search::SearchQuery};
use mockall::automock;

use crate::{
    database::Db,
    domain::{articles::repository::PgArticlesRepository, errors::ContentError},
};

#[derive(Debug, Clone)]
pub struct PgArticlesService {
    db: Db,
    repository: PgArticlesRepository,
}

impl PgArticlesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgArticlesRepository::new(),
        }
    }
}

#[async_trait]
impl ArticlesService for PgArticlesService {
    async fn list_articles(&self) -> Result<Vec<Article>, ContentError> {
        Ok(self.repository.list_articles(self.db.pool()).await?)
    }

    async fn get_article(&self, slug: ArticleSlug) -> Result<Article, ContentError> {
        Ok(self.repository.get_article(self.db.pool(), &slug).await?)
    }

    async fn list_featured_articles(&self, limit: u32) -> Result<Vec<Article>, ContentError> {
        Ok(self
            .repository
            .list_featured_articles(self.db.pool(), limit)
            .await?)
    }

    async fn list_articles_by_category(
        &self,
        category: String,
    ) -> Result<Vec<Article>, ContentError> {
        Ok(self
            .repository
            .list_articles_by_category(self.db.pool(), &category)
            .await?)
    }

    async fn search_articles(
        &self,
        query: SearchQuery,
        limit: Option<u32>,
    ) -> Result<Vec<Article>, ContentError> {
        Ok(self
            .repository
            .search_articles(self.db.pool(), &query, limit)
            .await?)
    }

    async fn list_article_categories(&self) -> Result<Vec<String>, ContentError> {
        Ok(self
            .repository
            .list_article_categories(self.db.pool())
            .await?)
    }
}

/// Read access to the article library.
#[automock]
#[async_trait]
pub trait ArticlesService: Send + Sync {
    /// All articles, newest first. Undated articles go last.
    async fn list_articles(&self) -> Result<Vec<Article>, ContentError>;

    /// The article with the given slug.
    async fn get_article(&self, slug: ArticleSlug) -> Result<Article, ContentError>;

    /// Featured articles, newest first, at most `limit`.
    async fn list_featured_articles(&self, limit: u32) -> Result<Vec<Article>, ContentError>;

    /// Articles whose category equals `category`, ignoring case.
    async fn list_articles_by_category(
        &self,
        category: String,
    ) -> Result<Vec<Article>, ContentError>;

    /// Articles whose title, excerpt, category or a tag contains the query.
    async fn search_articles(
        &self,
        query: SearchQuery,
        limit: Option<u32>,
    ) -> Result<Vec<Article>, ContentError>;

    /// Distinct article categories, sorted.
    async fn list_article_categories(&self) -> Result<Vec<String>, ContentError>;
}

#[cfg(test)]
mod tests {
    use herbarium::ids::ProductId;
    use testresult::TestResult;

    use crate::test::{TestContext, helpers::new_article};

    use super::*;

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn get_article_keeps_related_products() -> TestResult {
        let ctx = TestContext::new().await;

        let mut article = new_article("doshas", "Ayurveda", Some("2024-02-01T00:00:00Z"));
        article.related_products = vec![ProductId::new("1"), ProductId::new("gone")];

        ctx.seed_article(&article).await?;

        let stored = ctx.articles.get_article(ArticleSlug::new("doshas")).await?;

        assert_eq!(stored, article);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn get_article_unknown_slug_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.articles.get_article(ArticleSlug::new("missing")).await;

        assert!(
            matches!(result, Err(ContentError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn list_articles_is_newest_first() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.seed_article(&new_article("a", "Ayurveda", Some("2023-01-01T00:00:00Z")))
            .await?;
        ctx.seed_article(&new_article("b", "Ayurveda", Some("2024-01-01T00:00:00Z")))
            .await?;

        let articles = ctx.articles.list_articles().await?;
        let slugs: Vec<&str> = articles.iter().map(|a| a.slug.as_str()).collect();

        assert_eq!(slugs, vec!["b", "a"]);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn search_matches_tags() -> TestResult {
        let ctx = TestContext::new().await;

        let mut article = new_article("doshas", "Ayurveda", None);
        article.tags = vec!["Vata".to_string()];

        ctx.seed_article(&article).await?;
        ctx.seed_article(&new_article("other", "Ayurveda", None))
            .await?;

        let results = ctx
            .articles
            .search_articles(SearchQuery::new("vata"), Some(5))
            .await?;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].slug, "doshas");

        Ok(())
    }
}
