//! Articles Repository

use herbarium::{
    ids::{ArticleSlug, ProductId},
    publications::Article,
    search::SearchQuery,
};
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{Postgres, postgres::PgExecutor, query, query_as, query_scalar};

use crate::domain::{
    articles::records::ArticleRecord,
    columns::{to_i32, to_limit},
};

const LIST_ARTICLES_SQL: &str = include_str!("sql/list_articles.sql");
const GET_ARTICLE_SQL: &str = include_str!("sql/get_article.sql");
const LIST_FEATURED_ARTICLES_SQL: &str = include_str!("sql/list_featured_articles.sql");
const LIST_ARTICLES_BY_CATEGORY_SQL: &str = include_str!("sql/list_articles_by_category.sql");
const SEARCH_ARTICLES_SQL: &str = include_str!("sql/search_articles.sql");
const LIST_ARTICLE_CATEGORIES_SQL: &str = include_str!("sql/list_article_categories.sql");
const UPSERT_ARTICLE_SQL: &str = include_str!("sql/upsert_article.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgArticlesRepository;

impl PgArticlesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_articles<'e, E: PgExecutor<'e>>(
        &self,
        executor: E,
    ) -> Result<Vec<Article>, sqlx::Error> {
        let records = query_as::<Postgres, ArticleRecord>(LIST_ARTICLES_SQL)
            .fetch_all(executor)
            .await?;

        Ok(records.into_iter().map(Article::from).collect())
    }

    pub(crate) async fn get_article<'e, E: PgExecutor<'e>>(
        &self,
        executor: E,
        slug: &ArticleSlug,
    ) -> Result<Article, sqlx::Error> {
        query_as::<Postgres, ArticleRecord>(GET_ARTICLE_SQL)
            .bind(slug.as_str())
            .fetch_one(executor)
            .await
            .map(Article::from)
    }

    pub(crate) async fn list_featured_articles<'e, E: PgExecutor<'e>>(
        &self,
        executor: E,
        limit: u32,
    ) -> Result<Vec<Article>, sqlx::Error> {
        let records = query_as::<Postgres, ArticleRecord>(LIST_FEATURED_ARTICLES_SQL)
            .bind(i64::from(limit))
            .fetch_all(executor)
            .await?;

        Ok(records.into_iter().map(Article::from).collect())
    }

    pub(crate) async fn list_articles_by_category<'e, E: PgExecutor<'e>>(
        &self,
        executor: E,
        category: &str,
    ) -> Result<Vec<Article>, sqlx::Error> {
        let records = query_as::<Postgres, ArticleRecord>(LIST_ARTICLES_BY_CATEGORY_SQL)
            .bind(category)
            .fetch_all(executor)
            .await?;

        Ok(records.into_iter().map(Article::from).collect())
    }

    pub(crate) async fn search_articles<'e, E: PgExecutor<'e>>(
        &self,
        executor: E,
        search: &SearchQuery,
        limit: Option<u32>,
    ) -> Result<Vec<Article>, sqlx::Error> {
        let records = query_as::<Postgres, ArticleRecord>(SEARCH_ARTICLES_SQL)
            .bind(search.like_pattern())
            .bind(to_limit(limit))
            .fetch_all(executor)
            .await?;

        Ok(records.into_iter().map(Article::from).collect())
    }

    pub(crate) async fn list_article_categories<'e, E: PgExecutor<'e>>(
        &self,
        executor: E,
    ) -> Result<Vec<String>, sqlx::Error> {
        query_scalar::<Postgres, String>(LIST_ARTICLE_CATEGORIES_SQL)
            .fetch_all(executor)
            .await
    }

    pub(crate) async fn upsert_article<'e, E: PgExecutor<'e>>(
        &self,
        executor: E,
        article: &Article,
    ) -> Result<(), sqlx::Error> {
        query(UPSERT_ARTICLE_SQL)
            .bind(article.slug.as_str())
            .bind(&article.title)
            .bind(&article.excerpt)
            .bind(&article.content)
            .bind(&article.image)
            .bind(&article.author)
            .bind(article.published_at.map(SqlxTimestamp::from))
            .bind(article.updated_at.map(SqlxTimestamp::from))
            .bind(to_i32(article.read_time, "read_time")?)
            .bind(&article.category)
            .bind(article.tags.as_slice())
            .bind(article.featured)
            .bind(article.seo.meta_title.as_deref())
            .bind(article.seo.meta_description.as_deref())
            .bind(article.seo.keywords.as_slice())
            .bind(
                article
                    .related_products
                    .iter()
                    .map(ProductId::as_str)
                    .collect::<Vec<_>>(),
            )
            .execute(executor)
            .await?;

        Ok(())
    }
}
