//! Blog Posts Repository

use herbarium::{ids::PostSlug, publications::BlogPost, search::SearchQuery};
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{Postgres, postgres::PgExecutor, query, query_as, query_scalar};

use crate::domain::{
    columns::{to_i32, to_limit},
    posts::records::PostRecord,
};

const LIST_POSTS_SQL: &str = include_str!("sql/list_posts.sql");
const GET_POST_SQL: &str = include_str!("sql/get_post.sql");
const LIST_FEATURED_POSTS_SQL: &str = include_str!("sql/list_featured_posts.sql");
const LIST_POSTS_BY_CATEGORY_SQL: &str = include_str!("sql/list_posts_by_category.sql");
const SEARCH_POSTS_SQL: &str = include_str!("sql/search_posts.sql");
const LIST_POST_CATEGORIES_SQL: &str = include_str!("sql/list_post_categories.sql");
const UPSERT_POST_SQL: &str = include_str!("sql/upsert_post.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPostsRepository;

impl PgPostsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_posts<'e, E: PgExecutor<'e>>(
        &self,
        executor: E,
    ) -> Result<Vec<BlogPost>, sqlx::Error> {
        let records = query_as::<Postgres, PostRecord>(LIST_POSTS_SQL)
            .fetch_all(executor)
            .await?;

        Ok(records.into_iter().map(BlogPost::from).collect())
    }

    pub(crate) async fn get_post<'e, E: PgExecutor<'e>>(
        &self,
        executor: E,
        slug: &PostSlug,
    ) -> Result<BlogPost, sqlx::Error> {
        query_as::<Postgres, PostRecord>(GET_POST_SQL)
            .bind(slug.as_str())
            .fetch_one(executor)
            .await
            .map(BlogPost::from)
    }

    pub(crate) async fn list_featured_posts<'e, E: PgExecutor<'e>>(
        &self,
        executor: E,
        limit: u32,
    ) -> Result<Vec<BlogPost>, sqlx::Error> {
        let records = query_as::<Postgres, PostRecord>(LIST_FEATURED_POSTS_SQL)
            .bind(i64::from(limit))
            .fetch_all(executor)
            .await?;

        Ok(records.into_iter().map(BlogPost::from).collect())
    }

    pub(crate) async fn list_posts_by_category<'e, E: PgExecutor<'e>>(
        &self,
        executor: E,
        category: &str,
    ) -> Result<Vec<BlogPost>, sqlx::Error> {
        let records = query_as::<Postgres, PostRecord>(LIST_POSTS_BY_CATEGORY_SQL)
            .bind(category)
            .fetch_all(executor)
            .await?;

        Ok(records.into_iter().map(BlogPost::from).collect())
    }

    pub(crate) async fn search_posts<'e, E: PgExecutor<'e>>(
        &self,
        executor: E,
        search: &SearchQuery,
        limit: Option<u32>,
    ) -> Result<Vec<BlogPost>, sqlx::Error> {
        let records = query_as::<Postgres, PostRecord>(SEARCH_POSTS_SQL)
            .bind(search.like_pattern())
            .bind(to_limit(limit))
            .fetch_all(executor)
            .await?;

        Ok(records.into_iter().map(BlogPost::from).collect())
    }

    pub(crate) async fn list_post_categories<'e, E: PgExecutor<'e>>(
        &self,
        executor: E,
    ) -> Result<Vec<String>, sqlx::Error> {
        query_scalar::<Postgres, String>(LIST_POST_CATEGORIES_SQL)
            .fetch_all(executor)
            .await
    }

    pub(crate) async fn upsert_post<'e, E: PgExecutor<'e>>(
        &self,
        executor: E,
        post: &BlogPost,
    ) -> Result<(), sqlx::Error> {
        query(UPSERT_POST_SQL)
            .bind(post.slug.as_str())
            .bind(&post.title)
            .bind(&post.excerpt)
            .bind(&post.content)
            .bind(&post.image)
            .bind(&post.author)
            .bind(post.published_at.map(SqlxTimestamp::from))
            .bind(post.updated_at.map(SqlxTimestamp::from))
            .bind(to_i32(post.read_time, "read_time")?)
            .bind(&post.category)
            .bind(post.tags.as_slice())
            .bind(post.featured)
            .bind(post.seo.meta_title.as_deref())
            .bind(post.seo.meta_description.as_deref())
            .bind(post.seo.keywords.as_slice())
            .execute(executor)
            .await?;

        Ok(())
    }
}
