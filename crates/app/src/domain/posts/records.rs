//! Blog Post Records

use herbarium::{ids::PostSlug, publications::BlogPost};
use sqlx::{FromRow, Row, postgres::PgRow};

use crate::domain::columns::{try_get_optional_timestamp, try_get_seo, try_get_u32};

/// Row of the `blog_posts` table.
#[derive(Debug, Clone)]
pub(crate) struct PostRecord(BlogPost);

impl From<PostRecord> for BlogPost {
    fn from(record: PostRecord) -> Self {
        record.0
    }
}

impl<'r> FromRow<'r, PgRow> for PostRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self(BlogPost {
            slug: PostSlug::new(row.try_get::<String, _>("slug")?),
            title: row.try_get("title")?,
            excerpt: row.try_get("excerpt")?,
            content: row.try_get("content")?,
            image: row.try_get("image")?,
            author: row.try_get("author")?,
            published_at: try_get_optional_timestamp(row, "published_at")?,
            updated_at: try_get_optional_timestamp(row, "updated_at")?,
            read_time: try_get_u32(row, "read_time")?,
            category: row.try_get("category")?,
            tags: row.try_get("tags")?,
            featured: row.try_get("featured")?,
            seo: try_get_seo(row)?,
        }))
    }
}
