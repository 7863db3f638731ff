//! Content Repository

use sqlx::{Postgres, postgres::PgExecutor, query_scalar};

const LIST_CATEGORIES_SQL: &str = include_str!("sql/list_categories.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgContentRepository;

impl PgContentRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_categories<'e, E: PgExecutor<'e>>(
        &self,
        executor: E,
    ) -> Result<Vec<String>, sqlx::Error> {
        query_scalar::<Postgres, String>(LIST_CATEGORIES_SQL)
            .fetch_all(executor)
            .await
    }
}
