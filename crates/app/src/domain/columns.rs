//! Column conversion helpers shared by the repositories.

use herbarium::publications::Seo;
use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{Row, postgres::PgRow};

pub(crate) fn try_get_u64(row: &PgRow, col: &str) -> Result<u64, sqlx::Error> {
    let value: i64 = row.try_get(col)?;

    u64::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

pub(crate) fn try_get_optional_u64(row: &PgRow, col: &str) -> Result<Option<u64>, sqlx::Error> {
    let value: Option<i64> = row.try_get(col)?;

    value
        .map(u64::try_from)
        .transpose()
        .map_err(|e| sqlx::Error::ColumnDecode {
            index: col.to_string(),
            source: Box::new(e),
        })
}

pub(crate) fn try_get_u32(row: &PgRow, col: &str) -> Result<u32, sqlx::Error> {
    let value: i32 = row.try_get(col)?;

    u32::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

pub(crate) fn try_get_timestamp(row: &PgRow, col: &str) -> Result<Timestamp, sqlx::Error> {
    Ok(row.try_get::<SqlxTimestamp, _>(col)?.to_jiff())
}

pub(crate) fn try_get_optional_timestamp(
    row: &PgRow,
    col: &str,
) -> Result<Option<Timestamp>, sqlx::Error> {
    Ok(row
        .try_get::<Option<SqlxTimestamp>, _>(col)?
        .map(SqlxTimestamp::to_jiff))
}

pub(crate) fn try_get_seo(row: &PgRow) -> Result<Seo, sqlx::Error> {
    Ok(Seo {
        meta_title: row.try_get("meta_title")?,
        meta_description: row.try_get("meta_description")?,
        keywords: row.try_get("keywords")?,
    })
}

/// Encode an unsigned amount for a `BIGINT` column.
pub(crate) fn to_i64(value: u64, col: &str) -> Result<i64, sqlx::Error> {
    i64::try_from(value).map_err(|e| sqlx::Error::Encode(format!("{col}: {e}").into()))
}

/// Encode an unsigned count for an `INTEGER` column.
pub(crate) fn to_i32(value: u32, col: &str) -> Result<i32, sqlx::Error> {
    i32::try_from(value).map_err(|e| sqlx::Error::Encode(format!("{col}: {e}").into()))
}

/// Encode an optional row limit. `NULL` means no limit.
pub(crate) fn to_limit(limit: Option<u32>) -> Option<i64> {
    limit.map(i64::from)
}
