//! Content import
//!
//! Loads authored content from a source directory and upserts it into the
//! store:
//!
//! ```text
//! <source>/
//!   data/products.json
//!   blogs/*.md | *.mdx
//!   articles/*.md | *.mdx
//! ```
//!
//! Loading is pure file I/O and fails before anything is written. Writing
//! happens in a single transaction.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use herbarium::publications::{Article, BlogPost};
use rust_decimal::Decimal;
use rusty_money::iso::Currency;
use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::{
    database::Db,
    domain::{
        articles::repository::PgArticlesRepository,
        posts::repository::PgPostsRepository,
        products::{data::NewProduct, repository::PgProductsRepository},
    },
};

pub mod front_matter;
pub mod products_json;

/// Import Errors
#[derive(Debug, Error)]
pub enum ImportError {
    /// A file or directory could not be read
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A content directory could not be listed
    #[error("failed to list content directory")]
    Walk(#[from] walkdir::Error),

    /// The product catalog is not valid JSON
    #[error("invalid product JSON in {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A document's front matter is not valid YAML
    #[error("invalid front matter in {path}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_norway::Error,
    },

    /// A document does not open with a `---` front-matter block
    #[error("missing front matter in {0}")]
    MissingFrontMatter(PathBuf),

    /// A required front-matter field is absent or blank
    #[error("missing required field `{field}` in {path}")]
    MissingField { path: PathBuf, field: &'static str },

    /// The file name cannot be used as a slug
    #[error("cannot derive a slug from {0}")]
    InvalidFileName(PathBuf),

    /// A price is negative or too large
    #[error("invalid price {price} for product {id}")]
    InvalidPrice { id: String, price: Decimal },

    /// A rating is outside 0 to 5
    #[error("invalid rating {rating} for product {id}")]
    InvalidRating { id: String, rating: f64 },

    /// Writing to the store failed; nothing was imported
    #[error("failed to write content")]
    Store(#[from] sqlx::Error),
}

/// Content read from a source directory, ready to be written.
#[derive(Debug, Default)]
pub struct ContentBundle {
    pub products: Vec<NewProduct>,
    pub posts: Vec<BlogPost>,
    pub articles: Vec<Article>,
}

/// Row counts written by an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub products: usize,
    pub posts: usize,
    pub articles: usize,
}

impl fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} products, {} blog posts, {} articles",
            self.products, self.posts, self.articles
        )
    }
}

fn read(path: &Path) -> Result<String, ImportError> {
    fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Markdown documents directly inside `dir`, sorted by file name. A missing
/// directory holds no documents.
fn documents(dir: &Path) -> Result<Vec<PathBuf>, ImportError> {
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "content directory not found, skipping");

        return Ok(Vec::new());
    }

    let mut paths = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;

        if entry.file_type().is_file() && front_matter::is_document(entry.path()) {
            paths.push(entry.into_path());
        }
    }

    Ok(paths)
}

/// Read everything under `source`.
///
/// # Errors
///
/// Fails on the first unreadable or invalid file, naming it.
pub fn load(source: &Path, currency: &'static Currency) -> Result<ContentBundle, ImportError> {
    let mut bundle = ContentBundle::default();

    let catalog = source.join("data").join("products.json");

    if catalog.is_file() {
        bundle.products = products_json::parse_products(&catalog, &read(&catalog)?, currency)?;
    } else {
        debug!(path = %catalog.display(), "product catalog not found, skipping");
    }

    for path in documents(&source.join("blogs"))? {
        bundle.posts.push(front_matter::parse_post(&path, &read(&path)?)?);
    }

    for path in documents(&source.join("articles"))? {
        bundle
            .articles
            .push(front_matter::parse_article(&path, &read(&path)?)?);
    }

    Ok(bundle)
}

/// Upsert a bundle in one transaction.
///
/// # Errors
///
/// Returns [`ImportError::Store`] if any write fails; the transaction is then
/// rolled back and the store is unchanged.
pub async fn import(db: &Db, bundle: &ContentBundle) -> Result<ImportSummary, ImportError> {
    let products = PgProductsRepository::new();
    let posts = PgPostsRepository::new();
    let articles = PgArticlesRepository::new();

    let mut tx = db.begin().await?;

    for product in &bundle.products {
        products.upsert_product(&mut *tx, product).await?;
    }

    for post in &bundle.posts {
        posts.upsert_post(&mut *tx, post).await?;
    }

    for article in &bundle.articles {
        articles.upsert_article(&mut *tx, article).await?;
    }

    tx.commit().await?;

    let summary = ImportSummary {
        products: bundle.products.len(),
        posts: bundle.posts.len(),
        articles: bundle.articles.len(),
    };

    info!(%summary, "content imported");

    Ok(summary)
}
