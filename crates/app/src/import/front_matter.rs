//! Front-matter documents
//!
//! ```text
//! ---
//! title: Ashwagandha for Stress Relief
//! excerpt: How the root supports a calmer day.
//! category: Herbs
//! publishedAt: 2024-01-15
//! tags: [stress, adaptogens]
//! ---
//! Markdown body...
//! ```

use std::path::Path;

use herbarium::{
    dates::parse_published,
    ids::{ArticleSlug, PostSlug, ProductId},
    publications::{Article, BlogPost, Seo},
};
use jiff::Timestamp;
use serde::Deserialize;
use tracing::warn;

use crate::import::ImportError;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeoFrontMatter {
    meta_title: Option<String>,
    meta_description: Option<String>,
    #[serde(default)]
    keywords: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FrontMatter {
    title: Option<String>,
    excerpt: Option<String>,
    category: Option<String>,
    #[serde(default)]
    image: String,
    #[serde(default)]
    author: String,
    published_at: Option<String>,
    updated_at: Option<String>,
    #[serde(default)]
    read_time: u32,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    featured: bool,
    #[serde(default)]
    seo: SeoFrontMatter,
    #[serde(default)]
    related_products: Vec<String>,
}

/// Fields shared by blog posts and articles.
#[derive(Debug)]
struct Document {
    slug: String,
    title: String,
    excerpt: String,
    content: String,
    image: String,
    author: String,
    published_at: Option<Timestamp>,
    updated_at: Option<Timestamp>,
    read_time: u32,
    category: String,
    tags: Vec<String>,
    featured: bool,
    seo: Seo,
    related_products: Vec<String>,
}

/// Split a document into its YAML block and body.
///
/// Returns `None` when the text does not open with a `---` fence or the fence
/// is never closed.
pub(crate) fn split(text: &str) -> Option<(&str, &str)> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let rest = text.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;

    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            let (yaml, tail) = rest.split_at(offset);
            let body = tail.get(line.len()..).unwrap_or_default();

            return Some((yaml, body));
        }

        offset += line.len();
    }

    None
}

fn parse_date(path: &Path, field: &str, raw: Option<&str>) -> Option<Timestamp> {
    let raw = raw?;
    let parsed = parse_published(raw);

    if parsed.is_none() {
        warn!(path = %path.display(), field, value = raw, "ignoring unparsable date");
    }

    parsed
}

fn require(path: &Path, field: &'static str, value: Option<String>) -> Result<String, ImportError> {
    value
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ImportError::MissingField {
            path: path.to_path_buf(),
            field,
        })
}

fn slug_of(path: &Path) -> Result<String, ImportError> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ImportError::InvalidFileName(path.to_path_buf()))
}

fn parse_document(path: &Path, text: &str) -> Result<Document, ImportError> {
    let (yaml, body) =
        split(text).ok_or_else(|| ImportError::MissingFrontMatter(path.to_path_buf()))?;

    let front: FrontMatter = if yaml.trim().is_empty() {
        FrontMatter::default()
    } else {
        serde_norway::from_str(yaml).map_err(|source| ImportError::Yaml {
            path: path.to_path_buf(),
            source,
        })?
    };

    Ok(Document {
        slug: slug_of(path)?,
        title: require(path, "title", front.title)?,
        excerpt: require(path, "excerpt", front.excerpt)?,
        category: require(path, "category", front.category)?,
        content: body.trim_start_matches(['\r', '\n']).to_string(),
        image: front.image,
        author: front.author,
        published_at: parse_date(path, "publishedAt", front.published_at.as_deref()),
        updated_at: parse_date(path, "updatedAt", front.updated_at.as_deref()),
        read_time: front.read_time,
        tags: front.tags,
        featured: front.featured,
        seo: Seo {
            meta_title: front.seo.meta_title,
            meta_description: front.seo.meta_description,
            keywords: front.seo.keywords,
        },
        related_products: front.related_products,
    })
}

/// Parse a blog post. The slug is the file stem.
///
/// # Errors
///
/// Fails when the front matter is missing, is not valid YAML, or lacks a
/// title, excerpt or category.
pub fn parse_post(path: &Path, text: &str) -> Result<BlogPost, ImportError> {
    let doc = parse_document(path, text)?;

    if !doc.related_products.is_empty() {
        warn!(path = %path.display(), "blog posts do not link products; ignoring relatedProducts");
    }

    Ok(BlogPost {
        slug: PostSlug::new(doc.slug),
        title: doc.title,
        excerpt: doc.excerpt,
        content: doc.content,
        image: doc.image,
        author: doc.author,
        published_at: doc.published_at,
        updated_at: doc.updated_at,
        read_time: doc.read_time,
        category: doc.category,
        tags: doc.tags,
        featured: doc.featured,
        seo: doc.seo,
    })
}

/// Parse an article. The slug is the file stem.
///
/// # Errors
///
/// As [`parse_post`].
pub fn parse_article(path: &Path, text: &str) -> Result<Article, ImportError> {
    let doc = parse_document(path, text)?;

    Ok(Article {
        slug: ArticleSlug::new(doc.slug),
        title: doc.title,
        excerpt: doc.excerpt,
        content: doc.content,
        image: doc.image,
        author: doc.author,
        published_at: doc.published_at,
        updated_at: doc.updated_at,
        read_time: doc.read_time,
        category: doc.category,
        tags: doc.tags,
        featured: doc.featured,
        seo: doc.seo,
        related_products: doc.related_products.into_iter().map(ProductId::new).collect(),
    })
}

/// Whether `path` looks like an authored document.
pub(crate) fn is_document(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("mdx"))
}

#[cfg(test)]
mod tests {
    use herbarium::publications::Publication;
    use testresult::TestResult;

    use super::*;

    const POST: &str = "---
title: Ashwagandha for Stress Relief
excerpt: How the root supports a calmer day.
category: Herbs
author: Dr. Priya Sharma
publishedAt: 2024-01-15
readTime: 6
tags: [stress, adaptogens]
featured: true
seo:
  metaTitle: Ashwagandha and stress
  keywords: [ashwagandha]
---

# Ashwagandha

Body text.
";

    #[test]
    fn split_separates_yaml_and_body() {
        let (yaml, body) = split("---\ntitle: A\n---\nBody\n").unwrap_or_default();

        assert_eq!(yaml, "title: A\n");
        assert_eq!(body, "Body\n");
    }

    #[test]
    fn split_handles_crlf() {
        let (yaml, body) = split("---\r\ntitle: A\r\n---\r\nBody").unwrap_or_default();

        assert_eq!(yaml, "title: A\r\n");
        assert_eq!(body, "Body");
    }

    #[test]
    fn split_requires_opening_and_closing_fence() {
        assert!(split("title: A\n---\nBody").is_none());
        assert!(split("---\ntitle: A\nBody").is_none());
    }

    #[test]
    fn parse_post_reads_front_matter() -> TestResult {
        let post = parse_post(Path::new("blogs/ashwagandha-stress.mdx"), POST)?;

        assert_eq!(post.slug(), "ashwagandha-stress");
        assert_eq!(post.title, "Ashwagandha for Stress Relief");
        assert_eq!(post.read_time, 6);
        assert_eq!(post.tags, vec!["stress", "adaptogens"]);
        assert!(post.featured);
        assert_eq!(
            post.published_at,
            Some("2024-01-15T00:00:00Z".parse::<Timestamp>()?)
        );
        assert_eq!(post.seo.meta_title.as_deref(), Some("Ashwagandha and stress"));
        assert!(post.content.starts_with("# Ashwagandha"));

        Ok(())
    }

    #[test]
    fn unparsable_dates_become_missing() -> TestResult {
        let text = "---\ntitle: A\nexcerpt: B\ncategory: C\npublishedAt: sometime soon\n---\n";

        let post = parse_post(Path::new("a.md"), text)?;

        assert_eq!(post.published_at, None);

        Ok(())
    }

    #[test]
    fn missing_required_field_names_the_file() {
        let text = "---\ntitle: A\ncategory: C\n---\nBody";

        let result = parse_post(Path::new("blogs/a.md"), text);

        assert!(
            matches!(
                &result,
                Err(ImportError::MissingField { path, field: "excerpt" })
                    if path == Path::new("blogs/a.md")
            ),
            "expected missing excerpt, got {result:?}"
        );
    }

    #[test]
    fn invalid_yaml_is_reported() {
        let result = parse_post(Path::new("a.md"), "---\ntitle: [unclosed\n---\n");

        assert!(matches!(result, Err(ImportError::Yaml { .. })));
    }

    #[test]
    fn article_keeps_related_products() -> TestResult {
        let text = "---\ntitle: A\nexcerpt: B\ncategory: C\nrelatedProducts: ['1', '7']\n---\n";

        let article = parse_article(Path::new("articles/doshas.md"), text)?;

        assert_eq!(article.slug, "doshas");
        assert_eq!(
            article.related_products,
            vec![ProductId::new("1"), ProductId::new("7")]
        );

        Ok(())
    }

    #[test]
    fn only_markdown_files_are_documents() {
        assert!(is_document(Path::new("a.md")));
        assert!(is_document(Path::new("a.MDX")));
        assert!(!is_document(Path::new("a.txt")));
        assert!(!is_document(Path::new("README")));
    }
}
