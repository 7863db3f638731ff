//! Publications
//!
//! Blog posts and articles are the same kind of record: a slugged, dated,
//! categorised piece of long-form content. Articles additionally point at the
//! products they discuss. [`Publication`] is the shared read-only view used
//! by listing, sorting, search and related-item selection.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{
    categories::same_category,
    ids::{ArticleSlug, PostSlug, ProductId},
    search::SearchQuery,
};

/// Optional search-engine overrides for a publication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seo {
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Vec<String>,
}

/// A blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub slug: PostSlug,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image: String,
    pub author: String,
    pub published_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    pub read_time: u32,
    pub category: String,
    pub tags: Vec<String>,
    pub featured: bool,
    pub seo: Seo,
}

/// A long-form article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub slug: ArticleSlug,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image: String,
    pub author: String,
    pub published_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    pub read_time: u32,
    pub category: String,
    pub tags: Vec<String>,
    pub featured: bool,
    pub seo: Seo,
    pub related_products: Vec<ProductId>,
}

/// Read-only view shared by blog posts and articles.
pub trait Publication {
    /// URL slug, unique within its table.
    fn slug(&self) -> &str;

    fn title(&self) -> &str;

    fn excerpt(&self) -> &str;

    /// Markdown body.
    fn content(&self) -> &str;

    fn image(&self) -> &str;

    fn author(&self) -> &str;

    fn category(&self) -> &str;

    fn tags(&self) -> &[String];

    fn published_at(&self) -> Option<Timestamp>;

    fn updated_at(&self) -> Option<Timestamp>;

    /// Estimated reading time in minutes.
    fn read_time(&self) -> u32;

    fn is_featured(&self) -> bool;

    fn seo(&self) -> &Seo;

    /// Site-relative path of the publication's page.
    fn path(&self) -> String;

    /// Whether the query occurs in the title, excerpt, category or a tag.
    fn matches(&self, query: &SearchQuery) -> bool {
        query.matches_any(
            [self.title(), self.excerpt(), self.category()]
                .into_iter()
                .chain(self.tags().iter().map(String::as_str)),
        )
    }
}

macro_rules! impl_publication {
    ($ty:ty, $prefix:literal) => {
        impl Publication for $ty {
            fn slug(&self) -> &str {
                self.slug.as_str()
            }

            fn title(&self) -> &str {
                &self.title
            }

            fn excerpt(&self) -> &str {
                &self.excerpt
            }

            fn content(&self) -> &str {
                &self.content
            }

            fn image(&self) -> &str {
                &self.image
            }

            fn author(&self) -> &str {
                &self.author
            }

            fn category(&self) -> &str {
                &self.category
            }

            fn tags(&self) -> &[String] {
                &self.tags
            }

            fn published_at(&self) -> Option<Timestamp> {
                self.published_at
            }

            fn updated_at(&self) -> Option<Timestamp> {
                self.updated_at
            }

            fn read_time(&self) -> u32 {
                self.read_time
            }

            fn is_featured(&self) -> bool {
                self.featured
            }

            fn seo(&self) -> &Seo {
                &self.seo
            }

            fn path(&self) -> String {
                format!("{}/{}", $prefix, urlencoding::encode(self.slug.as_str()))
            }
        }
    };
}

impl_publication!(BlogPost, "/blog");
impl_publication!(Article, "/articles");

/// A search hit from either publication table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentItem {
    Post(BlogPost),
    Article(Article),
}

impl ContentItem {
    fn inner(&self) -> &dyn Publication {
        match self {
            Self::Post(post) => post,
            Self::Article(article) => article,
        }
    }

    /// Short label for the kind of content.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Post(_) => "Blog",
            Self::Article(_) => "Article",
        }
    }
}

impl Publication for ContentItem {
    fn slug(&self) -> &str {
        self.inner().slug()
    }

    fn title(&self) -> &str {
        self.inner().title()
    }

    fn excerpt(&self) -> &str {
        self.inner().excerpt()
    }

    fn content(&self) -> &str {
        self.inner().content()
    }

    fn image(&self) -> &str {
        self.inner().image()
    }

    fn author(&self) -> &str {
        self.inner().author()
    }

    fn category(&self) -> &str {
        self.inner().category()
    }

    fn tags(&self) -> &[String] {
        self.inner().tags()
    }

    fn published_at(&self) -> Option<Timestamp> {
        self.inner().published_at()
    }

    fn updated_at(&self) -> Option<Timestamp> {
        self.inner().updated_at()
    }

    fn read_time(&self) -> u32 {
        self.inner().read_time()
    }

    fn is_featured(&self) -> bool {
        self.inner().is_featured()
    }

    fn seo(&self) -> &Seo {
        self.inner().seo()
    }

    fn path(&self) -> String {
        self.inner().path()
    }
}

/// Sort newest first. Undated publications go last, keeping their relative
/// order.
pub fn sort_newest_first<T: Publication>(items: &mut [T]) {
    items.sort_by(|a, b| b.published_at().cmp(&a.published_at()));
}

/// Featured publications, in the given order, capped at `limit`.
pub fn featured<T: Publication>(items: &[T], limit: usize) -> Vec<&T> {
    items
        .iter()
        .filter(|item| item.is_featured())
        .take(limit)
        .collect()
}

/// Other publications in the same category as `current`.
pub fn related_publications<'a, T: Publication>(
    items: &'a [T],
    current: &T,
    limit: usize,
) -> SmallVec<[&'a T; 3]> {
    items
        .iter()
        .filter(|item| item.slug() != current.slug())
        .filter(|item| same_category(item.category(), current.category()))
        .take(limit)
        .collect()
}
