//! Sitemap generation.
//!
//! Lists the static routes followed by one entry per product, blog post and
//! article, each with a change-frequency and priority hint.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/blog/hello</loc>
//!     <lastmod>2024-01-15</lastmod>
//!     <changefreq>monthly</changefreq>
//!     <priority>0.7</priority>
//!   </url>
//! </urlset>
//! ```

use jiff::Timestamp;
use quick_xml::escape::escape;

use crate::{
    dates::{format_ymd, published_or},
    products::Product,
    publications::Publication,
    site::Site,
};

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Static routes, in sitemap order.
const STATIC_ROUTES: [(&str, ChangeFrequency, f32); 6] = [
    ("/", ChangeFrequency::Daily, 1.0),
    ("/products", ChangeFrequency::Daily, 0.9),
    ("/articles", ChangeFrequency::Weekly, 0.8),
    ("/blog", ChangeFrequency::Weekly, 0.8),
    ("/about", ChangeFrequency::Monthly, 0.7),
    ("/contact", ChangeFrequency::Monthly, 0.6),
];

const PRODUCT_PRIORITY: f32 = 0.8;
const PUBLICATION_PRIORITY: f32 = 0.7;

/// How often a page is expected to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    /// Value used in `<changefreq>`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

/// Single URL entry in the sitemap
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub last_modified: Timestamp,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Sitemap data structure
#[derive(Debug, Clone)]
pub struct Sitemap {
    entries: Vec<SitemapEntry>,
    now: Timestamp,
}

impl Sitemap {
    /// Sitemap holding only the static routes, all last modified `now`.
    #[must_use]
    pub fn new(site: &Site, now: Timestamp) -> Self {
        let entries = STATIC_ROUTES
            .iter()
            .map(|&(path, change_frequency, priority)| SitemapEntry {
                loc: site.url(path),
                last_modified: now,
                change_frequency,
                priority,
            })
            .collect();

        Self { entries, now }
    }

    /// Number of static routes every sitemap starts with.
    #[must_use]
    pub const fn static_route_count() -> usize {
        STATIC_ROUTES.len()
    }

    /// Add one entry per product. Products carry no publish date, so they
    /// are stamped with the generation time.
    pub fn add_products(&mut self, site: &Site, products: &[Product]) {
        let now = self.now;

        self.entries
            .extend(products.iter().map(|product| SitemapEntry {
                loc: site.url(&product.path()),
                last_modified: now,
                change_frequency: ChangeFrequency::Weekly,
                priority: PRODUCT_PRIORITY,
            }));
    }

    /// Add one entry per blog post or article. Undated publications are
    /// stamped with the generation time.
    pub fn add_publications<T: Publication>(&mut self, site: &Site, items: &[T]) {
        let now = self.now;

        self.entries.extend(items.iter().map(|item| SitemapEntry {
            loc: site.url(&item.path()),
            last_modified: published_or(item.published_at(), now),
            change_frequency: ChangeFrequency::Monthly,
            priority: PUBLICATION_PRIORITY,
        }));
    }

    #[must_use]
    pub fn entries(&self) -> &[SitemapEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Generate sitemap XML string.
    #[must_use]
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.entries.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for entry in &self.entries {
            xml.push_str(&format!(
                "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    \
                 <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
                escape(entry.loc.as_str()),
                format_ymd(entry.last_modified),
                entry.change_frequency.as_str(),
                entry.priority,
            ));
        }

        xml.push_str("</urlset>\n");
        xml
    }
}
