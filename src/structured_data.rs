//! Schema.org structured data (JSON-LD).

use serde_json::{Value, json};

use crate::{pricing, products::Product, publications::Publication, site::Site};

/// `Organization` block describing the retailer.
#[must_use]
pub fn organization(site: &Site) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": site.name,
        "url": site.base_url,
        "logo": site.url("/logo.png"),
        "description": site.description,
    })
}

/// `WebSite` block with a product search action.
#[must_use]
pub fn website(site: &Site) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": site.name,
        "url": site.base_url,
        "description": site.description,
        "potentialAction": {
            "@type": "SearchAction",
            "target": {
                "@type": "EntryPoint",
                "urlTemplate": format!("{}?search={{search_term_string}}", site.url("/products")),
            },
            "query-input": "required name=search_term_string",
        },
    })
}

/// `Product` block with offer and aggregate rating.
#[must_use]
pub fn product(site: &Site, product: &Product) -> Value {
    let availability = if product.in_stock {
        "https://schema.org/InStock"
    } else {
        "https://schema.org/OutOfStock"
    };

    let price = pricing::to_major_units(product.price, site.currency);

    json!({
        "@context": "https://schema.org",
        "@type": "Product",
        "name": product.name,
        "description": product.description,
        "image": product.image,
        "sku": product.sku,
        "category": product.category,
        "brand": { "@type": "Brand", "name": site.name },
        "offers": {
            "@type": "Offer",
            "price": price.normalize().to_string(),
            "priceCurrency": site.currency_code(),
            "availability": availability,
            "url": site.url(&product.path()),
            "seller": { "@type": "Organization", "name": site.name },
        },
        "aggregateRating": {
            "@type": "AggregateRating",
            "ratingValue": product.rating,
            "reviewCount": product.review_count,
        },
    })
}

/// `Article` block for a blog post or article.
pub fn article<T: Publication>(site: &Site, item: &T) -> Value {
    let published = item.published_at().map(|t| t.to_string());
    let modified = item
        .updated_at()
        .map(|t| t.to_string())
        .or_else(|| published.clone());

    json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": item.title(),
        "description": item.excerpt(),
        "image": item.image(),
        "author": { "@type": "Person", "name": item.author() },
        "publisher": {
            "@type": "Organization",
            "name": site.name,
            "logo": { "@type": "ImageObject", "url": site.url("/logo.png") },
        },
        "datePublished": published,
        "dateModified": modified,
        "mainEntityOfPage": { "@type": "WebPage", "@id": site.url(&item.path()) },
    })
}

/// Serialize for embedding in a `<script type="application/ld+json">` tag.
///
/// `</` is escaped so content cannot close the script element early.
#[must_use]
pub fn to_script(value: &Value) -> String {
    value.to_string().replace("</", r"<\/")
}
