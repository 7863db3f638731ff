//! Site Search Handler

use herbarium::{
    products::Product,
    publications::ContentItem,
    search::SearchQuery,
    site::Site,
};
use maud::{Markup, html};
use salvo::prelude::*;

use crate::{
    components::{
        cards::{content_card, product_card},
        layout::{Head, document},
    },
    extensions::*,
    pages::{Page, PageError},
};

const PRODUCT_LIMIT: u32 = 8;
const CONTENT_LIMIT: u32 = 10;

enum Results {
    /// No query yet; suggest topics instead.
    Topics(Vec<String>),
    Hits {
        query: SearchQuery,
        products: Vec<Product>,
        content: Vec<ContentItem>,
    },
}

fn search_form(query: Option<&SearchQuery>) -> Markup {
    html! {
        form.site-search-page action="/search" method="get" role="search" {
            input type="search" name="q" value=[query.map(SearchQuery::as_str)]
                placeholder="Search products, articles and posts" aria-label="Search";
            button type="submit" { "Search" }
        }
    }
}

fn render(site: &Site, results: &Results) -> Markup {
    let content = match results {
        Results::Topics(topics) => html! {
            section.page-header { h1 { "Search" } }
            (search_form(None))
            @if !topics.is_empty() {
                section.topics {
                    h2 { "Browse by topic" }
                    ul {
                        @for topic in topics {
                            li {
                                a href=(format!("/search?q={}", urlencoding::encode(topic))) { (topic) }
                            }
                        }
                    }
                }
            }
        },
        Results::Hits {
            query,
            products,
            content,
        } => html! {
            section.page-header {
                h1 { "Results for \u{201c}" (query.as_str()) "\u{201d}" }
            }
            (search_form(Some(query)))
            @if products.is_empty() && content.is_empty() {
                p.empty { "Nothing matched your search." }
            }
            @if !products.is_empty() {
                section.search-products {
                    h2 { "Products" }
                    div.grid {
                        @for product in products {
                            (product_card(site, product))
                        }
                    }
                    a.more href=(format!("/products?search={}", urlencoding::encode(query.as_str()))) {
                        "All matching products"
                    }
                }
            }
            @if !content.is_empty() {
                section.search-content {
                    h2 { "Articles & Posts" }
                    div.grid {
                        @for item in content {
                            (content_card(item))
                        }
                    }
                }
            }
        },
    };

    let head = Head {
        title: Some("Search"),
        path: "/search",
        ..Head::default()
    };

    document(site, &head, content)
}

/// Site Search Handler
///
/// Searches products and publications concurrently. An empty query lists
/// every category as a starting point.
#[handler]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot) -> Result<Page, PageError> {
    let state = depot.state_or_500()?;
    let app = &state.app;

    let query = req
        .query_text("q")
        .map(|raw| SearchQuery::new(&raw))
        .filter(|query| !query.is_empty());

    let results = match query {
        None => Results::Topics(
            app.content
                .list_categories()
                .await
                .or_page(&state.site, "failed to load search topics")?,
        ),
        Some(query) => {
            let (products, content) = tokio::try_join!(
                app.products
                    .search_products(query.clone(), Some(PRODUCT_LIMIT)),
                app.content.search_content(query.clone(), Some(CONTENT_LIMIT)),
            )
            .or_page(&state.site, "failed to search content")?;

            Results::Hits {
                query,
                products,
                content,
            }
        }
    };

    Ok(Page::new(render(&state.site, &results)))
}
