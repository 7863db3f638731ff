//! Home Page Handler

use herbarium::{
    products::Product,
    publications::{Article, BlogPost},
    site::Site,
};
use maud::{Markup, html};
use salvo::prelude::*;

use crate::{
    components::{
        cards::{product_card, publication_card},
        layout::{Head, document},
    },
    extensions::*,
    pages::{Page, PageError},
};

const FEATURED_PRODUCTS: u32 = 6;
const FEATURED_POSTS: u32 = 3;
const FEATURED_ARTICLES: u32 = 3;

const PROMISES: [(&str, &str); 3] = [
    ("100% Natural", "Pure herbal ingredients"),
    ("Holistic Wellness", "Mind, body and soul in harmony"),
    ("Trusted Quality", "Ancient wisdom, modern standards"),
];

fn hero() -> Markup {
    html! {
        section.hero {
            p.eyebrow { "Ancient Wisdom · Modern Wellness" }
            h1 { "Preserving Ayurvedic Legacy, Empowering Wellness" }
            p.lead {
                "Discover the healing power of Ayurveda through a carefully curated \
                 collection of natural products, rooted in traditional wisdom and made to \
                 modern quality standards."
            }
            div.actions {
                a.button href="/products" { "Explore Products" }
                a.button.secondary href="/about" { "Our Heritage" }
            }
            ul.promises {
                @for (title, description) in PROMISES {
                    li {
                        strong { (title) }
                        span { (description) }
                    }
                }
            }
        }
    }
}

fn render(site: &Site, products: &[Product], posts: &[BlogPost], articles: &[Article]) -> Markup {
    let content = html! {
        (hero())
        @if !products.is_empty() {
            section.featured-products {
                h2 { "Featured Products" }
                div.grid {
                    @for product in products {
                        (product_card(site, product))
                    }
                }
                a.more href="/products" { "View all products" }
            }
        }
        @if !articles.is_empty() || !posts.is_empty() {
            section.featured-reading {
                h2 { "Wellness Wisdom" }
                @if !articles.is_empty() {
                    h3 { "Articles" }
                    div.grid {
                        @for article in articles {
                            (publication_card(article))
                        }
                    }
                }
                @if !posts.is_empty() {
                    h3 { "From the Blog" }
                    div.grid {
                        @for post in posts {
                            (publication_card(post))
                        }
                    }
                }
            }
        }
        section.cta {
            h2 { "Begin Your Wellness Journey" }
            p { "Talk to our practitioners about the right products for your constitution." }
            a.button href="/contact" { "Contact Us" }
        }
    };

    let head = Head {
        path: "/",
        ..Head::default()
    };

    document(site, &head, content)
}

/// Home Page Handler
///
/// Featured products, posts and articles are loaded concurrently.
#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Page, PageError> {
    let state = depot.state_or_500()?;
    let app = &state.app;

    let (products, posts, articles) = tokio::try_join!(
        app.products.list_featured_products(FEATURED_PRODUCTS),
        app.posts.list_featured_posts(FEATURED_POSTS),
        app.articles.list_featured_articles(FEATURED_ARTICLES),
    )
    .or_page(&state.site, "failed to load home page")?;

    Ok(Page::new(render(&state.site, &products, &posts, &articles)))
}
