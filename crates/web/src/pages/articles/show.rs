//! Article Handler

use herbarium::{
    ids::ArticleSlug,
    products::{Product, products_with_ids},
    publications::{Article, Publication, related_publications},
    site::Site,
    structured_data,
};
use maud::{Markup, html};
use salvo::prelude::*;
use tracing::error;

use crate::{
    components::{
        cards::product_card,
        layout::{Head, document},
        publications::{detail, related},
    },
    extensions::*,
    pages::{Page, PageError, articles::SECTION},
};

const RELATED_ARTICLES: usize = 3;
const RELATED_PRODUCTS: usize = 4;

fn render(site: &Site, article: &Article, articles: &[Article], catalog: &[Product]) -> Markup {
    let related_articles = related_publications(articles, article, RELATED_ARTICLES);
    let recommended = products_with_ids(catalog, &article.related_products, RELATED_PRODUCTS);

    let aside = html! {
        @if !recommended.is_empty() {
            section.related.related-products {
                h2 { "Recommended Products" }
                div.grid {
                    @for product in &recommended {
                        (product_card(site, product))
                    }
                }
            }
        }
        (related("Related Articles", &related_articles))
    };

    let path = article.path();
    let head = Head {
        title: Some(article.seo.meta_title.as_deref().unwrap_or(&article.title)),
        description: Some(
            article
                .seo
                .meta_description
                .as_deref()
                .unwrap_or(&article.excerpt),
        ),
        path: &path,
        keywords: &article.seo.keywords,
        structured_data: vec![structured_data::article(site, article)],
    };

    document(site, &head, detail(SECTION, article, aside))
}

/// Article Handler
///
/// Loads the article, then the article list and the catalog concurrently for
/// the related sections. Either list failing only drops its section.
#[handler]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot) -> Result<Page, PageError> {
    let state = depot.state_or_500()?;
    let app = &state.app;
    let slug = ArticleSlug::new(req.param_text("slug"));

    let article = app
        .articles
        .get_article(slug)
        .await
        .or_page(&state.site, "failed to load article")?;

    let (articles, catalog) =
        tokio::join!(app.articles.list_articles(), app.products.list_products());

    let articles = articles.unwrap_or_else(|error| {
        error!("failed to load related articles, rendering without them: {error}");

        Vec::new()
    });
    let catalog = catalog.unwrap_or_else(|error| {
        error!("failed to load recommended products, rendering without them: {error}");

        Vec::new()
    });

    Ok(Page::new(render(&state.site, &article, &articles, &catalog)))
}

#[cfg(test)]
mod tests {
    use herbarium::ids::ProductId;
    use herbarium_app::domain::ContentError;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{Mocks, make_article, make_product, page_service};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        page_service(mocks, Router::with_path("articles/{slug}").get(handler))
    }

    #[tokio::test]
    async fn test_show_links_related_articles_and_products() -> TestResult {
        let mut mocks = Mocks::default();

        let mut article = make_article("doshas", "Ayurveda");
        article.related_products = vec![ProductId::new("7"), ProductId::new("404")];

        let articles = vec![
            article.clone(),
            make_article("prakriti", "ayurveda"),
            make_article("neem", "Herbs"),
        ];
        let catalog = vec![
            make_product(ProductId::new("1"), "Wellness"),
            make_product(ProductId::new("7"), "Wellness"),
        ];

        mocks
            .articles
            .expect_get_article()
            .once()
            .withf(|slug| *slug == "doshas")
            .return_once(move |_| Ok(article));
        mocks
            .articles
            .expect_list_articles()
            .once()
            .return_once(move || Ok(articles));
        mocks
            .products
            .expect_list_products()
            .once()
            .return_once(move || Ok(catalog));

        let mut res = TestClient::get("http://example.com/articles/doshas")
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body = res.take_string().await?;

        assert!(body.contains(r#"href="/articles/prakriti""#), "related article missing");
        assert!(!body.contains(r#"href="/articles/neem""#), "unrelated article shown");
        assert!(body.contains(r#"href="/products/7""#), "related product missing");
        assert!(!body.contains(r#"href="/products/1""#), "unlinked product shown");

        Ok(())
    }

    #[tokio::test]
    async fn test_show_keeps_related_articles_when_catalog_fails() -> TestResult {
        let mut mocks = Mocks::default();

        let mut article = make_article("doshas", "Ayurveda");
        article.related_products = vec![ProductId::new("7")];
        let articles = vec![article.clone(), make_article("prakriti", "Ayurveda")];

        mocks
            .articles
            .expect_get_article()
            .once()
            .return_once(move |_| Ok(article));
        mocks
            .articles
            .expect_list_articles()
            .once()
            .return_once(move || Ok(articles));
        mocks
            .products
            .expect_list_products()
            .once()
            .return_once(|| Err(ContentError::Unavailable(sqlx::Error::PoolTimedOut)));

        let mut res = TestClient::get("http://example.com/articles/doshas")
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body = res.take_string().await?;

        assert!(body.contains(r#"href="/articles/prakriti""#), "related article missing");
        assert!(!body.contains("Recommended Products"), "empty product section shown");

        Ok(())
    }

    #[tokio::test]
    async fn test_show_unknown_slug_skips_related_queries() {
        let mut mocks = Mocks::default();

        mocks
            .articles
            .expect_get_article()
            .once()
            .return_once(|_| Err(ContentError::NotFound));
        mocks.articles.expect_list_articles().never();
        mocks.products.expect_list_products().never();

        let res = TestClient::get("http://example.com/articles/nope")
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
