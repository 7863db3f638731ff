//! App Router

use salvo::Router;

use crate::{
    healthcheck,
    pages::{about, articles, blog, contact, errors, home, products, search},
    seo,
};

pub(crate) fn app_router() -> Router {
    Router::new()
        .get(home::handler)
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("sitemap.xml").get(seo::sitemap::handler))
        .push(Router::with_path("manifest.webmanifest").get(seo::manifest::handler))
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("{id}").get(products::show::handler)),
        )
        .push(
            Router::with_path("blog")
                .get(blog::index::handler)
                .push(Router::with_path("{slug}").get(blog::show::handler)),
        )
        .push(
            Router::with_path("articles")
                .get(articles::index::handler)
                .push(Router::with_path("{slug}").get(articles::show::handler)),
        )
        .push(Router::with_path("about").get(about::handler))
        .push(Router::with_path("contact").get(contact::handler))
        .push(Router::with_path("search").get(search::handler))
        .push(Router::with_path("{*+rest}").get(errors::not_found))
}

#[cfg(test)]
mod tests {
    use herbarium::ids::ProductId;
    use herbarium_app::domain::ContentError;
    use salvo::{
        http::StatusCode,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use crate::test_helpers::{Mocks, make_product, site_service};

    #[tokio::test]
    async fn test_root_serves_home_page() -> TestResult {
        let mut mocks = Mocks::default();

        let mut bestseller = make_product(ProductId::new("1"), "Wellness");
        bestseller.is_bestseller = true;

        mocks
            .products
            .expect_list_featured_products()
            .once()
            .return_once(move |_| Ok(vec![bestseller]));
        mocks
            .posts
            .expect_list_featured_posts()
            .once()
            .return_once(|_| Ok(Vec::new()));
        mocks
            .articles
            .expect_list_featured_articles()
            .once()
            .return_once(|_| Ok(Vec::new()));

        let mut res = TestClient::get("http://example.com/")
            .send(&site_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body = res.take_string().await?;

        assert!(body.contains(r#"href="/products/1""#), "missing bestseller");
        assert!(body.contains("Bestseller"), "missing badge");

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_product_returns_404_page() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .products
            .expect_get_product()
            .once()
            .return_once(|_| Err(ContentError::NotFound));

        let mut res = TestClient::get("http://example.com/products/missing")
            .send(&site_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert!(res.take_string().await?.contains("Page Not Found"));

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_path_returns_404_page() -> TestResult {
        let mut res = TestClient::get("http://example.com/does/not/exist")
            .send(&site_service(Mocks::default()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        let body = res.take_string().await?;

        assert!(body.contains("Page Not Found"), "{body}");
        assert!(body.contains("Corner Ayurveda"), "{body}");

        Ok(())
    }

    #[tokio::test]
    async fn test_static_pages_need_no_content() {
        for path in ["about", "contact", "healthcheck", "manifest.webmanifest"] {
            let res = TestClient::get(format!("http://example.com/{path}"))
                .send(&site_service(Mocks::default()))
                .await;

            assert_eq!(res.status_code, Some(StatusCode::OK), "GET /{path}");
        }
    }
}
