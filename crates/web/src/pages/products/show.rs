//! Product Detail Handler

use herbarium::{
    ids::ProductId,
    products::{Product, related_products},
    site::Site,
    structured_data,
};
use maud::{Markup, html};
use salvo::prelude::*;
use tracing::error;

use crate::{
    components::{
        cards::{price, product_badges, product_card, star_rating},
        layout::{Head, document},
    },
    extensions::*,
    pages::{Page, PageError},
};

const RELATED_PRODUCTS: usize = 4;
const GALLERY_IMAGES: usize = 4;

fn list_section(heading: &str, items: &[String]) -> Markup {
    html! {
        @if !items.is_empty() {
            section.product-section {
                h2 { (heading) }
                ul {
                    @for item in items {
                        li { (item) }
                    }
                }
            }
        }
    }
}

fn details(product: &Product) -> Markup {
    html! {
        dl.product-details {
            dt { "SKU" }
            dd { (product.sku) }
            dt { "Category" }
            dd { a href=(format!("/products?category={}", urlencoding::encode(&product.category))) { (product.category) } }
            @if let Some(weight) = &product.weight {
                dt { "Weight" }
                dd { (weight) }
            }
            @if let Some(dimensions) = &product.dimensions {
                dt { "Dimensions" }
                dd { (dimensions) }
            }
        }
    }
}

fn render(site: &Site, product: &Product, related: &[&Product]) -> Markup {
    let gallery = product.gallery();

    let content = html! {
        nav.breadcrumb aria-label="Breadcrumb" {
            a href="/" { "Home" } " / "
            a href="/products" { "Products" } " / "
            span { (product.name) }
        }
        article.product {
            div.gallery {
                @for (index, image) in gallery.iter().take(GALLERY_IMAGES).enumerate() {
                    img src=(image) alt=(format!("{} image {}", product.name, index + 1))
                        loading=[(index > 0).then_some("lazy")];
                }
            }
            div.summary {
                (product_badges(product))
                p.category { (product.category) }
                h1 { (product.name) }
                (star_rating(product.rating, product.review_count))
                (price(site, product))
                @if let (Some(discount), Some(original)) = (product.discount_percentage(), product.original_price) {
                    p.savings {
                        "You save " (site.format_price(original.saturating_sub(product.price)))
                        " (" (discount) "%)"
                    }
                }
                p.stock {
                    @if product.in_stock { "In stock" } @else { "Currently out of stock" }
                }
                p.description { (product.description) }
                @if !product.tags.is_empty() {
                    ul.tags {
                        @for tag in &product.tags {
                            li { (tag) }
                        }
                    }
                }
            }
        }
        (list_section("Key Benefits", &product.benefits))
        (list_section("Ingredients", &product.ingredients))
        @if !product.usage.is_empty() {
            section.product-section {
                h2 { "How to Use" }
                p { (product.usage) }
            }
        }
        (details(product))
        @if !related.is_empty() {
            section.related {
                h2 { "You May Also Like" }
                div.grid {
                    @for item in related {
                        (product_card(site, item))
                    }
                }
            }
        }
    };

    let path = product.path();

    let head = Head {
        title: Some(product.name.as_str()),
        description: Some(product.description.as_str()),
        path: &path,
        keywords: &product.tags,
        structured_data: vec![structured_data::product(site, product)],
    };

    document(site, &head, content)
}

/// Product Detail Handler
///
/// Loads the product, then the catalog for related products in the same
/// category. A failed catalog load only drops the related section.
#[handler]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot) -> Result<Page, PageError> {
    let state = depot.state_or_500()?;
    let id = ProductId::new(req.param_text("id"));

    let product = state
        .app
        .products
        .get_product(id)
        .await
        .or_page(&state.site, "failed to load product")?;

    let catalog = state
        .app
        .products
        .list_products()
        .await
        .unwrap_or_else(|error| {
            error!("failed to load related products, rendering without them: {error}");

            Vec::new()
        });

    let related = related_products(&catalog, &product, RELATED_PRODUCTS);

    Ok(Page::new(render(&state.site, &product, &related)))
}

#[cfg(test)]
mod tests {
    use herbarium_app::domain::ContentError;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{Mocks, make_product, page_service};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        page_service(mocks, Router::with_path("products/{id}").get(handler))
    }

    #[tokio::test]
    async fn test_show_returns_200_with_related_products() -> TestResult {
        let mut mocks = Mocks::default();

        let mut product = make_product(ProductId::new("1"), "Wellness");
        product.original_price = Some(86_500);
        let catalog = vec![
            product.clone(),
            make_product(ProductId::new("2"), "wellness"),
            make_product(ProductId::new("3"), "Hair Care"),
        ];

        mocks
            .products
            .expect_get_product()
            .once()
            .withf(|id| *id == "1")
            .return_once(move |_| Ok(product));

        mocks
            .products
            .expect_list_products()
            .once()
            .return_once(move || Ok(catalog));

        let mut res = TestClient::get("http://example.com/products/1")
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body = res.take_string().await?;

        assert!(body.contains("25% OFF"), "missing discount badge");
        assert!(body.contains(r#"href="/products/2""#), "missing related product");
        assert!(!body.contains(r#"href="/products/3""#), "other category shown");
        assert!(body.contains("\"@type\":\"Product\""), "missing product JSON-LD");

        Ok(())
    }

    #[tokio::test]
    async fn test_show_renders_without_related_when_catalog_fails() -> TestResult {
        let mut mocks = Mocks::default();

        let mut product = make_product(ProductId::new("1"), "Wellness");
        product.name = "Ashwagandha Capsules".to_string();

        mocks
            .products
            .expect_get_product()
            .once()
            .return_once(move |_| Ok(product));

        mocks
            .products
            .expect_list_products()
            .once()
            .return_once(|| Err(ContentError::Unavailable(sqlx::Error::PoolTimedOut)));

        let mut res = TestClient::get("http://example.com/products/1")
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body = res.take_string().await?;

        assert!(body.contains("Ashwagandha Capsules"), "missing product");
        assert!(!body.contains("You May Also Like"), "related section shown");

        Ok(())
    }

    #[tokio::test]
    async fn test_show_missing_product_returns_404() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .products
            .expect_get_product()
            .once()
            .withf(|id| *id == "missing")
            .return_once(|_| Err(ContentError::NotFound));

        mocks.products.expect_list_products().never();

        let mut res = TestClient::get("http://example.com/products/missing")
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert!(res.take_string().await?.contains("Page Not Found"));

        Ok(())
    }

    #[tokio::test]
    async fn test_show_decode_error_returns_500() {
        let mut mocks = Mocks::default();

        mocks
            .products
            .expect_get_product()
            .return_once(|_| Err(ContentError::Decode(sqlx::Error::RowNotFound)));

        let res = TestClient::get("http://example.com/products/1")
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
