//! Product Listing Handler

use herbarium::{categories::same_category, products::Product, search::SearchQuery, site::Site};
use herbarium_app::domain::ContentError;
use maud::{Markup, html};
use salvo::prelude::*;

use crate::{
    components::{
        cards::product_card,
        layout::{Head, document},
    },
    extensions::*,
    pages::{Page, PageError},
};

/// What the listing was narrowed by.
#[derive(Debug, Default)]
struct Filters {
    search: Option<SearchQuery>,
    category: Option<String>,
}

impl Filters {
    fn from_request(req: &Request) -> Self {
        Self {
            search: req
                .query_text("search")
                .map(|raw| SearchQuery::new(&raw))
                .filter(|query| !query.is_empty()),
            category: req.query_text("category"),
        }
    }

    fn href(&self, category: Option<&str>) -> String {
        let mut params = Vec::new();

        if let Some(search) = &self.search {
            params.push(format!("search={}", urlencoding::encode(search.as_str())));
        }

        if let Some(category) = category {
            params.push(format!("category={}", urlencoding::encode(category)));
        }

        if params.is_empty() {
            "/products".to_string()
        } else {
            format!("/products?{}", params.join("&"))
        }
    }

    fn is_active(&self, category: Option<&str>) -> bool {
        match (self.category.as_deref(), category) {
            (None, None) => true,
            (Some(current), Some(candidate)) => same_category(current, candidate),
            _ => false,
        }
    }
}

fn summary(count: usize, filters: &Filters) -> String {
    let noun = if count == 1 { "product" } else { "products" };

    match (&filters.search, &filters.category) {
        (Some(search), _) => format!("{count} {noun} matching \u{201c}{}\u{201d}", search.as_str()),
        (None, Some(category)) => format!("{count} {noun} in {category}"),
        (None, None) => format!("Showing {count} {noun}"),
    }
}

fn render(site: &Site, filters: &Filters, products: &[Product], categories: &[String]) -> Markup {
    let content = html! {
        section.page-header {
            h1 { "Our Products" }
            p { "Authentic Ayurvedic remedies and natural wellness essentials." }
        }
        form.product-search action="/products" method="get" role="search" {
            input type="search" name="search" value=[filters.search.as_ref().map(SearchQuery::as_str)]
                placeholder="Search products" aria-label="Search products";
            @if let Some(category) = &filters.category {
                input type="hidden" name="category" value=(category);
            }
            button type="submit" { "Search" }
        }
        nav.category-chips aria-label="Categories" {
            a.chip.active[filters.is_active(None)] href=(filters.href(None)) { "All" }
            @for category in categories {
                a.chip.active[filters.is_active(Some(category.as_str()))] href=(filters.href(Some(category.as_str()))) {
                    (category)
                }
            }
        }
        p.result-count { (summary(products.len(), filters)) }
        @if products.is_empty() {
            div.empty {
                h2 { "No products found" }
                p { "Try adjusting your search or filter criteria." }
                a.button href="/products" { "Clear filters" }
            }
        } @else {
            div.grid {
                @for product in products {
                    (product_card(site, product))
                }
            }
        }
    };

    let title = match (&filters.search, &filters.category) {
        (Some(search), _) => format!("Search: {}", search.as_str()),
        (None, Some(category)) => format!("{category} Products"),
        (None, None) => "Products".to_string(),
    };

    let head = Head {
        title: Some(title.as_str()),
        description: Some(
            "Shop authentic Ayurvedic products: herbal supplements, oils, skincare and wellness essentials.",
        ),
        path: "/products",
        ..Head::default()
    };

    document(site, &head, content)
}

/// Product Listing Handler
///
/// `?search=` runs a catalog search, `?category=` narrows to one category;
/// with both, the search results are narrowed to the category.
#[handler]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot) -> Result<Page, PageError> {
    let state = depot.state_or_500()?;
    let products = &state.app.products;
    let filters = Filters::from_request(req);

    let listing = async {
        match (&filters.search, &filters.category) {
            (Some(search), category) => {
                let mut found = products.search_products(search.clone(), None).await?;

                if let Some(category) = category {
                    found.retain(|product| same_category(&product.category, category));
                }

                Ok::<_, ContentError>(found)
            }
            (None, Some(category)) => products.list_products_by_category(category.clone()).await,
            (None, None) => products.list_products().await,
        }
    };

    let (listing, categories) = tokio::try_join!(listing, products.list_product_categories())
        .or_page(&state.site, "failed to load product listing")?;

    Ok(Page::new(render(&state.site, &filters, &listing, &categories)))
}
