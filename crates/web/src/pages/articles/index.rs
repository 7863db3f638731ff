//! Article Listing Handler

use herbarium::{
    publications::{Article, featured},
    site::Site,
};
use maud::{Markup, html};
use salvo::prelude::*;

use crate::{
    components::{
        layout::{Head, document},
        publications::listing,
    },
    extensions::*,
    pages::{Page, PageError, articles::SECTION},
};

const FEATURED_LIMIT: usize = 3;
const RECENT_LIMIT: usize = 6;

fn render(
    site: &Site,
    category: Option<&str>,
    articles: &[Article],
    categories: &[String],
) -> Markup {
    let highlighted = featured(articles, FEATURED_LIMIT);
    let recent = articles.get(..RECENT_LIMIT).unwrap_or(articles);

    let content = html! {
        section.page-header {
            h1 { "Ayurvedic Knowledge Library" }
            p { "In-depth guides to doshas, herbs and the principles of Ayurveda." }
        }
        (listing(SECTION, categories, category, &highlighted, recent))
    };

    let head = Head {
        title: Some("Articles"),
        description: Some(
            "Expert articles on Ayurvedic principles, herbs and holistic health practices.",
        ),
        path: SECTION.path,
        ..Head::default()
    };

    document(site, &head, content)
}

/// Article Listing Handler
#[handler]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot) -> Result<Page, PageError> {
    let state = depot.state_or_500()?;
    let articles = &state.app.articles;
    let category = req.query_text("category");

    let listing = async {
        match &category {
            Some(category) => articles.list_articles_by_category(category.clone()).await,
            None => articles.list_articles().await,
        }
    };

    let (listing, categories) = tokio::try_join!(listing, articles.list_article_categories())
        .or_page(&state.site, "failed to load article listing")?;

    Ok(Page::new(render(
        &state.site,
        category.as_deref(),
        &listing,
        &categories,
    )))
}

#[cfg(test)]
mod tests {
    use herbarium_app::domain::ContentError;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{Mocks, make_article, page_service};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        page_service(mocks, Router::with_path("articles").get(handler))
    }

    #[tokio::test]
    async fn test_index_lists_articles() -> TestResult {
        let mut mocks = Mocks::default();

        let mut doshas = make_article("doshas", "Ayurveda");
        doshas.featured = true;

        mocks
            .articles
            .expect_list_articles()
            .once()
            .return_once(move || Ok(vec![doshas, make_article("triphala", "Herbs")]));
        mocks
            .articles
            .expect_list_article_categories()
            .once()
            .return_once(|| Ok(vec!["Ayurveda".to_string(), "Herbs".to_string()]));

        let mut res = TestClient::get("http://example.com/articles")
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body = res.take_string().await?;

        assert_eq!(body.matches(r#"href="/articles/doshas""#).count(), 4, "{body}");
        assert!(body.contains(r#"href="/articles?category=Herbs""#), "{body}");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_store_failure_returns_500() {
        let mut mocks = Mocks::default();

        mocks
            .articles
            .expect_list_articles()
            .return_once(|| Err(ContentError::Sql(sqlx::Error::PoolClosed)));
        mocks
            .articles
            .expect_list_article_categories()
            .return_once(|| Ok(Vec::new()));

        let res = TestClient::get("http://example.com/articles")
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
