//! Blog Post Handler

use herbarium::{
    ids::PostSlug,
    publications::{BlogPost, Publication, related_publications},
    site::Site,
    structured_data,
};
use maud::Markup;
use salvo::prelude::*;

use crate::{
    components::{
        layout::{Head, document},
        publications::{detail, related},
    },
    extensions::*,
    pages::{Page, PageError, blog::SECTION},
};

const RELATED_LIMIT: usize = 3;

fn render(site: &Site, post: &BlogPost, all_posts: &[BlogPost]) -> Markup {
    let related_posts = related_publications(all_posts, post, RELATED_LIMIT);

    let path = post.path();
    let head = Head {
        title: Some(post.seo.meta_title.as_deref().unwrap_or(&post.title)),
        description: Some(post.seo.meta_description.as_deref().unwrap_or(&post.excerpt)),
        path: &path,
        keywords: &post.seo.keywords,
        structured_data: vec![structured_data::article(site, post)],
    };

    document(
        site,
        &head,
        detail(SECTION, post, related("Related Posts", &related_posts)),
    )
}

/// Blog Post Handler
///
/// The post and the full post list (for related posts) load concurrently.
#[handler]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot) -> Result<Page, PageError> {
    let state = depot.state_or_500()?;
    let posts = &state.app.posts;
    let slug = PostSlug::new(req.param_text("slug"));

    let (post, all_posts) = tokio::try_join!(posts.get_post(slug), posts.list_posts())
        .or_page(&state.site, "failed to load blog post")?;

    Ok(Page::new(render(&state.site, &post, &all_posts)))
}

#[cfg(test)]
mod tests {
    use herbarium_app::domain::ContentError;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{Mocks, make_post, page_service};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        page_service(mocks, Router::with_path("blog/{slug}").get(handler))
    }

    #[tokio::test]
    async fn test_show_renders_markdown_and_related_posts() -> TestResult {
        let mut mocks = Mocks::default();

        let post = make_post("calm-mind", "Herbs");
        let all_posts = vec![
            post.clone(),
            make_post("tulsi-tea", "Herbs"),
            make_post("monsoon-diet", "Seasonal"),
        ];

        mocks
            .posts
            .expect_get_post()
            .once()
            .withf(|slug| *slug == "calm-mind")
            .return_once(move |_| Ok(post));
        mocks
            .posts
            .expect_list_posts()
            .once()
            .return_once(move || Ok(all_posts));

        let mut res = TestClient::get("http://example.com/blog/calm-mind")
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body = res.take_string().await?;

        assert!(body.contains("<p>Body of calm-mind.</p>"), "markdown not rendered");
        assert!(body.contains(r#"href="/blog/tulsi-tea""#), "related post missing");
        assert!(!body.contains(r#"href="/blog/monsoon-diet""#), "unrelated post shown");
        assert!(body.contains("\"@type\":\"Article\""), "missing JSON-LD");

        Ok(())
    }

    #[tokio::test]
    async fn test_show_unknown_slug_returns_404() {
        let mut mocks = Mocks::default();

        mocks
            .posts
            .expect_get_post()
            .return_once(|_| Err(ContentError::NotFound));
        mocks
            .posts
            .expect_list_posts()
            .return_once(|| Ok(Vec::new()));

        let res = TestClient::get("http://example.com/blog/nope")
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
