//! Blog Listing Handler

use herbarium::{
    publications::{BlogPost, featured},
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
    pages::{Page, PageError, blog::SECTION},
};

const FEATURED_LIMIT: usize = 3;
const RECENT_LIMIT: usize = 6;

fn render(
    site: &Site,
    category: Option<&str>,
    posts: &[BlogPost],
    categories: &[String],
) -> Markup {
    let highlighted = featured(posts, FEATURED_LIMIT);
    let recent = posts.get(..RECENT_LIMIT).unwrap_or(posts);

    let content = html! {
        section.page-header {
            h1 { "Wellness Blog" }
            p { "Everyday Ayurveda: seasonal routines, recipes and herbal know-how." }
        }
        (listing(SECTION, categories, category, &highlighted, recent))
    };

    let head = Head {
        title: Some("Blog"),
        description: Some(
            "Practical Ayurvedic tips, herbal remedies and seasonal wellness advice from our practitioners.",
        ),
        path: SECTION.path,
        ..Head::default()
    };

    document(site, &head, content)
}

/// Blog Listing Handler
#[handler]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot) -> Result<Page, PageError> {
    let state = depot.state_or_500()?;
    let posts = &state.app.posts;
    let category = req.query_text("category");

    let listing = async {
        match &category {
            Some(category) => posts.list_posts_by_category(category.clone()).await,
            None => posts.list_posts().await,
        }
    };

    let (listing, categories) = tokio::try_join!(listing, posts.list_post_categories())
        .or_page(&state.site, "failed to load blog listing")?;

    Ok(Page::new(render(
        &state.site,
        category.as_deref(),
        &listing,
        &categories,
    )))
}
