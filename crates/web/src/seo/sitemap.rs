//! Sitemap Handler

use jiff::Timestamp;
use salvo::prelude::*;
use tracing::{debug, error};

use herbarium::sitemap::Sitemap;

use crate::{extensions::*, pages::PageError};

/// Sitemap Handler
///
/// Lists the static routes plus every product, post and article. If the
/// content cannot be loaded, the static routes are still served.
#[handler]
pub(crate) async fn handler(depot: &mut Depot, res: &mut Response) -> Result<(), PageError> {
    let state = depot.state_or_500()?;
    let app = &state.app;
    let site = &state.site;

    let mut sitemap = Sitemap::new(site, Timestamp::now());

    match tokio::try_join!(
        app.products.list_products(),
        app.posts.list_posts(),
        app.articles.list_articles(),
    ) {
        Ok((products, posts, articles)) => {
            sitemap.add_products(site, &products);
            sitemap.add_publications(site, &posts);
            sitemap.add_publications(site, &articles);
        }
        Err(error) => {
            error!("failed to load content for sitemap, serving static routes only: {error}");
        }
    }

    debug!(entries = sitemap.len(), "sitemap generated");

    res.render(Text::Xml(sitemap.to_xml()));

    Ok(())
}
