//! Result helper extensions for page handlers.

use std::sync::Arc;

use herbarium::site::Site;
use herbarium_app::domain::ContentError;
use tracing::{debug, error};

use crate::pages::PageError;

/// Map a content store failure to a logged error page.
pub(crate) trait ContentResultExt<T> {
    fn or_page(self, site: &Arc<Site>, context: &str) -> Result<T, PageError>;
}

impl<T> ContentResultExt<T> for Result<T, ContentError> {
    fn or_page(self, site: &Arc<Site>, context: &str) -> Result<T, PageError> {
        self.map_err(|source| {
            if source.is_not_found() {
                debug!("{context}: {source}");
            } else {
                error!(error = ?source, "{context}: {source}");
            }

            PageError::from_content(site, &source)
        })
    }
}
