//! Page handlers
//!
//! Each handler loads what its page needs through the content services, then
//! hands plain values to the components. Store failures become an HTML error
//! page with the matching status.

use std::sync::Arc;

use herbarium::site::Site;
use herbarium_app::domain::ContentError;
use maud::Markup;
use salvo::{
    http::StatusCode,
    prelude::{Response, Scribe, Text},
};

pub(crate) mod about;
pub(crate) mod articles;
pub(crate) mod blog;
pub(crate) mod contact;
pub(crate) mod errors;
pub(crate) mod home;
pub(crate) mod products;
pub(crate) mod search;

/// A rendered HTML page.
#[derive(Debug)]
pub(crate) struct Page(Markup);

impl Page {
    pub(crate) fn new(markup: Markup) -> Self {
        Self(markup)
    }
}

impl Scribe for Page {
    fn render(self, res: &mut Response) {
        res.render(Text::Html(self.0.into_string()));
    }
}

/// An error rendered as an HTML page.
#[derive(Debug)]
pub(crate) struct PageError {
    status: StatusCode,
    site: Option<Arc<Site>>,
}

impl PageError {
    pub(crate) fn new(site: &Arc<Site>, status: StatusCode) -> Self {
        Self {
            status,
            site: Some(Arc::clone(site)),
        }
    }

    pub(crate) fn not_found(site: &Arc<Site>) -> Self {
        Self::new(site, StatusCode::NOT_FOUND)
    }

    /// Shared state was never injected; rendered with default branding.
    pub(crate) fn missing_state() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            site: None,
        }
    }

    pub(crate) fn from_content(site: &Arc<Site>, error: &ContentError) -> Self {
        Self::new(site, status_for(error))
    }
}

/// Status code for a content store error.
pub(crate) fn status_for(error: &ContentError) -> StatusCode {
    match error {
        ContentError::NotFound => StatusCode::NOT_FOUND,
        ContentError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        ContentError::Decode(_) | ContentError::Sql(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl Scribe for PageError {
    fn render(self, res: &mut Response) {
        let markup = match &self.site {
            Some(site) => errors::page(site, self.status),
            None => errors::page(&Site::default(), self.status),
        };

        res.status_code(self.status);
        res.render(Text::Html(markup.into_string()));
    }
}
