//! Error pages

use herbarium::site::Site;
use maud::{Markup, html};
use salvo::{http::StatusCode, prelude::*};

use crate::{
    components::layout::{Head, document},
    extensions::*,
    pages::PageError,
};

fn copy(status: StatusCode) -> (&'static str, &'static str) {
    match status {
        StatusCode::NOT_FOUND => (
            "Page Not Found",
            "The page you are looking for may have moved, or never existed.",
        ),
        StatusCode::SERVICE_UNAVAILABLE => (
            "Temporarily Unavailable",
            "We could not reach our catalog just now. Please try again in a few minutes.",
        ),
        _ => (
            "Something Went Wrong",
            "An unexpected error occurred while preparing this page.",
        ),
    }
}

/// Error page for `status`.
pub(crate) fn page(site: &Site, status: StatusCode) -> Markup {
    let (title, message) = copy(status);

    let head = Head {
        title: Some(title),
        description: Some(message),
        ..Head::default()
    };

    document(
        site,
        &head,
        html! {
            section.error-page {
                p.status { (status.as_u16()) }
                h1 { (title) }
                p { (message) }
                div.actions {
                    a.button href="/" { "Back to Home" }
                    a.button.secondary href="/products" { "Browse Products" }
                }
            }
        },
    )
}

/// Fallback for paths no other route matches.
#[handler]
pub(crate) async fn not_found(depot: &mut Depot) -> PageError {
    match depot.state_or_500() {
        Ok(state) => PageError::not_found(&state.site),
        Err(error) => error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_page_says_so() {
        let html = page(&Site::default(), StatusCode::NOT_FOUND).into_string();

        assert!(html.contains("Page Not Found"), "{html}");
        assert!(html.contains("404"), "{html}");
    }

    #[test]
    fn unavailable_page_asks_to_retry() {
        let html = page(&Site::default(), StatusCode::SERVICE_UNAVAILABLE).into_string();

        assert!(html.contains("Temporarily Unavailable"), "{html}");
    }
}
