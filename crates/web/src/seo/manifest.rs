//! Web App Manifest Handler

use salvo::{
    http::header::{CONTENT_TYPE, HeaderValue},
    prelude::*,
};

use herbarium::manifest::WebAppManifest;

use crate::{extensions::*, pages::PageError};

const MANIFEST_CONTENT_TYPE: &str = "application/manifest+json";

/// Web App Manifest Handler
#[handler]
pub(crate) async fn handler(depot: &mut Depot, res: &mut Response) -> Result<(), PageError> {
    let state = depot.state_or_500()?;

    res.render(Json(WebAppManifest::for_site(&state.site)));
    res.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(MANIFEST_CONTENT_TYPE));

    Ok(())
}
