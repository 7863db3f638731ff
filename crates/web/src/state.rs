//! State

use std::sync::Arc;

use herbarium::site::Site;
use herbarium_app::context::AppContext;

#[derive(Debug, Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) site: Arc<Site>,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, site: Site) -> Self {
        Self {
            app,
            site: Arc::new(site),
        }
    }

    #[must_use]
    pub(crate) fn shared(app: AppContext, site: Site) -> Arc<Self> {
        Arc::new(Self::new(app, site))
    }
}
