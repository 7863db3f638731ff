//! Depot helper extensions.

use std::sync::Arc;

use salvo::prelude::Depot;

use crate::{pages::PageError, state::State};

/// Helpers for reading shared state out of the depot.
pub(crate) trait DepotExt {
    fn state_or_500(&self) -> Result<&Arc<State>, PageError>;
}

impl DepotExt for Depot {
    fn state_or_500(&self) -> Result<&Arc<State>, PageError> {
        self.obtain::<Arc<State>>()
            .map_err(|_ignored| PageError::missing_state())
    }
}
