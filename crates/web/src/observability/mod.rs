//! Logging setup and request tracing middleware.

use thiserror::Error;

mod logging;
mod request;
mod request_ids;

pub(crate) use logging::init_subscriber;
pub(crate) use request::request_logging;

/// Errors raised while initialising observability.
#[derive(Debug, Error)]
pub(crate) enum ObservabilityError {
    /// Failed to initialise tracing subscriber.
    #[error("failed to initialise tracing subscriber: {0}")]
    TracingSubscriber(#[from] tracing_subscriber::util::TryInitError),
}
