//! Herbarium Content Store

pub mod articles;
pub(crate) mod columns;
pub mod content;
pub mod errors;
pub mod posts;
pub mod products;

pub use errors::ContentError;
