//! Cross-table content queries

pub(crate) mod repository;
pub mod service;

pub use service::*;
