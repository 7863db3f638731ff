//! Products

pub mod data;
pub(crate) mod records;
pub(crate) mod repository;
pub mod service;

pub use service::*;
