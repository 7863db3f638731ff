//! Product catalog pages

pub(crate) mod index;
pub(crate) mod show;
