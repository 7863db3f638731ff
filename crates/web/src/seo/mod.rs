//! Sitemap and web-app manifest

pub(crate) mod manifest;
pub(crate) mod sitemap;
