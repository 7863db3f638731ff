//! Herbarium
//!
//! Content model and site metadata for the Herbarium storefront: products,
//! blog posts and articles, plus the pure operations the site performs on
//! them (search matching, category merging, related-item selection,
//! discount maths) and the generated site artifacts (sitemap, web-app
//! manifest, schema.org structured data).
//!
//! Nothing in this crate performs I/O. Storage lives in `herbarium-app`,
//! HTTP and HTML rendering in `herbarium-web`.

pub mod categories;
pub mod dates;
pub mod ids;
pub mod manifest;
pub mod pricing;
pub mod products;
pub mod publications;
pub mod search;
pub mod site;
pub mod sitemap;
pub mod structured_data;

#[cfg(test)]
mod fixtures;
