//! Content store access for Herbarium: connection management, migrations,
//! per-table services and the content importer.

pub mod context;
pub mod database;
pub mod domain;
pub mod import;

#[cfg(test)]
mod test;
