//! Presentational components
//!
//! Maud functions over already-loaded content. Nothing here touches the store.

pub(crate) mod cards;
pub(crate) mod layout;
pub(crate) mod markdown;
pub(crate) mod publications;
