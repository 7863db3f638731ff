//! Extension traits

mod depot;
mod request;
mod result;

pub(crate) use depot::DepotExt as _;
pub(crate) use request::RequestExt as _;
pub(crate) use result::ContentResultExt as _;
