//! Entity model and result collections
//!
//! Typed domain objects, the metadata envelope list endpoints wrap them
//! in, and the [`EntityList`] collection that auto-pagination merges
//! fetched pages into.

mod models;
mod types;

pub use models::{Counterparty, CustomerOrder, Product, Store};
pub use types::{Entity, EntityList, ListMeta, Meta};

pub(crate) use types::{rows_into_entities, PageResponse};

#[cfg(test)]
mod tests;
