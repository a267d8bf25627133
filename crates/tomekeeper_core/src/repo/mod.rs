//! Backing-store abstractions and implementations.
//!
//! # Responsibility
//! - Define the use-case oriented catalog store contract.
//! - Provide the local (in-memory) and remote (HTTP) strategies.
//! - Select the strategy from configuration in one place.
//!
//! # Invariants
//! - Call sites never branch on the strategy; they hold a `CatalogStore`.
//! - Store APIs return semantic errors (`NotFound`) separately from
//!   transport errors (`Unavailable`, `Rejected`).

pub mod catalog_store;
pub mod http_store;
pub mod memory_store;
pub mod sample_data;

use crate::config::StoreConfig;
use catalog_store::{CatalogStore, StoreMode, StoreResult};
use http_store::HttpCatalogStore;
use log::info;
use memory_store::InMemoryCatalogStore;

/// Builds the backing store selected by `config.mode`.
///
/// # Errors
/// - `StoreError::Configuration` when the remote store cannot be built.
pub fn build_store(config: &StoreConfig) -> StoreResult<Box<dyn CatalogStore>> {
    let store: Box<dyn CatalogStore> = match config.mode {
        StoreMode::Local => Box::new(InMemoryCatalogStore::with_sample_data()),
        StoreMode::Remote => Box::new(HttpCatalogStore::new(
            config.base_url.as_str(),
            config.timeout(),
        )?),
    };
    info!(
        "event=store_select module=repo status=ok mode={}",
        store.mode().as_str()
    );
    Ok(store)
}
