//! Core domain logic for Tomekeeper.
//! This crate is the single source of truth for catalog invariants.

pub mod assistant;
pub mod config;
pub mod geometry;
pub mod logging;
pub mod model;
pub mod pricing;
pub mod repo;
pub mod search;
pub mod service;

pub use assistant::client::{AssistantReply, CatalogAssistant, ChatRole, ChatTurn, ReplySource};
pub use config::{load_config, AppConfig, ConfigError};
pub use geometry::pointer::{
    glow_parameters, relative_position, surface_metrics, GlowParameters, PointerSurfaceMetrics,
    SurfaceRect,
};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::catalog_item::{
    CatalogItem, CatalogItemDraft, CatalogItemFields, CatalogItemId, DraftField, ValidationErrors,
};
pub use model::rare_item::RareItem;
pub use pricing::purchase::{quote_purchase, PurchaseFlow, PurchaseQuote, PurchaseStage};
pub use pricing::tier::{compute_total, resolve_tier, PricingError, PricingResult};
pub use repo::build_store;
pub use repo::catalog_store::{CatalogStore, StoreError, StoreMode, StoreResult};
pub use repo::http_store::HttpCatalogStore;
pub use repo::memory_store::InMemoryCatalogStore;
pub use search::query::{compute_stats, filter_by_query, CatalogStats};
pub use service::catalog_service::{
    CatalogService, DataSource, DeleteConfirmation, Mutation, MutationError, MutationKey,
    MutationResult, SubmitState,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
