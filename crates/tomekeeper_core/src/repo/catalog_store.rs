//! Catalog store contract shared by every backing strategy.
//!
//! # Responsibility
//! - Define list/create/update/delete over the canonical item collection.
//! - Classify store failures so callers can tell "missing" from
//!   "unreachable" from "refused".
//!
//! # Invariants
//! - Stores assign ids on create; callers never choose them.
//! - Deleting a missing id succeeds without effect.
//! - Updating a missing id fails with `NotFound`.

use crate::model::catalog_item::{CatalogItem, CatalogItemFields, CatalogItemId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Backing strategy selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreMode {
    /// In-process list seeded with the sample dataset.
    #[default]
    Local,
    /// External catalog service reached over HTTP.
    Remote,
}

impl StoreMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
        }
    }

    /// Parses a mode name, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" | "mock" => Some(Self::Local),
            "remote" | "http" => Some(Self::Remote),
            _ => None,
        }
    }
}

/// Store operation, used in error and log metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    List,
    Create,
    Update,
    Delete,
}

impl StoreOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// Store-level failure.
#[derive(Debug)]
pub enum StoreError {
    /// No item with this id exists.
    NotFound(CatalogItemId),
    /// Network failure, timeout, or connection refusal.
    Unavailable {
        operation: StoreOperation,
        reason: String,
    },
    /// The store answered with a non-success status.
    Rejected {
        operation: StoreOperation,
        status: u16,
    },
    /// The store answered with a payload that does not decode.
    InvalidData(String),
    /// The store could not be constructed from configuration.
    Configuration(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "catalog item not found: {id}"),
            Self::Unavailable { operation, reason } => {
                write!(f, "catalog store unavailable during {}: {reason}", operation.as_str())
            }
            Self::Rejected { operation, status } => write!(
                f,
                "catalog store rejected {} with status {status}",
                operation.as_str()
            ),
            Self::InvalidData(message) => write!(f, "invalid catalog data: {message}"),
            Self::Configuration(message) => write!(f, "invalid store configuration: {message}"),
        }
    }
}

impl Error for StoreError {}

/// Backing store for the canonical catalog collection.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Which strategy this store implements.
    fn mode(&self) -> StoreMode;
    async fn list(&self) -> StoreResult<Vec<CatalogItem>>;
    async fn create(&self, fields: &CatalogItemFields) -> StoreResult<CatalogItem>;
    async fn update(
        &self,
        id: CatalogItemId,
        fields: &CatalogItemFields,
    ) -> StoreResult<CatalogItem>;
    async fn delete(&self, id: CatalogItemId) -> StoreResult<()>;
}

#[async_trait]
impl<S: CatalogStore + ?Sized> CatalogStore for Box<S> {
    fn mode(&self) -> StoreMode {
        (**self).mode()
    }

    async fn list(&self) -> StoreResult<Vec<CatalogItem>> {
        (**self).list().await
    }

    async fn create(&self, fields: &CatalogItemFields) -> StoreResult<CatalogItem> {
        (**self).create(fields).await
    }

    async fn update(
        &self,
        id: CatalogItemId,
        fields: &CatalogItemFields,
    ) -> StoreResult<CatalogItem> {
        (**self).update(id, fields).await
    }

    async fn delete(&self, id: CatalogItemId) -> StoreResult<()> {
        (**self).delete(id).await
    }
}
