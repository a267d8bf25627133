//! HTTP-backed catalog store.
//!
//! # Responsibility
//! - Speak the external catalog service's REST routes (`/books`,
//!   `/books/{id}`) with JSON bodies.
//! - Bound every request with a timeout so callers never hang.
//!
//! # Invariants
//! - Transport failures map to `StoreError::Unavailable`.
//! - Non-success statuses map to `StoreError::Rejected`, except `PUT` 404
//!   (`NotFound`) and `DELETE` 404 (idempotent success).
//! - Request bodies never carry an `id`; the service assigns it.

use crate::model::catalog_item::{CatalogItem, CatalogItemFields, CatalogItemId};
use crate::repo::catalog_store::{
    CatalogStore, StoreError, StoreMode, StoreOperation, StoreResult,
};
use async_trait::async_trait;
use log::{info, warn};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};

/// Catalog store that delegates to an external HTTP service.
#[derive(Debug, Clone)]
pub struct HttpCatalogStore {
    base_url: String,
    client: Client,
}

impl HttpCatalogStore {
    /// Creates a store for `base_url` with a per-request timeout.
    ///
    /// # Errors
    /// - `Configuration` when `base_url` is blank or the HTTP client cannot
    ///   be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> StoreResult<Self> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(StoreError::Configuration(
                "remote store base_url cannot be empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| StoreError::Configuration(format!("failed to build client: {err}")))?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/books", self.base_url)
    }

    fn item_url(&self, id: CatalogItemId) -> String {
        format!("{}/books/{id}", self.base_url)
    }

    async fn send(
        &self,
        operation: StoreOperation,
        request: RequestBuilder,
    ) -> StoreResult<Response> {
        let started_at = Instant::now();
        match request.send().await {
            Ok(response) => {
                info!(
                    "event=store_request module=repo status=ok operation={} http_status={} duration_ms={}",
                    operation.as_str(),
                    response.status().as_u16(),
                    started_at.elapsed().as_millis()
                );
                Ok(response)
            }
            Err(err) => {
                warn!(
                    "event=store_request module=repo status=error operation={} duration_ms={} error_code={}",
                    operation.as_str(),
                    started_at.elapsed().as_millis(),
                    transport_error_code(&err)
                );
                Err(StoreError::Unavailable {
                    operation,
                    reason: err.to_string(),
                })
            }
        }
    }
}

#[async_trait]
impl CatalogStore for HttpCatalogStore {
    fn mode(&self) -> StoreMode {
        StoreMode::Remote
    }

    async fn list(&self) -> StoreResult<Vec<CatalogItem>> {
        let operation = StoreOperation::List;
        let response = self
            .send(operation, self.client.get(self.collection_url()))
            .await?;
        decode(operation, expect_success(operation, response)?).await
    }

    async fn create(&self, fields: &CatalogItemFields) -> StoreResult<CatalogItem> {
        let operation = StoreOperation::Create;
        let response = self
            .send(operation, self.client.post(self.collection_url()).json(fields))
            .await?;
        decode(operation, expect_success(operation, response)?).await
    }

    async fn update(
        &self,
        id: CatalogItemId,
        fields: &CatalogItemFields,
    ) -> StoreResult<CatalogItem> {
        let operation = StoreOperation::Update;
        let response = self
            .send(operation, self.client.put(self.item_url(id)).json(fields))
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(id));
        }
        let item: CatalogItem = decode(operation, expect_success(operation, response)?).await?;
        if item.id != id {
            return Err(StoreError::InvalidData(format!(
                "update of item {id} returned item {}",
                item.id
            )));
        }
        Ok(item)
    }

    async fn delete(&self, id: CatalogItemId) -> StoreResult<()> {
        let operation = StoreOperation::Delete;
        let response = self
            .send(operation, self.client.delete(self.item_url(id)))
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }
        expect_success(operation, response).map(|_| ())
    }
}

fn expect_success(operation: StoreOperation, response: Response) -> StoreResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    Err(StoreError::Rejected {
        operation,
        status: status.as_u16(),
    })
}

async fn decode<T: DeserializeOwned>(operation: StoreOperation, response: Response) -> StoreResult<T> {
    response.json::<T>().await.map_err(|err| {
        if err.is_timeout() || err.is_connect() || err.is_body() {
            StoreError::Unavailable {
                operation,
                reason: err.to_string(),
            }
        } else {
            StoreError::InvalidData(format!(
                "{} response did not decode: {err}",
                operation.as_str()
            ))
        }
    })
}

fn transport_error_code(err: &reqwest::Error) -> &'static str {
    if err.is_timeout() {
        "timeout"
    } else if err.is_connect() {
        "connect_failed"
    } else {
        "transport_failed"
    }
}
