//! Catalog state container and mutation use-cases.
//!
//! # Responsibility
//! - Hold the canonical collection, the active query and the filtered view.
//! - Run add/update/delete through `Idle -> Submitting -> Succeeded|Failed`.
//! - Degrade a failed initial list to the built-in sample catalog.
//!
//! # Invariants
//! - Drafts are validated before any store call; invalid drafts never
//!   reach the store.
//! - A failed mutation leaves the canonical collection unchanged.
//! - At most one submission per `MutationKey` is in flight.
//! - Results that resolve after `close_view`/`load` are discarded.
//! - After update/delete the view equals `filter_by_query(items, query)`.
//!   After create the view is the whole collection, so a new item is
//!   visible regardless of the active query.

use crate::model::catalog_item::{
    CatalogItem, CatalogItemDraft, CatalogItemFields, CatalogItemId, ValidationErrors,
};
use crate::repo::catalog_store::{CatalogStore, StoreError, StoreMode};
use crate::repo::sample_data::sample_catalog;
use crate::search::query::{compute_stats, filter_by_query, CatalogStats};
use log::{error, info, warn};
use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;
use uuid::Uuid;

pub type MutationResult<T> = Result<Mutation<T>, MutationError>;

/// Logical user action a submission belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKey {
    Create,
    Update(CatalogItemId),
    Delete(CatalogItemId),
}

impl Display for MutationKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Update(id) => write!(f, "update:{id}"),
            Self::Delete(id) => write!(f, "delete:{id}"),
        }
    }
}

/// Per-action submission state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Outcome of a mutation that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation<T> {
    /// The store accepted the change and the canonical collection has it.
    Applied(T),
    /// The user declined the confirmation step; nothing was dispatched.
    Cancelled,
    /// The view that started the request was closed before it resolved.
    Discarded,
}

impl<T> Mutation<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    pub fn applied(self) -> Option<T> {
        match self {
            Self::Applied(value) => Some(value),
            Self::Cancelled | Self::Discarded => None,
        }
    }
}

/// Explicit answer to the delete confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteConfirmation {
    Confirmed,
    Declined,
}

/// Where the canonical collection was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Nothing loaded yet.
    Empty,
    /// Loaded from the configured store.
    Store,
    /// The store failed to list; the built-in sample catalog is shown.
    Fallback,
}

/// Mutation failure surfaced to the caller.
#[derive(Debug)]
pub enum MutationError {
    /// Field-level problems; nothing was dispatched.
    Validation(ValidationErrors),
    /// No item with this id exists.
    NotFound(CatalogItemId),
    /// The store could not complete the request; safe to retry manually.
    BackingStoreUnavailable(StoreError),
    /// A submission for the same action is still pending.
    AlreadyInFlight(MutationKey),
}

impl Display for MutationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "catalog item not found: {id}"),
            Self::BackingStoreUnavailable(err) => write!(f, "{err}"),
            Self::AlreadyInFlight(key) => write!(f, "submission already in flight: {key}"),
        }
    }
}

impl Error for MutationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::BackingStoreUnavailable(err) => Some(err),
            Self::NotFound(_) | Self::AlreadyInFlight(_) => None,
        }
    }
}

impl From<ValidationErrors> for MutationError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for MutationError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(id) => Self::NotFound(id),
            other => Self::BackingStoreUnavailable(other),
        }
    }
}

struct CatalogState {
    items: Vec<CatalogItem>,
    query: String,
    view: Vec<CatalogItem>,
    source: DataSource,
    generation: Uuid,
    submissions: HashMap<MutationKey, SubmitState>,
}

impl CatalogState {
    fn refilter(&mut self) {
        self.view = filter_by_query(&self.items, &self.query);
    }
}

/// Explicit state container for the inventory screen.
///
/// All methods take `&self`; renderers re-read `view()`/`stats()` after
/// each call.
pub struct CatalogService<S: CatalogStore> {
    store: S,
    state: Mutex<CatalogState>,
}

impl<S: CatalogStore> CatalogService<S> {
    /// Creates an empty service over `store`. Call [`Self::load`] next.
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: Mutex::new(CatalogState {
                items: Vec::new(),
                query: String::new(),
                view: Vec::new(),
                source: DataSource::Empty,
                generation: Uuid::new_v4(),
                submissions: HashMap::new(),
            }),
        }
    }

    pub fn store_mode(&self) -> StoreMode {
        self.store.mode()
    }

    /// Loads the canonical collection and resets the view to it.
    ///
    /// Never fails: when the store cannot list, the built-in sample catalog
    /// is used and `source()` reports `Fallback`. Pending submissions from
    /// before the reload are discarded when they resolve.
    pub async fn load(&self) -> Vec<CatalogItem> {
        self.lock().generation = Uuid::new_v4();

        let started_at = Instant::now();
        let (items, source) = match self.store.list().await {
            Ok(items) => (dedupe_ids(items), DataSource::Store),
            Err(err) => {
                warn!(
                    "event=catalog_fallback module=service status=degraded mode={} error={}",
                    self.store.mode().as_str(),
                    err
                );
                (sample_catalog(), DataSource::Fallback)
            }
        };

        let mut state = self.lock();
        state.items = items;
        state.source = source;
        state.refilter();
        info!(
            "event=catalog_load module=service status=ok source={:?} count={} duration_ms={}",
            source,
            state.items.len(),
            started_at.elapsed().as_millis()
        );
        state.view.clone()
    }

    /// Invalidates in-flight submissions started from the current view.
    pub fn close_view(&self) {
        self.lock().generation = Uuid::new_v4();
    }

    /// Sets the active query and returns the re-derived view.
    pub fn set_query(&self, query: impl Into<String>) -> Vec<CatalogItem> {
        let mut state = self.lock();
        state.query = query.into();
        state.refilter();
        state.view.clone()
    }

    pub fn query(&self) -> String {
        self.lock().query.clone()
    }

    /// Canonical collection.
    pub fn items(&self) -> Vec<CatalogItem> {
        self.lock().items.clone()
    }

    /// Filtered view shown to the user.
    pub fn view(&self) -> Vec<CatalogItem> {
        self.lock().view.clone()
    }

    pub fn source(&self) -> DataSource {
        self.lock().source
    }

    /// Stats over the canonical collection, independent of the query.
    pub fn stats(&self) -> CatalogStats {
        compute_stats(&self.lock().items)
    }

    pub fn get(&self, id: CatalogItemId) -> Option<CatalogItem> {
        self.lock().items.iter().find(|item| item.id == id).cloned()
    }

    pub fn submit_state(&self, key: MutationKey) -> SubmitState {
        self.lock()
            .submissions
            .get(&key)
            .copied()
            .unwrap_or_default()
    }

    /// Validates `draft` and creates a new item through the store.
    ///
    /// On success the item is appended and the view shows the whole
    /// collection.
    ///
    /// A store-assigned id that already exists locally fails the create
    /// with `InvalidData`. The store has already saved that item, so the
    /// two disagree until the next [`Self::load`].
    pub async fn add(&self, draft: &CatalogItemDraft) -> MutationResult<CatalogItem> {
        let key = MutationKey::Create;
        self.ensure_idle(key)?;
        let fields = self.validate(key, draft)?;
        let ticket = self.begin(key)?;

        let result = self.store.create(&fields).await;
        self.finish(key, ticket, result, |state, item| {
            if state.items.iter().any(|existing| existing.id == item.id) {
                error!(
                    "event=catalog_create module=service status=diverged item_id={} reason=duplicate_id",
                    item.id
                );
                return Err(StoreError::InvalidData(format!(
                    "store assigned duplicate id {}",
                    item.id
                )));
            }
            state.items.push(item.clone());
            state.view = state.items.clone();
            Ok(item)
        })
    }

    /// Validates `draft` and replaces item `id` in place.
    ///
    /// # Errors
    /// - `NotFound` when `id` is not in the canonical collection or the
    ///   store no longer knows it.
    pub async fn update(
        &self,
        id: CatalogItemId,
        draft: &CatalogItemDraft,
    ) -> MutationResult<CatalogItem> {
        let key = MutationKey::Update(id);
        self.ensure_idle(key)?;
        let fields = self.validate(key, draft)?;
        if self.get(id).is_none() {
            self.set_submit_state(key, SubmitState::Failed);
            return Err(MutationError::NotFound(id));
        }
        let ticket = self.begin(key)?;

        let result = self.store.update(id, &fields).await;
        self.finish(key, ticket, result, |state, item| {
            let Some(slot) = state.items.iter_mut().find(|existing| existing.id == id) else {
                return Err(StoreError::NotFound(id));
            };
            *slot = item.clone();
            state.refilter();
            Ok(item)
        })
    }

    /// Deletes item `id` after an explicit confirmation.
    ///
    /// A missing id is a successful no-op. `Declined` dispatches nothing.
    pub async fn delete(
        &self,
        id: CatalogItemId,
        confirmation: DeleteConfirmation,
    ) -> MutationResult<()> {
        if confirmation == DeleteConfirmation::Declined {
            return Ok(Mutation::Cancelled);
        }

        let key = MutationKey::Delete(id);
        let ticket = self.begin(key)?;

        let result = self.store.delete(id).await;
        self.finish(key, ticket, result, |state, ()| {
            state.items.retain(|item| item.id != id);
            state.refilter();
            Ok(())
        })
    }

    fn ensure_idle(&self, key: MutationKey) -> Result<(), MutationError> {
        if self.submit_state(key) == SubmitState::Submitting {
            return Err(MutationError::AlreadyInFlight(key));
        }
        Ok(())
    }

    fn validate(
        &self,
        key: MutationKey,
        draft: &CatalogItemDraft,
    ) -> Result<CatalogItemFields, MutationError> {
        draft.validate().map_err(|errors| {
            self.set_submit_state(key, SubmitState::Failed);
            MutationError::Validation(errors)
        })
    }

    /// Marks `key` as submitting and returns the view generation it belongs to.
    fn begin(&self, key: MutationKey) -> Result<Uuid, MutationError> {
        let mut state = self.lock();
        let entry = state.submissions.entry(key).or_default();
        if *entry == SubmitState::Submitting {
            return Err(MutationError::AlreadyInFlight(key));
        }
        *entry = SubmitState::Submitting;
        Ok(state.generation)
    }

    fn finish<T, U>(
        &self,
        key: MutationKey,
        ticket: Uuid,
        result: Result<T, StoreError>,
        apply: impl FnOnce(&mut CatalogState, T) -> Result<U, StoreError>,
    ) -> MutationResult<U> {
        let mut state = self.lock();
        if state.generation != ticket {
            state.submissions.insert(key, SubmitState::Idle);
            info!(
                "event={} module=service status=discarded key={}",
                event_name(key),
                key
            );
            return Ok(Mutation::Discarded);
        }

        match result.and_then(|value| apply(&mut *state, value)) {
            Ok(value) => {
                state.submissions.insert(key, SubmitState::Succeeded);
                info!(
                    "event={} module=service status=ok key={} count={}",
                    event_name(key),
                    key,
                    state.items.len()
                );
                Ok(Mutation::Applied(value))
            }
            Err(err) => {
                state.submissions.insert(key, SubmitState::Failed);
                warn!(
                    "event={} module=service status=error key={} error={}",
                    event_name(key),
                    key,
                    err
                );
                Err(err.into())
            }
        }
    }

    fn set_submit_state(&self, key: MutationKey, submit_state: SubmitState) {
        self.lock().submissions.insert(key, submit_state);
    }

    fn lock(&self) -> MutexGuard<'_, CatalogState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn event_name(key: MutationKey) -> &'static str {
    match key {
        MutationKey::Create => "catalog_create",
        MutationKey::Update(_) => "catalog_update",
        MutationKey::Delete(_) => "catalog_delete",
    }
}

fn dedupe_ids(items: Vec<CatalogItem>) -> Vec<CatalogItem> {
    let total = items.len();
    let mut seen = HashSet::with_capacity(total);
    let unique = items
        .into_iter()
        .filter(|item| seen.insert(item.id))
        .collect::<Vec<_>>();
    if unique.len() != total {
        warn!(
            "event=catalog_load module=service status=repaired dropped_duplicates={}",
            total - unique.len()
        );
    }
    unique
}
