//! Domain service - the five record operations and their error translation

use crate::contract::{
    PageRequest, Record, RecordAccessApi, RecordError, RecordErrorKind, ResultSet, Saved,
    StoreError,
};
use super::store::{RecordStore, Window};
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Record access service for one table
pub struct RecordService<R: Record> {
    store: Arc<dyn RecordStore<R>>,
}

impl<R: Record> Clone for RecordService<R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<R: Record> RecordService<R> {
    /// Create a new service over an explicit store handle
    pub fn new(store: Arc<dyn RecordStore<R>>) -> Self {
        Self { store }
    }

    /// List one window of records plus the unpaginated row count
    pub async fn list(
        &self,
        cancel: &CancellationToken,
        page: &PageRequest,
    ) -> Result<ResultSet<R>, RecordError> {
        let window = Window::from(page);
        debug!(
            resource = R::RESOURCE,
            page = page.page,
            page_size = page.page_size,
            order = ?window.order,
            "listing records"
        );

        let total_rows = guarded(cancel, self.store.count())
            .await
            .map_err(|e| collapse::<R>(RecordErrorKind::NotFound, e))?;

        let records = guarded(cancel, self.store.find_window(&window))
            .await
            .map_err(|e| collapse::<R>(RecordErrorKind::NotFound, e))?;

        Ok(ResultSet::new(records, total_rows))
    }

    /// Get a record by primary key
    pub async fn get_by_id(&self, cancel: &CancellationToken, id: R::Id) -> Result<R, RecordError> {
        debug!(resource = R::RESOURCE, %id, "getting record");
        self.fetch_existing(cancel, id).await
    }

    /// Insert or upsert a record
    pub async fn create(
        &self,
        cancel: &CancellationToken,
        record: R,
    ) -> Result<Saved<R>, RecordError> {
        debug!(resource = R::RESOURCE, keyed = record.has_id(), "creating record");

        guarded(cancel, self.store.save(record))
            .await
            .map_err(|e| collapse::<R>(RecordErrorKind::InsertFailed, e))
    }

    /// Overwrite every field of the record stored under `id`
    pub async fn update(
        &self,
        cancel: &CancellationToken,
        id: R::Id,
        updated: R,
    ) -> Result<Saved<R>, RecordError> {
        debug!(resource = R::RESOURCE, %id, "updating record");

        let existing = self.fetch_existing(cancel, id).await?;
        let merged = R::overwrite(&existing, &updated);

        guarded(cancel, self.store.update(merged))
            .await
            .map_err(|e| collapse::<R>(RecordErrorKind::UpdateFailed, e))
    }

    /// Delete the record stored under `id`
    pub async fn delete(&self, cancel: &CancellationToken, id: R::Id) -> Result<u64, RecordError> {
        debug!(resource = R::RESOURCE, %id, "deleting record");

        let existing = self.fetch_existing(cancel, id).await?;

        guarded(cancel, self.store.delete(existing.id()))
            .await
            .map_err(|e| collapse::<R>(RecordErrorKind::DeleteFailed, e))
    }

    async fn fetch_existing(&self, cancel: &CancellationToken, id: R::Id) -> Result<R, RecordError> {
        guarded(cancel, self.store.find_by_id(id))
            .await
            .and_then(|found| found.ok_or(StoreError::NoRow))
            .map_err(|e| collapse::<R>(RecordErrorKind::NotFound, e))
    }
}

#[async_trait]
impl<R: Record> RecordAccessApi<R> for RecordService<R> {
    async fn list(
        &self,
        cancel: &CancellationToken,
        page: &PageRequest,
    ) -> Result<ResultSet<R>, RecordError> {
        RecordService::list(self, cancel, page).await
    }

    async fn get_by_id(&self, cancel: &CancellationToken, id: R::Id) -> Result<R, RecordError> {
        RecordService::get_by_id(self, cancel, id).await
    }

    async fn create(
        &self,
        cancel: &CancellationToken,
        record: R,
    ) -> Result<Saved<R>, RecordError> {
        RecordService::create(self, cancel, record).await
    }

    async fn update(
        &self,
        cancel: &CancellationToken,
        id: R::Id,
        updated: R,
    ) -> Result<Saved<R>, RecordError> {
        RecordService::update(self, cancel, id, updated).await
    }

    async fn delete(&self, cancel: &CancellationToken, id: R::Id) -> Result<u64, RecordError> {
        RecordService::delete(self, cancel, id).await
    }
}

/// Race a store call against the caller's cancellation token.
async fn guarded<T, F>(cancel: &CancellationToken, call: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(StoreError::Cancelled),
        result = call => result,
    }
}

fn collapse<R: Record>(kind: RecordErrorKind, source: StoreError) -> RecordError {
    match &source {
        StoreError::NoRow => debug!(resource = R::RESOURCE, %kind, "no matching row"),
        StoreError::Cancelled => debug!(resource = R::RESOURCE, %kind, "operation cancelled"),
        StoreError::Db(err) => warn!(resource = R::RESOURCE, %kind, error = %err, "store call failed"),
    }
    RecordError::new(kind, R::RESOURCE, source)
}
