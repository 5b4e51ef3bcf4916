//! Native client trait for in-process callers
//!
//! One trait, instantiated once per bound table.

use super::error::RecordError;
use super::model::{PageRequest, Record, ResultSet, Saved};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Record access API for a single table
#[async_trait]
pub trait RecordAccessApi<R: Record>: Send + Sync {
    /// List one page of records plus the total row count of the table
    async fn list(
        &self,
        cancel: &CancellationToken,
        page: &PageRequest,
    ) -> Result<ResultSet<R>, RecordError>;

    /// Get a record by primary key
    async fn get_by_id(&self, cancel: &CancellationToken, id: R::Id) -> Result<R, RecordError>;

    /// Insert a record, or upsert it when its key is already populated
    async fn create(&self, cancel: &CancellationToken, record: R)
        -> Result<Saved<R>, RecordError>;

    /// Overwrite every field of an existing record
    async fn update(
        &self,
        cancel: &CancellationToken,
        id: R::Id,
        updated: R,
    ) -> Result<Saved<R>, RecordError>;

    /// Delete an existing record, returning the rows removed
    async fn delete(&self, cancel: &CancellationToken, id: R::Id) -> Result<u64, RecordError>;
}
