//! Store trait for data access
//!
//! This is the ORM boundary the record service consumes.
//! The SeaORM implementation is in infra/storage/store.rs

use crate::contract::{PageRequest, Record, Saved, StoreError};
use async_trait::async_trait;

/// Offset, limit and ordering applied to a find query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Window {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    /// Raw sort expression, passed through unvalidated
    pub order: Option<String>,
}

impl From<&PageRequest> for Window {
    fn from(page: &PageRequest) -> Self {
        Self {
            offset: page.offset(),
            limit: page.limit(),
            order: page.sort_order().map(str::to_string),
        }
    }
}

/// Generic store for one table
#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    /// Count every row of the table
    async fn count(&self) -> Result<u64, StoreError>;

    /// Find rows within a window
    async fn find_window(&self, window: &Window) -> Result<Vec<R>, StoreError>;

    /// Find the first row with the given primary key
    async fn find_by_id(&self, id: R::Id) -> Result<Option<R>, StoreError>;

    /// Insert when the key is unset, otherwise update (or insert) the keyed row
    async fn save(&self, record: R) -> Result<Saved<R>, StoreError>;

    /// Overwrite an existing keyed row; a missing row is `StoreError::NoRow`
    async fn update(&self, record: R) -> Result<Saved<R>, StoreError>;

    /// Delete by primary key, returning the rows removed
    async fn delete(&self, id: R::Id) -> Result<u64, StoreError>;
}
