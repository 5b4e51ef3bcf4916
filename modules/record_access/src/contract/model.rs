//! Contract models for record access
//!
//! These models are transport-agnostic and shared by every bound table.
//! No serde derives; callers own their wire formats.

use std::fmt::{Debug, Display};

/// Default number of rows per page
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// A row of one table, addressable by a single-column primary key.
///
/// Bound tables implement this once; everything else (listing, point
/// lookups, upserts, merges, deletes) is provided generically.
pub trait Record: Clone + Debug + Send + Sync + 'static {
    /// Primary key type (64-bit or 32-bit integer depending on table)
    type Id: Copy + Eq + Default + Debug + Display + Send + Sync + 'static;

    /// Table name, used in logs and error messages
    const RESOURCE: &'static str;

    fn id(&self) -> Self::Id;

    fn set_id(&mut self, id: Self::Id);

    /// Whether the store has already assigned a key to this record.
    fn has_id(&self) -> bool {
        self.id() != Self::Id::default()
    }

    /// Copy every field of `updated` over `existing`, keeping the key of `existing`.
    ///
    /// This is a full overwrite: fields left at their zero value in `updated`
    /// reset the stored value.
    fn overwrite(existing: &Self, updated: &Self) -> Self {
        let mut merged = updated.clone();
        merged.set_id(existing.id());
        merged
    }
}

/// Pagination and ordering for list operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number; zero or negative disables the offset
    pub page: i64,
    /// Row limit; zero means no limit
    pub page_size: u64,
    /// Raw sort expression such as `"id"` or `"name desc"`
    pub order: Option<String>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            order: None,
        }
    }
}

impl PageRequest {
    pub fn new(page: i64, page_size: u64) -> Self {
        Self {
            page,
            page_size,
            order: None,
        }
    }

    /// Limit-only request starting from the first row
    pub fn unpaged(limit: u64) -> Self {
        Self::new(0, limit)
    }

    pub fn order_by(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    /// Rows to skip, or `None` when the request is not paginated.
    pub fn offset(&self) -> Option<u64> {
        if self.page > 0 {
            let skipped_pages = u64::try_from(self.page - 1).unwrap_or(0);
            Some(skipped_pages.saturating_mul(self.page_size))
        } else {
            None
        }
    }

    pub fn limit(&self) -> Option<u64> {
        (self.page_size > 0).then_some(self.page_size)
    }

    /// Sort expression, with blank input treated as unspecified.
    pub fn sort_order(&self) -> Option<&str> {
        self.order
            .as_deref()
            .map(str::trim)
            .filter(|order| !order.is_empty())
    }
}

/// One window of records plus the row count of the whole table
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet<R> {
    pub records: Vec<R>,
    /// Total rows in the table, independent of the pagination window
    pub total_rows: u64,
}

impl<R> ResultSet<R> {
    pub fn new(records: Vec<R>, total_rows: u64) -> Self {
        Self {
            records,
            total_rows,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A persisted record together with the number of rows the write touched
#[derive(Debug, Clone, PartialEq)]
pub struct Saved<R> {
    pub record: R,
    pub rows_affected: u64,
}

impl<R> Saved<R> {
    pub fn new(record: R, rows_affected: u64) -> Self {
        Self {
            record,
            rows_affected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_has_no_offset_skip() {
        let page = PageRequest::new(1, 2);
        assert_eq!(page.offset(), Some(0));
        assert_eq!(page.limit(), Some(2));
    }

    #[test]
    fn later_pages_skip_whole_pages() {
        assert_eq!(PageRequest::new(3, 25).offset(), Some(50));
    }

    #[test]
    fn non_positive_page_is_limit_only() {
        assert_eq!(PageRequest::new(0, 10).offset(), None);
        assert_eq!(PageRequest::new(-4, 10).offset(), None);
        assert_eq!(PageRequest::unpaged(10).limit(), Some(10));
    }

    #[test]
    fn zero_page_size_means_no_limit() {
        assert_eq!(PageRequest::new(1, 0).limit(), None);
    }

    #[test]
    fn blank_order_is_unspecified() {
        assert_eq!(PageRequest::default().order_by("  ").sort_order(), None);
        assert_eq!(
            PageRequest::default().order_by(" name desc ").sort_order(),
            Some("name desc")
        );
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: i32,
        body: String,
        pinned: bool,
    }

    impl Record for Note {
        type Id = i32;
        const RESOURCE: &'static str = "notes";

        fn id(&self) -> i32 {
            self.id
        }

        fn set_id(&mut self, id: i32) {
            self.id = id;
        }
    }

    #[test]
    fn overwrite_replaces_every_field_but_the_key() {
        let existing = Note {
            id: 7,
            body: "draft".to_string(),
            pinned: true,
        };
        let updated = Note {
            id: 0,
            body: String::new(),
            pinned: false,
        };

        let merged = Record::overwrite(&existing, &updated);
        assert_eq!(
            merged,
            Note {
                id: 7,
                body: String::new(),
                pinned: false,
            }
        );
        assert!(merged.has_id());
        assert!(!updated.has_id());
    }
}
