//! Contract error types for record access
//!
//! Every store failure is collapsed into one of four sentinel kinds at the
//! point of the failing call. The original store error stays reachable
//! through `source()` for logging.

use sea_orm::DbErr;

/// Failure reported by the underlying store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Lookup matched no row
    #[error("no matching row")]
    NoRow,
    /// Caller cancelled the operation before the store answered
    #[error("operation cancelled")]
    Cancelled,
    /// ORM or driver error
    #[error(transparent)]
    Db(#[from] DbErr),
}

/// The four sentinel error kinds callers switch on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordErrorKind {
    NotFound,
    InsertFailed,
    UpdateFailed,
    DeleteFailed,
}

impl std::fmt::Display for RecordErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::NotFound => "not_found",
            Self::InsertFailed => "insert_failed",
            Self::UpdateFailed => "update_failed",
            Self::DeleteFailed => "delete_failed",
        };
        f.write_str(name)
    }
}

/// Record access errors
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// Lookup found nothing, or a list query failed
    #[error("{resource} not found")]
    NotFound {
        resource: &'static str,
        #[source]
        source: StoreError,
    },
    /// Create could not persist the record
    #[error("failed to insert {resource}")]
    InsertFailed {
        resource: &'static str,
        #[source]
        source: StoreError,
    },
    /// Update could not merge or persist the record
    #[error("failed to update {resource}")]
    UpdateFailed {
        resource: &'static str,
        #[source]
        source: StoreError,
    },
    /// Delete could not remove the record
    #[error("failed to delete {resource}")]
    DeleteFailed {
        resource: &'static str,
        #[source]
        source: StoreError,
    },
}

impl RecordError {
    pub fn new(kind: RecordErrorKind, resource: &'static str, source: StoreError) -> Self {
        match kind {
            RecordErrorKind::NotFound => Self::NotFound { resource, source },
            RecordErrorKind::InsertFailed => Self::InsertFailed { resource, source },
            RecordErrorKind::UpdateFailed => Self::UpdateFailed { resource, source },
            RecordErrorKind::DeleteFailed => Self::DeleteFailed { resource, source },
        }
    }

    pub fn kind(&self) -> RecordErrorKind {
        match self {
            Self::NotFound { .. } => RecordErrorKind::NotFound,
            Self::InsertFailed { .. } => RecordErrorKind::InsertFailed,
            Self::UpdateFailed { .. } => RecordErrorKind::UpdateFailed,
            Self::DeleteFailed { .. } => RecordErrorKind::DeleteFailed,
        }
    }

    /// Table the failing operation targeted
    pub fn resource(&self) -> &'static str {
        match self {
            Self::NotFound { resource, .. }
            | Self::InsertFailed { resource, .. }
            | Self::UpdateFailed { resource, .. }
            | Self::DeleteFailed { resource, .. } => resource,
        }
    }

    /// The store error this sentinel was collapsed from
    pub fn cause(&self) -> &StoreError {
        match self {
            Self::NotFound { source, .. }
            | Self::InsertFailed { source, .. }
            | Self::UpdateFailed { source, .. }
            | Self::DeleteFailed { source, .. } => source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == RecordErrorKind::NotFound
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.cause(), StoreError::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn kind_round_trips_through_constructor() {
        for kind in [
            RecordErrorKind::NotFound,
            RecordErrorKind::InsertFailed,
            RecordErrorKind::UpdateFailed,
            RecordErrorKind::DeleteFailed,
        ] {
            let err = RecordError::new(kind, "apps", StoreError::NoRow);
            assert_eq!(err.kind(), kind);
            assert_eq!(err.resource(), "apps");
        }
    }

    #[test]
    fn sentinel_keeps_original_cause() {
        let err = RecordError::new(
            RecordErrorKind::InsertFailed,
            "users",
            StoreError::Db(DbErr::Custom("unique constraint violated".to_string())),
        );

        assert_eq!(err.to_string(), "failed to insert users");
        let source = err.source().map(|s| s.to_string()).unwrap_or_default();
        assert!(source.contains("unique constraint violated"), "got {source}");
        assert!(!err.is_not_found());
        assert!(!err.is_cancelled());
    }

    #[test]
    fn not_found_display_names_the_table() {
        let err = RecordError::new(RecordErrorKind::NotFound, "roles", StoreError::NoRow);
        assert_eq!(err.to_string(), "roles not found");
        assert!(err.is_not_found());
        assert!(matches!(err.cause(), StoreError::NoRow));
    }
}
