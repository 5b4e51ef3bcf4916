//! Contract layer - public API for in-process callers
//!
//! Transport-agnostic models, the error taxonomy and the native client trait.

pub mod client;
pub mod error;
pub mod model;

pub use client::RecordAccessApi;
pub use error::{RecordError, RecordErrorKind, StoreError};
pub use model::{PageRequest, Record, ResultSet, Saved, DEFAULT_PAGE_SIZE};
