//! Record Access Module
//!
//! Generic paginated CRUD over SeaORM entities. Every bound table gets the
//! same five operations (list, get by id, create, update, delete) with one
//! shared error taxonomy.

// Public exports
pub mod contract;
pub use contract::{
    PageRequest, Record, RecordAccessApi, RecordError, RecordErrorKind, ResultSet, Saved,
    StoreError,
};

pub mod config;
pub use config::Config;

pub mod module;
pub use module::RecordAccessModule;

pub mod domain;
pub use domain::{RecordService, RecordStore, Window};

pub mod infra;
pub use infra::storage::entity;
