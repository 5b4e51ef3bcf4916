//! Domain layer - generic record operations

pub mod service;
pub mod store;

pub use service::RecordService;
pub use store::{RecordStore, Window};
