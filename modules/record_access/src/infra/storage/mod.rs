//! Storage layer - database entities, the generic store and migrations

pub mod entity;
pub mod migrations;
pub mod store;

pub use migrations::Migrator;
pub use store::SeaOrmStore;
