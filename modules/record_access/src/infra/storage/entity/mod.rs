//! SeaORM entities for the bound tables
//!
//! Each table is a `DeriveEntityModel` declaration plus one `bind_record!`
//! line; the generic store and service do the rest.

/// Implement [`Record`](crate::contract::Record) for a model whose key column is `id`.
macro_rules! bind_record {
    ($model:ty, $id:ty, $resource:literal) => {
        impl $crate::contract::Record for $model {
            type Id = $id;
            const RESOURCE: &'static str = $resource;

            fn id(&self) -> $id {
                self.id
            }

            fn set_id(&mut self, id: $id) {
                self.id = id;
            }
        }
    };
}

pub mod api_keys;
pub mod app_versions;
pub mod apps;
pub mod permissions;
pub mod roles;
pub mod users;
