//! Module declaration and lifecycle

use crate::config::Config;
use crate::contract::Record;
use crate::domain::RecordService;
use crate::infra::storage::entity::{api_keys, app_versions, apps, permissions, roles, users};
use crate::infra::storage::{Migrator, SeaOrmStore};
use anyhow::{Context, Result};
use sea_orm::{Database, DatabaseConnection, EntityTrait, IntoActiveModel, PrimaryKeyTrait};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// Record access module
///
/// Owns the shared connection pool and hands out one service per table.
/// Services hold the pool explicitly; nothing is process-global.
pub struct RecordAccessModule {
    config: Config,
    db: Arc<DatabaseConnection>,
}

impl RecordAccessModule {
    /// Connect to the configured database and optionally run migrations
    pub async fn init(config: Config) -> Result<Self> {
        let db = Database::connect(config.connect_options())
            .await
            .context("failed to connect to record store")?;

        let module = Self::from_connection(Arc::new(db), config);
        if module.config.run_migrations {
            module.migrate().await?;
        }

        tracing::info!(
            max_connections = module.config.max_connections,
            "Record access module initialized"
        );
        Ok(module)
    }

    /// Wrap an already open connection
    pub fn from_connection(db: Arc<DatabaseConnection>, config: Config) -> Self {
        Self { config, db }
    }

    /// Apply all pending migrations
    pub async fn migrate(&self) -> Result<()> {
        Migrator::up(&*self.db, None)
            .await
            .context("record access migrations failed")?;
        tracing::info!("Record access migrations completed");
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn connection(&self) -> &Arc<DatabaseConnection> {
        &self.db
    }

    /// Service for any SeaORM entity whose model is a [`Record`]
    pub fn service<E>(&self) -> RecordService<E::Model>
    where
        E: EntityTrait + 'static,
        E::Model: Record + IntoActiveModel<E::ActiveModel>,
        E::ActiveModel: Send,
        <E::Model as Record>::Id: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        RecordService::new(Arc::new(SeaOrmStore::<E>::new(self.db.clone())))
    }

    pub fn apps(&self) -> RecordService<apps::Model> {
        self.service::<apps::Entity>()
    }

    pub fn app_versions(&self) -> RecordService<app_versions::Model> {
        self.service::<app_versions::Entity>()
    }

    pub fn api_keys(&self) -> RecordService<api_keys::Model> {
        self.service::<api_keys::Entity>()
    }

    pub fn users(&self) -> RecordService<users::Model> {
        self.service::<users::Entity>()
    }

    pub fn roles(&self) -> RecordService<roles::Model> {
        self.service::<roles::Entity>()
    }

    pub fn permissions(&self) -> RecordService<permissions::Model> {
        self.service::<permissions::Entity>()
    }
}
