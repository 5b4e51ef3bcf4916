//! Configuration for the record access module

use anyhow::Context;
use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use sea_orm::ConnectOptions;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Prefix for environment overrides (e.g. `RECORD_ACCESS_DATABASE_URL`)
pub const ENV_PREFIX: &str = "RECORD_ACCESS_";

/// Record access configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Database DSN (postgres:// or sqlite:)
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Maximum pooled connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Minimum idle connections kept open
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Time allowed to establish a connection
    #[serde(default = "default_connect_timeout", with = "humantime_serde")]
    pub connect_timeout: Duration,

    /// Idle connections are closed after this long
    #[serde(default = "default_idle_timeout", with = "humantime_serde")]
    pub idle_timeout: Duration,

    /// Apply pending migrations on init
    #[serde(default = "default_true")]
    pub run_migrations: bool,

    /// Log every SQL statement through the driver
    #[serde(default)]
    pub sql_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout: default_connect_timeout(),
            idle_timeout: default_idle_timeout(),
            run_migrations: true,
            sql_logging: false,
        }
    }
}

impl Config {
    /// Load from an optional YAML file, then apply `RECORD_ACCESS_*` overrides.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .context("invalid record access configuration")
    }

    /// Pool options for `sea_orm::Database::connect`
    pub fn connect_options(&self) -> ConnectOptions {
        let mut opts = ConnectOptions::new(self.database_url.clone());
        opts.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(self.connect_timeout)
            .idle_timeout(self.idle_timeout)
            .sqlx_logging(self.sql_logging);
        opts
    }

    /// In-memory SQLite on a single connection, for tests and local tooling
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            ..Self::default()
        }
    }
}

fn default_database_url() -> String {
    "sqlite::memory:".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(8)
}

fn default_idle_timeout() -> Duration {
    Duration::from_secs(10 * 60)
}

fn default_true() -> bool {
    true
}
