//! Common test utilities: in-memory module and row fixtures
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use record_access::entity::{app_versions, apps, roles, users};
use record_access::{Config, RecordAccessModule};

/// Install a test subscriber once; later calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("record_access=debug")
        .with_test_writer()
        .try_init();
}

/// Fresh in-memory SQLite database with all tables migrated
pub async fn memory_module() -> RecordAccessModule {
    init_tracing();
    RecordAccessModule::init(Config::in_memory())
        .await
        .expect("Failed to open in-memory record store")
}

/// Fixed, whole-second timestamps so round trips compare exactly
pub fn ts(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, 12, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

pub fn new_app(name: &str) -> apps::Model {
    apps::Model {
        id: 0,
        name: name.to_string(),
        description: Some(format!("{name} description")),
        owner_id: 42,
        is_active: true,
        created_at: ts(1),
        updated_at: ts(1),
    }
}

pub fn new_app_version(app_id: i64, version: &str) -> app_versions::Model {
    app_versions::Model {
        id: 0,
        app_id,
        version: version.to_string(),
        changelog: None,
        released_at: ts(2),
    }
}

pub fn new_user(username: &str) -> users::Model {
    users::Model {
        id: 0,
        username: username.to_string(),
        email: format!("{username}@example.com"),
        display_name: None,
        is_active: true,
        created_at: ts(3),
    }
}

pub fn new_role(name: &str) -> roles::Model {
    roles::Model {
        id: 0,
        name: name.to_string(),
        description: None,
    }
}
