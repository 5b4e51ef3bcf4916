use sea_orm::entity::prelude::*;

/// API keys issued to an application
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "api_keys")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Foreign key to apps
    pub app_id: i64,

    /// Key material handed to clients
    #[sea_orm(unique)]
    pub key: Uuid,

    pub label: String,

    /// Expiry; `None` never expires
    pub expires_at: Option<DateTimeUtc>,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::apps::Entity",
        from = "Column::AppId",
        to = "super::apps::Column::Id"
    )]
    App,
}

impl Related<super::apps::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::App.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

bind_record!(Model, i64, "api_keys");
