use sea_orm::entity::prelude::*;

/// A reservation against a staging. Placeholder (pre-sale hold)
/// reservations carry no account and are excluded from ranking counts.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub staging_id: i64,

    pub account_id: Option<i32>,

    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::stagings::Entity",
        from = "Column::StagingId",
        to = "super::stagings::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Stagings,

    #[sea_orm(
        belongs_to = "super::accounts::Entity",
        from = "Column::AccountId",
        to = "super::accounts::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Accounts,
}

impl Related<super::stagings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stagings.def()
    }
}

impl Related<super::accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accounts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
