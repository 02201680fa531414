use sea_orm::entity::prelude::*;

/// A single scheduled date/time occurrence of a performance.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "stagings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub performance_id: String,

    /// RFC 3339 UTC timestamp.
    pub starts_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::performances::Entity",
        from = "Column::PerformanceId",
        to = "super::performances::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Performances,

    #[sea_orm(has_many = "super::reservations::Entity")]
    Reservations,
}

impl Related<super::performances::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Performances.def()
    }
}

impl Related<super::reservations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
