use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "performances")]
pub struct Model {
    /// UUID string, assigned at creation.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub name: String,

    pub genre: String,

    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::stagings::Entity")]
    Stagings,
}

impl Related<super::stagings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stagings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
