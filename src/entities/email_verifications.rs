use sea_orm::entity::prelude::*;

/// Keyed, TTL-bound record tracking email-ownership proof during signup.
///
/// `value` holds either a pending numeric code or the `"access"` sentinel
/// once the code has been confirmed. Rows past `expires_at` are treated
/// as absent.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "email_verifications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub email: String,

    pub value: String,

    pub expires_at: String,

    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
