use anyhow::Result;
use sea_orm::sea_query::{Expr, IntoCondition};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType,
    Order, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};
use uuid::Uuid;

use crate::domain::{DateRange, Genre, RankingSize};
use crate::entities::{performances, reservations, stagings};

/// One row of the ranking result: a performance plus its count of
/// account-backed reservations inside the queried window.
#[derive(Debug, Clone, FromQueryResult)]
pub struct RankedPerformance {
    pub id: String,
    pub name: String,
    pub genre: String,
    pub reservation_count: i64,
}

pub struct PerformanceRepository {
    conn: DatabaseConnection,
}

impl PerformanceRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Top performances by confirmed-reservation count.
    ///
    /// Stagings are restricted to `[range.start, range.end)`;
    /// reservations without an account (placeholders) are excluded in
    /// the join condition so performances with none still appear with a
    /// zero count. Ties break on performance id ascending, which keeps
    /// the order deterministic across identical queries.
    pub async fn ranking(
        &self,
        genre: Option<Genre>,
        range: DateRange,
        size: RankingSize,
    ) -> Result<Vec<RankedPerformance>> {
        let mut query = performances::Entity::find()
            .select_only()
            .column(performances::Column::Id)
            .column(performances::Column::Name)
            .column(performances::Column::Genre)
            .column_as(reservations::Column::Id.count(), "reservation_count")
            .join(JoinType::InnerJoin, performances::Relation::Stagings.def())
            .join(
                JoinType::LeftJoin,
                stagings::Relation::Reservations
                    .def()
                    .on_condition(|_left, right| {
                        Expr::col((right, reservations::Column::AccountId))
                            .is_not_null()
                            .into_condition()
                    }),
            )
            .filter(stagings::Column::StartsAt.gte(range.start_rfc3339()))
            .filter(stagings::Column::StartsAt.lt(range.end_rfc3339()))
            .group_by(performances::Column::Id)
            .order_by(reservations::Column::Id.count(), Order::Desc)
            .order_by(performances::Column::Id, Order::Asc)
            .limit(size.get());

        if let Some(genre) = genre {
            query = query.filter(performances::Column::Genre.eq(genre.as_str()));
        }

        let rows = query
            .into_model::<RankedPerformance>()
            .all(&self.conn)
            .await?;

        Ok(rows)
    }

    pub async fn list(&self, genre: Option<Genre>) -> Result<Vec<performances::Model>> {
        let mut query = performances::Entity::find().order_by_asc(performances::Column::Name);

        if let Some(genre) = genre {
            query = query.filter(performances::Column::Genre.eq(genre.as_str()));
        }

        Ok(query.all(&self.conn).await?)
    }

    /// A performance and its stagings ordered by start time.
    pub async fn get_with_stagings(
        &self,
        id: &str,
    ) -> Result<Option<(performances::Model, Vec<stagings::Model>)>> {
        let Some(performance) = performances::Entity::find_by_id(id).one(&self.conn).await? else {
            return Ok(None);
        };

        let stagings = stagings::Entity::find()
            .filter(stagings::Column::PerformanceId.eq(id))
            .order_by_asc(stagings::Column::StartsAt)
            .all(&self.conn)
            .await?;

        Ok(Some((performance, stagings)))
    }

    pub async fn add_performance(&self, name: &str, genre: Genre) -> Result<performances::Model> {
        let active = performances::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(name.to_string()),
            genre: Set(genre.as_str().to_string()),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
        };

        Ok(active.insert(&self.conn).await?)
    }

    pub async fn add_staging(
        &self,
        performance_id: &str,
        starts_at: &str,
    ) -> Result<stagings::Model> {
        let active = stagings::ActiveModel {
            performance_id: Set(performance_id.to_string()),
            starts_at: Set(starts_at.to_string()),
            ..Default::default()
        };

        Ok(active.insert(&self.conn).await?)
    }

    pub async fn add_reservation(
        &self,
        staging_id: i64,
        account_id: Option<i32>,
    ) -> Result<reservations::Model> {
        let active = reservations::ActiveModel {
            staging_id: Set(staging_id),
            account_id: Set(account_id),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        Ok(active.insert(&self.conn).await?)
    }
}
