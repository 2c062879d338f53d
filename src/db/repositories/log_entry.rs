use crate::entities::{log_entries, prelude::*};
use crate::models::LogEntryFields;
use anyhow::Result;
use chrono::SecondsFormat;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, sea_query::Expr,
};

/// Fixed-width UTC timestamp so that string order matches time order.
#[must_use]
fn timestamp_now() -> String {
    chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub struct LogEntryRepository {
    conn: DatabaseConnection,
}

impl LogEntryRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list_active(&self, offset: u64, limit: u64) -> Result<Vec<log_entries::Model>> {
        let rows = LogEntries::find()
            .filter(log_entries::Column::Active.eq(true))
            .order_by_desc(log_entries::Column::UpdatedAt)
            .order_by_desc(log_entries::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.conn)
            .await?;

        Ok(rows)
    }

    pub async fn count_active(&self) -> Result<u64> {
        let total = LogEntries::find()
            .filter(log_entries::Column::Active.eq(true))
            .count(&self.conn)
            .await?;

        Ok(total)
    }

    /// Counts every row, soft-deleted ones included.
    pub async fn count_all(&self) -> Result<u64> {
        Ok(LogEntries::find().count(&self.conn).await?)
    }

    pub async fn get(&self, id: i64) -> Result<Option<log_entries::Model>> {
        Ok(LogEntries::find_by_id(id).one(&self.conn).await?)
    }

    pub async fn insert(&self, fields: &LogEntryFields) -> Result<i64> {
        let now = timestamp_now();

        let active_model = log_entries::ActiveModel {
            name: Set(fields.name.clone()),
            description: Set(fields.description.clone()),
            date: Set(fields.date.clone()),
            location: Set(fields.location.clone()),
            active: Set(true),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = LogEntries::insert(active_model).exec(&self.conn).await?;
        Ok(result.last_insert_id)
    }

    /// Overwrites the editable fields and bumps `updated_at`. Returns rows changed.
    pub async fn update(&self, id: i64, fields: &LogEntryFields) -> Result<u64> {
        let result = LogEntries::update_many()
            .col_expr(log_entries::Column::Name, Expr::value(fields.name.clone()))
            .col_expr(
                log_entries::Column::Description,
                Expr::value(fields.description.clone()),
            )
            .col_expr(log_entries::Column::Date, Expr::value(fields.date.clone()))
            .col_expr(
                log_entries::Column::Location,
                Expr::value(fields.location.clone()),
            )
            .col_expr(log_entries::Column::UpdatedAt, Expr::value(timestamp_now()))
            .filter(log_entries::Column::Id.eq(id))
            .exec(&self.conn)
            .await?;

        Ok(result.rows_affected)
    }

    /// Flips `active` off. The row and its timestamps are left in place.
    pub async fn deactivate(&self, id: i64) -> Result<u64> {
        let result = LogEntries::update_many()
            .col_expr(log_entries::Column::Active, Expr::value(false))
            .filter(log_entries::Column::Id.eq(id))
            .exec(&self.conn)
            .await?;

        Ok(result.rows_affected)
    }
}
