use anyhow::{Context, Result};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, Set, sea_query::OnConflict};

use crate::entities::users;

pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Inserts the username unless it is already registered.
    /// Returns whether a new row was written.
    pub async fn register(&self, username: &str) -> Result<bool> {
        let active_model = users::ActiveModel {
            username: Set(username.to_string()),
            ..Default::default()
        };

        let inserted = users::Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(users::Column::Username)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.conn)
            .await
            .with_context(|| format!("Failed to register username '{username}'"))?;

        Ok(inserted > 0)
    }

    pub async fn list_usernames(&self) -> Result<Vec<String>> {
        let users = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list usernames")?;

        Ok(users.into_iter().map(|u| u.username).collect())
    }
}
