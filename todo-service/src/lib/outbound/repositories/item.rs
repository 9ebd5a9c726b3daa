use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use super::bounded;
use super::is_unavailable;
use crate::domain::item::errors::ItemError;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemId;
use crate::domain::item::models::ItemStatus;
use crate::domain::item::models::ItemTitle;
use crate::domain::item::ports::ItemRepository;
use crate::domain::user::models::EmailAddress;

pub struct PostgresItemRepository {
    pool: PgPool,
    query_timeout: Duration,
}

impl PostgresItemRepository {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }
}

#[derive(FromRow)]
struct ItemRow {
    id: Uuid,
    title: String,
    description: Option<String>,
    owner_email: String,
    status: String,
    created_at: DateTime<Utc>,
}

/// A stored row that no longer parses is a store fault, not a client error.
impl TryFrom<ItemRow> for Item {
    type Error = ItemError;

    fn try_from(row: ItemRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let corrupt = move |field: &str, e: &dyn std::fmt::Display| {
            ItemError::DatabaseError(format!("item {} has invalid {}: {}", id, field, e))
        };

        Ok(Item {
            id: ItemId(id),
            title: ItemTitle::new(row.title).map_err(|e| corrupt("title", &e))?,
            description: row.description,
            owner: EmailAddress::new(row.owner_email).map_err(|e| corrupt("owner_email", &e))?,
            status: row
                .status
                .parse::<ItemStatus>()
                .map_err(|e| corrupt("status", &e))?,
            created_at: row.created_at,
        })
    }
}

fn store_error(e: sqlx::Error) -> ItemError {
    if is_unavailable(&e) {
        ItemError::StoreUnavailable(e.to_string())
    } else {
        ItemError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl ItemRepository for PostgresItemRepository {
    async fn create(&self, item: Item) -> Result<Item, ItemError> {
        bounded(
            self.query_timeout,
            sqlx::query(
                r#"
                INSERT INTO items (id, title, description, owner_email, status, created_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(item.id.0)
            .bind(item.title.as_str())
            .bind(item.description.as_deref())
            .bind(item.owner.as_str())
            .bind(item.status.as_str())
            .bind(item.created_at)
            .execute(&self.pool),
        )
        .await
        .map_err(store_error)?;

        Ok(item)
    }

    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, ItemError> {
        let row = bounded(
            self.query_timeout,
            sqlx::query_as::<_, ItemRow>(
                r#"
                SELECT id, title, description, owner_email, status, created_at
                FROM items
                WHERE id = $1
                "#,
            )
            .bind(id.0)
            .fetch_optional(&self.pool),
        )
        .await
        .map_err(store_error)?;

        row.map(Item::try_from).transpose()
    }

    async fn list_by_owner(&self, owner: &EmailAddress) -> Result<Vec<Item>, ItemError> {
        let rows = bounded(
            self.query_timeout,
            sqlx::query_as::<_, ItemRow>(
                r#"
                SELECT id, title, description, owner_email, status, created_at
                FROM items
                WHERE owner_email = $1
                ORDER BY created_at ASC
                "#,
            )
            .bind(owner.as_str())
            .fetch_all(&self.pool),
        )
        .await
        .map_err(store_error)?;

        rows.into_iter().map(Item::try_from).collect()
    }

    async fn update_details(
        &self,
        id: &ItemId,
        owner: &EmailAddress,
        title: ItemTitle,
        description: Option<String>,
    ) -> Result<Item, ItemError> {
        let row = bounded(
            self.query_timeout,
            sqlx::query_as::<_, ItemRow>(
                r#"
                UPDATE items
                SET title = $3, description = $4
                WHERE id = $1 AND owner_email = $2
                RETURNING id, title, description, owner_email, status, created_at
                "#,
            )
            .bind(id.0)
            .bind(owner.as_str())
            .bind(title.as_str())
            .bind(description.as_deref())
            .fetch_optional(&self.pool),
        )
        .await
        .map_err(store_error)?;

        row.map(Item::try_from)
            .transpose()?
            .ok_or(ItemError::NotFound(*id))
    }

    async fn mark_completed(&self, id: &ItemId, owner: &EmailAddress) -> Result<Item, ItemError> {
        let row = bounded(
            self.query_timeout,
            sqlx::query_as::<_, ItemRow>(
                r#"
                UPDATE items
                SET status = 'completed'
                WHERE id = $1 AND owner_email = $2
                RETURNING id, title, description, owner_email, status, created_at
                "#,
            )
            .bind(id.0)
            .bind(owner.as_str())
            .fetch_optional(&self.pool),
        )
        .await
        .map_err(store_error)?;

        row.map(Item::try_from)
            .transpose()?
            .ok_or(ItemError::NotFound(*id))
    }

    async fn delete(&self, id: &ItemId, owner: &EmailAddress) -> Result<(), ItemError> {
        let result = bounded(
            self.query_timeout,
            sqlx::query(
                r#"
                DELETE FROM items
                WHERE id = $1 AND owner_email = $2
                "#,
            )
            .bind(id.0)
            .bind(owner.as_str())
            .execute(&self.pool),
        )
        .await
        .map_err(store_error)?;

        if result.rows_affected() == 0 {
            return Err(ItemError::NotFound(*id));
        }

        Ok(())
    }
}
