use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::item::errors::ItemError;
use crate::domain::item::models::AddItemCommand;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemId;
use crate::domain::item::models::ItemStatus;
use crate::domain::item::models::UpdateItemCommand;
use crate::domain::item::ports::ItemRepository;
use crate::domain::item::ports::ItemServicePort;
use crate::domain::user::models::EmailAddress;

/// Domain service implementation for item operations.
pub struct ItemService<IR>
where
    IR: ItemRepository,
{
    repository: Arc<IR>,
}

impl<IR> ItemService<IR>
where
    IR: ItemRepository,
{
    pub fn new(repository: Arc<IR>) -> Self {
        Self { repository }
    }

    /// Load an item and enforce that `owner` owns it.
    async fn owned_item(&self, owner: &EmailAddress, id: ItemId) -> Result<Item, ItemError> {
        let item = self
            .repository
            .find_by_id(&id)
            .await?
            .ok_or(ItemError::NotFound(id))?;

        if !item.is_owned_by(owner) {
            tracing::warn!(item_id = %id, caller = %owner, "Cross-owner item access rejected");
            return Err(ItemError::Forbidden(id));
        }

        Ok(item)
    }
}

#[async_trait]
impl<IR> ItemServicePort for ItemService<IR>
where
    IR: ItemRepository,
{
    async fn add_item(
        &self,
        owner: &EmailAddress,
        command: AddItemCommand,
    ) -> Result<(Item, Vec<Item>), ItemError> {
        let item = Item {
            id: ItemId::new(),
            title: command.title,
            description: command.description,
            owner: owner.clone(),
            status: ItemStatus::Incomplete,
            created_at: Utc::now(),
        };

        let created = self.repository.create(item).await?;
        tracing::info!(item_id = %created.id, owner = %owner, "Item added");

        let items = self.repository.list_by_owner(owner).await?;

        Ok((created, items))
    }

    async fn list_items(&self, owner: &EmailAddress) -> Result<Vec<Item>, ItemError> {
        self.repository.list_by_owner(owner).await
    }

    async fn update_item(
        &self,
        owner: &EmailAddress,
        command: UpdateItemCommand,
    ) -> Result<Item, ItemError> {
        self.owned_item(owner, command.id).await?;

        let updated = self
            .repository
            .update_details(&command.id, owner, command.title, command.description)
            .await?;
        tracing::info!(item_id = %updated.id, owner = %owner, "Item updated");

        Ok(updated)
    }

    async fn complete_item(&self, owner: &EmailAddress, id: ItemId) -> Result<Item, ItemError> {
        let item = self.owned_item(owner, id).await?;

        if item.status == ItemStatus::Completed {
            return Ok(item);
        }

        let updated = self.repository.mark_completed(&id, owner).await?;
        tracing::info!(item_id = %updated.id, owner = %owner, "Item completed");

        Ok(updated)
    }

    async fn delete_item(&self, owner: &EmailAddress, id: ItemId) -> Result<(), ItemError> {
        self.owned_item(owner, id).await?;

        self.repository.delete(&id, owner).await?;
        tracing::info!(item_id = %id, owner = %owner, "Item deleted");

        Ok(())
    }
}
