use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::models::AddItemCommand;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemId;
use crate::domain::item::models::ItemTitle;
use crate::domain::item::models::UpdateItemCommand;
use crate::domain::user::models::EmailAddress;

/// Port for ownership-scoped item operations.
///
/// `owner` is always the identity resolved from the caller's session
/// token, never a value taken from the request.
#[async_trait]
pub trait ItemServicePort: Send + Sync + 'static {
    /// Create a new item owned by `owner`.
    ///
    /// # Returns
    /// Created item and the owner's full item list
    ///
    /// # Errors
    /// * `DatabaseError` / `StoreUnavailable` - Store operation failed
    async fn add_item(
        &self,
        owner: &EmailAddress,
        command: AddItemCommand,
    ) -> Result<(Item, Vec<Item>), ItemError>;

    /// List every item owned by `owner`.
    ///
    /// # Errors
    /// * `DatabaseError` / `StoreUnavailable` - Store operation failed
    async fn list_items(&self, owner: &EmailAddress) -> Result<Vec<Item>, ItemError>;

    /// Overwrite title and description of one of `owner`'s items.
    ///
    /// # Errors
    /// * `NotFound` - Item does not exist
    /// * `Forbidden` - Item belongs to someone else
    /// * `DatabaseError` / `StoreUnavailable` - Store operation failed
    async fn update_item(
        &self,
        owner: &EmailAddress,
        command: UpdateItemCommand,
    ) -> Result<Item, ItemError>;

    /// Mark one of `owner`'s items as completed.
    ///
    /// Completing an already completed item succeeds without a write.
    ///
    /// # Errors
    /// * `NotFound` - Item does not exist
    /// * `Forbidden` - Item belongs to someone else
    /// * `DatabaseError` / `StoreUnavailable` - Store operation failed
    async fn complete_item(&self, owner: &EmailAddress, id: ItemId) -> Result<Item, ItemError>;

    /// Delete one of `owner`'s items.
    ///
    /// # Errors
    /// * `NotFound` - Item does not exist
    /// * `Forbidden` - Item belongs to someone else
    /// * `DatabaseError` / `StoreUnavailable` - Store operation failed
    async fn delete_item(&self, owner: &EmailAddress, id: ItemId) -> Result<(), ItemError>;
}

/// Persistence operations for item aggregate (item store).
///
/// Writes are addressed by `(id, owner)`, so each is a single-record
/// atomic operation that cannot touch another owner's data.
#[async_trait]
pub trait ItemRepository: Send + Sync + 'static {
    /// Persist new item to storage.
    ///
    /// # Errors
    /// * `DatabaseError` / `StoreUnavailable` - Store operation failed
    async fn create(&self, item: Item) -> Result<Item, ItemError>;

    /// Retrieve item by identifier, regardless of owner.
    ///
    /// # Returns
    /// Optional item (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` / `StoreUnavailable` - Store operation failed
    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, ItemError>;

    /// Retrieve all items of an owner, oldest first.
    ///
    /// # Errors
    /// * `DatabaseError` / `StoreUnavailable` - Store operation failed
    async fn list_by_owner(&self, owner: &EmailAddress) -> Result<Vec<Item>, ItemError>;

    /// Overwrite title and description of an item. Status is left alone.
    ///
    /// # Returns
    /// Item as stored after the write
    ///
    /// # Errors
    /// * `NotFound` - No item with this id and owner
    /// * `DatabaseError` / `StoreUnavailable` - Store operation failed
    async fn update_details(
        &self,
        id: &ItemId,
        owner: &EmailAddress,
        title: ItemTitle,
        description: Option<String>,
    ) -> Result<Item, ItemError>;

    /// Set the status of an item to completed. Other fields are left alone.
    ///
    /// # Returns
    /// Item as stored after the write
    ///
    /// # Errors
    /// * `NotFound` - No item with this id and owner
    /// * `DatabaseError` / `StoreUnavailable` - Store operation failed
    async fn mark_completed(&self, id: &ItemId, owner: &EmailAddress) -> Result<Item, ItemError>;

    /// Remove an item.
    ///
    /// # Errors
    /// * `NotFound` - No item with this id and owner
    /// * `DatabaseError` / `StoreUnavailable` - Store operation failed
    async fn delete(&self, id: &ItemId, owner: &EmailAddress) -> Result<(), ItemError>;
}
