use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::item::errors::ItemIdError;
use crate::domain::item::errors::ItemStatusError;
use crate::domain::item::errors::ItemTitleError;
use crate::domain::user::models::EmailAddress;

/// Item unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(pub Uuid);

impl ItemId {
    /// Generate a new random item ID.
    ///
    /// # Returns
    /// ItemId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an item ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ItemIdError> {
        Uuid::parse_str(s)
            .map(ItemId)
            .map_err(|e| ItemIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Item aggregate.
///
/// Every item has exactly one owner; it is only ever read or written
/// through operations scoped to that owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub title: ItemTitle,
    pub description: Option<String>,
    pub owner: EmailAddress,
    pub status: ItemStatus,
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Check whether `email` owns this item.
    pub fn is_owned_by(&self, email: &EmailAddress) -> bool {
        &self.owner == email
    }
}

/// Item title value object with validation.
///
/// Ensures the title is non-blank and within 200 character limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTitle(String);

impl ItemTitle {
    pub const MAX_LENGTH: usize = 200;

    /// Create a new validated item title.
    ///
    /// # Errors
    /// * `Empty` - Title is empty or only whitespace
    /// * `TooLong` - Title exceeds 200 characters
    pub fn new(title: String) -> Result<Self, ItemTitleError> {
        let length = title.chars().count();
        if title.trim().is_empty() {
            Err(ItemTitleError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(ItemTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(title))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Completion state of an item.
///
/// Transitions only from `Incomplete` to `Completed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ItemStatus {
    #[default]
    Incomplete,
    Completed,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Incomplete => "incomplete",
            ItemStatus::Completed => "completed",
        }
    }
}

impl FromStr for ItemStatus {
    type Err = ItemStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "incomplete" => Ok(ItemStatus::Incomplete),
            "completed" => Ok(ItemStatus::Completed),
            other => Err(ItemStatusError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command to create an item for the caller.
#[derive(Debug)]
pub struct AddItemCommand {
    pub title: ItemTitle,
    pub description: Option<String>,
}

/// Command to overwrite title and description of an item.
#[derive(Debug)]
pub struct UpdateItemCommand {
    pub id: ItemId,
    pub title: ItemTitle,
    pub description: Option<String>,
}
