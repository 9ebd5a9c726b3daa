use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use super::ApiError;
use super::ApiJson;
use super::ApiResponseBody;
use super::ApiSuccess;
use crate::domain::item::errors::ItemError;
use crate::domain::item::models::AddItemCommand;
use crate::domain::item::models::ItemTitle;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn add_item(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    ApiJson(body): ApiJson<AddItemRequest>,
) -> Result<ApiSuccess, ApiError> {
    let (item, items) = state
        .item_service
        .add_item(&caller.email, body.try_into_command()?)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        ApiResponseBody::accepted()
            .with_message("Item added successfully")
            .with_item(&item)
            .with_items(&items),
    ))
}

/// HTTP request body for adding an item.
///
/// An `email` field, if sent, is ignored; the owner comes from the token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddItemRequest {
    title: String,
    description: Option<String>,
}

impl AddItemRequest {
    fn try_into_command(self) -> Result<AddItemCommand, ItemError> {
        Ok(AddItemCommand {
            title: ItemTitle::new(self.title)?,
            description: self.description,
        })
    }
}
