use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use super::ApiError;
use super::ApiJson;
use super::ApiResponseBody;
use super::ApiSuccess;
use crate::domain::item::errors::ItemError;
use crate::domain::item::models::ItemId;
use crate::domain::item::models::ItemTitle;
use crate::domain::item::models::UpdateItemCommand;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn update_item(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    ApiJson(body): ApiJson<UpdateItemRequest>,
) -> Result<ApiSuccess, ApiError> {
    let item = state
        .item_service
        .update_item(&caller.email, body.try_into_command()?)
        .await?;
    let items = state.item_service.list_items(&caller.email).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ApiResponseBody::accepted()
            .with_message("Item updated successfully")
            .with_item(&item)
            .with_items(&items),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateItemRequest {
    itemid: String,
    title: String,
    description: Option<String>,
}

impl UpdateItemRequest {
    fn try_into_command(self) -> Result<UpdateItemCommand, ItemError> {
        Ok(UpdateItemCommand {
            id: ItemId::from_string(&self.itemid)?,
            title: ItemTitle::new(self.title)?,
            description: self.description,
        })
    }
}
