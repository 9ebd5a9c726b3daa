use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiJson;
use super::ApiResponseBody;
use super::ApiSuccess;
use super::ItemIdRequest;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_item(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    ApiJson(body): ApiJson<ItemIdRequest>,
) -> Result<ApiSuccess, ApiError> {
    state
        .item_service
        .delete_item(&caller.email, body.item_id()?)
        .await?;
    let items = state.item_service.list_items(&caller.email).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ApiResponseBody::accepted()
            .with_message("Item deleted successfully")
            .with_items(&items),
    ))
}
