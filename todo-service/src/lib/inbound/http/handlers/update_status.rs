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

/// Mark one of the caller's items as completed.
pub async fn update_status(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    ApiJson(body): ApiJson<ItemIdRequest>,
) -> Result<ApiSuccess, ApiError> {
    let item = state
        .item_service
        .complete_item(&caller.email, body.item_id()?)
        .await?;
    let items = state.item_service.list_items(&caller.email).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ApiResponseBody::accepted()
            .with_message("Item status updated successfully")
            .with_item(&item)
            .with_items(&items),
    ))
}
