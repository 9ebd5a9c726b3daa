use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiResponseBody;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// List the caller's items. Any `?email=` in the query is not consulted.
pub async fn get_items(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess, ApiError> {
    let items = state.item_service.list_items(&caller.email).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ApiResponseBody::accepted().with_items(&items),
    ))
}
