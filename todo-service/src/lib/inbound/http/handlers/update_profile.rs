use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use super::ApiError;
use super::ApiJson;
use super::ApiResponseBody;
use super::ApiSuccess;
use crate::domain::user::models::UpdateProfileCommand;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// Update the caller's own profile.
///
/// The target is always the token subject. A body `email` naming anybody
/// else is refused rather than silently redirected.
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    ApiJson(body): ApiJson<UpdateProfileRequest>,
) -> Result<ApiSuccess, ApiError> {
    if let Some(email) = body.email.as_deref() {
        if email != caller.email.as_str() {
            tracing::warn!(caller = %caller.email, requested = %email, "Cross-user profile update refused");
            return Err(UserError::Forbidden(email.to_string()).into());
        }
    }

    let user = state
        .user_service
        .update_profile(&caller.email, body.into_command())
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ApiResponseBody::accepted()
            .with_message("Profile updated successfully")
            .with_user(&user),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    first_name: Option<String>,
    last_name: Option<String>,
    country: Option<String>,
    email: Option<String>,
}

impl UpdateProfileRequest {
    fn into_command(self) -> UpdateProfileCommand {
        UpdateProfileCommand {
            first_name: self.first_name,
            last_name: self.last_name,
            country: self.country,
        }
    }
}
