use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ApiError;
use super::ApiJson;
use super::ApiResponseBody;
use super::ApiSuccess;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginCommand;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// Exchange credentials for a session token.
///
/// A malformed email is answered exactly like an unknown one.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> Result<ApiSuccess, ApiError> {
    let email = EmailAddress::new(body.email)
        .map_err(|_| ApiError::from(UserError::InvalidCredentials))?;

    let session = state
        .user_service
        .login(LoginCommand {
            email,
            password: body.password,
        })
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ApiResponseBody::accepted()
            .with_token(session.token)
            .with_user(&session.user),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}
