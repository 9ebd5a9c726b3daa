use std::sync::Arc;

use auth::Authenticator;
use auth::JwtError;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use super::handlers::ApiError;
use crate::domain::user::models::EmailAddress;

/// Identity resolved from a valid session token, stored in request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub email: EmailAddress,
}

/// Why a request was turned away at the gate.
///
/// Logged by kind only; neither the token nor its claims are ever recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    MissingHeader,
    MalformedHeader,
    ExpiredToken,
    InvalidToken,
    InvalidSubject,
}

impl From<Rejection> for ApiError {
    fn from(rejection: Rejection) -> Self {
        let message = match rejection {
            Rejection::MissingHeader => "Missing Authorization header",
            Rejection::MalformedHeader => {
                "Invalid Authorization header format. Expected: Bearer <token>"
            }
            Rejection::ExpiredToken => "Session expired, please log in again",
            Rejection::InvalidToken | Rejection::InvalidSubject => "You failed to authenticate",
        };
        ApiError::Unauthorized(message.to_string())
    }
}

/// Middleware that validates the bearer token and attaches the caller identity.
pub async fn authenticate(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let caller = resolve_caller(req.headers(), &authenticator).map_err(|rejection| {
        tracing::warn!(reason = ?rejection, path = %req.uri().path(), "Request rejected by auth gateway");
        ApiError::from(rejection)
    })?;

    req.extensions_mut().insert(caller);

    Ok(next.run(req).await)
}

/// Resolve the caller from request headers without touching any store.
pub fn resolve_caller(
    headers: &HeaderMap,
    authenticator: &Authenticator,
) -> Result<AuthenticatedUser, Rejection> {
    let token = extract_bearer_token(headers)?;

    let claims = authenticator.validate_token(token).map_err(|e| match e {
        JwtError::TokenExpired => Rejection::ExpiredToken,
        _ => Rejection::InvalidToken,
    })?;

    let email = EmailAddress::new(claims.sub).map_err(|_| Rejection::InvalidSubject)?;

    Ok(AuthenticatedUser { email })
}

fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, Rejection> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(Rejection::MissingHeader)?
        .to_str()
        .map_err(|_| Rejection::MalformedHeader)?;

    let token = value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .ok_or(Rejection::MalformedHeader)?;

    if token.is_empty() {
        return Err(Rejection::MalformedHeader);
    }

    Ok(token)
}
