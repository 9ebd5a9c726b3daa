use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::item::errors::ItemError;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemId;
use crate::domain::user::models::User;
use crate::user::errors::PasswordError;
use crate::user::errors::UserError;

pub mod add_item;
pub mod delete_item;
pub mod get_items;
pub mod get_profile;
pub mod health;
pub mod login;
pub mod signup;
pub mod update_item;
pub mod update_profile;
pub mod update_status;

/// JSON body extractor whose rejections use the API error shape.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

#[derive(Debug, Clone)]
pub struct ApiSuccess(StatusCode, Json<ApiResponseBody>);

impl ApiSuccess {
    pub fn new(status: StatusCode, body: ApiResponseBody) -> Self {
        ApiSuccess(status, Json(body))
    }
}

impl IntoResponse for ApiSuccess {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    ServiceUnavailable(String),
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::ServiceUnavailable(detail) => {
                tracing::error!(error = %detail, "Store unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Service temporarily unavailable, please retry".to_string(),
                )
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
        };

        (status, Json(ApiResponseBody::rejected(message))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidEmail(_) | UserError::Password(PasswordError::Empty) => {
                ApiError::BadRequest(err.to_string())
            }
            UserError::NotFound(_) => ApiError::NotFound(err.to_string()),
            UserError::EmailAlreadyExists(_) => ApiError::Conflict("User already exists".to_string()),
            UserError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            UserError::Forbidden(_) => ApiError::Forbidden(err.to_string()),
            UserError::StoreUnavailable(_) => ApiError::ServiceUnavailable(err.to_string()),
            UserError::Password(PasswordError::HashingFailed(_))
            | UserError::Token(_)
            | UserError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<ItemError> for ApiError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::InvalidItemId(_) | ItemError::InvalidTitle(_) => {
                ApiError::BadRequest(err.to_string())
            }
            ItemError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ItemError::Forbidden(_) => ApiError::Forbidden(err.to_string()),
            ItemError::StoreUnavailable(_) => ApiError::ServiceUnavailable(err.to_string()),
            ItemError::InvalidStatus(_) | ItemError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

/// Response envelope shared by every endpoint.
///
/// `auth` tells clients whether the request was accepted; the remaining
/// fields are present only when the endpoint produces them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody {
    auth: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    users: Option<Vec<UserData>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    item: Option<ItemData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    itemslist: Option<Vec<ItemData>>,
}

impl ApiResponseBody {
    pub fn accepted() -> Self {
        Self {
            auth: true,
            ..Self::default()
        }
    }

    pub fn rejected(message: String) -> Self {
        Self {
            auth: false,
            message: Some(message),
            ..Self::default()
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(token);
        self
    }

    pub fn with_user(mut self, user: &User) -> Self {
        self.users = Some(vec![user.into()]);
        self
    }

    pub fn with_item(mut self, item: &Item) -> Self {
        self.item = Some(item.into());
        self
    }

    pub fn with_items(mut self, items: &[Item]) -> Self {
        self.itemslist = Some(items.iter().map(ItemData::from).collect());
        self
    }
}

/// Public profile of a user. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub country: String,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            first_name: user.profile.first_name.clone(),
            last_name: user.profile.last_name.clone(),
            email: user.email.as_str().to_string(),
            country: user.profile.country.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemData {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub email: String,
    pub status: String,
}

impl From<&Item> for ItemData {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.to_string(),
            title: item.title.as_str().to_string(),
            description: item.description.clone(),
            email: item.owner.as_str().to_string(),
            status: item.status.as_str().to_string(),
        }
    }
}

/// Body of the item endpoints that only address an item by id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemIdRequest {
    itemid: String,
}

impl ItemIdRequest {
    pub fn item_id(&self) -> Result<ItemId, ItemError> {
        Ok(ItemId::from_string(&self.itemid)?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::item::models::ItemStatus;
    use crate::domain::item::models::ItemTitle;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::Profile;

    #[test]
    fn test_user_error_status_mapping() {
        let cases = [
            (
                UserError::EmailAlreadyExists("a@x.com".to_string()),
                StatusCode::CONFLICT,
            ),
            (UserError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (
                UserError::Forbidden("b@x.com".to_string()),
                StatusCode::FORBIDDEN,
            ),
            (
                UserError::NotFound("a@x.com".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                UserError::Password(PasswordError::Empty),
                StatusCode::BAD_REQUEST,
            ),
            (
                UserError::DatabaseError("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                UserError::StoreUnavailable("timeout".to_string()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
        ];

        for (error, expected) in cases {
            let response = ApiError::from(error).into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn test_item_error_status_mapping() {
        let id = ItemId::new();
        let cases = [
            (ItemError::NotFound(id), StatusCode::NOT_FOUND),
            (ItemError::Forbidden(id), StatusCode::FORBIDDEN),
            (
                ItemError::InvalidTitle(crate::domain::item::errors::ItemTitleError::Empty),
                StatusCode::BAD_REQUEST,
            ),
            (
                ItemError::StoreUnavailable("timeout".to_string()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                ItemError::DatabaseError("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            let response = ApiError::from(error).into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn test_internal_error_detail_is_not_exposed() {
        let body = serde_json::to_value(ApiResponseBody::rejected(
            "Internal server error".to_string(),
        ))
        .unwrap();
        assert_eq!(body["auth"], false);
        assert_eq!(body["message"], "Internal server error");
        assert!(body.get("token").is_none());
        assert!(body.get("itemslist").is_none());
    }

    #[test]
    fn test_user_data_has_no_password_hash() {
        let user = User {
            email: EmailAddress::new("a@x.com".to_string()).unwrap(),
            profile: Profile {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                country: "UK".to_string(),
            },
            password_hash: "$argon2id$v=19$secret-hash".to_string(),
            created_at: Utc::now(),
        };

        let body = serde_json::to_value(ApiResponseBody::accepted().with_user(&user)).unwrap();
        let rendered = body.to_string();

        assert_eq!(body["users"][0]["firstName"], "Ada");
        assert_eq!(body["users"][0]["email"], "a@x.com");
        assert!(!rendered.contains("argon2"));
        assert!(!rendered.to_lowercase().contains("password"));
    }

    #[test]
    fn test_item_id_request_rejects_non_uuid() {
        let body: ItemIdRequest =
            serde_json::from_value(serde_json::json!({ "itemid": "64b7f0c2e1" })).unwrap();
        let err = body.item_id().unwrap_err();
        assert!(matches!(err, ItemError::InvalidItemId(_)));
        assert_eq!(
            ApiError::from(err).into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_item_data_wire_names() {
        let item = Item {
            id: ItemId::new(),
            title: ItemTitle::new("buy milk".to_string()).unwrap(),
            description: None,
            owner: EmailAddress::new("a@x.com".to_string()).unwrap(),
            status: ItemStatus::Incomplete,
            created_at: Utc::now(),
        };

        let body = serde_json::to_value(ApiResponseBody::accepted().with_items(&[item.clone()]))
            .unwrap();

        assert_eq!(body["auth"], true);
        assert_eq!(body["itemslist"][0]["_id"], item.id.to_string());
        assert_eq!(body["itemslist"][0]["email"], "a@x.com");
        assert_eq!(body["itemslist"][0]["status"], "incomplete");
    }
}
