use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::add_item::add_item;
use super::handlers::delete_item::delete_item;
use super::handlers::get_items::get_items;
use super::handlers::get_profile::get_profile;
use super::handlers::health::health;
use super::handlers::login::login;
use super::handlers::signup::signup;
use super::handlers::update_item::update_item;
use super::handlers::update_profile::update_profile;
use super::handlers::update_status::update_status;
use super::middleware::authenticate as auth_middleware;
use crate::domain::item::ports::ItemServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub item_service: Arc<dyn ItemServicePort>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    item_service: Arc<dyn ItemServicePort>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        user_service,
        item_service,
    };

    let public_routes = Router::new()
        .route("/", get(health))
        .route("/signup", post(signup))
        .route("/login", post(login));

    let protected_routes = Router::new()
        .route("/profile", get(get_profile))
        .route("/updateprofile", post(update_profile))
        .route("/additem", post(add_item))
        .route("/getitems", get(get_items))
        .route("/updateitem", post(update_item))
        .route("/updatestatus", post(update_status))
        .route("/deleteitem", post(delete_item))
        .route_layer(middleware::from_fn_with_state(
            authenticator,
            auth_middleware,
        ));

    // Headers are left out of the span: they carry bearer tokens
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                path = %request.uri().path(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
