/// API route modules
pub mod health;
pub mod info;
pub mod users;

use crate::{error::error_envelope, state::AppState};
use axum::{
    http::StatusCode,
    response::Response,
    routing::get,
    Router,
};
use std::any::Any;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the full application router
pub fn create_router(app_state: AppState) -> Router {
    with_layers(routes()).with_state(app_state)
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(info::service_info).fallback(users::endpoint_not_found))
        .route("/health", get(health::health).fallback(users::endpoint_not_found))
        .route(
            "/api/users",
            get(users::list_users)
                .post(users::create_user)
                .fallback(users::endpoint_not_found),
        )
        .route(
            "/api/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user)
                .fallback(users::endpoint_not_found),
        )
        .fallback(users::endpoint_not_found)
}

/// Panic capture, tracing and CORS, applied to every route in `router`
pub fn with_layers(router: Router<AppState>) -> Router<AppState> {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive())
}

/// Render a handler panic as the generic 500 envelope without leaking the message
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!("Internal server error: handler panicked: {}", detail);

    error_envelope(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}
