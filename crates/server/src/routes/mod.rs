pub mod advise;
pub mod health;

use std::any::Any;
use std::sync::Arc;

use axum::{
    extract::Request,
    response::{IntoResponse, Response},
    routing::{get, post},
    Extension, Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::{DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

use crate::advisor::MoveAdvisor;
use crate::error::AppError;

/// Build the router around a shared advisor.
pub fn router(advisor: Arc<MoveAdvisor>) -> Router {
    // The client is a user script running on another site.
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    Router::new()
        .route("/", post(advise::advise))
        .route("/health", get(health::health_check))
        .layer(Extension(advisor))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(make_request_span)
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
        .layer(cors)
}

/// Request span at `info` so failures logged inside a handler carry the
/// method, URI and, once the body is parsed, the number of moves.
fn make_request_span(request: &Request) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        moves = tracing::field::Empty,
    )
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    AppError::Internal(message).into_response()
}
