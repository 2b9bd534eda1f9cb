use axum::{
    routing::{get, post},
    Router,
};
use shared::api::{error::ServerError, Object};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::AppState;

mod extract;
pub use extract::*;

mod user;
pub use user::*;

mod exercise;
pub use exercise::*;

/// Anything without a route, including known paths hit with the wrong method
pub async fn not_found() -> ServerError {
    ServerError::RouteNotFound
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(Object::NewUser.path(), post(new_user).fallback(not_found))
        .route(Object::Users.path(), get(users).fallback(not_found))
        .route(Object::AddExercise.path(), post(add_exercise).fallback(not_found))
        .route(Object::Log.path(), get(exercise_log).fallback(not_found))
        .fallback(not_found)
}

/// The full service with CORS and request tracing
pub fn app(state: AppState) -> Router {
    router()
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
