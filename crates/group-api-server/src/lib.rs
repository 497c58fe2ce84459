pub mod config;
pub mod handlers;
pub mod models;
pub mod store;
pub mod utils;

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::store::GroupStore;

/// Build the application router around a store handle.
///
/// The store is injected rather than global, so tests can drive the real
/// router against a fresh store.
pub fn router(store: Arc<GroupStore>) -> Router {
    let health_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/ready", get(handlers::health::readiness_check));

    let api_routes = Router::new()
        .route(
            "/api/groups",
            get(handlers::groups::list_groups_handler).post(handlers::groups::create_group_handler),
        )
        .route(
            "/api/groups/{id}",
            get(handlers::groups::get_group_handler)
                .delete(handlers::groups::delete_group_handler),
        )
        .route(
            "/api/students",
            get(handlers::students::list_students_handler),
        );

    // Combine routes
    Router::new()
        .merge(health_routes)
        .merge(api_routes)
        // Shared state
        .layer(Extension(store))
        // CORS
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        // Tracing
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        // A panicking handler answers 500; it must not take the process down
        .layer(CatchPanicLayer::new())
}
