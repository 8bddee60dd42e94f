use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use sentio_core::render::nav::{ACCOUNT_PATH, BROWSE_PATH, CART_PATH, HOME_PATH, SOMMELIER_PATH};

use super::{discuss, handlers, middleware::metrics_middleware, pages};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // API routes
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Discuss hook
        .route("/wines/{id}/discuss", post(discuss::discuss_wine));

    Router::new()
        // Pages
        .route(HOME_PATH, get(pages::home))
        .route(BROWSE_PATH, get(pages::browse_wines))
        .route("/browse-wines/{view}/reload", post(pages::reload_view))
        .route(SOMMELIER_PATH, get(pages::placeholder))
        .route(CART_PATH, get(pages::placeholder))
        .route(ACCOUNT_PATH, get(pages::placeholder))
        // Metrics
        .route("/metrics", get(handlers::metrics))
        .nest("/api/v1", api_routes)
        .fallback(pages::fallback)
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
