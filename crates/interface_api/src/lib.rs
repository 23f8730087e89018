//! HTTP API Layer
//!
//! This crate provides the REST API for duty drawback claims using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: create, list and search claims; health checks
//! - **Middleware**: request/response logging and the panic fallback
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use infra_store::FileClaimStore;
//! use interface_api::{create_router, config::ApiConfig};
//!
//! let config = ApiConfig::default();
//! let store = Arc::new(FileClaimStore::new(&config.data_file));
//! let app = create_router(store, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
    middleware as axum_middleware,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_claims::ClaimStore;

use crate::config::ApiConfig;
use crate::handlers::{claims, health};
use crate::middleware::{handle_panic, request_logging_middleware};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ClaimStore>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `store` - Claim storage adapter
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(store: Arc<dyn ClaimStore>, config: ApiConfig) -> Router {
    let body_limit = config.max_body_size;
    let state = AppState { store, config };

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let claims_routes = Router::new()
        .route("/api/claims", post(claims::create_claim).get(claims::list_claims))
        .route("/api/claims/search", get(claims::search_claims));

    // Panics are caught inside the logging middleware so the 500 is logged too
    Router::new()
        .merge(health_routes)
        .merge(claims_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(axum_middleware::from_fn_with_state(state.clone(), request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
