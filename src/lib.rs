pub mod api;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod middleware;
pub mod services;
pub mod utils;

use std::sync::Arc;

use axum::{Router, http::HeaderValue};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::Config,
    infrastructure::db::Database,
    services::{CredentialVerifier, TokenGenerator},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Arc<Database>,
    pub tokens: Arc<dyn TokenGenerator>,
    pub credentials: Arc<dyn CredentialVerifier>,
}

pub fn build_router(state: AppState) -> Router {
    let allowed_origins: Vec<HeaderValue> = state
        .config
        .server
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let allow_origin = if allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(allowed_origins)
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any);

    api::router()
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::logging::make_log_span)
                .on_request(())
                .on_eos(()),
        )
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(ConcurrencyLimitLayer::new(
            state.config.server.max_concurrent_requests,
        ))
        .with_state(state)
}
