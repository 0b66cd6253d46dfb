#![forbid(unsafe_code)]

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, put};
use axum::Router;
use dogwalk_store::Registry;
use std::sync::atomic::{AtomicBool, AtomicU64};
use std::sync::Arc;
use tokio::sync::RwLock;

mod config;
mod http;
mod metrics;
mod middleware;

pub use config::{validate_startup_config_contract, ApiConfig};

pub const CRATE_NAME: &str = "dogwalk-server";

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<RwLock<Registry>>,
    pub api: ApiConfig,
    pub ready: Arc<AtomicBool>,
    pub accepting_requests: Arc<AtomicBool>,
    pub(crate) metrics: Arc<metrics::RequestMetrics>,
    pub(crate) request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        Self::with_config(registry, ApiConfig::default())
    }

    #[must_use]
    pub fn with_config(registry: Registry, api: ApiConfig) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
            ready: Arc::new(AtomicBool::new(true)),
            accepting_requests: Arc::new(AtomicBool::new(true)),
            metrics: Arc::new(metrics::RequestMetrics::default()),
            request_id_seed: Arc::new(AtomicU64::new(1)),
            api,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(http::system::landing_handler))
        .route("/healthz", get(http::system::healthz_handler))
        .route("/readyz", get(http::system::readyz_handler))
        .route("/metrics", get(http::system::metrics_handler))
        .route("/version", get(http::system::version_handler))
        .route(
            "/city",
            get(http::cities::list_cities_handler).post(http::cities::create_city_handler),
        )
        .route("/city/:id", get(http::cities::get_city_handler))
        .route(
            "/dog",
            get(http::dogs::list_dogs_handler).post(http::dogs::create_dog_handler),
        )
        .route(
            "/dog/:id",
            get(http::dogs::get_dog_handler)
                .put(http::dogs::update_dog_handler)
                .delete(http::dogs::delete_dog_handler),
        )
        .route(
            "/dog/:id/available-walkers",
            get(http::dogs::available_walkers_handler),
        )
        .route("/dog/:id/walker", put(http::dogs::assign_walker_handler))
        .route("/walker", get(http::walkers::list_walkers_handler))
        .route(
            "/walker/:id",
            get(http::walkers::get_walker_handler)
                .put(http::walkers::update_walker_handler)
                .delete(http::walkers::delete_walker_handler),
        )
        .route(
            "/walker/:id/available-dogs",
            get(http::walkers::available_dogs_handler),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::request_tracing::request_tracing_middleware,
        ))
        .layer(DefaultBodyLimit::max(state.api.max_body_bytes))
        .with_state(state)
}
