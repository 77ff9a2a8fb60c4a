//! TrademarkDesk API Server

mod routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tm_core::availability::{AvailabilityChecker, MockRegistry, RegistryClient};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Application state shared across handlers
pub struct AppState {
    pub checker: Box<dyn AvailabilityChecker>,
    pub config: AppConfig,
}

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub registry_url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            registry_url: std::env::var("REGISTRY_URL").ok(),
        }
    }
}

/// Build the router. Split out of `main` so tests can drive it with
/// `tower::ServiceExt::oneshot`.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(routes::health_check))
        // Availability
        .route("/api/check-trademark", post(routes::check::check_trademark))
        // Pricing
        .route("/api/quote", post(routes::pricing::quote))
        .route("/api/order", post(routes::pricing::order))
        // Dashboard records
        .route("/api/applications", get(routes::records::list_applications))
        .route("/api/notifications", get(routes::records::list_notifications))
        // CORS
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        // Tracing
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "tm_api=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TrademarkDesk API Server");

    let config = AppConfig::default();

    // Real registry endpoint when configured, deterministic mock otherwise
    let checker: Box<dyn AvailabilityChecker> = match &config.registry_url {
        Some(url) => {
            info!("Using trademark registry at {}", url);
            Box::new(RegistryClient::new(url.clone()))
        }
        None => {
            info!("No REGISTRY_URL set, using mock registry");
            Box::new(MockRegistry::new())
        }
    };

    let bind_addr = config.bind_addr.clone();
    let state = Arc::new(AppState { checker, config });

    let app = app(state);

    info!("Listening on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
