//! AgroSakhi API server
//!
//! REST layer of the farmer dashboard: maps `/api/*` requests onto the
//! storage engine and serves simulated AI advisories.

pub mod config;
pub mod error;
pub mod handlers;
pub mod services;

use agrosakhi_core::Storage;
use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

pub use config::ServerConfig;
use services::{Assistant, LanguageModel};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub assistant: Arc<Assistant>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>, config: ServerConfig) -> Result<Self> {
        let assistant = match LanguageModel::from_config(&config)? {
            Some(llm) => {
                info!(model = llm.model(), "Language model enabled for assistant");
                Assistant::new(Some(llm))
            }
            None => {
                info!("No language model configured, assistant uses canned answers");
                Assistant::offline()
            }
        };

        Ok(Self {
            storage,
            assistant: Arc::new(assistant),
            config: Arc::new(config),
        })
    }
}

pub fn build_router(state: AppState) -> Router {
    let mut app = Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // REST API routes
        .nest("/api", api_routes());

    // Built dashboard client, with SPA fallback to index.html
    if let Some(static_dir) = state.config.static_dir.as_ref() {
        info!("Serving static files from {}", static_dir.display());
        let index = ServeFile::new(static_dir.join("index.html"));
        app = app.fallback_service(ServeDir::new(static_dir).fallback(index));
    }

    app.layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    )
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/user",
            get(handlers::users::me)
                .post(handlers::users::create)
                .patch(handlers::users::update),
        )
        .route("/devices", get(handlers::devices::list))
        .route("/devices/history", get(handlers::devices::history))
        .route(
            "/devices/:id",
            get(handlers::devices::get).patch(handlers::devices::update),
        )
        .route(
            "/devices/:id/history",
            get(handlers::devices::device_history),
        )
        .route(
            "/tasks",
            get(handlers::tasks::list).post(handlers::tasks::create),
        )
        .route("/tasks/:id", get(handlers::tasks::get))
        .route("/tasks/:id/start", post(handlers::tasks::start))
        .route(
            "/weather",
            get(handlers::weather::get).put(handlers::weather::replace),
        )
        .route("/advisories", get(handlers::advisories::list))
        .route("/advisories/:id", get(handlers::advisories::get))
        .route("/courses", get(handlers::courses::list))
        .route("/courses/current", get(handlers::courses::current))
        .route("/courses/:id", get(handlers::courses::get))
        .route("/market", get(handlers::market::info))
        .route("/products", get(handlers::market::products))
        .route("/products/:id", get(handlers::market::product))
        .route("/schemes", get(handlers::schemes::list))
        .route("/schemes/:id", get(handlers::schemes::get))
        .route("/voice", post(handlers::voice::ask))
        .route("/ai/analyze-image", post(handlers::ai::analyze_image))
        .route("/ai/analyze-soil", post(handlers::ai::analyze_soil))
        .route("/ai/predict-weather", post(handlers::ai::predict_weather))
        .route("/ai/forecast-market", post(handlers::ai::forecast_market))
        .route("/ai/crop-query", post(handlers::ai::crop_query))
}
