//! services/api/src/bin/api.rs

use std::sync::Arc;

use axum::{
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        Method,
    },
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use adboard_core::analytics::AnalyticsFeed;
use adboard_core::catalog::AdCatalog;
use adboard_core::clicks::ClickRecorder;
use adboard_core::ports::{AdServing, ClickSink};
use adboard_core::selector::AdSelector;

use api_lib::{
    adapters::rng::source_for_seed,
    config::Config,
    error::ApiError,
    web::{
        analytics_handler, record_click_handler, rest::ApiDoc, serve_ad_handler, state::AppState,
    },
};

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Build the Serving Components ---
    let rng = source_for_seed(config.rng_seed);
    if let Some(seed) = config.rng_seed {
        info!(seed, "Ad selection is seeded and reproducible");
    }
    let serving: Arc<dyn AdServing> = Arc::new(AdSelector::new(AdCatalog::builtin(), rng));
    let clicks: Arc<dyn ClickSink> = Arc::new(ClickRecorder::new());
    let analytics = Arc::new(AnalyticsFeed::builtin());

    // --- 3. Build the Shared AppState ---
    let app_state = Arc::new(AppState {
        serving,
        clicks,
        analytics,
        config: config.clone(),
    });

    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.clone())
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, ACCEPT]);

    // --- 4. Create the Web Router ---
    let api_router = Router::new()
        .route("/ads", get(serve_ad_handler))
        .route("/ads/click", post(record_click_handler))
        .route("/analytics", get(analytics_handler))
        .layer(cors)
        .with_state(app_state);

    // Merge the API router with the Swagger UI router for a complete
    // application.
    let app = Router::new()
        .merge(api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // --- 5. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
