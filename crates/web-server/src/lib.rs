use analytics::{AnalyticsEngine, QueryLimits};
use axum::{routing::get, Router};
use configuration::Config;
use core_types::Dataset;
use datastore::JsonDataSource;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod error;
pub mod handlers;
pub mod params;

/// The shared application state that all handlers can access.
///
/// The dataset is an immutable snapshot; handlers only ever read it.
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub engine: AnalyticsEngine,
}

impl AppState {
    pub fn new(dataset: Dataset, engine: AnalyticsEngine) -> Self {
        Self {
            dataset: Arc::new(dataset),
            engine,
        }
    }

    /// Loads the configured dataset and builds an engine with the configured limits.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let dataset = JsonDataSource::load_configured(&config.data).inspect_err(|e| {
            tracing::error!(error = %e, "Failed to load the dataset.");
        })?;
        let engine = AnalyticsEngine::with_limits(QueryLimits {
            restaurants_per_page: config.query.restaurants_per_page,
            orders_per_page: config.query.orders_per_page,
            top_restaurants: config.query.top_restaurants,
        });
        Ok(Self::new(dataset, engine))
    }
}

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/restaurants", get(handlers::list_restaurants))
        .route(
            "/restaurants/:restaurant_id/order-trends",
            get(handlers::order_trends),
        )
        .route("/top-restaurants", get(handlers::top_restaurants))
        .route("/filtered-orders", get(handlers::filtered_orders));

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/v1", api)
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(CorsLayer::permissive())
        // Logs every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// The main function to configure and run the web server.
pub async fn run_server(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    tracing::info!(
        restaurants = state.dataset.restaurants().len(),
        orders = state.dataset.orders().len(),
        limits = ?state.engine.limits(),
        "Serving dataset."
    );
    let app = router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Web server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
