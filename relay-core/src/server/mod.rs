pub mod routes;

use crate::config::RelayConfig;
use crate::error::Result;
use crate::gateway::{Upstream, WebhookClient};
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared across handlers. One upstream per evaluation kind; the two
/// pipelines are configured independently, never auto-detected.
pub struct AppState {
    pub evaluator: Arc<dyn Upstream>,
    pub comparator: Arc<dyn Upstream>,
}

impl AppState {
    pub fn new(evaluator: Arc<dyn Upstream>, comparator: Arc<dyn Upstream>) -> Self {
        Self {
            evaluator,
            comparator,
        }
    }

    pub fn from_config(config: &RelayConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.request_timeout_secs);
        Ok(Self::new(
            Arc::new(WebhookClient::new(
                config.query_evaluator_url.clone(),
                timeout,
            )?),
            Arc::new(WebhookClient::new(
                config.llm_comparison_url.clone(),
                timeout,
            )?),
        ))
    }
}

/// Build the full router. Separate from [`run`] so tests can drive it with
/// upstream doubles instead of live webhooks.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .merge(routes::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(config: RelayConfig) -> Result<()> {
    let state = Arc::new(AppState::from_config(&config)?);
    let app = app(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
