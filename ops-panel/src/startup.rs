use crate::config::PanelConfig;
use crate::handlers;
use crate::services::{CalculatorRegistry, DocumentStore, ResourceProbe, StaticCalculatorRegistry};
use axum::{middleware::from_fn, routing::get, Router};
use service_core::error::AppError;
use service_core::middleware::{
    metrics::metrics_middleware, security_headers::security_headers_middleware,
    tracing::{make_request_span, request_id_middleware},
};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Immutable components shared by all requests.
#[derive(Clone)]
pub struct AppState {
    pub probe: Arc<ResourceProbe>,
    pub documents: Arc<DocumentStore>,
    pub calculators: Arc<dyn CalculatorRegistry>,
}

impl AppState {
    pub fn from_config(config: &PanelConfig) -> Result<Self, AppError> {
        let probe = ResourceProbe::new(&config.storage.base_dir, config.storage.aliases.clone())
            .map_err(|e| AppError::ConfigError(anyhow::Error::new(e)))?;
        let documents = DocumentStore::new(&config.documents.docs_dir, &config.documents.catalog)
            .map_err(|e| AppError::ConfigError(anyhow::Error::new(e)))?;
        let calculators = StaticCalculatorRegistry::new(config.calculators.clone());

        Ok(Self {
            probe: Arc::new(probe),
            documents: Arc::new(documents),
            calculators: Arc::new(calculators),
        })
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route("/status/:identifier", get(handlers::get_resource_status))
        .route("/docs", get(handlers::list_documents))
        .route("/docs/:key", get(handlers::get_document))
        .route("/calculators", get(handlers::list_calculators))
        .fallback(handlers::not_found)
        .layer(from_fn(metrics_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<axum::body::Body>))
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    pub async fn build(config: PanelConfig) -> Result<Self, AppError> {
        let state = AppState::from_config(&config)?;
        state.documents.warn_missing().await;

        tracing::info!(
            base_dir = %state.probe.base_dir().display(),
            docs_dir = %state.documents.docs_dir().display(),
            "panel components initialized"
        );

        let router = build_router(state);

        let addr = config.server.address();
        let listener = TcpListener::bind(&addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router).await
    }

    pub async fn run_with_shutdown<F>(self, signal: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(signal)
            .await
    }
}
