use crate::config::AnalysisConfig;
use crate::handlers;
use crate::services::{ParagraphAnalyzer, PlaceholderAnalyzer};
use axum::{
    http::HeaderValue,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics::metrics_middleware, security_headers::security_headers_middleware,
    tracing::request_id_middleware,
};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: AnalysisConfig,
    pub analyzer: Arc<dyn ParagraphAnalyzer>,
}

impl AppState {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            analyzer: Arc::new(PlaceholderAnalyzer),
        }
    }

    pub fn with_analyzer(mut self, analyzer: Arc<dyn ParagraphAnalyzer>) -> Self {
        self.analyzer = analyzer;
        self
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route("/paragraph/analyze", post(handlers::analyze_paragraphs))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // Preflight answers pass through request id and security headers
        .layer(cors)
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
}

fn cors_layer(config: &AnalysisConfig) -> CorsLayer {
    let origins = if config.cors.allows_any_origin() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origin_header_values(&config.cors.allowed_origins))
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Origins that are not valid header values are logged and skipped.
fn origin_header_values(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|o| {
            o.parse::<HeaderValue>()
                .map_err(|e| tracing::error!("Invalid CORS origin '{}': {}. Skipping.", o, e))
                .ok()
        })
        .collect()
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    pub async fn build(config: AnalysisConfig) -> Result<Self, AppError> {
        Self::build_with_state(AppState::new(config)).await
    }

    pub async fn build_with_state(state: AppState) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], state.config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        Ok(Self {
            port,
            listener,
            router: build_router(state),
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
