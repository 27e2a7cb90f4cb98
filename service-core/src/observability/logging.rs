use crate::error::AppError;
use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{runtime, trace as sdktrace, Resource};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// Logs are emitted as flattened JSON on stdout. When `otlp_endpoint` is set,
/// spans are also exported over OTLP/gRPC, tagged with `service_name`.
/// `RUST_LOG` takes precedence over `log_level`.
pub fn init_tracing(
    service_name: &str,
    log_level: &str,
    otlp_endpoint: Option<&str>,
) -> Result<(), AppError> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    let tracer = match otlp_endpoint {
        Some(endpoint) => Some(build_tracer(service_name, endpoint)?),
        None => None,
    };
    let telemetry = tracer.map(|t| tracing_opentelemetry::layer().with_tracer(t));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(telemetry)
        .with(
            tracing_subscriber::fmt::layer()
                .with_file(true)
                .with_line_number(true)
                .json()
                .flatten_event(true),
        )
        .try_init()
        .map_err(|e| AppError::InternalError(anyhow::anyhow!(e)))?;

    Ok(())
}

fn build_tracer(service_name: &str, endpoint: &str) -> Result<sdktrace::Tracer, AppError> {
    let otlp_exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(endpoint);

    opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(otlp_exporter)
        .with_trace_config(sdktrace::config().with_resource(Resource::new(vec![
            KeyValue::new("service.name", service_name.to_string()),
        ])))
        .install_batch(runtime::Tokio)
        .map_err(|e| {
            AppError::InternalError(anyhow::anyhow!(
                "Failed to initialize OTLP tracer for service '{}' at endpoint '{}': {}",
                service_name,
                endpoint,
                e
            ))
        })
}
