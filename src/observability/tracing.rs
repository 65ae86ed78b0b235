use opentelemetry::{global, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    trace::{self, RandomIdGenerator, Sampler},
    Resource,
};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::config::ObservabilityConfig;

const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum ObservabilityError {
    #[error("Failed to initialize OpenTelemetry: {0}")]
    OpenTelemetryInit(#[from] opentelemetry::trace::TraceError),
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Initialize structured logging and, when an OTLP endpoint is configured, trace export
///
/// `RUST_LOG` takes precedence over the configured log level.
pub fn init_observability(config: &ObservabilityConfig) -> Result<(), ObservabilityError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|e| {
            ObservabilityError::Config(format!("Invalid log level '{}': {}", config.log_level, e))
        })?,
    };

    let opentelemetry_layer = match config.otlp_endpoint.as_deref() {
        Some(endpoint) => Some(OpenTelemetryLayer::new(init_opentelemetry_tracer(
            &config.service_name,
            &config.service_version,
            endpoint,
        )?)),
        None => None,
    };

    if config.enable_json_logging {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(opentelemetry_layer)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_span_list(false)
                    .with_target(false)
                    .with_span_events(FmtSpan::NONE),
            )
            .try_init()
            .map_err(|e| ObservabilityError::TracingInit(e.to_string()))?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(opentelemetry_layer)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_span_events(FmtSpan::NONE),
            )
            .try_init()
            .map_err(|e| ObservabilityError::TracingInit(e.to_string()))?;
    }

    info!(
        service = %config.service_name,
        version = %config.service_version,
        trace_export = config.otlp_endpoint.is_some(),
        "Observability initialized successfully"
    );
    Ok(())
}

/// Extract the current trace ID from the active span context
pub fn get_current_trace_id() -> Option<String> {
    use opentelemetry::trace::TraceContextExt;
    use tracing_opentelemetry::OpenTelemetrySpanExt;

    let current_span = tracing::Span::current();
    let context = current_span.context();
    let span = context.span();
    let span_context = span.span_context();

    if span_context.is_valid() {
        Some(span_context.trace_id().to_string())
    } else {
        None
    }
}

/// Log at info level, attaching the current trace id when one exists
#[macro_export]
macro_rules! info_with_trace {
    ($($arg:tt)*) => {
        if let Some(trace_id) = $crate::observability::tracing::get_current_trace_id() {
            ::tracing::info!(trace_id = %trace_id, $($arg)*);
        } else {
            ::tracing::info!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! error_with_trace {
    ($($arg:tt)*) => {
        if let Some(trace_id) = $crate::observability::tracing::get_current_trace_id() {
            ::tracing::error!(trace_id = %trace_id, $($arg)*);
        } else {
            ::tracing::error!($($arg)*);
        }
    };
}

fn init_opentelemetry_tracer(
    service_name: &str,
    service_version: &str,
    otlp_endpoint: &str,
) -> Result<opentelemetry_sdk::trace::Tracer, ObservabilityError> {
    if otlp_endpoint.trim().is_empty() {
        return Err(ObservabilityError::Config(
            "OTLP endpoint cannot be blank".to_string(),
        ));
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", service_name.to_string()),
        KeyValue::new("service.version", service_version.to_string()),
        KeyValue::new("service.namespace", "storefront"),
        KeyValue::new("telemetry.sdk.language", "rust"),
    ]);

    let exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(otlp_endpoint);

    let tracer = opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(exporter)
        .with_trace_config(
            trace::config()
                .with_sampler(Sampler::AlwaysOn)
                .with_id_generator(RandomIdGenerator::default())
                .with_resource(resource),
        )
        .with_batch_config(
            trace::BatchConfig::default()
                .with_max_queue_size(2048)
                .with_max_export_batch_size(512)
                .with_scheduled_delay(Duration::from_millis(500)),
        )
        .install_batch(opentelemetry_sdk::runtime::Tokio)?;

    Ok(tracer)
}

/// Flush and shut down the tracer provider, giving up after five seconds
pub async fn shutdown_observability() {
    info!("Shutting down observability");

    // The provider shutdown blocks while pending spans are exported.
    let shutdown_task = tokio::task::spawn_blocking(global::shutdown_tracer_provider);

    match tokio::time::timeout(SHUTDOWN_TIMEOUT, shutdown_task).await {
        Ok(Ok(())) => info!("Observability shutdown completed successfully"),
        Ok(Err(e)) => warn!("Error during observability shutdown: {}", e),
        Err(_) => warn!(
            "Observability shutdown timed out after {:?}, continuing exit",
            SHUTDOWN_TIMEOUT
        ),
    }
}
