//! Logging set-up for the `boatyard` binary.
//!
//! Events go to stderr through a `fmt` layer filtered by `RUST_LOG`, or by
//! the CLI verbosity when `RUST_LOG` is unset. `--otel` additionally exports
//! spans (one per HTTP request, tagged with the authenticated principal) to
//! stdout as OpenTelemetry data.
//!
//! ```no_run
//! use boatyard_observe::tracing_setup::{directives_for, init_tracing};
//!
//! init_tracing(directives_for(0, false), false).unwrap();
//! ```

use std::sync::OnceLock;

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use opentelemetry_sdk::Resource;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Service name reported on exported spans.
pub const SERVICE_NAME: &str = "boatyard";

/// Our crates at `info`, request spans from tower-http at `info`, everything else at `warn`.
pub const DEFAULT_DIRECTIVES: &str = "warn,boatyard=info,tower_http=info";

static TRACER_PROVIDER: OnceLock<SdkTracerProvider> = OnceLock::new();

/// Filter directives for a `-v` count and `--quiet` flag.
pub fn directives_for(verbosity: u8, quiet: bool) -> &'static str {
    match verbosity {
        0 if quiet => "error",
        0 => DEFAULT_DIRECTIVES,
        1 => "warn,boatyard=debug,tower_http=debug,sqlx=info",
        _ => "trace",
    }
}

/// `RUST_LOG` when set, otherwise `default_directives`.
pub fn build_env_filter(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}

/// Install the global subscriber.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(
    default_directives: &str,
    enable_otel: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let otel_layer = enable_otel.then(|| {
        let provider = SdkTracerProvider::builder()
            .with_resource(Resource::builder().with_service_name(SERVICE_NAME).build())
            .with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
            .build();
        let tracer = provider.tracer(SERVICE_NAME);

        let _ = TRACER_PROVIDER.set(provider.clone());
        opentelemetry::global::set_tracer_provider(provider);
        tracing_opentelemetry::layer().with_tracer(tracer)
    });

    tracing_subscriber::registry()
        .with(build_env_filter(default_directives))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_span_events(FmtSpan::CLOSE),
        )
        .with(otel_layer)
        .try_init()?;

    Ok(())
}

/// Flush and shut down the span exporter. No-op without `--otel`.
pub fn shutdown_tracing() {
    if let Some(provider) = TRACER_PROVIDER.get() {
        if let Err(e) = provider.shutdown() {
            tracing::warn!("span exporter shutdown failed: {e}");
        }
    }
}
