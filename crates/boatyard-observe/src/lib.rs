//! Observability for Boatyard: tracing subscriber set-up and optional
//! OpenTelemetry span export.

pub mod tracing_setup;
