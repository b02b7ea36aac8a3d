//! # Middleware
//!
//! Tower layers applied to every API route:
//!
//! - `tracing_layer`: per-request tracing spans via `tower-http`.
//! - `metrics`: in-process request and error counters.

pub mod metrics;
pub mod tracing_layer;
