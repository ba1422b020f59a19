//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All requests produce:
//!     → tracing events (structured key-value fields, request ID attached)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log output (stdout, RUST_LOG-filtered)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through all log lines for a request
//! - Metrics are cheap (atomic increments) and labeled by route template,
//!   never by raw path

pub mod metrics;
