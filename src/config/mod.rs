//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional --config flag)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → consumed by main at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the registry seed is read exactly once
//! - All fields have defaults to allow running with no config file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::AppConfig;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::StaticAssetsConfig;
