//! Activity registry subsystem.
//!
//! # Data Flow
//! ```text
//! seed (built-in defaults or TOML file)
//!     → seed.rs (parse & validate)
//!     → store.rs (ActivityRegistry, one RwLock over the whole map)
//!     → shared via Arc into the HTTP handler state
//!
//! Per request:
//!     handler → list / get / enroll / withdraw
//!     → Result<_, RegistryError> mapped to a response by the HTTP layer
//! ```
//!
//! # Design Decisions
//! - The registry is an explicitly constructed value, not ambient state;
//!   `main` builds it and hands an `Arc` to the server
//! - Activity names are fixed at construction; only rosters mutate
//! - All failures leave the map untouched

pub mod activity;
pub mod error;
pub mod seed;
pub mod store;

pub use activity::Activity;
pub use error::RegistryError;
pub use store::ActivityRegistry;
