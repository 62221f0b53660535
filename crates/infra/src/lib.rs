//! # Badr Infrastructure
//!
//! The impure edges around the pure warranty and finance logic.
//!
//! This crate contains:
//! - Configuration loading (`.env`, environment variables, JSON/TOML files)
//! - JSON feed ingestion for the REST API's warranty, sale and expense lists
//! - Tracing subscriber initialisation
//! - Conversions from I/O and parser errors into `BadrError`
//!
//! ## Architecture
//! - Produces the domain types `badr-core` evaluates
//! - Depends on `badr-domain` only; `badr-core` is used in tests
//! - Contains all "impure" code (I/O, environment, global subscriber)

pub mod config;
pub mod errors;
pub mod feeds;
pub mod observability;

// Re-export commonly used items
pub use errors::InfraError;
pub use feeds::{parse_expenses, parse_sales, parse_warranties, FeedParse, RejectedRecord};
pub use observability::init_tracing;
