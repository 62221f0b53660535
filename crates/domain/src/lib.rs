//! # Al-Badr Domain
//!
//! Business domain types for the Al-Badr Lighting shop core.
//!
//! This crate contains:
//! - Warranty records and their evaluation results
//! - Currency-tagged money, sales and expenses
//! - Domain error types and Result definitions
//! - Configuration structures and defaults
//!
//! ## Architecture
//! - No dependencies on other Al-Badr crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
