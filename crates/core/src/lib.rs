//! # Badr Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Warranty status evaluation, filtering and lifecycle rules
//! - Multi-currency financial aggregation
//! - The [`Clock`] port every time-dependent rule reads from
//!
//! ## Architecture Principles
//! - Only depends on `badr-domain`
//! - No database, HTTP, or platform code
//! - The reference instant is always injected, never read ad hoc
//! - Pure, testable business logic

pub mod clock;
pub mod finance;
pub mod warranty;

pub use clock::{Clock, FixedClock, SystemClock};
pub use finance::FinancialAggregator;
pub use warranty::{WarrantyService, WarrantyThresholds};
