//! Warranty status evaluation and lifecycle

pub mod evaluator;
pub mod filters;
pub mod lifecycle;
pub mod service;

pub use evaluator::{days_remaining, evaluate, summarize, WarrantyThresholds};
pub use filters::{expired_unclaimed, expiring_within, matches};
pub use lifecycle::{claim, extend, warranty_end_date};
pub use service::WarrantyService;
