//! JSON feed ingestion
//!
//! Turns the entity arrays served by the REST API into validated domain
//! records. A malformed document fails as a whole; a malformed element is
//! logged, collected in [`FeedParse::rejected`] and skipped.

pub mod dates;
pub mod payloads;

use badr_domain::{BadrError, Expense, Result, Sale, WarrantyRecord};
use serde_json::Value;
use tracing::{debug, warn};

pub use payloads::{ExpensePayload, FeedPayload, SalePayload, WarrantyPayload};

use crate::errors::InfraError;

/// An element that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    /// Position in the feed array
    pub index: usize,
    /// The element's `id`, when it had one
    pub id: Option<String>,
    pub error: BadrError,
}

/// Outcome of parsing one feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedParse<T> {
    pub records: Vec<T>,
    pub rejected: Vec<RejectedRecord>,
}

impl<T> FeedParse<T> {
    /// True when every element validated
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Parse a feed of `P` payloads.
///
/// # Errors
/// Returns `BadrError::InvalidInput` when `json` is not an array.
pub fn parse_feed<P: FeedPayload>(json: &str) -> Result<FeedParse<P::Record>> {
    let items: Vec<Value> = serde_json::from_str(json).map_err(InfraError::from)?;

    let mut records = Vec::with_capacity(items.len());
    let mut rejected = Vec::new();

    for (index, item) in items.into_iter().enumerate() {
        let id = item.get("id").map(display_id);
        let outcome = serde_json::from_value::<P>(item)
            .map_err(|e| BadrError::InvalidRecord(format!("{} record {index}: {e}", P::FEED)))
            .and_then(P::into_record);

        match outcome {
            Ok(record) => records.push(record),
            Err(error) => {
                warn!(
                    feed = P::FEED,
                    index,
                    record_id = id.as_deref().unwrap_or("-"),
                    error_kind = error.label(),
                    error = %error,
                    "skipping malformed feed record"
                );
                rejected.push(RejectedRecord { index, id, error });
            }
        }
    }

    if !rejected.is_empty() {
        warn!(
            feed = P::FEED,
            skipped = rejected.len(),
            kept = records.len(),
            "dropped malformed feed records"
        );
    }
    debug!(feed = P::FEED, count = records.len(), "feed parsed");

    Ok(FeedParse { records, rejected })
}

/// `GET /api/warranties`
///
/// # Errors
/// Returns `BadrError::InvalidInput` when `json` is not an array.
pub fn parse_warranties(json: &str) -> Result<FeedParse<WarrantyRecord>> {
    parse_feed::<WarrantyPayload>(json)
}

/// `GET /api/sales`
///
/// # Errors
/// Returns `BadrError::InvalidInput` when `json` is not an array.
pub fn parse_sales(json: &str) -> Result<FeedParse<Sale>> {
    parse_feed::<SalePayload>(json)
}

/// `GET /api/expenses`
///
/// # Errors
/// Returns `BadrError::InvalidInput` when `json` is not an array.
pub fn parse_expenses(json: &str) -> Result<FeedParse<Expense>> {
    parse_feed::<ExpensePayload>(json)
}

fn display_id(value: &Value) -> String {
    match value {
        Value::String(id) => id.clone(),
        other => other.to_string(),
    }
}
