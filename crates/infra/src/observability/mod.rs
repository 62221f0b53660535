//! Observability: structured logging via `tracing`

pub mod logging;

pub use logging::{build_filter, init_tracing};
