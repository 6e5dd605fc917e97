//! crates/adboard_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the platform's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the
//! core to be independent of specific external implementations like storage
//! backends or random number generators.

use async_trait::async_trait;

use crate::domain::{AdRecord, ClickReceipt};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
///
/// Mirrors the propagation policy of the platform: `Validation` and
/// `NotFound` surface to the caller as 400/404-equivalents, `Transient`
/// covers non-critical side-effect failures that must never block the
/// primary flow, and `Unexpected` is everything else.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Transient failure: {0}")]
    Transient(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// The injected local storage dependency.
///
/// A single flat key space of string values; the stores built on top of it
/// (session, last viewed ad, drafts) each own one key.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> PortResult<Option<String>>;
    async fn set(&self, key: &str, value: String) -> PortResult<()>;
    async fn remove(&self, key: &str) -> PortResult<()>;
}

/// A pluggable source of uniform random indices.
///
/// Callers guarantee `bound >= 1`; implementations return a value in
/// `0..bound` with each index equally likely. Seedable implementations make
/// selection deterministic in tests.
pub trait RandomSource: Send + Sync {
    fn pick(&self, bound: usize) -> usize;
}

/// Serves one ad for a requested category.
#[async_trait]
pub trait AdServing: Send + Sync {
    /// Selects one record from the candidates matching `category`
    /// (`None` or `"all"`, case-insensitively, means the whole catalog).
    /// An empty pool is a `NotFound` error.
    async fn select(&self, category: Option<&str>) -> PortResult<AdRecord>;
}

/// Accepts client-reported ad clicks.
#[async_trait]
pub trait ClickSink: Send + Sync {
    /// Acknowledges a click on `ad_id`. An empty id is a `Validation` error.
    async fn record(&self, ad_id: &str) -> PortResult<ClickReceipt>;
}
