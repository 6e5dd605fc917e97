//! crates/adboard_core/src/clicks.rs
//!
//! Click acknowledgment. Receipt only; nothing is persisted.

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use crate::domain::ClickReceipt;
use crate::ports::{ClickSink, PortError, PortResult};

/// Accepts client-reported clicks and acknowledges them.
///
/// A production implementation would append `{id, timestamp, ip, userAgent}`
/// to a durable event log; this one stops at the receipt.
#[derive(Debug, Default)]
pub struct ClickRecorder;

impl ClickRecorder {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ClickSink for ClickRecorder {
    async fn record(&self, ad_id: &str) -> PortResult<ClickReceipt> {
        if ad_id.is_empty() {
            return Err(PortError::Validation("Missing id".to_string()));
        }
        let receipt = ClickReceipt {
            ad_id: ad_id.to_string(),
            recorded_at: Utc::now(),
        };
        debug!(ad_id, "click acknowledged");
        Ok(receipt)
    }
}
