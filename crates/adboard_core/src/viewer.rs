//! crates/adboard_core/src/viewer.rs
//!
//! Client-side orchestration of the serving flow: request a selection,
//! persist the chosen ad for the detail view, then report the click.
//!
//! The click acknowledgment is dispatched only after the selection result is
//! persisted to the last-viewed slot, and it is deliberately not awaited:
//! its outcome reaches the UI as a transient notice and never blocks
//! navigation to the detail view.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::warn;

use crate::domain::AdRecord;
use crate::ports::{AdServing, ClickSink, KeyValueStore, PortError, PortResult};

/// The storage key holding the most recently opened ad.
const LAST_AD_KEY: &str = "last_ad";

/// The viewer's position in the selection flow.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerPhase {
    Idle,
    Selecting,
    Ready(AdRecord),
    Failed(String),
}

/// A transient status banner entry. Informational only.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    ClickRecorded { ad_id: String },
    ClickFailed { ad_id: String, reason: String },
}

/// Drives one user's ad-viewing session.
pub struct Viewer {
    serving: Arc<dyn AdServing>,
    clicks: Arc<dyn ClickSink>,
    storage: Arc<dyn KeyValueStore>,
    phase: ViewerPhase,
    notices: watch::Sender<Option<Notice>>,
}

impl Viewer {
    pub fn new(
        serving: Arc<dyn AdServing>,
        clicks: Arc<dyn ClickSink>,
        storage: Arc<dyn KeyValueStore>,
    ) -> Self {
        let (notices, _) = watch::channel(None);
        Self {
            serving,
            clicks,
            storage,
            phase: ViewerPhase::Idle,
            notices,
        }
    }

    pub fn phase(&self) -> &ViewerPhase {
        &self.phase
    }

    /// Subscribes to the transient status banner.
    pub fn notices(&self) -> watch::Receiver<Option<Notice>> {
        self.notices.subscribe()
    }

    /// Opens one ad for `category`: selects, persists it to the last-viewed
    /// slot, then dispatches the click acknowledgment in the background.
    ///
    /// An empty pool or a failed write to the slot fails the flow; a failed
    /// acknowledgment does not.
    pub async fn open_ad(&mut self, category: Option<&str>) -> PortResult<AdRecord> {
        self.phase = ViewerPhase::Selecting;

        let ad = match self.serving.select(category).await {
            Ok(ad) => ad,
            Err(error) => {
                self.phase = ViewerPhase::Failed(error.to_string());
                return Err(error);
            }
        };

        // The slot must hold the ad before the acknowledgment goes out, so
        // the detail view always has something to render.
        if let Err(error) = self.save_last_viewed(&ad).await {
            self.phase = ViewerPhase::Failed(error.to_string());
            return Err(error);
        }
        self.phase = ViewerPhase::Ready(ad.clone());

        let clicks = Arc::clone(&self.clicks);
        let notices = self.notices.clone();
        let ad_id = ad.id.clone();
        // Not awaited: the acknowledgment only feeds the status banner.
        tokio::spawn(async move {
            match clicks.record(&ad_id).await {
                Ok(receipt) => {
                    notices.send_replace(Some(Notice::ClickRecorded {
                        ad_id: receipt.ad_id,
                    }));
                }
                Err(error) => {
                    warn!(%ad_id, %error, "click acknowledgment failed");
                    notices.send_replace(Some(Notice::ClickFailed {
                        ad_id,
                        reason: error.to_string(),
                    }));
                }
            }
        });

        Ok(ad)
    }

    /// The ad most recently opened, as the detail view reads it. The slot is
    /// overwritten by every selection; only the latest survives.
    pub async fn last_viewed(&self) -> PortResult<Option<AdRecord>> {
        let Some(raw) = self.storage.get(LAST_AD_KEY).await? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| PortError::Unexpected(e.to_string()))
    }

    async fn save_last_viewed(&self, ad: &AdRecord) -> PortResult<()> {
        let json = serde_json::to_string(ad).map_err(|e| PortError::Unexpected(e.to_string()))?;
        self.storage.set(LAST_AD_KEY, json).await
    }
}
