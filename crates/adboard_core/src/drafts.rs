//! crates/adboard_core/src/drafts.rs
//!
//! User-authored ad postings, kept as one list under a single storage key.
//! Newest first, overwrite by id, unbounded growth, no expiry.

use std::sync::Arc;

use crate::domain::DraftAd;
use crate::ports::{KeyValueStore, PortError, PortResult};

/// The storage key holding the draft list.
const DRAFTS_KEY: &str = "user_ads";

/// Draft store over an injected key-value storage dependency.
pub struct DraftStore {
    storage: Arc<dyn KeyValueStore>,
}

impl DraftStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Saves a draft: an existing draft with the same id is overwritten in
    /// place, anything else is prepended.
    pub async fn save(&self, draft: DraftAd) -> PortResult<()> {
        if draft.heading.trim().is_empty()
            || draft.sponsored_by.trim().is_empty()
            || draft.image_folder.trim().is_empty()
        {
            return Err(PortError::Validation(
                "heading, sponsor and image folder are required".to_string(),
            ));
        }

        let mut drafts = self.list().await?;
        match drafts.iter_mut().find(|d| d.id == draft.id) {
            Some(existing) => *existing = draft,
            None => drafts.insert(0, draft),
        }
        self.write(&drafts).await
    }

    /// All drafts, newest first.
    pub async fn list(&self) -> PortResult<Vec<DraftAd>> {
        let Some(raw) = self.storage.get(DRAFTS_KEY).await? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|e| PortError::Unexpected(e.to_string()))
    }

    pub async fn get(&self, id: &str) -> PortResult<Option<DraftAd>> {
        Ok(self.list().await?.into_iter().find(|d| d.id == id))
    }

    async fn write(&self, drafts: &[DraftAd]) -> PortResult<()> {
        let json =
            serde_json::to_string(drafts).map_err(|e| PortError::Unexpected(e.to_string()))?;
        self.storage.set(DRAFTS_KEY, json).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use crate::test_support::MapStore;

    fn draft(id: &str, heading: &str) -> DraftAd {
        DraftAd {
            id: id.to_string(),
            user_id: "user-1".to_string(),
            category: Category::Technology,
            sponsored_by: "Acme Inc.".to_string(),
            heading: heading.to_string(),
            image_folder: "/images/ads/technology".to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn list_is_empty_before_any_save() {
        let store = DraftStore::new(MapStore::new());
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn saved_drafts_come_back_newest_first() {
        let store = DraftStore::new(MapStore::new());
        store.save(draft("AD-1", "first")).await.unwrap();
        store.save(draft("AD-2", "second")).await.unwrap();

        let drafts = store.list().await.unwrap();
        let ids: Vec<_> = drafts.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["AD-2", "AD-1"]);
    }

    #[tokio::test]
    async fn saving_an_existing_id_overwrites_in_place() {
        let store = DraftStore::new(MapStore::new());
        store.save(draft("AD-1", "original")).await.unwrap();
        store.save(draft("AD-2", "other")).await.unwrap();
        store.save(draft("AD-1", "edited")).await.unwrap();

        let drafts = store.list().await.unwrap();
        assert_eq!(drafts.len(), 2);
        let edited = store.get("AD-1").await.unwrap().unwrap();
        assert_eq!(edited.heading, "edited");
        // Position is preserved on overwrite.
        assert_eq!(drafts[1].id, "AD-1");
    }

    #[tokio::test]
    async fn required_fields_are_validated() {
        let store = DraftStore::new(MapStore::new());
        let mut incomplete = draft("AD-1", "heading");
        incomplete.sponsored_by = "  ".to_string();
        let err = store.save(incomplete).await.unwrap_err();
        assert!(matches!(err, PortError::Validation(_)));
    }

    #[tokio::test]
    async fn get_unknown_id_is_none() {
        let store = DraftStore::new(MapStore::new());
        store.save(draft("AD-1", "heading")).await.unwrap();
        assert!(store.get("AD-404").await.unwrap().is_none());
    }
}
