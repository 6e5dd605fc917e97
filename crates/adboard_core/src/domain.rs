//! crates/adboard_core/src/domain.rs
//!
//! Defines the pure, core data structures for the platform.
//! These structs are independent of any storage backend or HTTP framework.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The targeting category of a sponsored creative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technology,
    Fashion,
    Gaming,
    Finance,
    Travel,
}

impl Category {
    /// Parses a category from user input, case-insensitively.
    /// Returns `None` for anything that is not a listed category.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "technology" => Some(Category::Technology),
            "fashion" => Some(Category::Fashion),
            "gaming" => Some(Category::Gaming),
            "finance" => Some(Category::Finance),
            "travel" => Some(Category::Travel),
            _ => None,
        }
    }

    /// The lowercase wire form, as carried by ad records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technology => "technology",
            Category::Fashion => "fashion",
            Category::Gaming => "gaming",
            Category::Finance => "finance",
            Category::Travel => "travel",
        }
    }

    /// The capitalized display label used by analytics rows.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Technology => "Technology",
            Category::Fashion => "Fashion",
            Category::Gaming => "Gaming",
            Category::Finance => "Finance",
            Category::Travel => "Travel",
        }
    }
}

/// A category filter resolved from a serve request.
///
/// `"all"` (any case) and an absent category both mean no filter. An
/// unrecognized value is kept as `Unknown` so that selection reports an
/// empty pool for it rather than rejecting the request outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
    Unknown(String),
}

impl CategoryFilter {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => CategoryFilter::All,
            Some(s) if s.eq_ignore_ascii_case("all") => CategoryFilter::All,
            Some(s) => match Category::parse(s) {
                Some(category) => CategoryFilter::Only(category),
                None => CategoryFilter::Unknown(s.to_ascii_lowercase()),
            },
        }
    }
}

/// A single sponsored-content item. Immutable once defined in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub click_url: String,
    pub advertiser: String,
    pub category: Category,
}

/// Acknowledgment returned after a click is recorded. Nothing is persisted;
/// the receipt is the entire outcome.
#[derive(Debug, Clone)]
pub struct ClickReceipt {
    pub ad_id: String,
    pub recorded_at: DateTime<Utc>,
}

// The locally stored identity of the currently signed-in user.
// Unauthenticated by design: the id is freshly generated at login/signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
}

/// A user-authored ad posting held in the draft store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftAd {
    pub id: String,
    pub user_id: String,
    pub category: Category,
    pub sponsored_by: String,
    pub heading: String,
    pub image_folder: String,
    pub created_at: DateTime<Utc>,
}

impl DraftAd {
    /// Creates a fresh draft with a generated id.
    pub fn new(
        user_id: &str,
        category: Category,
        sponsored_by: &str,
        heading: &str,
        image_folder: &str,
    ) -> Self {
        let created_at = Utc::now();
        Self {
            id: format!("AD-{}", created_at.timestamp_millis()),
            user_id: user_id.to_string(),
            category,
            sponsored_by: sponsored_by.to_string(),
            heading: heading.to_string(),
            image_folder: image_folder.to_string(),
            created_at,
        }
    }
}

/// One aggregate row of the analytics feed.
///
/// The click-through rate is intentionally not a field: it is derived from
/// `(clicks, impressions)` on every read, so a stale or pre-computed value
/// can never be stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsRow {
    pub id: String,
    pub category: Category,
    pub impressions: u64,
    pub clicks: u64,
}

impl AnalyticsRow {
    /// Click-through rate in percent: `clicks / impressions * 100`, or 0
    /// when there are no impressions.
    pub fn ctr(&self) -> f64 {
        if self.impressions == 0 {
            0.0
        } else {
            self.clicks as f64 / self.impressions as f64 * 100.0
        }
    }
}
