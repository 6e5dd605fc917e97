//! crates/adboard_core/src/analytics.rs
//!
//! The read-only analytics feed. Counters are static mock aggregates, not
//! computed from real events; only the CTR is derived, at read time.

use crate::domain::{AnalyticsRow, Category};

/// A fixed sequence of aggregate rows exposed for display.
#[derive(Debug, Clone)]
pub struct AnalyticsFeed {
    rows: Vec<AnalyticsRow>,
}

impl AnalyticsFeed {
    /// Builds a feed from externally supplied rows. Rows carry raw counters
    /// only, so any pre-computed rate the supplier had is discarded by
    /// construction.
    pub fn from_rows(rows: Vec<AnalyticsRow>) -> Self {
        Self { rows }
    }

    /// The built-in mock dataset backing the dashboard.
    pub fn builtin() -> Self {
        fn row(id: &str, category: Category, impressions: u64, clicks: u64) -> AnalyticsRow {
            AnalyticsRow {
                id: id.to_string(),
                category,
                impressions,
                clicks,
            }
        }

        Self::from_rows(vec![
            row("DEV-101", Category::Technology, 12_500, 310),
            row("FASH-204", Category::Fashion, 9_800, 196),
            row("GAME-301", Category::Gaming, 15_600, 468),
            row("FIN-412", Category::Finance, 11_200, 224),
            row("TRAV-509", Category::Travel, 14_100, 212),
        ])
    }

    pub fn list(&self) -> &[AnalyticsRow] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_feed_has_the_five_mock_rows() {
        let feed = AnalyticsFeed::builtin();
        let ids: Vec<_> = feed.list().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["DEV-101", "FASH-204", "GAME-301", "FIN-412", "TRAV-509"]);
    }

    #[test]
    fn game_row_ctr_is_three_percent() {
        let feed = AnalyticsFeed::builtin();
        let game = feed.list().iter().find(|r| r.id == "GAME-301").unwrap();
        assert_eq!(game.impressions, 15_600);
        assert_eq!(game.clicks, 468);
        assert_eq!(game.ctr(), 3.0);
    }
}
