//! crates/adboard_core/src/catalog.rs
//!
//! The static catalog of sponsored creatives. Records are defined at
//! process start and never mutated.

use crate::domain::{AdRecord, Category, CategoryFilter};

/// The immutable set of ad records available for serving.
#[derive(Debug, Clone)]
pub struct AdCatalog {
    records: Vec<AdRecord>,
}

impl AdCatalog {
    pub fn new(records: Vec<AdRecord>) -> Self {
        Self { records }
    }

    /// The built-in demo catalog: one creative per category.
    pub fn builtin() -> Self {
        fn ad(
            id: &str,
            title: &str,
            description: &str,
            image_url: &str,
            click_url: &str,
            advertiser: &str,
            category: Category,
        ) -> AdRecord {
            AdRecord {
                id: id.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                image_url: image_url.to_string(),
                click_url: click_url.to_string(),
                advertiser: advertiser.to_string(),
                category,
            }
        }

        Self::new(vec![
            ad(
                "t1",
                "Ship faster with DevSuite",
                "All-in-one toolkit for modern engineering teams. Plans start free.",
                "/developer-tool-ad.png",
                "https://example.com/devsuite",
                "DevSuite",
                Category::Technology,
            ),
            ad(
                "f1",
                "Style that moves with you",
                "Breathable fabrics, timeless cuts. Discover the new summer collection.",
                "/fashion-ad-lookbook.png",
                "https://example.com/fashion",
                "AeroWear",
                Category::Fashion,
            ),
            ad(
                "g1",
                "Conquer new worlds",
                "Next-gen graphics and ultra-low latency. Play the latest AAA titles now.",
                "/gaming-ad-sci-fi.png",
                "https://example.com/gaming",
                "NovaPlay",
                Category::Gaming,
            ),
            ad(
                "fi1",
                "Grow your savings smarter",
                "Automated portfolios with human insight. Start with $10.",
                "/finance-ad-growth.png",
                "https://example.com/finance",
                "OakVest",
                Category::Finance,
            ),
            ad(
                "tr1",
                "See more, spend less",
                "Flexible stays and curated experiences in 100+ countries.",
                "/travel-ad-beach.png",
                "https://example.com/travel",
                "Roamly",
                Category::Travel,
            ),
        ])
    }

    pub fn records(&self) -> &[AdRecord] {
        &self.records
    }

    /// The candidate pool for a filter. `Unknown` categories match nothing.
    pub fn candidates(&self, filter: &CategoryFilter) -> Vec<&AdRecord> {
        match filter {
            CategoryFilter::All => self.records.iter().collect(),
            CategoryFilter::Only(category) => self
                .records
                .iter()
                .filter(|ad| ad.category == *category)
                .collect(),
            CategoryFilter::Unknown(_) => Vec::new(),
        }
    }
}
