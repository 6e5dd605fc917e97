//! crates/adboard_core/src/selector.rs
//!
//! Uniform random selection over the filtered catalog.

use std::sync::Arc;

use async_trait::async_trait;

use crate::catalog::AdCatalog;
use crate::domain::{AdRecord, CategoryFilter};
use crate::ports::{AdServing, PortError, PortResult, RandomSource};

/// Picks one ad from the catalog for a requested category.
///
/// Selection is a pure read: the catalog is never mutated and no record of
/// the pick is kept.
pub struct AdSelector {
    catalog: AdCatalog,
    rng: Arc<dyn RandomSource>,
}

impl AdSelector {
    pub fn new(catalog: AdCatalog, rng: Arc<dyn RandomSource>) -> Self {
        Self { catalog, rng }
    }
}

#[async_trait]
impl AdServing for AdSelector {
    async fn select(&self, category: Option<&str>) -> PortResult<AdRecord> {
        let filter = CategoryFilter::parse(category);
        let pool = self.catalog.candidates(&filter);
        if pool.is_empty() {
            return Err(PortError::NotFound(format!(
                "no ads match category '{}'",
                category.unwrap_or("all")
            )));
        }
        let index = self.rng.pick(pool.len());
        Ok(pool[index].clone())
    }
}
