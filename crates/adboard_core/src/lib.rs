pub mod analytics;
pub mod catalog;
pub mod clicks;
pub mod domain;
pub mod drafts;
pub mod ports;
pub mod selector;
pub mod session;
pub mod viewer;

#[cfg(test)]
pub(crate) mod test_support;

pub use analytics::AnalyticsFeed;
pub use catalog::AdCatalog;
pub use clicks::ClickRecorder;
pub use domain::{
    AdRecord, AnalyticsRow, Category, CategoryFilter, ClickReceipt, DraftAd, UserSession,
};
pub use drafts::DraftStore;
pub use ports::{AdServing, ClickSink, KeyValueStore, PortError, PortResult, RandomSource};
pub use selector::AdSelector;
pub use session::SessionStore;
pub use viewer::{Notice, Viewer, ViewerPhase};
