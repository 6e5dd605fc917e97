//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use std::sync::Arc;

use adboard_core::analytics::AnalyticsFeed;
use adboard_core::ports::{AdServing, ClickSink};

use crate::config::Config;

/// The shared application state, created once at startup and passed to all
/// handlers.
#[derive(Clone)]
pub struct AppState {
    pub serving: Arc<dyn AdServing>,
    pub clicks: Arc<dyn ClickSink>,
    pub analytics: Arc<AnalyticsFeed>,
    pub config: Arc<Config>,
}
