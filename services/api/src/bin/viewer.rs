//! services/api/src/bin/viewer.rs
//!
//! A command-line tour of the client flow: sign in, open one ad for a
//! category (first argument, default "all"), read the detail slot, report
//! the click outcome, sign out.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use adboard_core::catalog::AdCatalog;
use adboard_core::clicks::ClickRecorder;
use adboard_core::ports::{AdServing, ClickSink, KeyValueStore};
use adboard_core::selector::AdSelector;
use adboard_core::session::SessionStore;
use adboard_core::viewer::{Notice, Viewer};

use api_lib::{
    adapters::{rng::source_for_seed, storage::MemoryStore},
    config::Config,
    error::ApiError,
};

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let serving: Arc<dyn AdServing> = Arc::new(AdSelector::new(
        AdCatalog::builtin(),
        source_for_seed(config.rng_seed),
    ));
    let clicks: Arc<dyn ClickSink> = Arc::new(ClickRecorder::new());

    let sessions = SessionStore::new(storage.clone());
    let session = sessions
        .signup("viewer@example.com", "demo-password", Some("Demo Viewer"))
        .await?;
    println!("Signed in as {} (session {})", session.email, session.id);

    let mut viewer = Viewer::new(serving, clicks, storage);
    let mut notices = viewer.notices();

    let category = std::env::args().nth(1);
    let ad = viewer.open_ad(category.as_deref()).await?;
    println!(
        "Opened \"{}\" by {} [{}]",
        ad.title,
        ad.advertiser,
        ad.category.as_str()
    );

    // What the detail page renders, straight from the last-viewed slot.
    if let Some(last) = viewer.last_viewed().await? {
        println!("Detail: {} -> {}", last.description, last.click_url);
    }

    // The acknowledgment runs in the background; wait for its banner entry.
    if notices.changed().await.is_ok() {
        match notices.borrow_and_update().clone() {
            Some(Notice::ClickRecorded { ad_id }) => println!("Click recorded for {}", ad_id),
            Some(Notice::ClickFailed { ad_id, reason }) => {
                println!("Click for {} not recorded: {}", ad_id, reason)
            }
            None => {}
        }
    }

    sessions.logout().await?;
    println!("Signed out.");
    Ok(())
}
