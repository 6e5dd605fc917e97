pub mod rest;
pub mod state;

// Re-export the handlers to make them easily accessible to the binary that
// builds the web server router.
pub use rest::{analytics_handler, record_click_handler, serve_ad_handler};
