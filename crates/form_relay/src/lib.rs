//! Contact-form relay: accepts the site's form posts, attaches the
//! server-held Web3Forms access key and forwards them upstream.

pub mod api;
pub mod app_state;
pub mod config;
pub mod relay;

pub use api::build_router;
pub use app_state::AppState;
