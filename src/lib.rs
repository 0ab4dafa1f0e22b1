pub mod app;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod handlers;
pub mod login;
pub mod models;
pub mod price;
pub mod purchase;
pub mod state;
pub mod storage;
pub mod ui;
pub mod views;

#[cfg(test)]
pub(crate) mod testing;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::SessionStore;
