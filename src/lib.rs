pub mod app;
pub mod board;
pub mod config;
pub mod counts;
pub mod errors;
pub mod handlers;
pub mod ledger;
pub mod models;
pub mod relay;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::{load_cache, persist_cache};
