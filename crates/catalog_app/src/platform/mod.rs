mod app;
mod config;
mod effects;
mod logging;
mod persistence;
mod timer;
mod ui;

pub use app::run_app;
pub use config::{AppConfig, DEFAULT_CONFIG_FILE};
pub use logging::{initialize as initialize_logging, LogDestination};
