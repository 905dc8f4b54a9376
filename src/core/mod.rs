mod config;
pub use config::{AppConfig, DEFAULT_API_HOSTNAME, DEFAULT_HISTORY_BUDGET, DEFAULT_MODEL};
