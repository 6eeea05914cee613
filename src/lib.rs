pub mod bundle;
pub mod config;
pub mod metrics;
pub mod server;
pub mod ui;

pub use config::{Config, DashboardConfig, LoggingConfig, ServerConfig};
pub use metrics::Metrics;
