// Infrastructure layer: configuration, logging and server lifecycle

pub mod config;
pub mod logging;
pub mod server;

pub use config::{Config, ConfigError};
pub use logging::{LogFormat, LoggingConfig};
pub use server::{start_server, ServerConfig};
