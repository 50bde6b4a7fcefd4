mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod source_config;
mod websocket_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use source_config::SourceConfig;
pub use websocket_config::WebSocketConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const CONFIG_DIR_ENV: &str = "SP_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".sp";
const CONFIG_FILE_NAME: &str = "config.toml";
