use crate::{
    CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    LoggingConfig, ServerConfig, SourceConfig, WebSocketConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub websocket: WebSocketConfig,
    pub source: SourceConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for SP_CONFIG_DIR env var, else use ./.sp/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply SP_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: SP_CONFIG_DIR env var > ./.sp/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.websocket.validate()?;
        self.source.validate()?;

        if let Some(ref file) = self.logging.file
            && (Path::new(file).is_absolute() || file.contains(".."))
        {
            return Err(ConfigError::config(
                "logging.file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  websocket: mailbox={}, ping={}s, read={}s, write={}s, max_frame={}B",
            self.websocket.mailbox_capacity,
            self.websocket.ping_interval_secs,
            self.websocket.read_deadline_secs,
            self.websocket.write_deadline_secs,
            self.websocket.max_frame_size
        );
        if self.websocket.allowed_origins.is_empty() {
            info!("  websocket origins: any");
        } else {
            info!(
                "  websocket origins: {}",
                self.websocket.allowed_origins.join(", ")
            );
        }
        info!(
            "  source: {} (tick={}ms, aircraft={})",
            if self.source.enabled {
                "enabled"
            } else {
                "disabled"
            },
            self.source.tick_interval_ms,
            self.source.aircraft_per_tick
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("SP_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("SP_SERVER_PORT", &mut self.server.port);

        // Logging
        Self::apply_env_parse("SP_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SP_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SP_LOG_FILE", &mut self.logging.file);

        // WebSocket
        Self::apply_env_parse(
            "SP_WS_MAILBOX_CAPACITY",
            &mut self.websocket.mailbox_capacity,
        );
        Self::apply_env_parse(
            "SP_WS_PING_INTERVAL_SECS",
            &mut self.websocket.ping_interval_secs,
        );
        Self::apply_env_parse(
            "SP_WS_READ_DEADLINE_SECS",
            &mut self.websocket.read_deadline_secs,
        );
        Self::apply_env_parse(
            "SP_WS_WRITE_DEADLINE_SECS",
            &mut self.websocket.write_deadline_secs,
        );
        Self::apply_env_parse("SP_WS_MAX_FRAME_SIZE", &mut self.websocket.max_frame_size);
        Self::apply_env_list(
            "SP_WS_ALLOWED_ORIGINS",
            &mut self.websocket.allowed_origins,
        );

        // Source
        Self::apply_env_bool("SP_SOURCE_ENABLED", &mut self.source.enabled);
        Self::apply_env_parse(
            "SP_SOURCE_TICK_INTERVAL_MS",
            &mut self.source.tick_interval_ms,
        );
        Self::apply_env_parse(
            "SP_SOURCE_AIRCRAFT_PER_TICK",
            &mut self.source.aircraft_per_tick,
        );
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Comma-separated, blanks dropped
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
    }
}
