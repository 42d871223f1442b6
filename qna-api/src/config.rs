use config::{
    Config as ConfigBuilder, ConfigError, Environment, File, FileFormat, FileSourceFile, Map,
};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    /// Log every SQL statement sqlx executes
    pub log_statements: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

type ConfigFile = File<FileSourceFile, FileFormat>;

impl AppConfig {
    /// Loads defaults, then `qna.toml` in the working directory, then
    /// `<config_dir>/qna/api.toml`, then `explicit` if given, then `QNA_*` env vars.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut files = Vec::new();

        if let Ok(current_dir) = env::current_dir() {
            let config_path = current_dir.join("qna.toml");
            if config_path.exists() {
                files.push(File::from(config_path));
            }
        }

        if let Some(config_path) = user_config_path() {
            files.push(File::from(config_path).required(false));
        }

        if let Some(path) = explicit {
            files.push(File::from(path.to_path_buf()));
        }

        Self::from_sources(files, env_source(None))
    }

    /// Defaults, then `files` in order, then `env`; later sources win.
    fn from_sources(files: Vec<ConfigFile>, env: Environment) -> Result<Self, ConfigError> {
        let mut settings = defaults()?;
        for file in files {
            settings = settings.add_source(file);
        }
        settings.add_source(env).build()?.try_deserialize()
    }
}

/// QNA_DATABASE__URL, QNA_SERVER__PORT, ...; `vars` replaces the process environment.
fn env_source(vars: Option<Map<String, String>>) -> Environment {
    Environment::with_prefix("QNA")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .source(vars)
}

fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    ConfigBuilder::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000)?
        .set_default("database.url", "sqlite://qna.db")?
        .set_default("database.max_connections", 10)?
        .set_default("database.acquire_timeout_secs", 30)?
        .set_default("database.log_statements", false)?
        .set_default("logging.level", "info")
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("qna/api.toml"))
}
