use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;

pub const DEFAULT_JWT_SECRET: &str = "your_secret_key";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub jwt_expires_minutes: i64,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env_or("SERVER_ADDRESS", "127.0.0.1:5000"),
            database_url: get_env_or("DATABASE_URL", "sqlite://survey.db"),
            database_max_connections: get_env_parse_or("DATABASE_MAX_CONNECTIONS", 5)?,
            jwt_secret: get_env_or("JWT_SECRET_KEY", DEFAULT_JWT_SECRET),
            jwt_expires_minutes: get_env_parse_or("JWT_EXPIRES_MINUTES", 15)?,
            log_format: parse_log_format(&get_env_or("LOG_FORMAT", "text"))?,
        })
    }

    /// Settings for an in-memory database, used by tests and local tooling.
    pub fn in_memory(jwt_secret: &str) -> Self {
        Self {
            server_address: "127.0.0.1:0".to_string(),
            database_url: "sqlite::memory:".to_string(),
            database_max_connections: 1,
            jwt_secret: jwt_secret.to_string(),
            jwt_expires_minutes: 15,
            log_format: LogFormat::Text,
        }
    }

    pub fn uses_default_jwt_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        _ => Ok(default),
    }
}

fn parse_log_format(raw: &str) -> Result<LogFormat> {
    match raw.to_ascii_lowercase().as_str() {
        "text" | "pretty" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        other => Err(Error::Config(format!(
            "Invalid value for LOG_FORMAT: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_is_case_insensitive() {
        assert_eq!(parse_log_format("JSON").unwrap(), LogFormat::Json);
        assert_eq!(parse_log_format("text").unwrap(), LogFormat::Text);
        assert!(parse_log_format("xml").is_err());
    }

    #[test]
    fn in_memory_config_uses_single_connection() {
        let config = Config::in_memory("secret");
        assert_eq!(config.database_max_connections, 1);
        assert!(!config.uses_default_jwt_secret());
    }
}
