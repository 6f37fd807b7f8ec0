use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("expected `pretty` or `json`, got `{}`", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub mock_fetch_delay_ms: u64,
    pub log_format: LogFormat,
    pub default_requested_by: Option<String>,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            mock_fetch_delay_ms: get_env_parse_or("MOCK_FETCH_DELAY_MS", 1000)?,
            log_format: get_env_parse_or("LOG_FORMAT", LogFormat::Pretty)?,
            default_requested_by: env::var("DEFAULT_REQUESTED_BY")
                .ok()
                .filter(|v| !v.trim().is_empty()),
        })
    }

    pub fn mock_fetch_delay(&self) -> Duration {
        Duration::from_millis(self.mock_fetch_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mock_fetch_delay_ms: 1000,
            log_format: LogFormat::Pretty,
            default_requested_by: None,
        }
    }
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
