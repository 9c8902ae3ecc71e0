use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

/// 10 MiB, the upload ceiling both dashboards advertise.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;
pub const DEFAULT_ANALYSIS_DELAY_MS: u64 = 3000;
pub const DEFAULT_RESULT_CAP: usize = 10;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub analysis_delay: Duration,
    pub max_upload_bytes: u64,
    pub default_result_cap: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            analysis_delay: Duration::from_millis(DEFAULT_ANALYSIS_DELAY_MS),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            default_result_cap: DEFAULT_RESULT_CAP,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            analysis_delay: Duration::from_millis(parse_env(
                "ANALYSIS_DELAY_MS",
                DEFAULT_ANALYSIS_DELAY_MS,
            )?),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            default_result_cap: parse_env("DEFAULT_RESULT_CAP", DEFAULT_RESULT_CAP)?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_dashboard_constants() {
        let config = Config::default();
        assert_eq!(config.max_upload_bytes, 10_485_760);
        assert_eq!(config.analysis_delay, Duration::from_secs(3));
        assert_eq!(config.default_result_cap, 10);
    }

    #[test]
    fn test_parse_env_falls_back_when_unset() {
        let value: u64 = parse_env("MATCHER_TEST_SURELY_UNSET_VAR", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("MATCHER_TEST_BAD_PORT", "not-a-port");
        let result: Result<u16> = parse_env("MATCHER_TEST_BAD_PORT", 8080);
        assert!(result.is_err());
        std::env::remove_var("MATCHER_TEST_BAD_PORT");
    }
}
