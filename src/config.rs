use std::path::PathBuf;

use crate::theme::domain::ThemePreference;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} has invalid value {value:?}: {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// JSON content file; embedded content when unset.
    pub content_path: Option<PathBuf>,
    /// Redis theme store; in-memory store when unset.
    pub redis_url: Option<String>,
    pub default_theme: ThemePreference,
    pub typing_stagger_ms: u64,
    /// Seconds a stored theme outlives its last write.
    pub theme_ttl_secs: u64,
    /// Most visitors the in-memory theme store holds.
    pub theme_store_capacity: usize,
}

impl AppConfig {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 8080;
    pub const DEFAULT_THEME: ThemePreference = ThemePreference::Dark;
    pub const DEFAULT_TYPING_STAGGER_MS: u64 = 35;
    pub const DEFAULT_THEME_TTL_SECS: u64 = 60 * 60 * 24 * 365;
    pub const DEFAULT_THEME_STORE_CAPACITY: usize = 10_000;

    /// Loads `.env.{RUST_ENV}` (falling back to `.env`), then reads the
    /// process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                name: "PORT",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => Self::DEFAULT_PORT,
        };

        let default_theme = match var("DEFAULT_THEME") {
            Some(raw) => raw
                .parse::<ThemePreference>()
                .map_err(|e| ConfigError::InvalidValue {
                    name: "DEFAULT_THEME",
                    value: raw.clone(),
                    reason: e.to_string(),
                })?,
            None => Self::DEFAULT_THEME,
        };

        let typing_stagger_ms = match var("TYPING_STAGGER_MS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                name: "TYPING_STAGGER_MS",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => Self::DEFAULT_TYPING_STAGGER_MS,
        };

        let theme_ttl_secs = match var("THEME_TTL_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                Ok(_) => {
                    return Err(ConfigError::InvalidValue {
                        name: "THEME_TTL_SECS",
                        value: raw.clone(),
                        reason: "must be at least 1".to_string(),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::InvalidValue {
                        name: "THEME_TTL_SECS",
                        value: raw.clone(),
                        reason: e.to_string(),
                    })
                }
            },
            None => Self::DEFAULT_THEME_TTL_SECS,
        };

        let theme_store_capacity = match var("THEME_STORE_CAPACITY") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => capacity,
                Ok(_) => {
                    return Err(ConfigError::InvalidValue {
                        name: "THEME_STORE_CAPACITY",
                        value: raw.clone(),
                        reason: "must be at least 1".to_string(),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::InvalidValue {
                        name: "THEME_STORE_CAPACITY",
                        value: raw.clone(),
                        reason: e.to_string(),
                    })
                }
            },
            None => Self::DEFAULT_THEME_STORE_CAPACITY,
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| Self::DEFAULT_HOST.to_string()),
            port,
            content_path: var("CONTENT_PATH").map(PathBuf::from),
            redis_url: var("REDIS_URL"),
            default_theme,
            typing_stagger_ms,
            theme_ttl_secs,
            theme_store_capacity,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn redis_uses_tls(&self) -> bool {
        self.redis_url
            .as_deref()
            .is_some_and(|url| url.starts_with("rediss://"))
    }
}
