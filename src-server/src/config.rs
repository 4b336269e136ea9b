//! Server Configuration
//!
//! Loaded from environment variables (after `.env`), with defaults for
//! local development. Unparseable values fall back to their default and
//! leave a warning to be logged once the logger is up.

use std::path::PathBuf;

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8017;
pub const DEFAULT_DATABASE_PATH: &str = "kanban_board.db";
pub const DEFAULT_LOG_DIR: &str = "logs";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildMode {
    #[default]
    Dev,
    Production,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub log_dir: PathBuf,
    pub build_mode: BuildMode,
    /// Allowed origins in production
    pub cors_whitelist: Vec<String>,
    /// Problems found while reading the environment
    pub warnings: Vec<String>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut warnings = Vec::new();

        let host = lookup("APP_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("APP_PORT") {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                warnings.push(format!("APP_PORT={:?} is not a port, using {}", raw, DEFAULT_PORT));
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let build_mode = match lookup("BUILD_MODE").as_deref().map(str::trim) {
            None | Some("dev") => BuildMode::Dev,
            Some("production") => BuildMode::Production,
            Some(other) => {
                warnings.push(format!("BUILD_MODE={:?} is unknown, using dev", other));
                BuildMode::Dev
            }
        };

        let cors_whitelist = lookup("CORS_WHITELIST")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            host,
            port,
            database_path: PathBuf::from(lookup("DATABASE_PATH").unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string())),
            log_dir: PathBuf::from(lookup("LOG_DIR").unwrap_or_else(|| DEFAULT_LOG_DIR.to_string())),
            build_mode,
            cors_whitelist,
            warnings,
        }
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Any origin in dev, only whitelisted origins in production
    pub fn cors_layer(&self) -> CorsLayer {
        let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
        match self.build_mode {
            BuildMode::Dev => layer.allow_origin(Any),
            BuildMode::Production => {
                let origins: Vec<HeaderValue> = self
                    .cors_whitelist
                    .iter()
                    .filter_map(|o| HeaderValue::from_str(o).ok())
                    .collect();
                layer.allow_origin(AllowOrigin::list(origins))
            }
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr(), "0.0.0.0:8017");
        assert_eq!(config.database_path, PathBuf::from("kanban_board.db"));
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert_eq!(config.build_mode, BuildMode::Dev);
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn test_reads_environment() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("APP_HOST", "127.0.0.1"),
            ("APP_PORT", "9000"),
            ("BUILD_MODE", "production"),
            ("CORS_WHITELIST", "https://a.example, https://b.example,"),
        ]));
        assert_eq!(config.socket_addr(), "127.0.0.1:9000");
        assert_eq!(config.build_mode, BuildMode::Production);
        assert_eq!(config.cors_whitelist, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn test_bad_values_fall_back_with_warning() {
        let config = ServerConfig::from_lookup(lookup(&[("APP_PORT", "eighty"), ("BUILD_MODE", "staging")]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.build_mode, BuildMode::Dev);
        assert_eq!(config.warnings.len(), 2);
    }
}
