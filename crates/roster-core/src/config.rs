//! Configuration loading and backend selection
//!
//! The configuration is a JSON document with a `repository` discriminator.
//! `"postgres"` selects the relational backend and makes the five connection
//! fields mandatory; any other value selects the in-memory backend.
//! Environment variables prefixed with `ROSTER_` override file values.

use crate::error::{Result, RosterError};
use serde::Deserialize;
use std::path::Path;

/// Default configuration file, resolved relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";

/// Discriminator value selecting the relational backend
pub const POSTGRES_REPOSITORY: &str = "postgres";

const ENV_PREFIX: &str = "ROSTER";

/// Which storage strategy serves the process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Memory,
    Postgres,
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::Memory => write!(f, "memory"),
            BackendKind::Postgres => write!(f, "postgres"),
        }
    }
}

/// Parameters for opening a relational connection
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionParams {
    pub dbname: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
}

impl std::fmt::Debug for ConnectionParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionParams")
            .field("dbname", &self.dbname)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

/// Resolved backend selection; `Memory` is the "no connection" sentinel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendConfig {
    Memory,
    Postgres(ConnectionParams),
}

impl BackendConfig {
    pub fn kind(&self) -> BackendKind {
        match self {
            BackendConfig::Memory => BackendKind::Memory,
            BackendConfig::Postgres(_) => BackendKind::Postgres,
        }
    }
}

/// Full startup configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub bind_address: String,
    /// Map not-found and faults to 4xx/5xx instead of always answering 200
    pub status_codes: bool,
}

/// Shape of the configuration document before backend resolution
#[derive(Debug, Deserialize)]
struct RawConfig {
    repository: String,
    dbname: Option<String>,
    user: Option<String>,
    password: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    bind_address: Option<String>,
    #[serde(default)]
    status_codes: bool,
}

impl AppConfig {
    /// Load from a JSON file, layering `ROSTER_*` environment overrides on top
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(RosterError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path).format(config::FileFormat::Json))
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?;

        Self::resolve(settings.try_deserialize()?)
    }

    /// Parse a JSON document directly, without environment overrides
    pub fn from_json(content: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(content, config::FileFormat::Json))
            .build()?;

        Self::resolve(settings.try_deserialize()?)
    }

    fn resolve(raw: RawConfig) -> Result<Self> {
        let backend = if raw.repository == POSTGRES_REPOSITORY {
            BackendConfig::Postgres(ConnectionParams {
                dbname: required(raw.dbname, "dbname")?,
                user: required(raw.user, "user")?,
                password: required(raw.password, "password")?,
                host: required(raw.host, "host")?,
                port: required(raw.port, "port")?,
            })
        } else {
            BackendConfig::Memory
        };

        Ok(Self {
            backend,
            bind_address: raw
                .bind_address
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            status_codes: raw.status_codes,
        })
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| {
        RosterError::Config(format!(
            "missing field `{}` for {} repository",
            field, POSTGRES_REPOSITORY
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSTGRES_JSON: &str = r#"{
        "repository": "postgres",
        "dbname": "roster",
        "user": "admin",
        "password": "hunter2",
        "host": "db.local",
        "port": 5432
    }"#;

    #[test]
    fn test_other_discriminator_selects_memory() {
        let config = AppConfig::from_json(r#"{"repository": "memory"}"#).unwrap();
        assert_eq!(config.backend, BackendConfig::Memory);
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
        assert!(!config.status_codes);

        let config = AppConfig::from_json(r#"{"repository": "anything"}"#).unwrap();
        assert_eq!(config.backend.kind(), BackendKind::Memory);
    }

    #[test]
    fn test_postgres_requires_connection_fields() {
        let config = AppConfig::from_json(POSTGRES_JSON).unwrap();
        match config.backend {
            BackendConfig::Postgres(params) => {
                assert_eq!(params.dbname, "roster");
                assert_eq!(params.user, "admin");
                assert_eq!(params.password, "hunter2");
                assert_eq!(params.host, "db.local");
                assert_eq!(params.port, 5432);
            }
            other => panic!("expected postgres backend, got {:?}", other),
        }
    }

    #[test]
    fn test_port_accepts_numeric_string() {
        let json = POSTGRES_JSON.replace("5432", "\"6543\"");
        let config = AppConfig::from_json(&json).unwrap();
        match config.backend {
            BackendConfig::Postgres(params) => assert_eq!(params.port, 6543),
            other => panic!("expected postgres backend, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_postgres_field_is_config_error() {
        let json = r#"{"repository": "postgres", "dbname": "roster", "user": "admin",
                       "password": "x", "port": 5432}"#;
        let err = AppConfig::from_json(json).unwrap_err();
        assert!(matches!(err, RosterError::Config(_)));
        assert!(err.to_string().contains("host"), "{}", err);
    }

    #[test]
    fn test_missing_repository_is_config_error() {
        let err = AppConfig::from_json(r#"{"dbname": "roster"}"#).unwrap_err();
        assert!(matches!(err, RosterError::Config(_)));
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = AppConfig::from_json(r#"{"repository": "#).unwrap_err();
        assert!(matches!(err, RosterError::Config(_)));
    }

    #[test]
    fn test_optional_server_settings() {
        let config = AppConfig::from_json(
            r#"{"repository": "memory", "bind_address": "0.0.0.0:8080", "status_codes": true}"#,
        )
        .unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert!(config.status_codes);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, POSTGRES_JSON).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.backend.kind(), BackendKind::Postgres);
    }

    #[test]
    fn test_load_applies_environment_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, POSTGRES_JSON).unwrap();

        std::env::set_var("ROSTER_PASSWORD", "fromenv");
        std::env::set_var("ROSTER_PORT", "6000");
        std::env::set_var("ROSTER_STATUS_CODES", "true");
        let loaded = AppConfig::load(&path);
        std::env::remove_var("ROSTER_PASSWORD");
        std::env::remove_var("ROSTER_PORT");
        std::env::remove_var("ROSTER_STATUS_CODES");

        let config = loaded.unwrap();
        assert!(config.status_codes);
        match config.backend {
            BackendConfig::Postgres(params) => {
                assert_eq!(params.password, "fromenv");
                assert_eq!(params.port, 6000);
                assert_eq!(params.dbname, "roster");
            }
            other => panic!("expected postgres backend, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, RosterError::Config(_)));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = AppConfig::from_json(POSTGRES_JSON).unwrap();
        let rendered = format!("{:?}", config.backend);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
