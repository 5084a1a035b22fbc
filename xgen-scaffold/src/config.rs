//! Scaffold configuration.
//!
//! Everything that shapes a generation run apart from the names themselves.
//! Values come from defaults, an optional TOML file, and CLI overrides, in
//! that order.

use std::{fmt, path::Path, str::FromStr};

use serde::Deserialize;
use xenon_gen_core::{Error, Result};

/// Database drivers the generated configuration can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Driver {
    #[default]
    Mysql,
    Postgres,
    Sqlite,
}

impl Driver {
    /// Returns the driver identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Driver::Mysql => "mysql",
            Driver::Postgres => "postgres",
            Driver::Sqlite => "sqlite",
        }
    }

    /// Conventional port of the database server (0 for file databases).
    pub fn default_port(&self) -> u16 {
        match self {
            Driver::Mysql => 3306,
            Driver::Postgres => 5432,
            Driver::Sqlite => 0,
        }
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Driver {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mysql" => Ok(Driver::Mysql),
            "postgres" | "postgresql" => Ok(Driver::Postgres),
            "sqlite" | "sqlite3" => Ok(Driver::Sqlite),
            _ => Err(format!(
                "unknown driver '{}', expected 'mysql', 'postgres' or 'sqlite'",
                s
            )),
        }
    }
}

/// `[database]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub driver: Driver,
    pub host: String,
    /// Falls back to the driver's conventional port
    pub port: Option<u16>,
    /// Connection string for table introspection
    pub conn: Option<String>,
    /// Tables to generate models for
    pub tables: Vec<String>,
}

impl DatabaseConfig {
    /// The configured port, or the driver's default.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or_else(|| self.driver.default_port())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            driver: Driver::default(),
            host: "localhost".to_string(),
            port: None,
            conn: None,
            tables: Vec::new(),
        }
    }
}

/// `[server]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub http_port: u16,
    pub run_mode: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: 8080,
            run_mode: "dev".to_string(),
        }
    }
}

/// Configuration passed into the emitter for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Write into non-empty destinations and replace existing files
    pub force: bool,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

impl FromStr for ScaffoldConfig {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

impl ScaffoldConfig {
    /// Load a configuration file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        content.parse().map_err(|e| Error::config(path, e))
    }

    /// Whether any database introspection input was supplied
    pub fn wants_introspection(&self) -> bool {
        self.database.conn.is_some() || !self.database.tables.is_empty()
    }
}
