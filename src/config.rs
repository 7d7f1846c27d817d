//! Environment-driven configuration.
//!
//! Database connection parameters are mandatory; everything else has a
//! default. [`AppConfig::from_env`] reads the process environment after
//! loading an optional `.env` file, while [`AppConfig::from_lookup`] accepts
//! any key lookup so tests never touch the real environment.

use std::fmt;
use std::net::SocketAddr;
use thiserror::Error;

const DEFAULT_API_PORT: u16 = 8080;
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_POOL_SIZE: u32 = 10;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("missing required environment variable {0}")]
    MissingVariable(&'static str),

    /// A numeric variable could not be parsed.
    #[error("invalid value '{value}' for {name}")]
    InvalidNumber {
        /// Variable name.
        name: &'static str,
        /// Rejected value.
        value: String,
    },
}

/// `PostgreSQL` connection settings.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Role to connect as.
    pub user: String,
    /// Password for [`DatabaseConfig::user`].
    pub password: String,
    /// Database name.
    pub name: String,
    /// Server host name or address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// libpq `sslmode` value.
    pub ssl_mode: String,
    /// Maximum number of pooled connections.
    pub pool_size: u32,
}

impl DatabaseConfig {
    /// Renders a libpq keyword/value connection string.
    #[must_use]
    pub fn connection_string(&self) -> String {
        format!(
            "user={} password={} dbname={} host={} port={} sslmode={}",
            conninfo_value(&self.user),
            conninfo_value(&self.password),
            conninfo_value(&self.name),
            conninfo_value(&self.host),
            self.port,
            conninfo_value(&self.ssl_mode),
        )
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("ssl_mode", &self.ssl_mode)
            .field("pool_size", &self.pool_size)
            .finish()
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port the HTTP server listens on.
    pub api_port: u16,
    /// Database connection settings.
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Reads configuration from the process environment, loading `.env`
    /// first when present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a
    /// numeric variable is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is fine; variables may come from the process.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a
    /// numeric variable is malformed. A `DB_POOL_SIZE` of zero counts as
    /// malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::MissingVariable(name))
        };

        let database = DatabaseConfig {
            user: required("DB_USER")?,
            password: required("DB_PASSWORD")?,
            name: required("DB_NAME")?,
            host: required("DB_HOST")?,
            ssl_mode: required("DB_SSL_MODE")?,
            port: parse_or(&lookup, "DB_PORT", DEFAULT_DB_PORT)?,
            pool_size: parse_pool_size(&lookup)?,
        };

        Ok(Self {
            api_port: parse_or(&lookup, "API_PORT", DEFAULT_API_PORT)?,
            database,
        })
    }

    /// Returns the address the HTTP server binds to.
    #[must_use]
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.api_port))
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name).filter(|value| !value.is_empty()) {
        None => Ok(default),
        Some(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
    }
}

fn parse_pool_size<F>(lookup: &F) -> Result<u32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    const NAME: &str = "DB_POOL_SIZE";
    match parse_or(lookup, NAME, DEFAULT_POOL_SIZE)? {
        0 => Err(ConfigError::InvalidNumber {
            name: NAME,
            value: lookup(NAME).unwrap_or_default(),
        }),
        size => Ok(size),
    }
}

/// Quotes a value for a libpq keyword/value connection string.
///
/// Wraps in single quotes and backslash-escapes embedded quotes and
/// backslashes.
fn conninfo_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('\'');
    for ch in value.chars() {
        if ch == '\'' || ch == '\\' {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('\'');
    escaped
}
