//! Application configuration structs
//!
//! Loads configuration from environment variables and an optional `.env` file.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use url::form_urlencoded;

/// Main application configuration
///
/// Built once at startup and passed explicitly to whatever composes the
/// persistence and routing layers.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    /// Enables verbose logging, including SQL statements
    pub debug: bool,
}

/// HTTP server bind configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database credentials and pool sizing
#[derive(Clone)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    /// Connections kept open at all times
    pub pool_size: u32,
    /// Extra connections allowed on top of `pool_size` under load
    pub max_overflow: u32,
    /// Maximum lifetime of a pooled connection
    pub pool_recycle: Duration,
}

impl DatabaseConfig {
    /// Connection string with the password percent-encoded.
    ///
    /// Reserved characters such as `@`, `:` and `/` in the password would otherwise
    /// break URL parsing.
    #[must_use]
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user,
            encode_password(&self.password),
            self.host,
            self.port,
            self.name
        )
    }

    /// Upper bound of simultaneously open connections
    #[must_use]
    pub fn max_connections(&self) -> u32 {
        self.pool_size + self.max_overflow
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("user", &self.user)
            .field("password", &"***")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("pool_size", &self.pool_size)
            .field("max_overflow", &self.max_overflow)
            .field("pool_recycle", &self.pool_recycle)
            .finish()
    }
}

/// Token settings. Carried for completeness; no endpoint issues tokens yet.
#[derive(Clone)]
pub struct SecurityConfig {
    pub secret_key: String,
    pub algorithm: String,
    pub access_token_expire_minutes: i64,
}

impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("secret_key", &"***")
            .field("algorithm", &self.algorithm)
            .field(
                "access_token_expire_minutes",
                &self.access_token_expire_minutes,
            )
            .finish()
    }
}

// Default value functions
fn default_db_user() -> String {
    "postgres".to_string()
}

fn default_db_password() -> String {
    "password".to_string()
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_db_port() -> u16 {
    5432
}

fn default_db_name() -> String {
    "depot_db".to_string()
}

fn default_app_name() -> String {
    "Depot API".to_string()
}

fn default_debug() -> bool {
    true
}

fn default_secret_key() -> String {
    "your-secret-key-here-change-in-production".to_string()
}

fn default_algorithm() -> String {
    "HS256".to_string()
}

fn default_access_token_expire_minutes() -> i64 {
    30
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_pool_size() -> u32 {
    10
}

fn default_max_overflow() -> u32 {
    20
}

fn default_pool_recycle_secs() -> u64 {
    3600 // 1 hour
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// A `.env` file in the working directory is read first if present. Variables
    /// already set in the process environment take precedence over the file.
    ///
    /// # Errors
    /// Returns an error if a variable is set but cannot be parsed into its type
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// # Errors
    /// Returns an error if a value is present but cannot be parsed into its type
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let string = |key: &str, default: fn() -> String| lookup(key).unwrap_or_else(default);

        Ok(Self {
            app: AppSettings {
                name: string("APP_NAME", default_app_name),
                debug: match lookup("DEBUG") {
                    Some(raw) => parse_bool(&raw)
                        .ok_or_else(|| ConfigError::InvalidValue("DEBUG", raw))?,
                    None => default_debug(),
                },
            },
            server: ServerConfig {
                host: string("API_HOST", default_host),
                port: parse_var(&lookup, "API_PORT", default_port)?,
            },
            database: DatabaseConfig {
                user: string("DB_USER", default_db_user),
                password: string("DB_PASSWORD", default_db_password),
                host: string("DB_HOST", default_db_host),
                port: parse_var(&lookup, "DB_PORT", default_db_port)?,
                name: string("DB_NAME", default_db_name),
                pool_size: parse_var(&lookup, "DB_POOL_SIZE", default_pool_size)?,
                max_overflow: parse_var(&lookup, "DB_MAX_OVERFLOW", default_max_overflow)?,
                pool_recycle: Duration::from_secs(parse_var(
                    &lookup,
                    "DB_POOL_RECYCLE_SECS",
                    default_pool_recycle_secs,
                )?),
            },
            security: SecurityConfig {
                secret_key: string("SECRET_KEY", default_secret_key),
                algorithm: string("ALGORITHM", default_algorithm),
                access_token_expire_minutes: parse_var(
                    &lookup,
                    "ACCESS_TOKEN_EXPIRE_MINUTES",
                    default_access_token_expire_minutes,
                )?,
            },
        })
    }
}

/// Parse an optional variable, falling back to its default when unset
fn parse_var<F, T>(lookup: &F, key: &'static str, default: fn() -> T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        None => Ok(default()),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "f" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}

fn encode_password(password: &str) -> String {
    // byte_serialize writes spaces as '+', which URL userinfo decoding keeps literally
    form_urlencoded::byte_serialize(password.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
