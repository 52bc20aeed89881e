/**
 * Server Configuration
 *
 * Settings are read from the environment (after `dotenv` has loaded any
 * `.env` file). Every setting except the JWT secret has a default suitable
 * for local development.
 *
 * | variable            | default                        |
 * |---------------------|--------------------------------|
 * | `DATABASE_URL`      | `sqlite://daybook.db?mode=rwc` |
 * | `SERVER_PORT`       | `3000`                         |
 * | `JWT_SECRET`        | development fallback, warned   |
 * | `FRONTEND_URL`      | unset: any origin allowed      |
 * | `BCRYPT_COST`       | `bcrypt::DEFAULT_COST`         |
 * | `REALTIME_CAPACITY` | `1000`                         |
 *
 * Tests build a config directly with [`ServerConfig::builder`].
 */

use std::env;
use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://daybook.db?mode=rwc";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_REALTIME_CAPACITY: usize = 1000;
pub const DEFAULT_TOKEN_TTL_DAYS: u64 = 30;
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;
const DEVELOPMENT_JWT_SECRET: &str = "daybook-development-secret-change-me";

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        min: u64,
        max: u64,
        value: u64,
    },
}

/// Runtime settings for the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
    /// CORS origin; `None` allows any origin
    pub frontend_url: Option<String>,
    pub bcrypt_cost: u32,
    /// Buffered events per real-time subscriber before it starts lagging
    pub realtime_capacity: usize,
    pub token_ttl_days: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            port: DEFAULT_PORT,
            jwt_secret: DEVELOPMENT_JWT_SECRET.to_string(),
            frontend_url: None,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            realtime_capacity: DEFAULT_REALTIME_CAPACITY,
            token_ttl_days: DEFAULT_TOKEN_TTL_DAYS,
        }
    }
}

fn parse_var<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { name, value: raw }),
        _ => Ok(None),
    }
}

fn string_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();

        if let Some(url) = string_var("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(port) = parse_var("SERVER_PORT")? {
            builder = builder.port(port);
        }
        match string_var("JWT_SECRET") {
            Some(secret) => builder = builder.jwt_secret(secret),
            None => tracing::warn!("JWT_SECRET not set. Using the development secret."),
        }
        if let Some(origin) = string_var("FRONTEND_URL") {
            builder = builder.frontend_url(origin);
        }
        if let Some(cost) = parse_var("BCRYPT_COST")? {
            builder = builder.bcrypt_cost(cost);
        }
        if let Some(capacity) = parse_var("REALTIME_CAPACITY")? {
            builder = builder.realtime_capacity(capacity);
        }
        if let Some(days) = parse_var("TOKEN_TTL_DAYS")? {
            builder = builder.token_ttl_days(days);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::OutOfRange {
                name: "BCRYPT_COST",
                min: u64::from(MIN_BCRYPT_COST),
                max: u64::from(MAX_BCRYPT_COST),
                value: u64::from(self.bcrypt_cost),
            });
        }
        if self.realtime_capacity == 0 {
            return Err(ConfigError::OutOfRange {
                name: "REALTIME_CAPACITY",
                min: 1,
                max: usize::MAX as u64,
                value: 0,
            });
        }
        Ok(())
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    config: ServerConfig,
}

impl ServerConfigBuilder {
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.config.database_url = url.into();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.config.jwt_secret = secret.into();
        self
    }

    pub fn frontend_url(mut self, origin: impl Into<String>) -> Self {
        self.config.frontend_url = Some(origin.into());
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.config.bcrypt_cost = cost;
        self
    }

    pub fn realtime_capacity(mut self, capacity: usize) -> Self {
        self.config.realtime_capacity = capacity;
        self
    }

    pub fn token_ttl_days(mut self, days: u64) -> Self {
        self.config.token_ttl_days = days;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
