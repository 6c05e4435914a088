// Configuration loaded from environment variables.
// Decision: DB_* variables default to a local development database
// Decision: DATABASE_URL, when set, takes precedence over the individual DB_* settings
// Decision: Empty variables are treated as unset

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Address the HTTP server binds to
pub const LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Origins allowed to make credentialed cross-origin requests by default
pub const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:3000"];

/// Storage backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageMode {
    /// PostgreSQL (production)
    #[default]
    Postgres,
    /// In-memory store, lost on restart (dev mode)
    Memory,
}

impl StorageMode {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StorageMode::Memory,
            _ => StorageMode::Postgres,
        }
    }
}

/// PostgreSQL connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    /// Full connection URL; overrides the fields above when set
    pub url: Option<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            name: "fullstack_db".to_string(),
            url: None,
        }
    }
}

impl DatabaseConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = match lookup("DB_PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "DB_PORT is not a valid port, using default");
                defaults.port
            }),
            None => defaults.port,
        };

        Self {
            host: lookup("DB_HOST").unwrap_or(defaults.host),
            port,
            user: lookup("DB_USER").unwrap_or(defaults.user),
            password: lookup("DB_PASSWORD").unwrap_or(defaults.password),
            name: lookup("DB_NAME").unwrap_or(defaults.name),
            url: lookup("DATABASE_URL"),
        }
    }

    /// Build sqlx connection options.
    /// Fails only when DATABASE_URL is set and cannot be parsed.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url);
        }

        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(PgSslMode::Disable))
    }

    /// Connection target for logs, without credentials
    pub fn display_target(&self) -> String {
        if self.url.is_some() {
            "DATABASE_URL".to_string()
        } else {
            format!("{}:{}/{}", self.host, self.port, self.name)
        }
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl CorsConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        // Example: CORS_ALLOWED_ORIGINS="https://app.example.com,https://admin.example.com"
        let origins: Vec<String> = lookup("CORS_ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        if origins.is_empty() {
            Self::default()
        } else {
            Self {
                allowed_origins: origins,
            }
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub storage: StorageMode,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Self {
            storage: lookup("STORAGE_BACKEND")
                .map(|s| StorageMode::from_str(&s))
                .unwrap_or_default(),
            database: DatabaseConfig::from_lookup(&lookup),
            cors: CorsConfig::from_lookup(&lookup),
        }
    }
}
