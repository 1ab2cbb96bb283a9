//! Profile server configuration

use std::path::PathBuf;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Default request body limit; base64 photos exceed axum's 2 MiB default
const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Profile server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// Schema used as `search_path` on every pooled connection
    pub database_schema: String,
    /// Pool size (default: 5 x available parallelism)
    pub db_max_connections: u32,
    /// Bind host
    pub http_host: String,
    /// Bind port
    pub http_port: u16,
    /// Ordered roots tried when writing and reading photos
    pub photo_search_roots: Vec<PathBuf>,
    /// Image directory below a root
    pub photo_image_dir: String,
    /// Delete the previous photo file after a successful re-upload
    pub photo_prune_previous: bool,
    /// Request body limit in bytes
    pub max_body_bytes: usize,
    /// Environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BoxError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let database_schema = var("DATABASE_SCHEMA").unwrap_or_else(|| "public".into());
        if !is_plain_identifier(&database_schema) {
            return Err(format!("DATABASE_SCHEMA '{database_schema}' is not a plain identifier").into());
        }

        let photo_search_roots: Vec<PathBuf> = var("PHOTO_SEARCH_ROOTS")
            .unwrap_or_else(|| "../..,..,.".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .collect();
        if photo_search_roots.is_empty() {
            return Err("PHOTO_SEARCH_ROOTS must name at least one directory".into());
        }

        Ok(Self {
            database_url: var("DATABASE_URL").ok_or("DATABASE_URL must be set")?,
            database_schema,
            db_max_connections: var("DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or_else(default_max_connections),
            http_host: var("HTTP_HOST").unwrap_or_else(|| "127.0.0.1".into()),
            http_port: var("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            photo_search_roots,
            photo_image_dir: var("PHOTO_IMAGE_DIR").unwrap_or_else(|| "public/image".into()),
            photo_prune_previous: var("PHOTO_PRUNE_PREVIOUS")
                .map(|v| parse_bool(&v))
                .unwrap_or(false),
            max_body_bytes: var("MAX_BODY_BYTES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_BODY_BYTES),
            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

fn default_max_connections() -> u32 {
    let cpus = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    (cpus * 5) as u32
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
