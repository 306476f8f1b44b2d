use crate::errors::ServerError;
use std::env;
use std::net::SocketAddr;

/// Runtime settings, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket the HTTP server binds to
    pub addr: SocketAddr,
    /// SQLite file holding the listings collection
    pub db_path: String,
    /// Size of astra's worker pool
    pub max_workers: usize,
    /// Path the listings resource is mounted under, e.g. `/listings`
    pub base_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `LISTINGS_ADDR` (optional, default: `127.0.0.1:3000`)
    /// - `LISTINGS_DB` (optional, default: `listings.sqlite3`)
    /// - `LISTINGS_WORKERS` (optional, default: 8)
    /// - `LISTINGS_BASE_PATH` (optional, default: `/listings`)
    pub fn from_env() -> Result<Self, ServerError> {
        let addr = env::var("LISTINGS_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()
            .map_err(|e| ServerError::Config(format!("LISTINGS_ADDR is not a socket address: {e}")))?;
        let db_path = env::var("LISTINGS_DB").unwrap_or_else(|_| "listings.sqlite3".to_string());
        let max_workers = env::var("LISTINGS_WORKERS")
            .unwrap_or_else(|_| "8".to_string())
            .parse()
            .map_err(|e| ServerError::Config(format!("LISTINGS_WORKERS must be a number: {e}")))?;
        let base_path = env::var("LISTINGS_BASE_PATH").unwrap_or_else(|_| "/listings".to_string());

        Ok(Self {
            addr,
            db_path,
            max_workers,
            base_path: normalize_base_path(&base_path),
        })
    }
}

/// Leading slash, no trailing slash. The root mount is the empty string.
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

/// URL of the index for a normalized base path; the root mount answers at `/`.
pub fn mount_root(base_path: &str) -> &str {
    if base_path.is_empty() {
        "/"
    } else {
        base_path
    }
}
