//! Runtime settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `TRIVIA_*` environment variables and an
//! optional configuration file, in OrthoConfig's usual precedence.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::pagination::{DEFAULT_PAGE_SIZE, PageSize};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Settings errors surfaced at startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address {value:?}: {message}")]
    BindAddr { value: String, message: String },
    #[error("questions_per_page must be at least 1")]
    PageSize,
    #[error("pool_max_size must be at least 1")]
    PoolSize,
}

/// Trivia API settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TRIVIA")]
pub struct TriviaSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL. Without one the API serves an in-memory
    /// store seeded with the stock categories.
    pub database_url: Option<String>,
    /// Maximum pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Questions per listing page.
    pub questions_per_page: Option<usize>,
    /// Answer an empty category listing with 405 instead of 404.
    #[ortho_config(default = true)]
    pub legacy_category_status: bool,
}

impl TriviaSettings {
    /// Parsed listen address, defaulting to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err: std::net::AddrParseError| SettingsError::BindAddr {
            value: raw.to_owned(),
            message: err.to_string(),
        })
    }

    /// Database URL, treating a blank value as absent.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn pool_max_size(&self) -> Result<u32, SettingsError> {
        match self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE) {
            0 => Err(SettingsError::PoolSize),
            size => Ok(size),
        }
    }

    pub fn page_size(&self) -> Result<PageSize, SettingsError> {
        PageSize::new(self.questions_per_page.unwrap_or(DEFAULT_PAGE_SIZE))
            .ok_or(SettingsError::PageSize)
    }
}
