//! Widget configuration
//!
//! Read from `<config dir>/shopsearch/config.json` when present, then
//! overridden by `SHOPSEARCH_*` environment variables.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "https://ai-project.technative.dev.f90.co.uk";
pub const DEFAULT_TEAM: &str = "handyman";
pub const DEFAULT_SORT: &str = "title";
pub const DEFAULT_SEARCH_DELAY_MS: u64 = 350;
pub const DEFAULT_PAGE_SIZE: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    pub api_base_url: String,
    pub team: String,
    pub sort: String,
    pub search_delay_ms: u64,
    pub page_size: usize,
    /// No timeout when unset; a hung request keeps the loading indicator on.
    pub request_timeout_secs: Option<u64>,
    /// Drop responses that belong to a superseded search.
    pub ignore_stale_responses: bool,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            team: DEFAULT_TEAM.to_string(),
            sort: DEFAULT_SORT.to_string(),
            search_delay_ms: DEFAULT_SEARCH_DELAY_MS,
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout_secs: None,
            ignore_stale_responses: true,
        }
    }
}

impl ShopConfig {
    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("shopsearch").join("config.json"))
    }

    /// Load from the default location, apply env overrides and validate.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Apply `SHOPSEARCH_*` overrides looked up through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base) = lookup("SHOPSEARCH_API_BASE") {
            self.api_base_url = base;
        }
        if let Some(team) = lookup("SHOPSEARCH_TEAM") {
            self.team = team;
        }
        if let Some(sort) = lookup("SHOPSEARCH_SORT") {
            self.sort = sort;
        }
        if let Some(size) = lookup("SHOPSEARCH_PAGE_SIZE") {
            self.page_size = size.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!("SHOPSEARCH_PAGE_SIZE is not a number: {}", size))
            })?;
        }
        if let Some(delay) = lookup("SHOPSEARCH_DELAY_MS") {
            self.search_delay_ms = delay.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!("SHOPSEARCH_DELAY_MS is not a number: {}", delay))
            })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be at least 1".to_string()));
        }
        for (name, value) in [
            ("api_base_url", &self.api_base_url),
            ("team", &self.team),
            ("sort", &self.sort),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{} must not be empty", name)));
            }
        }
        url::Url::parse(&self.api_base_url)
            .map_err(|e| ConfigError::Invalid(format!("api_base_url: {}", e)))?;
        Ok(())
    }

    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
