//! HTTP client for the product catalog API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use super::types::{parse_products, Product};
use crate::config::ShopConfig;
use crate::error::CatalogError;

/// Parameters of one catalog search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Trimmed search text; `None` lists the whole catalog
    pub text: Option<String>,
    pub sort: String,
}

impl CatalogQuery {
    pub fn new(input: &str, sort: &str) -> Self {
        let trimmed = input.trim();
        Self {
            text: (!trimmed.is_empty()).then(|| trimmed.to_string()),
            sort: sort.to_string(),
        }
    }

    /// Build `{base}/products/{team}?query=..&sort=..`
    pub fn url(&self, base: &str, team: &str) -> Result<Url, CatalogError> {
        let raw = format!("{}/products/{}", base.trim_end_matches('/'), team);
        let mut url = Url::parse(&raw)
            .map_err(|e| CatalogError::Transport(format!("Invalid catalog URL {}: {}", raw, e)))?;
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(text) = &self.text {
                pairs.append_pair("query", text);
            }
            pairs.append_pair("sort", &self.sort);
        }
        Ok(url)
    }
}

/// Remote product source
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn search(&self, query: &CatalogQuery) -> Result<Vec<Product>, CatalogError>;
}

/// Catalog backed by the team's products endpoint
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
    team: String,
}

impl CatalogClient {
    pub fn new(base_url: &str, team: &str, timeout: Option<Duration>) -> Result<Self, CatalogError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: base_url.to_string(),
            team: team.to_string(),
        })
    }

    pub fn from_config(config: &ShopConfig) -> Result<Self, CatalogError> {
        Self::new(&config.api_base_url, &config.team, config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch raw bytes, used for product images
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, CatalogError> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(CatalogError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl Catalog for CatalogClient {
    async fn search(&self, query: &CatalogQuery) -> Result<Vec<Product>, CatalogError> {
        let url = query.url(&self.base_url, &self.team)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(CatalogError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let body: Value = response.json().await?;
        Ok(parse_products(body))
    }
}
