use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::table::DEFAULT_PAGE_SIZE;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_MAX_PRODUCT_IMAGES: usize = 5;
pub const DEFAULT_MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;
pub const DEFAULT_LOW_STOCK_THRESHOLD: f64 = 50.0;

/// Runtime settings of the admin console
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub api_base_url: String,
    pub page_size: usize,
    pub max_product_images: usize,
    pub max_image_bytes: u64,
    pub low_stock_threshold: f64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            max_product_images: DEFAULT_MAX_PRODUCT_IMAGES,
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl ConsoleConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let mut config: ConsoleConfig =
            serde_yaml::from_str(content).context("Failed to parse console config YAML")?;

        if config.api_base_url.trim().is_empty() {
            return Err(anyhow::anyhow!("api_base_url cannot be empty"));
        }
        if config.page_size == 0 {
            return Err(anyhow::anyhow!("page_size must be at least 1"));
        }
        config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();

        Ok(config)
    }

    pub fn from_yaml_str_or_default(content: &str) -> Self {
        match Self::from_yaml_str(content) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load console config: {:#}", e);
                log::info!("Using default console config");
                ConsoleConfig::default()
            }
        }
    }

    /// Base URL of the backend host, without the `/api` suffix
    pub fn server_base_url(&self) -> &str {
        self.api_base_url
            .strip_suffix("/api")
            .unwrap_or(&self.api_base_url)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = ConsoleConfig::from_yaml_str("api_base_url: https://shop.example.com/api/\n").unwrap();
        assert_eq!(config.api_base_url, "https://shop.example.com/api");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.max_product_images, 5);
        assert_eq!(config.max_image_bytes, 5 * 1024 * 1024);
        assert_eq!(config.low_stock_threshold, 50.0);
    }

    #[test]
    fn test_rejects_zero_page_size() {
        assert!(ConsoleConfig::from_yaml_str("page_size: 0").is_err());
    }

    #[test]
    fn test_invalid_yaml_falls_back() {
        let config = ConsoleConfig::from_yaml_str_or_default("page_size: [oops");
        assert_eq!(config, ConsoleConfig::default());
    }

    #[test]
    fn test_urls() {
        let config = ConsoleConfig::default();
        assert_eq!(config.server_base_url(), "http://localhost:5000");
        assert_eq!(config.endpoint("/users"), "http://localhost:5000/api/users");
        assert_eq!(config.endpoint("banners/1"), "http://localhost:5000/api/banners/1");
    }
}
