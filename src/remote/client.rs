use super::{HttpCollection, HttpDashboard, Resource};
use crate::config::BackendConfig;
use crate::error::Result;
use reqwest::Client;
use std::time::Duration;

/// 创建 HTTP 客户端
pub fn create_client(config: &BackendConfig) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .gzip(true)
        .build()?;
    Ok(client)
}

/// 后端入口: 共享一个客户端, 按资源派生集合
#[derive(Debug, Clone)]
pub struct FarmApi {
    client: Client,
    base_url: String,
}

impl FarmApi {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &BackendConfig) -> Result<Self> {
        Ok(Self::new(create_client(config)?, config.base_url.clone()))
    }

    pub fn collection<T>(&self, resource: Resource) -> HttpCollection<T> {
        HttpCollection::new(self.client.clone(), &self.base_url, resource)
    }

    pub fn dashboard(&self) -> HttpDashboard {
        HttpDashboard::new(self.client.clone(), &self.base_url)
    }
}
