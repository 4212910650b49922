use super::{DashboardRemote, InventoryRemote, RemoteCollection, Resource};
use crate::error::Result;
use crate::models::{DashboardSummary, ImportHistoryEntry, InventoryRecord};
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::time::Instant;

/// 发送请求并解码 JSON 响应, 非 2xx 视为传输失败
async fn send_json<R: DeserializeOwned>(req: RequestBuilder, what: &str) -> Result<R> {
    let start = Instant::now();
    let result: Result<R> = async {
        let resp = req.send().await?.error_for_status()?;
        Ok(resp.json::<R>().await?)
    }
    .await;

    match &result {
        Ok(_) => tracing::debug!("✓ {} 完成, 耗时: {:?}", what, start.elapsed()),
        Err(e) => tracing::warn!("✗ {} 失败, 耗时: {:?}, 错误: {}", what, start.elapsed(), e),
    }
    result
}

/// 基于 REST 的远程集合
pub struct HttpCollection<T> {
    client: Client,
    url: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> HttpCollection<T> {
    pub fn new(client: Client, base_url: &str, resource: Resource) -> Self {
        Self {
            client,
            url: format!("{}/{}", base_url.trim_end_matches('/'), resource.path()),
            _marker: PhantomData,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{}", self.url, id)
    }
}

#[async_trait]
impl<T> RemoteCollection<T> for HttpCollection<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn list(&self) -> Result<Vec<T>> {
        let items: Vec<T> = send_json(self.client.get(&self.url), &format!("GET {}", self.url)).await?;
        tracing::info!("Loaded {} records from {}", items.len(), self.url);
        Ok(items)
    }

    async fn get(&self, id: i64) -> Result<T> {
        let url = self.item_url(id);
        send_json(self.client.get(&url), &format!("GET {}", url)).await
    }

    async fn create(&self, item: &T) -> Result<T> {
        send_json(self.client.post(&self.url).json(item), &format!("POST {}", self.url)).await
    }

    async fn update(&self, id: i64, item: &T) -> Result<T> {
        let url = self.item_url(id);
        send_json(self.client.put(&url).json(item), &format!("PUT {}", url)).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let url = self.item_url(id);
        self.client.delete(&url).send().await?.error_for_status()?;
        tracing::info!("DELETE {} 完成", url);
        Ok(())
    }
}

#[async_trait]
impl InventoryRemote for HttpCollection<InventoryRecord> {
    async fn import(&self, item: &InventoryRecord) -> Result<InventoryRecord> {
        let url = format!("{}/import", self.url);
        send_json(self.client.post(&url).json(item), &format!("POST {}", url)).await
    }

    async fn export(&self, id: i64, amount: &BigDecimal) -> Result<InventoryRecord> {
        let url = format!("{}/export", self.item_url(id));
        let req = self
            .client
            .post(&url)
            .query(&[("amount", amount.to_string())])
            .json(&serde_json::json!({}));
        send_json(req, &format!("POST {}?amount={}", url, amount)).await
    }

    async fn history(&self) -> Result<Vec<ImportHistoryEntry>> {
        let url = format!("{}/history", self.url);
        send_json(self.client.get(&url), &format!("GET {}", url)).await
    }
}

/// 仪表盘汇总接口
pub struct HttpDashboard {
    client: Client,
    url: String,
}

impl HttpDashboard {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            url: format!(
                "{}/{}",
                base_url.trim_end_matches('/'),
                Resource::DashboardSummary.path()
            ),
        }
    }
}

#[async_trait]
impl DashboardRemote for HttpDashboard {
    async fn summary(&self) -> Result<DashboardSummary> {
        send_json(self.client.get(&self.url), &format!("GET {}", self.url)).await
    }
}
