use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "http://localhost:8081/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub view: ViewConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// 后端 REST 根地址, 各集合路径拼接在其后
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    pub items_per_page: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// 图表数据 CSV 输出路径, 未设置则不导出
    #[serde(default)]
    pub csv_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                timeout_secs: DEFAULT_TIMEOUT_SECS,
            },
            view: ViewConfig {
                items_per_page: DEFAULT_ITEMS_PER_PAGE,
            },
            report: ReportConfig::default(),
        }
    }
}

impl AppConfig {
    /// 加载配置: 默认值 -> config/farm.* (可选) -> FARM__* 环境变量
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("backend.base_url", DEFAULT_BASE_URL)?
            .set_default("backend.timeout_secs", DEFAULT_TIMEOUT_SECS)?
            .set_default("view.items_per_page", DEFAULT_ITEMS_PER_PAGE as u64)?
            .add_source(File::with_name("config/farm").required(false))
            .add_source(Environment::with_prefix("FARM").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// 加载失败时回退到默认配置
    pub fn from_env() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }
}
