use bigdecimal::BigDecimal;

/// 统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum FarmError {
    /// 网络/解码失败
    #[error("Transport error: {0}")]
    Transport(String),

    /// 远端返回非 2xx
    #[error("Remote returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl FarmError {
    /// 是否属于传输层失败 (网络错误或 HTTP 错误)
    pub fn is_transport(&self) -> bool {
        matches!(self, FarmError::Transport(_) | FarmError::Status { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, FarmError::Validation(_))
    }
}

impl From<reqwest::Error> for FarmError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => FarmError::Status {
                status: status.as_u16(),
                url: e.url().map(|u| u.to_string()).unwrap_or_default(),
            },
            None => FarmError::Transport(e.to_string()),
        }
    }
}

/// 本地业务规则校验失败, 在发起任何远程调用前拦截
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Quantity exceeded: requested {requested}, available {available}")]
    QuantityExceeded {
        requested: BigDecimal,
        available: BigDecimal,
    },

    #[error("Quantity must be positive, got {0}")]
    NonPositiveQuantity(BigDecimal),

    #[error("Record has no server-assigned id")]
    MissingId,

    #[error("Operation not allowed in current view mode: {0}")]
    InvalidMode(&'static str),
}

pub type Result<T> = std::result::Result<T, FarmError>;
