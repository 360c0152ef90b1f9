//! 提交传输

use std::time::Duration;

use folio_common::{ContactSubmission, RelayResponse};
use folio_errors::{AppError, AppResult};
use tracing::debug;

/// 中继接口路径
pub const CONTACT_PATH: &str = "/api/contact";

/// 一次 POST 的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryOutcome {
    pub status: u16,
    /// 响应体不是 `RelayResponse` 时为 `None`
    pub body: Option<RelayResponse>,
}

impl DeliveryOutcome {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 提交通道
///
/// 每次调用对应一次网络请求；传输层失败返回 `AppError::Transport`。
#[async_trait::async_trait]
pub trait ContactTransport: Send + Sync {
    async fn post(&self, submission: &ContactSubmission) -> AppResult<DeliveryOutcome>;
}

/// 基于 reqwest 的 HTTP 传输
#[derive(Debug, Clone)]
pub struct HttpContactTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpContactTransport {
    /// `base_url` 形如 `http://localhost:5000`
    pub fn new(base_url: &str) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(client, base_url))
    }

    /// 带请求超时
    pub fn with_timeout(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), CONTACT_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl ContactTransport for HttpContactTransport {
    async fn post(&self, submission: &ContactSubmission) -> AppResult<DeliveryOutcome> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await
            .map_err(|e| AppError::transport(format!("POST {} failed: {}", self.endpoint, e)))?;

        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::transport(format!("Failed to read response: {}", e)))?;
        let body = serde_json::from_slice::<RelayResponse>(&bytes).ok();

        debug!(status, endpoint = %self.endpoint, "Contact relay responded");

        Ok(DeliveryOutcome { status, body })
    }
}
