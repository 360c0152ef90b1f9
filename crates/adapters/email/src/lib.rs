//! Email 适配器
//!
//! 提供邮件发送功能，支持：
//! - SMTP 邮件发送（进程内共享一个传输实例）
//! - 模板渲染
//! - HTML + 纯文本 multipart 邮件

mod client;
mod template;

pub use client::EmailClient;
pub use folio_config::EmailConfig;
pub use template::EmailTemplate;

use folio_errors::AppResult;

/// 邮件消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html_body: Option<String>,
    pub text_body: String,
}

/// 邮件发送接口
#[async_trait::async_trait]
pub trait EmailSender: Send + Sync {
    /// 发送一封邮件，只尝试一次
    async fn send(&self, message: &EmailMessage) -> AppResult<()>;
}
