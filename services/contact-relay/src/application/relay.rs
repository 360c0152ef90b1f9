//! 邮件中继

use std::sync::Arc;

use folio_adapter_email::EmailSender;
use folio_common::ContactSubmission;
use folio_errors::{AppError, AppResult};
use tracing::{debug, info};

use crate::domain::NotificationRenderer;

/// 把联系表单提交转成通知邮件并发送
///
/// 每次调用只尝试发送一次，不排队、不重试、不去重。
pub struct MailRelay {
    sender: Arc<dyn EmailSender>,
    renderer: NotificationRenderer,
    recipient: String,
}

impl MailRelay {
    pub fn new(sender: Arc<dyn EmailSender>, recipient: impl Into<String>) -> AppResult<Self> {
        Ok(Self {
            sender,
            renderer: NotificationRenderer::new()?,
            recipient: recipient.into(),
        })
    }

    /// 校验并转发一次提交
    ///
    /// 仅当字段缺失时返回 `AppError::Validation`，其余失败都来自渲染或邮件服务商。
    pub async fn relay(&self, submission: &ContactSubmission) -> AppResult<()> {
        submission.validate()?;

        let message = self.renderer.render(submission, &self.recipient)?;
        debug!(subject = %message.subject, "Contact notification rendered");

        // 收件人是固定配置，发送阶段的地址校验失败属于服务端问题
        self.sender.send(&message).await.map_err(|e| match e {
            AppError::Validation(msg) => AppError::internal(msg),
            other => other,
        })?;

        info!(sender_name = %submission.name, "Contact submission relayed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_adapter_email::EmailMessage;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSender {
        sent: Mutex<Vec<EmailMessage>>,
    }

    #[async_trait::async_trait]
    impl EmailSender for RecordingSender {
        async fn send(&self, message: &EmailMessage) -> AppResult<()> {
            self.sent.lock().unwrap().push(message.clone());
            Ok(())
        }
    }

    struct RejectingSender(fn() -> AppError);

    #[async_trait::async_trait]
    impl EmailSender for RejectingSender {
        async fn send(&self, _message: &EmailMessage) -> AppResult<()> {
            Err((self.0)())
        }
    }

    #[tokio::test]
    async fn test_relay_sends_one_message() {
        let sender = Arc::new(RecordingSender::default());
        let relay = MailRelay::new(sender.clone(), "owner@example.com").unwrap();

        relay
            .relay(&ContactSubmission::new("Ada", "ada@example.com", "Hello"))
            .await
            .unwrap();

        let sent = sender.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "owner@example.com");
        assert_eq!(sent[0].subject, "Portfolio Contact: Ada");
    }

    #[tokio::test]
    async fn test_empty_field_never_reaches_sender() {
        let sender = Arc::new(RecordingSender::default());
        let relay = MailRelay::new(sender.clone(), "owner@example.com").unwrap();

        let err = relay
            .relay(&ContactSubmission::new("Ada", "ada@example.com", ""))
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert!(sender.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        let relay = MailRelay::new(
            Arc::new(RejectingSender(|| AppError::external_service("535 auth rejected"))),
            "owner@example.com",
        )
        .unwrap();

        let err = relay
            .relay(&ContactSubmission::new("Ada", "ada@example.com", "Hello"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ExternalService(_)));
    }

    #[tokio::test]
    async fn test_sender_validation_error_is_not_blamed_on_visitor() {
        let relay = MailRelay::new(
            Arc::new(RejectingSender(|| AppError::validation("Invalid to address"))),
            "broken",
        )
        .unwrap();

        let err = relay
            .relay(&ContactSubmission::new("Ada", "ada@example.com", "Hello"))
            .await
            .unwrap_err();

        assert!(!err.is_validation());
    }
}
