//! 邮件客户端实现

use crate::{EmailConfig, EmailMessage, EmailSender};
use folio_errors::{AppError, AppResult};
use lettre::message::{Mailbox, MultiPart, SinglePart, header};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;
use std::time::Duration;
use tracing::{debug, info};

/// 邮件客户端
///
/// 内部的 SMTP 传输带连接池，启动时构建一次，之后只读共享。
#[derive(Clone)]
pub struct EmailClient {
    from: Mailbox,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailClient {
    /// 创建新的邮件客户端
    ///
    /// 只构建传输，不会建立连接。
    pub fn new(config: &EmailConfig) -> AppResult<Self> {
        let from = format!("{} <{}>", config.from_name, config.username)
            .parse()
            .map_err(|e| AppError::internal(format!("Invalid from address: {}", e)))?;

        let transport = Self::build_transport(config)?;

        info!(
            smtp_host = %config.smtp_host,
            smtp_port = config.smtp_port,
            use_tls = config.use_tls,
            "SMTP transport initialized"
        );

        Ok(Self { from, transport })
    }

    /// 构建 SMTP 传输
    fn build_transport(config: &EmailConfig) -> AppResult<AsyncSmtpTransport<Tokio1Executor>> {
        let credentials = Credentials::new(
            config.username.clone(),
            config.password.expose_secret().clone(),
        );

        let builder = if config.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
                .map_err(|e| AppError::internal(format!("Failed to create SMTP transport: {}", e)))?
        } else {
            // 本地调试用的明文 SMTP（如 MailHog）
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
        };

        let transport = builder
            .port(config.smtp_port)
            .credentials(credentials)
            .timeout(Some(Duration::from_secs(config.timeout_secs)))
            .build();

        Ok(transport)
    }

    /// 构建邮件消息
    pub(crate) fn build_message(&self, msg: &EmailMessage) -> AppResult<Message> {
        let to: Mailbox = msg
            .to
            .parse()
            .map_err(|e| AppError::validation(format!("Invalid to address: {}", e)))?;

        let message_builder = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(&msg.subject);

        // 构建邮件体
        let body = if let Some(html) = &msg.html_body {
            // HTML + 纯文本备用
            MultiPart::alternative()
                .singlepart(
                    SinglePart::builder()
                        .header(header::ContentType::TEXT_PLAIN)
                        .body(msg.text_body.clone()),
                )
                .singlepart(
                    SinglePart::builder()
                        .header(header::ContentType::TEXT_HTML)
                        .body(html.clone()),
                )
        } else {
            // 仅纯文本
            MultiPart::alternative().singlepart(
                SinglePart::builder()
                    .header(header::ContentType::TEXT_PLAIN)
                    .body(msg.text_body.clone()),
            )
        };

        let message = message_builder
            .multipart(body)
            .map_err(|e| AppError::internal(format!("Failed to build message: {}", e)))?;

        Ok(message)
    }
}

#[async_trait::async_trait]
impl EmailSender for EmailClient {
    async fn send(&self, msg: &EmailMessage) -> AppResult<()> {
        debug!(to = %msg.to, subject = %msg.subject, "Sending email");

        let message = self.build_message(msg)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| AppError::external_service(format!("Failed to send email: {}", e)))?;

        info!(to = %msg.to, subject = %msg.subject, "Email sent successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> EmailConfig {
        EmailConfig {
            smtp_host: "smtp.example.com".to_string(),
            smtp_port: 587,
            username: "user@example.com".to_string(),
            password: secrecy::Secret::new("password".to_string()),
            from_name: "Test".to_string(),
            use_tls: true,
            timeout_secs: 30,
        }
    }

    #[tokio::test]
    async fn test_build_message() {
        let client = EmailClient::new(&test_config()).unwrap();

        let msg = EmailMessage {
            to: "test@example.com".to_string(),
            subject: "Test Subject".to_string(),
            html_body: Some("<h1>Test</h1>".to_string()),
            text_body: "Test".to_string(),
        };

        let message = client.build_message(&msg).unwrap();
        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(formatted.contains("Subject: Test Subject"));
        assert!(formatted.contains("From: Test <user@example.com>"));
        assert!(formatted.contains("To: test@example.com"));
        assert!(formatted.contains("multipart/alternative"));
    }

    #[tokio::test]
    async fn test_build_message_rejects_bad_recipient() {
        let client = EmailClient::new(&test_config()).unwrap();

        let msg = EmailMessage {
            to: "not an address".to_string(),
            subject: "Test".to_string(),
            html_body: None,
            text_body: "Test".to_string(),
        };

        let err = client.build_message(&msg).unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_plaintext_transport() {
        let config = EmailConfig {
            use_tls: false,
            smtp_port: 1025,
            ..test_config()
        };
        assert!(EmailClient::new(&config).is_ok());
    }

    #[test]
    fn test_invalid_from_address() {
        let config = EmailConfig {
            username: "no-at-sign".to_string(),
            ..test_config()
        };
        assert!(EmailClient::new(&config).is_err());
    }
}
