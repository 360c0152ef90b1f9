//! 联系通知邮件

use folio_adapter_email::{EmailMessage, EmailTemplate};
use folio_common::ContactSubmission;
use folio_errors::AppResult;

/// 通知收件人，固定写死，不接受请求或环境变量覆盖
///
/// 占位地址：`.example` 是保留域名，投递不会到达任何人。部署前替换为站点所有者的真实邮箱，
/// 仍是占位地址时服务启动会打 warn 日志。
pub const CONTACT_RECIPIENT: &str = "owner@portfolio.example";

/// 是否为保留域名下的占位收件人
pub fn is_placeholder_recipient(address: &str) -> bool {
    address
        .rsplit_once('@')
        .map(|(_, domain)| {
            let domain = domain.trim_end_matches('.').to_ascii_lowercase();
            domain == "example" || domain.ends_with(".example")
        })
        .unwrap_or(true)
}

const SUBJECT_PREFIX: &str = "Portfolio Contact: ";

const HTML_TEMPLATE: &str = "contact_notification.html";
const TEXT_TEMPLATE: &str = "contact_notification.txt";

/// 把一次提交渲染为通知邮件
///
/// HTML 部分对访客输入做转义，纯文本部分原样嵌入三个字段。
pub struct NotificationRenderer {
    template: EmailTemplate,
}

impl NotificationRenderer {
    pub fn new() -> AppResult<Self> {
        let template = EmailTemplate::from_strings([
            (
                HTML_TEMPLATE,
                include_str!("../../templates/contact_notification.html"),
            ),
            (
                TEXT_TEMPLATE,
                include_str!("../../templates/contact_notification.txt"),
            ),
        ])?;

        Ok(Self { template })
    }

    pub fn subject(submission: &ContactSubmission) -> String {
        format!("{}{}", SUBJECT_PREFIX, submission.name)
    }

    pub fn render(&self, submission: &ContactSubmission, recipient: &str) -> AppResult<EmailMessage> {
        let context = serde_json::json!({
            "name": submission.name,
            "email": submission.email,
            "message": submission.message,
        });

        Ok(EmailMessage {
            to: recipient.to_string(),
            subject: Self::subject(submission),
            html_body: Some(self.template.render(HTML_TEMPLATE, &context)?),
            text_body: self.template.render(TEXT_TEMPLATE, &context)?,
        })
    }
}
