//! 通用类型定义

use derive_more::Display;
use folio_errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// 中继成功时的响应消息
pub const MESSAGE_SENT: &str = "Email sent successfully";

/// 邮件服务商失败时的响应消息
pub const MESSAGE_FAILED: &str = "Failed to send email";

/// 请求体缺字段或字段为空时的响应消息
pub const MESSAGE_INVALID: &str = "Name, email and message are required";

/// 联系表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ContactField {
    #[display("name")]
    Name,
    #[display("email")]
    Email,
    #[display("message")]
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [Self::Name, Self::Email, Self::Message];
}

/// 访客提交的联系信息
///
/// 三个字段都必填且非空，不做邮箱格式或长度校验。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    /// 第一个为空的必填字段
    pub fn first_missing(&self) -> Option<ContactField> {
        ContactField::ALL
            .into_iter()
            .find(|field| self.field(*field).is_empty())
    }

    /// 必填校验
    pub fn validate(&self) -> AppResult<()> {
        match self.first_missing() {
            Some(field) => Err(AppError::validation(format!("{} is required", field))),
            None => Ok(()),
        }
    }
}

/// `/api/contact` 的响应体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    pub message: String,
}

impl RelayResponse {
    pub fn sent() -> Self {
        Self {
            success: true,
            message: MESSAGE_SENT.to_string(),
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            message: MESSAGE_FAILED.to_string(),
        }
    }

    pub fn invalid() -> Self {
        Self {
            success: false,
            message: MESSAGE_INVALID.to_string(),
        }
    }
}
