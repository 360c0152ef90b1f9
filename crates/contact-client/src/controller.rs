//! 表单控制器

use std::sync::{Mutex, MutexGuard, PoisonError};

use folio_common::{ContactField, ContactSubmission, RelayResponse};
use folio_errors::AppResult;
use tracing::{info, warn};

use crate::transport::ContactTransport;

/// 单次提交的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Default)]
struct FormState {
    fields: ContactSubmission,
    status: SubmissionStatus,
    last_response: Option<RelayResponse>,
}

/// 联系表单控制器
///
/// 方法都取 `&self`，界面可以在提交进行中读取状态。锁不会跨 `.await` 持有。
pub struct FormController<T> {
    transport: T,
    state: Mutex<FormState>,
}

impl<T: ContactTransport> FormController<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: Mutex::new(FormState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 当前字段快照
    pub fn fields(&self) -> ContactSubmission {
        self.state().fields.clone()
    }

    pub fn field(&self, field: ContactField) -> String {
        self.state().fields.field(field).to_string()
    }

    /// 原样写入字段值
    pub fn set_field(&self, field: ContactField, value: impl Into<String>) {
        *self.state().fields.field_mut(field) = value.into();
    }

    pub fn set_name(&self, value: impl Into<String>) {
        self.set_field(ContactField::Name, value);
    }

    pub fn set_email(&self, value: impl Into<String>) {
        self.set_field(ContactField::Email, value);
    }

    pub fn set_message(&self, value: impl Into<String>) {
        self.set_field(ContactField::Message, value);
    }

    pub fn status(&self) -> SubmissionStatus {
        self.state().status
    }

    /// 提交中应禁用提交按钮
    pub fn can_submit(&self) -> bool {
        self.status() != SubmissionStatus::Submitting
    }

    /// 最近一次服务端响应体
    pub fn last_response(&self) -> Option<RelayResponse> {
        self.state().last_response.clone()
    }

    /// 提交表单
    ///
    /// 有字段为空时返回校验错误，不发请求，状态与字段都不变。
    /// 否则发出一次 POST：2xx 清空字段并进入 `Success`，其余情况进入 `Error` 并保留字段。
    pub async fn submit(&self) -> AppResult<SubmissionStatus> {
        let submission = {
            let mut state = self.state();
            state.fields.validate()?;
            state.status = SubmissionStatus::Submitting;
            state.fields.clone()
        };

        let result = self.transport.post(&submission).await;

        let mut state = self.state();
        match result {
            Ok(outcome) if outcome.is_success() => {
                info!(status = outcome.status, "Contact form sent");
                state.fields = ContactSubmission::default();
                state.status = SubmissionStatus::Success;
                state.last_response = outcome.body;
            }
            Ok(outcome) => {
                warn!(status = outcome.status, "Contact relay returned failure");
                state.status = SubmissionStatus::Error;
                state.last_response = outcome.body;
            }
            Err(e) => {
                warn!(error = %e, "Contact form submission failed");
                state.status = SubmissionStatus::Error;
                state.last_response = None;
            }
        }

        Ok(state.status)
    }
}
