#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use contact_relay::{AppState, CONTACT_RECIPIENT, MailRelay, router};
use folio_adapter_email::{EmailMessage, EmailSender};
use folio_errors::{AppError, AppResult};

/// 记录所有发出的邮件；`fail` 为真时模拟服务商拒绝
#[derive(Default)]
pub struct FakeMailer {
    pub sent: Mutex<Vec<EmailMessage>>,
    pub attempts: Mutex<usize>,
    pub fail: bool,
}

impl FakeMailer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl EmailSender for FakeMailer {
    async fn send(&self, message: &EmailMessage) -> AppResult<()> {
        *self.attempts.lock().unwrap() += 1;
        if self.fail {
            return Err(AppError::external_service(
                "535 5.7.8 Username and Password not accepted",
            ));
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

pub fn app(mailer: Arc<FakeMailer>) -> axum::Router {
    router(state(mailer))
}

pub fn state(mailer: Arc<FakeMailer>) -> AppState {
    let relay = MailRelay::new(mailer, CONTACT_RECIPIENT).unwrap();
    AppState::new(relay)
}
