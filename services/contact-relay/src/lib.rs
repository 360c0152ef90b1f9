//! contact-relay - 作品集网站联系表单邮件中继
//!
//! `POST /api/contact` 接收访客的姓名、邮箱与留言，渲染成通知邮件后
//! 通过 SMTP 发给站点所有者。

pub mod api;
pub mod application;
pub mod domain;

pub use api::{AppState, router};
pub use application::MailRelay;
pub use domain::{CONTACT_RECIPIENT, NotificationRenderer, is_placeholder_recipient};
