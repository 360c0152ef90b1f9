//! Application layer

mod relay;

pub use relay::MailRelay;
