//! folio-contact-client - 联系表单控制器
//!
//! 持有表单字段、做必填校验、每次提交发出一次 POST，并跟踪提交状态：
//!
//! ```text
//! idle → submitting → {success, error}
//! ```

mod controller;
mod transport;

pub use controller::{FormController, SubmissionStatus};
pub use transport::{CONTACT_PATH, ContactTransport, DeliveryOutcome, HttpContactTransport};

pub use folio_common::{ContactField, ContactSubmission, RelayResponse};
