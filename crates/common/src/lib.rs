//! common - 联系表单共享类型
//!
//! 浏览器端表单控制器与邮件中继共用的请求/响应结构

pub mod types;

pub use types::*;
