//! Domain layer

mod notification;

pub use notification::*;
