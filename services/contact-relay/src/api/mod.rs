//! HTTP API

mod contact;
mod routes;

pub use routes::{AppState, router};
