//! API 路由

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    routing::{get, post},
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::contact::submit_contact;
use crate::application::MailRelay;

/// 请求处理共享状态，启动时构建，之后只读
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<MailRelay>,
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(relay: MailRelay) -> Self {
        Self {
            relay: Arc::new(relay),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/contact", post(submit_contact))
        .route("/health", get(health_check))
        .route("/metrics", get(render_metrics))
        .with_state(state)
        // 留言不设长度上限，关闭 axum 默认的 2MB 请求体限制
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn render_metrics(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .as_ref()
        .map(PrometheusHandle::render)
        .ok_or(StatusCode::NOT_FOUND)
}
