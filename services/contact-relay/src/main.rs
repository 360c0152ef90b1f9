//! Portfolio contact relay

use std::net::SocketAddr;
use std::sync::Arc;

use contact_relay::{AppState, CONTACT_RECIPIENT, MailRelay, is_placeholder_recipient, router};
use folio_adapter_email::EmailClient;
use folio_bootstrap::{RuntimeConfig, init_runtime, shutdown_signal};
use folio_telemetry::init_metrics;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载配置
    let config = RuntimeConfig::default().load()?;

    // 初始化 tracing
    init_runtime(&config);

    let metrics = init_metrics()?;

    // 邮件客户端全局只建一次
    let client = EmailClient::new(&config.email)?;
    let relay = MailRelay::new(Arc::new(client), CONTACT_RECIPIENT)?;

    let app = router(AppState::new(relay).with_metrics(metrics));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    if is_placeholder_recipient(CONTACT_RECIPIENT) {
        warn!(
            recipient = CONTACT_RECIPIENT,
            "Contact recipient is a placeholder address, notifications will not be delivered"
        );
    }

    info!(%addr, recipient = CONTACT_RECIPIENT, "Starting contact relay");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Service stopped");

    Ok(())
}
