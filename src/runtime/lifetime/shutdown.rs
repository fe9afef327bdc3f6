use tokio::signal;
use tracing::{error, warn};

/// 等待 Ctrl+C 信号
pub async fn listen_for_shutdown() {
    match signal::ctrl_c().await {
        Ok(()) => warn!("Shutdown signal received, stopping CourseHub..."),
        Err(e) => error!("Failed to listen for shutdown signal: {}", e),
    }
}
