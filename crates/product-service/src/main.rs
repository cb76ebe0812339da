//! 商品仓储服务入口
//!
//! 加载配置、初始化可观测性与存储，然后启动 HTTP 服务。
//! 配置错误或数据库不可达时直接退出（fail fast）。

use std::sync::Arc;
use std::time::Duration;

use product_warehouse::{ProductRepository, SERVICE_NAME, routes, state::AppState};
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use warehouse_shared::{
    config::{AppConfig, StorageBackend},
    database::Database,
    observability,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load(SERVICE_NAME)?;

    let _guard = observability::init(&config.service_name, &config.observability).await?;

    info!(
        environment = %config.environment,
        "Starting {} on {}",
        config.service_name,
        config.server_addr()
    );

    let state = match config.storage.backend {
        StorageBackend::Postgres => {
            let db = Database::connect(&config.database).await?;
            let repo = Arc::new(ProductRepository::new(db.pool().clone()));
            AppState::new(repo, Some(db))
        }
        StorageBackend::Memory => {
            if config.is_production() {
                warn!("内存存储不会持久化数据，请勿在生产环境使用");
            }
            info!("Using in-memory product storage");
            AppState::in_memory()
        }
    };

    let app = routes::build_router(
        state.clone(),
        Duration::from_secs(config.server.request_timeout_seconds),
    );

    let listener = TcpListener::bind(config.server_addr()).await?;
    info!("Listening on {}", config.server_addr());

    // 优雅关闭：收到 SIGTERM 或 Ctrl+C 时停止接收新连接并等待已有请求处理完毕
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(db) = &state.database {
        db.close().await;
    }

    info!("Server shutdown complete");

    Ok(())
}

/// 监听关闭信号
///
/// 信号处理器注册失败时只记录错误，不触发关闭
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "注册 Ctrl+C 处理器失败");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "注册 SIGTERM 处理器失败");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown..."),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown..."),
    }
}
