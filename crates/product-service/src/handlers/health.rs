//! 健康检查处理器

use axum::{Json, extract::State};

use crate::{SERVICE_NAME, state::AppState};

/// 存活探针：服务进程正常即返回 ok
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": SERVICE_NAME
    }))
}

/// 就绪探针：检查存储是否可用
///
/// 内存存储总是就绪；数据库存储执行一次 `SELECT 1`
pub async fn readiness_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let storage_ok = match &state.database {
        Some(db) => db.health_check().await.is_ok(),
        None => true,
    };

    Json(serde_json::json!({
        "status": if storage_ok { "ok" } else { "degraded" },
        "service": SERVICE_NAME,
        "checks": {
            "storage": if storage_ok { "ok" } else { "fail" }
        }
    }))
}
