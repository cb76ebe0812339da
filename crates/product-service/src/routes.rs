//! 路由配置模块
//!
//! 定义所有 REST API 端点的路由映射

use std::time::Duration;

use axum::{
    Router,
    http::StatusCode,
    middleware,
    routing::get,
};
use tower_http::timeout::TimeoutLayer;
use warehouse_shared::observability::middleware as obs_middleware;

use crate::{handlers, state::AppState};

/// 构建商品 CRUD 路由
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(handlers::product::list_products).post(handlers::product::create_product),
        )
        .route(
            "/products/{id}",
            get(handlers::product::get_product)
                .put(handlers::product::update_product)
                .delete(handlers::product::delete_product),
        )
}

/// 构建完整应用路由
///
/// 包含业务路由、健康检查以及超时、追踪、请求 ID 中间件
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    let routes = Router::new()
        .merge(product_routes())
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check));

    with_middleware(routes, request_timeout).with_state(state)
}

fn with_middleware(routes: Router<AppState>, request_timeout: Duration) -> Router<AppState> {
    routes
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        // 可观测性中间件：请求追踪和指标收集
        .layer(middleware::from_fn(obs_middleware::http_tracing))
        .layer(middleware::from_fn(obs_middleware::request_id))
}
