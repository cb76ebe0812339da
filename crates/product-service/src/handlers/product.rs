//! 商品管理 API 处理器
//!
//! 实现商品的 CRUD 操作。路径参数与请求体通过 `WithRejection` 接入统一错误类型，
//! 解析失败一律返回 400，且不会调用服务层。

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;

use crate::{
    dto::ProductRequest,
    error::ProductError,
    models::Product,
    state::AppState,
};

type ProductPath = WithRejection<Path<i64>, ProductError>;
type ProductBody = WithRejection<Json<ProductRequest>, ProductError>;

/// 创建商品
///
/// POST /products
pub async fn create_product(
    State(state): State<AppState>,
    WithRejection(Json(req), _): ProductBody,
) -> Result<(StatusCode, Json<Product>), ProductError> {
    let mut product = req.into_product(0);
    product.id = state.product_service.create(product.clone()).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// 获取商品列表
///
/// GET /products
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, ProductError> {
    let products = state.product_service.get_all().await?;
    Ok(Json(products))
}

/// 获取商品详情
///
/// GET /products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    WithRejection(Path(id), _): ProductPath,
) -> Result<Json<Product>, ProductError> {
    let product = state.product_service.get_by_id(id).await?;
    Ok(Json(product))
}

/// 更新商品
///
/// PUT /products/{id}
///
/// 记录不存在时返回 404，与查询、删除保持一致
pub async fn update_product(
    State(state): State<AppState>,
    WithRejection(Path(id), _): ProductPath,
    WithRejection(Json(req), _): ProductBody,
) -> Result<Json<Product>, ProductError> {
    let product = state
        .product_service
        .update(id, req.into_product(id))
        .await?;

    Ok(Json(product))
}

/// 删除商品
///
/// DELETE /products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    WithRejection(Path(id), _): ProductPath,
) -> Result<StatusCode, ProductError> {
    state.product_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
