//! 商品服务错误类型定义
//!
//! 错误在服务层与仓储层之间原样传递，只在 HTTP 层翻译为状态码。

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// 商品服务错误类型
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    /// 调用方数据违反不变量，消息原样返回给调用方
    #[error("{0}")]
    Validation(String),

    #[error("product not found")]
    NotFound(i64),

    /// 无法解码的请求体或无法解析的路径参数
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ProductError {
    /// 参数校验失败
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 返回错误码（用于 API 响应）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "PRODUCT_NOT_FOUND",
            Self::MalformedRequest(_) => "MALFORMED_REQUEST",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }

    /// 指标标签中的结果分类
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::NotFound(_) => "not_found",
            Self::MalformedRequest(_) => "malformed",
            Self::Database(_) => "error",
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 系统级错误只返回通用提示，详细信息仅记录日志，防止信息泄露
        let message = match &self {
            Self::Database(e) => {
                tracing::error!(error = %e, "数据库操作失败");
                "internal server error".to_string()
            }
            other => {
                tracing::warn!(code = other.error_code(), error = %other, "请求被拒绝");
                other.to_string()
            }
        };

        let body = json!({
            "success": false,
            "code": self.error_code(),
            "message": message,
            "data": serde_json::Value::Null
        });

        (status, axum::Json(body)).into_response()
    }
}

/// 请求体无法解码（语法错误、类型不符、缺少 Content-Type）统一视为格式错误
impl From<JsonRejection> for ProductError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}

/// 路径参数无法解析为整数
impl From<PathRejection> for ProductError {
    fn from(rejection: PathRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}

/// 服务层 Result 类型别名
pub type Result<T> = std::result::Result<T, ProductError>;
