//! 商品仓储服务
//!
//! 提供商品库存记录（名称、描述、价格、数量）的 REST CRUD API。
//!
//! ## 模块结构
//!
//! - `models`: 领域模型定义
//! - `dto`: 请求数据传输对象
//! - `error`: 错误类型定义及 HTTP 状态码映射
//! - `repository`: 数据库仓储层
//! - `service`: 业务服务层（不变量校验）
//! - `handlers`: HTTP 请求处理器
//! - `routes`: 路由配置
//! - `state`: 应用状态
//!
//! ## 调用链
//!
//! handler -> service -> repository -> PostgreSQL，结果原样返回，
//! 仅在 handler 层把错误类型翻译为 HTTP 状态码。

pub mod dto;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

/// 服务名，用于配置文件查找、日志与指标标签
pub const SERVICE_NAME: &str = "product-warehouse-service";

pub use dto::ProductRequest;
pub use error::{ProductError, Result};
pub use models::Product;
pub use repository::{InMemoryProductRepository, ProductRepository, ProductRepositoryTrait};
pub use service::ProductService;
pub use state::AppState;
