//! 应用状态定义
//!
//! 包含 Axum 路由共享的应用状态

use std::sync::Arc;

use warehouse_shared::database::Database;

use crate::repository::{InMemoryProductRepository, ProductRepositoryTrait};
use crate::service::ProductService;

/// 运行期选定的仓储实现
pub type DynProductRepository = dyn ProductRepositoryTrait;

/// Axum 应用共享状态
///
/// 服务通过 Arc 在 handler 间共享；`database` 仅用于就绪探针，内存存储时为 None
#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<ProductService<DynProductRepository>>,
    pub database: Option<Database>,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(repo: Arc<DynProductRepository>, database: Option<Database>) -> Self {
        Self {
            product_service: Arc::new(ProductService::new(repo)),
            database,
        }
    }

    /// 使用内存仓储创建应用状态
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryProductRepository::new()), None)
    }
}
