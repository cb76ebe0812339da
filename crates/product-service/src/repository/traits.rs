//! 仓储 Trait 定义
//!
//! 定义仓储接口，便于服务层依赖抽象而非具体实现，支持 mock 测试

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Product;

/// 商品仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepositoryTrait: Send + Sync {
    /// 插入新商品，返回存储分配的 id（忽略入参中的 id）
    async fn create(&self, product: &Product) -> Result<i64>;
    async fn get_by_id(&self, id: i64) -> Result<Product>;
    /// 覆盖四个可变字段；id 不存在时返回 NotFound
    async fn update(&self, id: i64, product: &Product) -> Result<()>;
    async fn delete(&self, id: i64) -> Result<()>;
    /// 按 id 升序返回全部商品，空表返回空列表
    async fn get_all(&self) -> Result<Vec<Product>>;
}
