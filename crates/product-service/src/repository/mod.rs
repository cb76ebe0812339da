//! 数据库仓储层
//!
//! 提供商品的数据访问接口，封装 SQL 操作细节。
//!
//! ## 设计原则
//!
//! - 仓储只负责数据持久化，不做业务校验
//! - 每个操作是一条独立的语句，依赖数据库对单条语句的原子性保证
//! - "未命中任何行" 统一转换为 `ProductError::NotFound`
//! - 定义 trait 接口以支持 mock 测试和替换存储实现

mod memory_repo;
mod product_repo;
mod traits;

pub use memory_repo::InMemoryProductRepository;
pub use product_repo::ProductRepository;
pub use traits::*;
