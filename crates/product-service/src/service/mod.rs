//! 业务服务层
//!
//! 在调用仓储之前校验领域不变量，自身不持有任何状态。

mod product_service;

pub use product_service::ProductService;
