//! 领域模型
//!
//! 商品是系统中唯一的实体。

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 商品
///
/// `id` 由数据库在创建时分配，之后不可变；其余四个字段在更新时整体替换。
/// 字段上的校验规则由服务层在持久化之前统一执行，仓储层不再重复校验。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, Validate)]
pub struct Product {
    pub id: i64,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub description: String,
    /// 单价（店铺币种单位）
    #[validate(range(exclusive_min = 0.0, message = "price must be greater than zero"))]
    pub price: f64,
    /// 库存数量
    #[validate(range(min = 0, message = "quantity must be non-negative"))]
    pub quantity: i32,
}

impl Product {
    /// 创建尚未持久化的商品（id 为 0，由存储分配）
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: f64, quantity: i32) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: description.into(),
            price,
            quantity,
        }
    }
}
