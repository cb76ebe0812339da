//! 请求数据传输对象
//!
//! 响应直接使用领域模型 `Product` 序列化。

use serde::Deserialize;

use crate::models::Product;

/// 创建 / 更新商品请求体
///
/// 缺失的字段取零值，由服务层校验报告（例如缺少 name 会得到 `name is required`）。
/// 请求体中的 id 会被忽略：创建时由存储分配，更新时取自路径。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i32,
}

impl ProductRequest {
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            quantity: self.quantity,
        }
    }
}
