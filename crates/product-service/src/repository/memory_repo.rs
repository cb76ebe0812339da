//! 内存商品仓储
//!
//! 使用 DashMap 实现的并发内存存储，语义与 PostgreSQL 仓储一致，
//! 适用于测试和无数据库的本地调试。

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use super::traits::ProductRepositoryTrait;
use crate::error::{ProductError, Result};
use crate::models::Product;

/// 内存商品仓储
///
/// id 由内部自增序列分配（从 1 开始），删除后不会复用
#[derive(Debug)]
pub struct InMemoryProductRepository {
    products: DashMap<i64, Product>,
    next_id: AtomicI64,
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// 当前存储的商品数量
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl ProductRepositoryTrait for InMemoryProductRepository {
    async fn create(&self, product: &Product) -> Result<i64> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.products.insert(
            id,
            Product {
                id,
                ..product.clone()
            },
        );
        Ok(id)
    }

    async fn get_by_id(&self, id: i64) -> Result<Product> {
        self.products
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(ProductError::NotFound(id))
    }

    async fn update(&self, id: i64, product: &Product) -> Result<()> {
        let mut entry = self
            .products
            .get_mut(&id)
            .ok_or(ProductError::NotFound(id))?;

        *entry = Product {
            id,
            ..product.clone()
        };
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.products
            .remove(&id)
            .map(|_| ())
            .ok_or(ProductError::NotFound(id))
    }

    async fn get_all(&self) -> Result<Vec<Product>> {
        let mut products: Vec<Product> = self
            .products
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        products.sort_by_key(|p| p.id);
        Ok(products)
    }
}
