//! 商品服务
//!
//! 负责校验商品不变量并委托仓储完成持久化。
//!
//! ## 校验规则
//!
//! - id 必须为正数，否则返回 `invalid id`，且不会访问存储
//! - 字段按 name -> price -> quantity 的顺序校验，只报告第一个失败项

use std::sync::Arc;

use tracing::{info, instrument};
use validator::Validate;
use warehouse_shared::observability::metrics;

use crate::error::{ProductError, Result};
use crate::models::Product;
use crate::repository::ProductRepositoryTrait;

/// 字段校验的优先级顺序
const FIELD_ORDER: [&str; 3] = ["name", "price", "quantity"];

const INVALID_ID: &str = "invalid id";

/// 商品服务
///
/// 对仓储实现泛型，可以是 PostgreSQL、内存存储或测试替身
pub struct ProductService<R>
where
    R: ProductRepositoryTrait + ?Sized,
{
    repo: Arc<R>,
}

impl<R> ProductService<R>
where
    R: ProductRepositoryTrait + ?Sized,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// 创建商品，返回存储分配的 id
    #[instrument(skip(self, product), fields(name = %product.name))]
    pub async fn create(&self, product: Product) -> Result<i64> {
        let result = async {
            validate_fields(&product)?;
            self.repo.create(&product).await
        }
        .await;
        record("create", &result);

        let id = result?;
        info!(product_id = id, "Product created");
        Ok(id)
    }

    /// 按 id 查询商品
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<Product> {
        let result = async {
            validate_id(id)?;
            self.repo.get_by_id(id).await
        }
        .await;
        record("get_by_id", &result);
        result
    }

    /// 整体替换商品的可变字段
    ///
    /// id 取自请求路径而非请求体，在下传仓储之前写回商品记录；
    /// 成功时返回写入后的记录
    #[instrument(skip(self, product))]
    pub async fn update(&self, id: i64, mut product: Product) -> Result<Product> {
        let result = async {
            validate_id(id)?;
            validate_fields(&product)?;
            product.id = id;
            self.repo.update(id, &product).await
        }
        .await;
        record("update", &result);

        result?;
        info!(product_id = id, "Product updated");
        Ok(product)
    }

    /// 删除商品
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = async {
            validate_id(id)?;
            self.repo.delete(id).await
        }
        .await;
        record("delete", &result);

        result?;
        info!(product_id = id, "Product deleted");
        Ok(())
    }

    /// 列出全部商品（按 id 升序）
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Product>> {
        let result = self.repo.get_all().await;
        record("get_all", &result);
        result
    }
}

fn validate_id(id: i64) -> Result<()> {
    if id <= 0 {
        return Err(ProductError::validation(INVALID_ID));
    }
    Ok(())
}

/// 按固定优先级返回第一个失败字段的错误消息
fn validate_fields(product: &Product) -> Result<()> {
    let Err(errors) = product.validate() else {
        return Ok(());
    };

    let field_errors = errors.field_errors();
    for field in FIELD_ORDER {
        if let Some(error) = field_errors.get(field).and_then(|errs| errs.first()) {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} is invalid", field));
            return Err(ProductError::Validation(message));
        }
    }

    Err(ProductError::Validation(errors.to_string()))
}

fn record<T>(operation: &'static str, result: &Result<T>) {
    let outcome = match result {
        Ok(_) => "ok",
        Err(e) => e.outcome(),
    };
    metrics::record_product_operation(operation, outcome);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryProductRepository, MockProductRepositoryTrait};
    use fake::Fake;
    use fake::faker::lorem::en::{Sentence, Word};

    fn widget() -> Product {
        Product::new("Widget", "A small widget", 10.99, 5)
    }

    /// 不设置任何期望的 mock：一旦被调用即 panic，用于证明请求没有到达存储
    fn untouched_repo() -> ProductService<MockProductRepositoryTrait> {
        ProductService::new(Arc::new(MockProductRepositoryTrait::new()))
    }

    fn validation_message(err: ProductError) -> String {
        match err {
            ProductError::Validation(msg) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    // ==================== create ====================

    #[tokio::test]
    async fn test_create_delegates_to_repository() {
        let mut repo = MockProductRepositoryTrait::new();
        repo.expect_create()
            .withf(|p| p.name == "Widget" && p.quantity == 5)
            .times(1)
            .returning(|_| Ok(1));

        let service = ProductService::new(Arc::new(repo));
        assert_eq!(service.create(widget()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_validation_messages() {
        let service = untouched_repo();

        let cases = vec![
            (Product::new("", "", 10.0, 1), "name is required"),
            (Product::new("Widget", "", 0.0, 1), "price must be greater than zero"),
            (Product::new("Widget", "", -3.5, 1), "price must be greater than zero"),
            (Product::new("Widget", "", 10.0, -1), "quantity must be non-negative"),
        ];

        for (product, expected) in cases {
            let err = service.create(product).await.unwrap_err();
            assert_eq!(validation_message(err), expected);
        }
    }

    #[tokio::test]
    async fn test_create_reports_first_failure_only() {
        let service = untouched_repo();

        let err = service.create(Product::new("", "", 0.0, -1)).await.unwrap_err();
        assert_eq!(validation_message(err), "name is required");

        let err = service.create(Product::new("Widget", "", 0.0, -1)).await.unwrap_err();
        assert_eq!(validation_message(err), "price must be greater than zero");
    }

    #[tokio::test]
    async fn test_create_allows_empty_description_and_zero_quantity() {
        let mut repo = MockProductRepositoryTrait::new();
        repo.expect_create().times(1).returning(|_| Ok(7));

        let service = ProductService::new(Arc::new(repo));
        let id = service.create(Product::new("Widget", "", 0.01, 0)).await.unwrap();
        assert_eq!(id, 7);
    }

    #[tokio::test]
    async fn test_create_propagates_database_error() {
        let mut repo = MockProductRepositoryTrait::new();
        repo.expect_create()
            .times(1)
            .returning(|_| Err(ProductError::Database(sqlx::Error::PoolTimedOut)));

        let service = ProductService::new(Arc::new(repo));
        let err = service.create(widget()).await.unwrap_err();
        assert!(matches!(err, ProductError::Database(_)));
    }

    // ==================== get_by_id ====================

    #[tokio::test]
    async fn test_non_positive_ids_never_reach_repository() {
        let service = untouched_repo();

        for id in [0, -1, i64::MIN] {
            let err = service.get_by_id(id).await.unwrap_err();
            assert_eq!(validation_message(err), "invalid id");

            let err = service.update(id, widget()).await.unwrap_err();
            assert_eq!(validation_message(err), "invalid id");

            let err = service.delete(id).await.unwrap_err();
            assert_eq!(validation_message(err), "invalid id");
        }
    }

    #[tokio::test]
    async fn test_get_by_id_propagates_not_found() {
        let mut repo = MockProductRepositoryTrait::new();
        repo.expect_get_by_id()
            .with(mockall::predicate::eq(42))
            .times(1)
            .returning(|id| Err(ProductError::NotFound(id)));

        let service = ProductService::new(Arc::new(repo));
        assert!(matches!(
            service.get_by_id(42).await,
            Err(ProductError::NotFound(42))
        ));
    }

    // ==================== update ====================

    #[tokio::test]
    async fn test_update_checks_id_before_fields() {
        let service = untouched_repo();

        let err = service.update(0, Product::new("", "", 0.0, -1)).await.unwrap_err();
        assert_eq!(validation_message(err), "invalid id");

        let err = service.update(3, Product::new("", "", 0.0, -1)).await.unwrap_err();
        assert_eq!(validation_message(err), "name is required");
    }

    #[tokio::test]
    async fn test_update_writes_path_id_onto_record() {
        let mut repo = MockProductRepositoryTrait::new();
        repo.expect_update()
            .withf(|id, p| *id == 5 && p.id == 5 && p.name == "Widget")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ProductService::new(Arc::new(repo));
        let mut product = widget();
        product.id = 999;
        let updated = service.update(5, product).await.unwrap();
        assert_eq!(updated, Product { id: 5, ..widget() });
    }

    #[tokio::test]
    async fn test_update_propagates_not_found() {
        let mut repo = MockProductRepositoryTrait::new();
        repo.expect_update()
            .times(1)
            .returning(|id, _| Err(ProductError::NotFound(id)));

        let service = ProductService::new(Arc::new(repo));
        assert!(matches!(
            service.update(999, widget()).await,
            Err(ProductError::NotFound(999))
        ));
    }

    // ==================== delete / get_all ====================

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let service = ProductService::new(Arc::new(InMemoryProductRepository::new()));

        let id = service.create(widget()).await.unwrap();
        service.delete(id).await.unwrap();

        assert!(matches!(service.get_by_id(id).await, Err(ProductError::NotFound(_))));
        assert!(matches!(service.delete(id).await, Err(ProductError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_all_on_empty_store() {
        let mut repo = MockProductRepositoryTrait::new();
        repo.expect_get_all().times(1).returning(|| Ok(vec![]));

        let service = ProductService::new(Arc::new(repo));
        assert!(service.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_widget_scenario() {
        let service = ProductService::new(Arc::new(InMemoryProductRepository::new()));

        let id = service
            .create(Product::new("Widget", "", 10.99, 5))
            .await
            .unwrap();
        assert_eq!(id, 1);

        let stored = service.get_by_id(1).await.unwrap();
        assert_eq!(
            stored,
            Product {
                id: 1,
                ..Product::new("Widget", "", 10.99, 5)
            }
        );
    }

    #[tokio::test]
    async fn test_valid_products_round_trip() {
        let service = ProductService::new(Arc::new(InMemoryProductRepository::new()));

        for _ in 0..50 {
            let name: String = Word().fake();
            let description: String = Sentence(0..6).fake();
            let price: f64 = (0.01..10_000.0).fake();
            let quantity: i32 = (0..100_000).fake();
            let product = Product::new(name, description, price, quantity);

            let id = service.create(product.clone()).await.unwrap();
            let stored = service.get_by_id(id).await.unwrap();
            assert_eq!(stored, Product { id, ..product });
        }

        let all = service.get_all().await.unwrap();
        assert_eq!(all.len(), 50);
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));
    }
}
