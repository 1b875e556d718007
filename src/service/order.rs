use crate::{
    abstract_trait::{DynStockRepository, OrderServiceTrait},
    domain::{
        requests::PlaceOrderRequest,
        responses::{ApiResponse, OrderPlacedResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::{info, warn};

/// Order fulfillment: walks the line items in input order and takes each
/// requested quantity off the product's stock, clamping at zero.
///
/// An unknown product id aborts the rest of the batch, but decrements
/// already applied are kept; there is no rollback and no idempotency key,
/// so replaying a batch decrements stock again.
pub struct OrderService {
    stock: DynStockRepository,
}

impl OrderService {
    pub fn new(stock: DynStockRepository) -> Self {
        Self { stock }
    }
}

#[async_trait]
impl OrderServiceTrait for OrderService {
    async fn place_order(
        &self,
        req: &PlaceOrderRequest,
    ) -> Result<ApiResponse<OrderPlacedResponse>, ServiceError> {
        for item in &req.items {
            match self.stock.decrement_stock(item.id, item.quantity).await {
                Ok(product) => {
                    info!(
                        "Order line applied: product {} x{} (stock now {})",
                        item.id, item.quantity, product.quantity
                    );
                }
                Err(RepositoryError::NotFound) => {
                    warn!("Order aborted: product {} not found", item.id);
                    return Err(ServiceError::NotFound(format!(
                        "product with id {} not found",
                        item.id
                    )));
                }
                Err(err) => return Err(err.into()),
            }
        }

        Ok(ApiResponse::success(
            "order placed successfully",
            OrderPlacedResponse {
                items_processed: req.items.len(),
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::StockRepositoryTrait, domain::requests::OrderItemRequest, model::Product,
    };
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    };

    /// In-memory stand-in for the products table, mirroring the clamping
    /// UPDATE the real repository issues.
    struct InMemoryStock {
        quantities: Mutex<HashMap<i32, i32>>,
    }

    impl InMemoryStock {
        fn new(products: &[(i32, i32)]) -> Self {
            Self {
                quantities: Mutex::new(products.iter().copied().collect()),
            }
        }

        fn quantity(&self, id: i32) -> i32 {
            self.quantities.lock().unwrap()[&id]
        }
    }

    #[async_trait]
    impl StockRepositoryTrait for InMemoryStock {
        async fn decrement_stock(
            &self,
            product_id: i32,
            qty: i32,
        ) -> Result<Product, RepositoryError> {
            let mut quantities = self.quantities.lock().unwrap();
            let current = quantities
                .get_mut(&product_id)
                .ok_or(RepositoryError::NotFound)?;
            *current = (*current - qty).max(0);

            Ok(Product {
                product_id,
                name: format!("product-{product_id}"),
                category_id: 1,
                price: 100,
                quantity: *current,
                photo: None,
                created_at: None,
                updated_at: None,
            })
        }
    }

    fn service_with(products: &[(i32, i32)]) -> (OrderService, Arc<InMemoryStock>) {
        let stock = Arc::new(InMemoryStock::new(products));
        (OrderService::new(stock.clone()), stock)
    }

    fn order(items: &[(i32, i32)]) -> PlaceOrderRequest {
        PlaceOrderRequest {
            items: items
                .iter()
                .map(|&(id, quantity)| OrderItemRequest { id, quantity })
                .collect(),
        }
    }

    #[tokio::test]
    async fn decrements_every_item_when_stock_suffices() {
        let (service, stock) = service_with(&[(1, 10), (2, 3)]);

        let response = service.place_order(&order(&[(1, 4), (2, 1)])).await.unwrap();

        assert_eq!(response.status, "success");
        assert_eq!(response.data.items_processed, 2);
        assert_eq!(stock.quantity(1), 6);
        assert_eq!(stock.quantity(2), 2);
    }

    #[tokio::test]
    async fn oversell_clamps_to_zero() {
        // products = [{1, 10}, {2, 3}], batch = [{1, 4}, {2, 5}]
        let (service, stock) = service_with(&[(1, 10), (2, 3)]);

        let response = service.place_order(&order(&[(1, 4), (2, 5)])).await.unwrap();

        assert_eq!(response.status, "success");
        assert_eq!(stock.quantity(1), 6);
        assert_eq!(stock.quantity(2), 0);
    }

    #[tokio::test]
    async fn unknown_product_aborts_but_keeps_earlier_decrements() {
        // products = [{1, 10}], batch = [{1, 2}, {99, 1}]
        let (service, stock) = service_with(&[(1, 10)]);

        let err = service
            .place_order(&order(&[(1, 2), (99, 1)]))
            .await
            .unwrap_err();

        match err {
            ServiceError::NotFound(msg) => assert!(msg.contains("99"), "message was: {msg}"),
            other => panic!("expected NotFound, got {other:?}"),
        }
        // The first line item stays applied: partial, no rollback.
        assert_eq!(stock.quantity(1), 8);
    }

    #[tokio::test]
    async fn items_after_the_missing_one_are_untouched() {
        let (service, stock) = service_with(&[(1, 10), (2, 5)]);

        let err = service
            .place_order(&order(&[(99, 1), (2, 3)]))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(stock.quantity(1), 10);
        assert_eq!(stock.quantity(2), 5);
    }

    #[tokio::test]
    async fn empty_batch_is_a_noop_success() {
        let (service, stock) = service_with(&[(1, 10)]);

        let response = service.place_order(&order(&[])).await.unwrap();

        assert_eq!(response.status, "success");
        assert_eq!(response.data.items_processed, 0);
        assert_eq!(stock.quantity(1), 10);
    }

    #[tokio::test]
    async fn replaying_a_batch_decrements_twice() {
        let (service, stock) = service_with(&[(1, 10)]);
        let batch = order(&[(1, 3)]);

        service.place_order(&batch).await.unwrap();
        service.place_order(&batch).await.unwrap();

        assert_eq!(stock.quantity(1), 4);
    }
}
