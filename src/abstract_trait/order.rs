use crate::{
    domain::{
        requests::PlaceOrderRequest,
        responses::{ApiResponse, OrderPlacedResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Product,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynStockRepository = Arc<dyn StockRepositoryTrait + Send + Sync>;
pub type DynOrderService = Arc<dyn OrderServiceTrait + Send + Sync>;

/// The one storage capability order fulfillment needs: take units off a
/// product's stock, clamping at zero, in a single atomic statement.
#[async_trait]
pub trait StockRepositoryTrait {
    async fn decrement_stock(&self, product_id: i32, qty: i32) -> Result<Product, RepositoryError>;
}

#[async_trait]
pub trait OrderServiceTrait {
    async fn place_order(
        &self,
        req: &PlaceOrderRequest,
    ) -> Result<ApiResponse<OrderPlacedResponse>, ServiceError>;
}
