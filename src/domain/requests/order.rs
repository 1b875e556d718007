use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// One line item of an order: a product and how many units to take.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct OrderItemRequest {
    pub id: i32,

    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: i32,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct PlaceOrderRequest {
    #[validate(nested)]
    pub items: Vec<OrderItemRequest>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_item_list_is_valid() {
        let req: PlaceOrderRequest = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn zero_quantity_item_is_rejected() {
        let req = PlaceOrderRequest {
            items: vec![OrderItemRequest { id: 1, quantity: 0 }],
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn missing_items_field_is_a_parse_error() {
        let parsed: Result<PlaceOrderRequest, _> = serde_json::from_str("{}");
        assert!(parsed.is_err());
    }
}
