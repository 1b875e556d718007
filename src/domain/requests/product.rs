use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, IntoParams, Clone)]
pub struct FindAllProducts {
    pub category_id: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    pub category_id: i32,

    #[validate(range(min = 1, message = "price must be positive"))]
    pub price: i64,

    #[validate(range(min = 1, message = "quantity must be positive"))]
    pub quantity: i32,

    pub photo: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct UpdateProductRequest {
    // Filled from the path parameter by the handler.
    #[serde(skip)]
    pub id: Option<i32>,

    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    pub category_id: i32,

    #[validate(range(min = 1, message = "price must be positive"))]
    pub price: i64,

    #[validate(range(min = 0, message = "quantity must not be negative"))]
    pub quantity: i32,

    pub photo: Option<String>,
}

/// Partial update: only the provided fields are written.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct PatchProductRequest {
    #[serde(skip)]
    pub id: Option<i32>,

    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,

    pub category_id: Option<i32>,

    #[validate(range(min = 1, message = "price must be positive"))]
    pub price: Option<i64>,

    #[validate(range(min = 0, message = "quantity must not be negative"))]
    pub quantity: Option<i32>,

    pub photo: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_rejects_zero_price() {
        let req = CreateProductRequest {
            name: "Keyboard".into(),
            category_id: 1,
            price: 0,
            quantity: 5,
            photo: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn create_rejects_zero_quantity() {
        let req = CreateProductRequest {
            name: "Keyboard".into(),
            category_id: 1,
            price: 4999,
            quantity: 0,
            photo: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn patch_accepts_sparse_body() {
        let req: PatchProductRequest = serde_json::from_str(r#"{"price": 1299}"#).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.price, Some(1299));
        assert!(req.name.is_none());
    }
}
