mod auth;
mod order;
mod product;
mod user;

pub use self::auth::{LoginRequest, RegisterRequest};
pub use self::order::{OrderItemRequest, PlaceOrderRequest};
pub use self::product::{
    CreateProductRequest, FindAllProducts, PatchProductRequest, UpdateProductRequest,
};
pub use self::user::{CreateUserRequest, NewUser, UpdateUserRequest};
