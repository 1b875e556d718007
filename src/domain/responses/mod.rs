mod api;
mod category;
mod order;
mod product;
mod token;
mod user;

pub use self::api::ApiResponse;
pub use self::category::CategoryResponse;
pub use self::order::OrderPlacedResponse;
pub use self::product::ProductResponse;
pub use self::token::TokenResponse;
pub use self::user::UserResponse;
