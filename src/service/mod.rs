mod auth;
mod category;
mod order;
mod product;
mod user;

pub use self::auth::{AuthService, AuthServiceDeps};
pub use self::category::CategoryService;
pub use self::order::OrderService;
pub use self::product::{ProductService, ProductServiceDeps};
pub use self::user::{UserService, UserServiceDeps};
