mod category;
mod product;
mod user;

pub use self::category::CategoryRepository;
pub use self::product::{ProductCommandRepository, ProductQueryRepository, ProductRepository};
pub use self::user::{UserCommandRepository, UserQueryRepository, UserRepository};
