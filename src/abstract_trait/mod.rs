mod auth;
mod category;
mod hashing;
mod jwt;
mod order;
mod product;
mod user;

pub use self::auth::{AuthServiceTrait, DynAuthService};
pub use self::category::{
    CategoryQueryRepositoryTrait, CategoryServiceTrait, DynCategoryQueryRepository,
    DynCategoryService,
};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::order::{DynOrderService, DynStockRepository, OrderServiceTrait, StockRepositoryTrait};
pub use self::product::{
    DynProductCommandRepository, DynProductQueryRepository, DynProductService,
    ProductCommandRepositoryTrait, ProductQueryRepositoryTrait, ProductServiceTrait,
};
pub use self::user::{
    DynUserCommandRepository, DynUserQueryRepository, DynUserService,
    UserCommandRepositoryTrait, UserQueryRepositoryTrait, UserServiceTrait,
};
