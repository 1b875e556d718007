use crate::{
    abstract_trait::{
        DynAuthService, DynCategoryService, DynHashing, DynJwtService, DynOrderService,
        DynProductService, DynStockRepository, DynUserService,
    },
    config::ConnectionPool,
    repository::{CategoryRepository, ProductCommandRepository, ProductRepository, UserRepository},
    service::{
        AuthService, AuthServiceDeps, CategoryService, OrderService, ProductService,
        ProductServiceDeps, UserService, UserServiceDeps,
    },
};
use std::sync::Arc;

/// Wires repositories into services once, at startup. Everything downstream
/// receives `Arc`'d trait objects; nothing reaches for globals.
#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub category_service: DynCategoryService,
    pub product_service: DynProductService,
    pub order_service: DynOrderService,
    pub user_service: DynUserService,
}

pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub hash: DynHashing,
    pub jwt_config: DynJwtService,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps {
            pool,
            hash,
            jwt_config,
        } = deps;

        let category_repository = Arc::new(CategoryRepository::new(pool.clone()));
        let product_repository = ProductRepository::new(pool.clone());
        let user_repository = UserRepository::new(pool.clone());

        let stock_repository =
            Arc::new(ProductCommandRepository::new(pool.clone())) as DynStockRepository;

        let auth_service = Arc::new(AuthService::new(AuthServiceDeps {
            hash: hash.clone(),
            jwt: jwt_config,
            query: user_repository.query.clone(),
            command: user_repository.command.clone(),
        })) as DynAuthService;

        let category_service =
            Arc::new(CategoryService::new(category_repository)) as DynCategoryService;

        let product_service = Arc::new(ProductService::new(ProductServiceDeps {
            query: product_repository.query.clone(),
            command: product_repository.command.clone(),
        })) as DynProductService;

        let order_service = Arc::new(OrderService::new(stock_repository)) as DynOrderService;

        let user_service = Arc::new(UserService::new(UserServiceDeps {
            hash,
            query: user_repository.query.clone(),
            command: user_repository.command.clone(),
        })) as DynUserService;

        Self {
            auth_service,
            category_service,
            product_service,
            order_service,
            user_service,
        }
    }
}
