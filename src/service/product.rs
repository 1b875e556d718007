use crate::{
    abstract_trait::{
        DynProductCommandRepository, DynProductQueryRepository, ProductServiceTrait,
    },
    domain::{
        requests::{
            CreateProductRequest, FindAllProducts, PatchProductRequest, UpdateProductRequest,
        },
        responses::{ApiResponse, ProductResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;

pub struct ProductService {
    query: DynProductQueryRepository,
    command: DynProductCommandRepository,
}

pub struct ProductServiceDeps {
    pub query: DynProductQueryRepository,
    pub command: DynProductCommandRepository,
}

impl ProductService {
    pub fn new(deps: ProductServiceDeps) -> Self {
        let ProductServiceDeps { query, command } = deps;
        Self { query, command }
    }

    fn not_found(id: i32) -> ServiceError {
        ServiceError::NotFound(format!("product with id {id} not found"))
    }
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn find_all(
        &self,
        params: &FindAllProducts,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        let products = self.query.find_all(params.category_id).await?;

        let responses = products.into_iter().map(ProductResponse::from).collect();

        Ok(ApiResponse::success("products retrieved", responses))
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = self.query.find_by_id(id).await.map_err(|err| match err {
            RepositoryError::NotFound => Self::not_found(id),
            other => other.into(),
        })?;

        Ok(ApiResponse::success("product retrieved", product.into()))
    }

    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = self.command.create_product(req).await?;

        Ok(ApiResponse::success(
            "product created successfully",
            product.into(),
        ))
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = self.command.update_product(req).await.map_err(|err| {
            match (err, req.id) {
                (RepositoryError::NotFound, Some(id)) => Self::not_found(id),
                (other, _) => other.into(),
            }
        })?;

        Ok(ApiResponse::success(
            "product updated successfully",
            product.into(),
        ))
    }

    async fn patch_product(
        &self,
        req: &PatchProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = self.command.patch_product(req).await.map_err(|err| {
            match (err, req.id) {
                (RepositoryError::NotFound, Some(id)) => Self::not_found(id),
                (other, _) => other.into(),
            }
        })?;

        Ok(ApiResponse::success(
            "product updated successfully",
            product.into(),
        ))
    }

    async fn attach_photo(
        &self,
        id: i32,
        photo: &str,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = self.command.set_photo(id, photo).await.map_err(|err| {
            match err {
                RepositoryError::NotFound => Self::not_found(id),
                other => other.into(),
            }
        })?;

        Ok(ApiResponse::success("photo uploaded", product.into()))
    }

    async fn delete_product(&self, id: i32) -> Result<ApiResponse<()>, ServiceError> {
        self.command.delete_product(id).await.map_err(|err| match err {
            RepositoryError::NotFound => Self::not_found(id),
            other => other.into(),
        })?;

        Ok(ApiResponse::success("product deleted successfully", ()))
    }
}
