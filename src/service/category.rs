use crate::{
    abstract_trait::{CategoryServiceTrait, DynCategoryQueryRepository},
    domain::responses::{ApiResponse, CategoryResponse},
    errors::ServiceError,
};
use async_trait::async_trait;

pub struct CategoryService {
    query: DynCategoryQueryRepository,
}

impl CategoryService {
    pub fn new(query: DynCategoryQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<CategoryResponse>>, ServiceError> {
        let categories = self.query.find_all().await?;

        let responses = categories.into_iter().map(CategoryResponse::from).collect();

        Ok(ApiResponse::success("categories retrieved", responses))
    }
}
