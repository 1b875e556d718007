use crate::{
    abstract_trait::CategoryQueryRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::Category,
};
use async_trait::async_trait;
use tracing::error;

pub struct CategoryRepository {
    db: ConnectionPool,
}

impl CategoryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryQueryRepositoryTrait for CategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT category_id, name
            FROM categories
            ORDER BY category_id
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("Failed to list categories: {:?}", err);
            RepositoryError::from(err)
        })?;

        Ok(categories)
    }
}
