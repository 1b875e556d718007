use crate::{
    abstract_trait::{
        DynProductCommandRepository, DynProductQueryRepository, ProductCommandRepositoryTrait,
        ProductQueryRepositoryTrait, StockRepositoryTrait,
    },
    config::ConnectionPool,
    domain::requests::{CreateProductRequest, PatchProductRequest, UpdateProductRequest},
    errors::RepositoryError,
    model::Product,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

const PRODUCT_COLUMNS: &str =
    "product_id, name, category_id, price, quantity, photo, created_at, updated_at";

#[derive(Clone)]
pub struct ProductRepository {
    pub query: DynProductQueryRepository,
    pub command: DynProductCommandRepository,
}

impl ProductRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query =
            Arc::new(ProductQueryRepository::new(pool.clone())) as DynProductQueryRepository;

        let command =
            Arc::new(ProductCommandRepository::new(pool.clone())) as DynProductCommandRepository;

        Self { query, command }
    }
}

pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(&self, category_id: Option<i32>) -> Result<Vec<Product>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = match category_id {
            Some(category_id) => {
                sqlx::query_as::<_, Product>(&format!(
                    "SELECT {PRODUCT_COLUMNS} FROM products WHERE category_id = $1 ORDER BY product_id"
                ))
                .bind(category_id)
                .fetch_all(&mut *conn)
                .await
            }
            None => {
                sqlx::query_as::<_, Product>(&format!(
                    "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY product_id"
                ))
                .fetch_all(&mut *conn)
                .await
            }
        };

        result.map_err(|err| {
            error!("Failed to list products: {:?}", err);
            RepositoryError::from(err)
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Product, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE product_id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("Failed to fetch product {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        product.ok_or(RepositoryError::NotFound)
    }
}

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            INSERT INTO products (name, category_id, price, quantity, photo, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, current_timestamp, current_timestamp)
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(&req.name)
        .bind(req.category_id)
        .bind(req.price)
        .bind(req.quantity)
        .bind(&req.photo)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("Failed to create product {}: {:?}", req.name, err);
            RepositoryError::from(err)
        })?;

        info!("Created product ID {} ({})", product.product_id, product.name);
        Ok(product)
    }

    async fn update_product(&self, req: &UpdateProductRequest) -> Result<Product, RepositoryError> {
        let id = req
            .id
            .ok_or_else(|| RepositoryError::Custom("update_product called without id".into()))?;

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            UPDATE products
            SET name = $2,
                category_id = $3,
                price = $4,
                quantity = $5,
                photo = $6,
                updated_at = current_timestamp
            WHERE product_id = $1
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&req.name)
        .bind(req.category_id)
        .bind(req.price)
        .bind(req.quantity)
        .bind(&req.photo)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("Failed to update product ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("Updated product ID {}", product.product_id);
        Ok(product)
    }

    async fn patch_product(&self, req: &PatchProductRequest) -> Result<Product, RepositoryError> {
        let id = req
            .id
            .ok_or_else(|| RepositoryError::Custom("patch_product called without id".into()))?;

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // COALESCE keeps the stored value for any field the caller omitted.
        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            UPDATE products
            SET name = COALESCE($2, name),
                category_id = COALESCE($3, category_id),
                price = COALESCE($4, price),
                quantity = COALESCE($5, quantity),
                photo = COALESCE($6, photo),
                updated_at = current_timestamp
            WHERE product_id = $1
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&req.name)
        .bind(req.category_id)
        .bind(req.price)
        .bind(req.quantity)
        .bind(&req.photo)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("Failed to patch product ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("Patched product ID {}", product.product_id);
        Ok(product)
    }

    async fn set_photo(&self, id: i32, photo: &str) -> Result<Product, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            UPDATE products
            SET photo = $2,
                updated_at = current_timestamp
            WHERE product_id = $1
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(photo)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("Failed to set photo for product {}: {:?}", id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("Set photo for product ID {}", product.product_id);
        Ok(product)
    }

    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("Failed to delete product {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("Deleted product ID {}", id);
        Ok(())
    }
}

#[async_trait]
impl StockRepositoryTrait for ProductCommandRepository {
    async fn decrement_stock(&self, product_id: i32, qty: i32) -> Result<Product, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // Single conditional update: the clamp happens server-side, so two
        // concurrent orders can never drive the quantity negative.
        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            UPDATE products
            SET quantity = GREATEST(quantity - $2, 0),
                updated_at = current_timestamp
            WHERE product_id = $1
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(product_id)
        .bind(qty)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("Failed to decrement stock for product {}: {:?}", product_id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!(
            "Decremented stock of product ID {} by {} (now {})",
            product.product_id, qty, product.quantity
        );
        Ok(product)
    }
}
