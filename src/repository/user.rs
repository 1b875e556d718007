use crate::{
    abstract_trait::{
        DynUserCommandRepository, DynUserQueryRepository, UserCommandRepositoryTrait,
        UserQueryRepositoryTrait,
    },
    config::ConnectionPool,
    domain::requests::{NewUser, UpdateUserRequest},
    errors::RepositoryError,
    model::User,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

const USER_COLUMNS: &str =
    "user_id, username, email, password_hash, role, created_at, updated_at";

#[derive(Clone)]
pub struct UserRepository {
    pub query: DynUserQueryRepository,
    pub command: DynUserCommandRepository,
}

impl UserRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query = Arc::new(UserQueryRepository::new(pool.clone())) as DynUserQueryRepository;

        let command =
            Arc::new(UserCommandRepository::new(pool.clone())) as DynUserCommandRepository;

        Self { query, command }
    }
}

pub struct UserQueryRepository {
    db: ConnectionPool,
}

impl UserQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for UserQueryRepository {
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY user_id ASC"
        ))
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("Failed to list users: {:?}", err);
            RepositoryError::from(err)
        })?;

        Ok(users)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("Failed to fetch user {}: {:?}", username, err);
            RepositoryError::from(err)
        })?;

        Ok(user)
    }

    async fn exists_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = $1 OR email = $2)",
        )
        .bind(username)
        .bind(email)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("Failed to check user existence: {:?}", err);
            RepositoryError::from(err)
        })?;

        Ok(exists.0)
    }
}

pub struct UserCommandRepository {
    db: ConnectionPool,
}

impl UserCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn create_user(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let created = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (username, email, password_hash, role, created_at, updated_at)
            VALUES ($1, $2, $3, $4, current_timestamp, current_timestamp)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.role)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            if let sqlx::Error::Database(db_err) = &err {
                if db_err.is_unique_violation() {
                    return RepositoryError::AlreadyExists(format!(
                        "user '{}' already exists",
                        user.username
                    ));
                }
            }
            error!("Failed to create user {}: {:?}", user.username, err);
            RepositoryError::from(err)
        })?;

        info!("Created user ID {} ({})", created.user_id, created.username);
        Ok(created)
    }

    async fn update_user(&self, req: &UpdateUserRequest) -> Result<User, RepositoryError> {
        let id = req
            .id
            .ok_or_else(|| RepositoryError::Custom("update_user called without id".into()))?;

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users
            SET username = $2,
                email = $3,
                role = $4,
                updated_at = current_timestamp
            WHERE user_id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&req.username)
        .bind(&req.email)
        .bind(&req.role)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("Failed to update user ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("Updated user ID {}", user.user_id);
        Ok(user)
    }

    async fn delete_user(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("Failed to delete user {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("Deleted user ID {}", id);
        Ok(())
    }
}
