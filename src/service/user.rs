use crate::{
    abstract_trait::{
        DynHashing, DynUserCommandRepository, DynUserQueryRepository, UserServiceTrait,
    },
    domain::{
        requests::{CreateUserRequest, NewUser, UpdateUserRequest},
        responses::{ApiResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::info;

pub struct UserService {
    hash: DynHashing,
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
}

pub struct UserServiceDeps {
    pub hash: DynHashing,
    pub query: DynUserQueryRepository,
    pub command: DynUserCommandRepository,
}

impl UserService {
    pub fn new(deps: UserServiceDeps) -> Self {
        let UserServiceDeps {
            hash,
            query,
            command,
        } = deps;

        Self {
            hash,
            query,
            command,
        }
    }

    fn not_found(id: i32) -> ServiceError {
        ServiceError::NotFound(format!("user with id {id} not found"))
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<UserResponse>>, ServiceError> {
        let users = self.query.find_all().await?;

        let responses = users.into_iter().map(UserResponse::from).collect();

        Ok(ApiResponse::success("users retrieved", responses))
    }

    async fn create_user(
        &self,
        req: &CreateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let password_hash = self.hash.hash_password(&req.password).await?;

        let user = self
            .command
            .create_user(&NewUser {
                username: req.username.clone(),
                email: req.email.clone(),
                password_hash,
                role: req.role.clone(),
            })
            .await?;

        info!("Admin created user ID {}", user.user_id);
        Ok(ApiResponse::success("user added successfully", user.into()))
    }

    async fn update_user(
        &self,
        req: &UpdateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let user = self.command.update_user(req).await.map_err(|err| {
            match (err, req.id) {
                (RepositoryError::NotFound, Some(id)) => Self::not_found(id),
                (other, _) => other.into(),
            }
        })?;

        Ok(ApiResponse::success("user updated successfully", user.into()))
    }

    async fn delete_user(&self, id: i32) -> Result<ApiResponse<()>, ServiceError> {
        self.command.delete_user(id).await.map_err(|err| match err {
            RepositoryError::NotFound => Self::not_found(id),
            other => other.into(),
        })?;

        Ok(ApiResponse::success("user deleted successfully", ()))
    }
}
