use crate::{
    abstract_trait::{
        AuthServiceTrait, DynHashing, DynJwtService, DynUserCommandRepository,
        DynUserQueryRepository,
    },
    domain::{
        requests::{LoginRequest, NewUser, RegisterRequest},
        responses::{ApiResponse, TokenResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::{info, warn};

pub struct AuthService {
    hash: DynHashing,
    jwt: DynJwtService,
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
}

pub struct AuthServiceDeps {
    pub hash: DynHashing,
    pub jwt: DynJwtService,
    pub query: DynUserQueryRepository,
    pub command: DynUserCommandRepository,
}

impl AuthService {
    pub fn new(deps: AuthServiceDeps) -> Self {
        let AuthServiceDeps {
            hash,
            jwt,
            query,
            command,
        } = deps;

        Self {
            hash,
            jwt,
            query,
            command,
        }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register(&self, req: &RegisterRequest) -> Result<ApiResponse<()>, ServiceError> {
        let taken = self
            .query
            .exists_by_username_or_email(&req.username, &req.email)
            .await?;

        if taken {
            warn!("Registration rejected, username or email taken: {}", req.username);
            return Err(RepositoryError::AlreadyExists(
                "a user with this username or email already exists".into(),
            )
            .into());
        }

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

        info!("Registered user ID {} ({})", user.user_id, user.username);
        Ok(ApiResponse::success("user registered successfully", ()))
    }

    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        let user = self
            .query
            .find_by_username(&req.username)
            .await?
            .ok_or_else(|| {
                warn!("Login attempt for unknown user {}", req.username);
                ServiceError::NotFound(format!("user '{}' not found", req.username))
            })?;

        self.hash
            .compare_password(&user.password_hash, &req.password)
            .await?;

        let token = self.jwt.generate_token(user.user_id as i64, &user.role)?;

        info!("User {} logged in", user.username);
        Ok(ApiResponse::success(
            "login successful",
            TokenResponse {
                token,
                username: user.username,
                role: user.role,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{UserCommandRepositoryTrait, UserQueryRepositoryTrait},
        config::{Hashing, JwtConfig},
        domain::requests::UpdateUserRequest,
        model::User,
    };
    use std::sync::{Arc, Mutex};

    struct InMemoryUsers {
        users: Mutex<Vec<User>>,
    }

    impl InMemoryUsers {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                users: Mutex::new(Vec::new()),
            })
        }

        fn with_user(username: &str, password_hash: &str, role: &str) -> Arc<Self> {
            let store = Self::new();
            store.users.lock().unwrap().push(User {
                user_id: 1,
                username: username.into(),
                email: format!("{username}@example.com"),
                password_hash: password_hash.into(),
                role: role.into(),
                created_at: None,
                updated_at: None,
            });
            store
        }
    }

    #[async_trait]
    impl UserQueryRepositoryTrait for InMemoryUsers {
        async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
            Ok(self.users.lock().unwrap().clone())
        }

        async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.username == username)
                .cloned())
        }

        async fn exists_by_username_or_email(
            &self,
            username: &str,
            email: &str,
        ) -> Result<bool, RepositoryError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .any(|u| u.username == username || u.email == email))
        }
    }

    #[async_trait]
    impl UserCommandRepositoryTrait for InMemoryUsers {
        async fn create_user(&self, user: &NewUser) -> Result<User, RepositoryError> {
            let mut users = self.users.lock().unwrap();
            let created = User {
                user_id: users.len() as i32 + 1,
                username: user.username.clone(),
                email: user.email.clone(),
                password_hash: user.password_hash.clone(),
                role: user.role.clone(),
                created_at: None,
                updated_at: None,
            };
            users.push(created.clone());
            Ok(created)
        }

        async fn update_user(&self, _req: &UpdateUserRequest) -> Result<User, RepositoryError> {
            Err(RepositoryError::NotFound)
        }

        async fn delete_user(&self, _id: i32) -> Result<(), RepositoryError> {
            Err(RepositoryError::NotFound)
        }
    }

    fn auth_service(store: Arc<InMemoryUsers>) -> AuthService {
        AuthService::new(AuthServiceDeps {
            hash: Arc::new(Hashing::new()),
            jwt: Arc::new(JwtConfig::new("test-secret")),
            query: store.clone(),
            command: store,
        })
    }

    fn register_request(username: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.into(),
            email: format!("{username}@example.com"),
            password: "secret1".into(),
            role: "user".into(),
        }
    }

    #[tokio::test]
    async fn register_then_login_succeeds() {
        let store = InMemoryUsers::new();
        let service = auth_service(store);

        service.register(&register_request("alice")).await.unwrap();

        let response = service
            .login(&LoginRequest {
                username: "alice".into(),
                password: "secret1".into(),
            })
            .await
            .unwrap();

        assert_eq!(response.data.username, "alice");
        assert_eq!(response.data.role, "user");
        assert!(!response.data.token.is_empty());
    }

    #[tokio::test]
    async fn duplicate_registration_is_a_conflict() {
        let store = InMemoryUsers::new();
        let service = auth_service(store);

        service.register(&register_request("alice")).await.unwrap();
        let err = service
            .register(&register_request("alice"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::AlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn login_for_unknown_user_is_not_found() {
        let service = auth_service(InMemoryUsers::new());

        let err = service
            .login(&LoginRequest {
                username: "ghost".into(),
                password: "whatever".into(),
            })
            .await
            .unwrap_err();

        match err {
            ServiceError::NotFound(msg) => assert!(msg.contains("ghost")),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let hashed = bcrypt::hash("right-password", 4).unwrap();
        let store = InMemoryUsers::with_user("alice", &hashed, "user");
        let service = auth_service(store);

        let err = service
            .login(&LoginRequest {
                username: "alice".into(),
                password: "wrong-password".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidCredentials));
    }

    #[tokio::test]
    async fn issued_token_carries_the_user_role() {
        let hashed = bcrypt::hash("secret1", 4).unwrap();
        let store = InMemoryUsers::with_user("root", &hashed, "admin");
        let service = auth_service(store);

        let response = service
            .login(&LoginRequest {
                username: "root".into(),
                password: "secret1".into(),
            })
            .await
            .unwrap();

        let jwt = JwtConfig::new("test-secret");
        let claims = crate::abstract_trait::JwtServiceTrait::verify_token(&jwt, &response.data.token)
            .unwrap();
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.sub, 1);
    }
}
