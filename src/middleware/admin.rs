use crate::{errors::ErrorResponse, middleware::jwt::AuthUser};
use axum::{
    Extension, Json,
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::IntoResponse,
};

/// Runs after `auth_middleware`; rejects any caller whose token does not
/// carry the admin role.
pub async fn admin_middleware(
    Extension(user): Extension<AuthUser>,
    req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    if user.role != "admin" {
        return Err((
            StatusCode::FORBIDDEN,
            Json(ErrorResponse {
                status: "error".to_string(),
                message: "Access denied".to_string(),
            }),
        ));
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{DynJwtService, JwtServiceTrait},
        config::JwtConfig,
        middleware::auth_middleware,
    };
    use axum::{Router, body::Body, http::header, middleware::from_fn, routing::get};
    use std::sync::Arc;
    use tower::ServiceExt;

    const SECRET: &str = "test-secret";

    async fn protected() -> &'static str {
        "ok"
    }

    // Same layering order as the admin-only route group.
    fn router() -> Router {
        let jwt: DynJwtService = Arc::new(JwtConfig::new(SECRET));
        Router::new()
            .route("/admin-only", get(protected))
            .route_layer(from_fn(admin_middleware))
            .route_layer(from_fn(auth_middleware))
            .layer(Extension(jwt))
    }

    async fn get_with_role(role: &str) -> StatusCode {
        let token = JwtConfig::new(SECRET).generate_token(1, role).unwrap();
        let res = router()
            .oneshot(
                Request::builder()
                    .uri("/admin-only")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        res.status()
    }

    #[tokio::test]
    async fn non_admin_role_returns_403() {
        assert_eq!(get_with_role("user").await, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn admin_role_passes_through() {
        assert_eq!(get_with_role("admin").await, StatusCode::OK);
    }
}
