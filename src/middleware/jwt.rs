use crate::{abstract_trait::DynJwtService, errors::ErrorResponse};
use axum::{
    Extension, Json,
    body::Body,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;

/// Verified caller identity, inserted as a request extension.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i64,
    pub role: String,
}

pub async fn auth_middleware(
    cookie_jar: CookieJar,
    Extension(jwt): Extension<DynJwtService>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let token = cookie_jar
        .get("token")
        .map(|cookie| cookie.value().to_string())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .and_then(|auth_value| auth_value.strip_prefix("Bearer ").map(str::to_owned))
        });

    let token = match token {
        Some(token) => token,
        None => {
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse {
                    status: "error".to_string(),
                    message: "You are not logged in, please provide a token".to_string(),
                }),
            ));
        }
    };

    // Missing token is 401; a token that fails verification is 403.
    let claims = match jwt.verify_token(&token) {
        Ok(claims) => claims,
        Err(_) => {
            return Err((
                StatusCode::FORBIDDEN,
                Json(ErrorResponse {
                    status: "error".to_string(),
                    message: "Invalid token".to_string(),
                }),
            ));
        }
    };

    req.extensions_mut().insert(AuthUser {
        user_id: claims.sub,
        role: claims.role,
    });

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::JwtServiceTrait,
        config::{Claims, JwtConfig},
    };
    use axum::{Router, middleware::from_fn, routing::get};
    use chrono::{Duration, Utc};
    use jsonwebtoken::{EncodingKey, Header as JwtHeader, encode};
    use std::sync::Arc;
    use tower::ServiceExt;

    const SECRET: &str = "test-secret";

    async fn protected() -> &'static str {
        "ok"
    }

    fn router() -> Router {
        let jwt: DynJwtService = Arc::new(JwtConfig::new(SECRET));
        Router::new()
            .route("/protected", get(protected))
            .route_layer(from_fn(auth_middleware))
            .layer(Extension(jwt))
    }

    fn request(uri: &str) -> axum::http::request::Builder {
        Request::builder().uri(uri)
    }

    #[tokio::test]
    async fn missing_token_returns_401() {
        let res = router()
            .oneshot(request("/protected").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn invalid_token_returns_403() {
        let res = router()
            .oneshot(
                request("/protected")
                    .header(header::AUTHORIZATION, "Bearer not.a.jwt")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn expired_token_returns_403() {
        let now = Utc::now();
        let claims = Claims {
            sub: 7,
            role: "user".to_string(),
            iat: (now - Duration::hours(2)).timestamp() as usize,
            exp: (now - Duration::hours(1)).timestamp() as usize,
        };
        let token = encode(
            &JwtHeader::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_ref()),
        )
        .unwrap();

        let res = router()
            .oneshot(
                request("/protected")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn bearer_token_is_accepted() {
        let token = JwtConfig::new(SECRET).generate_token(1, "user").unwrap();

        let res = router()
            .oneshot(
                request("/protected")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn cookie_token_is_accepted() {
        let token = JwtConfig::new(SECRET).generate_token(1, "user").unwrap();

        let res = router()
            .oneshot(
                request("/protected")
                    .header(header::COOKIE, format!("token={token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }
}
