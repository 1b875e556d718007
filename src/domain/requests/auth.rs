use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct RegisterRequest {
    #[validate(length(min = 3, message = "username must be at least 3 characters"))]
    pub username: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,

    // The registration form never asks for a role; absent means a regular user.
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "user".to_string()
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_defaults_to_user_role() {
        let req: RegisterRequest =
            serde_json::from_str(r#"{"username":"alice","email":"alice@example.com","password":"secret1"}"#)
                .unwrap();
        assert_eq!(req.role, "user");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn register_rejects_bad_email() {
        let req = RegisterRequest {
            username: "alice".into(),
            email: "not-an-email".into(),
            password: "secret1".into(),
            role: "user".into(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn register_rejects_short_password() {
        let req = RegisterRequest {
            username: "alice".into(),
            email: "alice@example.com".into(),
            password: "abc".into(),
            role: "user".into(),
        };
        assert!(req.validate().is_err());
    }
}
