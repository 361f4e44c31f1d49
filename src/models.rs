use serde::{Deserialize, Serialize};
use validator::Validate;

/// A registered account. Only the bcrypt hash of the password is kept.
#[derive(Clone)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Response envelope for both auth endpoints. Exactly one of `token` or
/// `errors` is set.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResult {
    pub result: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl AuthResult {
    pub fn success(token: String) -> Self {
        AuthResult {
            result: true,
            token: Some(token),
            errors: None,
        }
    }

    pub fn failure(message: &str) -> Self {
        AuthResult {
            result: false,
            token: None,
            errors: Some(vec![message.to_string()]),
        }
    }
}

/// Claims carried by every issued token. `iat` and `exp` are Unix epoch
/// seconds; `exp` is always `iat` plus one hour.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub id: String,
    pub sub: String,
    pub email: String,
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

/// An employee record. Ids are assigned by the store on creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default)]
    pub employee_id: i32,
    pub name: String,
    pub department: String,
    pub email: String,
}
