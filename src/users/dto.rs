use serde::{Deserialize, Serialize};
use time::Date;

use crate::users::model::User;

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub birthdate: Date,
    pub password: String,
}

/// Request body for updating a user. The password is optional: the stored
/// digest is only replaced when a new plaintext is supplied.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub email: String,
    pub name: String,
    pub birthdate: Date,
    pub password: Option<String>,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after registration.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Response returned after login. Token only, no user record.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Response returned after deletion.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
