use serde::{Deserialize, Serialize};

/// Query string of `GET /login`. Absent values are empty and never match.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginQuery {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

pub const LOGIN_SUCCESS_MESSAGE: &str = "You are logged in!";
pub const LOGIN_FAILURE_MESSAGE: &str = "Wrong username or password";
