use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use placement_core::domain::{User, UserRole};
use placement_core::services::CreateUserInput;

use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}

impl TryFrom<CreateUserRequest> for CreateUserInput {
    type Error = ApiError;

    fn try_from(req: CreateUserRequest) -> ApiResult<Self> {
        let role = match req.role.as_deref().map(str::trim) {
            None | Some("") => UserRole::default(),
            Some(raw) => UserRole::from_str(raw)
                .ok_or_else(|| ApiError::BadRequest(format!("Unknown role: {}", raw)))?,
        };
        Ok(CreateUserInput {
            username: req.username,
            password: req.password,
            email: req.email,
            role,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}
