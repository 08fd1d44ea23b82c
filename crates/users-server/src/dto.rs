use serde::{Deserialize, Serialize};

use users_core::{NewUser, User, UserPatch};

pub const USER_ADDED: &str = "User added successfully!";
pub const USER_UPDATED: &str = "User updated successfully!";
pub const USER_DELETED: &str = "User deleted successfully!";
pub const USER_NOT_FOUND: &str = "User not found!";

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// Wire shape of a stored user. Serializes exactly like `users_core::User`.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct UserResponse {
    pub id: i64,
    /// Whatever JSON value was stored as the name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<serde_json::Value>,
    /// Stored and returned in plaintext
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<serde_json::Value>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            password: user.password,
        }
    }
}

/// Any JSON value is accepted for either field and stored as sent.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    pub name: Option<serde_json::Value>,
    pub password: Option<serde_json::Value>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(body: CreateUserRequest) -> Self {
        Self {
            name: body.name,
            password: body.password,
        }
    }
}

#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct UpdateUserRequest {
    /// New name; missing, null, false, 0 or "" keeps the current one
    pub name: Option<serde_json::Value>,
    /// New password; missing, null, false, 0 or "" keeps the current one
    pub password: Option<serde_json::Value>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(body: UpdateUserRequest) -> Self {
        Self {
            name: body.name,
            password: body.password,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CreateUserResponse {
    pub message: String,
    /// The created user (a single object despite the plural key)
    pub users: UserResponse,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct UpdateUserResponse {
    pub message: String,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Messages and errors
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
