use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, put};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use users_core::parse_user_id;

use crate::dto::{
    CreateUserRequest, CreateUserResponse, MessageResponse, USER_ADDED, USER_DELETED,
    USER_NOT_FOUND, USER_UPDATED, UpdateUserRequest, UpdateUserResponse, UserResponse,
};
use crate::error::ApiError;
use crate::extract::LenientJson;
use crate::openapi::{ApiDoc, DOCS_PATH, SPEC_PATH};
use crate::state::AppState;

pub const WELCOME: &str = "Welcome to our Users API!";

/// Build the full router with all routes and the documentation endpoints.
pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", put(update_user).delete(delete_user));

    let public = Router::new()
        .route("/", get(root))
        .merge(SwaggerUi::new(DOCS_PATH).url(SPEC_PATH, ApiDoc::openapi()));

    public.merge(api).with_state(state)
}

pub async fn root() -> &'static str {
    WELCOME
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/users",
    summary = "Retrieves a list of users",
    description = "Returns every stored user in insertion order.",
    responses(
        (status = 200, description = "A list of users", body = Vec<UserResponse>),
    ),
    tag = "users"
)]
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let users = state.users.list()?;
    let response: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Ok(axum::Json(response))
}

#[utoipa::path(
    post,
    path = "/users",
    summary = "Add a new user",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User added successfully!", body = CreateUserResponse),
    ),
    tag = "users"
)]
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    LenientJson(body): LenientJson<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.users.create(body.into())?;
    tracing::info!(id = user.id, "User created");

    let response = CreateUserResponse {
        message: USER_ADDED.to_string(),
        users: UserResponse::from(user),
    };

    Ok(axum::Json(response))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    summary = "Update an existing user",
    params(
        ("id" = i64, Path, description = "Numeric id of the user to update")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated successfully!", body = UpdateUserResponse),
        (status = 404, description = "User not found!", body = MessageResponse),
    ),
    tag = "users"
)]
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    LenientJson(body): LenientJson<UpdateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let Some(id) = parse_user_id(&raw_id) else {
        tracing::debug!(raw_id = %raw_id, "Update with non-numeric user id");
        let body = MessageResponse::new(USER_NOT_FOUND);
        return Ok((StatusCode::NOT_FOUND, axum::Json(body)).into_response());
    };

    let user = state.users.update(id, body.into())?;
    tracing::info!(id, "User updated");

    let response = UpdateUserResponse {
        message: USER_UPDATED.to_string(),
        user: UserResponse::from(user),
    };

    Ok(axum::Json(response).into_response())
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    summary = "Delete a user",
    params(
        ("id" = i64, Path, description = "Numeric id of the user to delete")
    ),
    responses(
        (status = 200, description = "User deleted successfully!", body = MessageResponse),
    ),
    tag = "users"
)]
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    match parse_user_id(&raw_id) {
        Some(id) => {
            let removed = state.users.delete(id)?;
            if removed == 0 {
                tracing::debug!(id, "Delete matched no user");
            } else {
                tracing::info!(id, removed, "User deleted");
            }
        }
        None => tracing::debug!(raw_id = %raw_id, "Delete with non-numeric user id"),
    }

    Ok(axum::Json(MessageResponse::new(USER_DELETED)))
}
