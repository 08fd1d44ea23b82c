use utoipa::OpenApi;

/// Swagger UI mount point.
pub const DOCS_PATH: &str = "/api-docs";
/// Raw OpenAPI document.
pub const SPEC_PATH: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        version = "1.0.0",
        description = "A simple API to manage users",
        contact(name = "João Campos", email = "joaocanabarrocampos@gmail.com")
    ),
    paths(
        crate::routes::list_users,
        crate::routes::create_user,
        crate::routes::update_user,
        crate::routes::delete_user,
    ),
    components(schemas(
        crate::dto::UserResponse,
        crate::dto::CreateUserRequest,
        crate::dto::UpdateUserRequest,
        crate::dto::CreateUserResponse,
        crate::dto::UpdateUserResponse,
        crate::dto::MessageResponse,
        crate::dto::ErrorResponse,
    )),
    tags(
        (name = "users", description = "User management"),
    )
)]
pub struct ApiDoc;
