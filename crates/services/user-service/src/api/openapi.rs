//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::api::handlers::health_handler::HealthResponse;
use crate::api::handlers::user_handler::{CreateUserRequest, UpdateUserRequest};
use domain::{PaginatedUsers, User};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::health_handler::health_check,
        crate::api::handlers::user_handler::list_users,
        crate::api::handlers::user_handler::get_user,
        crate::api::handlers::user_handler::create_user,
        crate::api::handlers::user_handler::update_user,
        crate::api::handlers::user_handler::delete_user,
    ),
    components(
        schemas(
            User,
            PaginatedUsers,
            CreateUserRequest,
            UpdateUserRequest,
            HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "User management endpoints"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;
