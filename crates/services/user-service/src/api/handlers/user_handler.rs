//! User handlers.

use std::borrow::Cow;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::info;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError, ValidationErrors};

use common::{AppResult, OptionExt};
use domain::{
    NewUser, Paginated, PaginatedUsers, User, UserPatch, DEFAULT_LIMIT, DEFAULT_PAGE, MAX_AGE,
    MIN_AGE,
};

use crate::api::extractors::{ValidatedJson, ValidatedQuery};
use crate::api::state::AppState;

/// Page selection for list endpoints
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// 1-based page number, default 1
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page must not be less than 1"))]
    pub page: u64,
    /// Records per page, default 10
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, message = "limit must not be less than 1"))]
    pub limit: u64,
}

fn default_page() -> u64 {
    DEFAULT_PAGE
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

/// User creation request with validation
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateUserRequest {
    /// Display name
    #[schema(example = "Jane Doe")]
    pub name: String,
    /// Age in years, 2 to 100
    #[schema(example = 30, minimum = 2, maximum = 100)]
    pub age: i32,
}

impl Validate for CreateUserRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_age(Some(self.age))
    }
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        NewUser::new(req.name, req.age)
    }
}

/// User update request; omitted fields keep their current value
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateUserRequest {
    /// New display name
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    /// New age, 2 to 100
    #[schema(example = 31, minimum = 2, maximum = 100)]
    pub age: Option<i32>,
}

impl Validate for UpdateUserRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_age(self.age)
    }
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(req: UpdateUserRequest) -> Self {
        UserPatch {
            name: req.name,
            age: req.age,
        }
    }
}

/// Age bounds check reporting which bound was crossed.
fn validate_age(age: Option<i32>) -> Result<(), ValidationErrors> {
    let message = match age {
        Some(age) if age < MIN_AGE => format!("age must be greater than {}", MIN_AGE),
        Some(age) if age > MAX_AGE => format!("age must be less than {}", MAX_AGE),
        _ => return Ok(()),
    };

    let mut error = ValidationError::new("range");
    error.message = Some(Cow::from(message));

    let mut errors = ValidationErrors::new();
    errors.add("age", error);
    Err(errors)
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

fn not_found_message(id: &str) -> String {
    format!("user with id {} not found", id)
}

/// List users one page at a time
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(PaginationQuery),
    responses(
        (status = 200, description = "One page of users", body = PaginatedUsers),
        (status = 400, description = "Invalid page or limit")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<PaginationQuery>,
) -> AppResult<Json<Paginated<User>>> {
    info!(
        "Get all users with pagination: page={}, limit={}",
        query.page, query.limit
    );
    let users = state
        .user_service
        .get_users(query.page, query.limit)
        .await?;
    Ok(Json(users))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User record", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    info!("Get user by id: {}", id);
    let user = state
        .user_service
        .get_user_by_id(&id)
        .await?
        .ok_or_not_found(not_found_message(&id))?;
    Ok(Json(user))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<User>)> {
    info!("Insert user: {}", payload.name);
    let user = state.user_service.insert_user(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Update some fields of a user
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<User>> {
    info!("Update user by id: {}", id);
    let user = state
        .user_service
        .update_user(&id, payload.into())
        .await?
        .ok_or_not_found(not_found_message(&id))?;
    Ok(Json(user))
}

/// Delete a user; deleting an unknown id also succeeds
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted or already absent")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    info!("Delete user by id: {}", id);
    state.user_service.delete_user(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
