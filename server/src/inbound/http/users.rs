//! User HTTP handlers.
//!
//! ```text
//! GET    /users
//! GET    /users/{userId}
//! POST   /users            {"name":"Ada","email":"ada@example.com"}
//! PATCH  /users/{userId}   {"email":"lovelace@example.com"}
//! DELETE /users/{userId}
//! ```

use actix_web::{delete, get, patch, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, NewUser, User, UserId, UserPatch, UserValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, positive_id, require};

/// Request payload for registering or editing a user.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct UserRequestBody {
    /// Display name.
    #[schema(example = "Ada")]
    pub name: Option<String>,
    /// Contact address.
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
}

/// User response payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct UserBody {
    /// User identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
}

impl From<User> for UserBody {
    fn from(value: User) -> Self {
        Self {
            id: value.id.get(),
            name: value.name,
            email: value.email,
        }
    }
}

fn map_user_validation_error(err: UserValidationError) -> Error {
    match err {
        UserValidationError::EmptyName => Error::invalid_request("name must not be blank")
            .with_details(json!({ "field": "name", "code": "blank_field" })),
        UserValidationError::InvalidEmail { email } => {
            Error::invalid_request(format!("'{email}' is not a valid email address")).with_details(
                json!({ "field": "email", "value": email, "code": "invalid_email" }),
            )
        }
    }
}

fn user_id(path: web::Path<i64>) -> Result<UserId, Error> {
    positive_id(path.into_inner(), FieldName::new("userId")).map(UserId::new)
}

/// List registered users.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use shareit_server::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users ordered by id", body = [UserBody]),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserBody>>> {
    let users = state.users_query.get_all_users().await?;
    Ok(web::Json(users.into_iter().map(UserBody::from).collect()))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/users/{userId}",
    params(("userId" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserBody),
        (status = 404, description = "User not found", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{user_id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<UserBody>> {
    let user = state.users_query.get_user(user_id(path)?).await?;
    Ok(web::Json(user.into()))
}

/// Register a user.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserRequestBody,
    responses(
        (status = 200, description = "User registered", body = UserBody),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "E-mail already registered", body = Error)
    ),
    tags = ["users"],
    operation_id = "addUser"
)]
#[post("/users")]
pub async fn add_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRequestBody>,
) -> ApiResult<web::Json<UserBody>> {
    let UserRequestBody { name, email } = payload.into_inner();
    let name = require(name, FieldName::new("name"))?;
    let email = require(email, FieldName::new("email"))?;
    let user = NewUser::new(name, email).map_err(map_user_validation_error)?;
    let created = state.users.add_user(user).await?;
    Ok(web::Json(created.into()))
}

/// Edit a user; absent fields are kept.
#[utoipa::path(
    patch,
    path = "/users/{userId}",
    request_body = UserRequestBody,
    params(("userId" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User updated", body = UserBody),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "User not found", body = Error),
        (status = 409, description = "E-mail already registered", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[patch("/users/{user_id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<UserRequestBody>,
) -> ApiResult<web::Json<UserBody>> {
    let UserRequestBody { name, email } = payload.into_inner();
    let patch = UserPatch::new(name, email).map_err(map_user_validation_error)?;
    let updated = state.users.update_user(user_id(path)?, patch).await?;
    Ok(web::Json(updated.into()))
}

/// Remove a user together with their items and bookings.
#[utoipa::path(
    delete,
    path = "/users/{userId}",
    params(("userId" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Removed user", body = UserBody),
        (status = 404, description = "User not found", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{user_id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<UserBody>> {
    let removed = state.users.delete_user(user_id(path)?).await?;
    Ok(web::Json(removed.into()))
}
