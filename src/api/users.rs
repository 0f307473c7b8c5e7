//! User registration endpoint

use axum::{extract::State, Json};
use validator::Validate;

use crate::{
    error::AppResult,
    models::user::{CreateUser, User},
};

use super::ApiJson;

/// Register a new user
#[utoipa::path(
    post,
    path = "/library/adduser",
    tag = "users",
    request_body = CreateUser,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 409, description = "Username already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_user(
    State(state): State<crate::AppState>,
    ApiJson(user): ApiJson<CreateUser>,
) -> AppResult<Json<User>> {
    user.validate()?;

    let created = state.services.users.create_user(user).await?;
    Ok(Json(created))
}
