//! Token endpoint

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::user::{TokenRequest, TokenResponse},
};

use super::ApiForm;

/// Exchange username and password for a bearer token
#[utoipa::path(
    post,
    path = "/token",
    tag = "auth",
    request_body(content = TokenRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 400, description = "Incorrect username or password", body = crate::error::ErrorResponse)
    )
)]
pub async fn login_for_token(
    State(state): State<crate::AppState>,
    ApiForm(request): ApiForm<TokenRequest>,
) -> AppResult<Json<TokenResponse>> {
    let token = state
        .services
        .users
        .issue_token(&request.username, &request.password)
        .await?;
    Ok(Json(token))
}
