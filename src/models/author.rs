//! Author model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};

pub const AUTHOR_NAME_MIN: usize = 3;
pub const AUTHOR_NAME_MAX: usize = 30;

/// Author row from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub id: i32,
    /// Unique author name
    pub name: String,
}

/// Create author request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAuthor {
    #[validate(length(min = 3, max = 30, message = "Author name must be between 3 and 30 characters"))]
    pub name: String,
}

/// Check an author name taken from a URL path or a form field.
/// Bounds count characters, not bytes.
pub fn validate_author_name(name: &str) -> AppResult<()> {
    let len = name.chars().count();
    if (AUTHOR_NAME_MIN..=AUTHOR_NAME_MAX).contains(&len) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Author name must be between {} and {} characters",
            AUTHOR_NAME_MIN, AUTHOR_NAME_MAX
        )))
    }
}
