//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

pub const MIN_PAGES: i32 = 10;
/// Width of the `books.title` column
pub const TITLE_MAX: usize = 255;

/// Book row from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub pages: i32,
    /// Owning author
    pub author_id: i32,
}

/// Create or update book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,
    #[validate(range(min = 10, message = "A book must have at least 10 pages"))]
    pub pages: i32,
}

/// Identifies a book by title within an author's books
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookTitleQuery {
    /// Current title of the book
    pub title: String,
}
