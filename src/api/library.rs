//! Author and book endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        author::{Author, CreateAuthor},
        book::{Book, BookTitleQuery, CreateBook},
    },
};

use super::{ApiJson, ApiQuery, AuthenticatedUser};

/// Confirmation returned by delete endpoints
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Create an author
#[utoipa::path(
    post,
    path = "/library/addauthor",
    tag = "library",
    security(("bearer_auth" = [])),
    request_body = CreateAuthor,
    responses(
        (status = 200, description = "Author created", body = Author),
        (status = 400, description = "Name outside 3-30 characters", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
        (status = 409, description = "Author already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_author(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    ApiJson(author): ApiJson<CreateAuthor>,
) -> AppResult<Json<Author>> {
    author.validate()?;

    let created = state.services.library.create_author(&author).await?;
    Ok(Json(created))
}

/// Add a book to an author
#[utoipa::path(
    post,
    path = "/library/{author}/addbook/",
    tag = "library",
    security(("bearer_auth" = [])),
    params(("author" = String, Path, description = "Author name")),
    request_body = CreateBook,
    responses(
        (status = 200, description = "Book created", body = Book),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(author): Path<String>,
    ApiJson(book): ApiJson<CreateBook>,
) -> AppResult<Json<Book>> {
    book.validate()?;

    let created = state.services.library.create_book(&author, &book).await?;
    Ok(Json(created))
}

/// Delete an author and all of its books
#[utoipa::path(
    delete,
    path = "/library/{author}/deleteauthor",
    tag = "library",
    security(("bearer_auth" = [])),
    params(("author" = String, Path, description = "Author name")),
    responses(
        (status = 200, description = "Author deleted", body = MessageResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_author(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(author): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = state.services.library.delete_author(&author).await?;
    Ok(Json(MessageResponse {
        message: format!("Author '{}' was successfully deleted", deleted.name),
    }))
}

/// List every book in the catalog
#[utoipa::path(
    get,
    path = "/library/getbook",
    tag = "library",
    responses(
        (status = 200, description = "All books", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.library.list_books(None).await?;
    Ok(Json(books))
}

/// List the books of one author
#[utoipa::path(
    get,
    path = "/library/{author}/getbook",
    tag = "library",
    params(("author" = String, Path, description = "Author name")),
    responses(
        (status = 200, description = "Books of the author", body = Vec<Book>),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_author_books(
    State(state): State<crate::AppState>,
    Path(author): Path<String>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.library.list_books(Some(&author)).await?;
    Ok(Json(books))
}

/// Overwrite title and pages of a book
#[utoipa::path(
    put,
    path = "/library/{author}/updatebook/",
    tag = "library",
    security(("bearer_auth" = [])),
    params(
        ("author" = String, Path, description = "Author name"),
        BookTitleQuery
    ),
    request_body = CreateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
        (status = 404, description = "Author or book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(author): Path<String>,
    ApiQuery(query): ApiQuery<BookTitleQuery>,
    ApiJson(book): ApiJson<CreateBook>,
) -> AppResult<Json<Book>> {
    book.validate()?;

    let updated = state
        .services
        .library
        .update_book(&author, &query.title, &book)
        .await?;
    Ok(Json(updated))
}

/// Delete one book of an author
#[utoipa::path(
    delete,
    path = "/library/{author}/deletebook",
    tag = "library",
    security(("bearer_auth" = [])),
    params(
        ("author" = String, Path, description = "Author name"),
        BookTitleQuery
    ),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
        (status = 404, description = "Author or book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(author): Path<String>,
    ApiQuery(query): ApiQuery<BookTitleQuery>,
) -> AppResult<Json<MessageResponse>> {
    let (author, book) = state
        .services
        .library
        .delete_book(&author, &query.title)
        .await?;
    Ok(Json(MessageResponse {
        message: format!("{} by {} was successfully deleted", book.title, author.name),
    }))
}
