//! HTML form front end.
//!
//! Every POST handler runs the same service operation as its JSON
//! counterpart and renders failures inline instead of as status codes.

pub mod views;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use maud::Markup;
use serde::Deserialize;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{author::CreateAuthor, book::CreateBook, user::CreateUser},
    AppState,
};

use views::Notice;

#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct BooksQuery {
    pub author: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AuthorForm {
    pub author: String,
}

#[derive(Debug, Deserialize)]
pub struct BookForm {
    pub author: String,
    pub name: String,
    pub pages: String,
}

#[derive(Debug, Deserialize)]
pub struct BookUpdateForm {
    pub author: String,
    pub name: String,
    pub newname: String,
    pub newpages: String,
}

#[derive(Debug, Deserialize)]
pub struct BookDeleteForm {
    pub author: String,
    pub name: String,
}

/// Build a validated book from raw form fields
fn parse_book(title: &str, pages: &str) -> AppResult<CreateBook> {
    let pages = pages
        .trim()
        .parse::<i32>()
        .map_err(|_| AppError::Validation("Pages must be a whole number".to_string()))?;
    let book = CreateBook {
        title: title.to_string(),
        pages,
    };
    book.validate()?;
    Ok(book)
}

fn outcome<T>(result: AppResult<T>, success: impl FnOnce(T) -> String) -> Notice {
    match result {
        Ok(value) => Notice::success(success(value)),
        Err(e) => {
            tracing::debug!("Form submission rejected: {}", e);
            Notice::error(e.user_message())
        }
    }
}

pub async fn home() -> Markup {
    views::home()
}

pub async fn register_view() -> Markup {
    views::register(&Notice::None)
}

pub async fn register_form(State(state): State<AppState>, Form(form): Form<CredentialsForm>) -> Markup {
    let user = CreateUser::with_credentials(form.username, form.password);
    let result = match user.validate() {
        Ok(()) => state.services.users.create_user(user).await,
        Err(e) => Err(e.into()),
    };
    views::register(&outcome(result, |u| format!("Account '{}' created", u.username)))
}

pub async fn login_view() -> Markup {
    views::login(&Notice::None)
}

pub async fn login_form(State(state): State<AppState>, Form(form): Form<CredentialsForm>) -> Response {
    match state.services.users.issue_token(&form.username, &form.password).await {
        Ok(_) => Redirect::to("/").into_response(),
        Err(e) => views::login(&Notice::error(e.user_message())).into_response(),
    }
}

pub async fn books_view(State(state): State<AppState>, Query(query): Query<BooksQuery>) -> Markup {
    let author = query.author.as_deref().map(str::trim).filter(|a| !a.is_empty());
    match state.services.library.list_books(author).await {
        Ok(books) => views::books(&books, author, &Notice::None),
        Err(e) => views::books(&[], author, &Notice::error(e.user_message())),
    }
}

pub async fn author_create_view() -> Markup {
    views::author_create(&Notice::None)
}

pub async fn author_create_form(State(state): State<AppState>, Form(form): Form<AuthorForm>) -> Markup {
    let author = CreateAuthor { name: form.author };
    if author.validate().is_err() {
        return views::author_create(&Notice::error("Incorrect author name"));
    }
    let result = state.services.library.create_author(&author).await;
    views::author_create(&outcome(result, |a| format!("Author '{}' created", a.name)))
}

pub async fn book_create_view() -> Markup {
    views::book_create(&Notice::None)
}

pub async fn book_create_form(State(state): State<AppState>, Form(form): Form<BookForm>) -> Markup {
    let result = match parse_book(&form.name, &form.pages) {
        Ok(book) => state.services.library.create_book(&form.author, &book).await,
        Err(e) => Err(e),
    };
    views::book_create(&outcome(result, |b| format!("Book '{}' created", b.title)))
}

pub async fn book_update_view() -> Markup {
    views::book_update(&Notice::None)
}

pub async fn book_update_form(State(state): State<AppState>, Form(form): Form<BookUpdateForm>) -> Markup {
    let result = match parse_book(&form.newname, &form.newpages) {
        Ok(book) => {
            state
                .services
                .library
                .update_book(&form.author, &form.name, &book)
                .await
        }
        Err(e) => Err(e),
    };
    views::book_update(&outcome(result, |b| format!("Book '{}' updated", b.title)))
}

pub async fn book_delete_view() -> Markup {
    views::book_delete(&Notice::None)
}

pub async fn book_delete_form(State(state): State<AppState>, Form(form): Form<BookDeleteForm>) -> Markup {
    let result = state.services.library.delete_book(&form.author, &form.name).await;
    views::book_delete(&outcome(result, |(author, book)| {
        format!("{} by {} was successfully deleted", book.title, author.name)
    }))
}
