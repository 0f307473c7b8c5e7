//! Server-rendered pages

use maud::{html, Markup, DOCTYPE};

use crate::models::book::Book;

/// Outcome of a form submission shown above the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Notice {
    #[default]
    None,
    Success(String),
    Error(String),
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Notice::Error(message.into())
    }

    pub fn success(message: impl Into<String>) -> Self {
        Notice::Success(message.into())
    }
}

fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) " · Library" }
            }
            body {
                nav {
                    a href="/" { "Home" } " | "
                    a href="/books" { "Books" } " | "
                    a href="/login" { "Log in" } " | "
                    a href="/register" { "Register" }
                }
                main {
                    h1 { (title) }
                    (content)
                }
            }
        }
    }
}

fn notice(notice: &Notice) -> Markup {
    html! {
        @match notice {
            Notice::None => {},
            Notice::Success(msg) => p class="success" { (msg) },
            Notice::Error(msg) => p class="error" { (msg) },
        }
    }
}

pub fn home() -> Markup {
    layout(
        "Library",
        html! {
            ul {
                li { a href="/books" { "Browse books" } }
                li { a href="/author/create" { "Add an author" } }
                li { a href="/book/create" { "Add a book" } }
                li { a href="/book/update" { "Update a book" } }
                li { a href="/book/delete" { "Delete a book" } }
            }
        },
    )
}

pub fn register(state: &Notice) -> Markup {
    layout(
        "Register",
        html! {
            (notice(state))
            form method="post" action="/register" {
                label { "Username " input type="text" name="username" required; }
                label { "Password " input type="password" name="password" required; }
                button type="submit" { "Register" }
            }
        },
    )
}

pub fn login(state: &Notice) -> Markup {
    layout(
        "Log in",
        html! {
            (notice(state))
            form method="post" action="/login" {
                label { "Username " input type="text" name="username" required; }
                label { "Password " input type="password" name="password" required; }
                button type="submit" { "Log in" }
            }
        },
    )
}

pub fn books(books: &[Book], author: Option<&str>, state: &Notice) -> Markup {
    let title = match author {
        Some(name) => format!("Books by {}", name),
        None => "All books".to_string(),
    };
    layout(
        &title,
        html! {
            form method="get" action="/books" {
                label { "Author " input type="text" name="author" value=(author.unwrap_or_default()); }
                button type="submit" { "Filter" }
            }
            (notice(state))
            @if books.is_empty() {
                p { "No books." }
            } @else {
                table {
                    thead { tr { th { "Title" } th { "Pages" } } }
                    tbody {
                        @for book in books {
                            tr { td { (book.title) } td { (book.pages) } }
                        }
                    }
                }
            }
        },
    )
}

pub fn author_create(state: &Notice) -> Markup {
    layout(
        "Add an author",
        html! {
            (notice(state))
            form method="post" action="/author/create" {
                label { "Name " input type="text" name="author" minlength="3" maxlength="30" required; }
                button type="submit" { "Create" }
            }
        },
    )
}

pub fn book_create(state: &Notice) -> Markup {
    layout(
        "Add a book",
        html! {
            (notice(state))
            form method="post" action="/book/create" {
                label { "Author " input type="text" name="author" required; }
                label { "Title " input type="text" name="name" required; }
                label { "Pages " input type="number" name="pages" min="10" required; }
                button type="submit" { "Create" }
            }
        },
    )
}

pub fn book_update(state: &Notice) -> Markup {
    layout(
        "Update a book",
        html! {
            (notice(state))
            form method="post" action="/book/update" {
                label { "Author " input type="text" name="author" required; }
                label { "Current title " input type="text" name="name" required; }
                label { "New title " input type="text" name="newname" required; }
                label { "New pages " input type="number" name="newpages" min="10" required; }
                button type="submit" { "Update" }
            }
        },
    )
}

pub fn book_delete(state: &Notice) -> Markup {
    layout(
        "Delete a book",
        html! {
            (notice(state))
            form method="post" action="/book/delete" {
                label { "Author " input type="text" name="author" required; }
                label { "Title " input type="text" name="name" required; }
                button type="submit" { "Delete" }
            }
        },
    )
}
