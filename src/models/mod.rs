//! Data models for the library catalog

pub mod author;
pub mod book;
pub mod user;

// Re-export commonly used types
pub use author::{Author, CreateAuthor};
pub use book::{Book, BookTitleQuery, CreateBook};
pub use user::{CreateUser, TokenRequest, TokenResponse, User};
