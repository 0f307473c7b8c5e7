//! Authors and books

use crate::{
    error::{AppError, AppResult},
    models::{
        author::{validate_author_name, Author, CreateAuthor},
        book::{Book, CreateBook},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct LibraryService {
    repository: Repository,
}

impl LibraryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create an author; names are unique
    pub async fn create_author(&self, data: &CreateAuthor) -> AppResult<Author> {
        if self.repository.authors.name_exists(&data.name).await? {
            return Err(AppError::Conflict(format!("Author '{}' already exists", data.name)));
        }
        let author = self.repository.authors.create(&data.name).await?;
        tracing::info!(author_id = author.id, name = %author.name, "Author created");
        Ok(author)
    }

    /// Look up an author named in a path or form
    pub async fn get_author(&self, name: &str) -> AppResult<Author> {
        validate_author_name(name)?;
        self.repository.authors.get_by_name(name).await
    }

    /// Delete an author together with all of its books
    pub async fn delete_author(&self, name: &str) -> AppResult<Author> {
        let author = self.get_author(name).await?;
        self.repository.authors.delete(author.id).await?;
        tracing::info!(author_id = author.id, name = %author.name, "Author deleted");
        Ok(author)
    }

    /// Add a book to an existing author
    pub async fn create_book(&self, author_name: &str, data: &CreateBook) -> AppResult<Book> {
        let author = self.get_author(author_name).await?;
        let book = self.repository.books.create(data, author.id).await?;
        tracing::info!(book_id = book.id, author_id = author.id, "Book created");
        Ok(book)
    }

    /// All books, or only those of the named author
    pub async fn list_books(&self, author_name: Option<&str>) -> AppResult<Vec<Book>> {
        match author_name {
            Some(name) => {
                let author = self.get_author(name).await?;
                self.repository.books.list_by_author(author.id).await
            }
            None => self.repository.books.list().await,
        }
    }

    /// Replace title and pages of the book `title` by `author_name`
    pub async fn update_book(&self, author_name: &str, title: &str, data: &CreateBook) -> AppResult<Book> {
        let author = self.get_author(author_name).await?;
        let book = self.repository.books.get_by_title(author.id, title).await?;
        self.repository.books.update(book.id, data).await
    }

    /// Remove the book `title` by `author_name`
    pub async fn delete_book(&self, author_name: &str, title: &str) -> AppResult<(Author, Book)> {
        let author = self.get_author(author_name).await?;
        let book = self.repository.books.get_by_title(author.id, title).await?;
        self.repository.books.delete(book.id).await?;
        tracing::info!(book_id = book.id, author_id = author.id, "Book deleted");
        Ok((author, book))
    }
}
