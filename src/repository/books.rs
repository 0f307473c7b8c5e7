//! Books repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a book owned by `author_id`
    pub async fn create(&self, data: &CreateBook, author_id: i32) -> AppResult<Book> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, pages, author_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, pages, author_id
            "#,
        )
        .bind(&data.title)
        .bind(data.pages)
        .bind(author_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(book)
    }

    /// List every book
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT id, title, pages, author_id FROM books ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(books)
    }

    /// List the books of one author
    pub async fn list_by_author(&self, author_id: i32) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT id, title, pages, author_id FROM books WHERE author_id = $1 ORDER BY id",
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(books)
    }

    /// Find a book by title within an author's books (first match by id)
    pub async fn get_by_title(&self, author_id: i32, title: &str) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, pages, author_id FROM books
            WHERE author_id = $1 AND title = $2
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(author_id)
        .bind(title)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Overwrite title and pages; id and author_id are untouched
    pub async fn update(&self, id: i32, data: &CreateBook) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            UPDATE books SET title = $1, pages = $2
            WHERE id = $3
            RETURNING id, title, pages, author_id
            "#,
        )
        .bind(&data.title)
        .bind(data.pages)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Delete a book
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Book not found".to_string()));
        }
        Ok(())
    }
}
