//! User accounts and token issuance

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, TokenResponse, User},
    repository::Repository,
};

const BAD_CREDENTIALS: &str = "Incorrect username or password";

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a new user, storing a salted hash of the password
    pub async fn create_user(&self, user: CreateUser) -> AppResult<User> {
        if self.repository.users.username_exists(&user.username).await? {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }

        let password_hash = hash_password(&user.password)?;
        let created = self.repository.users.create(&user, &password_hash).await?;

        tracing::info!(user_id = created.id, username = %created.username, "User registered");
        Ok(created)
    }

    /// Check credentials and issue a bearer token.
    /// The token is the username itself.
    pub async fn issue_token(&self, username: &str, password: &str) -> AppResult<TokenResponse> {
        let user = self
            .repository
            .users
            .get_by_username(username)
            .await?
            .ok_or_else(|| AppError::BadRequest(BAD_CREDENTIALS.to_string()))?;

        if !verify_password(&user.password, password)? {
            tracing::warn!(username = %username, "Rejected token request");
            return Err(AppError::BadRequest(BAD_CREDENTIALS.to_string()));
        }

        Ok(TokenResponse::bearer(user.username))
    }

    /// Resolve a presented bearer token to its user
    pub async fn authenticate_token(&self, token: &str) -> AppResult<User> {
        self.repository
            .users
            .get_by_username(token)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid authentication credentials".to_string()))
    }
}

/// Hash a password using Argon2 with a fresh random salt
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored PHC hash string
pub fn verify_password(hash: &str, password: &str) -> AppResult<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
