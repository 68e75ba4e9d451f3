//! MySQL implementation of the CredentialStore trait.
//!
//! Secrets are stored as bcrypt hashes; the plaintext never leaves this
//! module. Unknown logins and wrong secrets produce the same error so the
//! distinction cannot be observed from outside.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use tracing::{debug, error};
use uuid::Uuid;

use od_core::domain::entities::user::User;
use od_core::domain::value_objects::{Credential, Identity};
use od_core::errors::{AuthError, DomainError};
use od_core::repositories::CredentialStore;

/// MySQL implementation of CredentialStore
pub struct MySqlCredentialStore {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlCredentialStore {
    /// Create a new MySQL credential store
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row.try_get("id").map_err(db_error)?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("invalid user id in store: {e}"),
            })?,
            login: row.try_get("login").map_err(db_error)?,
            display_name: row.try_get("display_name").map_err(db_error)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(db_error)?,
        })
    }
}

#[async_trait]
impl CredentialStore for MySqlCredentialStore {
    async fn register(
        &self,
        credential: &Credential,
        display_name: Option<&str>,
    ) -> Result<User, DomainError> {
        let existing = sqlx::query("SELECT id FROM users WHERE login = ?")
            .bind(&credential.login)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;

        if existing.is_some() {
            return Err(DomainError::Auth(AuthError::UserAlreadyExists));
        }

        let secret_hash =
            bcrypt::hash(&credential.secret, bcrypt::DEFAULT_COST).map_err(|e| {
                error!(error = %e, "failed to hash secret");
                DomainError::Internal {
                    message: "secret hashing failed".to_string(),
                }
            })?;

        let user = User::new(&credential.login, display_name.map(str::to_string));

        sqlx::query(
            r#"
            INSERT INTO users (id, login, display_name, secret_hash, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.login)
        .bind(&user.display_name)
        .bind(&secret_hash)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        debug!(login = %user.login, "stored new user");
        Ok(user)
    }

    async fn authenticate(&self, credential: &Credential) -> Result<Identity, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, login, display_name, secret_hash, created_at
            FROM users
            WHERE login = ?
            "#,
        )
        .bind(&credential.login)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        // Unknown login and wrong secret collapse into the same error
        let row = row.ok_or(DomainError::Auth(AuthError::InvalidCredential))?;

        let secret_hash: String = row.try_get("secret_hash").map_err(db_error)?;
        let matches = bcrypt::verify(&credential.secret, &secret_hash).unwrap_or(false);
        if !matches {
            return Err(DomainError::Auth(AuthError::InvalidCredential));
        }

        let user = Self::row_to_user(&row)?;
        Ok(user.identity())
    }
}

fn db_error(error: sqlx::Error) -> DomainError {
    error!(error = %error, "credential store query failed");
    DomainError::Internal {
        message: "credential store unavailable".to_string(),
    }
}
