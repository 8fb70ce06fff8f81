use chrono::Duration;
use sqlx::SqlitePool;

use crate::dto::auth_dto::{LoginPayload, RegisterPayload};
use crate::error::{Error, Result};
use crate::models::user::User;
use crate::utils::{crypto, jwt};

#[derive(Clone)]
pub struct AuthService {
    pool: SqlitePool,
    jwt_secret: String,
    token_ttl: Duration,
}

impl AuthService {
    pub fn new(pool: SqlitePool, jwt_secret: String, token_ttl: Duration) -> Self {
        Self {
            pool,
            jwt_secret,
            token_ttl,
        }
    }

    pub async fn register(&self, payload: RegisterPayload) -> Result<User> {
        if self.find_by_username(&payload.username).await?.is_some() {
            return Err(Error::Conflict("Username already exists".to_string()));
        }

        let password_hash = crypto::hash_password(&payload.password)?;
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash, email, role)
            VALUES (?, ?, ?, ?)
            RETURNING id, username, password_hash, email, role
            "#,
        )
        .bind(&payload.username)
        .bind(&password_hash)
        .bind(&payload.email)
        .bind(payload.role)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(user_id = user.id, username = %user.username, role = user.role.as_str(), "user registered");
        Ok(user)
    }

    /// Verifies credentials and issues a bearer token for the user.
    pub async fn login(&self, payload: LoginPayload) -> Result<String> {
        let user = match self.find_by_username(&payload.username).await? {
            Some(user) => user,
            None => {
                tracing::warn!(username = %payload.username, "login for unknown user");
                return Err(invalid_credentials());
            }
        };

        if !crypto::verify_password(&payload.password, &user.password_hash)? {
            tracing::warn!(username = %payload.username, "login with wrong password");
            return Err(invalid_credentials());
        }

        let token = jwt::issue_token(&user.username, user.role, &self.jwt_secret, self.token_ttl)?;
        Ok(token)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, email, role FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }
}

fn invalid_credentials() -> Error {
    Error::Unauthorized("Invalid credentials".to_string())
}
