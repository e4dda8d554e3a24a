// ============================================================================
// Placement Infrastructure - PostgreSQL User Repository
// File: crates/placement-infrastructure/src/database/postgres/user_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{error, info};
use uuid::Uuid;

use placement_core::domain::{NewUser, User, UserRole};
use placement_core::error::DomainError;
use placement_core::repositories::UserRepository;

use super::db_error;

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// Roles are written only through `UserRole::as_str`; any other value in the
/// column is corrupt data and surfaces as a storage error.
impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role = UserRole::from_str(&row.role).ok_or_else(|| {
            error!("User {} has unrecognised role '{}'", row.username, row.role);
            DomainError::DatabaseError(format!(
                "user {} has unrecognised role '{}'",
                row.username, row.role
            ))
        })?;

        Ok(User {
            id: row.id,
            username: row.username,
            email: row.email,
            role,
            password_hash: row.password,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, username, email, role, password, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("finding user by username"))?;

        row.map(User::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
            SELECT id, username, email, role, password, created_at
            FROM users
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("listing users"))?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        info!("Creating user: {}", user.username);

        let row: UserRow = sqlx::query_as(
            r#"
            INSERT INTO users (username, password, email, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, email, role, password, created_at
            "#,
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.email)
        .bind(user.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            let unique = e
                .as_database_error()
                .map(|db| db.is_unique_violation())
                .unwrap_or(false);
            if unique {
                DomainError::UsernameAlreadyExists(user.username.clone())
            } else {
                error!("Database error creating user: {}", e);
                DomainError::DatabaseError(e.to_string())
            }
        })?;

        row.try_into()
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("deleting user"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(*id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_row(role: &str) -> UserRow {
        UserRow {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            role: role.to_string(),
            password: "$argon2id$x".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_known_roles_map() {
        assert_eq!(User::try_from(user_row("admin")).unwrap().role, UserRole::Admin);
        assert_eq!(User::try_from(user_row("Officer")).unwrap().role, UserRole::Officer);
    }

    #[test]
    fn test_unknown_role_is_not_coerced() {
        let result = User::try_from(user_row("superuser"));
        assert!(matches!(result, Err(DomainError::DatabaseError(msg)) if msg.contains("superuser")));
    }
}
