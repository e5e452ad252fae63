//! User repository contract and its PostgreSQL implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, SqlErr};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Email comparison rules (case sensitivity, trimming) belong to the
/// implementation; callers pass the address exactly as received.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by email address. A missing user is `Ok(None)`, not an error.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Persist a new user. On success the user is visible to `find_by_email`.
    async fn save(&self, user: User) -> AppResult<()>;
}

/// Concrete implementation of UserRepository backed by PostgreSQL
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn save(&self, user: User) -> AppResult<()> {
        let email = user.email.clone();
        let active_model = ActiveModel::from(user);

        active_model
            .insert(&self.db)
            .await
            .map_err(map_insert_error)?;

        tracing::debug!(email = %email, "User row inserted");
        Ok(())
    }
}

/// The unique index on `email` is the atomic guard against concurrent duplicates.
fn map_insert_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict("Email"),
        _ => AppError::from(err),
    }
}
