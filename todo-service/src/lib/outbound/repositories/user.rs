use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use super::bounded;
use super::is_unavailable;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Profile;
use crate::domain::user::models::UpdateProfileCommand;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

pub struct PostgresUserRepository {
    pool: PgPool,
    query_timeout: Duration,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }
}

#[derive(FromRow)]
struct UserRow {
    email: String,
    first_name: String,
    last_name: String,
    country: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = UserError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            email: EmailAddress::new(row.email)
                .map_err(|e| UserError::DatabaseError(format!("stored email: {}", e)))?,
            profile: Profile {
                first_name: row.first_name,
                last_name: row.last_name,
                country: row.country,
            },
            password_hash: row.password_hash,
            created_at: row.created_at,
        })
    }
}

fn store_error(e: sqlx::Error) -> UserError {
    if is_unavailable(&e) {
        UserError::StoreUnavailable(e.to_string())
    } else {
        UserError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        bounded(
            self.query_timeout,
            sqlx::query(
                r#"
                INSERT INTO users (email, first_name, last_name, country, password_hash, created_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(user.email.as_str())
            .bind(&user.profile.first_name)
            .bind(&user.profile.last_name)
            .bind(&user.profile.country)
            .bind(&user.password_hash)
            .bind(user.created_at)
            .execute(&self.pool),
        )
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return UserError::EmailAlreadyExists(user.email.to_string());
                }
            }
            store_error(e)
        })?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        let row = bounded(
            self.query_timeout,
            sqlx::query_as::<_, UserRow>(
                r#"
                SELECT email, first_name, last_name, country, password_hash, created_at
                FROM users
                WHERE email = $1
                "#,
            )
            .bind(email.as_str())
            .fetch_optional(&self.pool),
        )
        .await
        .map_err(store_error)?;

        row.map(User::try_from).transpose()
    }

    async fn update_profile(
        &self,
        email: &EmailAddress,
        changes: UpdateProfileCommand,
    ) -> Result<User, UserError> {
        let row = bounded(
            self.query_timeout,
            sqlx::query_as::<_, UserRow>(
                r#"
                UPDATE users
                SET first_name = COALESCE($2, first_name),
                    last_name = COALESCE($3, last_name),
                    country = COALESCE($4, country)
                WHERE email = $1
                RETURNING email, first_name, last_name, country, password_hash, created_at
                "#,
            )
            .bind(email.as_str())
            .bind(changes.first_name)
            .bind(changes.last_name)
            .bind(changes.country)
            .fetch_optional(&self.pool),
        )
        .await
        .map_err(store_error)?;

        row.map(User::try_from)
            .transpose()?
            .ok_or_else(|| UserError::NotFound(email.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbound::repositories::tests::unreachable_pool;

    #[tokio::test]
    async fn test_unreachable_store_is_unavailable() {
        let repository = PostgresUserRepository::new(unreachable_pool(), Duration::from_secs(5));
        let email = EmailAddress::new("a@x.com".to_string()).unwrap();

        let result = repository.find_by_email(&email).await;
        assert!(matches!(result, Err(UserError::StoreUnavailable(_))));

        let result = repository
            .update_profile(&email, UpdateProfileCommand::default())
            .await;
        assert!(matches!(result, Err(UserError::StoreUnavailable(_))));
    }

    #[tokio::test]
    async fn test_signup_against_unreachable_store_is_not_a_conflict() {
        let repository = PostgresUserRepository::new(unreachable_pool(), Duration::from_secs(5));
        let user = User {
            email: EmailAddress::new("a@x.com".to_string()).unwrap(),
            profile: Profile::default(),
            password_hash: "$argon2id$v=19$hash".to_string(),
            created_at: Utc::now(),
        };

        let result = repository.create(user).await;
        assert!(matches!(result, Err(UserError::StoreUnavailable(_))));
    }
}
