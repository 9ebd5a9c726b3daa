use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::Session;
use crate::domain::user::models::SignupCommand;
use crate::domain::user::models::UpdateProfileCommand;
use crate::domain::user::models::User;
use crate::user::errors::PasswordError;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for identity operations.
///
/// Composes the credential store with password hashing and session token
/// issuance from the auth library.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `authenticator` - Password hashing and token signing
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn signup(&self, command: SignupCommand) -> Result<User, UserError> {
        // Argon2 is CPU-bound; keep it off the async workers
        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let password_hash =
            tokio::task::spawn_blocking(move || authenticator.hash_password(password.expose()))
                .await
                .map_err(|e| PasswordError::HashingFailed(e.to_string()))?
                .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;

        let user = User {
            email: command.email,
            profile: command.profile,
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(email = %created_user.email, "User registered");

        Ok(created_user)
    }

    async fn login(&self, command: LoginCommand) -> Result<Session, UserError> {
        let Some(user) = self.repository.find_by_email(&command.email).await? else {
            let authenticator = Arc::clone(&self.authenticator);
            let password = command.password;
            let _ = tokio::task::spawn_blocking(move || authenticator.reject_unknown(&password))
                .await;
            tracing::warn!(email = %command.email, "Login rejected: unknown email");
            return Err(UserError::InvalidCredentials);
        };

        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let stored_hash = user.password_hash.clone();
        let subject = user.email.as_str().to_string();
        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &stored_hash, &subject)
        })
        .await
        .map_err(|e| UserError::Token(e.to_string()))?
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => {
                tracing::warn!(email = %user.email, "Login rejected: wrong password");
                UserError::InvalidCredentials
            }
            AuthenticationError::JwtError(err) => UserError::Token(err.to_string()),
        })?;

        tracing::info!(email = %user.email, expires_at = %result.expires_at, "Session issued");

        Ok(Session {
            user,
            token: result.access_token,
            expires_at: result.expires_at,
        })
    }

    async fn get_profile(&self, caller: &EmailAddress) -> Result<User, UserError> {
        self.repository
            .find_by_email(caller)
            .await?
            .ok_or_else(|| UserError::NotFound(caller.to_string()))
    }

    async fn update_profile(
        &self,
        caller: &EmailAddress,
        command: UpdateProfileCommand,
    ) -> Result<User, UserError> {
        let updated_user = self.repository.update_profile(caller, command).await?;
        tracing::info!(email = %updated_user.email, "Profile updated");

        Ok(updated_user)
    }
}
