use async_trait::async_trait;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::Session;
use crate::domain::user::models::SignupCommand;
use crate::domain::user::models::UpdateProfileCommand;
use crate::domain::user::models::User;
use crate::user::errors::UserError;

/// Port for identity use-cases (signup, login, profile).
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Validated email, profile and plaintext password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Password` - Hashing failed
    /// * `DatabaseError` / `StoreUnavailable` - Store operation failed
    async fn signup(&self, command: SignupCommand) -> Result<User, UserError>;

    /// Verify credentials and open a session.
    ///
    /// # Returns
    /// Session holding the user and a signed token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `Token` - Token could not be signed
    /// * `DatabaseError` / `StoreUnavailable` - Store operation failed
    async fn login(&self, command: LoginCommand) -> Result<Session, UserError>;

    /// Retrieve the profile of the authenticated caller.
    ///
    /// # Errors
    /// * `NotFound` - No user with this email
    /// * `DatabaseError` / `StoreUnavailable` - Store operation failed
    async fn get_profile(&self, caller: &EmailAddress) -> Result<User, UserError>;

    /// Overwrite the profile fields of the authenticated caller.
    ///
    /// # Returns
    /// Updated user entity
    ///
    /// # Errors
    /// * `NotFound` - No user with this email
    /// * `DatabaseError` / `StoreUnavailable` - Store operation failed
    async fn update_profile(
        &self,
        caller: &EmailAddress,
        command: UpdateProfileCommand,
    ) -> Result<User, UserError>;
}

/// Persistence operations for user aggregate (credential store).
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// The existence check and the insert are one atomic step: the store
    /// enforces uniqueness of the email.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` / `StoreUnavailable` - Store operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` / `StoreUnavailable` - Store operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;

    /// Apply a partial profile change to an existing user in one write.
    ///
    /// Only the fields set in `changes` are written. Never writes the
    /// password hash.
    ///
    /// # Returns
    /// User entity as stored after the write
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` / `StoreUnavailable` - Store operation failed
    async fn update_profile(
        &self,
        email: &EmailAddress,
        changes: UpdateProfileCommand,
    ) -> Result<User, UserError>;
}
