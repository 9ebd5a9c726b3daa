use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::user::errors::EmailError;
use crate::user::errors::PasswordError;

/// User aggregate entity.
///
/// The email is the natural key; at most one user exists per email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub email: EmailAddress,
    pub profile: Profile,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Mutable, non-sensitive profile fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub country: String,
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser. Comparison is
/// case-sensitive: `A@x.com` and `a@x.com` are different identities.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Arguments
    /// * `email` - Raw email string
    ///
    /// # Returns
    /// Validated EmailAddress value object
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password as received from the client.
///
/// Only lives long enough to be hashed or verified; `Debug` never prints it.
#[derive(Clone)]
pub struct Password(String);

impl Password {
    /// Create a new non-empty password.
    ///
    /// # Errors
    /// * `Empty` - Password is an empty string
    pub fn new(password: String) -> Result<Self, PasswordError> {
        if password.is_empty() {
            Err(PasswordError::Empty)
        } else {
            Ok(Self(password))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Command to register a new user with domain types
#[derive(Debug)]
pub struct SignupCommand {
    pub email: EmailAddress,
    pub profile: Profile,
    pub password: Password,
}

impl SignupCommand {
    /// Construct a new signup command.
    ///
    /// # Arguments
    /// * `email` - Validated email address
    /// * `profile` - Profile fields
    /// * `password` - Plain text password (will be hashed by service)
    pub fn new(email: EmailAddress, profile: Profile, password: Password) -> Self {
        Self {
            email,
            profile,
            password,
        }
    }
}

/// Command to log in with an email and password.
#[derive(Debug)]
pub struct LoginCommand {
    pub email: EmailAddress,
    pub password: String,
}

/// Command to overwrite the caller's profile fields.
///
/// Fields left as `None` keep their stored value. The password hash is not
/// reachable through this command.
#[derive(Debug, Default)]
pub struct UpdateProfileCommand {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub country: Option<String>,
}

impl UpdateProfileCommand {
    pub fn apply(self, profile: &mut Profile) {
        if let Some(first_name) = self.first_name {
            profile.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            profile.last_name = last_name;
        }
        if let Some(country) = self.country {
            profile.country = country;
        }
    }
}

/// Outcome of a successful login.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}
