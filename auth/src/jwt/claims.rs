use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Session token claims.
///
/// Carries the authenticated identity (`sub`) and an absolute expiry.
/// Nothing else is embedded; in particular never the signing secret.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (authenticated identity, e.g. an email address)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for `subject` valid for `ttl` starting now.
    ///
    /// # Arguments
    /// * `subject` - Identity asserted by the token
    /// * `ttl` - Lifetime of the token
    ///
    /// # Returns
    /// Claims with `iat = now` and `exp = now + ttl`
    pub fn for_subject(subject: impl ToString, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Override the issued-at timestamp.
    pub fn with_issued_at(mut self, iat: i64) -> Self {
        self.iat = iat;
        self
    }

    /// Override the expiration timestamp.
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = exp;
        self
    }

    /// Subject as string slice.
    pub fn subject(&self) -> &str {
        &self.sub
    }

    /// Check if the token is expired at `current_timestamp`.
    ///
    /// A token is still valid during the second it expires in.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
