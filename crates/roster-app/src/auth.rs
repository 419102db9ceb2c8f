use serde::Deserialize;

use crate::error::{RosterError, RosterResult};

/// The single administrator account guarding the dashboard.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AdminCredentials {
    /// Login email.
    pub email: String,
    /// Login password, compared verbatim.
    pub password: String,
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            email: "admin@hr.com".into(),
            password: "admin123".into(),
        }
    }
}

impl AdminCredentials {
    /// Check a login attempt.
    ///
    /// # Errors
    /// Returns [`RosterError::AuthenticationFailed`] unless both values match exactly.
    pub fn verify(&self, email: &str, password: &str) -> RosterResult<()> {
        if email == self.email && password == self.password {
            Ok(())
        } else {
            Err(RosterError::AuthenticationFailed)
        }
    }
}
