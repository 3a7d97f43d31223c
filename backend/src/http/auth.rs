//! Static-credential admin gate.
//!
//! Authentication here is deliberately a fixed username/password check in
//! front of the dashboard, not an identity system. The password never has
//! a compiled-in default: without `ADMIN_PASSWORD` the gate stays closed.

use std::env;

#[derive(Debug, Clone)]
pub struct AdminCredentials {
    username: String,
    password: Option<String>,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Some(password.into()),
        }
    }

    /// Load the gate configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `ADMIN_USERNAME` (optional, default: `admin`)
    /// - `ADMIN_PASSWORD` (optional): when unset, every login attempt is
    ///   rejected and the server logs a startup warning
    pub fn from_env() -> Self {
        Self {
            username: env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            password: env::var("ADMIN_PASSWORD").ok().filter(|p| !p.is_empty()),
        }
    }

    /// Whether a password has been configured at all.
    pub fn is_configured(&self) -> bool {
        self.password.is_some()
    }

    /// Check a login attempt against the configured credentials.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        match &self.password {
            Some(expected) => username == self.username && password == expected,
            None => false,
        }
    }
}
